//! # Dayplan Core Library
//!
//! Core business logic for the Dayplan personal productivity planner: the
//! task prioritization and capacity scheduling engine. The CRUD surfaces
//! around it (forms, lists, boards) live in the application layer; this
//! crate is a pure, synchronous computation library over caller-supplied
//! snapshots of task and project data.
//!
//! ## Architecture
//!
//! - **Urgency**: deadline distance mapped onto a 0-10 staircase
//! - **Boost**: lazily evaluated, time-boxed score amplifiers
//! - **Score**: weighted multi-criteria base with a fixed multiplier chain
//! - **Capacity**: pomodoro-estimate accounting against a daily budget
//! - **Ranking**: frog/rocks/normal/blocked partitions plus drag-reorder
//! - **Project**: progress rollup and health classification
//!
//! Every function takes its evaluation instant (`now` / `today`) as an
//! explicit parameter; the engine holds no clock, no mutable state, and
//! performs no I/O, so concurrent invocations over overlapping task sets
//! are safe by construction.
//!
//! ## Key Components
//!
//! - [`ScoreCalculator`]: the single authority for ranking scores
//! - [`RankingService`]: today-queue partitioning and ordering
//! - [`PlannerEngine`]: facade composing a [`TaskStore`] and
//!   [`CapacityPolicy`] into per-request views

pub mod boost;
pub mod capacity;
pub mod error;
pub mod project;
pub mod ranking;
pub mod score;
pub mod store;
pub mod task;
pub mod urgency;

pub use boost::BoostState;
pub use capacity::{plan_capacity, CapacityPlan, CapacityStatus, DEFAULT_DAILY_CAPACITY_MINUTES};
pub use error::{CoreError, ReorderError, Result};
pub use project::{
    classify_health, project_progress, ClosingCriterion, Objective, Project, ProjectHealth,
    ProjectProgress, ProjectStatus, Stage,
};
pub use ranking::{
    rank_today, reorder, ColumnEntry, RankAssignment, RankingService, ScoredTask, TodayBoard,
};
pub use score::{compute_score, display_score_out_of_100, ScoreBreakdown, ScoreCalculator, ScoreWeights};
pub use store::{CapacityPolicy, DefaultCapacityPolicy, PlannerEngine, TaskStore, TodayView};
pub use task::{EisenhowerQuadrant, KashTag, MoscowTag, Task, TaskStatus};
pub use urgency::derive_urgency;
