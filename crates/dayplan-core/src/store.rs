//! External collaborator seams and the planner facade.
//!
//! The engine owns no data: task and project records live in the
//! surrounding application's stores, consumed here through narrow traits.
//! `PlannerEngine` composes a store and a capacity policy into the
//! per-request views the UI layer renders, so previews and authoritative
//! results always come from the same calculator.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::capacity::{plan_capacity, CapacityPlan, DEFAULT_DAILY_CAPACITY_MINUTES};
use crate::project::{project_progress, Project, ProjectProgress};
use crate::ranking::{RankingService, TodayBoard};
use crate::score::{ScoreBreakdown, ScoreWeights};
use crate::task::Task;

/// Read access to externally-owned task and project records.
pub trait TaskStore {
    /// Tasks slated for today.
    fn list_tasks_for_today(&self) -> Vec<Task>;

    /// All currently blocked tasks, regardless of day.
    fn list_blocked_tasks(&self) -> Vec<Task>;

    /// A project with its stages and objectives.
    fn get_project(&self, id: &str) -> Option<Project>;

    /// Tasks linked to a project, for the by-tasks rollup.
    fn list_tasks_for_project(&self, project_id: &str) -> Vec<Task>;
}

/// Provider of the daily time budget.
pub trait CapacityPolicy {
    /// Today's budget in minutes.
    fn daily_capacity_minutes(&self) -> u32 {
        DEFAULT_DAILY_CAPACITY_MINUTES
    }
}

/// The default external policy: a fixed 480-minute day.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCapacityPolicy;

impl CapacityPolicy for DefaultCapacityPolicy {}

/// A fixed budget other than the default.
#[derive(Debug, Clone, Copy)]
pub struct FixedCapacityPolicy(pub u32);

impl CapacityPolicy for FixedCapacityPolicy {
    fn daily_capacity_minutes(&self) -> u32 {
        self.0
    }
}

/// Ranked board plus capacity evaluation for one snapshot instant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayView {
    /// Partitioned, sorted queue
    pub board: TodayBoard,
    /// Capacity plan over the active (non-blocked) queue
    pub capacity: CapacityPlan,
}

/// Per-request planning facade over a store and a capacity policy.
pub struct PlannerEngine<S, P> {
    store: S,
    policy: P,
    ranking: RankingService,
}

impl<S: TaskStore, P: CapacityPolicy> PlannerEngine<S, P> {
    /// Create an engine with the default score weights.
    pub fn new(store: S, policy: P) -> Self {
        Self {
            store,
            policy,
            ranking: RankingService::new(),
        }
    }

    /// Create with custom score weights.
    pub fn with_weights(store: S, policy: P, weights: ScoreWeights) -> Self {
        Self {
            store,
            policy,
            ranking: RankingService::with_weights(weights),
        }
    }

    /// Rank today's tasks and evaluate capacity in one snapshot pass.
    ///
    /// Blocked tasks appear on the board but never contribute to the
    /// capacity cost of the active queue.
    pub fn today_view(&self, now: DateTime<Utc>) -> TodayView {
        let tasks = self.store.list_tasks_for_today();
        let board = self.ranking.rank_today(&tasks, now);
        let active: Vec<Task> = board.active_tasks().cloned().collect();
        let capacity = plan_capacity(&active, self.policy.daily_capacity_minutes());

        TodayView { board, capacity }
    }

    /// Blocked tasks with their scores, for the parked-work display.
    pub fn blocked_view(&self, now: DateTime<Utc>) -> TodayBoard {
        let tasks = self.store.list_blocked_tasks();
        self.ranking.rank_today(&tasks, now)
    }

    /// Project rollup and health, recomputed from the store's records.
    pub fn project_progress(&self, project_id: &str, today: NaiveDate) -> Option<ProjectProgress> {
        let project = self.store.get_project(project_id)?;
        let linked = self.store.list_tasks_for_project(project_id);
        Some(project_progress(&project, &linked, today))
    }

    /// Score preview for a single (possibly unsaved) task.
    ///
    /// Form previews go through here so they cannot drift from the
    /// authoritative ranking score.
    pub fn score_preview(&self, task: &Task, now: DateTime<Utc>) -> ScoreBreakdown {
        self.ranking.calculator().breakdown(task, now)
    }
}
