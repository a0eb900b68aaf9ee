//! Task record types for the prioritization engine.
//!
//! Tasks are owned by the surrounding application's task store; this engine
//! only reads snapshots of them and returns computed views (score, ordering,
//! capacity state). Nothing here is persisted by the engine itself.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task lifecycle state.
///
/// The engine treats these as labels supplied by the caller; the only states
/// it interprets are `Blocked` (scoring penalty, separate ranking partition)
/// and `Done` (excluded from capacity accounting).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Captured but not yet planned
    Backlog,
    /// Queued for an upcoming day
    Next,
    /// Slated for today
    Today,
    /// Actively being worked
    InProgress,
    /// Awaiting review
    InReview,
    /// Waiting on an external dependency
    Blocked,
    /// Completed (terminal state)
    Done,
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Backlog
    }
}

/// KASH classification tag (Knowledge / Attitude / Skill / Habit).
///
/// Skill and Habit carry a small score multiplier; the others are
/// informational only.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum KashTag {
    Knowledge,
    Attitude,
    Skill,
    Habit,
    None,
}

impl Default for KashTag {
    fn default() -> Self {
        KashTag::None
    }
}

impl KashTag {
    /// Whether this tag attracts the skill/habit score multiplier.
    pub fn boosts_score(&self) -> bool {
        matches!(self, KashTag::Skill | KashTag::Habit)
    }
}

/// MoSCoW priority tag, informational only in this engine.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MoscowTag {
    Must,
    Should,
    Could,
    Wont,
}

/// Eisenhower quadrant derived from (important, urgent).
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum EisenhowerQuadrant {
    /// Important and urgent: do first
    DoFirst,
    /// Important, not urgent: schedule
    Schedule,
    /// Urgent, not important: delegate
    Delegate,
    /// Neither: eliminate
    Eliminate,
}

impl EisenhowerQuadrant {
    /// Classify from the two booleans.
    pub fn from_flags(important: bool, urgent: bool) -> Self {
        match (important, urgent) {
            (true, true) => EisenhowerQuadrant::DoFirst,
            (true, false) => EisenhowerQuadrant::Schedule,
            (false, true) => EisenhowerQuadrant::Delegate,
            (false, false) => EisenhowerQuadrant::Eliminate,
        }
    }
}

/// A task snapshot as supplied by the external task store.
///
/// Criteria inputs are nominally bounded integers in [0, 10]; the engine
/// clamps them defensively at every use site rather than rejecting records,
/// so out-of-range values never cause a failure.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Stable identifier assigned by the task store
    pub id: String,
    /// Display title
    pub title: String,
    /// Lifecycle state
    #[serde(default)]
    pub status: TaskStatus,

    /// Expected impact if completed (0-10)
    #[serde(default)]
    pub impact: i32,
    /// Value delivered (0-10)
    #[serde(default)]
    pub value: i32,
    /// Effort-to-outcome efficiency (0-10)
    #[serde(default)]
    pub efficiency: i32,
    /// Stakeholder support / external pull (0-10)
    #[serde(default)]
    pub stakeholder_support: i32,
    /// Urgency used when no due date is set (0-10)
    #[serde(default)]
    pub manual_urgency_override: Option<i32>,

    /// One of the day's few high-impact commitments
    #[serde(default)]
    pub is_rock: bool,
    /// The single most important/dreaded task of the day
    #[serde(default)]
    pub is_frog: bool,
    /// Believed to be in the high-leverage 20% subset
    #[serde(default)]
    pub is_pareto_top20: bool,
    /// KASH classification
    #[serde(default)]
    pub kash_tag: KashTag,
    /// MoSCoW tag, informational only
    #[serde(default)]
    pub moscow_tag: Option<MoscowTag>,

    /// Creation timestamp (drives the age bonus)
    pub created_at: DateTime<Utc>,
    /// Due date; evaluated at date granularity
    #[serde(default)]
    pub due_at: Option<DateTime<Utc>>,
    /// Commitment SLA deadline, informational only
    #[serde(default)]
    pub commitment_sla_at: Option<DateTime<Utc>>,
    /// Expiry of the temporary score boost
    #[serde(default)]
    pub boost_until: Option<DateTime<Utc>>,
    /// Boost multiplier, capped at 1.20 when applied
    #[serde(default)]
    pub boost_factor: Option<f64>,

    /// Risk/opportunity adjustment, clamped to [-0.20, +0.20] when applied
    #[serde(default)]
    pub risk_opportunity: f64,

    /// Waiting on an external dependency
    #[serde(default)]
    pub blocked: bool,
    /// Why the task is blocked
    #[serde(default)]
    pub blocked_reason: Option<String>,

    /// Estimated effort in 25-minute pomodoros
    #[serde(default)]
    pub estimated_pomodoros: u32,
    /// Pomodoros completed so far
    #[serde(default)]
    pub completed_pomodoros: u32,
    /// Actual minutes spent across all sessions
    #[serde(default)]
    pub total_minutes_spent: u32,

    /// User-driven ordering; lower sorts first
    #[serde(default)]
    pub manual_rank: f64,
    /// Last computed ranking score, for display only
    #[serde(default)]
    pub cached_score: Option<f64>,
}

impl Task {
    /// Create a task with neutral defaults, for callers and tests.
    pub fn new(id: impl Into<String>, title: impl Into<String>, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            status: TaskStatus::default(),
            impact: 0,
            value: 0,
            efficiency: 0,
            stakeholder_support: 0,
            manual_urgency_override: None,
            is_rock: false,
            is_frog: false,
            is_pareto_top20: false,
            kash_tag: KashTag::None,
            moscow_tag: None,
            created_at,
            due_at: None,
            commitment_sla_at: None,
            boost_until: None,
            boost_factor: None,
            risk_opportunity: 0.0,
            blocked: false,
            blocked_reason: None,
            estimated_pomodoros: 0,
            completed_pomodoros: 0,
            total_minutes_spent: 0,
            manual_rank: 0.0,
            cached_score: None,
        }
    }

    /// Set the four weighted criteria in one call.
    pub fn with_criteria(mut self, impact: i32, value: i32, efficiency: i32, stakeholder_support: i32) -> Self {
        self.impact = impact;
        self.value = value;
        self.efficiency = efficiency;
        self.stakeholder_support = stakeholder_support;
        self
    }

    /// Set the due date.
    pub fn with_due_at(mut self, due_at: DateTime<Utc>) -> Self {
        self.due_at = Some(due_at);
        self
    }

    /// Set the lifecycle state.
    pub fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = status;
        self
    }

    /// Mark as a rock.
    pub fn as_rock(mut self) -> Self {
        self.is_rock = true;
        self
    }

    /// Mark as the day's frog.
    pub fn as_frog(mut self) -> Self {
        self.is_frog = true;
        self
    }

    /// Mark as blocked with a reason.
    pub fn as_blocked(mut self, reason: impl Into<String>) -> Self {
        self.blocked = true;
        self.blocked_reason = Some(reason.into());
        self
    }

    /// Set a time-boxed boost.
    pub fn with_boost(mut self, until: DateTime<Utc>, factor: f64) -> Self {
        self.boost_until = Some(until);
        self.boost_factor = Some(factor);
        self
    }

    /// Set the effort estimate in pomodoros.
    pub fn with_estimate(mut self, pomodoros: u32) -> Self {
        self.estimated_pomodoros = pomodoros;
        self
    }

    /// Set the manual ordering rank.
    pub fn with_manual_rank(mut self, rank: f64) -> Self {
        self.manual_rank = rank;
        self
    }

    /// Whether the task is finished.
    pub fn is_done(&self) -> bool {
        self.status == TaskStatus::Done
    }

    /// Estimated effort in minutes (pomodoros at the fixed 25-minute unit).
    pub fn estimated_minutes(&self) -> u32 {
        self.estimated_pomodoros * crate::capacity::POMODORO_MINUTES
    }

    /// Eisenhower quadrant for the given urgency signal.
    ///
    /// Important means a clamped impact of 5 or more; urgent means a derived
    /// urgency of 7 or more (due within roughly three days). Informational
    /// only, never part of the score.
    pub fn eisenhower(&self, urgency: u8) -> EisenhowerQuadrant {
        let important = self.impact.clamp(0, 10) >= 5;
        let urgent = urgency >= 7;
        EisenhowerQuadrant::from_flags(important, urgent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_task_defaults_are_neutral() {
        let task = Task::new("t1", "Write report", Utc::now());
        assert_eq!(task.status, TaskStatus::Backlog);
        assert_eq!(task.impact, 0);
        assert_eq!(task.kash_tag, KashTag::None);
        assert!(!task.blocked);
        assert_eq!(task.estimated_pomodoros, 0);
    }

    #[test]
    fn test_estimated_minutes_uses_pomodoro_unit() {
        let task = Task::new("t1", "Fix bug", Utc::now()).with_estimate(3);
        assert_eq!(task.estimated_minutes(), 75);
    }

    #[test]
    fn test_kash_boost_applies_to_skill_and_habit_only() {
        assert!(KashTag::Skill.boosts_score());
        assert!(KashTag::Habit.boosts_score());
        assert!(!KashTag::Knowledge.boosts_score());
        assert!(!KashTag::Attitude.boosts_score());
        assert!(!KashTag::None.boosts_score());
    }

    #[test]
    fn test_eisenhower_quadrants() {
        assert_eq!(
            EisenhowerQuadrant::from_flags(true, true),
            EisenhowerQuadrant::DoFirst
        );
        assert_eq!(
            EisenhowerQuadrant::from_flags(true, false),
            EisenhowerQuadrant::Schedule
        );
        assert_eq!(
            EisenhowerQuadrant::from_flags(false, true),
            EisenhowerQuadrant::Delegate
        );
        assert_eq!(
            EisenhowerQuadrant::from_flags(false, false),
            EisenhowerQuadrant::Eliminate
        );
    }

    #[test]
    fn test_eisenhower_from_task_inputs() {
        let task = Task::new("t1", "Quarterly review", Utc::now()).with_criteria(8, 5, 5, 5);
        assert_eq!(task.eisenhower(10), EisenhowerQuadrant::DoFirst);
        assert_eq!(task.eisenhower(2), EisenhowerQuadrant::Schedule);

        let minor = Task::new("t2", "Tidy desktop", Utc::now()).with_criteria(1, 1, 1, 1);
        assert_eq!(minor.eisenhower(9), EisenhowerQuadrant::Delegate);
        assert_eq!(minor.eisenhower(0), EisenhowerQuadrant::Eliminate);
    }

    #[test]
    fn test_task_serde_round_trip_with_missing_optionals() {
        let json = r#"{
            "id": "t1",
            "title": "Draft proposal",
            "created_at": "2026-08-20T09:00:00Z",
            "impact": 7,
            "value": 6
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.impact, 7);
        assert_eq!(task.manual_urgency_override, None);
        assert!(task.due_at.is_none());
        assert_eq!(task.manual_rank, 0.0);
    }
}
