//! Daily capacity planning over pomodoro estimates.
//!
//! Aggregates the estimated effort of the tasks slated for "today" against
//! a fixed minute budget and classifies the remaining slack into a
//! tri-state signal. Also flags tasks whose actual effort overran their
//! estimate, as a split-or-re-estimate suggestion; overruns are
//! informational and never change the score or the capacity accounting.

use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Fixed pomodoro work unit in minutes.
pub const POMODORO_MINUTES: u32 = 25;

/// Default daily capacity when the external policy provides none.
pub const DEFAULT_DAILY_CAPACITY_MINUTES: u32 = 480;

/// Remaining slack below this threshold turns the signal amber.
pub const AMBER_THRESHOLD_MINUTES: i64 = 15;

/// Actual minutes beyond estimate × this ratio count as an overrun.
pub const OVERRUN_RATIO: f64 = 1.3;

/// Tri-state slack signal for the day.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CapacityStatus {
    /// At least 15 minutes of slack remain
    Green,
    /// Slack in [0, 15) minutes
    Amber,
    /// Over budget
    Red,
}

impl CapacityStatus {
    /// Classify from remaining minutes.
    pub fn from_remaining(remaining: i64) -> Self {
        if remaining >= AMBER_THRESHOLD_MINUTES {
            CapacityStatus::Green
        } else if remaining >= 0 {
            CapacityStatus::Amber
        } else {
            CapacityStatus::Red
        }
    }
}

/// Result of evaluating a task set against the daily budget.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CapacityPlan {
    /// Budget the plan was evaluated against
    pub capacity_minutes: u32,
    /// Total estimated cost of the not-done tasks, in minutes
    pub cost_minutes: u32,
    /// Budget minus cost; negative when over
    pub remaining_minutes: i64,
    /// Tri-state slack signal
    pub status: CapacityStatus,
    /// Ids of tasks whose actual effort overran the estimate
    pub overrun_task_ids: Vec<String>,
}

/// Evaluate the tasks slated for today against a minute budget.
///
/// Done tasks are excluded defensively; blocked tasks are expected to be
/// filtered out by the ranking service before they reach the active queue,
/// but are costed if supplied.
pub fn plan_capacity(tasks: &[Task], capacity_minutes: u32) -> CapacityPlan {
    let cost_minutes: u32 = tasks
        .iter()
        .filter(|t| !t.is_done())
        .map(Task::estimated_minutes)
        .sum();

    let remaining_minutes = i64::from(capacity_minutes) - i64::from(cost_minutes);

    let overrun_task_ids = tasks
        .iter()
        .filter(|t| is_overrun(t))
        .map(|t| t.id.clone())
        .collect();

    CapacityPlan {
        capacity_minutes,
        cost_minutes,
        remaining_minutes,
        status: CapacityStatus::from_remaining(remaining_minutes),
        overrun_task_ids,
    }
}

/// Whether a task's actual effort overran its estimate.
///
/// A task with a zero estimate never overruns.
pub fn is_overrun(task: &Task) -> bool {
    if task.estimated_pomodoros == 0 {
        return false;
    }
    let allowed = f64::from(task.estimated_minutes()) * OVERRUN_RATIO;
    f64::from(task.total_minutes_spent) > allowed
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskStatus;
    use chrono::Utc;
    use proptest::prelude::*;

    fn estimated(id: &str, pomodoros: u32) -> Task {
        Task::new(id, format!("Task {id}"), Utc::now()).with_estimate(pomodoros)
    }

    #[test]
    fn test_green_day() {
        let tasks = vec![estimated("a", 4), estimated("b", 3), estimated("c", 2)];
        let plan = plan_capacity(&tasks, 480);
        assert_eq!(plan.cost_minutes, 225);
        assert_eq!(plan.remaining_minutes, 255);
        assert_eq!(plan.status, CapacityStatus::Green);
        assert!(plan.overrun_task_ids.is_empty());
    }

    #[test]
    fn test_status_thresholds() {
        assert_eq!(CapacityStatus::from_remaining(15), CapacityStatus::Green);
        assert_eq!(CapacityStatus::from_remaining(14), CapacityStatus::Amber);
        assert_eq!(CapacityStatus::from_remaining(0), CapacityStatus::Amber);
        assert_eq!(CapacityStatus::from_remaining(-1), CapacityStatus::Red);
    }

    #[test]
    fn test_over_budget_is_red() {
        let tasks = vec![estimated("a", 12), estimated("b", 10)];
        let plan = plan_capacity(&tasks, 480);
        assert_eq!(plan.remaining_minutes, -70);
        assert_eq!(plan.status, CapacityStatus::Red);
    }

    #[test]
    fn test_done_tasks_do_not_cost() {
        let mut done = estimated("a", 8);
        done.status = TaskStatus::Done;
        let tasks = vec![done, estimated("b", 2)];
        let plan = plan_capacity(&tasks, 480);
        assert_eq!(plan.cost_minutes, 50);
    }

    #[test]
    fn test_empty_day_is_green() {
        let plan = plan_capacity(&[], DEFAULT_DAILY_CAPACITY_MINUTES);
        assert_eq!(plan.cost_minutes, 0);
        assert_eq!(plan.remaining_minutes, 480);
        assert_eq!(plan.status, CapacityStatus::Green);
    }

    #[test]
    fn test_overrun_threshold() {
        // 2 pomodoros = 50 min estimate; 1.3x allowance = 65 min
        let mut task = estimated("a", 2);
        task.total_minutes_spent = 65;
        assert!(!is_overrun(&task));
        task.total_minutes_spent = 66;
        assert!(is_overrun(&task));
    }

    #[test]
    fn test_zero_estimate_never_overruns() {
        let mut task = estimated("a", 0);
        task.total_minutes_spent = 10_000;
        assert!(!is_overrun(&task));
    }

    #[test]
    fn test_overruns_reported_but_not_costed_differently() {
        let mut overran = estimated("a", 1);
        overran.total_minutes_spent = 200;
        let tasks = vec![overran, estimated("b", 1)];
        let plan = plan_capacity(&tasks, 480);
        assert_eq!(plan.overrun_task_ids, vec!["a".to_string()]);
        // Cost still comes from estimates only
        assert_eq!(plan.cost_minutes, 50);
    }

    proptest! {
        #[test]
        fn prop_status_monotone_in_remaining(remaining in -10_000i64..10_000) {
            let status = CapacityStatus::from_remaining(remaining);
            match status {
                CapacityStatus::Green => prop_assert!(remaining >= 15),
                CapacityStatus::Amber => prop_assert!((0..15).contains(&remaining)),
                CapacityStatus::Red => prop_assert!(remaining < 0),
            }
        }

        #[test]
        fn prop_cost_is_sum_of_estimates(estimates in proptest::collection::vec(0u32..20, 0..12)) {
            let tasks: Vec<Task> = estimates
                .iter()
                .enumerate()
                .map(|(i, &p)| estimated(&format!("t{i}"), p))
                .collect();
            let plan = plan_capacity(&tasks, 480);
            let expected: u32 = estimates.iter().map(|p| p * POMODORO_MINUTES).sum();
            prop_assert_eq!(plan.cost_minutes, expected);
            prop_assert_eq!(plan.remaining_minutes, 480 - i64::from(expected));
        }
    }
}
