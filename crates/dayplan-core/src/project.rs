//! Project progress rollup and health classification.
//!
//! Project progress is derived on demand from either linked task
//! completion or objective fulfillment, depending on the project's closing
//! criterion. Stage percentages are independently tracked inputs exposed
//! for mini-progress displays; only the project-level rollup is computed
//! here. Health is a pure function of (status, planned end, progress,
//! today) and is recomputed on every call, never cached as ground truth.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Project lifecycle status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Open,
    Closed,
}

/// How the project decides it is finished.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ClosingCriterion {
    /// Progress follows linked task completion
    ByTasks,
    /// Progress follows objective fulfillment
    ByObjectives,
}

/// An ordered phase within a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Stage {
    /// Stage name
    pub name: String,
    /// Display order; lower comes first
    pub order: u32,
    /// Independently tracked progress, nominally in [0, 100]
    pub progress_pct: f64,
    /// Whether the stage is finished
    pub done: bool,
}

impl Stage {
    /// Progress clamped into [0, 100] for display.
    pub fn clamped_pct(&self) -> f64 {
        self.progress_pct.clamp(0.0, 100.0)
    }
}

/// A yes/no outcome the project commits to.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Objective {
    /// What must be true
    pub description: String,
    /// Whether it is fulfilled
    pub fulfilled: bool,
}

/// A project snapshot as supplied by the external project store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    /// Stable identifier assigned by the project store
    pub id: String,
    /// Display name
    pub name: String,
    /// Lifecycle status
    pub status: ProjectStatus,
    /// Closing criterion driving the rollup
    pub closing_criterion: ClosingCriterion,
    /// Ordered stages
    #[serde(default)]
    pub stages: Vec<Stage>,
    /// Committed objectives
    #[serde(default)]
    pub objectives: Vec<Objective>,
    /// Planned end date, if any
    #[serde(default)]
    pub planned_end: Option<NaiveDate>,
}

impl Project {
    /// Stages sorted by their display order.
    pub fn ordered_stages(&self) -> Vec<&Stage> {
        let mut stages: Vec<&Stage> = self.stages.iter().collect();
        stages.sort_by_key(|s| s.order);
        stages
    }
}

/// Health classification for a project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProjectHealth {
    /// Closed projects
    Completed,
    /// Open and past the planned end date
    Overdue,
    /// Open, ending within a week, under 80% done
    AtRisk,
    /// Open and at least 75% done
    OnTrack,
    /// Everything else
    Normal,
}

/// Computed project-level view.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectProgress {
    /// Rollup percentage in [0, 100]
    pub percent: f64,
    /// Health classification as of `today`
    pub health: ProjectHealth,
}

/// Compute the project-level rollup and health.
///
/// `linked_tasks` is the full set of tasks linked to the project; it is
/// only consulted when the closing criterion is `ByTasks`.
pub fn project_progress(project: &Project, linked_tasks: &[Task], today: NaiveDate) -> ProjectProgress {
    let percent = match project.closing_criterion {
        ClosingCriterion::ByTasks => {
            ratio_pct(
                linked_tasks.iter().filter(|t| t.is_done()).count(),
                linked_tasks.len(),
            )
        }
        ClosingCriterion::ByObjectives => {
            ratio_pct(
                project.objectives.iter().filter(|o| o.fulfilled).count(),
                project.objectives.len(),
            )
        }
    };

    ProjectProgress {
        percent,
        health: classify_health(project.status, project.planned_end, percent, today),
    }
}

/// Pure health classification, in rule order.
pub fn classify_health(
    status: ProjectStatus,
    planned_end: Option<NaiveDate>,
    progress_pct: f64,
    today: NaiveDate,
) -> ProjectHealth {
    if status == ProjectStatus::Closed {
        return ProjectHealth::Completed;
    }

    if let Some(end) = planned_end {
        if today > end {
            return ProjectHealth::Overdue;
        }
        let days_left = (end - today).num_days();
        if days_left <= 7 && progress_pct < 80.0 {
            return ProjectHealth::AtRisk;
        }
    }

    if progress_pct >= 75.0 {
        ProjectHealth::OnTrack
    } else {
        ProjectHealth::Normal
    }
}

fn ratio_pct(done: usize, total: usize) -> f64 {
    if total == 0 {
        0.0
    } else {
        done as f64 / total as f64 * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::TaskStatus;
    use chrono::{Duration, Utc};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 25).unwrap()
    }

    fn project(criterion: ClosingCriterion) -> Project {
        Project {
            id: "p1".to_string(),
            name: "Website relaunch".to_string(),
            status: ProjectStatus::Open,
            closing_criterion: criterion,
            stages: vec![],
            objectives: vec![],
            planned_end: None,
        }
    }

    fn linked_tasks(done: usize, total: usize) -> Vec<Task> {
        (0..total)
            .map(|i| {
                let mut t = Task::new(format!("t{i}"), format!("Task {i}"), Utc::now());
                if i < done {
                    t.status = TaskStatus::Done;
                }
                t
            })
            .collect()
    }

    #[test]
    fn test_by_tasks_rollup() {
        let mut p = project(ClosingCriterion::ByTasks);
        p.planned_end = Some(today() - Duration::days(3));
        let progress = project_progress(&p, &linked_tasks(7, 10), today());
        assert_eq!(progress.percent, 70.0);
        // Overdue wins regardless of progress
        assert_eq!(progress.health, ProjectHealth::Overdue);
    }

    #[test]
    fn test_by_tasks_with_no_tasks_is_zero() {
        let p = project(ClosingCriterion::ByTasks);
        let progress = project_progress(&p, &[], today());
        assert_eq!(progress.percent, 0.0);
        assert_eq!(progress.health, ProjectHealth::Normal);
    }

    #[test]
    fn test_by_objectives_rollup() {
        let mut p = project(ClosingCriterion::ByObjectives);
        p.objectives = vec![
            Objective {
                description: "Launch beta".to_string(),
                fulfilled: true,
            },
            Objective {
                description: "Migrate DNS".to_string(),
                fulfilled: true,
            },
            Objective {
                description: "Retire old host".to_string(),
                fulfilled: false,
            },
        ];
        // Linked tasks are ignored under by_objectives
        let progress = project_progress(&p, &linked_tasks(0, 5), today());
        assert!((progress.percent - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_by_objectives_with_none_is_zero() {
        let p = project(ClosingCriterion::ByObjectives);
        assert_eq!(project_progress(&p, &[], today()).percent, 0.0);
    }

    #[test]
    fn test_closed_is_completed_regardless() {
        let h = classify_health(
            ProjectStatus::Closed,
            Some(today() - Duration::days(30)),
            5.0,
            today(),
        );
        assert_eq!(h, ProjectHealth::Completed);
    }

    #[test]
    fn test_at_risk_window() {
        let end = today() + Duration::days(5);
        assert_eq!(
            classify_health(ProjectStatus::Open, Some(end), 50.0, today()),
            ProjectHealth::AtRisk
        );
        // 80%+ inside the window is not at risk
        assert_eq!(
            classify_health(ProjectStatus::Open, Some(end), 85.0, today()),
            ProjectHealth::OnTrack
        );
        // Same progress far from the end is fine
        assert_eq!(
            classify_health(ProjectStatus::Open, Some(today() + Duration::days(60)), 50.0, today()),
            ProjectHealth::Normal
        );
    }

    #[test]
    fn test_on_track_threshold() {
        assert_eq!(
            classify_health(ProjectStatus::Open, None, 75.0, today()),
            ProjectHealth::OnTrack
        );
        assert_eq!(
            classify_health(ProjectStatus::Open, None, 74.9, today()),
            ProjectHealth::Normal
        );
    }

    #[test]
    fn test_planned_end_boundary_is_not_overdue() {
        // Due today is not past due
        assert_eq!(
            classify_health(ProjectStatus::Open, Some(today()), 90.0, today()),
            ProjectHealth::OnTrack
        );
        assert_eq!(
            classify_health(ProjectStatus::Open, Some(today() - Duration::days(1)), 90.0, today()),
            ProjectHealth::Overdue
        );
    }

    #[test]
    fn test_ordered_stages_sorts_by_order() {
        let mut p = project(ClosingCriterion::ByTasks);
        p.stages = vec![
            Stage {
                name: "Build".to_string(),
                order: 2,
                progress_pct: 40.0,
                done: false,
            },
            Stage {
                name: "Design".to_string(),
                order: 1,
                progress_pct: 130.0,
                done: true,
            },
        ];
        let ordered = p.ordered_stages();
        assert_eq!(ordered[0].name, "Design");
        assert_eq!(ordered[0].clamped_pct(), 100.0);
    }
}
