//! Today-queue partitioning and manual reordering.
//!
//! `rank_today` splits a task snapshot into four disjoint groups with the
//! precedence blocked > frog > rock > normal, each sorted by descending
//! score with ties broken by ascending manual rank and then task id for
//! determinism. The rock cap (3) and frog uniqueness (1) are UI-level
//! conventions: the engine reports the counts and leaves warning to the
//! caller.
//!
//! `reorder` is the pure half of drag-and-drop: it takes a column snapshot
//! and returns a fresh rank assignment for the whole column, leaving
//! commit/rollback entirely to the caller's transaction boundary. If two
//! reorders race for one column, last writer wins at that boundary; the
//! engine only guarantees a consistent assignment for the snapshot it saw.

use std::cmp::Ordering;
use std::collections::HashSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::ReorderError;
use crate::score::{ScoreCalculator, ScoreWeights};
use crate::task::{Task, TaskStatus};

/// Soft cap on rocks per day, reported but not enforced.
pub const ROCK_SOFT_CAP: usize = 3;

/// Rank spacing used when a column is reindexed.
pub const RANK_STEP: f64 = 10.0;

/// A task paired with its computed ranking score.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredTask {
    /// Score computed at ranking time
    pub score: f64,
    /// The task snapshot
    pub task: Task,
}

/// The ordered "today" queue, partitioned into disjoint groups.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodayBoard {
    /// Frog-flagged tasks, as supplied (at most one by convention)
    pub frogs: Vec<ScoredTask>,
    /// Rock-flagged tasks
    pub rocks: Vec<ScoredTask>,
    /// Everything else that is workable
    pub normal: Vec<ScoredTask>,
    /// Blocked tasks, excluded from the active queue
    pub blocked: Vec<ScoredTask>,
}

impl TodayBoard {
    /// Total number of tasks across all groups.
    pub fn len(&self) -> usize {
        self.frogs.len() + self.rocks.len() + self.normal.len() + self.blocked.len()
    }

    /// Whether the board is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether more rocks were supplied than the advisory daily cap.
    pub fn rock_cap_exceeded(&self) -> bool {
        self.rocks.len() > ROCK_SOFT_CAP
    }

    /// Whether more than one frog was supplied.
    pub fn multiple_frogs(&self) -> bool {
        self.frogs.len() > 1
    }

    /// Tasks in the active queue (everything except blocked), in group order.
    pub fn active_tasks(&self) -> impl Iterator<Item = &Task> {
        self.frogs
            .iter()
            .chain(self.rocks.iter())
            .chain(self.normal.iter())
            .map(|s| &s.task)
    }
}

/// Ranking service: scores and partitions a snapshot of today's tasks.
pub struct RankingService {
    calculator: ScoreCalculator,
}

impl RankingService {
    /// Create a service with the default score weights.
    pub fn new() -> Self {
        Self {
            calculator: ScoreCalculator::new(),
        }
    }

    /// Create with custom score weights.
    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self {
            calculator: ScoreCalculator::with_weights(weights),
        }
    }

    /// The calculator backing this service, for shared score previews.
    pub fn calculator(&self) -> &ScoreCalculator {
        &self.calculator
    }

    /// Partition and sort today's tasks.
    pub fn rank_today(&self, tasks: &[Task], now: DateTime<Utc>) -> TodayBoard {
        let mut frogs = Vec::new();
        let mut rocks = Vec::new();
        let mut normal = Vec::new();
        let mut blocked = Vec::new();

        for task in tasks {
            let scored = ScoredTask {
                score: self.calculator.score(task, now),
                task: task.clone(),
            };
            if is_blocked(task) {
                blocked.push(scored);
            } else if task.is_frog {
                frogs.push(scored);
            } else if task.is_rock {
                rocks.push(scored);
            } else {
                normal.push(scored);
            }
        }

        for group in [&mut frogs, &mut rocks, &mut normal, &mut blocked] {
            group.sort_by(compare_scored);
        }

        TodayBoard {
            frogs,
            rocks,
            normal,
            blocked,
        }
    }
}

impl Default for RankingService {
    fn default() -> Self {
        Self::new()
    }
}

/// Partition and sort with the default weights.
pub fn rank_today(tasks: &[Task], now: DateTime<Utc>) -> TodayBoard {
    RankingService::new().rank_today(tasks, now)
}

fn is_blocked(task: &Task) -> bool {
    task.blocked || task.status == TaskStatus::Blocked
}

/// Descending score, then ascending manual rank, then id.
fn compare_scored(a: &ScoredTask, b: &ScoredTask) -> Ordering {
    b.score
        .partial_cmp(&a.score)
        .unwrap_or(Ordering::Equal)
        .then_with(|| {
            a.task
                .manual_rank
                .partial_cmp(&b.task.manual_rank)
                .unwrap_or(Ordering::Equal)
        })
        .then_with(|| a.task.id.cmp(&b.task.id))
}

/// One entry of a column's current display order.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ColumnEntry {
    /// Task id
    pub id: String,
    /// Current manual rank
    pub manual_rank: f64,
}

impl From<&Task> for ColumnEntry {
    fn from(task: &Task) -> Self {
        Self {
            id: task.id.clone(),
            manual_rank: task.manual_rank,
        }
    }
}

/// A freshly assigned manual rank for one task of a reordered column.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankAssignment {
    /// Task id
    pub id: String,
    /// New manual rank; lower sorts first
    pub manual_rank: f64,
    /// Column or stage the assignment belongs to
    pub container: String,
}

/// Apply a drag-reorder to a column snapshot.
///
/// `current_order` is the column's tasks in display order and must contain
/// `task_id`; `target_index` is the moved task's position in the resulting
/// order. The whole column is reindexed with evenly spaced ranks, so the
/// moved task's rank always lies strictly between its new neighbors'.
///
/// The function is pure: on error nothing is produced and the caller's
/// order is untouched, so a failed persistence attempt is trivially
/// revertible. A no-op move returns the input sequence unchanged (modulo
/// reindexed rank values).
pub fn reorder(
    task_id: &str,
    target_container: &str,
    target_index: usize,
    current_order: &[ColumnEntry],
) -> Result<Vec<RankAssignment>, ReorderError> {
    let mut seen = HashSet::new();
    for entry in current_order {
        if !seen.insert(entry.id.as_str()) {
            return Err(ReorderError::DuplicateTask {
                id: entry.id.clone(),
            });
        }
    }

    let from_index = current_order
        .iter()
        .position(|e| e.id == task_id)
        .ok_or_else(|| ReorderError::TaskNotFound {
            id: task_id.to_string(),
        })?;

    if target_index >= current_order.len() {
        return Err(ReorderError::IndexOutOfBounds {
            index: target_index,
            len: current_order.len(),
        });
    }

    let mut ids: Vec<&ColumnEntry> = current_order.iter().collect();
    let moved = ids.remove(from_index);
    ids.insert(target_index, moved);

    Ok(ids
        .iter()
        .enumerate()
        .map(|(i, entry)| RankAssignment {
            id: entry.id.clone(),
            manual_rank: (i as f64 + 1.0) * RANK_STEP,
            container: target_container.to_string(),
        })
        .collect())
}
