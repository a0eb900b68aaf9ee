//! Deadline-distance urgency derivation.
//!
//! Maps the distance between a due date and "today" onto a 0-10 urgency
//! signal using a fixed staircase. Evaluation is date-only: time of day is
//! ignored, and anything due today or earlier is maximally urgent.

use chrono::NaiveDate;

/// Urgency assigned to tasks with no due date and no manual override.
const NO_CONSTRAINT_URGENCY: u8 = 0;

/// Derive the 0-10 urgency signal for a due date.
///
/// Total over all day deltas, including negative (overdue is 10, never
/// higher). When `due` is absent, the caller's manual override is used,
/// clamped to [0, 10]; absent override means no urgency constraint.
pub fn derive_urgency(due: Option<NaiveDate>, manual_override: Option<i32>, today: NaiveDate) -> u8 {
    let Some(due) = due else {
        return manual_override
            .map(|v| v.clamp(0, 10) as u8)
            .unwrap_or(NO_CONSTRAINT_URGENCY);
    };

    let days_remaining = (due - today).num_days();
    urgency_from_days_remaining(days_remaining)
}

/// The urgency staircase over whole days remaining.
pub fn urgency_from_days_remaining(days_remaining: i64) -> u8 {
    match days_remaining {
        d if d <= 0 => 10,
        1 => 9,
        2 => 8,
        3 => 7,
        4..=5 => 6,
        6..=7 => 5,
        8..=14 => 4,
        15..=30 => 3,
        _ => 2,
    }
}
