//! Time-boxed score boost evaluation.
//!
//! A boost is a temporary amplifier with an expiry timestamp. Expiry is
//! purely time-based and evaluated lazily at score-computation time; no
//! background process and no persisted state transition are involved.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::task::Task;

/// Ceiling for the applied boost factor.
pub const MAX_BOOST_FACTOR: f64 = 1.20;

/// Result of evaluating a task's boost at an instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoostState {
    /// Whether the boost applies at the evaluation instant
    pub active: bool,
    /// Effective multiplier, always in [1.0, 1.20]
    pub factor: f64,
}

impl BoostState {
    /// The neutral state: no amplification.
    pub fn inactive() -> Self {
        Self {
            active: false,
            factor: 1.0,
        }
    }
}

/// Evaluate whether a boost is active and with what effective factor.
///
/// Active iff `boost_until` is set, strictly in the future, and the task is
/// not blocked. The stored factor is clamped into [1.0, 1.20]; a missing
/// factor on an otherwise-active boost is treated as neutral 1.0.
pub fn evaluate(
    boost_until: Option<DateTime<Utc>>,
    boost_factor: Option<f64>,
    blocked: bool,
    now: DateTime<Utc>,
) -> BoostState {
    let Some(until) = boost_until else {
        return BoostState::inactive();
    };
    if blocked || until <= now {
        return BoostState::inactive();
    }

    let factor = boost_factor.unwrap_or(1.0).max(1.0).min(MAX_BOOST_FACTOR);
    BoostState { active: true, factor }
}

/// Evaluate a task's boost fields directly.
pub fn evaluate_task(task: &Task, now: DateTime<Utc>) -> BoostState {
    evaluate(task.boost_until, task.boost_factor, task.blocked, now)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_no_expiry_means_inactive() {
        let now = Utc::now();
        let state = evaluate(None, Some(1.15), false, now);
        assert!(!state.active);
        assert_eq!(state.factor, 1.0);
    }

    #[test]
    fn test_future_expiry_is_active() {
        let now = Utc::now();
        let state = evaluate(Some(now + Duration::hours(2)), Some(1.15), false, now);
        assert!(state.active);
        assert_eq!(state.factor, 1.15);
    }

    #[test]
    fn test_expiry_is_strict() {
        let now = Utc::now();
        // Exactly at the boundary counts as expired
        assert!(!evaluate(Some(now), Some(1.15), false, now).active);
        assert!(!evaluate(Some(now - Duration::seconds(1)), Some(1.15), false, now).active);
    }

    #[test]
    fn test_blocked_suppresses_boost() {
        let now = Utc::now();
        let state = evaluate(Some(now + Duration::hours(1)), Some(1.15), true, now);
        assert!(!state.active);
    }

    #[test]
    fn test_factor_clamped_to_ceiling() {
        let now = Utc::now();
        let state = evaluate(Some(now + Duration::hours(1)), Some(2.5), false, now);
        assert_eq!(state.factor, MAX_BOOST_FACTOR);
    }

    #[test]
    fn test_factor_never_below_one() {
        let now = Utc::now();
        let state = evaluate(Some(now + Duration::hours(1)), Some(0.4), false, now);
        assert_eq!(state.factor, 1.0);

        let missing = evaluate(Some(now + Duration::hours(1)), None, false, now);
        assert!(missing.active);
        assert_eq!(missing.factor, 1.0);
    }
}
