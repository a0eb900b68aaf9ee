//! Weighted multi-criteria ranking score.
//!
//! Combines the task's rated criteria into a weighted base (MCDA), then
//! applies a fixed chain of multiplicative adjustments: classification
//! flags, active boost, risk/opportunity, age bonus, and finally the
//! blocked penalty. The result is a non-negative float rounded to one
//! decimal, deterministic for a given task snapshot and instant.
//!
//! Every numeric input is coerced into its valid range rather than
//! rejected: criteria clamp to [0, 10], risk to [-0.20, +0.20], the boost
//! factor to [1.0, 1.20]. The calculator is the single authority for the
//! score; display previews must call into it rather than re-deriving.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::boost;
use crate::task::Task;
use crate::urgency::derive_urgency;

/// Multiplier for rock tasks.
pub const ROCK_MULTIPLIER: f64 = 1.15;
/// Multiplier for the day's frog.
pub const FROG_MULTIPLIER: f64 = 1.20;
/// Multiplier for Pareto top-20% tasks.
pub const PARETO_MULTIPLIER: f64 = 1.10;
/// Multiplier for skill/habit KASH tags.
pub const KASH_MULTIPLIER: f64 = 1.10;
/// Penalty multiplier for blocked tasks; applied last, dominates the rest.
pub const BLOCKED_PENALTY: f64 = 0.20;
/// Clamp bound for the risk/opportunity adjustment.
pub const RISK_CLAMP: f64 = 0.20;
/// Age bonus accrued per full week since creation.
pub const AGE_BONUS_PER_WEEK: f64 = 0.05;
/// Ceiling for the accrued age bonus.
pub const AGE_BONUS_CAP: f64 = 0.30;

/// Weights for the five MCDA criteria.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreWeights {
    /// Weight for impact (default 0.30)
    pub impact: f64,
    /// Weight for value (default 0.25)
    pub value: f64,
    /// Weight for urgency (default 0.20)
    pub urgency: f64,
    /// Weight for efficiency (default 0.15)
    pub efficiency: f64,
    /// Weight for stakeholder support (default 0.10)
    pub stakeholder_support: f64,
}

impl ScoreWeights {
    /// Sum of all weights.
    pub fn sum(&self) -> f64 {
        self.impact + self.value + self.urgency + self.efficiency + self.stakeholder_support
    }

    /// Normalize weights to sum to 1.0.
    pub fn normalize(&mut self) {
        let sum = self.sum();
        if sum > 0.0 {
            self.impact /= sum;
            self.value /= sum;
            self.urgency /= sum;
            self.efficiency /= sum;
            self.stakeholder_support /= sum;
        }
    }

    /// Validate that all weights are in [0.0, 1.0].
    pub fn validate(&self) -> Result<(), String> {
        let weights = [
            ("impact", self.impact),
            ("value", self.value),
            ("urgency", self.urgency),
            ("efficiency", self.efficiency),
            ("stakeholder_support", self.stakeholder_support),
        ];

        for (name, weight) in weights {
            if !(0.0..=1.0).contains(&weight) {
                return Err(format!(
                    "Weight '{}' must be in [0.0, 1.0], got {}",
                    name, weight
                ));
            }
        }

        Ok(())
    }
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            impact: 0.30,
            value: 0.25,
            urgency: 0.20,
            efficiency: 0.15,
            stakeholder_support: 0.10,
        }
    }
}

/// One applied multiplier, named for explainability.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiplierTerm {
    /// Term name ("rock", "boost", "blocked", ...)
    pub name: String,
    /// Factor applied, e.g. 1.15 or 0.20
    pub factor: f64,
}

impl MultiplierTerm {
    fn new(name: &str, factor: f64) -> Self {
        Self {
            name: name.to_string(),
            factor,
        }
    }
}

/// Full scoring breakdown for a task at an instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBreakdown {
    /// Derived urgency fed into the weighted base
    pub urgency: u8,
    /// Weighted MCDA base, in [0, 10]
    pub base: f64,
    /// Multipliers applied, in application order
    pub multipliers: Vec<MultiplierTerm>,
    /// Product of all applied multipliers
    pub multiplier: f64,
    /// Final score, rounded to one decimal
    pub score: f64,
}

/// Ranking score calculator.
pub struct ScoreCalculator {
    weights: ScoreWeights,
}

impl ScoreCalculator {
    /// Create a calculator with the default weights.
    pub fn new() -> Self {
        Self {
            weights: ScoreWeights::default(),
        }
    }

    /// Create with custom weights.
    pub fn with_weights(weights: ScoreWeights) -> Self {
        Self { weights }
    }

    /// Get the current weights.
    pub fn weights(&self) -> &ScoreWeights {
        &self.weights
    }

    /// Compute the ranking score for a task at `now`.
    pub fn score(&self, task: &Task, now: DateTime<Utc>) -> f64 {
        self.breakdown(task, now).score
    }

    /// Compute the score with its full explanation.
    pub fn breakdown(&self, task: &Task, now: DateTime<Utc>) -> ScoreBreakdown {
        let urgency = derive_urgency(
            task.due_at.map(|d| d.date_naive()),
            task.manual_urgency_override,
            now.date_naive(),
        );

        let base = self.weights.impact * criterion(task.impact)
            + self.weights.value * criterion(task.value)
            + self.weights.urgency * f64::from(urgency)
            + self.weights.efficiency * criterion(task.efficiency)
            + self.weights.stakeholder_support * criterion(task.stakeholder_support);

        let mut terms = Vec::new();

        if task.is_rock {
            terms.push(MultiplierTerm::new("rock", ROCK_MULTIPLIER));
        }
        if task.is_frog {
            terms.push(MultiplierTerm::new("frog", FROG_MULTIPLIER));
        }
        if task.is_pareto_top20 {
            terms.push(MultiplierTerm::new("pareto_top20", PARETO_MULTIPLIER));
        }
        if task.kash_tag.boosts_score() {
            terms.push(MultiplierTerm::new("kash", KASH_MULTIPLIER));
        }

        let boost = boost::evaluate_task(task, now);
        if boost.active {
            terms.push(MultiplierTerm::new("boost", boost.factor));
        }

        let risk = task.risk_opportunity.clamp(-RISK_CLAMP, RISK_CLAMP);
        if risk != 0.0 {
            terms.push(MultiplierTerm::new("risk_opportunity", 1.0 + risk));
        }

        let age_bonus = age_bonus(task.created_at, now);
        if age_bonus > 0.0 {
            terms.push(MultiplierTerm::new("age", 1.0 + age_bonus));
        }

        // Blocked penalty goes last and dominates everything above.
        if task.blocked {
            terms.push(MultiplierTerm::new("blocked", BLOCKED_PENALTY));
        }

        let multiplier: f64 = terms.iter().map(|t| t.factor).product();
        let score = round_one_decimal(base * multiplier);

        ScoreBreakdown {
            urgency,
            base,
            multipliers: terms,
            multiplier,
            score,
        }
    }
}

impl Default for ScoreCalculator {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience function using the default weights.
pub fn compute_score(task: &Task, now: DateTime<Utc>) -> f64 {
    ScoreCalculator::new().score(task, now)
}

/// Scale a score for "/100" display labels without affecting ordering.
///
/// The authoritative score lives on a 0-10ish scale (practical maximum is
/// under 20 given the multiplier ceilings); legacy displays label it out of
/// 100, so this multiplies by 10 and clamps into [0, 100].
pub fn display_score_out_of_100(score: f64) -> f64 {
    (score * 10.0).clamp(0.0, 100.0)
}

/// Clamp a rated criterion into [0, 10] as a float.
fn criterion(value: i32) -> f64 {
    f64::from(value.clamp(0, 10))
}

/// Age bonus: 0.05 per full week since creation, capped at 0.30.
fn age_bonus(created_at: DateTime<Utc>, now: DateTime<Utc>) -> f64 {
    let days = (now - created_at).num_days().max(0);
    let weeks = days / 7;
    (AGE_BONUS_PER_WEEK * weeks as f64).min(AGE_BONUS_CAP)
}

fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
