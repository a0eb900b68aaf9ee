//! Score command: compute ranking scores for a task snapshot.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use dayplan_core::score::{display_score_out_of_100, ScoreCalculator};
use dayplan_core::task::Task;

use crate::common::{load_json, load_weights, print_json, CliResult};

#[derive(Args)]
pub struct ScoreArgs {
    /// Path to a JSON array of tasks ("-" for stdin)
    pub snapshot: PathBuf,
    /// TOML file overriding the default score weights
    #[arg(long)]
    pub weights: Option<PathBuf>,
    /// Show the full multiplier breakdown per task
    #[arg(long)]
    pub breakdown: bool,
    /// Label scores on the legacy /100 scale
    #[arg(long)]
    pub out_of_100: bool,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ScoreArgs) -> CliResult {
    let tasks: Vec<Task> = load_json(&args.snapshot)?;
    let weights = load_weights(args.weights.as_deref())?;
    let calculator = ScoreCalculator::with_weights(weights);
    let now = Utc::now();

    let breakdowns: Vec<_> = tasks
        .iter()
        .map(|t| (t, calculator.breakdown(t, now)))
        .collect();

    if args.json {
        let rows: Vec<serde_json::Value> = breakdowns
            .iter()
            .map(|(task, b)| {
                serde_json::json!({
                    "id": task.id,
                    "title": task.title,
                    "breakdown": b,
                })
            })
            .collect();
        return print_json(&rows);
    }

    for (task, b) in &breakdowns {
        let shown = if args.out_of_100 {
            format!("{:>5.1}/100", display_score_out_of_100(b.score))
        } else {
            format!("{:>4.1}", b.score)
        };
        println!("{shown}  {} ({})", task.title, task.id);
        if args.breakdown {
            println!("       base {:.2}  urgency {}", b.base, b.urgency);
            for term in &b.multipliers {
                println!("       x{:.2}  {}", term.factor, term.name);
            }
        }
    }
    Ok(())
}
