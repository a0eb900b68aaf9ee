//! Rank command: partition and order the today queue.

use std::path::PathBuf;

use chrono::Utc;
use clap::Args;
use dayplan_core::ranking::{RankingService, ScoredTask};
use dayplan_core::task::Task;

use crate::common::{load_json, load_weights, print_json, CliResult};

#[derive(Args)]
pub struct RankArgs {
    /// Path to a JSON array of tasks ("-" for stdin)
    pub snapshot: PathBuf,
    /// TOML file overriding the default score weights
    #[arg(long)]
    pub weights: Option<PathBuf>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RankArgs) -> CliResult {
    let tasks: Vec<Task> = load_json(&args.snapshot)?;
    let weights = load_weights(args.weights.as_deref())?;
    let service = RankingService::with_weights(weights);
    let board = service.rank_today(&tasks, Utc::now());

    if args.json {
        return print_json(&board);
    }

    print_group("Frog", &board.frogs);
    print_group("Rocks", &board.rocks);
    print_group("Normal", &board.normal);
    print_group("Blocked", &board.blocked);

    if board.rock_cap_exceeded() {
        println!("warning: {} rocks supplied (soft cap is 3)", board.rocks.len());
    }
    if board.multiple_frogs() {
        println!("warning: {} frogs supplied (convention is 1)", board.frogs.len());
    }
    Ok(())
}

fn print_group(label: &str, group: &[ScoredTask]) {
    if group.is_empty() {
        return;
    }
    println!("{label}:");
    for entry in group {
        println!("  {:>4.1}  {} ({})", entry.score, entry.task.title, entry.task.id);
    }
}
