//! Reorder command: apply a drag-reorder to a column snapshot.

use std::path::PathBuf;

use clap::Args;
use dayplan_core::ranking::{reorder, ColumnEntry};

use crate::common::{load_json, print_json, CliResult};

#[derive(Args)]
pub struct ReorderArgs {
    /// Path to a JSON array of column entries in display order ("-" for stdin)
    pub snapshot: PathBuf,
    /// Task to move
    pub task_id: String,
    /// Target position within the column
    #[arg(long)]
    pub index: usize,
    /// Column or stage the order belongs to
    #[arg(long, default_value = "today")]
    pub container: String,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ReorderArgs) -> CliResult {
    let order: Vec<ColumnEntry> = load_json(&args.snapshot)?;
    let new_order = reorder(&args.task_id, &args.container, args.index, &order)?;

    if args.json {
        return print_json(&new_order);
    }

    for assignment in &new_order {
        println!("{:>8.1}  {}", assignment.manual_rank, assignment.id);
    }
    Ok(())
}
