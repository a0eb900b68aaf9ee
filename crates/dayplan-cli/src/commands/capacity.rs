//! Capacity command: evaluate a snapshot against the daily budget.

use std::path::PathBuf;

use clap::Args;
use dayplan_core::capacity::{plan_capacity, CapacityStatus, DEFAULT_DAILY_CAPACITY_MINUTES};
use dayplan_core::task::Task;

use crate::common::{load_json, print_json, CliResult};

#[derive(Args)]
pub struct CapacityArgs {
    /// Path to a JSON array of today's tasks ("-" for stdin)
    pub snapshot: PathBuf,
    /// Daily budget in minutes
    #[arg(long, default_value_t = DEFAULT_DAILY_CAPACITY_MINUTES)]
    pub capacity_minutes: u32,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: CapacityArgs) -> CliResult {
    let tasks: Vec<Task> = load_json(&args.snapshot)?;
    let plan = plan_capacity(&tasks, args.capacity_minutes);

    if args.json {
        return print_json(&plan);
    }

    let status = match plan.status {
        CapacityStatus::Green => "green",
        CapacityStatus::Amber => "amber",
        CapacityStatus::Red => "red",
    };
    println!(
        "cost {} min / budget {} min, remaining {} min [{status}]",
        plan.cost_minutes, plan.capacity_minutes, plan.remaining_minutes
    );
    for id in &plan.overrun_task_ids {
        println!("overrun: task {id} exceeded its estimate; consider splitting or re-estimating");
    }
    Ok(())
}
