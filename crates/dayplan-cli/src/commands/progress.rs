//! Progress command: project rollup and health.

use std::path::PathBuf;

use chrono::{NaiveDate, Utc};
use clap::Args;
use dayplan_core::project::{project_progress, Project, ProjectHealth};
use dayplan_core::task::Task;

use crate::common::{load_json, print_json, CliResult};

#[derive(Args)]
pub struct ProgressArgs {
    /// Path to a project JSON snapshot ("-" for stdin)
    pub project: PathBuf,
    /// JSON array of tasks linked to the project (for by_tasks projects)
    #[arg(long)]
    pub tasks: Option<PathBuf>,
    /// Evaluation date (defaults to today, UTC)
    #[arg(long)]
    pub date: Option<NaiveDate>,
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: ProgressArgs) -> CliResult {
    let project: Project = load_json(&args.project)?;
    let linked: Vec<Task> = match &args.tasks {
        Some(path) => load_json(path)?,
        None => vec![],
    };
    let today = args.date.unwrap_or_else(|| Utc::now().date_naive());

    let progress = project_progress(&project, &linked, today);

    if args.json {
        return print_json(&progress);
    }

    let health = match progress.health {
        ProjectHealth::Completed => "completed",
        ProjectHealth::Overdue => "overdue",
        ProjectHealth::AtRisk => "at_risk",
        ProjectHealth::OnTrack => "on_track",
        ProjectHealth::Normal => "normal",
    };
    println!("{}: {:.0}% [{health}]", project.name, progress.percent);
    for stage in project.ordered_stages() {
        let mark = if stage.done { "x" } else { " " };
        println!("  [{mark}] {}  {:.0}%", stage.name, stage.clamped_pct());
    }
    Ok(())
}
