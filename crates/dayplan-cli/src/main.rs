use clap::{Parser, Subcommand};

mod commands;
mod common;

#[derive(Parser)]
#[command(name = "dayplan-cli", version, about = "Dayplan CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute ranking scores for a task snapshot
    Score(commands::score::ScoreArgs),
    /// Partition and order the today queue
    Rank(commands::rank::RankArgs),
    /// Evaluate the snapshot against the daily capacity budget
    Capacity(commands::capacity::CapacityArgs),
    /// Apply a drag-reorder to a column snapshot
    Reorder(commands::reorder::ReorderArgs),
    /// Project progress rollup and health
    Progress(commands::progress::ProgressArgs),
}

fn main() {
    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Score(args) => commands::score::run(args),
        Commands::Rank(args) => commands::rank::run(args),
        Commands::Capacity(args) => commands::capacity::run(args),
        Commands::Reorder(args) => commands::reorder::run(args),
        Commands::Progress(args) => commands::progress::run(args),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
