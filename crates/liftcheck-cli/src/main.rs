//! liftcheck CLI — the user-facing command-line interface.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use liftcheck_core::model::Lift;

mod commands;

#[derive(Parser)]
#[command(
    name = "liftcheck",
    version,
    about = "Powerlifting mobility assessment and warmup planner"
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the interactive assessment (default)
    Run {
        /// Path to the assessment CSV
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Check a catalog for rows that can never be asked or are incomplete
    Validate {
        /// Path to the assessment CSV
        #[arg(long)]
        catalog: Option<PathBuf>,

        /// Config file path
        #[arg(long)]
        config: Option<PathBuf>,
    },

    /// Show which areas are assessed for a lift selection
    Areas {
        /// Lifts to include (squat, bench, deadlift); repeatable
        #[arg(long = "lift")]
        lifts: Vec<Lift>,
    },

    /// Write the bundled assessment CSV to the current directory
    Init,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let result = match cli.command.unwrap_or(Commands::Run {
        catalog: None,
        config: None,
    }) {
        Commands::Run { catalog, config } => commands::run::execute(catalog, config),
        Commands::Validate { catalog, config } => commands::validate::execute(catalog, config),
        Commands::Areas { lifts } => commands::areas::execute(lifts),
        Commands::Init => commands::init::execute(),
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
