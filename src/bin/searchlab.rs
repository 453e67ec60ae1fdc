//! searchlab CLI - Classic AI search exercises on the terminal
//!
//! This CLI provides a unified interface for:
//! - Solving text mazes with uninformed and informed search
//! - Playing Tateti against minimax, analysing positions and running matches
//! - Solving Traveling Salesman instances with local search

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand};
use env_logger::{Builder, Env};
use log::debug;
use searchlab::cli::{
    commands::{path, tateti, tsp},
    config::AppConfig,
};

#[derive(Parser)]
#[command(name = "searchlab")]
#[command(version, about = "Classic AI search exercises", long_about = None)]
struct Cli {
    /// JSON configuration file; command-line flags take precedence
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    /// Hide progress bars
    #[arg(long, global = true)]
    no_progress: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a path through a maze
    Path(path::PathArgs),

    /// Play or analyse Tic-Tac-Toe
    Tateti(tateti::TatetiArgs),

    /// Solve a Traveling Salesman instance
    Tsp(tsp::TspArgs),
}

/// `-v` only changes the default filter; `RUST_LOG` still wins when set.
fn init_logger(verbose: u8) {
    let default_filter = match verbose {
        0 => "warn",
        1 => "warn,searchlab=debug",
        _ => "warn,searchlab=trace",
    };
    Builder::from_env(Env::default().default_filter_or(default_filter)).init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let mut config = AppConfig::load_or_default(cli.config.as_deref()).with_context(|| {
        format!(
            "failed to load configuration{}",
            cli.config
                .as_ref()
                .map(|p| format!(" from {}", p.display()))
                .unwrap_or_default()
        )
    })?;
    if cli.verbose > 0 {
        config.common.verbose = true;
    }
    if cli.no_progress {
        config.common.progress = false;
    }

    init_logger(if config.common.verbose { cli.verbose.max(1) } else { 0 });
    debug!("configuration: {config:?}");

    match cli.command {
        Commands::Path(args) => path::execute(args, &config),
        Commands::Tateti(args) => tateti::execute(args, &config),
        Commands::Tsp(args) => tsp::execute(args, &config),
    }
}
