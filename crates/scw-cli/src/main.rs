//! # scw CLI entry point
//!
//! Parses command-line arguments and dispatches to subcommand handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use scw_cli::blocks::{run_blocks, BlocksArgs};
use scw_cli::progress::{run_progress, ProgressArgs};
use scw_cli::set::{run_set, SetArgs};
use scw_cli::validate::{run_validate, ValidateArgs};

/// Society Constitution Wizard CLI.
///
/// Inspects the constitution blocks and validates, reports on, and edits
/// saved wizard records.
#[derive(Parser, Debug)]
#[command(name = "scw", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Path to configuration file (YAML).
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List the wizard blocks, or one block's field rules.
    Blocks(BlocksArgs),

    /// Validate a saved record block by block.
    Validate(ValidateArgs),

    /// Print mandatory progress for every block.
    Progress(ProgressArgs),

    /// Apply one field change to a saved record.
    Set(SetArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let result = scw_cli::load_config(cli.config.as_deref()).and_then(|config| {
        tracing::debug!(?config, "configuration loaded");
        match &cli.command {
            Commands::Blocks(args) => run_blocks(args),
            Commands::Validate(args) => run_validate(args, &config),
            Commands::Progress(args) => run_progress(args, &config),
            Commands::Set(args) => run_set(args, &config),
        }
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(2)
        }
    }
}
