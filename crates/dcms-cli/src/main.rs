//! # dcms CLI entry point
//!
//! Parses command-line arguments, initializes logging, builds the
//! evaluator from the effective policy, and dispatches to subcommand
//! handlers.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dcms_cli::batch::{run_batch, BatchArgs};
use dcms_cli::evaluate::{run_evaluate, EvaluateArgs};
use dcms_cli::load_evaluator;
use dcms_cli::policy::{run_policy, PolicyArgs};

/// Clinic document retention evaluator.
///
/// Decides whether a clinical document may be deleted under the
/// retention law of its jurisdiction (ES, AR, GDPR).
#[derive(Parser, Debug)]
#[command(name = "dcms", version, about, long_about = None)]
struct Cli {
    /// Enable verbose output. Repeat for more verbosity (-v, -vv, -vvv).
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Emit logs as JSON lines.
    #[arg(long, global = true)]
    log_json: bool,

    /// Retention policy YAML replacing the built-in table.
    #[arg(long, global = true)]
    policy: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Evaluate a single document.
    Evaluate(EvaluateArgs),

    /// Evaluate a JSON or YAML list of deletion requests.
    Batch(BatchArgs),

    /// Print the effective retention table.
    Policy(PolicyArgs),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"),
    };

    // Logs go to stderr so `--json` output on stdout stays parseable.
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr);
    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "dcms starting");

    let result = load_evaluator(cli.policy.as_deref()).and_then(|evaluator| match &cli.command {
        Commands::Evaluate(args) => run_evaluate(args, &evaluator),
        Commands::Batch(args) => run_batch(args, &evaluator),
        Commands::Policy(args) => run_policy(args, &evaluator),
    });

    match result {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::from(1)
        }
    }
}
