//! # Batch Subcommand
//!
//! Evaluates a JSON or YAML list of deletion requests. Rejected rows are
//! reported and reflected in the exit code; they do not stop the batch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Args;

use dcms_retention::{evaluate_batch, load_requests, BatchEntry, BatchResult, RetentionEvaluator};

use crate::{resolve_now, EXIT_OK, EXIT_REJECTED_ROWS};

/// Arguments for the batch subcommand.
#[derive(Args, Debug)]
pub struct BatchArgs {
    /// Path to the requests file (.json, otherwise YAML).
    pub file: PathBuf,

    /// Evaluation instant, RFC 3339. Defaults to now.
    #[arg(long)]
    pub now: Option<String>,

    /// Print results as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the batch subcommand.
pub fn run_batch(args: &BatchArgs, evaluator: &RetentionEvaluator) -> Result<u8> {
    let entries = batch_entries(&args.file, args.now.as_deref(), evaluator)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&entries)?);
    } else {
        print!("{}", render(&entries));
    }
    Ok(exit_code(&entries))
}

/// Load and evaluate a requests file.
pub fn batch_entries(
    file: &Path,
    now: Option<&str>,
    evaluator: &RetentionEvaluator,
) -> Result<Vec<BatchEntry>> {
    let requests = load_requests(file)
        .with_context(|| format!("failed to load requests from {}", file.display()))?;
    let now = resolve_now(now)?;
    Ok(evaluate_batch(evaluator, &requests, now))
}

/// `EXIT_REJECTED_ROWS` if any row was rejected.
pub fn exit_code(entries: &[BatchEntry]) -> u8 {
    if entries.iter().any(BatchEntry::is_rejected) {
        EXIT_REJECTED_ROWS
    } else {
        EXIT_OK
    }
}

/// One line per entry plus a summary.
pub fn render(entries: &[BatchEntry]) -> String {
    let mut out = String::new();
    let (mut deletable, mut retained, mut rejected) = (0usize, 0usize, 0usize);
    for entry in entries {
        match &entry.result {
            BatchResult::Evaluated { verdict } if verdict.deletable => {
                deletable += 1;
                out.push_str(&format!("  DELETE  {:<24} {}\n", entry.id, verdict.basis));
            }
            BatchResult::Evaluated { verdict } => {
                retained += 1;
                out.push_str(&format!("  KEEP    {:<24} {}\n", entry.id, verdict.basis));
            }
            BatchResult::Rejected { error } => {
                rejected += 1;
                out.push_str(&format!("  REJECT  {:<24} {}\n", entry.id, error));
            }
        }
    }
    out.push_str(&format!(
        "\nTotal: {} ({deletable} deletable, {retained} retained, {rejected} rejected)\n",
        entries.len()
    ));
    out
}
