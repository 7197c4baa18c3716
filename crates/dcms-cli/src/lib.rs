//! # dcms-cli — Retention Engine Command-Line Interface
//!
//! Provides the `dcms` binary for clinic operators and compliance staff.
//!
//! ## Subcommands
//!
//! - `dcms evaluate` — Verdict for a single document.
//! - `dcms batch` — Verdicts for a JSON/YAML list of deletion requests.
//! - `dcms policy` — Print the retention table in force.
//!
//! ```bash
//! dcms evaluate --jurisdiction ES --category medical \
//!     --created-at 2009-04-02T10:00:00Z --tag implant
//! dcms --policy policy.yaml batch requests.yaml --json
//! ```
//!
//! ## Crate Policy
//!
//! - Argument parsing lives in `main.rs`; handlers here delegate to
//!   `dcms-retention` and contain no retention logic.
//! - `now` is read once per invocation, here, and passed to the evaluator.

pub mod batch;
pub mod evaluate;
pub mod policy;

use std::path::Path;

use anyhow::{Context, Result};
use dcms_core::Timestamp;
use dcms_retention::{RetentionEvaluator, RetentionPolicyTable};

/// Exit code when every input was processed.
pub const EXIT_OK: u8 = 0;

/// Exit code when some batch rows were rejected.
pub const EXIT_REJECTED_ROWS: u8 = 2;

/// Build the evaluator from an optional policy file.
pub fn load_evaluator(policy: Option<&Path>) -> Result<RetentionEvaluator> {
    let table = match policy {
        Some(path) => RetentionPolicyTable::from_yaml_file(path)
            .with_context(|| format!("failed to load policy {}", path.display()))?,
        None => RetentionPolicyTable::builtin(),
    };
    Ok(RetentionEvaluator::with_table(table))
}

/// Resolve `--now`, defaulting to the current UTC time.
pub fn resolve_now(now: Option<&str>) -> Result<Timestamp> {
    match now {
        Some(raw) => Timestamp::parse_lenient(raw).with_context(|| format!("invalid --now {raw:?}")),
        None => Ok(Timestamp::now()),
    }
}
