//! # Policy Subcommand
//!
//! Prints the retention table in force (built-in or `--policy` file).

use anyhow::Result;
use clap::Args;

use dcms_retention::{RetentionEvaluator, RetentionPolicyTable, PERMANENT_RETENTION_YEARS};

use crate::EXIT_OK;

/// Arguments for the policy subcommand.
#[derive(Args, Debug)]
pub struct PolicyArgs {
    /// Print the table as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the policy subcommand.
pub fn run_policy(args: &PolicyArgs, evaluator: &RetentionEvaluator) -> Result<u8> {
    let table = evaluator.table();
    if args.json {
        println!("{}", serde_json::to_string_pretty(table)?);
    } else {
        print!("{}", render(table));
    }
    Ok(EXIT_OK)
}

/// Tabular text form of the policy.
pub fn render(table: &RetentionPolicyTable) -> String {
    let mut out = String::from("Retention policy:\n\n");
    for (jurisdiction, category, years) in table.entries() {
        let period = if years == PERMANENT_RETENTION_YEARS {
            "permanent".to_string()
        } else {
            format!("{years} years")
        };
        out.push_str(&format!(
            "  {:<6} {:<16} {period}\n",
            jurisdiction.as_str(),
            category.as_str()
        ));
    }
    out.push_str(&format!("\nTotal: {} entries\n", table.len()));
    out
}
