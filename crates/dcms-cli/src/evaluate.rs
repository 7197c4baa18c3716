//! # Evaluate Subcommand
//!
//! Verdict for a single document given on the command line.

use anyhow::{Context, Result};
use clap::Args;

use dcms_retention::{DeletionRequest, RetentionEvaluator, Verdict};

use crate::{resolve_now, EXIT_OK};

/// Arguments for the evaluate subcommand.
#[derive(Args, Debug)]
pub struct EvaluateArgs {
    /// Jurisdiction code: ES, AR, or GDPR.
    #[arg(long)]
    pub jurisdiction: String,

    /// Legal category (medical, administrative, billing, ...).
    /// Defaults to administrative.
    #[arg(long)]
    pub category: Option<String>,

    /// Document creation time, RFC 3339.
    #[arg(long)]
    pub created_at: String,

    /// Content tag. Repeatable.
    #[arg(long = "tag")]
    pub tags: Vec<String>,

    /// Evaluation instant, RFC 3339. Defaults to now.
    #[arg(long)]
    pub now: Option<String>,

    /// Print the verdict as JSON.
    #[arg(long)]
    pub json: bool,
}

/// Execute the evaluate subcommand.
pub fn run_evaluate(args: &EvaluateArgs, evaluator: &RetentionEvaluator) -> Result<u8> {
    let verdict = evaluate_args(args, evaluator)?;
    if args.json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        print!("{}", render(&verdict));
    }
    Ok(EXIT_OK)
}

/// Validate the arguments exactly as a deletion request and evaluate them.
pub fn evaluate_args(args: &EvaluateArgs, evaluator: &RetentionEvaluator) -> Result<Verdict> {
    let request = DeletionRequest {
        id: "cli".into(),
        jurisdiction: args.jurisdiction.clone(),
        legal_category: args.category.clone(),
        created_at: Some(args.created_at.clone()),
        tags: args.tags.clone(),
    };
    let valid = request.validate().context("invalid document")?;
    let now = resolve_now(args.now.as_deref())?;
    Ok(evaluator.evaluate(&valid.facts, valid.jurisdiction, now))
}

/// Human-readable verdict block.
pub fn render(verdict: &Verdict) -> String {
    let retention = if verdict.is_permanent() {
        "permanent".to_string()
    } else {
        format!("{} years", verdict.retention_years)
    };
    format!(
        "  deletable:  {}\n  retention:  {}\n  basis:      {}\n  reason:     {}\n",
        if verdict.deletable { "yes" } else { "no" },
        retention,
        verdict.basis,
        verdict.reason
    )
}
