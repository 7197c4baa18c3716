//! # Batch Evaluation
//!
//! Loads deletion requests from a JSON or YAML file and evaluates each one.
//! A request that fails caller-side validation is reported as rejected; it
//! never aborts the rest of the batch.

use std::path::Path;

use dcms_core::{DcmsError, Timestamp};
use serde::Serialize;

use crate::evaluator::RetentionEvaluator;
use crate::gate::DeletionRequest;
use crate::verdict::Verdict;

/// Outcome for one request in a batch.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case", tag = "status")]
pub enum BatchResult {
    /// The request was valid and evaluated.
    Evaluated {
        /// Evaluation result.
        verdict: Verdict,
    },
    /// The request was rejected before evaluation.
    Rejected {
        /// Validation error message.
        error: String,
    },
}

/// One row of batch output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BatchEntry {
    /// Request id as submitted.
    pub id: String,
    /// Evaluation outcome.
    #[serde(flatten)]
    pub result: BatchResult,
}

impl BatchEntry {
    /// True if the request was rejected.
    pub fn is_rejected(&self) -> bool {
        matches!(self.result, BatchResult::Rejected { .. })
    }
}

/// Load requests from a file. `.json` is parsed as JSON, anything else as YAML.
pub fn load_requests(path: &Path) -> Result<Vec<DeletionRequest>, DcmsError> {
    let content = std::fs::read_to_string(path)?;
    let is_json = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"));
    let requests: Vec<DeletionRequest> = if is_json {
        serde_json::from_str(&content)?
    } else {
        serde_yaml::from_str(&content)?
    };
    tracing::debug!(path = %path.display(), count = requests.len(), "loaded deletion requests");
    Ok(requests)
}

/// Evaluate every request at the same instant.
pub fn evaluate_batch(
    evaluator: &RetentionEvaluator,
    requests: &[DeletionRequest],
    now: Timestamp,
) -> Vec<BatchEntry> {
    requests
        .iter()
        .map(|request| {
            let result = match request.validate() {
                Ok(valid) => BatchResult::Evaluated {
                    verdict: evaluator.evaluate(&valid.facts, valid.jurisdiction, now),
                },
                Err(e) => {
                    tracing::warn!(id = %request.id, error = %e, "rejected deletion request");
                    BatchResult::Rejected {
                        error: e.to_string(),
                    }
                }
            };
            BatchEntry {
                id: request.id.clone(),
                result,
            }
        })
        .collect()
}
