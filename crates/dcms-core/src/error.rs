//! # Error Types — Structured Error Hierarchy
//!
//! Errors shared across the workspace. All use `thiserror` for derive-based
//! `Display` and `Error` implementations.
//!
//! ## Design
//!
//! - Validation errors belong to the caller boundary: a request that cannot
//!   be evaluated (unknown jurisdiction, missing creation date) is rejected
//!   before the evaluator runs.
//! - The evaluator itself has no error type. Policy gaps resolve to the
//!   unregulated default verdict.

use thiserror::Error;

/// Top-level error type for the retention workspace.
#[derive(Error, Debug)]
pub enum DcmsError {
    /// Caller input could not be turned into evaluation facts.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// JSON input could not be decoded.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML input could not be decoded.
    #[error("yaml error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO error.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Caller-side input errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Jurisdiction code outside the closed set.
    #[error("unknown jurisdiction {0:?}; expected one of ES, AR, GDPR")]
    UnknownJurisdiction(String),

    /// The document has no creation timestamp, so its age is undefined.
    #[error("document creation timestamp is missing")]
    MissingCreatedAt,

    /// A timestamp string could not be parsed.
    #[error("invalid timestamp {value:?}: {reason}")]
    InvalidTimestamp {
        /// The rejected input.
        value: String,
        /// Parser diagnostic.
        reason: String,
    },

    /// Document identifiers must be non-empty.
    #[error("document id must not be empty")]
    EmptyDocumentId,
}
