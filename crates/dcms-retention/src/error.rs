//! # Retention Errors
//!
//! Policy configuration and deletion-gate failures. Evaluation itself has
//! no error path.

use dcms_core::{Jurisdiction, LegalCategory, ValidationError};
use thiserror::Error;

/// A retention table could not be built.
#[derive(Error, Debug)]
pub enum PolicyError {
    /// An entry violates the table invariants.
    #[error("invalid retention for {jurisdiction}/{category}: {years} years ({reason})")]
    InvalidRetention {
        /// Jurisdiction of the offending entry.
        jurisdiction: Jurisdiction,
        /// Category of the offending entry.
        category: LegalCategory,
        /// Configured years.
        years: u32,
        /// Which invariant was violated.
        reason: &'static str,
    },

    /// No retention rule reads this (jurisdiction, category) pair, so the
    /// entry would never affect a verdict.
    #[error(
        "no retention rule reads {jurisdiction}/{category}; only administrative, billing, \
         and ES/AR medical entries are allowed"
    )]
    UnusedEntry {
        /// Jurisdiction of the offending entry.
        jurisdiction: Jurisdiction,
        /// Category of the offending entry.
        category: LegalCategory,
    },

    /// Two keys under one jurisdiction name the same category after trimming.
    #[error("duplicate retention entry for {jurisdiction}/{category}")]
    DuplicateCategory {
        /// Jurisdiction holding the duplicate keys.
        jurisdiction: Jurisdiction,
        /// The category both keys resolve to.
        category: LegalCategory,
    },

    /// The policy document is not valid YAML for the expected shape.
    #[error("policy parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    /// The policy file could not be read.
    #[error("policy io error: {0}")]
    Io(#[from] std::io::Error),
}

/// A deletion request could not be carried out.
#[derive(Error, Debug)]
pub enum GateError {
    /// The request was rejected before evaluation.
    #[error("request rejected: {0}")]
    Validation(#[from] ValidationError),

    /// The verdict permitted deletion but the record store failed.
    #[error("record store failed to delete {id}: {source}")]
    Store {
        /// Document that could not be deleted.
        id: String,
        /// Underlying store error.
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}
