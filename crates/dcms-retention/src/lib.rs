//! # dcms-retention — Document Retention Policy Engine
//!
//! Decides whether deleting a clinic document is currently lawful, how long
//! retention is mandatory, and why.
//!
//! ## Architecture
//!
//! - **Table** (`table.rs`): Per-jurisdiction retention years by legal
//!   category. Static after construction; optionally loaded from YAML.
//!
//! - **Rules** (`rules.rs`): The `RetentionRule` trait and the standard
//!   rules. Each rule is a predicate plus a verdict computation.
//!
//! - **Evaluator** (`evaluator.rs`): Runs the rules in fixed priority order
//!   (absolute before durational, complexity before duration) and returns
//!   the first match, falling through to the unregulated default.
//!
//! - **Gate** (`gate.rs`): The caller contract. Validates raw requests,
//!   blocks on a negative verdict, and forwards a positive one to a
//!   `RecordStore`.
//!
//! - **Batch** (`batch.rs`): Evaluates lists of requests loaded from JSON
//!   or YAML, reporting rejected rows individually.
//!
//! ## Purity
//!
//! Evaluation never reads the clock and never fails. The same facts,
//! jurisdiction, and `now` always produce the same verdict.

pub mod batch;
pub mod error;
pub mod evaluator;
pub mod facts;
pub mod gate;
pub mod reason;
pub mod rules;
pub mod table;
pub mod verdict;

pub use batch::{evaluate_batch, load_requests, BatchEntry, BatchResult};
pub use error::{GateError, PolicyError};
pub use evaluator::{evaluate, standard_rules, RetentionEvaluator};
pub use facts::{DocumentFacts, COMPLEX_TAGS};
pub use gate::{
    DeletionGate, DeletionOutcome, DeletionRequest, DocumentId, RecordStore, ValidatedRequest,
};
pub use rules::{RetentionRule, RuleContext};
pub use table::{RetentionPolicyTable, PERMANENT_RETENTION_YEARS};
pub use verdict::{RetentionBasis, Verdict};
