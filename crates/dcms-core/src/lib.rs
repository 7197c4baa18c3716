//! # dcms-core — Foundational Types for Document Retention
//!
//! This crate is the leaf of the workspace. It defines the primitives every
//! retention decision is expressed in and depends on nothing internal.
//!
//! ## Key Design Principles
//!
//! 1. **Closed jurisdiction set.** `Jurisdiction` is an enum with exactly the
//!    regimes the rule list knows about. Unknown codes are rejected at the
//!    caller boundary, never inside evaluation.
//!
//! 2. **Extensible legal categories.** `LegalCategory` names the regulated
//!    classes and carries any other string in `Other`, so an unrecognized
//!    category is data, not an error.
//!
//! 3. **UTC-only timestamps.** `Timestamp` enforces UTC with seconds
//!    precision and owns the age computation (elapsed Julian years).
//!
//! ## Crate Policy
//!
//! - No dependencies on other `dcms-*` crates.
//! - No `unsafe` code.
//! - No `panic!()` or `.unwrap()` outside tests.

pub mod category;
pub mod error;
pub mod jurisdiction;
pub mod temporal;

// Re-export primary types for ergonomic imports.
pub use category::LegalCategory;
pub use error::{DcmsError, ValidationError};
pub use jurisdiction::{Jurisdiction, Locale};
pub use temporal::{Timestamp, JULIAN_YEAR_SECONDS};
