//! # Legal Category
//!
//! The regulatory class of a clinic document. The three named variants are
//! the classes the retention rules know about; anything else is carried
//! verbatim in [`LegalCategory::Other`] and resolves to the unregulated
//! default verdict.
//!
//! ## Normalization
//!
//! Absent or blank input normalizes to [`LegalCategory::Administrative`].
//! Matching of the named variants is case-sensitive, so `"Medical"` is an
//! `Other` category.

use serde::{Deserialize, Serialize};

/// Regulatory class of a document.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum LegalCategory {
    /// Clinical history, treatment records, imaging.
    Medical,
    /// Consent forms, correspondence, internal paperwork.
    #[default]
    Administrative,
    /// Invoices, receipts, payment records.
    Billing,
    /// Any category without a named variant.
    Other(String),
}

impl LegalCategory {
    /// The named categories in canonical order.
    pub fn regulated() -> [LegalCategory; 3] {
        [Self::Medical, Self::Administrative, Self::Billing]
    }

    /// Normalize an optional raw category string.
    ///
    /// `None`, `""`, and whitespace-only input become `Administrative`.
    pub fn from_input(raw: Option<&str>) -> Self {
        match raw.map(str::trim) {
            None | Some("") => Self::Administrative,
            Some(s) => Self::from(s),
        }
    }

    /// String form, identical to the accepted input.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Medical => "medical",
            Self::Administrative => "administrative",
            Self::Billing => "billing",
            Self::Other(s) => s,
        }
    }

    /// True for the categories governed by a generic statutory period.
    pub fn is_durational(&self) -> bool {
        matches!(self, Self::Administrative | Self::Billing)
    }

    /// Spanish label used in reason text.
    pub fn label_es(&self) -> &str {
        match self {
            Self::Medical => "médico",
            Self::Administrative => "administrativo",
            Self::Billing => "de facturación",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for LegalCategory {
    fn from(s: &str) -> Self {
        match s {
            "medical" => Self::Medical,
            "administrative" => Self::Administrative,
            "billing" => Self::Billing,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for LegalCategory {
    fn from(s: String) -> Self {
        Self::from_input(Some(&s))
    }
}

impl From<LegalCategory> for String {
    fn from(c: LegalCategory) -> Self {
        match c {
            LegalCategory::Other(s) => s,
            named => named.as_str().to_string(),
        }
    }
}

impl std::fmt::Display for LegalCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
