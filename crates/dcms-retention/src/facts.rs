//! # Document Facts
//!
//! The immutable input of one evaluation: legal category, creation instant,
//! and free-form tags.

use std::collections::BTreeSet;

use dcms_core::{LegalCategory, Timestamp};
use serde::{Deserialize, Serialize};

/// Tags that mark a medical record as complex (permanent retention in Spain).
pub const COMPLEX_TAGS: [&str; 3] = ["surgery", "implant", "chronic"];

/// Facts about one document, supplied by the caller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentFacts {
    /// Regulatory class; defaults to administrative when absent.
    #[serde(default)]
    pub legal_category: LegalCategory,
    /// Instant the record was created.
    pub created_at: Timestamp,
    /// Free-form content tags.
    #[serde(default)]
    pub tags: BTreeSet<String>,
}

impl DocumentFacts {
    /// Facts with no tags.
    pub fn new(legal_category: LegalCategory, created_at: Timestamp) -> Self {
        Self {
            legal_category,
            created_at,
            tags: BTreeSet::new(),
        }
    }

    /// Replace the tag set.
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// True if any tag is a complexity marker.
    ///
    /// Tags are trimmed and compared ASCII-case-insensitively, so `"Implant"`
    /// counts.
    pub fn is_complex(&self) -> bool {
        self.tags.iter().any(|t| is_complex_tag(t))
    }

    /// The tags that triggered complexity, in sorted order.
    pub fn complexity_triggers(&self) -> Vec<&str> {
        self.tags
            .iter()
            .filter(|t| is_complex_tag(t))
            .map(|t| t.trim())
            .collect()
    }

    /// Unfloored age in Julian years at `now`.
    pub fn age_years(&self, now: &Timestamp) -> f64 {
        self.created_at.elapsed_years(now)
    }
}

fn is_complex_tag(tag: &str) -> bool {
    let tag = tag.trim();
    COMPLEX_TAGS.iter().any(|c| c.eq_ignore_ascii_case(tag))
}
