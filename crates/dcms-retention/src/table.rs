//! # Retention Policy Table
//!
//! Authoritative retention duration, in years, per (jurisdiction, category)
//! pair. The table is immutable after construction and safe to share across
//! threads without synchronization.
//!
//! ## Invariants
//!
//! - Every entry is in `1..=PERMANENT_RETENTION_YEARS`. Zero is reserved for
//!   the unregulated default verdict.
//! - Administrative and billing entries are strictly below the sentinel, so
//!   the generic durational rule can never report permanent retention.
//! - Every entry is read by a rule: administrative and billing in any
//!   jurisdiction, and Spanish medical. Argentine medical retention is
//!   absolute, so its entry is accepted only as the sentinel. Anything else
//!   is rejected as [`PolicyError::UnusedEntry`].
//! - Category keys are trimmed; two keys naming the same category are
//!   rejected as [`PolicyError::DuplicateCategory`].
//!
//! ## Configuration
//!
//! ```yaml
//! jurisdictions:
//!   ES: { medical: 15, administrative: 4, billing: 6 }
//!   AR: { medical: 999, administrative: 10, billing: 7 }
//!   GDPR: { administrative: 5, billing: 10 }
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use dcms_core::{Jurisdiction, LegalCategory};
use serde::{Deserialize, Serialize};

use crate::error::PolicyError;

/// Sentinel retention meaning "permanent, never delete".
pub const PERMANENT_RETENTION_YEARS: u32 = 999;

type CategoryYears = BTreeMap<LegalCategory, u32>;

/// Per-jurisdiction retention periods.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RetentionPolicyTable {
    jurisdictions: BTreeMap<Jurisdiction, CategoryYears>,
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct PolicyDocument {
    jurisdictions: BTreeMap<Jurisdiction, BTreeMap<String, u32>>,
}

impl RetentionPolicyTable {
    /// Build a table from explicit entries, enforcing the invariants.
    ///
    /// # Errors
    ///
    /// Returns [`PolicyError::InvalidRetention`] for an entry outside
    /// `1..=PERMANENT_RETENTION_YEARS`, a sentinel entry on a durational
    /// category, or a non-permanent Argentine medical entry, and
    /// [`PolicyError::UnusedEntry`] for a pair no rule reads.
    pub fn new(
        jurisdictions: BTreeMap<Jurisdiction, BTreeMap<LegalCategory, u32>>,
    ) -> Result<Self, PolicyError> {
        for (&jurisdiction, categories) in &jurisdictions {
            for (category, &years) in categories {
                validate_entry(jurisdiction, category, years)?;
            }
        }
        Ok(Self { jurisdictions })
    }

    /// The built-in statutory defaults.
    ///
    /// | Jurisdiction | medical | administrative | billing |
    /// |---|---|---|---|
    /// | ES | 15 | 4 | 6 |
    /// | AR | permanent | 10 | 7 |
    /// | GDPR | — | 5 | 10 |
    pub fn builtin() -> Self {
        let es = BTreeMap::from([
            (LegalCategory::Medical, 15),
            (LegalCategory::Administrative, 4),
            (LegalCategory::Billing, 6),
        ]);
        let ar = BTreeMap::from([
            (LegalCategory::Medical, PERMANENT_RETENTION_YEARS),
            (LegalCategory::Administrative, 10),
            (LegalCategory::Billing, 7),
        ]);
        let gdpr = BTreeMap::from([
            (LegalCategory::Administrative, 5),
            (LegalCategory::Billing, 10),
        ]);
        Self {
            jurisdictions: BTreeMap::from([
                (Jurisdiction::Es, es),
                (Jurisdiction::Ar, ar),
                (Jurisdiction::Gdpr, gdpr),
            ]),
        }
    }

    /// Parse and validate a YAML policy document.
    pub fn from_yaml_str(yaml: &str) -> Result<Self, PolicyError> {
        let doc: PolicyDocument = serde_yaml::from_str(yaml)?;
        let mut jurisdictions = BTreeMap::new();
        for (jurisdiction, raw) in doc.jurisdictions {
            let mut categories = CategoryYears::new();
            for (key, years) in raw {
                let category = LegalCategory::from(key.trim());
                if categories.insert(category.clone(), years).is_some() {
                    return Err(PolicyError::DuplicateCategory {
                        jurisdiction,
                        category,
                    });
                }
            }
            jurisdictions.insert(jurisdiction, categories);
        }
        let table = Self::new(jurisdictions)?;
        if table.is_empty() {
            tracing::warn!("retention policy document defines no entries");
        }
        Ok(table)
    }

    /// Read, parse, and validate a YAML policy file.
    pub fn from_yaml_file(path: &Path) -> Result<Self, PolicyError> {
        let content = std::fs::read_to_string(path)?;
        let table = Self::from_yaml_str(&content)?;
        tracing::info!(
            path = %path.display(),
            entries = table.len(),
            "loaded retention policy"
        );
        Ok(table)
    }

    /// Retention years for a pair, or `None` if the pair is unmapped.
    pub fn lookup(&self, jurisdiction: Jurisdiction, category: &LegalCategory) -> Option<u32> {
        self.jurisdictions
            .get(&jurisdiction)
            .and_then(|categories| categories.get(category))
            .copied()
    }

    /// All entries in (jurisdiction, category) order.
    pub fn entries(&self) -> impl Iterator<Item = (Jurisdiction, &LegalCategory, u32)> + '_ {
        self.jurisdictions.iter().flat_map(|(&j, categories)| {
            categories.iter().map(move |(c, &years)| (j, c, years))
        })
    }

    /// Number of configured entries.
    pub fn len(&self) -> usize {
        self.jurisdictions.values().map(BTreeMap::len).sum()
    }

    /// True if no entries are configured.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for RetentionPolicyTable {
    fn default() -> Self {
        Self::builtin()
    }
}

fn validate_entry(
    jurisdiction: Jurisdiction,
    category: &LegalCategory,
    years: u32,
) -> Result<(), PolicyError> {
    let invalid = |reason| PolicyError::InvalidRetention {
        jurisdiction,
        category: category.clone(),
        years,
        reason,
    };
    if years == 0 {
        return Err(invalid("zero is reserved for unregulated categories"));
    }
    if years > PERMANENT_RETENTION_YEARS {
        return Err(invalid("exceeds the permanent sentinel"));
    }
    match category {
        c if c.is_durational() => {
            if years == PERMANENT_RETENTION_YEARS {
                return Err(invalid("durational categories cannot be permanent"));
            }
            Ok(())
        }
        LegalCategory::Medical if jurisdiction == Jurisdiction::Es => Ok(()),
        LegalCategory::Medical if jurisdiction == Jurisdiction::Ar => {
            if years != PERMANENT_RETENTION_YEARS {
                return Err(invalid("Argentine medical records are always permanent"));
            }
            Ok(())
        }
        _ => Err(PolicyError::UnusedEntry {
            jurisdiction,
            category: category.clone(),
        }),
    }
}
