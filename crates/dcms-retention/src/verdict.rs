//! # Verdict
//!
//! The evaluator's output: whether deletion is lawful now, the retention
//! period that applies, a human-readable reason, and the rule that decided.

use serde::{Deserialize, Serialize};

use crate::table::PERMANENT_RETENTION_YEARS;

/// Identifies the rule that produced a verdict.
///
/// Variants are listed in evaluation priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RetentionBasis {
    /// Argentine medical records are retained permanently.
    ArgentinaMedicalPermanent,
    /// Spanish medical records with surgery, implant, or chronic markers.
    SpainComplexMedicalPermanent,
    /// Spanish medical records under the clinical-history period.
    SpainMedicalPeriod,
    /// Administrative or billing records under a configured period.
    StatutoryPeriod,
    /// No rule applies; deletion permitted by default.
    UnregulatedDefault,
}

impl RetentionBasis {
    /// All bases in priority order.
    pub fn all() -> &'static [RetentionBasis] {
        &[
            Self::ArgentinaMedicalPermanent,
            Self::SpainComplexMedicalPermanent,
            Self::SpainMedicalPeriod,
            Self::StatutoryPeriod,
            Self::UnregulatedDefault,
        ]
    }

    /// The snake_case identifier, matching the serde form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ArgentinaMedicalPermanent => "argentina_medical_permanent",
            Self::SpainComplexMedicalPermanent => "spain_complex_medical_permanent",
            Self::SpainMedicalPeriod => "spain_medical_period",
            Self::StatutoryPeriod => "statutory_period",
            Self::UnregulatedDefault => "unregulated_default",
        }
    }
}

impl std::fmt::Display for RetentionBasis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Result of evaluating one document.
///
/// `retention_years` is 0 only for [`RetentionBasis::UnregulatedDefault`]
/// and equals [`PERMANENT_RETENTION_YEARS`] when the record must never be
/// deleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Verdict {
    /// Whether deletion is lawful at the evaluation instant.
    pub deletable: bool,
    /// Locale-appropriate explanation citing the applicable rule.
    pub reason: String,
    /// Applicable retention period in years.
    pub retention_years: u32,
    /// Rule that produced this verdict.
    pub basis: RetentionBasis,
}

impl Verdict {
    /// True when retention is permanent.
    pub fn is_permanent(&self) -> bool {
        self.retention_years == PERMANENT_RETENTION_YEARS
    }

    /// True when the verdict came from the unregulated fallback.
    pub fn is_default(&self) -> bool {
        self.basis == RetentionBasis::UnregulatedDefault
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_camel_case() {
        let v = Verdict {
            deletable: false,
            reason: "keep".into(),
            retention_years: 15,
            basis: RetentionBasis::SpainMedicalPeriod,
        };
        let json = serde_json::to_value(&v).unwrap();
        assert_eq!(json["deletable"], false);
        assert_eq!(json["retentionYears"], 15);
        assert_eq!(json["basis"], "spain_medical_period");
    }

    #[test]
    fn basis_display_matches_serde() {
        for basis in RetentionBasis::all() {
            let json = serde_json::to_string(basis).unwrap();
            assert_eq!(json, format!("\"{basis}\""));
        }
    }

    #[test]
    fn permanent_and_default_helpers() {
        let permanent = Verdict {
            deletable: false,
            reason: "x".into(),
            retention_years: PERMANENT_RETENTION_YEARS,
            basis: RetentionBasis::ArgentinaMedicalPermanent,
        };
        assert!(permanent.is_permanent());
        assert!(!permanent.is_default());

        let fallback = Verdict {
            deletable: true,
            reason: "x".into(),
            retention_years: 0,
            basis: RetentionBasis::UnregulatedDefault,
        };
        assert!(fallback.is_default());
        assert!(!fallback.is_permanent());
    }
}
