//! # Jurisdiction — Closed Set of Retention Regimes
//!
//! Defines the `Jurisdiction` enum. Every `match` on it is exhaustive, so
//! adding a regime is a compile error until the reason-text locale and any
//! jurisdiction-specific rule are updated.
//!
//! Codes are parsed case-sensitively: `"ES"`, `"AR"`, `"GDPR"`.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::ValidationError;

/// Legal regime governing a document's retention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Jurisdiction {
    /// Spain (Ley 41/2002 de autonomía del paciente, commercial and tax codes).
    #[serde(rename = "ES")]
    Es,
    /// Argentina (Ley 25.326, Ley 26.529, AFIP record-keeping rules).
    #[serde(rename = "AR")]
    Ar,
    /// GDPR baseline for clinics outside a specifically modelled regime.
    #[serde(rename = "GDPR")]
    Gdpr,
}

/// Language used for human-readable reason text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Locale {
    /// Spanish.
    Es,
    /// English.
    En,
}

impl Jurisdiction {
    /// All jurisdictions in canonical order.
    pub fn all() -> &'static [Jurisdiction] {
        &[Self::Es, Self::Ar, Self::Gdpr]
    }

    /// The wire code (`"ES"`, `"AR"`, `"GDPR"`).
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Es => "ES",
            Self::Ar => "AR",
            Self::Gdpr => "GDPR",
        }
    }

    /// Human-readable name in the jurisdiction's own locale.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Es => "España",
            Self::Ar => "Argentina",
            Self::Gdpr => "GDPR (EU)",
        }
    }

    /// Locale for reason text addressed to clinics in this jurisdiction.
    pub fn locale(&self) -> Locale {
        match self {
            Self::Es | Self::Ar => Locale::Es,
            Self::Gdpr => Locale::En,
        }
    }
}

impl std::fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Jurisdiction {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ES" => Ok(Self::Es),
            "AR" => Ok(Self::Ar),
            "GDPR" => Ok(Self::Gdpr),
            other => Err(ValidationError::UnknownJurisdiction(other.to_string())),
        }
    }
}
