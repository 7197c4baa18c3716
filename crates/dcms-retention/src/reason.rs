//! # Reason Text
//!
//! Renders the human-readable justification attached to every verdict.
//! Spanish for Spain and Argentina, English for the GDPR baseline.
//!
//! Ages are floored to whole years here and only here; rules compare the
//! unfloored value.
//!
//! Unregulated-default reasons always say "unregulated"/"no regulada" and
//! "by default"/"por defecto" so they cannot be mistaken for a verdict
//! where a real retention period was exceeded.

use dcms_core::{Jurisdiction, LegalCategory, Locale};

/// Argentina, any medical record.
pub fn argentina_medical(locale: Locale) -> String {
    match locale {
        Locale::Es => "Conservación permanente: todos los documentos médicos son permanentes \
                       según la ley argentina de protección de datos personales (Ley 25.326) \
                       y de derechos del paciente (Ley 26.529). No se permite la eliminación."
            .to_string(),
        Locale::En => "Permanent retention: all medical documents are permanent under Argentine \
                       data-protection law (Ley 25.326) and patient-rights law (Ley 26.529). \
                       Deletion is not permitted."
            .to_string(),
    }
}

/// Spain, medical record carrying complexity markers.
pub fn spain_complex_medical(locale: Locale, triggers: &[&str]) -> String {
    let tags = triggers.join(", ");
    match locale {
        Locale::Es => format!(
            "Conservación permanente: historia clínica compleja (etiquetas: {tags}) según la \
             Ley 41/2002 de autonomía del paciente. No se permite la eliminación."
        ),
        Locale::En => format!(
            "Permanent retention: complex clinical history (tags: {tags}) under Spanish \
             patient-autonomy law (Ley 41/2002). Deletion is not permitted."
        ),
    }
}

/// Spain, simple medical record measured against the clinical-history period.
pub fn spain_medical_period(locale: Locale, years: u32, age: f64, deletable: bool) -> String {
    let age = whole_years(age);
    match (locale, deletable) {
        (Locale::Es, false) => format!(
            "La historia clínica debe conservarse al menos {} (Ley 41/2002); antigüedad actual: {}. \
             No se permite la eliminación.",
            anos(years as u64),
            anos(age)
        ),
        (Locale::Es, true) => format!(
            "Plazo de conservación de {} superado (Ley 41/2002); antigüedad actual: {}. \
             Se permite la eliminación.",
            anos(years as u64),
            anos(age)
        ),
        (Locale::En, false) => format!(
            "Clinical history must be kept for at least {} (Ley 41/2002); current age: {}. \
             Deletion is not permitted.",
            years_en(years as u64),
            years_en(age)
        ),
        (Locale::En, true) => format!(
            "Retention period of {} exceeded (Ley 41/2002); current age: {}. \
             Deletion is permitted.",
            years_en(years as u64),
            years_en(age)
        ),
    }
}

/// Administrative or billing record measured against a configured period.
pub fn statutory_period(
    locale: Locale,
    jurisdiction: Jurisdiction,
    category: &LegalCategory,
    years: u32,
    age: f64,
    deletable: bool,
) -> String {
    let age = whole_years(age);
    match locale {
        Locale::Es => {
            let subject = format!(
                "Documento {} {}",
                category.label_es(),
                jurisdiction_es(jurisdiction)
            );
            if deletable {
                format!(
                    "{subject}: plazo legal de conservación de {} superado; antigüedad actual: {}. \
                     Se permite la eliminación.",
                    anos(years as u64),
                    anos(age)
                )
            } else {
                format!(
                    "{subject}: plazo legal de conservación de {}; antigüedad actual: {}. \
                     No se permite la eliminación.",
                    anos(years as u64),
                    anos(age)
                )
            }
        }
        Locale::En => {
            let subject = format!(
                "{} document {}",
                category_en(category),
                jurisdiction_en(jurisdiction)
            );
            if deletable {
                format!(
                    "{subject}: statutory retention period of {} exceeded; current age: {}. \
                     Deletion is permitted.",
                    years_en(years as u64),
                    years_en(age)
                )
            } else {
                format!(
                    "{subject}: statutory retention period of {}; current age: {}. \
                     Deletion is not permitted.",
                    years_en(years as u64),
                    years_en(age)
                )
            }
        }
    }
}

/// No rule applies.
pub fn unregulated(locale: Locale, jurisdiction: Jurisdiction, category: &LegalCategory) -> String {
    match locale {
        Locale::Es => format!(
            "Categoría no regulada \"{}\" {}: sin plazo legal de conservación; eliminación \
             permitida por defecto (criterio base RGPD).",
            category.as_str(),
            jurisdiction_es(jurisdiction)
        ),
        Locale::En => format!(
            "Unregulated category \"{}\" {}: no statutory retention period applies; deletion \
             permitted by default (GDPR baseline).",
            category.as_str(),
            jurisdiction_en(jurisdiction)
        ),
    }
}

fn whole_years(age: f64) -> u64 {
    if age.is_finite() && age > 0.0 {
        age.floor() as u64
    } else {
        0
    }
}

fn anos(n: u64) -> String {
    if n == 1 {
        "1 año".to_string()
    } else {
        format!("{n} años")
    }
}

fn years_en(n: u64) -> String {
    if n == 1 {
        "1 year".to_string()
    } else {
        format!("{n} years")
    }
}

fn jurisdiction_es(j: Jurisdiction) -> &'static str {
    match j {
        Jurisdiction::Es => "en España",
        Jurisdiction::Ar => "en Argentina",
        Jurisdiction::Gdpr => "bajo el RGPD",
    }
}

fn jurisdiction_en(j: Jurisdiction) -> &'static str {
    match j {
        Jurisdiction::Es => "in Spain",
        Jurisdiction::Ar => "in Argentina",
        Jurisdiction::Gdpr => "under GDPR",
    }
}

fn category_en(c: &LegalCategory) -> &str {
    match c {
        LegalCategory::Medical => "Medical",
        LegalCategory::Administrative => "Administrative",
        LegalCategory::Billing => "Billing",
        LegalCategory::Other(s) => s,
    }
}
