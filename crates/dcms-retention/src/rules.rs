//! # Retention Rules
//!
//! Each rule pairs a predicate over the evaluation context with the verdict
//! it produces. [`RetentionRule::evaluate`] returns `None` when the
//! predicate does not hold, letting the evaluator move on to the next rule.
//!
//! ## Standard Rules (priority order)
//!
//! | # | Rule | Predicate | Verdict |
//! |---|------|-----------|---------|
//! | 1 | [`ArgentinaMedicalPermanent`] | AR ∧ medical | never deletable, permanent |
//! | 2 | [`SpainComplexMedicalPermanent`] | ES ∧ medical ∧ complex tags | never deletable, permanent |
//! | 3 | [`SpainMedicalPeriod`] | ES ∧ medical ∧ table entry | deletable iff age ≥ period |
//! | 4 | [`StatutoryPeriod`] | administrative/billing ∧ table entry | deletable iff age ≥ period |
//! | 5 | [`UnregulatedDefault`] | always | deletable, 0 years |
//!
//! Adding a jurisdiction with a differently shaped rule means adding a rule
//! type here and inserting it in [`crate::evaluator::standard_rules`].

use std::fmt;

use dcms_core::{Jurisdiction, LegalCategory, Locale, Timestamp};

use crate::facts::DocumentFacts;
use crate::reason;
use crate::table::{RetentionPolicyTable, PERMANENT_RETENTION_YEARS};
use crate::verdict::{RetentionBasis, Verdict};

/// Everything a rule may inspect for one evaluation.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    /// Facts about the document.
    pub facts: &'a DocumentFacts,
    /// Governing jurisdiction.
    pub jurisdiction: Jurisdiction,
    /// Retention periods in force.
    pub table: &'a RetentionPolicyTable,
    /// Unfloored age in Julian years at the evaluation instant.
    pub age_years: f64,
}

impl<'a> RuleContext<'a> {
    /// Build a context, computing the document's age at `now`.
    pub fn new(
        facts: &'a DocumentFacts,
        jurisdiction: Jurisdiction,
        table: &'a RetentionPolicyTable,
        now: &Timestamp,
    ) -> Self {
        Self {
            facts,
            jurisdiction,
            table,
            age_years: facts.age_years(now),
        }
    }

    /// Reason-text locale for this jurisdiction.
    pub fn locale(&self) -> Locale {
        self.jurisdiction.locale()
    }

    fn category(&self) -> &LegalCategory {
        &self.facts.legal_category
    }

    fn period(&self) -> Option<u32> {
        self.table.lookup(self.jurisdiction, self.category())
    }

    fn period_elapsed(&self, years: u32) -> bool {
        self.age_years >= f64::from(years)
    }
}

/// A prioritized retention rule.
pub trait RetentionRule: Send + Sync + fmt::Debug {
    /// The basis reported on verdicts from this rule.
    fn basis(&self) -> RetentionBasis;

    /// The verdict if this rule applies, `None` otherwise.
    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Verdict>;
}

/// All Argentine medical records are permanent, regardless of age or tags.
#[derive(Debug, Clone, Copy, Default)]
pub struct ArgentinaMedicalPermanent;

impl RetentionRule for ArgentinaMedicalPermanent {
    fn basis(&self) -> RetentionBasis {
        RetentionBasis::ArgentinaMedicalPermanent
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Verdict> {
        if ctx.jurisdiction != Jurisdiction::Ar || *ctx.category() != LegalCategory::Medical {
            return None;
        }
        Some(Verdict {
            deletable: false,
            reason: reason::argentina_medical(ctx.locale()),
            retention_years: PERMANENT_RETENTION_YEARS,
            basis: self.basis(),
        })
    }
}

/// Spanish medical records tagged surgery, implant, or chronic are permanent.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpainComplexMedicalPermanent;

impl RetentionRule for SpainComplexMedicalPermanent {
    fn basis(&self) -> RetentionBasis {
        RetentionBasis::SpainComplexMedicalPermanent
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Verdict> {
        if ctx.jurisdiction != Jurisdiction::Es
            || *ctx.category() != LegalCategory::Medical
            || !ctx.facts.is_complex()
        {
            return None;
        }
        let triggers = ctx.facts.complexity_triggers();
        Some(Verdict {
            deletable: false,
            reason: reason::spain_complex_medical(ctx.locale(), &triggers),
            retention_years: PERMANENT_RETENTION_YEARS,
            basis: self.basis(),
        })
    }
}

/// Simple Spanish medical records follow the clinical-history period.
#[derive(Debug, Clone, Copy, Default)]
pub struct SpainMedicalPeriod;

impl RetentionRule for SpainMedicalPeriod {
    fn basis(&self) -> RetentionBasis {
        RetentionBasis::SpainMedicalPeriod
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Verdict> {
        if ctx.jurisdiction != Jurisdiction::Es || *ctx.category() != LegalCategory::Medical {
            return None;
        }
        let years = ctx.period()?;
        let deletable = ctx.period_elapsed(years);
        Some(Verdict {
            deletable,
            reason: reason::spain_medical_period(ctx.locale(), years, ctx.age_years, deletable),
            retention_years: years,
            basis: self.basis(),
        })
    }
}

/// Administrative and billing records follow the table, in any jurisdiction.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatutoryPeriod;

impl RetentionRule for StatutoryPeriod {
    fn basis(&self) -> RetentionBasis {
        RetentionBasis::StatutoryPeriod
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Verdict> {
        if !ctx.category().is_durational() {
            return None;
        }
        let years = ctx.period()?;
        let deletable = ctx.period_elapsed(years);
        Some(Verdict {
            deletable,
            reason: reason::statutory_period(
                ctx.locale(),
                ctx.jurisdiction,
                ctx.category(),
                years,
                ctx.age_years,
                deletable,
            ),
            retention_years: years,
            basis: self.basis(),
        })
    }
}

/// Fallback for every unmapped combination: deletion permitted.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnregulatedDefault;

impl UnregulatedDefault {
    /// The fallback verdict. Total: applies to every context.
    pub fn verdict(&self, ctx: &RuleContext<'_>) -> Verdict {
        Verdict {
            deletable: true,
            reason: reason::unregulated(ctx.locale(), ctx.jurisdiction, ctx.category()),
            retention_years: 0,
            basis: RetentionBasis::UnregulatedDefault,
        }
    }
}

impl RetentionRule for UnregulatedDefault {
    fn basis(&self) -> RetentionBasis {
        RetentionBasis::UnregulatedDefault
    }

    fn evaluate(&self, ctx: &RuleContext<'_>) -> Option<Verdict> {
        Some(self.verdict(ctx))
    }
}
