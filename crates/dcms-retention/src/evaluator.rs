//! # Retention Evaluator
//!
//! Runs the retention rules in fixed priority order and returns the first
//! verdict produced, falling through to [`UnregulatedDefault`].
//!
//! The evaluator is pure: it never reads the clock (`now` is an argument),
//! holds no mutable state, and never fails. It is `Send + Sync` and may be
//! shared freely across threads.

use std::sync::OnceLock;

use dcms_core::{Jurisdiction, Timestamp};

use crate::facts::DocumentFacts;
use crate::rules::{
    ArgentinaMedicalPermanent, RetentionRule, RuleContext, SpainComplexMedicalPermanent,
    SpainMedicalPeriod, StatutoryPeriod, UnregulatedDefault,
};
use crate::table::RetentionPolicyTable;
use crate::verdict::{RetentionBasis, Verdict};

/// The standard rules, highest priority first.
///
/// Absolute rules precede durational ones and complexity precedes duration.
/// The unregulated default is not in this list; the evaluator applies it
/// when nothing matches.
pub fn standard_rules() -> Vec<Box<dyn RetentionRule>> {
    vec![
        Box::new(ArgentinaMedicalPermanent),
        Box::new(SpainComplexMedicalPermanent),
        Box::new(SpainMedicalPeriod),
        Box::new(StatutoryPeriod),
    ]
}

/// Evaluates documents against a retention table.
#[derive(Debug)]
pub struct RetentionEvaluator {
    table: RetentionPolicyTable,
    rules: Vec<Box<dyn RetentionRule>>,
    fallback: UnregulatedDefault,
}

impl RetentionEvaluator {
    /// Evaluator over the built-in table.
    pub fn new() -> Self {
        Self::with_table(RetentionPolicyTable::builtin())
    }

    /// Evaluator over a configured table with the standard rules.
    pub fn with_table(table: RetentionPolicyTable) -> Self {
        Self {
            table,
            rules: standard_rules(),
            fallback: UnregulatedDefault,
        }
    }

    /// The table in force.
    pub fn table(&self) -> &RetentionPolicyTable {
        &self.table
    }

    /// Rule bases in the order they are tried, ending with the fallback.
    pub fn rule_order(&self) -> Vec<RetentionBasis> {
        self.rules
            .iter()
            .map(|r| r.basis())
            .chain(std::iter::once(self.fallback.basis()))
            .collect()
    }

    /// Decide whether `facts` may be deleted in `jurisdiction` at `now`.
    pub fn evaluate(
        &self,
        facts: &DocumentFacts,
        jurisdiction: Jurisdiction,
        now: Timestamp,
    ) -> Verdict {
        let ctx = RuleContext::new(facts, jurisdiction, &self.table, &now);
        let verdict = self
            .rules
            .iter()
            .find_map(|rule| rule.evaluate(&ctx))
            .unwrap_or_else(|| self.fallback.verdict(&ctx));

        tracing::debug!(
            jurisdiction = %jurisdiction,
            category = %facts.legal_category,
            age_years = ctx.age_years,
            basis = %verdict.basis,
            deletable = verdict.deletable,
            retention_years = verdict.retention_years,
            "retention verdict"
        );
        verdict
    }
}

impl Default for RetentionEvaluator {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluate against the built-in table.
pub fn evaluate(facts: &DocumentFacts, jurisdiction: Jurisdiction, now: Timestamp) -> Verdict {
    static DEFAULT: OnceLock<RetentionEvaluator> = OnceLock::new();
    DEFAULT
        .get_or_init(RetentionEvaluator::new)
        .evaluate(facts, jurisdiction, now)
}
