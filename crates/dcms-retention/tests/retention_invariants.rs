//! # Retention Invariants
//!
//! Property tests over the public evaluation API:
//!
//! - Argentine medical records are never deletable and always permanent.
//! - Complex Spanish medical records are never deletable and always permanent.
//! - Durational verdicts are monotonic in age around the threshold.
//! - Evaluation is total for any category string and any jurisdiction.
//! - Evaluation is idempotent.

use dcms_core::{Jurisdiction, LegalCategory, Timestamp, JULIAN_YEAR_SECONDS};
use dcms_retention::{
    evaluate, DocumentFacts, RetentionBasis, RetentionEvaluator, PERMANENT_RETENTION_YEARS,
};
use proptest::prelude::*;

/// 2026-10-19T00:00:00Z
const NOW_SECS: i64 = 1_792_368_000;

fn at(secs: i64) -> Timestamp {
    Timestamp::from_epoch_secs(secs).unwrap()
}

fn jurisdiction() -> impl Strategy<Value = Jurisdiction> {
    prop_oneof![
        Just(Jurisdiction::Es),
        Just(Jurisdiction::Ar),
        Just(Jurisdiction::Gdpr),
    ]
}

fn tags() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(
        prop_oneof![
            Just("surgery".to_string()),
            Just("implant".to_string()),
            Just("chronic".to_string()),
            "[a-z-]{0,12}",
        ],
        0..5,
    )
}

/// Creation instants from 120 years before `now` to 5 years after.
fn created_secs() -> impl Strategy<Value = i64> {
    (NOW_SECS - 120 * JULIAN_YEAR_SECONDS)..(NOW_SECS + 5 * JULIAN_YEAR_SECONDS)
}

proptest! {
    #[test]
    fn argentina_medical_is_never_deletable(created in created_secs(), tags in tags()) {
        let facts = DocumentFacts::new(LegalCategory::Medical, at(created)).with_tags(tags);
        let v = evaluate(&facts, Jurisdiction::Ar, at(NOW_SECS));
        prop_assert!(!v.deletable);
        prop_assert_eq!(v.retention_years, PERMANENT_RETENTION_YEARS);
    }

    #[test]
    fn spain_complex_medical_is_never_deletable(
        created in created_secs(),
        mut tags in tags(),
        marker in prop_oneof![Just("surgery"), Just("implant"), Just("chronic")],
    ) {
        tags.push(marker.to_string());
        let facts = DocumentFacts::new(LegalCategory::Medical, at(created)).with_tags(tags);
        let v = evaluate(&facts, Jurisdiction::Es, at(NOW_SECS));
        prop_assert!(!v.deletable);
        prop_assert_eq!(v.retention_years, PERMANENT_RETENTION_YEARS);
        prop_assert_eq!(v.basis, RetentionBasis::SpainComplexMedicalPermanent);
    }

    #[test]
    fn durational_verdicts_are_monotonic_in_age(
        j in jurisdiction(),
        billing in any::<bool>(),
        a in created_secs(),
        b in created_secs(),
    ) {
        let category = if billing { LegalCategory::Billing } else { LegalCategory::Administrative };
        // `older` was created first, so it is at least as old as `newer`.
        let (older, newer) = if a <= b { (a, b) } else { (b, a) };
        let v_old = evaluate(&DocumentFacts::new(category.clone(), at(older)), j, at(NOW_SECS));
        let v_new = evaluate(&DocumentFacts::new(category.clone(), at(newer)), j, at(NOW_SECS));

        prop_assert_eq!(v_old.retention_years, v_new.retention_years);
        prop_assert!(v_old.retention_years > 0 && v_old.retention_years < PERMANENT_RETENTION_YEARS);
        prop_assert!(!v_new.deletable || v_old.deletable, "younger record deletable but older not");

        let threshold_secs = i64::from(v_old.retention_years) * JULIAN_YEAR_SECONDS;
        prop_assert_eq!(v_old.deletable, NOW_SECS - older >= threshold_secs);
    }

    #[test]
    fn evaluation_is_total(
        j in jurisdiction(),
        category in ".{0,16}",
        created in created_secs(),
        tags in tags(),
    ) {
        let facts = DocumentFacts::new(LegalCategory::from_input(Some(&category)), at(created))
            .with_tags(tags);
        let v = evaluate(&facts, j, at(NOW_SECS));
        prop_assert!(!v.reason.is_empty());
        prop_assert!(v.retention_years <= PERMANENT_RETENTION_YEARS);
        prop_assert_eq!(v.retention_years == 0, v.basis == RetentionBasis::UnregulatedDefault);
    }

    #[test]
    fn evaluation_is_idempotent(
        j in jurisdiction(),
        category in prop_oneof![Just("medical"), Just("billing"), Just("administrative"), Just("x")],
        created in created_secs(),
        tags in tags(),
    ) {
        let facts = DocumentFacts::new(LegalCategory::from(category), at(created)).with_tags(tags);
        let evaluator = RetentionEvaluator::new();
        let first = evaluator.evaluate(&facts, j, at(NOW_SECS));
        let second = evaluator.evaluate(&facts, j, at(NOW_SECS));
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, evaluate(&facts, j, at(NOW_SECS)));
    }
}

#[test]
fn unregulated_reason_never_reads_like_an_expired_period() {
    let now = at(NOW_SECS);
    let old = at(NOW_SECS - 40 * JULIAN_YEAR_SECONDS);
    for &j in Jurisdiction::all() {
        let fallback = evaluate(&DocumentFacts::new(LegalCategory::from("marketing"), old), j, now);
        let expired = evaluate(&DocumentFacts::new(LegalCategory::Billing, old), j, now);
        assert!(fallback.deletable && expired.deletable);
        assert_ne!(fallback.basis, expired.basis);
        assert_ne!(fallback.reason, expired.reason);
        assert!(fallback.reason.contains("default") || fallback.reason.contains("defecto"));
        assert!(!expired.reason.contains("default") && !expired.reason.contains("defecto"));
    }
}
