//! End-to-end CLI workflows: custom policy file, batch file, JSON output.

use std::path::PathBuf;

use dcms_cli::batch::{batch_entries, exit_code};
use dcms_cli::evaluate::{evaluate_args, EvaluateArgs};
use dcms_cli::{load_evaluator, EXIT_OK, EXIT_REJECTED_ROWS};
use dcms_retention::{BatchResult, RetentionBasis};

const NOW: &str = "2026-10-19T00:00:00Z";

fn write(dir: &tempfile::TempDir, name: &str, content: &str) -> PathBuf {
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn custom_policy_changes_batch_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let requests = write(
        &dir,
        "requests.json",
        r#"[
            {"id": "inv-1", "jurisdiction": "AR", "legalCategory": "billing",
             "createdAt": "2021-10-01T00:00:00Z"}
        ]"#,
    );

    // Five years old: retained under the built-in seven-year AR billing period.
    let builtin = load_evaluator(None).unwrap();
    let entries = batch_entries(&requests, Some(NOW), &builtin).unwrap();
    match &entries[0].result {
        BatchResult::Evaluated { verdict } => {
            assert!(!verdict.deletable);
            assert_eq!(verdict.retention_years, 7);
        }
        other => panic!("unexpected {other:?}"),
    }

    let policy = write(&dir, "policy.yaml", "jurisdictions:\n  AR:\n    billing: 3\n");
    let custom = load_evaluator(Some(&policy)).unwrap();
    let entries = batch_entries(&requests, Some(NOW), &custom).unwrap();
    match &entries[0].result {
        BatchResult::Evaluated { verdict } => {
            assert!(verdict.deletable);
            assert_eq!(verdict.retention_years, 3);
            assert_eq!(verdict.basis, RetentionBasis::StatutoryPeriod);
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(exit_code(&entries), EXIT_OK);
}

#[test]
fn custom_policy_keeps_argentine_medical_permanent() {
    let dir = tempfile::tempdir().unwrap();
    let policy = write(&dir, "policy.yaml", "jurisdictions:\n  ES:\n    billing: 6\n");
    let evaluator = load_evaluator(Some(&policy)).unwrap();
    let verdict = evaluate_args(
        &EvaluateArgs {
            jurisdiction: "AR".into(),
            category: Some("medical".into()),
            created_at: "1980-01-01T00:00:00Z".into(),
            tags: Vec::new(),
            now: Some(NOW.into()),
            json: true,
        },
        &evaluator,
    )
    .unwrap();
    assert!(!verdict.deletable);
    assert!(verdict.is_permanent());
}

#[test]
fn batch_json_output_is_tagged_by_status() {
    let dir = tempfile::tempdir().unwrap();
    let requests = write(
        &dir,
        "requests.yaml",
        r#"
- id: ok
  jurisdiction: ES
  legalCategory: administrative
  createdAt: "2010-01-01T00:00:00Z"
- id: bad
  jurisdiction: FR
  createdAt: "2010-01-01T00:00:00Z"
"#,
    );
    let evaluator = load_evaluator(None).unwrap();
    let entries = batch_entries(&requests, Some(NOW), &evaluator).unwrap();
    assert_eq!(exit_code(&entries), EXIT_REJECTED_ROWS);

    let json = serde_json::to_value(&entries).unwrap();
    assert_eq!(json[0]["id"], "ok");
    assert_eq!(json[0]["status"], "evaluated");
    assert_eq!(json[0]["verdict"]["deletable"], true);
    assert_eq!(json[0]["verdict"]["retentionYears"], 4);
    assert_eq!(json[1]["status"], "rejected");
    assert!(json[1]["error"].as_str().unwrap().contains("FR"));
}

#[test]
fn malformed_batch_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let requests = write(&dir, "requests.yaml", "id: not-a-list\n");
    let evaluator = load_evaluator(None).unwrap();
    assert!(batch_entries(&requests, Some(NOW), &evaluator).is_err());
}
