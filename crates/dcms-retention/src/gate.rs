//! # Deletion Gate
//!
//! The contract between the retention engine and the code that actually
//! deletes records. A raw [`DeletionRequest`] is validated (the caller's
//! responsibility, so the evaluator never sees a missing creation date or
//! an unknown jurisdiction), evaluated, and either blocked or forwarded to
//! a [`RecordStore`].
//!
//! The store is only touched when the verdict is deletable.

use std::sync::Arc;

use dcms_core::{Jurisdiction, LegalCategory, Timestamp, ValidationError};
use serde::{Deserialize, Serialize};

use crate::error::GateError;
use crate::evaluator::RetentionEvaluator;
use crate::facts::DocumentFacts;
use crate::verdict::Verdict;

/// Identifier of a stored document. Non-empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct DocumentId(String);

impl DocumentId {
    /// Create a document identifier, rejecting empty or blank input.
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let trimmed = value.into().trim().to_string();
        if trimmed.is_empty() {
            return Err(ValidationError::EmptyDocumentId);
        }
        Ok(Self(trimmed))
    }

    /// Access the identifier string.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for DocumentId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// A deletion request as submitted by the application, before validation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeletionRequest {
    /// Document identifier.
    pub id: String,
    /// Jurisdiction code (`ES`, `AR`, `GDPR`).
    pub jurisdiction: String,
    /// Legal category; absent or blank means administrative.
    #[serde(default)]
    pub legal_category: Option<String>,
    /// RFC 3339 creation timestamp; required.
    #[serde(default)]
    pub created_at: Option<String>,
    /// Content tags.
    #[serde(default)]
    pub tags: Vec<String>,
}

/// A request that passed caller-side validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedRequest {
    /// Target document.
    pub id: DocumentId,
    /// Evaluation facts.
    pub facts: DocumentFacts,
    /// Governing jurisdiction.
    pub jurisdiction: Jurisdiction,
}

impl DeletionRequest {
    /// Turn raw input into evaluation facts.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::EmptyDocumentId`] for a blank id.
    /// - [`ValidationError::UnknownJurisdiction`] outside `ES`/`AR`/`GDPR`.
    /// - [`ValidationError::MissingCreatedAt`] when `created_at` is absent or blank.
    /// - [`ValidationError::InvalidTimestamp`] when it is not RFC 3339.
    pub fn validate(&self) -> Result<ValidatedRequest, ValidationError> {
        let id = DocumentId::new(self.id.as_str())?;
        let jurisdiction: Jurisdiction = self.jurisdiction.parse()?;
        let created_at = match self.created_at.as_deref().map(str::trim) {
            None | Some("") => return Err(ValidationError::MissingCreatedAt),
            Some(raw) => Timestamp::parse_lenient(raw)?,
        };
        let facts = DocumentFacts::new(
            LegalCategory::from_input(self.legal_category.as_deref()),
            created_at,
        )
        .with_tags(self.tags.iter().cloned());
        Ok(ValidatedRequest {
            id,
            facts,
            jurisdiction,
        })
    }
}

/// Storage that can delete documents. Implemented by the application's
/// data layer.
pub trait RecordStore {
    /// Store-specific failure.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Permanently delete a document.
    fn delete(&self, id: &DocumentId) -> Result<(), Self::Error>;
}

/// What the gate did with a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeletionOutcome {
    /// The verdict permitted deletion and the store deleted the document.
    Deleted {
        /// Deleted document.
        id: DocumentId,
        /// Verdict that permitted it.
        verdict: Verdict,
    },
    /// The verdict forbade deletion; the store was not called.
    Blocked {
        /// Retained document.
        id: DocumentId,
        /// Verdict that blocked it.
        verdict: Verdict,
    },
}

impl DeletionOutcome {
    /// The verdict behind the outcome.
    pub fn verdict(&self) -> &Verdict {
        match self {
            Self::Deleted { verdict, .. } | Self::Blocked { verdict, .. } => verdict,
        }
    }

    /// True if the document was deleted.
    pub fn is_deleted(&self) -> bool {
        matches!(self, Self::Deleted { .. })
    }
}

/// Validates, evaluates, and conditionally deletes.
#[derive(Debug)]
pub struct DeletionGate<S> {
    evaluator: Arc<RetentionEvaluator>,
    store: S,
}

impl<S: RecordStore> DeletionGate<S> {
    /// Create a gate over a shared evaluator and a store.
    pub fn new(evaluator: Arc<RetentionEvaluator>, store: S) -> Self {
        Self { evaluator, store }
    }

    /// Access the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Validate and evaluate without deleting. Backs confirmation dialogs.
    pub fn preview(
        &self,
        request: &DeletionRequest,
        now: Timestamp,
    ) -> Result<(ValidatedRequest, Verdict), GateError> {
        let validated = request.validate()?;
        let verdict = self
            .evaluator
            .evaluate(&validated.facts, validated.jurisdiction, now);
        Ok((validated, verdict))
    }

    /// Delete the document if, and only if, the verdict permits it.
    pub fn request_deletion(
        &self,
        request: &DeletionRequest,
        now: Timestamp,
    ) -> Result<DeletionOutcome, GateError> {
        let (validated, verdict) = self.preview(request, now)?;
        let id = validated.id;

        if !verdict.deletable {
            tracing::warn!(
                document = %id,
                jurisdiction = %validated.jurisdiction,
                basis = %verdict.basis,
                retention_years = verdict.retention_years,
                "deletion blocked by retention policy"
            );
            return Ok(DeletionOutcome::Blocked { id, verdict });
        }

        self.store.delete(&id).map_err(|e| GateError::Store {
            id: id.to_string(),
            source: Box::new(e),
        })?;
        tracing::info!(
            document = %id,
            jurisdiction = %validated.jurisdiction,
            basis = %verdict.basis,
            "document deleted"
        );
        Ok(DeletionOutcome::Deleted { id, verdict })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::verdict::RetentionBasis;

    #[derive(Debug, thiserror::Error)]
    #[error("store offline")]
    struct Offline;

    #[derive(Debug, Default)]
    struct MemoryStore {
        deleted: Mutex<Vec<String>>,
        fail: bool,
    }

    impl RecordStore for MemoryStore {
        type Error = Offline;

        fn delete(&self, id: &DocumentId) -> Result<(), Offline> {
            if self.fail {
                return Err(Offline);
            }
            self.deleted.lock().unwrap().push(id.to_string());
            Ok(())
        }
    }

    fn gate(store: MemoryStore) -> DeletionGate<MemoryStore> {
        DeletionGate::new(Arc::new(RetentionEvaluator::new()), store)
    }

    fn now() -> Timestamp {
        Timestamp::parse("2026-10-19T00:00:00Z").unwrap()
    }

    fn request(category: &str, created_at: Option<&str>, jurisdiction: &str) -> DeletionRequest {
        DeletionRequest {
            id: "doc-42".into(),
            jurisdiction: jurisdiction.into(),
            legal_category: Some(category.into()),
            created_at: created_at.map(Into::into),
            tags: vec![],
        }
    }

    #[test]
    fn blocked_verdict_does_not_touch_store() {
        let gate = gate(MemoryStore::default());
        let outcome = gate
            .request_deletion(&request("medical", Some("2020-01-01T00:00:00Z"), "AR"), now())
            .unwrap();
        assert!(!outcome.is_deleted());
        assert_eq!(outcome.verdict().basis, RetentionBasis::ArgentinaMedicalPermanent);
        assert!(gate.store().deleted.lock().unwrap().is_empty());
    }

    #[test]
    fn deletable_verdict_deletes() {
        let gate = gate(MemoryStore::default());
        let outcome = gate
            .request_deletion(&request("billing", Some("2010-01-01T00:00:00Z"), "ES"), now())
            .unwrap();
        assert!(outcome.is_deleted());
        assert_eq!(*gate.store().deleted.lock().unwrap(), vec!["doc-42".to_string()]);
    }

    #[test]
    fn store_failure_surfaces() {
        let gate = gate(MemoryStore {
            fail: true,
            ..MemoryStore::default()
        });
        let err = gate
            .request_deletion(&request("marketing", Some("2025-01-01T00:00:00Z"), "GDPR"), now())
            .unwrap_err();
        assert!(matches!(err, GateError::Store { ref id, .. } if id == "doc-42"));
    }

    #[test]
    fn missing_created_at_rejected_before_evaluation() {
        let gate = gate(MemoryStore::default());
        for created_at in [None, Some(""), Some("  ")] {
            let err = gate
                .request_deletion(&request("billing", created_at, "ES"), now())
                .unwrap_err();
            assert!(matches!(err, GateError::Validation(ValidationError::MissingCreatedAt)));
        }
    }

    #[test]
    fn unparsable_created_at_rejected() {
        let err = request("billing", Some("last tuesday"), "ES")
            .validate()
            .unwrap_err();
        assert!(matches!(err, ValidationError::InvalidTimestamp { .. }));
    }

    #[test]
    fn unknown_jurisdiction_rejected() {
        let err = request("billing", Some("2020-01-01T00:00:00Z"), "FR")
            .validate()
            .unwrap_err();
        assert_eq!(err, ValidationError::UnknownJurisdiction("FR".into()));
    }

    #[test]
    fn blank_id_rejected() {
        let mut req = request("billing", Some("2020-01-01T00:00:00Z"), "ES");
        req.id = " ".into();
        assert_eq!(req.validate().unwrap_err(), ValidationError::EmptyDocumentId);
    }

    #[test]
    fn validation_normalizes_category_and_offsets() {
        let req = DeletionRequest {
            id: "doc-1".into(),
            jurisdiction: "ES".into(),
            legal_category: None,
            created_at: Some("2020-01-01T01:00:00+01:00".into()),
            tags: vec!["implant".into()],
        };
        let v = req.validate().unwrap();
        assert_eq!(v.facts.legal_category, LegalCategory::Administrative);
        assert_eq!(v.facts.created_at.to_iso8601(), "2020-01-01T00:00:00Z");
        assert!(v.facts.tags.contains("implant"));
    }

    #[test]
    fn request_deserializes_camel_case() {
        let req: DeletionRequest = serde_json::from_str(
            r#"{"id":"d","jurisdiction":"AR","legalCategory":"medical","createdAt":"2020-01-01T00:00:00Z","tags":["chronic"]}"#,
        )
        .unwrap();
        assert_eq!(req.legal_category.as_deref(), Some("medical"));
        assert_eq!(req.tags, vec!["chronic".to_string()]);
    }
}
