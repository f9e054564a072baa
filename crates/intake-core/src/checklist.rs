//! Per-type checklist rows for the presentation layer.

use serde::Serialize;
use std::fmt;

use intake_model::{DocumentCatalog, DocumentStatus, RequiredDocumentType, SubmittedDocument};

/// Display state of one required document type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChecklistState {
    NotSubmitted,
    Submitted,
    Approved,
    Rejected,
}

impl ChecklistState {
    pub fn as_str(&self) -> &'static str {
        match self {
            ChecklistState::NotSubmitted => "not submitted",
            ChecklistState::Submitted => "submitted",
            ChecklistState::Approved => "approved",
            ChecklistState::Rejected => "rejected",
        }
    }
}

impl fmt::Display for ChecklistState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<DocumentStatus> for ChecklistState {
    fn from(status: DocumentStatus) -> Self {
        match status {
            DocumentStatus::Submitted => ChecklistState::Submitted,
            DocumentStatus::Approved => ChecklistState::Approved,
            DocumentStatus::Rejected => ChecklistState::Rejected,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ChecklistRow {
    pub document_type: RequiredDocumentType,
    pub state: ChecklistState,
    pub submission: Option<SubmittedDocument>,
}

/// Pair every catalog entry with the student's live submission, if any.
pub fn build_checklist(
    catalog: &DocumentCatalog,
    submitted: &[SubmittedDocument],
) -> Vec<ChecklistRow> {
    catalog
        .iter()
        .map(|required| {
            let submission = submitted
                .iter()
                .filter(|document| document.document_type_id == required.id)
                .max_by_key(|document| document.submitted_at)
                .cloned();
            let state = submission
                .as_ref()
                .map_or(ChecklistState::NotSubmitted, |document| {
                    ChecklistState::from(document.status)
                });
            ChecklistRow {
                document_type: required.clone(),
                state,
                submission,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};

    fn submission(type_id: &str, status: DocumentStatus, at: &str) -> SubmittedDocument {
        SubmittedDocument {
            id: format!("doc-{type_id}"),
            student_id: "21001001".to_string(),
            document_type_id: type_id.to_string(),
            status,
            review_comments: None,
            submitted_at: at.parse::<DateTime<Utc>>().expect("timestamp"),
            reviewed_at: None,
            reviewer_id: None,
            storage_locator: String::new(),
            file_name: None,
            file_size: None,
        }
    }

    #[test]
    fn checklist_covers_every_catalog_entry_in_order() {
        let catalog = DocumentCatalog::default_enrollment();
        let submitted = vec![submission(
            "national_id",
            DocumentStatus::Approved,
            "2026-02-01T10:00:00Z",
        )];
        let rows = build_checklist(&catalog, &submitted);
        assert_eq!(rows.len(), catalog.len());
        assert_eq!(rows[0].document_type.id, "birth_certificate");
        assert_eq!(rows[0].state, ChecklistState::NotSubmitted);
        let national_id = rows
            .iter()
            .find(|row| row.document_type.id == "national_id")
            .expect("national_id row");
        assert_eq!(national_id.state, ChecklistState::Approved);
        assert!(national_id.submission.is_some());
    }
}
