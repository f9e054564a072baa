//! Unit tests for documentation status computation.

use chrono::{DateTime, Utc};
use intake_engine::{compute_documentation_status, is_eligible_for_appointment};
use intake_model::{
    DocumentCatalog, DocumentStatus, RequiredDocumentType, SubmittedDocument,
};

fn catalog_of(ids: &[(&str, bool)]) -> DocumentCatalog {
    let entries = ids
        .iter()
        .map(|(id, mandatory)| RequiredDocumentType {
            id: (*id).to_string(),
            display_name: (*id).to_string(),
            description: String::new(),
            mandatory: *mandatory,
        })
        .collect();
    DocumentCatalog::new(entries).expect("unique ids")
}

fn mandatory_catalog(ids: &[&str]) -> DocumentCatalog {
    let entries: Vec<(&str, bool)> = ids.iter().map(|id| (*id, true)).collect();
    catalog_of(&entries)
}

fn submission(
    document_type_id: &str,
    status: DocumentStatus,
    submitted_at: &str,
) -> SubmittedDocument {
    SubmittedDocument {
        id: format!("doc-{document_type_id}"),
        student_id: "21001001".to_string(),
        document_type_id: document_type_id.to_string(),
        status,
        review_comments: None,
        submitted_at: submitted_at.parse::<DateTime<Utc>>().expect("timestamp"),
        reviewed_at: None,
        reviewer_id: None,
        storage_locator: format!("uploads/{document_type_id}.pdf"),
        file_name: None,
        file_size: None,
    }
}

#[test]
fn empty_submissions_leave_everything_not_submitted() {
    let catalog = mandatory_catalog(&["a", "b", "c", "d"]);
    let status = compute_documentation_status(&catalog, &[]);
    assert_eq!(status.total, 4);
    assert_eq!(status.not_submitted_count, 4);
    assert_eq!(status.approved_count, 0);
    assert_eq!(status.percent_complete, 0);
    assert!(!status.is_complete);
    assert!(!is_eligible_for_appointment(&status));
}

#[test]
fn fully_approved_catalog_is_complete() {
    let catalog = mandatory_catalog(&["a", "b", "c"]);
    let submitted = vec![
        submission("a", DocumentStatus::Approved, "2026-02-01T10:00:00Z"),
        submission("b", DocumentStatus::Approved, "2026-02-01T11:00:00Z"),
        submission("c", DocumentStatus::Approved, "2026-02-01T12:00:00Z"),
    ];
    let status = compute_documentation_status(&catalog, &submitted);
    assert_eq!(status.approved_count, 3);
    assert_eq!(status.percent_complete, 100);
    assert!(status.is_complete);
    assert!(is_eligible_for_appointment(&status));
}

#[test]
fn mixed_statuses_are_counted_once_each() {
    let catalog = mandatory_catalog(&["a", "b", "c", "d"]);
    let submitted = vec![
        submission("a", DocumentStatus::Approved, "2026-02-01T10:00:00Z"),
        submission("b", DocumentStatus::Submitted, "2026-02-01T10:00:00Z"),
        submission("c", DocumentStatus::Rejected, "2026-02-01T10:00:00Z"),
    ];
    let status = compute_documentation_status(&catalog, &submitted);
    assert_eq!(status.approved_count, 1);
    assert_eq!(status.pending_count, 1);
    assert_eq!(status.rejected_count, 1);
    assert_eq!(status.not_submitted_count, 1);
    assert_eq!(
        status.total,
        status.approved_count
            + status.pending_count
            + status.rejected_count
            + status.not_submitted_count
    );
}

#[test]
fn five_of_six_rounds_to_eighty_three() {
    let catalog = mandatory_catalog(&["a", "b", "c", "d", "e", "f"]);
    let submitted: Vec<SubmittedDocument> = ["a", "b", "c", "d", "e"]
        .iter()
        .map(|id| submission(id, DocumentStatus::Approved, "2026-02-01T10:00:00Z"))
        .collect();
    let status = compute_documentation_status(&catalog, &submitted);
    assert_eq!(status.percent_complete, 83);
    assert!(!status.is_complete);
}

#[test]
fn empty_catalog_yields_zero_without_dividing() {
    let catalog = DocumentCatalog::default();
    let status = compute_documentation_status(&catalog, &[]);
    assert_eq!(status.total, 0);
    assert_eq!(status.percent_complete, 0);
    assert!(!status.is_complete);
    assert!(!status.is_complete_mandatory_only);
}

#[test]
fn computation_is_idempotent() {
    let catalog = mandatory_catalog(&["a", "b"]);
    let submitted = vec![submission("a", DocumentStatus::Approved, "2026-02-01T10:00:00Z")];
    let first = compute_documentation_status(&catalog, &submitted);
    let second = compute_documentation_status(&catalog, &submitted);
    assert_eq!(first, second);
}

#[test]
fn reupload_after_rejection_counts_as_pending() {
    let catalog = mandatory_catalog(&["a"]);
    let submitted = vec![
        submission("a", DocumentStatus::Rejected, "2026-02-01T10:00:00Z"),
        submission("a", DocumentStatus::Submitted, "2026-02-03T09:00:00Z"),
    ];
    let status = compute_documentation_status(&catalog, &submitted);
    assert_eq!(status.pending_count, 1);
    assert_eq!(status.rejected_count, 0);
}

#[test]
fn latest_submission_wins_on_duplicates() {
    let catalog = mandatory_catalog(&["a"]);
    // Caller-side defect: two live records for the same type. The newer
    // approval must win regardless of element order.
    let submitted = vec![
        submission("a", DocumentStatus::Approved, "2026-02-05T10:00:00Z"),
        submission("a", DocumentStatus::Rejected, "2026-02-01T10:00:00Z"),
    ];
    let status = compute_documentation_status(&catalog, &submitted);
    assert_eq!(status.approved_count, 1);
    assert_eq!(status.rejected_count, 0);
    assert!(status.is_complete);
}

#[test]
fn optional_entries_block_the_strict_reading_only() {
    let catalog = catalog_of(&[("a", true), ("b", true), ("extra", false)]);
    let submitted = vec![
        submission("a", DocumentStatus::Approved, "2026-02-01T10:00:00Z"),
        submission("b", DocumentStatus::Approved, "2026-02-01T10:00:00Z"),
    ];
    let status = compute_documentation_status(&catalog, &submitted);
    assert!(!status.is_complete);
    assert!(status.is_complete_mandatory_only);
}
