//! Integration tests for report building and export.

use chrono::{DateTime, Utc};
use intake_model::{DocumentCatalog, DocumentStatus, Role, Student, SubmittedDocument};
use intake_report::{DateRange, envelope, general_report, students_csv, students_report};

fn ts(value: &str) -> DateTime<Utc> {
    value.parse().expect("timestamp")
}

fn student(control_number: &str, name: &str) -> Student {
    Student {
        control_number: control_number.to_string(),
        full_name: name.to_string(),
        email: Some(format!("{control_number}@example.edu")),
        role: Role::Student,
    }
}

fn document(student_id: &str, type_id: &str, status: DocumentStatus) -> SubmittedDocument {
    SubmittedDocument {
        id: format!("doc-{student_id}-{type_id}"),
        student_id: student_id.to_string(),
        document_type_id: type_id.to_string(),
        status,
        review_comments: None,
        submitted_at: ts("2026-02-01T10:00:00Z"),
        reviewed_at: None,
        reviewer_id: None,
        storage_locator: String::new(),
        file_name: None,
        file_size: None,
    }
}

#[test]
fn csv_roster_lists_students_in_order() {
    let catalog = DocumentCatalog::default_enrollment();
    let students = vec![
        student("21001002", "Maria Gonzalez"),
        student("21001001", "Juan Perez"),
    ];
    let documents: Vec<SubmittedDocument> = catalog
        .iter()
        .map(|entry| document("21001001", &entry.id, DocumentStatus::Approved))
        .collect();

    let report = students_report(&catalog, &students, &documents, &[]);
    let csv = students_csv(&report).expect("render csv");
    let mut lines = csv.lines();

    insta::assert_snapshot!(
        lines.next().expect("header"),
        @"control_number,full_name,email,approved,pending,rejected,not_submitted,percent_complete,complete,appointments"
    );
    insta::assert_snapshot!(
        lines.next().expect("first row"),
        @"21001001,Juan Perez,21001001@example.edu,6,0,0,0,100,yes,0"
    );
    insta::assert_snapshot!(
        lines.next().expect("second row"),
        @"21001002,Maria Gonzalez,21001002@example.edu,0,0,0,6,0,no,0"
    );
    assert!(lines.next().is_none());
}

#[test]
fn envelope_carries_schema_and_kind() {
    let catalog = DocumentCatalog::default_enrollment();
    let report = general_report(&catalog, &[], &[], &[]);
    let wrapped = envelope("general", ts("2026-02-02T08:00:00Z"), report);
    let json = serde_json::to_value(&wrapped).expect("serialize envelope");
    assert_eq!(json["schema"], "enrollment-intake.report");
    assert_eq!(json["schema_version"], 1);
    assert_eq!(json["kind"], "general");
    assert_eq!(json["generated_at"], "2026-02-02T08:00:00+00:00");
    assert_eq!(json["report"]["students"], 0);
}

#[test]
fn date_range_serializes_into_reports() {
    let range = DateRange::default();
    let report = intake_report::documents_report(&[], range);
    let json = serde_json::to_value(&report).expect("serialize report");
    assert_eq!(json["total"], 0);
    assert!(json["range"]["from"].is_null());
}
