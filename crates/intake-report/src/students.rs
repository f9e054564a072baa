//! Per-student documentation roster.

use serde::Serialize;

use intake_engine::compute_documentation_status;
use intake_model::{
    Appointment, DocumentCatalog, DocumentationStatus, Role, Student, SubmittedDocument,
};

#[derive(Debug, Clone, Serialize)]
pub struct StudentReportRow {
    pub control_number: String,
    pub full_name: String,
    pub email: Option<String>,
    pub documentation: DocumentationStatus,
    pub appointment_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct StudentsReport {
    pub total: usize,
    pub complete: usize,
    pub incomplete: usize,
    pub without_documents: usize,
    pub rows: Vec<StudentReportRow>,
}

/// One row per enrolled student with their recomputed documentation
/// status. Administrator accounts are skipped.
pub fn students_report(
    catalog: &DocumentCatalog,
    students: &[Student],
    documents: &[SubmittedDocument],
    appointments: &[Appointment],
) -> StudentsReport {
    let mut rows: Vec<StudentReportRow> = students
        .iter()
        .filter(|student| student.role == Role::Student)
        .map(|student| {
            let own_documents: Vec<SubmittedDocument> = documents
                .iter()
                .filter(|document| document.student_id == student.control_number)
                .cloned()
                .collect();
            let documentation = compute_documentation_status(catalog, &own_documents);
            let appointment_count = appointments
                .iter()
                .filter(|appointment| appointment.student_id == student.control_number)
                .count();
            StudentReportRow {
                control_number: student.control_number.clone(),
                full_name: student.full_name.clone(),
                email: student.email.clone(),
                documentation,
                appointment_count,
            }
        })
        .collect();
    rows.sort_by(|a, b| a.control_number.cmp(&b.control_number));

    let complete = rows
        .iter()
        .filter(|row| row.documentation.is_complete)
        .count();
    let without_documents = rows
        .iter()
        .filter(|row| !row.documentation.has_submissions())
        .count();
    StudentsReport {
        total: rows.len(),
        complete,
        incomplete: rows.len() - complete,
        without_documents,
        rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, Utc};
    use intake_model::DocumentStatus;

    fn student(control_number: &str, role: Role) -> Student {
        Student {
            control_number: control_number.to_string(),
            full_name: format!("Student {control_number}"),
            email: None,
            role,
        }
    }

    fn approved(student_id: &str, type_id: &str) -> SubmittedDocument {
        SubmittedDocument {
            id: format!("doc-{student_id}-{type_id}"),
            student_id: student_id.to_string(),
            document_type_id: type_id.to_string(),
            status: DocumentStatus::Approved,
            review_comments: None,
            submitted_at: "2026-02-01T10:00:00Z".parse::<DateTime<Utc>>().unwrap(),
            reviewed_at: None,
            reviewer_id: None,
            storage_locator: String::new(),
            file_name: None,
            file_size: None,
        }
    }

    #[test]
    fn tallies_complete_and_empty_students() {
        let catalog = DocumentCatalog::default_enrollment();
        let students = vec![
            student("21001001", Role::Student),
            student("21001002", Role::Student),
            student("ADMIN", Role::Admin),
        ];
        let documents: Vec<SubmittedDocument> = catalog
            .iter()
            .map(|entry| approved("21001001", &entry.id))
            .collect();

        let report = students_report(&catalog, &students, &documents, &[]);
        assert_eq!(report.total, 2); // admin excluded
        assert_eq!(report.complete, 1);
        assert_eq!(report.incomplete, 1);
        assert_eq!(report.without_documents, 1);
        assert_eq!(report.rows[0].control_number, "21001001");
        assert_eq!(report.rows[0].documentation.percent_complete, 100);
    }
}
