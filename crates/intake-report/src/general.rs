//! Headline statistics for the admin dashboard.

use serde::Serialize;

use intake_model::{Appointment, DocumentCatalog, Student, SubmittedDocument};

use crate::appointments::{AppointmentStatusCounts, appointments_report};
use crate::common::DateRange;
use crate::documents::{DocumentStatusCounts, documents_report};
use crate::students::students_report;

#[derive(Debug, Clone, Serialize)]
pub struct GeneralReport {
    pub students: usize,
    pub complete_students: usize,
    pub incomplete_students: usize,
    pub documents: DocumentStatusCounts,
    pub appointments: AppointmentStatusCounts,
}

pub fn general_report(
    catalog: &DocumentCatalog,
    students: &[Student],
    documents: &[SubmittedDocument],
    appointments: &[Appointment],
) -> GeneralReport {
    let roster = students_report(catalog, students, documents, appointments);
    let document_counts = documents_report(documents, DateRange::default());
    let appointment_counts = appointments_report(appointments, DateRange::default());
    GeneralReport {
        students: roster.total,
        complete_students: roster.complete,
        incomplete_students: roster.incomplete,
        documents: document_counts.by_status,
        appointments: appointment_counts.by_status,
    }
}
