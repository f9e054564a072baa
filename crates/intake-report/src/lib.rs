//! Aggregate reports over the intake collections.
//!
//! Report builders are pure functions over slices the caller fetched;
//! export helpers wrap them in a versioned JSON envelope or CSV.

pub mod appointments;
pub mod common;
pub mod documents;
pub mod export;
pub mod general;
pub mod students;

pub use appointments::{
    AppointmentStatusCounts, AppointmentsReport, AttendanceCounts, appointments_report,
};
pub use common::DateRange;
pub use documents::{DocumentStatusCounts, DocumentsReport, documents_report};
pub use export::{ReportEnvelope, envelope, students_csv, write_report_json};
pub use general::{GeneralReport, general_report};
pub use students::{StudentReportRow, StudentsReport, students_report};
