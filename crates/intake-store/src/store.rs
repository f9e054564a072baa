//! The narrow persistence contract consumed by the intake workflows.

use chrono::NaiveDate;

use intake_model::{
    Appointment, AppointmentStatus, AuditEntry, DocumentCatalog, Message, Student,
    SubmittedDocument,
};

use crate::error::StoreError;

/// Filter for appointment queries. An empty filter matches everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentFilter {
    pub student_id: Option<String>,
    pub date: Option<NaiveDate>,
    pub status: Option<AppointmentStatus>,
}

impl AppointmentFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn for_student(mut self, student_id: impl Into<String>) -> Self {
        self.student_id = Some(student_id.into());
        self
    }

    #[must_use]
    pub fn on_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: AppointmentStatus) -> Self {
        self.status = Some(status);
        self
    }

    pub fn matches(&self, appointment: &Appointment) -> bool {
        if let Some(student_id) = &self.student_id
            && appointment.student_id != *student_id
        {
            return false;
        }
        if let Some(date) = self.date
            && appointment.date != date
        {
            return false;
        }
        if let Some(status) = self.status
            && appointment.status != status
        {
            return false;
        }
        true
    }
}

/// Document-oriented persistence backing the intake workflows.
///
/// Implementations normalize raw record shapes at this boundary; the
/// engine and workflows only ever see the canonical schema.
pub trait IntakeStore {
    fn required_document_types(&self) -> Result<DocumentCatalog, StoreError>;

    /// Submissions for one student, every status included.
    fn submitted_documents(&self, student_id: &str) -> Result<Vec<SubmittedDocument>, StoreError>;
    fn all_documents(&self) -> Result<Vec<SubmittedDocument>, StoreError>;
    fn document(&self, id: &str) -> Result<SubmittedDocument, StoreError>;
    /// Insert a new submission, or replace the live record for the same
    /// `(student_id, document_type_id)` pair while preserving its
    /// identity. Returns the record id.
    fn submit_document(&mut self, document: SubmittedDocument) -> Result<String, StoreError>;
    fn update_submitted_document(&mut self, document: &SubmittedDocument)
    -> Result<(), StoreError>;
    fn delete_document(&mut self, id: &str) -> Result<(), StoreError>;

    fn appointments(&self, filter: &AppointmentFilter) -> Result<Vec<Appointment>, StoreError>;
    fn appointment(&self, id: &str) -> Result<Appointment, StoreError>;
    /// Persist a newly constructed appointment, assigning its id.
    fn persist_appointment(&mut self, appointment: Appointment) -> Result<String, StoreError>;
    fn update_appointment(&mut self, appointment: &Appointment) -> Result<(), StoreError>;

    fn students(&self) -> Result<Vec<Student>, StoreError>;
    fn student(&self, control_number: &str) -> Result<Student, StoreError>;
    fn add_student(&mut self, student: Student) -> Result<(), StoreError>;

    fn messages_for(&self, participant: &str) -> Result<Vec<Message>, StoreError>;
    fn message(&self, id: &str) -> Result<Message, StoreError>;
    fn send_message(&mut self, message: Message) -> Result<String, StoreError>;
    fn mark_message_read(&mut self, id: &str) -> Result<(), StoreError>;

    /// Append to the write-only audit sink.
    fn record_audit(&mut self, entry: AuditEntry) -> Result<(), StoreError>;
    fn audit_log(&self) -> Result<Vec<AuditEntry>, StoreError>;
}
