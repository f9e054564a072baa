//! In-memory store used by the CLI and tests.

use std::collections::BTreeMap;

use uuid::Uuid;

use intake_model::{
    Appointment, AppointmentPolicy, AuditEntry, DocumentCatalog, EnrollmentPeriod, Message,
    Student, SubmittedDocument,
};

use crate::error::StoreError;
use crate::snapshot::Snapshot;
use crate::store::{AppointmentFilter, IntakeStore};

/// `BTreeMap`-backed store holding every collection of one intake
/// deployment, loadable from and savable to a [`Snapshot`].
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    catalog: DocumentCatalog,
    policy: AppointmentPolicy,
    period: Option<EnrollmentPeriod>,
    students: BTreeMap<String, Student>,
    documents: BTreeMap<String, SubmittedDocument>,
    appointments: BTreeMap<String, Appointment>,
    messages: BTreeMap<String, Message>,
    audit: Vec<AuditEntry>,
}

impl MemoryStore {
    pub fn new(catalog: DocumentCatalog) -> Self {
        Self {
            catalog,
            ..Self::default()
        }
    }

    pub fn from_snapshot(snapshot: Snapshot) -> Self {
        let mut store = Self {
            catalog: snapshot.catalog,
            policy: snapshot.policy,
            period: snapshot.period,
            ..Self::default()
        };
        for student in snapshot.students {
            store.students.insert(student.control_number.clone(), student);
        }
        for document in snapshot.documents {
            store.documents.insert(document.id.clone(), document);
        }
        for appointment in snapshot.appointments {
            store.appointments.insert(appointment.id.clone(), appointment);
        }
        for message in snapshot.messages {
            store.messages.insert(message.id.clone(), message);
        }
        store.audit = snapshot.audit_log;
        store
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            catalog: self.catalog.clone(),
            policy: self.policy.clone(),
            period: self.period.clone(),
            students: self.students.values().cloned().collect(),
            documents: self.documents.values().cloned().collect(),
            appointments: self.appointments.values().cloned().collect(),
            messages: self.messages.values().cloned().collect(),
            audit_log: self.audit.clone(),
        }
    }

    pub fn policy(&self) -> &AppointmentPolicy {
        &self.policy
    }

    pub fn set_policy(&mut self, policy: AppointmentPolicy) {
        self.policy = policy;
    }

    pub fn period(&self) -> Option<&EnrollmentPeriod> {
        self.period.as_ref()
    }

    pub fn set_period(&mut self, period: Option<EnrollmentPeriod>) {
        self.period = period;
    }

    fn assign_id(id: &str) -> String {
        if id.is_empty() {
            Uuid::new_v4().to_string()
        } else {
            id.to_string()
        }
    }
}

impl IntakeStore for MemoryStore {
    fn required_document_types(&self) -> Result<DocumentCatalog, StoreError> {
        Ok(self.catalog.clone())
    }

    fn submitted_documents(&self, student_id: &str) -> Result<Vec<SubmittedDocument>, StoreError> {
        let mut documents: Vec<SubmittedDocument> = self
            .documents
            .values()
            .filter(|document| document.student_id == student_id)
            .cloned()
            .collect();
        documents.sort_by_key(|document| document.submitted_at);
        Ok(documents)
    }

    fn all_documents(&self) -> Result<Vec<SubmittedDocument>, StoreError> {
        let mut documents: Vec<SubmittedDocument> = self.documents.values().cloned().collect();
        documents.sort_by_key(|document| document.submitted_at);
        Ok(documents)
    }

    fn document(&self, id: &str) -> Result<SubmittedDocument, StoreError> {
        self.documents
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("document", id))
    }

    fn submit_document(&mut self, mut document: SubmittedDocument) -> Result<String, StoreError> {
        // A re-upload replaces the live record for the pair, keeping its id.
        let existing = self
            .documents
            .values()
            .find(|candidate| {
                candidate.student_id == document.student_id
                    && candidate.document_type_id == document.document_type_id
            })
            .map(|candidate| candidate.id.clone());
        let id = match existing {
            Some(id) => id,
            None => Self::assign_id(&document.id),
        };
        document.id = id.clone();
        self.documents.insert(id.clone(), document);
        Ok(id)
    }

    fn update_submitted_document(
        &mut self,
        document: &SubmittedDocument,
    ) -> Result<(), StoreError> {
        if !self.documents.contains_key(&document.id) {
            return Err(StoreError::not_found("document", &document.id));
        }
        self.documents.insert(document.id.clone(), document.clone());
        Ok(())
    }

    fn delete_document(&mut self, id: &str) -> Result<(), StoreError> {
        self.documents
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found("document", id))
    }

    fn appointments(&self, filter: &AppointmentFilter) -> Result<Vec<Appointment>, StoreError> {
        let mut appointments: Vec<Appointment> = self
            .appointments
            .values()
            .filter(|appointment| filter.matches(appointment))
            .cloned()
            .collect();
        appointments.sort_by_key(|appointment| (appointment.date, appointment.time));
        Ok(appointments)
    }

    fn appointment(&self, id: &str) -> Result<Appointment, StoreError> {
        self.appointments
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("appointment", id))
    }

    fn persist_appointment(&mut self, mut appointment: Appointment) -> Result<String, StoreError> {
        let id = Self::assign_id(&appointment.id);
        appointment.id = id.clone();
        self.appointments.insert(id.clone(), appointment);
        Ok(id)
    }

    fn update_appointment(&mut self, appointment: &Appointment) -> Result<(), StoreError> {
        if !self.appointments.contains_key(&appointment.id) {
            return Err(StoreError::not_found("appointment", &appointment.id));
        }
        self.appointments
            .insert(appointment.id.clone(), appointment.clone());
        Ok(())
    }

    fn students(&self) -> Result<Vec<Student>, StoreError> {
        Ok(self.students.values().cloned().collect())
    }

    fn student(&self, control_number: &str) -> Result<Student, StoreError> {
        self.students
            .get(control_number)
            .cloned()
            .ok_or_else(|| StoreError::not_found("student", control_number))
    }

    fn add_student(&mut self, student: Student) -> Result<(), StoreError> {
        if self.students.contains_key(&student.control_number) {
            return Err(StoreError::DuplicateStudent(student.control_number));
        }
        self.students
            .insert(student.control_number.clone(), student);
        Ok(())
    }

    fn messages_for(&self, participant: &str) -> Result<Vec<Message>, StoreError> {
        let mut messages: Vec<Message> = self
            .messages
            .values()
            .filter(|message| message.sender == participant || message.recipient == participant)
            .cloned()
            .collect();
        messages.sort_by_key(|message| message.sent_at);
        Ok(messages)
    }

    fn message(&self, id: &str) -> Result<Message, StoreError> {
        self.messages
            .get(id)
            .cloned()
            .ok_or_else(|| StoreError::not_found("message", id))
    }

    fn send_message(&mut self, mut message: Message) -> Result<String, StoreError> {
        let id = Self::assign_id(&message.id);
        message.id = id.clone();
        self.messages.insert(id.clone(), message);
        Ok(id)
    }

    fn mark_message_read(&mut self, id: &str) -> Result<(), StoreError> {
        match self.messages.get_mut(id) {
            Some(message) => {
                message.read = true;
                Ok(())
            }
            None => Err(StoreError::not_found("message", id)),
        }
    }

    fn record_audit(&mut self, entry: AuditEntry) -> Result<(), StoreError> {
        self.audit.push(entry);
        Ok(())
    }

    fn audit_log(&self) -> Result<Vec<AuditEntry>, StoreError> {
        Ok(self.audit.clone())
    }
}
