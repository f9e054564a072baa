//! Intake workflows.
//!
//! Each mutating workflow validates through the engine, persists through
//! the store, appends an audit entry, and emits the notification message
//! the affected party expects. The engine stays pure; this layer owns
//! the clock arguments and all I/O.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};

use intake_engine::{
    ReviewDecision, Slot, cancel, check_slot_availability, compute_documentation_status, confirm,
    create_appointment, record_attendance, reschedule, resubmit, review,
};
use intake_model::{
    Appointment, AppointmentPolicy, AppointmentStatus, AttendanceOutcome, AuditAction, AuditEntry,
    DocumentStatus, DocumentationStatus, EnrollmentPeriod, Message, MessageCategory,
    SubmittedDocument,
};
use intake_store::{AppointmentFilter, IntakeStore};

use crate::checklist::{ChecklistRow, build_checklist};
use crate::error::{Result, WorkflowError};
use crate::notifications;

/// Actor id used for administration-side actions and notifications.
pub const ADMIN_ACTOR: &str = "admin";

/// A student's upload, described by the calling layer.
///
/// The binary transfer already happened against the external storage
/// service; only the resulting locator and metadata arrive here.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub student_id: String,
    pub document_type_id: String,
    pub storage_locator: String,
    pub file_name: Option<String>,
    pub file_size: Option<u64>,
}

pub struct IntakeService<'a, S: IntakeStore> {
    store: &'a mut S,
    policy: AppointmentPolicy,
    period: Option<EnrollmentPeriod>,
}

impl<'a, S: IntakeStore> IntakeService<'a, S> {
    pub fn new(store: &'a mut S, policy: AppointmentPolicy) -> Self {
        Self {
            store,
            policy,
            period: None,
        }
    }

    /// Gate uploads and scheduling on an enrollment window.
    #[must_use]
    pub fn with_period(mut self, period: Option<EnrollmentPeriod>) -> Self {
        self.period = period;
        self
    }

    pub fn policy(&self) -> &AppointmentPolicy {
        &self.policy
    }

    /// Recompute the student's documentation status from the store.
    pub fn documentation_status(&self, student_id: &str) -> Result<DocumentationStatus> {
        let catalog = self.store.required_document_types()?;
        let submitted = self.store.submitted_documents(student_id)?;
        Ok(compute_documentation_status(&catalog, &submitted))
    }

    /// Per-type checklist for the student's documents view.
    pub fn student_checklist(&self, student_id: &str) -> Result<Vec<ChecklistRow>> {
        self.store.student(student_id)?;
        let catalog = self.store.required_document_types()?;
        let submitted = self.store.submitted_documents(student_id)?;
        Ok(build_checklist(&catalog, &submitted))
    }

    /// Record an upload, superseding any live submission for the same
    /// document type. Returns the document id.
    pub fn upload_document(
        &mut self,
        request: &UploadRequest,
        now: DateTime<Utc>,
        today: NaiveDate,
    ) -> Result<String> {
        self.ensure_period_open(today)?;
        self.store.student(&request.student_id)?;
        let catalog = self.store.required_document_types()?;
        let Some(required) = catalog.get(&request.document_type_id) else {
            return Err(WorkflowError::UnknownDocumentType(
                request.document_type_id.clone(),
            ));
        };
        let display_name = required.display_name.clone();

        let existing = self
            .store
            .submitted_documents(&request.student_id)?
            .into_iter()
            .find(|document| document.document_type_id == request.document_type_id);
        let reupload = existing.is_some();
        let id = match existing {
            Some(mut document) => {
                resubmit(
                    &mut document,
                    request.storage_locator.clone(),
                    request.file_name.clone(),
                    request.file_size,
                    now,
                );
                self.store.update_submitted_document(&document)?;
                document.id
            }
            None => self.store.submit_document(SubmittedDocument {
                id: String::new(),
                student_id: request.student_id.clone(),
                document_type_id: request.document_type_id.clone(),
                status: DocumentStatus::Submitted,
                review_comments: None,
                submitted_at: now,
                reviewed_at: None,
                reviewer_id: None,
                storage_locator: request.storage_locator.clone(),
                file_name: request.file_name.clone(),
                file_size: request.file_size,
            })?,
        };

        tracing::info!(
            student_id = %request.student_id,
            document_type_id = %request.document_type_id,
            reupload,
            "document uploaded"
        );
        let action = if reupload { "Re-upload" } else { "Upload" };
        self.audit(
            &request.student_id,
            AuditAction::Document,
            format!("{action} of {display_name}"),
            now,
        )?;
        let (subject, body) =
            notifications::document_uploaded(&request.student_id, &display_name, reupload);
        self.notify(
            &request.student_id,
            ADMIN_ACTOR,
            subject,
            body,
            MessageCategory::Document,
            Some(id.clone()),
            now,
        )?;
        Ok(id)
    }

    /// Apply an admin review decision and notify the student.
    pub fn review_document(
        &mut self,
        document_id: &str,
        decision: ReviewDecision,
        comments: Option<String>,
        reviewer_id: &str,
        now: DateTime<Utc>,
    ) -> Result<SubmittedDocument> {
        let mut document = self.store.document(document_id)?;
        review(&mut document, decision, comments, reviewer_id, now)?;
        self.store.update_submitted_document(&document)?;

        let catalog = self.store.required_document_types()?;
        let display_name = catalog
            .get(&document.document_type_id)
            .map(|entry| entry.display_name.clone())
            .unwrap_or_else(|| document.document_type_id.clone());

        tracing::info!(document_id, %decision, "document reviewed");
        self.audit(
            reviewer_id,
            AuditAction::Document,
            format!("Document {decision}: {display_name}"),
            now,
        )?;
        let (subject, body) = notifications::document_reviewed(
            &display_name,
            decision,
            document.review_comments.as_deref(),
        );
        self.notify(
            ADMIN_ACTOR,
            &document.student_id,
            subject,
            body,
            MessageCategory::Document,
            Some(document.id.clone()),
            now,
        )?;
        Ok(document)
    }

    /// Book an appointment once the engine's gates pass.
    pub fn schedule_appointment(
        &mut self,
        student_id: &str,
        date: NaiveDate,
        time: NaiveTime,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<Appointment> {
        self.ensure_period_open(today)?;
        let student = self.store.student(student_id)?;
        let documentation = self.documentation_status(student_id)?;
        let existing = self.store.appointments(&AppointmentFilter::new())?;
        let mut appointment = create_appointment(
            student_id,
            date,
            time,
            today,
            &documentation,
            &existing,
            &self.policy,
        )?;
        let id = self.store.persist_appointment(appointment.clone())?;
        appointment.id = id.clone();

        tracing::info!(student_id, %date, %time, "appointment scheduled");
        self.audit(
            ADMIN_ACTOR,
            AuditAction::Appointment,
            format!(
                "Appointment scheduled for {} on {} at {}",
                student.full_name,
                date.format("%Y-%m-%d"),
                time.format("%H:%M"),
            ),
            now,
        )?;
        let (subject, body) = notifications::appointment_scheduled(date, time);
        self.notify(
            ADMIN_ACTOR,
            student_id,
            subject,
            body,
            MessageCategory::Appointment,
            Some(id),
            now,
        )?;
        Ok(appointment)
    }

    /// Student confirmation of an upcoming appointment.
    pub fn confirm_appointment(
        &mut self,
        appointment_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Appointment> {
        let mut appointment = self.store.appointment(appointment_id)?;
        confirm(&mut appointment)?;
        self.store.update_appointment(&appointment)?;
        self.audit(
            &appointment.student_id,
            AuditAction::Appointment,
            format!(
                "Attendance confirmed for the appointment on {}",
                appointment.date.format("%Y-%m-%d"),
            ),
            now,
        )?;
        Ok(appointment)
    }

    /// Move an appointment to a new slot, re-validating availability.
    /// The appointment's own slot does not count against the new date.
    pub fn reschedule_appointment(
        &mut self,
        appointment_id: &str,
        new_date: NaiveDate,
        new_time: NaiveTime,
        today: NaiveDate,
        now: DateTime<Utc>,
    ) -> Result<Appointment> {
        let mut appointment = self.store.appointment(appointment_id)?;
        let on_date: Vec<Appointment> = self
            .store
            .appointments(&AppointmentFilter::new().on_date(new_date))?
            .into_iter()
            .filter(|candidate| {
                candidate.id != appointment.id
                    && candidate.status != AppointmentStatus::Cancelled
            })
            .collect();
        if let Some(error) =
            check_slot_availability(new_date, new_time, today, &on_date, &self.policy).rejection()
        {
            return Err(error.into());
        }
        reschedule(&mut appointment, new_date, new_time)?;
        self.store.update_appointment(&appointment)?;

        tracing::info!(appointment_id, %new_date, %new_time, "appointment rescheduled");
        self.audit(
            ADMIN_ACTOR,
            AuditAction::Appointment,
            format!(
                "Appointment rescheduled to {} at {}",
                new_date.format("%Y-%m-%d"),
                new_time.format("%H:%M"),
            ),
            now,
        )?;
        let (subject, body) = notifications::appointment_rescheduled(new_date, new_time);
        self.notify(
            ADMIN_ACTOR,
            &appointment.student_id,
            subject,
            body,
            MessageCategory::Appointment,
            Some(appointment.id.clone()),
            now,
        )?;
        Ok(appointment)
    }

    /// Cancel an active appointment. The party who did not cancel gets
    /// the notification.
    pub fn cancel_appointment(
        &mut self,
        appointment_id: &str,
        reason: Option<String>,
        actor_id: &str,
        now: DateTime<Utc>,
    ) -> Result<Appointment> {
        let mut appointment = self.store.appointment(appointment_id)?;
        cancel(&mut appointment, reason)?;
        self.store.update_appointment(&appointment)?;

        tracing::info!(appointment_id, actor_id, "appointment cancelled");
        self.audit(
            actor_id,
            AuditAction::Appointment,
            format!(
                "Appointment cancelled for {} at {}",
                appointment.date.format("%Y-%m-%d"),
                appointment.time.format("%H:%M"),
            ),
            now,
        )?;
        let recipient = if actor_id == appointment.student_id {
            ADMIN_ACTOR.to_string()
        } else {
            appointment.student_id.clone()
        };
        let (subject, body) = notifications::appointment_cancelled(
            appointment.date,
            appointment.time,
            appointment.cancellation_reason.as_deref(),
        );
        self.notify(
            actor_id,
            &recipient,
            subject,
            body,
            MessageCategory::Appointment,
            Some(appointment.id.clone()),
            now,
        )?;
        Ok(appointment)
    }

    /// Close out a confirmed appointment with its attendance outcome.
    pub fn record_attendance(
        &mut self,
        appointment_id: &str,
        outcome: AttendanceOutcome,
        notes: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<Appointment> {
        let mut appointment = self.store.appointment(appointment_id)?;
        record_attendance(&mut appointment, outcome, notes)?;
        self.store.update_appointment(&appointment)?;

        tracing::info!(appointment_id, %outcome, "attendance recorded");
        self.audit(
            ADMIN_ACTOR,
            AuditAction::Appointment,
            format!(
                "Attendance recorded for {}: {}",
                appointment.student_id, outcome,
            ),
            now,
        )?;
        if outcome == AttendanceOutcome::Attended {
            let (subject, body) = notifications::attendance_recorded(appointment.date);
            self.notify(
                ADMIN_ACTOR,
                &appointment.student_id,
                subject,
                body,
                MessageCategory::Appointment,
                Some(appointment.id.clone()),
                now,
            )?;
        }
        Ok(appointment)
    }

    /// Remind the student of an upcoming appointment.
    pub fn send_reminder(&mut self, appointment_id: &str, now: DateTime<Utc>) -> Result<()> {
        let appointment = self.store.appointment(appointment_id)?;
        if appointment.status.is_terminal() {
            return Err(intake_engine::TransitionError::AppointmentClosed {
                status: appointment.status,
            }
            .into());
        }
        let (subject, body) =
            notifications::appointment_reminder(appointment.date, appointment.time);
        self.notify(
            ADMIN_ACTOR,
            &appointment.student_id,
            subject,
            body,
            MessageCategory::Appointment,
            Some(appointment.id.clone()),
            now,
        )
    }

    /// Active appointments from today onward, soonest first.
    pub fn upcoming_appointments(
        &self,
        today: NaiveDate,
        limit: usize,
    ) -> Result<Vec<Appointment>> {
        let mut upcoming: Vec<Appointment> = self
            .store
            .appointments(&AppointmentFilter::new())?
            .into_iter()
            .filter(|appointment| appointment.is_active() && appointment.date >= today)
            .collect();
        upcoming.sort_by_key(|appointment| (appointment.date, appointment.time));
        upcoming.truncate(limit);
        Ok(upcoming)
    }

    /// The day's slot grid with current availability.
    pub fn day_slots(&self, date: NaiveDate, today: NaiveDate) -> Result<Vec<Slot>> {
        let on_date: Vec<Appointment> = self
            .store
            .appointments(&AppointmentFilter::new().on_date(date))?
            .into_iter()
            .filter(|appointment| appointment.status != AppointmentStatus::Cancelled)
            .collect();
        Ok(intake_engine::available_slots(
            date,
            today,
            &on_date,
            &self.policy,
        ))
    }

    pub fn send_message(
        &mut self,
        sender: &str,
        recipient: &str,
        subject: &str,
        body: &str,
        now: DateTime<Utc>,
    ) -> Result<String> {
        let id = self.store.send_message(Message {
            id: String::new(),
            sender: sender.to_string(),
            recipient: recipient.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
            category: MessageCategory::General,
            read: false,
            sent_at: now,
            related_id: None,
            reply_to: None,
        })?;
        self.audit(
            sender,
            AuditAction::Message,
            format!("Message sent to {recipient}"),
            now,
        )?;
        Ok(id)
    }

    /// Reply to a message, swapping the parties and marking the original
    /// as read.
    pub fn reply_message(
        &mut self,
        parent_id: &str,
        body: &str,
        now: DateTime<Utc>,
    ) -> Result<String> {
        let parent = self.store.message(parent_id)?;
        let subject = if parent.subject.starts_with("Re: ") {
            parent.subject.clone()
        } else {
            format!("Re: {}", parent.subject)
        };
        let id = self.store.send_message(Message {
            id: String::new(),
            sender: parent.recipient.clone(),
            recipient: parent.sender.clone(),
            subject,
            body: body.to_string(),
            category: parent.category,
            read: false,
            sent_at: now,
            related_id: parent.related_id.clone(),
            reply_to: Some(parent.id.clone()),
        })?;
        self.store.mark_message_read(parent_id)?;
        self.audit(
            &parent.recipient,
            AuditAction::Message,
            format!("Reply sent to {}", parent.sender),
            now,
        )?;
        Ok(id)
    }

    pub fn inbox(&self, participant: &str) -> Result<Vec<Message>> {
        Ok(self.store.messages_for(participant)?)
    }

    pub fn unread_count(&self, participant: &str) -> Result<usize> {
        Ok(self
            .store
            .messages_for(participant)?
            .iter()
            .filter(|message| message.recipient == participant && !message.read)
            .count())
    }

    pub fn audit_log(&self) -> Result<Vec<AuditEntry>> {
        Ok(self.store.audit_log()?)
    }

    fn ensure_period_open(&self, today: NaiveDate) -> Result<()> {
        if let Some(period) = &self.period
            && !period.is_open(today)
        {
            return Err(WorkflowError::PeriodClosed(period.name.clone()));
        }
        Ok(())
    }

    #[allow(clippy::too_many_arguments)]
    fn notify(
        &mut self,
        sender: &str,
        recipient: &str,
        subject: String,
        body: String,
        category: MessageCategory,
        related_id: Option<String>,
        now: DateTime<Utc>,
    ) -> Result<()> {
        self.store.send_message(Message {
            id: String::new(),
            sender: sender.to_string(),
            recipient: recipient.to_string(),
            subject,
            body,
            category,
            read: false,
            sent_at: now,
            related_id,
            reply_to: None,
        })?;
        Ok(())
    }

    fn audit(
        &mut self,
        actor_id: &str,
        action: AuditAction,
        description: String,
        now: DateTime<Utc>,
    ) -> Result<()> {
        self.store.record_audit(AuditEntry {
            actor_id: actor_id.to_string(),
            action,
            description,
            timestamp: now,
        })?;
        Ok(())
    }
}
