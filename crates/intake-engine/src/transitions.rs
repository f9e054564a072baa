//! State machines for appointments and submitted documents.
//!
//! Each transition mutates the record in place and reports illegal moves
//! as values. `Completed` and `Cancelled` appointments never change
//! again; approved or rejected documents only change through a
//! re-upload.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use std::fmt;
use thiserror::Error;

use intake_model::{
    Appointment, AppointmentStatus, AttendanceOutcome, DocumentStatus, SubmittedDocument,
};

/// An action applied in a state that does not accept it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum TransitionError {
    #[error("appointment is already {status} and cannot change")]
    AppointmentClosed { status: AppointmentStatus },
    #[error("attendance can only be recorded for a confirmed appointment")]
    AttendanceBeforeConfirmation,
    #[error("document is already {status}; a re-upload is required before further review")]
    AlreadyReviewed { status: DocumentStatus },
}

/// Student confirmation. Idempotent while the appointment is active.
pub fn confirm(appointment: &mut Appointment) -> Result<(), TransitionError> {
    if appointment.status.is_terminal() {
        return Err(TransitionError::AppointmentClosed {
            status: appointment.status,
        });
    }
    appointment.status = AppointmentStatus::Confirmed;
    appointment.confirmed_by_student = true;
    Ok(())
}

/// Cancel an active appointment, recording the reason.
pub fn cancel(
    appointment: &mut Appointment,
    reason: Option<String>,
) -> Result<(), TransitionError> {
    if appointment.status.is_terminal() {
        return Err(TransitionError::AppointmentClosed {
            status: appointment.status,
        });
    }
    appointment.status = AppointmentStatus::Cancelled;
    appointment.cancellation_reason = reason;
    Ok(())
}

/// Close out a confirmed appointment with its attendance outcome.
pub fn record_attendance(
    appointment: &mut Appointment,
    outcome: AttendanceOutcome,
    notes: Option<String>,
) -> Result<(), TransitionError> {
    match appointment.status {
        AppointmentStatus::Confirmed => {
            appointment.status = AppointmentStatus::Completed;
            appointment.attendance_outcome = Some(outcome);
            appointment.attendance_notes = notes;
            Ok(())
        }
        AppointmentStatus::Pending => Err(TransitionError::AttendanceBeforeConfirmation),
        status => Err(TransitionError::AppointmentClosed { status }),
    }
}

/// Move an active appointment to a new slot.
///
/// Availability of the new slot is the caller's check; this only guards
/// the state machine.
pub fn reschedule(
    appointment: &mut Appointment,
    date: NaiveDate,
    time: NaiveTime,
) -> Result<(), TransitionError> {
    if appointment.status.is_terminal() {
        return Err(TransitionError::AppointmentClosed {
            status: appointment.status,
        });
    }
    appointment.date = date;
    appointment.time = time;
    Ok(())
}

/// Admin review decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewDecision {
    Approve,
    Reject,
}

impl ReviewDecision {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewDecision::Approve => "approved",
            ReviewDecision::Reject => "rejected",
        }
    }
}

impl fmt::Display for ReviewDecision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Apply a review decision to a submitted document.
///
/// Only documents awaiting review accept a decision. Rejection records
/// the reviewer's comments; approval clears them.
pub fn review(
    document: &mut SubmittedDocument,
    decision: ReviewDecision,
    comments: Option<String>,
    reviewer_id: &str,
    reviewed_at: DateTime<Utc>,
) -> Result<(), TransitionError> {
    if document.status != DocumentStatus::Submitted {
        return Err(TransitionError::AlreadyReviewed {
            status: document.status,
        });
    }
    match decision {
        ReviewDecision::Approve => {
            document.status = DocumentStatus::Approved;
            document.review_comments = None;
        }
        ReviewDecision::Reject => {
            document.status = DocumentStatus::Rejected;
            document.review_comments = comments;
        }
    }
    document.reviewer_id = Some(reviewer_id.to_string());
    document.reviewed_at = Some(reviewed_at);
    Ok(())
}

/// Replace the stored content and restart the review cycle.
///
/// The record identity is preserved; status returns to `Submitted` and
/// all review fields are cleared.
pub fn resubmit(
    document: &mut SubmittedDocument,
    storage_locator: String,
    file_name: Option<String>,
    file_size: Option<u64>,
    submitted_at: DateTime<Utc>,
) {
    document.status = DocumentStatus::Submitted;
    document.review_comments = None;
    document.reviewer_id = None;
    document.reviewed_at = None;
    document.storage_locator = storage_locator;
    document.file_name = file_name;
    document.file_size = file_size;
    document.submitted_at = submitted_at;
}
