//! Appointment construction behind the eligibility and availability gates.

use chrono::{NaiveDate, NaiveTime};
use thiserror::Error;

use intake_model::{
    Appointment, AppointmentPolicy, AppointmentStatus, DocumentationStatus,
};

use crate::completeness::is_eligible_for_appointment;
use crate::scheduling::{SlotAvailability, check_slot_availability};

/// Why an appointment request was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum AppointmentError {
    #[error("documentation must be complete and approved before scheduling")]
    IncompleteDocumentation,
    #[error("the student already holds an active appointment")]
    DuplicateAppointment,
    #[error("appointments cannot be scheduled on past dates")]
    PastDate,
    #[error("appointments cannot be scheduled on blocked weekdays")]
    WeekendBlocked,
    #[error("the daily appointment limit has been reached")]
    DailyLimitReached,
    #[error("an appointment already exists at the requested time")]
    SlotTaken,
    #[error("the requested time falls outside business hours")]
    OutsideBusinessHours,
}

impl SlotAvailability {
    /// The error matching a rejected check, `None` when available.
    pub fn rejection(self) -> Option<AppointmentError> {
        match self {
            SlotAvailability::Available => None,
            SlotAvailability::PastDate => Some(AppointmentError::PastDate),
            SlotAvailability::WeekendBlocked => Some(AppointmentError::WeekendBlocked),
            SlotAvailability::DailyLimitReached => Some(AppointmentError::DailyLimitReached),
            SlotAvailability::SlotTaken => Some(AppointmentError::SlotTaken),
            SlotAvailability::OutsideBusinessHours => {
                Some(AppointmentError::OutsideBusinessHours)
            }
        }
    }
}

/// Validate and construct a new appointment.
///
/// Preconditions are checked in order: documentation completeness, no
/// other active appointment for the student, then slot availability for
/// the requested date and time. `existing` may hold appointments for any
/// student and date; the relevant subsets are selected here.
///
/// On success the appointment comes back `Confirmed` and auto-confirmed.
/// Persisting it, and notifying the student, stay with the caller.
pub fn create_appointment(
    student_id: &str,
    date: NaiveDate,
    time: NaiveTime,
    today: NaiveDate,
    documentation: &DocumentationStatus,
    existing: &[Appointment],
    policy: &AppointmentPolicy,
) -> Result<Appointment, AppointmentError> {
    if !is_eligible_for_appointment(documentation) {
        return Err(AppointmentError::IncompleteDocumentation);
    }
    if existing
        .iter()
        .any(|appointment| appointment.student_id == student_id && appointment.is_active())
    {
        return Err(AppointmentError::DuplicateAppointment);
    }
    let on_date: Vec<Appointment> = existing
        .iter()
        .filter(|appointment| {
            appointment.date == date && appointment.status != AppointmentStatus::Cancelled
        })
        .cloned()
        .collect();
    if let Some(error) = check_slot_availability(date, time, today, &on_date, policy).rejection() {
        return Err(error);
    }
    Ok(Appointment {
        id: String::new(),
        student_id: student_id.to_string(),
        date,
        time,
        status: AppointmentStatus::Confirmed,
        confirmed_by_student: true,
        attendance_outcome: None,
        cancellation_reason: None,
        attendance_notes: None,
    })
}
