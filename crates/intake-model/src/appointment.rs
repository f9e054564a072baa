//! Appointment records.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Lifecycle state of an appointment.
///
/// `Pending -> Confirmed -> Completed`; `Pending` and `Confirmed` may
/// also move to `Cancelled`. `Completed` and `Cancelled` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AppointmentStatus {
    Pending,
    Confirmed,
    Completed,
    Cancelled,
}

impl AppointmentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AppointmentStatus::Pending => "pending",
            AppointmentStatus::Confirmed => "confirmed",
            AppointmentStatus::Completed => "completed",
            AppointmentStatus::Cancelled => "cancelled",
        }
    }

    /// Returns true while the appointment still occupies its slot.
    pub fn is_active(&self) -> bool {
        matches!(self, AppointmentStatus::Pending | AppointmentStatus::Confirmed)
    }

    pub fn is_terminal(&self) -> bool {
        !self.is_active()
    }
}

impl fmt::Display for AppointmentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AppointmentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pending" => Ok(AppointmentStatus::Pending),
            "confirmed" => Ok(AppointmentStatus::Confirmed),
            "completed" => Ok(AppointmentStatus::Completed),
            "cancelled" => Ok(AppointmentStatus::Cancelled),
            _ => Err(format!("Unknown appointment status: {s}")),
        }
    }
}

/// Recorded outcome once attendance has been taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AttendanceOutcome {
    Attended,
    NoShow,
}

impl AttendanceOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            AttendanceOutcome::Attended => "attended",
            AttendanceOutcome::NoShow => "no_show",
        }
    }
}

impl fmt::Display for AttendanceOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AttendanceOutcome {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "attended" => Ok(AttendanceOutcome::Attended),
            "no_show" | "no-show" => Ok(AttendanceOutcome::NoShow),
            _ => Err(format!("Unknown attendance outcome: {s}")),
        }
    }
}

/// A scheduled in-person slot, granted only to students with complete
/// documentation. A student holds at most one active appointment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Appointment {
    /// Store-assigned identifier; empty until persisted.
    #[serde(default)]
    pub id: String,
    #[serde(alias = "studentId")]
    pub student_id: String,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub status: AppointmentStatus,
    #[serde(default, alias = "confirmedByStudent")]
    pub confirmed_by_student: bool,
    #[serde(default, alias = "attendanceOutcome")]
    pub attendance_outcome: Option<AttendanceOutcome>,
    #[serde(default, alias = "cancellationReason")]
    pub cancellation_reason: Option<String>,
    #[serde(default, alias = "attendanceNotes")]
    pub attendance_notes: Option<String>,
}

impl Appointment {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}
