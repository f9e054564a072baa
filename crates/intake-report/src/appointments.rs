//! Appointment report.

use serde::Serialize;

use intake_model::{Appointment, AppointmentStatus, AttendanceOutcome};

use crate::common::DateRange;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AppointmentStatusCounts {
    pub pending: usize,
    pub confirmed: usize,
    pub completed: usize,
    pub cancelled: usize,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct AttendanceCounts {
    pub attended: usize,
    pub no_show: usize,
    pub unrecorded: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppointmentsReport {
    pub range: DateRange,
    pub total: usize,
    pub by_status: AppointmentStatusCounts,
    pub by_attendance: AttendanceCounts,
}

/// Tally appointments by lifecycle state and attendance, filtered by
/// appointment date.
pub fn appointments_report(appointments: &[Appointment], range: DateRange) -> AppointmentsReport {
    let mut by_status = AppointmentStatusCounts::default();
    let mut by_attendance = AttendanceCounts::default();
    let mut total = 0;
    for appointment in appointments {
        if !range.contains(appointment.date) {
            continue;
        }
        total += 1;
        match appointment.status {
            AppointmentStatus::Pending => by_status.pending += 1,
            AppointmentStatus::Confirmed => by_status.confirmed += 1,
            AppointmentStatus::Completed => by_status.completed += 1,
            AppointmentStatus::Cancelled => by_status.cancelled += 1,
        }
        match appointment.attendance_outcome {
            Some(AttendanceOutcome::Attended) => by_attendance.attended += 1,
            Some(AttendanceOutcome::NoShow) => by_attendance.no_show += 1,
            None => by_attendance.unrecorded += 1,
        }
    }
    AppointmentsReport {
        range,
        total,
        by_status,
        by_attendance,
    }
}
