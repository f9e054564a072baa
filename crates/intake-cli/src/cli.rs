//! CLI argument definitions for the intake tracker.

use std::path::PathBuf;

use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use intake_engine::ReviewDecision;
use intake_model::AttendanceOutcome;

#[derive(Parser)]
#[command(
    name = "intake",
    version,
    about = "Enrollment intake tracker - documents, reviews, and appointments",
    long_about = "Track student enrollment documents, review them, and manage\n\
                  in-person appointments for students with complete paperwork.\n\
                  State lives in a JSON snapshot file (see --data)."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Path to the JSON snapshot holding all collections.
    #[arg(
        long = "data",
        value_name = "PATH",
        default_value = "intake-data.json",
        global = true
    )]
    pub data: PathBuf,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum, global = true)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show the required document catalog.
    Catalog,

    /// List students with their documentation progress.
    Students,

    /// Register a student.
    AddStudent(AddStudentArgs),

    /// Show one student's checklist and completion state.
    Status {
        /// Student control number.
        student_id: String,
    },

    /// Record a document upload for a student.
    Upload(UploadArgs),

    /// Approve or reject a submitted document.
    Review(ReviewArgs),

    /// Show the slot grid for a date.
    Slots {
        /// Date to inspect (YYYY-MM-DD).
        date: NaiveDate,
    },

    /// Book an appointment for a student with complete documentation.
    Schedule(ScheduleArgs),

    /// Confirm an upcoming appointment.
    Confirm {
        /// Appointment id.
        appointment_id: String,
    },

    /// Move an appointment to a new slot.
    Reschedule(RescheduleArgs),

    /// Cancel an appointment.
    Cancel(CancelArgs),

    /// Record attendance for a confirmed appointment.
    Attendance(AttendanceArgs),

    /// List upcoming appointments.
    Appointments,

    /// Show a participant's messages.
    Messages {
        /// Control number, or `admin`.
        participant: String,
    },

    /// Generate a report.
    Report(ReportArgs),

    /// Show the audit trail.
    Audit,
}

#[derive(Args)]
pub struct AddStudentArgs {
    /// Control number.
    pub student_id: String,
    /// Full name.
    pub full_name: String,
    /// Contact email.
    #[arg(long = "email")]
    pub email: Option<String>,
}

#[derive(Args)]
pub struct UploadArgs {
    /// Student control number.
    pub student_id: String,
    /// Document type id from the catalog.
    pub document_type_id: String,
    /// Locator of the uploaded file in the external storage service.
    pub storage_locator: String,
    /// Original file name.
    #[arg(long = "file-name")]
    pub file_name: Option<String>,
    /// File size in bytes.
    #[arg(long = "file-size")]
    pub file_size: Option<u64>,
}

#[derive(Args)]
pub struct ReviewArgs {
    /// Document id.
    pub document_id: String,
    /// Review decision.
    #[arg(value_enum)]
    pub decision: DecisionArg,
    /// Reviewer comments (recorded on rejection).
    #[arg(long = "comments")]
    pub comments: Option<String>,
}

#[derive(Args)]
pub struct ScheduleArgs {
    /// Student control number.
    pub student_id: String,
    /// Appointment date (YYYY-MM-DD).
    pub date: NaiveDate,
    /// Appointment time (HH:MM).
    #[arg(value_parser = parse_time)]
    pub time: NaiveTime,
}

#[derive(Args)]
pub struct RescheduleArgs {
    /// Appointment id.
    pub appointment_id: String,
    /// New date (YYYY-MM-DD).
    pub date: NaiveDate,
    /// New time (HH:MM).
    #[arg(value_parser = parse_time)]
    pub time: NaiveTime,
}

#[derive(Args)]
pub struct CancelArgs {
    /// Appointment id.
    pub appointment_id: String,
    /// Cancellation reason.
    #[arg(long = "reason")]
    pub reason: Option<String>,
    /// Who is cancelling (control number, or `admin`).
    #[arg(long = "actor", default_value = "admin")]
    pub actor: String,
}

#[derive(Args)]
pub struct AttendanceArgs {
    /// Appointment id.
    pub appointment_id: String,
    /// Attendance outcome.
    #[arg(value_enum)]
    pub outcome: OutcomeArg,
    /// Notes recorded with the outcome.
    #[arg(long = "notes")]
    pub notes: Option<String>,
}

#[derive(Args)]
pub struct ReportArgs {
    /// Report kind.
    #[arg(value_enum)]
    pub kind: ReportKindArg,
    /// Inclusive start date filter (YYYY-MM-DD).
    #[arg(long = "from")]
    pub from: Option<NaiveDate>,
    /// Inclusive end date filter (YYYY-MM-DD).
    #[arg(long = "to")]
    pub to: Option<NaiveDate>,
    /// Write the report as enveloped JSON to this path.
    #[arg(long = "json", value_name = "PATH")]
    pub json: Option<PathBuf>,
    /// Write the student roster as CSV to this path (students report only).
    #[arg(long = "csv", value_name = "PATH")]
    pub csv: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
pub enum DecisionArg {
    Approve,
    Reject,
}

impl From<DecisionArg> for ReviewDecision {
    fn from(arg: DecisionArg) -> Self {
        match arg {
            DecisionArg::Approve => ReviewDecision::Approve,
            DecisionArg::Reject => ReviewDecision::Reject,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum OutcomeArg {
    Attended,
    NoShow,
}

impl From<OutcomeArg> for AttendanceOutcome {
    fn from(arg: OutcomeArg) -> Self {
        match arg {
            OutcomeArg::Attended => AttendanceOutcome::Attended,
            OutcomeArg::NoShow => AttendanceOutcome::NoShow,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ReportKindArg {
    General,
    Documents,
    Appointments,
    Students,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}

/// Accept both `HH:MM` and `HH:MM:SS`.
pub fn parse_time(value: &str) -> Result<NaiveTime, String> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| format!("invalid time (expected HH:MM): {value}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn times_parse_with_and_without_seconds() {
        assert_eq!(
            parse_time("09:30").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        );
        assert_eq!(
            parse_time("09:30:15").unwrap(),
            NaiveTime::from_hms_opt(9, 30, 15).unwrap()
        );
        assert!(parse_time("9am").is_err());
    }

    #[test]
    fn time_errors_name_the_expected_format() {
        insta::assert_snapshot!(
            parse_time("9am").unwrap_err(),
            @"invalid time (expected HH:MM): 9am"
        );
    }
}
