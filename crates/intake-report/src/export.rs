//! JSON and CSV export of reports.

use std::path::{Path, PathBuf};

use anyhow::Result;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::students::StudentsReport;

const REPORT_SCHEMA: &str = "enrollment-intake.report";
const REPORT_SCHEMA_VERSION: u32 = 1;

/// Versioned wrapper written around every exported report.
#[derive(Debug, Serialize)]
pub struct ReportEnvelope<T: Serialize> {
    pub schema: &'static str,
    pub schema_version: u32,
    pub generated_at: String,
    pub kind: &'static str,
    pub report: T,
}

pub fn envelope<T: Serialize>(
    kind: &'static str,
    generated_at: DateTime<Utc>,
    report: T,
) -> ReportEnvelope<T> {
    ReportEnvelope {
        schema: REPORT_SCHEMA,
        schema_version: REPORT_SCHEMA_VERSION,
        generated_at: generated_at.to_rfc3339(),
        kind,
        report,
    }
}

pub fn write_report_json<T: Serialize>(path: &Path, envelope: &ReportEnvelope<T>) -> Result<PathBuf> {
    let json = serde_json::to_string_pretty(envelope)?;
    std::fs::write(path, format!("{json}\n"))?;
    Ok(path.to_path_buf())
}

/// Render the student roster as CSV, one row per student.
pub fn students_csv(report: &StudentsReport) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record([
        "control_number",
        "full_name",
        "email",
        "approved",
        "pending",
        "rejected",
        "not_submitted",
        "percent_complete",
        "complete",
        "appointments",
    ])?;
    for row in &report.rows {
        let complete = if row.documentation.is_complete {
            "yes"
        } else {
            "no"
        };
        let record = vec![
            row.control_number.clone(),
            row.full_name.clone(),
            row.email.clone().unwrap_or_default(),
            row.documentation.approved_count.to_string(),
            row.documentation.pending_count.to_string(),
            row.documentation.rejected_count.to_string(),
            row.documentation.not_submitted_count.to_string(),
            row.documentation.percent_complete.to_string(),
            complete.to_string(),
            row.appointment_count.to_string(),
        ];
        writer.write_record(&record)?;
    }
    let bytes = writer.into_inner()?;
    Ok(String::from_utf8(bytes)?)
}
