//! JSON snapshot of every collection.
//!
//! Snapshots are the CLI's persistence format and double as test
//! fixtures. Field names accept both snake_case and the camelCase the
//! legacy exports used, so old data files load unchanged.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use intake_model::{
    Appointment, AppointmentPolicy, AuditEntry, DocumentCatalog, EnrollmentPeriod, Message,
    Student, SubmittedDocument,
};

use crate::error::StoreError;

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    pub catalog: DocumentCatalog,
    pub policy: AppointmentPolicy,
    #[serde(alias = "enrollmentPeriod")]
    pub period: Option<EnrollmentPeriod>,
    pub students: Vec<Student>,
    pub documents: Vec<SubmittedDocument>,
    pub appointments: Vec<Appointment>,
    pub messages: Vec<Message>,
    #[serde(alias = "auditLog")]
    pub audit_log: Vec<AuditEntry>,
}

impl Snapshot {
    /// Fresh deployment with the default enrollment catalog.
    pub fn with_default_catalog() -> Self {
        Self {
            catalog: DocumentCatalog::default_enrollment(),
            ..Self::default()
        }
    }
}

pub fn load_snapshot(path: &Path) -> Result<Snapshot, StoreError> {
    let raw = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&raw)?)
}

pub fn save_snapshot(path: &Path, snapshot: &Snapshot) -> Result<(), StoreError> {
    let json = serde_json::to_string_pretty(snapshot)?;
    fs::write(path, format!("{json}\n"))?;
    Ok(())
}
