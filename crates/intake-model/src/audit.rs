//! Append-only audit trail.
//!
//! Entries are written as a side effect of every mutating action and are
//! never updated or deleted.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuditAction {
    Document,
    Appointment,
    Message,
    Report,
    Student,
    Session,
}

impl AuditAction {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditAction::Document => "document",
            AuditAction::Appointment => "appointment",
            AuditAction::Message => "message",
            AuditAction::Report => "report",
            AuditAction::Student => "student",
            AuditAction::Session => "session",
        }
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "document" => Ok(AuditAction::Document),
            "appointment" => Ok(AuditAction::Appointment),
            "message" => Ok(AuditAction::Message),
            "report" => Ok(AuditAction::Report),
            "student" => Ok(AuditAction::Student),
            "session" => Ok(AuditAction::Session),
            _ => Err(format!("Unknown audit action: {s}")),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    #[serde(alias = "actorId")]
    pub actor_id: String,
    pub action: AuditAction,
    pub description: String,
    pub timestamp: DateTime<Utc>,
}
