//! Submitted document records and their review status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review state of one uploaded document.
///
/// Every upload and re-upload enters at `Submitted`. `Approved` is
/// terminal until the student uploads a replacement; `Rejected` returns
/// to `Submitted` when a replacement arrives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentStatus {
    Submitted,
    Approved,
    Rejected,
}

impl DocumentStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentStatus::Submitted => "submitted",
            DocumentStatus::Approved => "approved",
            DocumentStatus::Rejected => "rejected",
        }
    }
}

impl fmt::Display for DocumentStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DocumentStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "submitted" | "pending" => Ok(DocumentStatus::Submitted),
            "approved" => Ok(DocumentStatus::Approved),
            "rejected" => Ok(DocumentStatus::Rejected),
            _ => Err(format!("Unknown document status: {s}")),
        }
    }
}

/// One student's uploaded instance of a required document type.
///
/// At most one live record exists per `(student_id, document_type_id)`:
/// a re-upload replaces the stored content and resets the status to
/// `Submitted` while keeping the record identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubmittedDocument {
    pub id: String,
    #[serde(alias = "studentId")]
    pub student_id: String,
    #[serde(alias = "documentTypeId")]
    pub document_type_id: String,
    pub status: DocumentStatus,
    /// Reviewer comments, present only when the document was rejected.
    #[serde(default, alias = "reviewComments")]
    pub review_comments: Option<String>,
    #[serde(alias = "submittedAt")]
    pub submitted_at: DateTime<Utc>,
    #[serde(default, alias = "reviewedAt")]
    pub reviewed_at: Option<DateTime<Utc>>,
    #[serde(default, alias = "reviewerId")]
    pub reviewer_id: Option<String>,
    /// Opaque reference to the binary content held by the external store.
    #[serde(alias = "storageLocator")]
    pub storage_locator: String,
    #[serde(default, alias = "fileName")]
    pub file_name: Option<String>,
    #[serde(default, alias = "fileSize")]
    pub file_size: Option<u64>,
}
