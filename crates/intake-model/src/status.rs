//! Derived documentation status.
//!
//! Recomputed on demand from the catalog and a student's submissions,
//! never stored. The counts always satisfy
//! `total = approved + pending + rejected + not_submitted`.

use serde::{Deserialize, Serialize};

/// Per-student documentation summary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentationStatus {
    /// Number of catalog entries.
    pub total: usize,
    pub approved_count: usize,
    pub pending_count: usize,
    pub rejected_count: usize,
    pub not_submitted_count: usize,
    /// Share of approved entries, rounded half-up to a whole percent.
    pub percent_complete: u8,
    /// True when every catalog entry has an approved submission.
    pub is_complete: bool,
    /// Alternative reading counting only entries marked mandatory.
    pub is_complete_mandatory_only: bool,
}

impl DocumentationStatus {
    /// Entries with at least one live submission.
    pub fn submitted_count(&self) -> usize {
        self.total.saturating_sub(self.not_submitted_count)
    }

    pub fn has_submissions(&self) -> bool {
        self.submitted_count() > 0
    }
}
