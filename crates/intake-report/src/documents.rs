//! Document inventory report.

use std::collections::BTreeMap;

use serde::Serialize;

use intake_model::{DocumentStatus, SubmittedDocument};

use crate::common::DateRange;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DocumentStatusCounts {
    pub submitted: usize,
    pub approved: usize,
    pub rejected: usize,
}

impl DocumentStatusCounts {
    fn record(&mut self, status: DocumentStatus) {
        match status {
            DocumentStatus::Submitted => self.submitted += 1,
            DocumentStatus::Approved => self.approved += 1,
            DocumentStatus::Rejected => self.rejected += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.submitted + self.approved + self.rejected
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DocumentsReport {
    pub range: DateRange,
    pub total: usize,
    pub by_status: DocumentStatusCounts,
    pub by_type: BTreeMap<String, DocumentStatusCounts>,
}

/// Tally documents by status and type, filtered by submission date.
pub fn documents_report(documents: &[SubmittedDocument], range: DateRange) -> DocumentsReport {
    let mut by_status = DocumentStatusCounts::default();
    let mut by_type: BTreeMap<String, DocumentStatusCounts> = BTreeMap::new();
    let mut total = 0;
    for document in documents {
        if !range.contains(document.submitted_at.date_naive()) {
            continue;
        }
        total += 1;
        by_status.record(document.status);
        by_type
            .entry(document.document_type_id.clone())
            .or_default()
            .record(document.status);
    }
    DocumentsReport {
        range,
        total,
        by_status,
        by_type,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{DateTime, NaiveDate, Utc};

    fn doc(type_id: &str, status: DocumentStatus, at: &str) -> SubmittedDocument {
        SubmittedDocument {
            id: format!("doc-{type_id}-{at}"),
            student_id: "21001001".to_string(),
            document_type_id: type_id.to_string(),
            status,
            review_comments: None,
            submitted_at: at.parse::<DateTime<Utc>>().expect("timestamp"),
            reviewed_at: None,
            reviewer_id: None,
            storage_locator: String::new(),
            file_name: None,
            file_size: None,
        }
    }

    #[test]
    fn counts_by_status_and_type() {
        let documents = vec![
            doc("birth_certificate", DocumentStatus::Approved, "2026-02-01T10:00:00Z"),
            doc("national_id", DocumentStatus::Rejected, "2026-02-02T10:00:00Z"),
            doc("photographs", DocumentStatus::Submitted, "2026-02-03T10:00:00Z"),
        ];
        let report = documents_report(&documents, DateRange::default());
        assert_eq!(report.total, 3);
        assert_eq!(report.by_status.approved, 1);
        assert_eq!(report.by_status.rejected, 1);
        assert_eq!(report.by_status.submitted, 1);
        assert_eq!(report.by_type.len(), 3);
        assert_eq!(report.by_type["national_id"].rejected, 1);
    }

    #[test]
    fn range_filters_by_submission_date() {
        let documents = vec![
            doc("birth_certificate", DocumentStatus::Approved, "2026-01-15T10:00:00Z"),
            doc("national_id", DocumentStatus::Approved, "2026-02-15T10:00:00Z"),
        ];
        let february = DateRange::new(
            Some(NaiveDate::from_ymd_opt(2026, 2, 1).unwrap()),
            Some(NaiveDate::from_ymd_opt(2026, 2, 28).unwrap()),
        );
        let report = documents_report(&documents, february);
        assert_eq!(report.total, 1);
        assert!(report.by_type.contains_key("national_id"));
        assert!(!report.by_type.contains_key("birth_certificate"));
    }
}
