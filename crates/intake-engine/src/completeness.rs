//! Documentation completeness computation.

use intake_model::{DocumentCatalog, DocumentStatus, DocumentationStatus, SubmittedDocument};

/// Compute a student's documentation status against the required catalog.
///
/// `submitted` is expected to belong to a single student; pre-filtering
/// is the caller's responsibility. The store keeps at most one live
/// submission per document type, but if duplicates slip through, the one
/// with the latest `submitted_at` wins deterministically (later elements
/// break ties).
///
/// An empty catalog yields zero percent and an incomplete status rather
/// than dividing by zero.
pub fn compute_documentation_status(
    catalog: &DocumentCatalog,
    submitted: &[SubmittedDocument],
) -> DocumentationStatus {
    let total = catalog.len();
    let mut approved_count = 0;
    let mut pending_count = 0;
    let mut rejected_count = 0;
    let mut not_submitted_count = 0;
    let mut mandatory_total = 0;
    let mut mandatory_approved = 0;

    for required in catalog {
        if required.mandatory {
            mandatory_total += 1;
        }
        match latest_submission(submitted, &required.id) {
            Some(document) => match document.status {
                DocumentStatus::Approved => {
                    approved_count += 1;
                    if required.mandatory {
                        mandatory_approved += 1;
                    }
                }
                DocumentStatus::Submitted => pending_count += 1,
                DocumentStatus::Rejected => rejected_count += 1,
            },
            None => not_submitted_count += 1,
        }
    }

    DocumentationStatus {
        total,
        approved_count,
        pending_count,
        rejected_count,
        not_submitted_count,
        percent_complete: percent_round_half_up(approved_count, total),
        is_complete: total > 0 && approved_count == total,
        is_complete_mandatory_only: mandatory_total > 0 && mandatory_approved == mandatory_total,
    }
}

/// Whether the student may schedule an in-person appointment.
pub fn is_eligible_for_appointment(status: &DocumentationStatus) -> bool {
    status.is_complete
}

fn latest_submission<'a>(
    submitted: &'a [SubmittedDocument],
    document_type_id: &str,
) -> Option<&'a SubmittedDocument> {
    submitted
        .iter()
        .filter(|document| document.document_type_id == document_type_id)
        .max_by_key(|document| document.submitted_at)
}

fn percent_round_half_up(approved: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    ((approved * 200 + total) / (total * 2)) as u8
}
