//! Message templates sent as side effects of workflow actions.
//!
//! Each function returns a `(subject, body)` pair; the service wraps the
//! pair into a [`intake_model::Message`] addressed to the right party.

use chrono::{NaiveDate, NaiveTime};

use intake_engine::ReviewDecision;

pub fn document_uploaded(student_id: &str, display_name: &str, reupload: bool) -> (String, String) {
    let subject = if reupload {
        "Document Re-uploaded".to_string()
    } else {
        "New Document".to_string()
    };
    let body = format!("Student {student_id} has uploaded: {display_name}");
    (subject, body)
}

pub fn document_reviewed(
    display_name: &str,
    decision: ReviewDecision,
    comments: Option<&str>,
) -> (String, String) {
    match decision {
        ReviewDecision::Approve => (
            "Document Approved".to_string(),
            format!("Your document \"{display_name}\" has been approved."),
        ),
        ReviewDecision::Reject => {
            let mut body =
                format!("Your document \"{display_name}\" has been rejected. Please review the comments and upload a replacement.");
            if let Some(comments) = comments {
                body.push_str(&format!(" Comments: {comments}"));
            }
            ("Document Rejected".to_string(), body)
        }
    }
}

pub fn appointment_scheduled(date: NaiveDate, time: NaiveTime) -> (String, String) {
    (
        "Appointment Scheduled".to_string(),
        format!(
            "Your in-person appointment has been scheduled for {} at {}. Please bring your original documents.",
            date.format("%Y-%m-%d"),
            time.format("%H:%M"),
        ),
    )
}

pub fn appointment_rescheduled(date: NaiveDate, time: NaiveTime) -> (String, String) {
    (
        "Appointment Rescheduled".to_string(),
        format!(
            "Your appointment has been moved to {} at {}.",
            date.format("%Y-%m-%d"),
            time.format("%H:%M"),
        ),
    )
}

pub fn appointment_cancelled(
    date: NaiveDate,
    time: NaiveTime,
    reason: Option<&str>,
) -> (String, String) {
    let mut body = format!(
        "The appointment on {} at {} has been cancelled.",
        date.format("%Y-%m-%d"),
        time.format("%H:%M"),
    );
    if let Some(reason) = reason {
        body.push_str(&format!(" Reason: {reason}"));
    }
    ("Appointment Cancelled".to_string(), body)
}

pub fn appointment_reminder(date: NaiveDate, time: NaiveTime) -> (String, String) {
    (
        "Appointment Reminder".to_string(),
        format!(
            "You have an appointment on {} at {}. Do not forget to bring your original documents.",
            date.format("%Y-%m-%d"),
            time.format("%H:%M"),
        ),
    )
}

pub fn attendance_recorded(date: NaiveDate) -> (String, String) {
    (
        "Attendance Recorded".to_string(),
        format!(
            "Your attendance for the appointment on {} has been recorded.",
            date.format("%Y-%m-%d"),
        ),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejection_includes_comments_when_present() {
        let (subject, body) = document_reviewed(
            "Birth Certificate",
            ReviewDecision::Reject,
            Some("illegible scan"),
        );
        assert_eq!(subject, "Document Rejected");
        assert!(body.contains("illegible scan"));
    }

    #[test]
    fn scheduling_mentions_date_and_time() {
        let date = NaiveDate::from_ymd_opt(2026, 2, 3).unwrap();
        let time = NaiveTime::from_hms_opt(10, 30, 0).unwrap();
        let (_, body) = appointment_scheduled(date, time);
        assert!(body.contains("2026-02-03"));
        assert!(body.contains("10:30"));
    }
}
