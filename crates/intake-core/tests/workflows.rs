//! End-to-end workflow tests over the in-memory store.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use intake_core::{ADMIN_ACTOR, ChecklistState, IntakeService, UploadRequest, WorkflowError};
use intake_engine::{AppointmentError, ReviewDecision};
use intake_model::{
    AppointmentPolicy, AppointmentStatus, AttendanceOutcome, AuditAction, DocumentCatalog,
    DocumentStatus, EnrollmentPeriod, RequiredDocumentType, Role, Student,
};
use intake_store::{IntakeStore, MemoryStore};

fn ts(value: &str) -> DateTime<Utc> {
    value.parse().expect("timestamp")
}

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
}

fn time(h: u32, min: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(h, min, 0).expect("valid time")
}

fn small_catalog() -> DocumentCatalog {
    DocumentCatalog::new(vec![
        RequiredDocumentType {
            id: "birth_certificate".to_string(),
            display_name: "Birth Certificate".to_string(),
            description: String::new(),
            mandatory: true,
        },
        RequiredDocumentType {
            id: "photographs".to_string(),
            display_name: "Photographs".to_string(),
            description: String::new(),
            mandatory: true,
        },
    ])
    .expect("unique ids")
}

fn store_with_student(control_number: &str) -> MemoryStore {
    let mut store = MemoryStore::new(small_catalog());
    store
        .add_student(Student {
            control_number: control_number.to_string(),
            full_name: "Juan Perez".to_string(),
            email: Some("juan.perez@example.edu".to_string()),
            role: Role::Student,
        })
        .expect("add student");
    store
}

fn upload(student_id: &str, type_id: &str) -> UploadRequest {
    UploadRequest {
        student_id: student_id.to_string(),
        document_type_id: type_id.to_string(),
        storage_locator: format!("uploads/{student_id}/{type_id}.pdf"),
        file_name: Some(format!("{type_id}.pdf")),
        file_size: Some(100_000),
    }
}

const TODAY: (i32, u32, u32) = (2026, 2, 2); // Monday

fn today() -> NaiveDate {
    date(TODAY.0, TODAY.1, TODAY.2)
}

fn now() -> DateTime<Utc> {
    ts("2026-02-02T08:00:00Z")
}

/// Upload both documents and approve them.
fn complete_documentation(store: &mut MemoryStore, student_id: &str) {
    let mut service = IntakeService::new(store, AppointmentPolicy::default());
    for type_id in ["birth_certificate", "photographs"] {
        let id = service
            .upload_document(&upload(student_id, type_id), now(), today())
            .expect("upload");
        service
            .review_document(&id, ReviewDecision::Approve, None, ADMIN_ACTOR, now())
            .expect("approve");
    }
}

#[test]
fn upload_review_cycle_updates_status_audit_and_inbox() {
    let mut store = store_with_student("21001001");
    let mut service = IntakeService::new(&mut store, AppointmentPolicy::default());

    let id = service
        .upload_document(&upload("21001001", "birth_certificate"), now(), today())
        .expect("upload");

    let status = service.documentation_status("21001001").expect("status");
    assert_eq!(status.pending_count, 1);
    assert_eq!(status.not_submitted_count, 1);
    assert!(!status.is_complete);

    service
        .review_document(&id, ReviewDecision::Approve, None, ADMIN_ACTOR, now())
        .expect("approve");
    let status = service.documentation_status("21001001").expect("status");
    assert_eq!(status.approved_count, 1);
    assert_eq!(status.percent_complete, 50);

    // One entry per mutating action.
    let audit = service.audit_log().expect("audit");
    assert_eq!(audit.len(), 2);
    assert!(audit.iter().all(|entry| entry.action == AuditAction::Document));

    // The upload notified the admin; the review notified the student.
    assert_eq!(service.unread_count(ADMIN_ACTOR).expect("unread"), 1);
    assert_eq!(service.unread_count("21001001").expect("unread"), 1);
}

#[test]
fn rejected_documents_come_back_as_submitted_with_the_same_id() {
    let mut store = store_with_student("21001001");
    let mut service = IntakeService::new(&mut store, AppointmentPolicy::default());

    let id = service
        .upload_document(&upload("21001001", "birth_certificate"), now(), today())
        .expect("upload");
    let rejected = service
        .review_document(
            &id,
            ReviewDecision::Reject,
            Some("illegible scan".to_string()),
            ADMIN_ACTOR,
            now(),
        )
        .expect("reject");
    assert_eq!(rejected.status, DocumentStatus::Rejected);
    assert_eq!(rejected.review_comments.as_deref(), Some("illegible scan"));

    let second = service
        .upload_document(
            &upload("21001001", "birth_certificate"),
            ts("2026-02-03T08:00:00Z"),
            today(),
        )
        .expect("re-upload");
    assert_eq!(second, id);

    let status = service.documentation_status("21001001").expect("status");
    assert_eq!(status.pending_count, 1);
    assert_eq!(status.rejected_count, 0);

    let checklist = service.student_checklist("21001001").expect("checklist");
    let row = checklist
        .iter()
        .find(|row| row.document_type.id == "birth_certificate")
        .expect("row");
    assert_eq!(row.state, ChecklistState::Submitted);
}

#[test]
fn unknown_document_types_are_refused() {
    let mut store = store_with_student("21001001");
    let mut service = IntakeService::new(&mut store, AppointmentPolicy::default());
    let result = service.upload_document(&upload("21001001", "passport"), now(), today());
    assert!(matches!(
        result,
        Err(WorkflowError::UnknownDocumentType(id)) if id == "passport"
    ));
}

#[test]
fn scheduling_requires_complete_documentation() {
    let mut store = store_with_student("21001001");
    let mut service = IntakeService::new(&mut store, AppointmentPolicy::default());
    let result =
        service.schedule_appointment("21001001", date(2026, 2, 3), time(10, 0), today(), now());
    assert!(matches!(
        result,
        Err(WorkflowError::Booking(AppointmentError::IncompleteDocumentation))
    ));
}

#[test]
fn complete_students_can_book_exactly_one_appointment() {
    let mut store = store_with_student("21001001");
    complete_documentation(&mut store, "21001001");

    let mut service = IntakeService::new(&mut store, AppointmentPolicy::default());
    let appointment = service
        .schedule_appointment("21001001", date(2026, 2, 3), time(10, 0), today(), now())
        .expect("schedule");
    assert_eq!(appointment.status, AppointmentStatus::Confirmed);
    assert!(appointment.confirmed_by_student);
    assert!(!appointment.id.is_empty());

    let again =
        service.schedule_appointment("21001001", date(2026, 2, 4), time(11, 0), today(), now());
    assert!(matches!(
        again,
        Err(WorkflowError::Booking(AppointmentError::DuplicateAppointment))
    ));
}

#[test]
fn cancelled_appointments_free_the_student_and_the_slot() {
    let mut store = store_with_student("21001001");
    complete_documentation(&mut store, "21001001");

    let mut service = IntakeService::new(&mut store, AppointmentPolicy::default());
    let appointment = service
        .schedule_appointment("21001001", date(2026, 2, 3), time(10, 0), today(), now())
        .expect("schedule");
    let cancelled = service
        .cancel_appointment(
            &appointment.id,
            Some("sick".to_string()),
            "21001001",
            now(),
        )
        .expect("cancel");
    assert_eq!(cancelled.status, AppointmentStatus::Cancelled);
    assert_eq!(cancelled.cancellation_reason.as_deref(), Some("sick"));

    // The student cancelled, so the admin is notified.
    assert!(service.unread_count(ADMIN_ACTOR).expect("unread") >= 1);

    let rebooked = service
        .schedule_appointment("21001001", date(2026, 2, 3), time(10, 0), today(), now())
        .expect("rebook same slot");
    assert_eq!(rebooked.time, time(10, 0));
}

#[test]
fn reschedule_ignores_the_appointments_own_slot() {
    let mut store = store_with_student("21001001");
    complete_documentation(&mut store, "21001001");

    let mut service = IntakeService::new(&mut store, AppointmentPolicy::default());
    let appointment = service
        .schedule_appointment("21001001", date(2026, 2, 3), time(10, 0), today(), now())
        .expect("schedule");

    // Moving to its own current slot is not a collision.
    let moved = service
        .reschedule_appointment(&appointment.id, date(2026, 2, 3), time(10, 0), today(), now())
        .expect("reschedule to own slot");
    assert_eq!(moved.time, time(10, 0));

    let moved = service
        .reschedule_appointment(&appointment.id, date(2026, 2, 4), time(11, 30), today(), now())
        .expect("reschedule");
    assert_eq!(moved.date, date(2026, 2, 4));
    assert_eq!(moved.time, time(11, 30));
}

#[test]
fn reschedule_into_an_occupied_slot_is_refused() {
    let mut store = store_with_student("21001001");
    store
        .add_student(Student {
            control_number: "21001002".to_string(),
            full_name: "Maria Gonzalez".to_string(),
            email: None,
            role: Role::Student,
        })
        .expect("add student");
    complete_documentation(&mut store, "21001001");
    complete_documentation(&mut store, "21001002");

    let mut service = IntakeService::new(&mut store, AppointmentPolicy::default());
    service
        .schedule_appointment("21001001", date(2026, 2, 3), time(10, 0), today(), now())
        .expect("first booking");
    let second = service
        .schedule_appointment("21001002", date(2026, 2, 3), time(10, 30), today(), now())
        .expect("second booking");

    let result = service
        .reschedule_appointment(&second.id, date(2026, 2, 3), time(10, 0), today(), now());
    assert!(matches!(
        result,
        Err(WorkflowError::Booking(AppointmentError::SlotTaken))
    ));
}

#[test]
fn attendance_closes_the_appointment() {
    let mut store = store_with_student("21001001");
    complete_documentation(&mut store, "21001001");

    let mut service = IntakeService::new(&mut store, AppointmentPolicy::default());
    let appointment = service
        .schedule_appointment("21001001", date(2026, 2, 3), time(10, 0), today(), now())
        .expect("schedule");
    let completed = service
        .record_attendance(
            &appointment.id,
            AttendanceOutcome::Attended,
            Some("brought originals".to_string()),
            now(),
        )
        .expect("record attendance");
    assert_eq!(completed.status, AppointmentStatus::Completed);
    assert_eq!(completed.attendance_outcome, Some(AttendanceOutcome::Attended));
}

#[test]
fn day_slots_reflect_bookings() {
    let mut store = store_with_student("21001001");
    complete_documentation(&mut store, "21001001");

    let mut service = IntakeService::new(&mut store, AppointmentPolicy::default());
    service
        .schedule_appointment("21001001", date(2026, 2, 3), time(10, 0), today(), now())
        .expect("schedule");

    let slots = service.day_slots(date(2026, 2, 3), today()).expect("slots");
    let at_ten = slots
        .iter()
        .find(|slot| slot.time == time(10, 0))
        .expect("10:00 slot");
    assert!(!at_ten.available);
}

#[test]
fn closed_period_blocks_uploads_and_scheduling() {
    let mut store = store_with_student("21001001");
    let period = EnrollmentPeriod {
        name: "Enrollment 2025-B".to_string(),
        starts_on: date(2025, 8, 1),
        ends_on: date(2025, 12, 15),
    };
    let mut service =
        IntakeService::new(&mut store, AppointmentPolicy::default()).with_period(Some(period));

    let upload_result =
        service.upload_document(&upload("21001001", "birth_certificate"), now(), today());
    assert!(matches!(upload_result, Err(WorkflowError::PeriodClosed(_))));

    let schedule_result =
        service.schedule_appointment("21001001", date(2026, 2, 3), time(10, 0), today(), now());
    assert!(matches!(schedule_result, Err(WorkflowError::PeriodClosed(_))));
}

#[test]
fn replies_swap_parties_and_mark_the_original_read() {
    let mut store = store_with_student("21001001");
    let mut service = IntakeService::new(&mut store, AppointmentPolicy::default());

    let id = service
        .send_message("21001001", ADMIN_ACTOR, "Question", "When is my appointment?", now())
        .expect("send");
    assert_eq!(service.unread_count(ADMIN_ACTOR).expect("unread"), 1);

    service
        .reply_message(&id, "It is scheduled for next Tuesday.", ts("2026-02-02T09:00:00Z"))
        .expect("reply");

    assert_eq!(service.unread_count(ADMIN_ACTOR).expect("unread"), 0);
    assert_eq!(service.unread_count("21001001").expect("unread"), 1);

    let inbox = service.inbox("21001001").expect("inbox");
    let reply = inbox.iter().find(|m| m.reply_to.is_some()).expect("reply");
    assert_eq!(reply.subject, "Re: Question");
    assert_eq!(reply.sender, ADMIN_ACTOR);
    assert_eq!(reply.recipient, "21001001");
}

#[test]
fn upcoming_appointments_skip_closed_ones() {
    let mut store = store_with_student("21001001");
    store
        .add_student(Student {
            control_number: "21001002".to_string(),
            full_name: "Maria Gonzalez".to_string(),
            email: None,
            role: Role::Student,
        })
        .expect("add student");
    complete_documentation(&mut store, "21001001");
    complete_documentation(&mut store, "21001002");

    let mut service = IntakeService::new(&mut store, AppointmentPolicy::default());
    let first = service
        .schedule_appointment("21001001", date(2026, 2, 3), time(10, 0), today(), now())
        .expect("first");
    service
        .schedule_appointment("21001002", date(2026, 2, 4), time(9, 0), today(), now())
        .expect("second");
    service
        .cancel_appointment(&first.id, None, ADMIN_ACTOR, now())
        .expect("cancel first");

    let upcoming = service.upcoming_appointments(today(), 5).expect("upcoming");
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].student_id, "21001002");
}
