//! Command handlers.
//!
//! Mutating commands load the snapshot, run the workflow through
//! `IntakeService`, and save the snapshot back; read-only commands skip
//! the save.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, Utc};

use intake_core::{ADMIN_ACTOR, IntakeService, UploadRequest};
use intake_model::{AuditAction, AuditEntry, Role, Student};
use intake_report::{
    DateRange, appointments_report, documents_report, envelope, general_report, students_csv,
    students_report, write_report_json,
};
use intake_store::{
    AppointmentFilter, IntakeStore, MemoryStore, Snapshot, load_snapshot, save_snapshot,
};

use crate::cli::{Cli, Command, ReportArgs, ReportKindArg};
use crate::tables;

pub fn run(cli: &Cli) -> Result<()> {
    let mut store = load_store(&cli.data)?;
    let now = Utc::now();
    let today = Local::now().date_naive();

    match &cli.command {
        Command::Catalog => {
            let catalog = store.required_document_types()?;
            tables::print_catalog(&catalog);
        }
        Command::Students => {
            let catalog = store.required_document_types()?;
            let students = store.students()?;
            let documents = store.all_documents()?;
            let appointments = store.appointments(&AppointmentFilter::new())?;
            let report = students_report(&catalog, &students, &documents, &appointments);
            tables::print_students(&report);
        }
        Command::AddStudent(args) => {
            store.add_student(Student {
                control_number: args.student_id.clone(),
                full_name: args.full_name.clone(),
                email: args.email.clone(),
                role: Role::Student,
            })?;
            store.record_audit(AuditEntry {
                actor_id: ADMIN_ACTOR.to_string(),
                action: AuditAction::Student,
                description: format!("Student registered: {}", args.student_id),
                timestamp: now,
            })?;
            save_store(&cli.data, &store)?;
            println!("Student registered: {}", args.student_id);
        }
        Command::Status { student_id } => {
            let service = service_for(&mut store);
            let status = service.documentation_status(student_id)?;
            let checklist = service.student_checklist(student_id)?;
            tables::print_checklist(student_id, &checklist, &status);
        }
        Command::Upload(args) => {
            {
                let mut service = service_for(&mut store);
                let id = service.upload_document(
                    &UploadRequest {
                        student_id: args.student_id.clone(),
                        document_type_id: args.document_type_id.clone(),
                        storage_locator: args.storage_locator.clone(),
                        file_name: args.file_name.clone(),
                        file_size: args.file_size,
                    },
                    now,
                    today,
                )?;
                println!("Document recorded: {id}");
            }
            save_store(&cli.data, &store)?;
        }
        Command::Review(args) => {
            {
                let mut service = service_for(&mut store);
                let document = service.review_document(
                    &args.document_id,
                    args.decision.into(),
                    args.comments.clone(),
                    ADMIN_ACTOR,
                    now,
                )?;
                println!(
                    "Document {} is now {}",
                    document.id, document.status,
                );
            }
            save_store(&cli.data, &store)?;
        }
        Command::Slots { date } => {
            let service = service_for(&mut store);
            let slots = service.day_slots(*date, today)?;
            println!("Slots for {date}:");
            tables::print_slots(&slots);
        }
        Command::Schedule(args) => {
            {
                let mut service = service_for(&mut store);
                let appointment = service.schedule_appointment(
                    &args.student_id,
                    args.date,
                    args.time,
                    today,
                    now,
                )?;
                println!(
                    "Appointment {} booked for {} on {} at {}",
                    appointment.id,
                    appointment.student_id,
                    appointment.date.format("%Y-%m-%d"),
                    appointment.time.format("%H:%M"),
                );
            }
            save_store(&cli.data, &store)?;
        }
        Command::Confirm { appointment_id } => {
            {
                let mut service = service_for(&mut store);
                let appointment = service.confirm_appointment(appointment_id, now)?;
                println!("Appointment {} confirmed", appointment.id);
            }
            save_store(&cli.data, &store)?;
        }
        Command::Reschedule(args) => {
            {
                let mut service = service_for(&mut store);
                let appointment = service.reschedule_appointment(
                    &args.appointment_id,
                    args.date,
                    args.time,
                    today,
                    now,
                )?;
                println!(
                    "Appointment {} moved to {} at {}",
                    appointment.id,
                    appointment.date.format("%Y-%m-%d"),
                    appointment.time.format("%H:%M"),
                );
            }
            save_store(&cli.data, &store)?;
        }
        Command::Cancel(args) => {
            {
                let mut service = service_for(&mut store);
                let appointment = service.cancel_appointment(
                    &args.appointment_id,
                    args.reason.clone(),
                    &args.actor,
                    now,
                )?;
                println!("Appointment {} cancelled", appointment.id);
            }
            save_store(&cli.data, &store)?;
        }
        Command::Attendance(args) => {
            {
                let mut service = service_for(&mut store);
                let appointment = service.record_attendance(
                    &args.appointment_id,
                    args.outcome.into(),
                    args.notes.clone(),
                    now,
                )?;
                println!(
                    "Appointment {} completed ({})",
                    appointment.id,
                    appointment
                        .attendance_outcome
                        .map(|outcome| outcome.to_string())
                        .unwrap_or_default(),
                );
            }
            save_store(&cli.data, &store)?;
        }
        Command::Appointments => {
            let service = service_for(&mut store);
            let upcoming = service.upcoming_appointments(today, 20)?;
            tables::print_appointments(&upcoming);
        }
        Command::Messages { participant } => {
            let service = service_for(&mut store);
            let messages = service.inbox(participant)?;
            let unread = service.unread_count(participant)?;
            println!("{} message(s), {} unread", messages.len(), unread);
            tables::print_messages(&messages);
        }
        Command::Report(args) => {
            run_report(&mut store, args)?;
            store.record_audit(AuditEntry {
                actor_id: ADMIN_ACTOR.to_string(),
                action: AuditAction::Report,
                description: format!("{} report generated", report_kind_name(args.kind)),
                timestamp: now,
            })?;
            save_store(&cli.data, &store)?;
        }
        Command::Audit => {
            let entries = store.audit_log()?;
            tables::print_audit(&entries);
        }
    }
    Ok(())
}

fn run_report(store: &mut MemoryStore, args: &ReportArgs) -> Result<()> {
    let now = Utc::now();
    let catalog = store.required_document_types()?;
    let students = store.students()?;
    let documents = store.all_documents()?;
    let appointments = store.appointments(&AppointmentFilter::new())?;
    let range = DateRange::new(args.from, args.to);

    match args.kind {
        ReportKindArg::General => {
            let report = general_report(&catalog, &students, &documents, &appointments);
            tables::print_general_report(&report);
            if let Some(path) = &args.json {
                let written = write_report_json(path, &envelope("general", now, &report))?;
                println!("Report written: {}", written.display());
            }
        }
        ReportKindArg::Documents => {
            let report = documents_report(&documents, range);
            tables::print_documents_report(&report);
            if let Some(path) = &args.json {
                let written = write_report_json(path, &envelope("documents", now, &report))?;
                println!("Report written: {}", written.display());
            }
        }
        ReportKindArg::Appointments => {
            let report = appointments_report(&appointments, range);
            tables::print_appointments_report(&report);
            if let Some(path) = &args.json {
                let written = write_report_json(path, &envelope("appointments", now, &report))?;
                println!("Report written: {}", written.display());
            }
        }
        ReportKindArg::Students => {
            let report = students_report(&catalog, &students, &documents, &appointments);
            tables::print_students(&report);
            if let Some(path) = &args.csv {
                std::fs::write(path, students_csv(&report)?)
                    .with_context(|| format!("write {}", path.display()))?;
                println!("Roster written: {}", path.display());
            }
            if let Some(path) = &args.json {
                let written = write_report_json(path, &envelope("students", now, &report))?;
                println!("Report written: {}", written.display());
            }
        }
    }
    Ok(())
}

fn report_kind_name(kind: ReportKindArg) -> &'static str {
    match kind {
        ReportKindArg::General => "general",
        ReportKindArg::Documents => "documents",
        ReportKindArg::Appointments => "appointments",
        ReportKindArg::Students => "students",
    }
}

fn service_for(store: &mut MemoryStore) -> IntakeService<'_, MemoryStore> {
    let policy = store.policy().clone();
    let period = store.period().cloned();
    IntakeService::new(store, policy).with_period(period)
}

fn load_store(path: &Path) -> Result<MemoryStore> {
    if path.exists() {
        let snapshot =
            load_snapshot(path).with_context(|| format!("load {}", path.display()))?;
        Ok(MemoryStore::from_snapshot(snapshot))
    } else {
        Ok(MemoryStore::from_snapshot(Snapshot::with_default_catalog()))
    }
}

fn save_store(path: &Path, store: &MemoryStore) -> Result<()> {
    save_snapshot(path, &store.snapshot()).with_context(|| format!("save {}", path.display()))?;
    Ok(())
}
