//! Table rendering for CLI output.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use intake_core::{ChecklistRow, ChecklistState};
use intake_engine::Slot;
use intake_model::{Appointment, AuditEntry, DocumentCatalog, DocumentationStatus, Message};
use intake_report::{AppointmentsReport, DocumentsReport, GeneralReport, StudentsReport};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

pub fn print_catalog(catalog: &DocumentCatalog) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Name"),
        header_cell("Description"),
        header_cell("Mandatory"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 3, CellAlignment::Center);
    for entry in catalog {
        table.add_row(vec![
            Cell::new(&entry.id),
            Cell::new(&entry.display_name),
            Cell::new(&entry.description),
            yes_no_cell(entry.mandatory),
        ]);
    }
    println!("{table}");
}

pub fn print_checklist(student_id: &str, rows: &[ChecklistRow], status: &DocumentationStatus) {
    println!("Student: {student_id}");
    println!(
        "Documentation: {}% complete ({} of {} approved{})",
        status.percent_complete,
        status.approved_count,
        status.total,
        if status.is_complete { ", ready for appointment" } else { "" },
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Document"),
        header_cell("State"),
        header_cell("Submitted"),
        header_cell("Comments"),
    ]);
    apply_table_style(&mut table);
    for row in rows {
        let submitted = row
            .submission
            .as_ref()
            .map(|document| document.submitted_at.format("%Y-%m-%d %H:%M").to_string());
        let comments = row
            .submission
            .as_ref()
            .and_then(|document| document.review_comments.clone());
        table.add_row(vec![
            Cell::new(&row.document_type.display_name),
            state_cell(row.state),
            text_or_dash(submitted),
            text_or_dash(comments),
        ]);
    }
    println!("{table}");
}

pub fn print_slots(slots: &[Slot]) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Time"), header_cell("Available")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Center);
    for slot in slots {
        table.add_row(vec![
            Cell::new(slot.time.format("%H:%M")),
            yes_no_cell(slot.available),
        ]);
    }
    println!("{table}");
}

pub fn print_appointments(appointments: &[Appointment]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Id"),
        header_cell("Student"),
        header_cell("Date"),
        header_cell("Time"),
        header_cell("Status"),
        header_cell("Attendance"),
    ]);
    apply_table_style(&mut table);
    for appointment in appointments {
        let attendance = appointment
            .attendance_outcome
            .map(|outcome| outcome.to_string());
        table.add_row(vec![
            dim_cell(&appointment.id),
            Cell::new(&appointment.student_id),
            Cell::new(appointment.date.format("%Y-%m-%d")),
            Cell::new(appointment.time.format("%H:%M")),
            Cell::new(appointment.status.as_str()),
            text_or_dash(attendance),
        ]);
    }
    println!("{table}");
}

pub fn print_messages(messages: &[Message]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Sent"),
        header_cell("From"),
        header_cell("To"),
        header_cell("Subject"),
        header_cell("Read"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 4, CellAlignment::Center);
    for message in messages {
        table.add_row(vec![
            Cell::new(message.sent_at.format("%Y-%m-%d %H:%M")),
            Cell::new(&message.sender),
            Cell::new(&message.recipient),
            Cell::new(&message.subject),
            yes_no_cell(message.read),
        ]);
    }
    println!("{table}");
}

pub fn print_audit(entries: &[AuditEntry]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Timestamp"),
        header_cell("Actor"),
        header_cell("Action"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for entry in entries {
        table.add_row(vec![
            Cell::new(entry.timestamp.format("%Y-%m-%d %H:%M:%S")),
            Cell::new(&entry.actor_id),
            Cell::new(entry.action.as_str()),
            Cell::new(&entry.description),
        ]);
    }
    println!("{table}");
}

pub fn print_students(report: &StudentsReport) {
    println!(
        "Students: {} total, {} complete, {} incomplete, {} without documents",
        report.total, report.complete, report.incomplete, report.without_documents,
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Control #"),
        header_cell("Name"),
        header_cell("Approved"),
        header_cell("Pending"),
        header_cell("Rejected"),
        header_cell("Missing"),
        header_cell("Progress"),
        header_cell("Appointments"),
    ]);
    apply_table_style(&mut table);
    for index in 2..8 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in &report.rows {
        let progress = Cell::new(format!("{}%", row.documentation.percent_complete));
        let progress = if row.documentation.is_complete {
            progress.fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            progress
        };
        table.add_row(vec![
            Cell::new(&row.control_number),
            Cell::new(&row.full_name),
            count_cell(row.documentation.approved_count, Color::Green),
            count_cell(row.documentation.pending_count, Color::Yellow),
            count_cell(row.documentation.rejected_count, Color::Red),
            count_cell(row.documentation.not_submitted_count, Color::DarkGrey),
            progress,
            Cell::new(row.appointment_count),
        ]);
    }
    println!("{table}");
}

pub fn print_documents_report(report: &DocumentsReport) {
    println!(
        "Documents: {} total ({} submitted, {} approved, {} rejected)",
        report.total,
        report.by_status.submitted,
        report.by_status.approved,
        report.by_status.rejected,
    );
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Type"),
        header_cell("Total"),
        header_cell("Submitted"),
        header_cell("Approved"),
        header_cell("Rejected"),
    ]);
    apply_table_style(&mut table);
    for index in 1..5 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for (type_id, counts) in &report.by_type {
        table.add_row(vec![
            Cell::new(type_id),
            Cell::new(counts.total()),
            count_cell(counts.submitted, Color::Yellow),
            count_cell(counts.approved, Color::Green),
            count_cell(counts.rejected, Color::Red),
        ]);
    }
    println!("{table}");
}

pub fn print_appointments_report(report: &AppointmentsReport) {
    println!("Appointments: {} total", report.total);
    println!(
        "  by status: {} pending, {} confirmed, {} completed, {} cancelled",
        report.by_status.pending,
        report.by_status.confirmed,
        report.by_status.completed,
        report.by_status.cancelled,
    );
    println!(
        "  by attendance: {} attended, {} no-show, {} unrecorded",
        report.by_attendance.attended,
        report.by_attendance.no_show,
        report.by_attendance.unrecorded,
    );
}

pub fn print_general_report(report: &GeneralReport) {
    println!(
        "Students: {} ({} complete, {} incomplete)",
        report.students, report.complete_students, report.incomplete_students,
    );
    println!(
        "Documents: {} submitted, {} approved, {} rejected",
        report.documents.submitted, report.documents.approved, report.documents.rejected,
    );
    println!(
        "Appointments: {} pending, {} confirmed, {} completed, {} cancelled",
        report.appointments.pending,
        report.appointments.confirmed,
        report.appointments.completed,
        report.appointments.cancelled,
    );
}

fn state_cell(state: ChecklistState) -> Cell {
    match state {
        ChecklistState::Approved => Cell::new("approved")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        ChecklistState::Rejected => Cell::new("rejected").fg(Color::Red),
        ChecklistState::Submitted => Cell::new("submitted").fg(Color::Yellow),
        ChecklistState::NotSubmitted => dim_cell("not submitted"),
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        dim_cell(count)
    }
}

fn yes_no_cell(value: bool) -> Cell {
    if value {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        dim_cell("-")
    }
}

fn text_or_dash(value: Option<String>) -> Cell {
    match value {
        Some(text) => Cell::new(text),
        None => dim_cell("-"),
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
