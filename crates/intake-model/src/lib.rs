pub mod appointment;
pub mod audit;
pub mod catalog;
pub mod document;
pub mod error;
pub mod message;
pub mod options;
pub mod status;
pub mod student;

pub use appointment::{Appointment, AppointmentStatus, AttendanceOutcome};
pub use audit::{AuditAction, AuditEntry};
pub use catalog::{DocumentCatalog, RequiredDocumentType};
pub use document::{DocumentStatus, SubmittedDocument};
pub use error::{IntakeError, Result};
pub use message::{Message, MessageCategory};
pub use options::{AppointmentPolicy, EnrollmentPeriod};
pub use status::DocumentationStatus;
pub use student::{Role, Student};
