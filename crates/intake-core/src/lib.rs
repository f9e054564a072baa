//! Calling-layer workflows for the enrollment intake system.
//!
//! This crate wires the pure engine to the persistence boundary: every
//! mutating action validates, persists, audits, and notifies in one
//! place, so the CLI (or any other front end) stays thin.

pub mod checklist;
pub mod error;
pub mod notifications;
pub mod service;

pub use checklist::{ChecklistRow, ChecklistState, build_checklist};
pub use error::{Result, WorkflowError};
pub use service::{ADMIN_ACTOR, IntakeService, UploadRequest};
