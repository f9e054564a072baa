use thiserror::Error;

use intake_engine::{AppointmentError, TransitionError};
use intake_store::StoreError;

#[derive(Debug, Error)]
pub enum WorkflowError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Booking(#[from] AppointmentError),
    #[error(transparent)]
    Transition(#[from] TransitionError),
    #[error("enrollment period \"{0}\" is closed")]
    PeriodClosed(String),
    #[error("unknown document type: {0}")]
    UnknownDocumentType(String),
}

pub type Result<T> = std::result::Result<T, WorkflowError>;
