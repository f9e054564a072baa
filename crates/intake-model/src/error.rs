use thiserror::Error;

#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("duplicate document type id in catalog: {0}")]
    DuplicateCatalogId(String),
    #[error("{0}")]
    Message(String),
}

pub type Result<T> = std::result::Result<T, IntakeError>;
