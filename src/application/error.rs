// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

pub const DUPLICATE_CONTENT_MESSAGE: &str = "content is already used by another article";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("{0}")]
    Validation(String),

    #[error("content is already used by another article")]
    DuplicateContent,

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Storage(String),
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(msg) => Self::Validation(msg),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Conflict(_) => Self::DuplicateContent,
            DomainError::Persistence(msg) => Self::Storage(msg),
        }
    }
}
