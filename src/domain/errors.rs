// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("conflict: {0}")]
    Conflict(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("cannot {action} an article in state '{from}'")]
    InvalidTransition {
        from: &'static str,
        action: &'static str,
    },
    #[error("persistence error: {0}")]
    Persistence(String),
}
