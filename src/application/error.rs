// src/application/error.rs
use crate::domain::errors::DomainError;
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    Domain(#[from] DomainError),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("conflict: {0}")]
    Conflict(String),
}

impl ApplicationError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn conflict(msg: impl Into<String>) -> Self {
        Self::Conflict(msg.into())
    }

    /// True for caller mistakes (bad input, illegal state change or a stale
    /// write), as opposed to missing records or backend failures.
    pub fn is_client_error(&self) -> bool {
        match self {
            Self::Validation(_) | Self::Conflict(_) => true,
            Self::Domain(err) => matches!(
                err,
                DomainError::Validation(_)
                    | DomainError::Conflict(_)
                    | DomainError::InvalidTransition { .. }
            ),
            Self::NotFound(_) => false,
        }
    }
}
