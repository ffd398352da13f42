// src/application/error.rs
use crate::domain::errors::{DomainError, FieldErrors};
use thiserror::Error;

pub type ApplicationResult<T> = Result<T, ApplicationError>;

pub const INVALID_REQUEST_MESSAGE: &str = "invalid request";
pub const POST_NOT_FOUND_MESSAGE: &str = "post not found";

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error("invalid input: {0}")]
    InvalidInput(FieldErrors),

    #[error("resource not found: {0}")]
    NotFound(String),

    #[error("infrastructure failure: {0}")]
    Infrastructure(String),
}

impl ApplicationError {
    pub fn invalid_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::default();
        errors.insert(field, message);
        Self::InvalidInput(errors)
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn post_not_found() -> Self {
        Self::not_found(POST_NOT_FOUND_MESSAGE)
    }

    pub fn infrastructure(msg: impl Into<String>) -> Self {
        Self::Infrastructure(msg.into())
    }

    /// Field-level details; empty for everything but invalid input.
    pub fn validation(&self) -> FieldErrors {
        match self {
            Self::InvalidInput(errors) => errors.clone(),
            _ => FieldErrors::default(),
        }
    }
}

impl From<DomainError> for ApplicationError {
    fn from(err: DomainError) -> Self {
        match err {
            DomainError::Validation(errors) => Self::InvalidInput(errors),
            DomainError::NotFound(msg) => Self::NotFound(msg),
            DomainError::Persistence(msg) => Self::Infrastructure(msg),
        }
    }
}
