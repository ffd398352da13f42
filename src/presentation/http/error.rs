use crate::application::{
    ApplicationResult,
    error::{ApplicationError, INVALID_REQUEST_MESSAGE},
};
use crate::domain::errors::FieldErrors;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use utoipa::ToSchema;

const INTERNAL_ERROR_MESSAGE: &str = "internal server error";

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
    validation: FieldErrors,
}

impl HttpError {
    pub fn from_error(err: ApplicationError) -> Self {
        match err {
            ApplicationError::InvalidInput(errors) => {
                Self::new(StatusCode::BAD_REQUEST, INVALID_REQUEST_MESSAGE).with_validation(errors)
            }
            ApplicationError::NotFound(msg) => Self::new(StatusCode::NOT_FOUND, msg),
            ApplicationError::Infrastructure(msg) => {
                tracing::error!(error = %msg, "infrastructure failure while handling request");
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, INTERNAL_ERROR_MESSAGE)
            }
        }
    }

    /// A request that could not be decoded; `field` names the part that was rejected.
    pub fn rejected(field: &str, detail: impl Into<String>) -> Self {
        let mut errors = FieldErrors::default();
        errors.insert(field, detail);
        Self::new(StatusCode::BAD_REQUEST, INVALID_REQUEST_MESSAGE).with_validation(errors)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            validation: FieldErrors::default(),
        }
    }

    fn with_validation(mut self, validation: FieldErrors) -> Self {
        self.validation = validation;
        self
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        let status = self.status();
        let payload = ErrorResponse {
            code: status.as_u16().to_string(),
            message: self.message,
            validation: self.validation.into_inner(),
        };
        (status, Json(payload)).into_response()
    }
}

/// Error body returned by every endpoint.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    /// HTTP status as a string, e.g. `"404"`.
    pub code: String,
    pub message: String,
    /// Field name to message; empty unless input failed validation.
    pub validation: BTreeMap<String, String>,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http(self) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http(self) -> HttpResult<T> {
        self.map_err(HttpError::from_error)
    }
}
