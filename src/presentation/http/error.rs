// src/presentation/http/error.rs
use crate::application::{ApplicationResult, error::ApplicationError};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug)]
pub struct HttpError {
    status: StatusCode,
    message: String,
}

impl HttpError {
    /// Maps an application outcome onto a status code. Duplicate content is
    /// reported like any other storage failure (500).
    pub fn from_error(err: ApplicationError) -> Self {
        let message = err.to_string();
        match err {
            ApplicationError::Validation(_) => Self::new(StatusCode::BAD_REQUEST, message),
            ApplicationError::NotFound(_) => Self::new(StatusCode::NOT_FOUND, message),
            ApplicationError::DuplicateContent | ApplicationError::Storage(_) => {
                Self::new(StatusCode::INTERNAL_SERVER_ERROR, message)
            }
        }
    }

    /// Like [`HttpError::from_error`], prefixing server-side failures with the
    /// operation that failed.
    pub fn with_context(err: ApplicationError, context: &str) -> Self {
        let mut http = Self::from_error(err);
        if http.status.is_server_error() {
            http.message = format!("{context}: {}", http.message);
        }
        http
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message.into())
    }

    fn new(status: StatusCode, message: String) -> Self {
        Self { status, message }
    }
}

impl IntoResponse for HttpError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, message = %self.message, "request failed");
        }
        let payload = ErrorResponse {
            message: self.message,
        };
        (self.status, Json(payload)).into_response()
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    pub message: String,
}

pub type HttpResult<T> = Result<T, HttpError>;

pub trait IntoHttpResult<T> {
    fn into_http_context(self, context: &str) -> HttpResult<T>;
}

impl<T> IntoHttpResult<T> for ApplicationResult<T> {
    fn into_http_context(self, context: &str) -> HttpResult<T> {
        self.map_err(|err| HttpError::with_context(err, context))
    }
}
