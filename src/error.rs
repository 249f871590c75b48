//! Application error type and its HTTP representation.
//!
//! Every failure is terminal for the request and rendered as a JSON body of
//! the form `{"error": "<message>"}`. Database faults are logged with their
//! cause and reported to the caller with a generic message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body returned for every error response.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted URL is not an absolute http/https URL.
    #[error("invalid url")]
    InvalidUrl,

    /// The short id path segment contains something other than digits.
    #[error("Wrong format")]
    WrongFormat,

    /// The short id path segment is absent.
    #[error("Not found")]
    MissingShortId,

    /// No mapping exists for a well-formed short id.
    #[error("No short URL found for the given input")]
    ShortUrlNotFound,

    #[error("An error occurred")]
    Database(#[from] sqlx::Error),
}

impl AppError {
    /// HTTP status for this error.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl | AppError::WrongFormat => StatusCode::BAD_REQUEST,
            AppError::MissingShortId | AppError::ShortUrlNotFound => StatusCode::NOT_FOUND,
            AppError::Database(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the response body. Never includes the underlying database cause.
    pub fn to_error_body(&self) -> ErrorBody {
        ErrorBody {
            error: self.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Database(ref e) = self {
            tracing::error!(error = %e, "database error");
        }

        (self.status_code(), Json(self.to_error_body())).into_response()
    }
}
