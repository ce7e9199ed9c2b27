//! Application error type and its HTTP representation.
//!
//! Every handler returns `Result<_, AppError>`; the conversion into a
//! response happens once, in the `IntoResponse` impl.
//!
//! | Variant | Status | Body |
//! |---|---|---|
//! | `InvalidUrl` | 200 | `{"error":"invalid url"}` |
//! | `BadRequest` | 400 | `{"error": message}` |
//! | `NotFound` | 404 | `{"error": message}` |
//! | `StoreUnavailable` | 503 | `{"error":"store unavailable"}` |
//! | `Internal` | 500 | `{"error":"internal error"}` |
//!
//! `InvalidUrl` keeps a 200 status because existing clients of the
//! shortener read the `error` field instead of the status code.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// Message returned for every rejected URL.
pub const INVALID_URL_MESSAGE: &str = "invalid url";

/// JSON body shared by all error responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The submitted URL is malformed or its host does not resolve.
    #[error("invalid url: {reason}")]
    InvalidUrl { reason: String },

    #[error("{message}")]
    BadRequest { message: String },

    #[error("{message}")]
    NotFound { message: String },

    /// The persistence layer could not complete a request.
    #[error("store unavailable: {0}")]
    StoreUnavailable(#[from] sqlx::Error),

    #[error("{message}")]
    Internal { message: String },
}

impl AppError {
    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::InvalidUrl {
            reason: reason.into(),
        }
    }
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::BadRequest {
            message: message.into(),
        }
    }
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// HTTP status used when this error reaches a handler boundary.
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::InvalidUrl { .. } => StatusCode::OK,
            AppError::BadRequest { .. } => StatusCode::BAD_REQUEST,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::StoreUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message exposed to clients. Server-side details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            AppError::InvalidUrl { .. } => INVALID_URL_MESSAGE.to_string(),
            AppError::BadRequest { message } | AppError::NotFound { message } => message.clone(),
            AppError::StoreUnavailable(_) => "store unavailable".to_string(),
            AppError::Internal { .. } => "internal error".to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        if status.is_server_error() {
            tracing::error!(error = %self, "Request failed");
        } else {
            tracing::debug!(error = %self, "Request rejected");
        }

        let body = ErrorBody {
            error: self.public_message(),
        };

        (status, Json(body)).into_response()
    }
}
