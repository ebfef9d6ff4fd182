//! Error type returned by handlers, with its HTTP mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use corretoras_lib::CorretorasError;
use serde_json::json;

/// Application error type with HTTP response mapping.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// The broker list could not be fetched or decoded (502).
    #[error("Upstream error: {0}")]
    Upstream(String),

    /// The HTML template failed to render (500).
    #[error("Template error: {0}")]
    Template(String),

    /// Anything else (500).
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Upstream(_) => StatusCode::BAD_GATEWAY,
            AppError::Template(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        tracing::error!(status = status.as_u16(), "{}", self);

        let body = axum::Json(json!({
            "error": self.to_string(),
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

impl From<CorretorasError> for AppError {
    fn from(err: CorretorasError) -> Self {
        match err {
            CorretorasError::Api(e) => AppError::Upstream(e.to_string()),
            CorretorasError::InvalidInput(msg) => AppError::Internal(msg),
        }
    }
}

impl From<askama::Error> for AppError {
    fn from(err: askama::Error) -> Self {
        AppError::Template(err.to_string())
    }
}
