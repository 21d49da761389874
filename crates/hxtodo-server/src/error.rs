//! Error-to-HTTP response conversion.
//!
//! Handlers return `Result<T, AppError>`. Error responses carry the status
//! code and an empty body.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

/// Wrapper so we can implement `IntoResponse` for an external type.
#[derive(Debug)]
pub struct AppError {
    inner: hxtodo_core::Error,
}

impl AppError {
    pub fn new(inner: hxtodo_core::Error) -> Self {
        Self { inner }
    }

    pub fn status(&self) -> StatusCode {
        StatusCode::from_u16(self.inner.http_status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }
}

impl From<hxtodo_core::Error> for AppError {
    fn from(e: hxtodo_core::Error) -> Self {
        Self::new(e)
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        if status.is_server_error() {
            tracing::error!(status = %status, error = %self.inner, "Server error in handler");
        } else {
            tracing::debug!(status = %status, error = %self.inner, "Client error in handler");
        }

        status.into_response()
    }
}
