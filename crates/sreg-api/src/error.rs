//! # Application Error
//!
//! Structured error type implementing `axum::response::IntoResponse`.
//! Validation failures are not errors at this layer: they are an ordinary
//! outcome rendered by the submission handler. `AppError` covers what is
//! left, and always answers with an HTML page. Internal details are logged,
//! never shown.

use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use thiserror::Error;

use crate::render::layout::message_page;

/// Application-level error type that implements [`IntoResponse`] for Axum.
#[derive(Error, Debug)]
pub enum AppError {
    /// No page at the requested path (404).
    #[error("not found: {0}")]
    NotFound(String),

    /// Internal server error (500). Message is logged but not returned to client.
    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    /// Return the HTTP status code and page title for this error.
    fn status_and_title(&self) -> (StatusCode, &'static str) {
        match self {
            Self::NotFound(_) => (StatusCode::NOT_FOUND, "Page Not Found"),
            Self::Internal(_) => (StatusCode::INTERNAL_SERVER_ERROR, "Something Went Wrong"),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, title) = self.status_and_title();

        let message = match &self {
            Self::NotFound(_) => "The page you requested does not exist.",
            Self::Internal(_) => "An internal error occurred. Please try again later.",
        };

        match &self {
            Self::Internal(_) => tracing::error!(error = %self, "internal server error"),
            Self::NotFound(_) => tracing::debug!(error = %self, "not found"),
        }

        (status, Html(message_page(title, message))).into_response()
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        Self::Internal(format!("serialization failed: {err}"))
    }
}
