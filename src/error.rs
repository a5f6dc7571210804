//! Error types and HTTP error response handling.
//!
//! Seeding is an administrative, all-or-nothing operation: every failure is
//! logged once and reported to the caller as HTTP 500 with the error message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Application-wide error type.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// Database operation failed (connection, DDL or insert).
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Argon2 could not hash a seed password.
    #[error("Password hashing failed: {0}")]
    PasswordHash(String),

    /// The compiled-in placeholder dataset failed to parse or validate.
    #[error("Invalid seed data: {0}")]
    InvalidSeedData(String),

    /// A blocking task (password hashing) panicked or was cancelled.
    #[error("Background task failed: {0}")]
    Task(#[from] tokio::task::JoinError),
}

impl From<argon2::password_hash::Error> for AppError {
    fn from(err: argon2::password_hash::Error) -> Self {
        AppError::PasswordHash(err.to_string())
    }
}

/// Convert AppError into an HTTP response.
///
/// # Response Format
///
/// ```json
/// { "error": "Database error: ..." }
/// ```
///
/// All variants map to 500 Internal Server Error.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Seeding error");

        let body = Json(json!({ "error": self.to_string() }));

        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}
