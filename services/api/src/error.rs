//! services/api/src/error.rs
//!
//! Defines the primary error type for the entire API service and its mapping
//! onto HTTP responses of the form `{"detail": "..."}`.

use crate::config::ConfigError;
use axum::{
    extract::rejection::QueryRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use tracing::{error, warn};
use utoipa::ToSchema;
use yt_learning_core::{LearningError, ValidationError};

/// The primary error type for the `api` service.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// Represents an error that occurred during configuration loading.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Represents a failure to reach the cache at startup.
    #[error("Cache error: {0}")]
    Cache(#[from] redis::RedisError),

    /// Represents a standard Input/Output error (e.g., binding to a network socket).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Missing or malformed input.
    #[error("{0}")]
    Validation(String),

    /// A URL that is not a recognizable YouTube video.
    #[error("{0}")]
    InvalidUrl(String),

    /// A query string that could not be deserialized or broke a transport rule.
    #[error("{0}")]
    InvalidQuery(String),

    #[error("{0}")]
    Forbidden(String),

    /// The transcript provider failed or is not configured.
    #[error("{0}")]
    TranscriptUnavailable(String),

    /// A catch-all for any other unexpected errors. The message is sent to clients as-is.
    #[error("{0}")]
    Internal(String),
}

impl ApiError {
    /// Maps a failed generation run for `operation` ("summary" or "quiz").
    ///
    /// Generation and parse failures are hidden behind a fixed message.
    pub fn from_learning(err: LearningError, operation: &str) -> Self {
        match err {
            LearningError::Validation(e) => e.into(),
            LearningError::Transcript(_) => Self::TranscriptUnavailable(err.to_string()),
            LearningError::Generation(_) | LearningError::Parse(_) => {
                error!(operation, error = %err, "Failed to generate {operation}");
                Self::Internal(format!(
                    "An unexpected error occurred while generating the {operation}"
                ))
            }
        }
    }

    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::InvalidUrl(_) | ApiError::InvalidQuery(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::TranscriptUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::Config(_) | ApiError::Cache(_) | ApiError::Io(_) | ApiError::Internal(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::Invalid(msg) => ApiError::Validation(msg),
            ValidationError::InvalidUrl(msg) => ApiError::InvalidUrl(msg),
        }
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::InvalidQuery(rejection.body_text())
    }
}

/// The JSON body of every error response.
#[derive(Serialize, ToSchema)]
pub struct ErrorBody {
    pub detail: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        // Startup-only failures never carry details to clients.
        let detail = match &self {
            ApiError::Config(_) | ApiError::Cache(_) | ApiError::Io(_) => {
                error!("Internal server error: {:?}", self);
                "An internal server error occurred.".to_string()
            }
            _ => self.to_string(),
        };

        if status.is_client_error() {
            warn!(status = %status.as_u16(), detail = %detail, "Request rejected");
        } else {
            error!(status = %status.as_u16(), detail = %detail, "Request failed");
        }

        (status, Json(ErrorBody { detail })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{
        io,
        sync::{Arc, Mutex},
    };
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct LogBuffer(Arc<Mutex<Vec<u8>>>);

    impl io::Write for LogBuffer {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for LogBuffer {
        type Writer = LogBuffer;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    /// Renders `err` into a response while capturing everything it logs.
    fn respond_and_capture(err: ApiError) -> (StatusCode, String) {
        let logs = LogBuffer::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(logs.clone())
            .with_ansi(false)
            .finish();

        let status = tracing::subscriber::with_default(subscriber, || err.into_response().status());
        let output = String::from_utf8(logs.0.lock().unwrap().clone()).unwrap();
        (status, output)
    }

    #[test]
    fn client_errors_are_logged_as_warnings() {
        let cases = [
            (
                ApiError::InvalidUrl("Must be a valid YouTube URL".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
            (
                ApiError::Validation("num_questions must be between 1 and 20".to_string()),
                StatusCode::BAD_REQUEST,
            ),
            (
                ApiError::InvalidQuery("language must match the pattern".to_string()),
                StatusCode::UNPROCESSABLE_ENTITY,
            ),
        ];

        for (err, expected_status) in cases {
            let detail = err.to_string();
            let (status, logs) = respond_and_capture(err);

            assert_eq!(status, expected_status);
            assert!(logs.contains("WARN"), "{logs}");
            assert!(logs.contains(&detail), "{logs}");
            assert!(logs.contains(&expected_status.as_u16().to_string()), "{logs}");
        }
    }

    #[test]
    fn server_errors_are_logged_as_errors() {
        let (status, logs) =
            respond_and_capture(ApiError::TranscriptUnavailable("Could not get transcript: down".to_string()));

        assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
        assert!(logs.contains("ERROR"), "{logs}");
        assert!(logs.contains("Could not get transcript: down"), "{logs}");
    }

    #[test]
    fn startup_failures_hide_their_details() {
        let err = ApiError::Config(ConfigError::MissingVar("REDIS_URL".to_string()));
        let (status, logs) = respond_and_capture(err);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(logs.contains("An internal server error occurred."), "{logs}");
    }
}
