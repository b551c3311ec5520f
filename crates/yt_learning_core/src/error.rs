//! crates/yt_learning_core/src/error.rs
//!
//! Error types raised by the core validation and orchestration logic.

use crate::ports::PortError;
use crate::quiz::QuizParseError;

/// Rejections of caller-supplied input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// Input that is missing or malformed.
    #[error("{0}")]
    Invalid(String),
    /// A well-formed URL that does not address a YouTube video.
    #[error("{0}")]
    InvalidUrl(String),
}

/// Failures of a summary or quiz generation run.
#[derive(Debug, thiserror::Error)]
pub enum LearningError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Could not get transcript: {0}")]
    Transcript(PortError),

    #[error("Text generation failed: {0}")]
    Generation(PortError),

    /// The model answered, but not with the expected quiz schema. Never retried.
    #[error("Could not parse quiz response: {0}")]
    Parse(#[from] QuizParseError),
}
