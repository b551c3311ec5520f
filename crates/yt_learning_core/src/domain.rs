//! crates/yt_learning_core/src/domain.rs
//!
//! Defines the core data structures for the application.
//! The quiz types double as the JSON payload returned to clients and stored in the cache.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A YouTube URL that passed validation, along with the video it addresses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VideoUrl {
    /// The trimmed URL with an explicit scheme, as supplied by the caller.
    pub normalized: String,
    pub video_id: String,
}

impl VideoUrl {
    /// The canonical watch URL sent to the transcript provider.
    pub fn watch_url(&self) -> String {
        format!("https://www.youtube.com/watch?v={}", self.video_id)
    }
}

/// A two-letter language code from the supported set.
///
/// Only constructed through [`crate::validation::resolve_language`], so any value
/// of this type is known to be supported.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LanguageCode(pub(crate) String);

impl LanguageCode {
    pub const DEFAULT: &'static str = "en";

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self(Self::DEFAULT.to_string())
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single answer option of a quiz question.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizAnswer {
    pub answer: String,
    #[serde(default)]
    pub is_correct: bool,
}

/// A quiz question as produced by the language model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizQuestion {
    pub order: u32,
    pub question: String,
    #[serde(rename = "type")]
    pub question_type: String,
    #[serde(default)]
    pub answers: Vec<QuizAnswer>,
}
