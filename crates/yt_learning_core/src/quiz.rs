//! crates/yt_learning_core/src/quiz.rs
//!
//! Turns raw model output into structured quiz questions.

use regex::Regex;
use serde_json::Value;
use std::sync::LazyLock;

use crate::domain::QuizQuestion;

static CODE_FENCE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^```json|^```|```$").expect("code fence pattern is a valid regex"));

/// The model output did not follow the quiz schema.
#[derive(Debug, thiserror::Error)]
#[error("{0}")]
pub struct QuizParseError(#[from] serde_json::Error);

/// Parses the model's quiz output.
///
/// Markdown code fences are stripped first. The payload may be either an array of
/// questions or an object wrapping that array under `questions`. Any malformed JSON
/// or missing required field fails the whole parse; no partial result is returned.
pub fn parse_quiz_response(raw: &str) -> Result<Vec<QuizQuestion>, QuizParseError> {
    let stripped = CODE_FENCE.replace_all(raw.trim(), "");
    let mut value: Value = serde_json::from_str(stripped.trim())?;

    if let Some(questions) = value.get_mut("questions") {
        value = questions.take();
    }

    Ok(serde_json::from_value(value)?)
}
