//! crates/yt_learning_core/src/validation.rs
//!
//! Language and question-count rules shared by both endpoints.
//!
//! Languages go through two layers: the HTTP boundary rejects anything that is not
//! two lowercase letters ([`matches_language_pattern`]), then
//! [`resolve_language`] falls back to `en` for well-formed codes outside the
//! supported set.

use regex::Regex;
use std::sync::LazyLock;
use tracing::warn;

use crate::domain::LanguageCode;
use crate::error::ValidationError;

pub const SUPPORTED_LANGUAGES: [&str; 12] = [
    "en", "es", "fr", "de", "it", "pt", "ru", "ja", "ko", "zh", "ar", "hi",
];

pub const DEFAULT_QUESTION_COUNT: i64 = 5;
pub const MIN_QUESTION_COUNT: i64 = 1;
pub const MAX_QUESTION_COUNT: i64 = 20;

static LANGUAGE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z]{2}$").expect("language pattern is a valid regex"));

/// Transport-level check: exactly two lowercase ASCII letters.
pub fn matches_language_pattern(code: &str) -> bool {
    LANGUAGE_PATTERN.is_match(code)
}

/// Resolves a language code, falling back to `en` when it is blank or unsupported.
pub fn resolve_language(raw: &str) -> Result<LanguageCode, ValidationError> {
    let code = raw.trim().to_lowercase();
    if code.is_empty() {
        return Ok(LanguageCode::default());
    }
    if code.chars().count() != 2 {
        return Err(ValidationError::Invalid(
            "Language code must be exactly 2 characters".to_string(),
        ));
    }
    if !SUPPORTED_LANGUAGES.contains(&code.as_str()) {
        warn!(language = %code, "Unsupported language code, using 'en' as fallback");
        return Ok(LanguageCode::default());
    }
    Ok(LanguageCode(code))
}

/// Checks the requested number of quiz questions against the allowed range.
pub fn validate_question_count(count: i64) -> Result<u32, ValidationError> {
    if !(MIN_QUESTION_COUNT..=MAX_QUESTION_COUNT).contains(&count) {
        return Err(ValidationError::Invalid(format!(
            "num_questions must be between {MIN_QUESTION_COUNT} and {MAX_QUESTION_COUNT}"
        )));
    }
    // In range, so the cast cannot truncate.
    Ok(count as u32)
}
