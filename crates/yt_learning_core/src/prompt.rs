//! crates/yt_learning_core/src/prompt.rs
//!
//! Builds the system instructions sent to the text-generation service.
//! Base templates come from configuration; a missing template is an empty string.

use crate::domain::LanguageCode;

/// Instructions for a prose summary of a transcript.
pub fn build_summary_prompt(language: Option<&LanguageCode>, base_prompt: &str) -> String {
    format!("{}{}", language_directive("summary", language), base_prompt)
}

/// Instructions for a quiz with exactly `num_questions` questions.
pub fn build_quiz_prompt(
    language: Option<&LanguageCode>,
    base_prompt: &str,
    num_questions: u32,
) -> String {
    format!(
        "{}{} Create {} questions.",
        language_directive("quiz", language),
        base_prompt,
        num_questions
    )
}

fn language_directive(output: &str, language: Option<&LanguageCode>) -> String {
    language
        .map(|code| format!("Create the {output} in {code} (IMPORTANT). "))
        .unwrap_or_default()
}
