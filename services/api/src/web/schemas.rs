//! services/api/src/web/schemas.rs
//!
//! Query parameters and response payloads of the REST endpoints.

use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};
use yt_learning_core::{validation::DEFAULT_QUESTION_COUNT, QuizQuestion};

fn default_language() -> String {
    "en".to_string()
}

fn default_num_questions() -> i64 {
    DEFAULT_QUESTION_COUNT
}

//=========================================================================================
// Query Parameters
//=========================================================================================

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SummaryQuery {
    /// YouTube video URL.
    #[serde(default)]
    #[param(example = "https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
    pub youtube_url: String,

    /// Language code for the summary (e.g., 'en', 'es', 'fr').
    #[serde(default = "default_language")]
    #[param(pattern = "^[a-z]{2}$", example = "en")]
    pub language: String,
}

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct QuizQuery {
    /// YouTube video URL.
    #[serde(default)]
    #[param(example = "https://www.youtube.com/watch?v=dQw4w9WgXcQ")]
    pub youtube_url: String,

    /// Language code for the quiz (e.g., 'en', 'es', 'fr').
    #[serde(default = "default_language")]
    #[param(pattern = "^[a-z]{2}$", example = "en")]
    pub language: String,

    /// Number of questions to generate.
    #[serde(default = "default_num_questions")]
    #[param(minimum = 1, maximum = 20, example = 5)]
    pub num_questions: i64,
}

//=========================================================================================
// Response Payloads
//=========================================================================================

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct SummaryResponse {
    pub summary: String,
}

/// Each entry is `{"order", "question", "type", "answers": [{"answer", "is_correct"}]}`.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct QuizResponse {
    #[schema(value_type = Vec<Object>)]
    pub quiz: Vec<QuizQuestion>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct RootResponse {
    pub message: String,
}
