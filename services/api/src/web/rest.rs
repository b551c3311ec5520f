//! services/api/src/web/rest.rs
//!
//! Contains the Axum handlers for the REST API endpoints and the master
//! definition for the OpenAPI specification.

use crate::{
    error::{ApiError, ErrorBody},
    web::{
        schemas::{QuizQuery, QuizResponse, RootResponse, SummaryQuery, SummaryResponse},
        state::AppState,
    },
};
use axum::{
    extract::{FromRequestParts, Query, State},
    response::Json,
};
use std::sync::Arc;
use tracing::{info, warn};
use utoipa::{
    openapi::security::{ApiKey, ApiKeyValue, SecurityScheme},
    Modify, OpenApi,
};
use yt_learning_core::{
    domain::{LanguageCode, VideoUrl},
    validation::{matches_language_pattern, resolve_language, validate_question_count},
    youtube::normalize_youtube_url,
};

//=========================================================================================
// OpenAPI Master Definition
//=========================================================================================

#[derive(OpenApi)]
#[openapi(
    info(title = "YouTube AI Learning API"),
    paths(root_handler, summary_handler, quiz_handler),
    components(schemas(SummaryResponse, QuizResponse, RootResponse, ErrorBody)),
    modifiers(&ApiKeyAddon),
    tags(
        (name = "Summary", description = "Summaries generated from YouTube transcripts."),
        (name = "Quiz", description = "Quizzes generated from YouTube transcripts.")
    )
)]
pub struct ApiDoc;

struct ApiKeyAddon;

impl Modify for ApiKeyAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "api_key",
                SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new("API-Key"))),
            );
        }
    }
}

//=========================================================================================
// Extractors
//=========================================================================================

/// `Query` whose rejections are rendered as `ApiError` (422 with a `detail` body).
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

fn check_language_pattern(language: &str) -> Result<(), ApiError> {
    if matches_language_pattern(language) {
        Ok(())
    } else {
        Err(ApiError::InvalidQuery(format!(
            "language must match the pattern ^[a-z]{{2}}$, got '{language}'"
        )))
    }
}

/// Validates the parameters shared by every generation endpoint.
fn validate_video_request(
    youtube_url: &str,
    language: &str,
) -> Result<(VideoUrl, LanguageCode), ApiError> {
    check_language_pattern(language)
        .and_then(|_| Ok(normalize_youtube_url(youtube_url)?))
        .and_then(|video| Ok((video, resolve_language(language)?)))
        .inspect_err(|e| {
            warn!(
                stage = "validation",
                youtube_url,
                language,
                error = %e,
                "Invalid request parameters"
            )
        })
}

//=========================================================================================
// REST API Handlers
//=========================================================================================

/// API health check.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Service is up", body = RootResponse)
    )
)]
pub async fn root_handler() -> Json<RootResponse> {
    Json(RootResponse {
        message: "YouTube AI Learning API. Visit /docs for documentation.".to_string(),
    })
}

/// Generate a summary from a YouTube video transcript.
///
/// Unsupported language codes fall back to `en`.
#[utoipa::path(
    get,
    path = "/summary",
    tag = "Summary",
    params(SummaryQuery),
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Summary generated successfully", body = SummaryResponse),
        (status = 400, description = "Invalid input parameters", body = ErrorBody),
        (status = 403, description = "Missing or invalid API key", body = ErrorBody),
        (status = 422, description = "Invalid YouTube URL or query string", body = ErrorBody),
        (status = 500, description = "Summary generation failed", body = ErrorBody),
        (status = 503, description = "Transcript service unavailable", body = ErrorBody)
    )
)]
pub async fn summary_handler(
    State(app_state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<SummaryQuery>,
) -> Result<Json<SummaryResponse>, ApiError> {
    let (video, language) = validate_video_request(&query.youtube_url, &query.language)?;
    info!(youtube_url = %video.normalized, language = %language, "Summary request");

    let summary = app_state
        .learning
        .summarize(&video, &language)
        .await
        .map_err(|e| ApiError::from_learning(e, "summary"))?;

    info!(youtube_url = %video.normalized, "Summary generated successfully");
    Ok(Json(SummaryResponse { summary }))
}

/// Generate a quiz from a YouTube video transcript.
///
/// Accepts GET and POST with the same query parameters.
#[utoipa::path(
    method(get, post),
    path = "/quiz",
    tag = "Quiz",
    params(QuizQuery),
    security(("api_key" = [])),
    responses(
        (status = 200, description = "Quiz generated successfully", body = QuizResponse),
        (status = 400, description = "Invalid input parameters", body = ErrorBody),
        (status = 403, description = "Missing or invalid API key", body = ErrorBody),
        (status = 422, description = "Invalid YouTube URL or query string", body = ErrorBody),
        (status = 500, description = "Quiz generation failed", body = ErrorBody),
        (status = 503, description = "Transcript service unavailable", body = ErrorBody)
    )
)]
pub async fn quiz_handler(
    State(app_state): State<Arc<AppState>>,
    ApiQuery(query): ApiQuery<QuizQuery>,
) -> Result<Json<QuizResponse>, ApiError> {
    let (video, language) = validate_video_request(&query.youtube_url, &query.language)?;
    let num_questions = validate_question_count(query.num_questions).inspect_err(|e| {
        warn!(
            stage = "validation",
            youtube_url = %video.normalized,
            num_questions = query.num_questions,
            error = %e,
            "Invalid question count"
        )
    })?;
    info!(
        youtube_url = %video.normalized,
        language = %language,
        num_questions,
        "Quiz request"
    );

    let quiz = app_state
        .learning
        .generate_quiz(&video, &language, num_questions)
        .await
        .map_err(|e| ApiError::from_learning(e, "quiz"))?;

    info!(youtube_url = %video.normalized, questions = quiz.len(), "Quiz generated successfully");
    Ok(Json(QuizResponse { quiz }))
}
