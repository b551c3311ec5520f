//! crates/yt_learning_core/src/learning.rs
//!
//! Orchestrates transcript retrieval, prompt construction and text generation for
//! summaries and quizzes, with an optional cache in front of every upstream call.
//!
//! Cache failures never fail a request: a read error is a miss and a write error
//! is logged and dropped. Concurrent identical requests are not deduplicated.

use std::sync::Arc;
use tracing::{error, info, warn};

use crate::domain::{LanguageCode, QuizQuestion, VideoUrl};
use crate::error::LearningError;
use crate::ports::{CacheStore, TextGenerationService, TranscriptService};
use crate::prompt::{build_quiz_prompt, build_summary_prompt};
use crate::quiz::parse_quiz_response;
use crate::youtube::transcript_request_path;

/// Default lifetime of every cache entry, in seconds.
pub const DEFAULT_CACHE_TTL_SECS: u64 = 60 * 60;

/// Base instruction templates loaded from configuration.
#[derive(Debug, Clone, Default)]
pub struct PromptTemplates {
    pub summary: String,
    pub quiz: String,
}

pub fn transcript_cache_key(video: &VideoUrl, language: &LanguageCode) -> String {
    format!("transcript:{}", transcript_request_path(video, language))
}

pub fn summary_cache_key(video: &VideoUrl, language: &LanguageCode) -> String {
    format!("summary:{}:{}", video.normalized, language)
}

pub fn quiz_cache_key(video: &VideoUrl, language: &LanguageCode, num_questions: u32) -> String {
    format!("quiz:{}:{}:{}", video.normalized, language, num_questions)
}

/// Generates summaries and quizzes from YouTube transcripts.
#[derive(Clone)]
pub struct LearningService {
    transcripts: Arc<dyn TranscriptService>,
    generator: Arc<dyn TextGenerationService>,
    cache: Option<Arc<dyn CacheStore>>,
    prompts: PromptTemplates,
    cache_ttl_secs: u64,
}

impl LearningService {
    /// Creates an uncached service. Use [`LearningService::with_cache`] to add one.
    pub fn new(
        transcripts: Arc<dyn TranscriptService>,
        generator: Arc<dyn TextGenerationService>,
        prompts: PromptTemplates,
    ) -> Self {
        Self {
            transcripts,
            generator,
            cache: None,
            prompts,
            cache_ttl_secs: DEFAULT_CACHE_TTL_SECS,
        }
    }

    pub fn with_cache(mut self, cache: Arc<dyn CacheStore>) -> Self {
        self.cache = Some(cache);
        self
    }

    pub fn with_cache_ttl(mut self, ttl_secs: u64) -> Self {
        self.cache_ttl_secs = ttl_secs;
        self
    }

    /// Returns the transcript of a video, from the cache when possible.
    pub async fn transcript(
        &self,
        video: &VideoUrl,
        language: &LanguageCode,
    ) -> Result<String, LearningError> {
        let cache_key = transcript_cache_key(video, language);
        if let Some(cached) = self.cache_get(&cache_key).await {
            info!(youtube_url = %video.normalized, language = %language, "Transcript fetched from cache");
            return Ok(cached);
        }

        info!(youtube_url = %video.normalized, language = %language, "Fetching transcript");
        let transcript = self
            .transcripts
            .fetch_transcript(video, language)
            .await
            .inspect_err(|e| {
                error!(youtube_url = %video.normalized, language = %language, stage = "transcript", error = %e, "Could not get transcript")
            })
            .map_err(LearningError::Transcript)?;

        self.cache_set(&cache_key, &transcript).await;
        Ok(transcript)
    }

    /// Produces a prose summary of the video in the requested language.
    pub async fn summarize(
        &self,
        video: &VideoUrl,
        language: &LanguageCode,
    ) -> Result<String, LearningError> {
        let cache_key = summary_cache_key(video, language);
        if let Some(cached) = self.cache_get(&cache_key).await {
            info!(youtube_url = %video.normalized, language = %language, "Summary fetched from cache");
            return Ok(cached);
        }

        let transcript = self.transcript(video, language).await?;
        let prompt = build_summary_prompt(Some(language), &self.prompts.summary);
        let summary = self.generate(&prompt, &transcript, video, language).await?;
        info!(youtube_url = %video.normalized, language = %language, "Summary generated");

        self.cache_set(&cache_key, &summary).await;
        Ok(summary)
    }

    /// Produces a quiz with `num_questions` questions about the video.
    ///
    /// `num_questions` is expected to be validated already.
    pub async fn generate_quiz(
        &self,
        video: &VideoUrl,
        language: &LanguageCode,
        num_questions: u32,
    ) -> Result<Vec<QuizQuestion>, LearningError> {
        let cache_key = quiz_cache_key(video, language, num_questions);
        if let Some(cached) = self.cache_get(&cache_key).await {
            match serde_json::from_str::<Vec<QuizQuestion>>(&cached) {
                Ok(quiz) => {
                    info!(youtube_url = %video.normalized, language = %language, num_questions, "Quiz fetched from cache");
                    return Ok(quiz);
                }
                Err(e) => {
                    warn!(cache_key = %cache_key, error = %e, "Discarding undecodable cached quiz")
                }
            }
        }

        let transcript = self.transcript(video, language).await?;
        let prompt = build_quiz_prompt(Some(language), &self.prompts.quiz, num_questions);
        let output = self.generate(&prompt, &transcript, video, language).await?;

        let quiz = parse_quiz_response(&output).inspect_err(|e| {
            error!(youtube_url = %video.normalized, language = %language, stage = "parse", error = %e, "Model output is not a valid quiz")
        })?;
        info!(youtube_url = %video.normalized, language = %language, num_questions, questions = quiz.len(), "Quiz generated");

        match serde_json::to_string(&quiz) {
            Ok(encoded) => self.cache_set(&cache_key, &encoded).await,
            Err(e) => warn!(cache_key = %cache_key, error = %e, "Could not encode quiz for the cache"),
        }
        Ok(quiz)
    }

    async fn generate(
        &self,
        prompt: &str,
        transcript: &str,
        video: &VideoUrl,
        language: &LanguageCode,
    ) -> Result<String, LearningError> {
        self.generator
            .generate(prompt, transcript)
            .await
            .inspect_err(|e| {
                error!(youtube_url = %video.normalized, language = %language, stage = "generation", error = %e, "Text generation failed")
            })
            .map_err(LearningError::Generation)
    }

    async fn cache_get(&self, key: &str) -> Option<String> {
        let cache = self.cache.as_ref()?;
        match cache.get(key).await {
            // An empty entry is as good as no entry.
            Ok(Some(value)) if !value.is_empty() => Some(value),
            Ok(_) => None,
            Err(e) => {
                warn!(cache_key = %key, error = %e, "Cache read failed, treating as miss");
                None
            }
        }
    }

    async fn cache_set(&self, key: &str, value: &str) {
        let Some(cache) = self.cache.as_ref() else {
            return;
        };
        if let Err(e) = cache.set(key, value, self.cache_ttl_secs).await {
            warn!(cache_key = %key, error = %e, "Cache write failed");
        }
    }
}
