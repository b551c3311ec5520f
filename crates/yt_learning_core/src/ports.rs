//! crates/yt_learning_core/src/ports.rs
//!
//! Defines the service contracts (traits) for the application's core logic.
//! These traits form the boundary of the hexagonal architecture, allowing the core
//! to be independent of the transcript provider, the language model and the cache.

use async_trait::async_trait;

use crate::domain::{LanguageCode, VideoUrl};

//=========================================================================================
// Generic Port Error and Result Types
//=========================================================================================

/// A generic error type for all port operations.
/// This abstracts away the specific errors from external services (e.g., HTTP, Redis).
#[derive(Debug, thiserror::Error)]
pub enum PortError {
    /// A credential or setting the adapter needs was not provided.
    #[error("Missing configuration: {0}")]
    Configuration(String),
    /// The external service failed or answered with something unusable.
    #[error("Upstream service error: {0}")]
    Upstream(String),
    #[error("An unexpected error occurred: {0}")]
    Unexpected(String),
}

/// A convenience type alias for `Result<T, PortError>`.
pub type PortResult<T> = Result<T, PortError>;

//=========================================================================================
// Service Ports (Traits)
//=========================================================================================

#[async_trait]
pub trait TranscriptService: Send + Sync {
    /// Fetches the flattened plain-text transcript of a video in the given language.
    async fn fetch_transcript(&self, video: &VideoUrl, language: &LanguageCode)
        -> PortResult<String>;
}

#[async_trait]
pub trait TextGenerationService: Send + Sync {
    /// Runs the model with `instructions` as system guidance and `input` as user content,
    /// returning the raw output text.
    async fn generate(&self, instructions: &str, input: &str) -> PortResult<String>;
}

/// A key/value store with per-entry expiry.
///
/// Callers treat every error as a cache miss, so implementations should not retry.
#[async_trait]
pub trait CacheStore: Send + Sync {
    async fn get(&self, key: &str) -> PortResult<Option<String>>;

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> PortResult<()>;
}
