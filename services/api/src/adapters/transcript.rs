//! services/api/src/adapters/transcript.rs
//!
//! This module contains the adapter for the RapidAPI YouTube transcript provider.
//! It implements the `TranscriptService` port from the `core` crate.

use async_trait::async_trait;
use reqwest::Client;
use serde_json::Value;
use tracing::{error, info};
use yt_learning_core::{
    ports::{PortError, PortResult, TranscriptService},
    youtube::transcript_request_path,
    LanguageCode, VideoUrl,
};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `TranscriptService` over the RapidAPI HTTP interface.
#[derive(Clone)]
pub struct RapidApiTranscriptAdapter {
    client: Client,
    base_url: String,
    host: String,
    api_key: Option<String>,
}

impl RapidApiTranscriptAdapter {
    /// Creates a new `RapidApiTranscriptAdapter`.
    ///
    /// A missing `api_key` is only reported when a transcript is requested.
    pub fn new(
        client: Client,
        base_url: impl Into<String>,
        host: impl Into<String>,
        api_key: Option<String>,
    ) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            host: host.into(),
            api_key,
        }
    }
}

//=========================================================================================
// `TranscriptService` Trait Implementation
//=========================================================================================

#[async_trait]
impl TranscriptService for RapidApiTranscriptAdapter {
    async fn fetch_transcript(
        &self,
        video: &VideoUrl,
        language: &LanguageCode,
    ) -> PortResult<String> {
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            error!("RAPIDAPI_KEY environment variable not set.");
            PortError::Configuration("RAPIDAPI_KEY environment variable not set.".to_string())
        })?;

        let endpoint = transcript_request_path(video, language);
        info!(endpoint = %endpoint, "Requesting transcript");

        let resp = self
            .client
            .get(format!("{}{}", self.base_url, endpoint))
            .header("x-rapidapi-key", api_key)
            .header("x-rapidapi-host", &self.host)
            .send()
            .await
            .inspect_err(|e| error!(error = %e, "Failed to make http request"))
            .map_err(|e| PortError::Upstream(format!("Could not fetch YouTube transcript: {e}")))?;

        // The provider reports failures in the body, so the status alone is not trusted.
        let status = resp.status();
        let body: Value = resp.json().await.map_err(|e| {
            PortError::Upstream(format!(
                "Could not fetch YouTube transcript: unreadable response (status {status}): {e}"
            ))
        })?;

        match body.get("transcript").and_then(Value::as_str) {
            Some(transcript) => {
                info!("Transcript fetched from API successfully");
                Ok(transcript.to_string())
            }
            None => {
                error!(status = %status, response = %body, "Unexpected API response");
                Err(PortError::Upstream(format!("Unexpected API response: {body}")))
            }
        }
    }
}
