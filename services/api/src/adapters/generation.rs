//! services/api/src/adapters/generation.rs
//!
//! This module contains the adapter for the text-generation LLM used for both
//! summaries and quizzes. It implements the `TextGenerationService` port from the
//! `core` crate on top of the OpenAI Responses API.

use async_openai::{
    config::OpenAIConfig, error::OpenAIError, types::responses::CreateResponseArgs, Client,
};
use async_trait::async_trait;
use yt_learning_core::ports::{PortError, PortResult, TextGenerationService};

//=========================================================================================
// The Main Adapter Struct
//=========================================================================================

/// An adapter that implements `TextGenerationService` using an OpenAI-compatible LLM.
#[derive(Clone)]
pub struct OpenAiGenerationAdapter {
    client: Client<OpenAIConfig>,
    model: String,
}

impl OpenAiGenerationAdapter {
    /// Creates a new `OpenAiGenerationAdapter`.
    pub fn new(client: Client<OpenAIConfig>, model: String) -> Self {
        Self { client, model }
    }
}

//=========================================================================================
// `TextGenerationService` Trait Implementation
//=========================================================================================

#[async_trait]
impl TextGenerationService for OpenAiGenerationAdapter {
    /// Sends `instructions` as the system guidance and `input` (the transcript) as the
    /// user content, returning the model's output text.
    async fn generate(&self, instructions: &str, input: &str) -> PortResult<String> {
        let request = CreateResponseArgs::default()
            .model(&self.model)
            .instructions(instructions)
            .input(input.to_string())
            .build()
            .map_err(|e| PortError::Unexpected(e.to_string()))?;

        // Call the API and manually map the error if it occurs, which respects the orphan rule.
        let response = self
            .client
            .responses()
            .create(request)
            .await
            .map_err(|e: OpenAIError| PortError::Upstream(e.to_string()))?;

        let output = response.output_text().unwrap_or_default();
        if output.trim().is_empty() {
            return Err(PortError::Upstream(
                "Generation LLM response contained no text content.".to_string(),
            ));
        }

        Ok(output)
    }
}
