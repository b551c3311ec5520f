//! services/api/src/bin/api.rs

use async_openai::{config::OpenAIConfig, Client};
use learning_api::{
    adapters::{OpenAiGenerationAdapter, RapidApiTranscriptAdapter, RedisCacheAdapter},
    config::{Config, ConfigError},
    error::ApiError,
    web::{create_router, AppState},
};
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use yt_learning_core::LearningService;

#[tokio::main]
async fn main() -> Result<(), ApiError> {
    // --- 1. Load Configuration & Set Up Logging ---
    let config = Arc::new(Config::from_env()?);
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(config.log_level.to_string()))
        .with(tracing_subscriber::fmt::layer())
        .init();
    info!("Configuration loaded. Starting server...");

    // --- 2. Connect to the Cache ---
    info!("Connecting to Redis...");
    let cache = Arc::new(RedisCacheAdapter::connect(&config.redis_url).await?);
    info!("Redis connection established.");

    // --- 3. Initialize Service Adapters ---
    let mut openai_config = OpenAIConfig::new().with_api_key(
        config
            .openai_api_key
            .as_ref()
            .ok_or_else(|| ConfigError::MissingVar("OPENAI_API_KEY".to_string()))?,
    );
    if let Some(api_base) = &config.openai_api_base {
        openai_config = openai_config.with_api_base(api_base);
    }
    let openai_client = Client::with_config(openai_config);
    let generator = Arc::new(OpenAiGenerationAdapter::new(
        openai_client,
        config.generation_model.clone(),
    ));

    let transcripts = Arc::new(RapidApiTranscriptAdapter::new(
        reqwest::Client::new(),
        config.transcript_api_base_url.clone(),
        config.transcript_api_host.clone(),
        config.rapidapi_key.clone(),
    ));

    let learning = LearningService::new(transcripts, generator, config.prompts.clone())
        .with_cache(cache)
        .with_cache_ttl(config.cache_ttl_secs);

    // --- 4. Build the Shared AppState & Router ---
    let app_state = Arc::new(AppState {
        config: config.clone(),
        learning: Arc::new(learning),
    });
    let app = create_router(app_state);

    // --- 5. Start the Server ---
    info!("Starting server on {}", config.bind_address);
    info!(
        "Swagger UI available at http://{}/docs",
        config.bind_address
    );
    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server stopped.");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {:?}", e);
    }
    info!("Shutdown signal received.");
}
