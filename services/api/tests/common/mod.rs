//! Shared harness for the HTTP tests: spawns the real router on a random port with
//! mock upstream services behind it.

// Not every test file uses every helper.
#![allow(unused)]

use learning_api::{
    config::Config,
    web::{create_router, AppState},
};
use reqwest::Client;
use std::{net::SocketAddr, sync::Arc};
use tokio::{net::TcpListener, task::JoinHandle};
use tracing::Level;
use yt_learning_core::{LearningService, PromptTemplates};
use yt_learning_test_utils::{MockCache, MockGenerator, MockTranscriptService};

pub const TEST_API_KEY: &str = "test-secret";

pub fn test_config() -> Config {
    Config {
        bind_address: "127.0.0.1:0".parse().unwrap(),
        log_level: Level::DEBUG,
        api_key: TEST_API_KEY.to_string(),
        openai_api_key: None,
        openai_api_base: None,
        generation_model: "mock-gpt".to_string(),
        rapidapi_key: None,
        transcript_api_host: "transcripts.test".to_string(),
        transcript_api_base_url: "http://transcripts.test".to_string(),
        redis_url: "redis://127.0.0.1:6379".to_string(),
        cache_ttl_secs: 3600,
        prompts: PromptTemplates {
            summary: "Summarize.".to_string(),
            quiz: "Return JSON.".to_string(),
        },
    }
}

pub struct TestApp {
    pub address: String,
    pub client: Client,
    _server_handle: JoinHandle<()>,
}

impl TestApp {
    pub async fn spawn(
        transcripts: MockTranscriptService,
        generator: MockGenerator,
        cache: Option<MockCache>,
    ) -> Self {
        // `try_init` is used to prevent panic if the logger is already initialized.
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .compact()
            .try_init();

        let config = test_config();
        let mut learning = LearningService::new(
            Arc::new(transcripts),
            Arc::new(generator),
            config.prompts.clone(),
        );
        if let Some(cache) = cache {
            learning = learning.with_cache(Arc::new(cache));
        }

        let app_state = Arc::new(AppState {
            config: Arc::new(config),
            learning: Arc::new(learning),
        });

        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr: SocketAddr = listener.local_addr().unwrap();
        let server_handle = tokio::spawn(async move {
            axum::serve(listener, create_router(app_state))
                .await
                .unwrap();
        });

        Self {
            address: format!("http://{addr}"),
            client: Client::new(),
            _server_handle: server_handle,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.address, path)
    }
}
