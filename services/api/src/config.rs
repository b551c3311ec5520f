//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::net::SocketAddr;
use tracing::Level;
use yt_learning_core::{PromptTemplates, DEFAULT_CACHE_TTL_SECS};

pub const DEFAULT_TRANSCRIPT_API_HOST: &str = "youtube-transcript3.p.rapidapi.com";

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    /// Pre-shared secret expected in the `API-Key` header.
    pub api_key: String,
    pub openai_api_key: Option<String>,
    pub openai_api_base: Option<String>,
    pub generation_model: String,
    /// Checked on every transcript request rather than at startup.
    pub rapidapi_key: Option<String>,
    pub transcript_api_host: String,
    pub transcript_api_base_url: String,
    pub redis_url: String,
    pub cache_ttl_secs: u64,
    pub prompts: PromptTemplates,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source, such as a map in tests.
    pub fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let required_var = |name: &str| {
            var(name)
                .filter(|value| !value.is_empty())
                .ok_or_else(|| ConfigError::MissingVar(name.to_string()))
        };

        // --- Load Server Settings ---
        let bind_address_str = var("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:8000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let log_level_str = var("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let api_key = required_var("API_KEY")?;

        // --- Load Upstream Credentials (as optional) ---
        let openai_api_key = var("OPENAI_API_KEY");
        let openai_api_base = var("OPENAI_API_BASE");
        let rapidapi_key = var("RAPIDAPI_KEY").filter(|k| !k.is_empty());

        // --- Load Adapter-specific Settings ---
        let generation_model =
            var("GENERATION_MODEL").unwrap_or_else(|| "gpt-4o-mini".to_string());
        let transcript_api_host =
            var("TRANSCRIPT_API_HOST").unwrap_or_else(|| DEFAULT_TRANSCRIPT_API_HOST.to_string());
        let transcript_api_base_url = var("TRANSCRIPT_API_BASE_URL")
            .unwrap_or_else(|| format!("https://{transcript_api_host}"));

        // --- Load Cache Settings ---
        // Running without a cache is not supported; refuse to start instead.
        let redis_url = required_var("REDIS_URL")?;
        let cache_ttl_secs = match var("CACHE_TTL_SECONDS") {
            Some(raw) => raw.parse::<u64>().map_err(|e| {
                ConfigError::InvalidValue("CACHE_TTL_SECONDS".to_string(), e.to_string())
            })?,
            None => DEFAULT_CACHE_TTL_SECS,
        };

        // --- Load Prompt Templates ---
        let prompts = PromptTemplates {
            summary: var("SUMMARY_PROMPT").unwrap_or_default(),
            quiz: var("QUIZ_PROMPT").unwrap_or_default(),
        };

        Ok(Self {
            bind_address,
            log_level,
            api_key,
            openai_api_key,
            openai_api_base,
            generation_model,
            rapidapi_key,
            transcript_api_host,
            transcript_api_base_url,
            redis_url,
            cache_ttl_secs,
            prompts,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn load(vars: &[(&str, &str)]) -> Result<Config, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        Config::from_lookup(|name| vars.get(name).cloned())
    }

    const MINIMAL: [(&str, &str); 2] = [("API_KEY", "secret"), ("REDIS_URL", "redis://cache:6379")];

    #[test]
    fn minimal_environment_uses_defaults() {
        let config = load(&MINIMAL).unwrap();

        assert_eq!(config.bind_address, "0.0.0.0:8000".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_level, Level::INFO);
        assert_eq!(config.generation_model, "gpt-4o-mini");
        assert_eq!(config.cache_ttl_secs, 3600);
        assert_eq!(config.transcript_api_host, "youtube-transcript3.p.rapidapi.com");
        assert_eq!(
            config.transcript_api_base_url,
            "https://youtube-transcript3.p.rapidapi.com"
        );
        assert!(config.rapidapi_key.is_none());
        assert!(config.openai_api_key.is_none());
    }

    #[test]
    fn missing_redis_url_refuses_to_start() {
        let err = load(&[("API_KEY", "secret")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(ref v) if v == "REDIS_URL"));

        let err = load(&[("API_KEY", "secret"), ("REDIS_URL", "")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(ref v) if v == "REDIS_URL"));
    }

    #[test]
    fn missing_api_key_refuses_to_start() {
        let err = load(&[("REDIS_URL", "redis://cache:6379")]).unwrap_err();
        assert!(matches!(err, ConfigError::MissingVar(ref v) if v == "API_KEY"));
    }

    #[test]
    fn malformed_values_are_invalid() {
        for (name, value) in [
            ("CACHE_TTL_SECONDS", "abc"),
            ("BIND_ADDRESS", "not-an-address"),
            ("RUST_LOG", "loud"),
        ] {
            let mut vars = MINIMAL.to_vec();
            vars.push((name, value));
            let err = load(&vars).unwrap_err();
            assert!(
                matches!(err, ConfigError::InvalidValue(ref v, _) if v == name),
                "{name}={value}"
            );
        }
    }

    #[test]
    fn overrides_are_applied() {
        let mut vars = MINIMAL.to_vec();
        vars.extend([
            ("CACHE_TTL_SECONDS", "60"),
            ("TRANSCRIPT_API_HOST", "transcripts.internal"),
            ("RAPIDAPI_KEY", ""),
            ("GENERATION_MODEL", "gpt-4.1"),
        ]);
        let config = load(&vars).unwrap();

        assert_eq!(config.cache_ttl_secs, 60);
        assert_eq!(config.transcript_api_base_url, "https://transcripts.internal");
        assert!(config.rapidapi_key.is_none());
        assert_eq!(config.generation_model, "gpt-4.1");
    }
}
