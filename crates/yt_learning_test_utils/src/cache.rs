use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use yt_learning_core::{CacheStore, PortError, PortResult};

/// In-memory cache that records TTLs instead of expiring entries.
#[derive(Clone, Default)]
pub struct MockCache {
    pub entries: Arc<Mutex<HashMap<String, (String, u64)>>>,
    pub unavailable: bool,
}

impl MockCache {
    pub fn unavailable() -> Self {
        Self {
            unavailable: true,
            ..Default::default()
        }
    }

    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<String> = self.entries.lock().unwrap().keys().cloned().collect();
        keys.sort();
        keys
    }

    pub fn insert(&self, key: &str, value: &str) {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), 0));
    }
}

#[async_trait]
impl CacheStore for MockCache {
    async fn get(&self, key: &str) -> PortResult<Option<String>> {
        if self.unavailable {
            return Err(PortError::Upstream("connection refused".to_string()));
        }
        Ok(self
            .entries
            .lock()
            .unwrap()
            .get(key)
            .map(|(value, _)| value.clone()))
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> PortResult<()> {
        if self.unavailable {
            return Err(PortError::Upstream("connection refused".to_string()));
        }
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), (value.to_string(), ttl_secs));
        Ok(())
    }
}
