//! services/api/src/adapters/cache.rs
//!
//! This module contains the Redis adapter implementing the `CacheStore` port.

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use tracing::debug;
use yt_learning_core::ports::{CacheStore, PortError, PortResult};

/// A cache adapter backed by a single multiplexed Redis connection.
#[derive(Clone)]
pub struct RedisCacheAdapter {
    connection: MultiplexedConnection,
}

impl RedisCacheAdapter {
    /// Opens the connection eagerly so a bad `REDIS_URL` fails at startup.
    pub async fn connect(redis_url: &str) -> Result<Self, redis::RedisError> {
        let client = redis::Client::open(redis_url)?;
        let connection = client.get_multiplexed_async_connection().await?;
        Ok(Self { connection })
    }
}

#[async_trait]
impl CacheStore for RedisCacheAdapter {
    async fn get(&self, key: &str) -> PortResult<Option<String>> {
        let mut conn = self.connection.clone();
        let value: Option<String> = redis::cmd("GET")
            .arg(key)
            .query_async(&mut conn)
            .await
            .map_err(|e| PortError::Upstream(format!("Redis GET failed: {}", e)))?;

        debug!(cache_key = %key, hit = value.is_some(), "Cache lookup");
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str, ttl_secs: u64) -> PortResult<()> {
        let mut conn = self.connection.clone();

        // SET key value EX ttl
        let _: () = redis::cmd("SET")
            .arg(key)
            .arg(value)
            .arg("EX")
            .arg(ttl_secs)
            .query_async(&mut conn)
            .await
            .map_err(|e| PortError::Upstream(format!("Redis SET failed: {}", e)))?;

        debug!(cache_key = %key, ttl_secs, "Cache entry stored");
        Ok(())
    }
}
