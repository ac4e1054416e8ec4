//! Redis-based cache implementation.

use super::CacheInterface;
use async_trait::async_trait;
use catalog_config::RedisConfig;
use catalog_core::{CatalogError, CatalogResult};
use deadpool_redis::{redis, redis::AsyncCommands, Config, Pool, Runtime};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;
use tracing::{debug, info, warn};

/// Build a Redis connection pool without connecting.
///
/// Waiting for, creating and recycling a connection are each bounded by
/// [`RedisConfig::timeout`].
pub fn build_redis_pool(config: &RedisConfig) -> CatalogResult<Pool> {
    let timeout = Some(config.timeout());

    Config::from_url(config.url())
        .builder()
        .map_err(|e| CatalogError::Configuration(format!("Invalid Redis config: {}", e)))?
        .max_size(config.pool_size)
        .wait_timeout(timeout)
        .create_timeout(timeout)
        .recycle_timeout(timeout)
        .runtime(Runtime::Tokio1)
        .build()
        .map_err(|e| CatalogError::Configuration(format!("Failed to create Redis pool: {}", e)))
}

/// Create a Redis connection pool and verify it with `PING`.
pub async fn create_redis_pool(config: &RedisConfig) -> CatalogResult<Pool> {
    info!("Creating Redis connection pool at {}...", config.addr);

    let pool = build_redis_pool(config)?;
    let ping = async {
        let mut conn = pool
            .get()
            .await
            .map_err(|e| CatalogError::Cache(format!("Failed to get Redis connection: {}", e)))?;
        redis::cmd("PING")
            .query_async::<String>(&mut *conn)
            .await
            .map_err(|e| CatalogError::Cache(format!("Redis PING failed: {}", e)))
    };

    tokio::time::timeout(config.timeout(), ping)
        .await
        .map_err(|_| {
            CatalogError::Cache(format!("Redis PING timed out after {:?}", config.timeout()))
        })??;

    info!("Redis connection pool created successfully");
    Ok(pool)
}

/// Redis-based cache service.
pub struct RedisCacheService {
    pool: Arc<Pool>,
    timeout: Duration,
}

impl RedisCacheService {
    /// Create a new Redis cache service. Each operation, including the
    /// connection checkout, gives up after `timeout`.
    #[must_use]
    pub fn new(pool: Arc<Pool>, timeout: Duration) -> Self {
        Self { pool, timeout }
    }

    /// Get a connection from the pool.
    async fn get_conn(&self) -> CatalogResult<deadpool_redis::Connection> {
        self.pool.get().await.map_err(|e| {
            warn!("Failed to get Redis connection: {}", e);
            CatalogError::Cache(format!("Failed to get Redis connection: {}", e))
        })
    }

    /// Run `op` against Redis, failing with a cache error once the timeout
    /// elapses.
    async fn bounded<T, F>(&self, command: &str, key: &str, op: F) -> CatalogResult<T>
    where
        F: Future<Output = CatalogResult<T>>,
    {
        match tokio::time::timeout(self.timeout, op).await {
            Ok(result) => result,
            Err(_) => {
                warn!("Redis {} for key '{}' timed out after {:?}", command, key, self.timeout);
                Err(CatalogError::Cache(format!(
                    "Redis {} for key '{}' timed out after {:?}",
                    command, key, self.timeout
                )))
            }
        }
    }
}

#[async_trait]
impl CacheInterface for RedisCacheService {
    fn is_enabled(&self) -> bool {
        true
    }

    async fn get_raw(&self, key: &str) -> CatalogResult<Option<Vec<u8>>> {
        let value = self
            .bounded("GET", key, async {
                let mut conn = self.get_conn().await?;
                conn.get::<_, Option<Vec<u8>>>(key).await.map_err(|e| {
                    warn!("Failed to get key '{}': {}", key, e);
                    CatalogError::Cache(format!("Failed to get key '{}': {}", key, e))
                })
            })
            .await?;

        match &value {
            Some(_) => debug!("Cache hit for key '{}'", key),
            None => debug!("Cache miss for key '{}'", key),
        }

        Ok(value)
    }

    async fn set_raw(&self, key: &str, value: &[u8], ttl: Duration) -> CatalogResult<()> {
        let ttl_secs = ttl.as_secs().max(1);

        self.bounded("SET", key, async {
            let mut conn = self.get_conn().await?;
            conn.set_ex::<_, _, ()>(key, value, ttl_secs).await.map_err(|e| {
                warn!("Failed to set key '{}': {}", key, e);
                CatalogError::Cache(format!("Failed to set key '{}': {}", key, e))
            })
        })
        .await?;

        debug!("Cached key '{}' with TTL {}s", key, ttl_secs);
        Ok(())
    }
}

impl std::fmt::Debug for RedisCacheService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedisCacheService")
            .field("pool_size", &self.pool.status().size)
            .field("timeout", &self.timeout)
            .finish()
    }
}
