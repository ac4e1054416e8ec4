//! Application wiring.

use crate::startup::print_startup_info;
use axum::Router;
use catalog_config::{AppConfig, DatabaseConfig, RedisConfig, StorageBackend};
use catalog_core::{CatalogError, CatalogResult};
use catalog_repository::{
    create_pool, DatabasePool, DatabasePoolInterface, InMemoryProductRepository,
    PgProductRepository, ProductRepository,
};
use catalog_rest::{create_router, AppState};
use catalog_service::{create_redis_pool, CacheInterface, ProductServiceImpl, RedisCacheService};
use std::future::Future;
use std::sync::Arc;
use tracing::info;

/// A fully wired server, ready to bind.
pub struct Application {
    config: AppConfig,
    router: Router,
    db_pool: Option<Arc<DatabasePool>>,
}

impl Application {
    /// Connects the store and cache and builds the router.
    pub async fn build(config: AppConfig) -> CatalogResult<Self> {
        let (store, db_pool) = build_store(&config.database).await?;
        let cache = build_cache(&config.redis).await?;

        let product_service = ProductServiceImpl::new(store, cache);
        let state = AppState::new(Arc::new(product_service));
        let router = create_router(state, &config.server, &config.security);

        Ok(Self {
            config,
            router,
            db_pool,
        })
    }

    /// Returns a handle to the router.
    #[must_use]
    pub fn router(&self) -> Router {
        self.router.clone()
    }

    /// Serves requests until `shutdown` resolves, then closes the pool.
    pub async fn run_until<F>(self, shutdown: F) -> CatalogResult<()>
    where
        F: Future<Output = ()> + Send + 'static,
    {
        let addr = self.config.server.addr();
        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| CatalogError::Internal(format!("Failed to bind {}: {}", addr, e)))?;

        print_startup_info(&self.config);

        let served = axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
            .map_err(|e| CatalogError::Internal(format!("Server error: {}", e)));

        if let Some(pool) = &self.db_pool {
            pool.close().await;
        }

        info!("Server stopped");
        served
    }
}

/// Builds the configured product store.
async fn build_store(
    config: &DatabaseConfig,
) -> CatalogResult<(Arc<dyn ProductRepository>, Option<Arc<DatabasePool>>)> {
    match config.backend {
        StorageBackend::Postgres => {
            let pool = create_pool(config).await?;
            if config.run_migrations {
                pool.run_migrations().await?;
            }
            let dyn_pool: Arc<dyn DatabasePoolInterface> = pool.clone();
            Ok((Arc::new(PgProductRepository::new(dyn_pool)), Some(pool)))
        }
        StorageBackend::Memory => {
            info!("Using in-memory product store");
            Ok((Arc::new(InMemoryProductRepository::new()), None))
        }
    }
}

/// Builds the list cache when enabled. An unreachable server is fatal.
async fn build_cache(config: &RedisConfig) -> CatalogResult<Option<Arc<dyn CacheInterface>>> {
    if !config.enabled {
        info!("Redis cache disabled");
        return Ok(None);
    }

    let pool = create_redis_pool(config).await?;
    Ok(Some(Arc::new(RedisCacheService::new(Arc::new(pool), config.timeout()))))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{
        body::Body,
        http::{header::AUTHORIZATION, Request, StatusCode},
    };
    use http_body_util::BodyExt;
    use tower::ServiceExt;

    fn memory_config() -> AppConfig {
        let mut config = AppConfig::default();
        config.database.backend = StorageBackend::Memory;
        config.redis.enabled = false;
        config
    }

    // admin:admin123
    const DEFAULT_AUTH: &str = "Basic YWRtaW46YWRtaW4xMjM=";

    #[tokio::test]
    async fn test_memory_backend_serves_requests() {
        let app = Application::build(memory_config()).await.unwrap();
        let router = app.router();

        let create = Request::builder()
            .method("POST")
            .uri("/products")
            .header(AUTHORIZATION, DEFAULT_AUTH)
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"Widget","price":9.99,"description":"","quantity":5}"#))
            .unwrap();
        let response = router.clone().oneshot(create).await.unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);

        let list = Request::builder()
            .uri("/products?sort=latest")
            .header(AUTHORIZATION, DEFAULT_AUTH)
            .body(Body::empty())
            .unwrap();
        let response = router.oneshot(list).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let products: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(products[0]["name"], "Widget");
    }

    #[tokio::test]
    async fn test_unreachable_redis_is_fatal() {
        let mut config = memory_config();
        config.redis.enabled = true;
        config.redis.addr = "127.0.0.1:1".to_string();

        let result = Application::build(config).await;
        assert!(matches!(result, Err(CatalogError::Cache(_))));
    }

    #[tokio::test]
    async fn test_run_until_stops_on_shutdown() {
        let mut config = memory_config();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 0;

        let app = Application::build(config).await.unwrap();
        app.run_until(async {}).await.unwrap();
    }
}
