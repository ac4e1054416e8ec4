//! Shared fixtures for router tests.

#![allow(dead_code)]

use async_trait::async_trait;
use axum::{
    body::Body,
    http::{HeaderMap, Request, StatusCode},
    Router,
};
use axum_extra::headers::{Authorization, HeaderMapExt};
use catalog_config::{SecurityConfig, ServerConfig};
use catalog_core::{CatalogError, CatalogResult, ListQuery, Product};
use catalog_repository::{InMemoryProductRepository, ProductRepository};
use catalog_rest::{create_router, AppState};
use catalog_service::{CacheInterface, ProductServiceImpl};
use http_body_util::BodyExt;
use serde_json::Value;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;
use tower::ServiceExt;

pub const USER: &str = "admin";
pub const PASS: &str = "admin123";

/// Process-local cache that ignores TTLs.
#[derive(Default)]
pub struct MemoryCache {
    entries: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryCache {
    pub fn len(&self) -> usize {
        self.entries.lock().unwrap().len()
    }
}

#[async_trait]
impl CacheInterface for MemoryCache {
    async fn get_raw(&self, key: &str) -> CatalogResult<Option<Vec<u8>>> {
        Ok(self.entries.lock().unwrap().get(key).cloned())
    }

    async fn set_raw(&self, key: &str, value: &[u8], _ttl: Duration) -> CatalogResult<()> {
        self.entries
            .lock()
            .unwrap()
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn is_enabled(&self) -> bool {
        true
    }
}

/// Store whose every call fails.
pub struct FailingRepository;

#[async_trait]
impl ProductRepository for FailingRepository {
    async fn save(&self, _product: &Product) -> CatalogResult<Product> {
        Err(CatalogError::Database("connection refused".to_string()))
    }

    async fn list(&self, _query: ListQuery) -> CatalogResult<Vec<Product>> {
        Err(CatalogError::Database("connection refused".to_string()))
    }
}

/// Store whose listing never completes.
pub struct StalledRepository;

#[async_trait]
impl ProductRepository for StalledRepository {
    async fn save(&self, product: &Product) -> CatalogResult<Product> {
        Ok(product.clone())
    }

    async fn list(&self, _query: ListQuery) -> CatalogResult<Vec<Product>> {
        std::future::pending().await
    }
}

pub struct TestApp {
    pub router: Router,
    pub repo: Arc<InMemoryProductRepository>,
    pub cache: Option<Arc<MemoryCache>>,
}

impl TestApp {
    /// App backed by the in-memory store, without a cache.
    pub fn new() -> Self {
        Self::build(false)
    }

    /// App backed by the in-memory store and an in-memory cache.
    pub fn with_cache() -> Self {
        Self::build(true)
    }

    fn build(cached: bool) -> Self {
        let repo = Arc::new(InMemoryProductRepository::new());
        let cache = cached.then(|| Arc::new(MemoryCache::default()));
        let dyn_cache = cache.clone().map(|c| c as Arc<dyn CacheInterface>);
        let service = ProductServiceImpl::new(Arc::clone(&repo), dyn_cache);

        Self {
            router: router_for(AppState::new(Arc::new(service))),
            repo,
            cache,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
        send(&self.router, request).await
    }

    pub async fn create(&self, name: &str, price: f64, quantity: i32) -> Value {
        let body = serde_json::json!({
            "name": name,
            "price": price,
            "description": format!("{} description", name),
            "quantity": quantity,
        });
        let (status, _, json) = self
            .send(authed_json("POST", "/products", &body.to_string()))
            .await;
        assert_eq!(status, StatusCode::CREATED);
        json
    }
}

/// App whose store always fails.
pub fn failing_router() -> Router {
    let service = ProductServiceImpl::without_cache(Arc::new(FailingRepository));
    router_for(AppState::new(Arc::new(service)))
}

/// App whose listings stall, with a one second request timeout.
pub fn stalled_router() -> Router {
    let service = ProductServiceImpl::without_cache(Arc::new(StalledRepository));
    let server = ServerConfig {
        request_timeout_secs: 1,
        ..ServerConfig::default()
    };
    router_with(AppState::new(Arc::new(service)), &server)
}

fn router_for(state: AppState) -> Router {
    router_with(state, &ServerConfig::default())
}

fn router_with(state: AppState, server: &ServerConfig) -> Router {
    let security = SecurityConfig {
        basic_auth_user: USER.to_string(),
        basic_auth_pass: PASS.to_string(),
    };
    create_router(state, server, &security)
}

pub async fn send(router: &Router, request: Request<Body>) -> (StatusCode, HeaderMap, Value) {
    let response = router.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, headers, json)
}

pub fn request(method: &str, uri: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn authed(method: &str, uri: &str) -> Request<Body> {
    with_credentials(request(method, uri), USER, PASS)
}

pub fn authed_json(method: &str, uri: &str, body: &str) -> Request<Body> {
    let request = Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    with_credentials(request, USER, PASS)
}

pub fn with_credentials(mut request: Request<Body>, user: &str, pass: &str) -> Request<Body> {
    request
        .headers_mut()
        .typed_insert(Authorization::basic(user, pass));
    request
}
