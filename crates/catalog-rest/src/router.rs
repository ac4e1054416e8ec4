//! Main application router.

use crate::{
    controllers::product_controller,
    middleware::{basic_auth_middleware, logging_middleware, AuthMiddlewareState},
    state::AppState,
};
use axum::{
    http::{HeaderValue, StatusCode},
    middleware, Router,
};
use catalog_config::{SecurityConfig, ServerConfig};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};
use tracing::{info, warn};

/// Creates the main application router.
///
/// Every route sits behind Basic auth.
pub fn create_router(
    state: AppState,
    server_config: &ServerConfig,
    security_config: &SecurityConfig,
) -> Router {
    let auth_state = AuthMiddlewareState::new(security_config);

    let router = product_controller::router()
        .route_layer(middleware::from_fn_with_state(auth_state, basic_auth_middleware))
        .with_state(state)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            server_config.request_timeout(),
        ))
        .layer(create_cors_layer(server_config))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::from_fn(logging_middleware));

    info!("Router created with product endpoints");
    router
}

/// Creates a CORS layer based on server configuration.
fn create_cors_layer(server_config: &ServerConfig) -> CorsLayer {
    if !server_config.cors_enabled {
        return CorsLayer::new();
    }

    if server_config.cors_origins.iter().any(|origin| origin == "*") {
        return CorsLayer::permissive();
    }

    let origins: Vec<HeaderValue> = server_config
        .cors_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin: {}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(Any)
        .allow_headers(Any)
}
