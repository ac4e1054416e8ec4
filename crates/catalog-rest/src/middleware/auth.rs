//! Basic authentication middleware.

use crate::responses::AppError;
use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use axum_extra::headers::{authorization::Basic, Authorization, HeaderMapExt};
use catalog_config::SecurityConfig;
use catalog_core::CatalogError;
use std::sync::Arc;
use tracing::debug;

/// Authentication middleware state.
#[derive(Clone)]
pub struct AuthMiddlewareState {
    credentials: Arc<SecurityConfig>,
}

impl AuthMiddlewareState {
    /// Creates the state from the configured credentials.
    #[must_use]
    pub fn new(security: &SecurityConfig) -> Self {
        Self {
            credentials: Arc::new(security.clone()),
        }
    }

    fn accepts(&self, basic: &Basic) -> bool {
        basic.username() == self.credentials.basic_auth_user
            && basic.password() == self.credentials.basic_auth_pass
    }
}

/// Middleware that requires HTTP Basic credentials matching configuration.
///
/// Returns 401 with a `WWW-Authenticate` challenge otherwise.
pub async fn basic_auth_middleware(
    State(state): State<AuthMiddlewareState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, AppError> {
    match request.headers().typed_get::<Authorization<Basic>>() {
        Some(Authorization(basic)) if state.accepts(&basic) => Ok(next.run(request).await),
        Some(Authorization(basic)) => {
            debug!("Rejected Basic credentials for user: {}", basic.username());
            Err(CatalogError::unauthorized("invalid credentials").into())
        }
        None => {
            debug!("Missing Basic credentials");
            Err(CatalogError::unauthorized("missing credentials").into())
        }
    }
}
