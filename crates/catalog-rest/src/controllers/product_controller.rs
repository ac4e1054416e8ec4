//! Product controller.

use crate::{
    extractors::{ListParams, ValidatedJson},
    responses::{created, ok, ApiResult, AppError},
    state::AppState,
};
use axum::{
    extract::{Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use catalog_core::Product;
use catalog_service::{CreateProductRequest, CreateProductResponse};
use tracing::debug;

/// Creates the product router.
pub fn router() -> Router<AppState> {
    Router::new().route("/products", get(list_products).post(create_product))
}

/// Create a product.
async fn create_product(
    State(state): State<AppState>,
    ValidatedJson(request): ValidatedJson<CreateProductRequest>,
) -> Result<(StatusCode, Json<CreateProductResponse>), AppError> {
    debug!("Create product request: {}", request.name);

    let product = state.product_service.create_product(request.into()).await?;
    Ok(created(CreateProductResponse::from(&product)))
}

/// List products with sorting and pagination.
async fn list_products(
    State(state): State<AppState>,
    Query(params): Query<ListParams>,
) -> ApiResult<Vec<Product>> {
    debug!("List products request: {:?}", params);

    let products = state
        .product_service
        .list_products(params.sort(), params.limit(), params.offset())
        .await?;
    ok(products)
}
