//! PostgreSQL product repository implementation.

use crate::{traits::ProductRepository, DatabasePoolInterface};
use async_trait::async_trait;
use catalog_core::{CatalogResult, ListQuery, Product, ProductId, SortKey};
use chrono::{DateTime, Utc};
use sqlx::FromRow;
use std::sync::Arc;
use tracing::debug;

/// PostgreSQL product repository implementation.
#[derive(Clone)]
pub struct PgProductRepository {
    pool: Arc<dyn DatabasePoolInterface>,
}

impl PgProductRepository {
    /// Creates a new PostgreSQL product repository.
    #[must_use]
    pub fn new(pool: Arc<dyn DatabasePoolInterface>) -> Self {
        Self { pool }
    }
}

/// Database row representation of a product.
#[derive(Debug, FromRow)]
struct ProductRow {
    product_id: i64,
    product_name: String,
    product_price: f64,
    product_description: String,
    product_quantity: i32,
    created_at: DateTime<Utc>,
}

impl From<ProductRow> for Product {
    fn from(row: ProductRow) -> Self {
        Product {
            id: ProductId::new(row.product_id),
            name: row.product_name,
            price: row.product_price,
            description: row.product_description,
            quantity: row.product_quantity,
            created_at: row.created_at,
        }
    }
}

/// Maps a sort key to its ORDER BY clause.
fn order_clause(sort: SortKey) -> &'static str {
    match sort {
        SortKey::Latest => "created_at DESC, product_id DESC",
        SortKey::PriceAsc => "product_price ASC, product_id ASC",
        SortKey::PriceDesc => "product_price DESC, product_id DESC",
        SortKey::NameAsc => "product_name ASC, product_id ASC",
        SortKey::NameDesc => "product_name DESC, product_id DESC",
    }
}

#[async_trait]
impl ProductRepository for PgProductRepository {
    async fn save(&self, product: &Product) -> CatalogResult<Product> {
        debug!("Saving product: {}", product.name);

        let id: i64 = sqlx::query_scalar(
            r#"
            INSERT INTO products (product_name, product_price, product_description,
                                  product_quantity, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING product_id
            "#,
        )
        .bind(&product.name)
        .bind(product.price)
        .bind(&product.description)
        .bind(product.quantity)
        .bind(product.created_at)
        .fetch_one(self.pool.inner())
        .await?;

        Ok(product.clone().with_id(ProductId::new(id)))
    }

    async fn list(&self, query: ListQuery) -> CatalogResult<Vec<Product>> {
        debug!(
            "Listing products, sort: {}, limit: {}, offset: {}",
            query.sort, query.limit, query.offset
        );

        let sql = format!(
            r#"
            SELECT product_id, product_name, product_price, product_description,
                   product_quantity, created_at
            FROM products
            ORDER BY {}
            LIMIT $1 OFFSET $2
            "#,
            order_clause(query.sort)
        );

        let rows = sqlx::query_as::<_, ProductRow>(&sql)
            .bind(query.limit_i64())
            .bind(query.offset_i64())
            .fetch_all(self.pool.inner())
            .await?;

        Ok(rows.into_iter().map(Product::from).collect())
    }
}
