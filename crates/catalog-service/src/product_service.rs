//! Product service trait definition.

use async_trait::async_trait;
use catalog_core::{CatalogResult, Interface, NewProduct, Product};

/// Product service trait.
#[async_trait]
pub trait ProductService: Interface + Send + Sync {
    /// Stamps the creation time and persists a product.
    async fn create_product(&self, input: NewProduct) -> CatalogResult<Product>;

    /// Lists products, consulting the cache before the store.
    ///
    /// `sort` is normalized with [`catalog_core::SortKey::parse`]; `limit` and
    /// `offset` are used as given.
    async fn list_products(
        &self,
        sort: &str,
        limit: u32,
        offset: u32,
    ) -> CatalogResult<Vec<Product>>;
}
