//! Repository trait definitions.

use async_trait::async_trait;
use catalog_core::{CatalogResult, Interface, ListQuery, Product};

/// Product store.
///
/// Implementations must be safe for concurrent use.
#[async_trait]
pub trait ProductRepository: Interface + Send + Sync {
    /// Persists a new product and returns it with the store-assigned id.
    async fn save(&self, product: &Product) -> CatalogResult<Product>;

    /// Returns one page of products in the requested order.
    ///
    /// `Latest` orders by creation time descending, the price and name keys
    /// order by that column. Ties are broken by id in the same direction.
    async fn list(&self, query: ListQuery) -> CatalogResult<Vec<Product>>;
}
