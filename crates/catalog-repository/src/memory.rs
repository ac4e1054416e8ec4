//! Process-local product store.

use crate::traits::ProductRepository;
use async_trait::async_trait;
use catalog_core::{CatalogResult, ListQuery, Product, ProductId, SortKey};
use parking_lot::RwLock;
use std::cmp::Ordering;
use std::sync::atomic::{AtomicI64, Ordering as AtomicOrdering};
use tracing::debug;

/// In-memory product repository.
///
/// Ids start at 1 and increase monotonically. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct InMemoryProductRepository {
    products: RwLock<Vec<Product>>,
    next_id: AtomicI64,
}

impl InMemoryProductRepository {
    /// Creates an empty repository.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored products.
    #[must_use]
    pub fn len(&self) -> usize {
        self.products.read().len()
    }

    /// Returns true when nothing has been stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.products.read().is_empty()
    }
}

fn compare(sort: SortKey, a: &Product, b: &Product) -> Ordering {
    match sort {
        SortKey::Latest => b.created_at.cmp(&a.created_at).then(b.id.cmp(&a.id)),
        SortKey::PriceAsc => a.price.total_cmp(&b.price).then(a.id.cmp(&b.id)),
        SortKey::PriceDesc => b.price.total_cmp(&a.price).then(b.id.cmp(&a.id)),
        SortKey::NameAsc => a.name.cmp(&b.name).then(a.id.cmp(&b.id)),
        SortKey::NameDesc => b.name.cmp(&a.name).then(b.id.cmp(&a.id)),
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn save(&self, product: &Product) -> CatalogResult<Product> {
        let id = self.next_id.fetch_add(1, AtomicOrdering::SeqCst) + 1;
        let saved = product.clone().with_id(ProductId::new(id));
        self.products.write().push(saved.clone());
        debug!("Stored product {} in memory", id);
        Ok(saved)
    }

    async fn list(&self, query: ListQuery) -> CatalogResult<Vec<Product>> {
        let mut products = self.products.read().clone();
        products.sort_by(|a, b| compare(query.sort, a, b));

        Ok(products
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit as usize)
            .collect())
    }
}
