//! Product service implementation.

use crate::cache::{cache_keys, CacheExt, CacheInterface};
use crate::product_service::ProductService;
use async_trait::async_trait;
use catalog_core::{CatalogResult, ListQuery, NewProduct, Product, SortKey};
use catalog_repository::ProductRepository;
use std::sync::Arc;
use tracing::{debug, info};

/// Product service backed by a store and an optional list cache.
///
/// Cache failures of any kind are treated as misses and never reach the
/// caller. Writes do not invalidate cached listings, so a listing may be up
/// to [`cache_keys::PRODUCT_LIST_TTL`] stale after a create.
pub struct ProductServiceImpl<R: ProductRepository + ?Sized> {
    product_repository: Arc<R>,
    cache: Option<Arc<dyn CacheInterface>>,
}

impl<R: ProductRepository + ?Sized> ProductServiceImpl<R> {
    /// Creates a new product service.
    pub fn new(product_repository: Arc<R>, cache: Option<Arc<dyn CacheInterface>>) -> Self {
        Self {
            product_repository,
            cache,
        }
    }

    /// Creates a product service that always reads from the store.
    pub fn without_cache(product_repository: Arc<R>) -> Self {
        Self::new(product_repository, None)
    }

    fn cache(&self) -> Option<&dyn CacheInterface> {
        self.cache.as_deref().filter(|cache| cache.is_enabled())
    }
}

#[async_trait]
impl<R: ProductRepository + ?Sized + 'static> ProductService for ProductServiceImpl<R> {
    async fn create_product(&self, input: NewProduct) -> CatalogResult<Product> {
        debug!("Creating product: {}", input.name);

        let product = Product::new(input);
        let saved = self.product_repository.save(&product).await?;

        info!("Product created: {}", saved.id);
        Ok(saved)
    }

    async fn list_products(
        &self,
        sort: &str,
        limit: u32,
        offset: u32,
    ) -> CatalogResult<Vec<Product>> {
        let query = ListQuery::new(SortKey::parse(sort), limit, offset);
        debug!(
            "Listing products, sort: {}, limit: {}, offset: {}",
            query.sort, query.limit, query.offset
        );

        let cache_key = cache_keys::product_list(&query);

        if let Some(cache) = self.cache() {
            if let Ok(Some(products)) = cache.get::<Vec<Product>>(&cache_key).await {
                return Ok(products);
            }
        }

        let products = self.product_repository.list(query).await?;

        if let Some(cache) = self.cache() {
            let _ = cache
                .set(&cache_key, &products, cache_keys::PRODUCT_LIST_TTL)
                .await;
        }

        Ok(products)
    }
}

impl<R: ProductRepository + ?Sized> std::fmt::Debug for ProductServiceImpl<R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProductServiceImpl")
            .field("cache_enabled", &self.cache().is_some())
            .finish_non_exhaustive()
    }
}
