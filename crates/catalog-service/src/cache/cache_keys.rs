//! Cache key generators for consistent key naming.

use catalog_core::ListQuery;
use std::time::Duration;

/// Prefix for all cache keys to namespace them.
const CACHE_PREFIX: &str = "catalog:cache";

/// Lifetime of a cached product listing.
pub const PRODUCT_LIST_TTL: Duration = Duration::from_secs(60);

/// Generate the cache key for one page of the product listing.
///
/// The key depends only on the normalized query, so equivalent requests
/// share an entry.
#[must_use]
pub fn product_list(query: &ListQuery) -> String {
    format!(
        "{}:products:sort={}:limit={}:offset={}",
        CACHE_PREFIX, query.sort, query.limit, query.offset
    )
}
