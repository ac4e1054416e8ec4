//! Pagination types for list operations.

use crate::SortKey;
use serde::{Deserialize, Serialize};

/// A request for a slice of the product listing.
///
/// Limits are passed through as given; defaulting happens at the HTTP
/// boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ListQuery {
    /// Ordering of the listing.
    pub sort: SortKey,
    /// Maximum number of items returned.
    pub limit: u32,
    /// Number of leading items skipped.
    pub offset: u32,
}

impl ListQuery {
    /// The default number of items per request.
    pub const DEFAULT_LIMIT: u32 = 10;

    /// Creates a new list query.
    #[must_use]
    pub const fn new(sort: SortKey, limit: u32, offset: u32) -> Self {
        Self {
            sort,
            limit,
            offset,
        }
    }

    /// Returns the limit as a database bind value.
    #[must_use]
    pub fn limit_i64(&self) -> i64 {
        i64::from(self.limit)
    }

    /// Returns the offset as a database bind value.
    #[must_use]
    pub fn offset_i64(&self) -> i64 {
        i64::from(self.offset)
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new(SortKey::Latest, Self::DEFAULT_LIMIT, 0)
    }
}
