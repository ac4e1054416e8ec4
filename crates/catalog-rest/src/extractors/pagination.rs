//! Listing query parameters.

use catalog_core::ListQuery;
use serde::Deserialize;

/// Raw `sort`, `limit` and `offset` query parameters.
///
/// Values are kept as strings so that malformed numbers fall back to their
/// defaults instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListParams {
    #[serde(default)]
    pub sort: Option<String>,
    #[serde(default)]
    pub limit: Option<String>,
    #[serde(default)]
    pub offset: Option<String>,
}

impl ListParams {
    /// The sort key as sent, empty when absent.
    #[must_use]
    pub fn sort(&self) -> &str {
        self.sort.as_deref().unwrap_or("")
    }

    /// Missing, unparsable, zero and negative limits become the default.
    #[must_use]
    pub fn limit(&self) -> u32 {
        self.limit
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|limit| *limit > 0)
            .map_or(ListQuery::DEFAULT_LIMIT, |limit| {
                u32::try_from(limit).unwrap_or(u32::MAX)
            })
    }

    /// Missing, unparsable and negative offsets become zero.
    #[must_use]
    pub fn offset(&self) -> u32 {
        self.offset
            .as_deref()
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .filter(|offset| *offset >= 0)
            .map_or(0, |offset| u32::try_from(offset).unwrap_or(u32::MAX))
    }
}
