//! Product list ordering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Ordering applied to a product listing.
///
/// Parsing never fails: an empty or unrecognized key falls back to
/// [`SortKey::Latest`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortKey {
    /// Newest first.
    #[default]
    Latest,
    /// Cheapest first.
    PriceAsc,
    /// Most expensive first.
    PriceDesc,
    /// Name, A to Z.
    NameAsc,
    /// Name, Z to A.
    NameDesc,
}

impl SortKey {
    /// Parses a wire value, defaulting to [`SortKey::Latest`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        match raw {
            "price_asc" => Self::PriceAsc,
            "price_desc" => Self::PriceDesc,
            "name_asc" => Self::NameAsc,
            "name_desc" => Self::NameDesc,
            _ => Self::Latest,
        }
    }

    /// Returns the wire value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Latest => "latest",
            Self::PriceAsc => "price_asc",
            Self::PriceDesc => "price_desc",
            Self::NameAsc => "name_asc",
            Self::NameDesc => "name_desc",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_keys() {
        let keys = [
            SortKey::Latest,
            SortKey::PriceAsc,
            SortKey::PriceDesc,
            SortKey::NameAsc,
            SortKey::NameDesc,
        ];
        for key in keys {
            assert_eq!(SortKey::parse(key.as_str()), key);
        }
    }

    #[test]
    fn test_empty_and_unknown_fall_back_to_latest() {
        assert_eq!(SortKey::parse(""), SortKey::Latest);
        assert_eq!(SortKey::parse("bogus"), SortKey::Latest);
        assert_eq!(SortKey::parse("PRICE_ASC"), SortKey::Latest);
    }

    #[test]
    fn test_display() {
        assert_eq!(SortKey::NameDesc.to_string(), "name_desc");
        assert_eq!(SortKey::default().to_string(), "latest");
    }
}
