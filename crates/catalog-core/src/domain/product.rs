//! Product entity.

use crate::ProductId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A catalog product.
///
/// Products are created once and never updated or deleted. The `id` is
/// assigned by the store on insertion and `created_at` by the service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Store-assigned surrogate key.
    pub id: ProductId,
    /// Display name, never blank.
    pub name: String,
    /// Unit price, strictly positive.
    pub price: f64,
    /// Free text, may be empty.
    pub description: String,
    /// Units in stock.
    pub quantity: i32,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}

/// The caller-supplied fields of a product that has not been persisted yet.
#[derive(Debug, Clone, PartialEq)]
pub struct NewProduct {
    pub name: String,
    pub price: f64,
    pub description: String,
    pub quantity: i32,
}

impl Product {
    /// Builds an unsaved product stamped with the current time.
    ///
    /// The returned value carries the default (unassigned) id until the
    /// store persists it.
    #[must_use]
    pub fn new(input: NewProduct) -> Self {
        Self::new_at(input, Utc::now())
    }

    /// Builds an unsaved product with an explicit creation time.
    #[must_use]
    pub fn new_at(input: NewProduct, created_at: DateTime<Utc>) -> Self {
        Self {
            id: ProductId::default(),
            name: input.name,
            price: input.price,
            description: input.description,
            quantity: input.quantity,
            created_at,
        }
    }

    /// Returns a copy of this product carrying the given store id.
    #[must_use]
    pub fn with_id(mut self, id: ProductId) -> Self {
        self.id = id;
        self
    }
}
