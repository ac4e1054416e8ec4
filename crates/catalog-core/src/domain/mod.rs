//! Domain layer: the product entity and its value objects.

pub mod product;
pub mod sort_key;

pub use product::*;
pub use sort_key::*;
