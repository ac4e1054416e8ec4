//! Data transfer objects.

mod product_dto;

pub use product_dto::*;
