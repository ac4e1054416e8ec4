//! # Catalog Service
//!
//! Application services for the product catalog.
//!
//! [`ProductServiceImpl`] creates products through the store and serves
//! listings through an optional read-through cache.

pub mod cache;
pub mod dto;
pub mod r#impl;
pub mod product_service;

pub use cache::*;
pub use dto::*;
pub use product_service::*;
pub use r#impl::ProductServiceImpl;
