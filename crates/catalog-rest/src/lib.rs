//! # Catalog REST
//!
//! REST API layer using Axum for the product catalog.
//! Every route is a product endpoint behind HTTP Basic auth.

pub mod controllers;
pub mod extractors;
pub mod middleware;
pub mod responses;
pub mod router;
pub mod state;

pub use router::*;
pub use state::*;
