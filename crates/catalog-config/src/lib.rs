//! # Catalog Config
//!
//! Configuration management for the product catalog.
//! Supports layered configuration from files, `CATALOG__*` environment
//! variables, and the flat variable names used by existing deployments.

mod app_config;
mod loader;

pub use app_config::*;
pub use loader::*;
