//! # Catalog Server Library
//!
//! Wiring and startup utilities for the product catalog server.

pub mod app;
pub mod startup;
pub mod telemetry;

pub use app::Application;
