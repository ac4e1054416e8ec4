//! # Catalog Repository
//!
//! Product store implementations.
//!
//! ```text
//! Service
//!   ↓  Arc<dyn ProductRepository>
//! PgProductRepository            (PostgreSQL / SQLx)
//!   ↓  Arc<dyn DatabasePoolInterface>
//! PostgreSQL
//! ```
//!
//! [`InMemoryProductRepository`] implements the same contract without a
//! database and backs the `memory` storage backend and tests.

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod traits;

pub use memory::InMemoryProductRepository;
pub use pool::*;
pub use postgres::*;
pub use traits::*;
