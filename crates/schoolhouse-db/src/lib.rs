//! # Schoolhouse DB
//!
//! Persistence for the Schoolhouse API.
//!
//! - [`pool`]: PostgreSQL pool initialization and embedded migrations
//! - [`store`]: the [`RecordStore`] and [`UserStore`] contracts
//! - [`postgres`]: [`PgStore`], the sqlx-backed implementation
//! - [`memory`]: [`MemoryStore`] and [`MemoryUserStore`], in-process
//!   implementations used by tests and the `memory` backend
//!
//! # Example
//!
//! ```ignore
//! use schoolhouse_config::DatabaseConfig;
//! use schoolhouse_db::{PgStore, init_db_pool, run_migrations};
//!
//! let pool = init_db_pool(&DatabaseConfig::from_env()).await?;
//! run_migrations(&pool).await?;
//! let store = PgStore::new(pool);
//! ```

pub mod memory;
pub mod pool;
pub mod postgres;
pub mod record;
pub mod store;

#[cfg(test)]
mod contract;

pub use memory::{MemoryStore, MemoryUserStore};
pub use pool::{init_db_pool, run_migrations};
pub use postgres::PgStore;
pub use record::Record;
pub use store::{RecordStore, UserStore};

// Re-export PgPool for convenience
pub use sqlx::PgPool;
