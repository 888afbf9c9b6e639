//! # Schoolhouse Config
//!
//! Configuration structures loaded from environment variables:
//!
//! - [`jwt`]: token signing secret and expiry
//! - [`cors`]: allowed browser origins
//! - [`server`]: listen address
//! - [`database`]: record store backend selection and Postgres settings
//!
//! # Example
//!
//! ```ignore
//! use schoolhouse_config::{CorsConfig, DatabaseConfig, JwtConfig, ServerConfig};
//!
//! let jwt_config = JwtConfig::from_env();
//! let cors_config = CorsConfig::from_env()?;
//! let server_config = ServerConfig::from_env();
//! let database_config = DatabaseConfig::from_env();
//! ```

pub mod cors;
pub mod database;
pub mod jwt;
pub mod server;

// Re-export commonly used types at crate root
pub use cors::{CorsConfig, WildcardOriginError};
pub use database::{DatabaseConfig, StoreBackend};
pub use jwt::JwtConfig;
pub use server::ServerConfig;

/// Reads `key` and parses it, falling back to `default` when unset or unparsable.
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
