//! Record store configuration.
//!
//! # Environment Variables
//!
//! - `STORE_BACKEND`: `postgres` (default) or `memory`
//! - `DATABASE_URL`: PostgreSQL connection string, required for `postgres`
//! - `DB_MAX_CONNECTIONS`: pool size (default: 5)
//!
//! The `memory` backend keeps every record in process and loses them on
//! restart. It exists for local demos and tests.

use std::env;
use std::fmt;
use std::str::FromStr;

use crate::env_or;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StoreBackend {
    #[default]
    Postgres,
    Memory,
}

impl FromStr for StoreBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "postgres" | "postgresql" | "pg" => Ok(StoreBackend::Postgres),
            "memory" | "in-memory" | "mem" => Ok(StoreBackend::Memory),
            other => Err(format!("Unknown store backend: {}", other)),
        }
    }
}

impl fmt::Display for StoreBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreBackend::Postgres => write!(f, "postgres"),
            StoreBackend::Memory => write!(f, "memory"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub backend: StoreBackend,
    pub url: Option<String>,
    pub max_connections: u32,
}

impl DatabaseConfig {
    pub fn from_env() -> Self {
        Self {
            backend: env_or("STORE_BACKEND", StoreBackend::Postgres),
            url: env::var("DATABASE_URL").ok().filter(|s| !s.is_empty()),
            max_connections: env_or("DB_MAX_CONNECTIONS", 5),
        }
    }
}
