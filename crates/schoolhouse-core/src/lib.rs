//! # Schoolhouse Core
//!
//! Core types shared by every Schoolhouse crate:
//!
//! - [`errors`]: the application error type and its HTTP mapping
//! - [`password`]: bcrypt password hashing and verification
//!
//! # Example
//!
//! ```ignore
//! use schoolhouse_core::{AppError, hash_password};
//!
//! let error = AppError::not_found(anyhow::anyhow!("School not found"));
//! let hash = hash_password("secure_password")?;
//! ```

pub mod errors;
pub mod password;

// Re-export commonly used types at crate root
pub use errors::{AppError, ErrorKind};
pub use password::{hash_password, verify_password};
