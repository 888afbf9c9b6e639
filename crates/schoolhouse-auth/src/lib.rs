//! # Schoolhouse Auth
//!
//! Authentication and authorization building blocks:
//!
//! - [`claims`]: the JWT payload carried by access tokens
//! - [`jwt`]: token creation and verification
//! - [`credential`]: turning an `Authorization` header into verified claims
//! - [`roles`]: the closed role set and the per-operation allow-list
//!
//! # Example
//!
//! ```ignore
//! use schoolhouse_auth::{Operation, Role, authorize, create_access_token, verify_credential};
//! use schoolhouse_config::JwtConfig;
//!
//! let config = JwtConfig::from_env();
//! let token = create_access_token(user_id, "admin@example.com", Role::SchoolAdmin, &config)?;
//!
//! let header = format!("Bearer {}", token);
//! let claims = verify_credential(Some(&header), &config)?;
//! authorize(claims.role, Operation::CreateClassroom)?;
//! ```

pub mod claims;
pub mod credential;
pub mod jwt;
pub mod roles;

// Re-export commonly used types at crate root
pub use claims::Claims;
pub use credential::{bearer_token, verify_credential};
pub use jwt::{create_access_token, verify_token};
pub use roles::{Operation, Role, UnknownRole, authorize};
