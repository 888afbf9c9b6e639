//! Request extractors for authentication and role gating.
//!
//! # Flow
//!
//! 1. Client sends `Authorization: Bearer <token>`
//! 2. [`auth::AuthUser`] verifies the token and yields its claims
//! 3. An operation extractor (e.g. [`auth::CanCreateClassroom`]) checks the
//!    caller's role against that operation's allow-list
//! 4. The handler runs only if both pass
//!
//! # Example
//!
//! ```ignore
//! use crate::middleware::auth::{AuthUser, CanCreateSchool};
//!
//! async fn me(auth_user: AuthUser) -> Json<Claims> {
//!     Json(auth_user.0)
//! }
//!
//! async fn create_school(CanCreateSchool(auth_user): CanCreateSchool) -> impl IntoResponse {
//!     // only superadmins get here
//! }
//! ```

pub mod auth;
