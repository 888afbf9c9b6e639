//! Store contracts.
//!
//! Services depend on these traits only; [`crate::PgStore`] and the memory
//! stores are interchangeable behind `Arc<dyn ...>`.

use async_trait::async_trait;
use uuid::Uuid;

use schoolhouse_core::AppError;
use schoolhouse_models::{NewUser, User};

use crate::record::Record;

/// Keyed CRUD over one entity type.
///
/// Absence is reported as `None` / `false`; mapping that to a 404 is the
/// caller's job. Nothing cascades.
#[async_trait]
pub trait RecordStore<R: Record>: Send + Sync {
    /// Inserts a new record, assigning its id and timestamps.
    async fn create(&self, draft: R::Draft) -> Result<R, AppError>;

    async fn get_by_id(&self, id: Uuid) -> Result<Option<R>, AppError>;

    /// Every record, oldest first.
    async fn get_all(&self) -> Result<Vec<R>, AppError>;

    /// Merges the provided fields and refreshes `updated_at`.
    async fn update_by_id(&self, id: Uuid, patch: R::Patch) -> Result<Option<R>, AppError>;

    /// Returns `false` when there was nothing to delete.
    async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError>;
}

#[async_trait]
pub trait UserStore: Send + Sync {
    /// Inserts a user. A duplicate e-mail (case-insensitive) is a bad request.
    async fn create(&self, user: NewUser) -> Result<User, AppError>;

    /// Case-insensitive lookup.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;
}

pub(crate) fn email_taken() -> AppError {
    AppError::bad_request(anyhow::anyhow!("Email already registered"))
}
