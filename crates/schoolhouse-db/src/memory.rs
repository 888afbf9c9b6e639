//! In-process stores.
//!
//! Records live in a `RwLock<HashMap>` and vanish with the process. Used by
//! the integration tests and by `STORE_BACKEND=memory`.

use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use tracing::debug;
use uuid::Uuid;

use schoolhouse_core::AppError;
use schoolhouse_models::{NewUser, User};

use crate::record::Record;
use crate::store::{RecordStore, UserStore, email_taken};

pub struct MemoryStore<R: Record> {
    records: RwLock<HashMap<Uuid, R>>,
}

impl<R: Record> MemoryStore<R> {
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }
}

impl<R: Record> Default for MemoryStore<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<R: Record> RecordStore<R> for MemoryStore<R> {
    async fn create(&self, draft: R::Draft) -> Result<R, AppError> {
        let record = R::from_draft(Uuid::new_v4(), draft, Utc::now());
        self.records
            .write()
            .await
            .insert(record.id(), record.clone());

        debug!(record.kind = R::NAME, record.id = %record.id(), "Record stored in memory");
        Ok(record)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<R>, AppError> {
        Ok(self.records.read().await.get(&id).cloned())
    }

    async fn get_all(&self) -> Result<Vec<R>, AppError> {
        let mut records: Vec<R> = self.records.read().await.values().cloned().collect();
        records.sort_by_key(|r| (r.created_at(), r.id()));
        Ok(records)
    }

    async fn update_by_id(&self, id: Uuid, patch: R::Patch) -> Result<Option<R>, AppError> {
        let mut records = self.records.write().await;
        let Some(record) = records.get_mut(&id) else {
            return Ok(None);
        };

        record.apply(patch, Utc::now());
        Ok(Some(record.clone()))
    }

    async fn delete_by_id(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(self.records.write().await.remove(&id).is_some())
    }
}

#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn create(&self, user: NewUser) -> Result<User, AppError> {
        let mut users = self.users.write().await;
        let email = user.email.to_lowercase();
        if users.iter().any(|u| u.email.to_lowercase() == email) {
            return Err(email_taken());
        }

        let now = Utc::now();
        let user = User {
            id: Uuid::new_v4(),
            name: user.name,
            email: user.email,
            password_hash: user.password_hash,
            role: user.role,
            created_at: now,
            updated_at: now,
        };
        users.push(user.clone());
        Ok(user)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let email = email.to_lowercase();
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.email.to_lowercase() == email)
            .cloned())
    }
}
