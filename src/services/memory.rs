// src/services/memory.rs
use axum::async_trait;
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::error::StoreError;
use crate::models::user::{NewUser, Save, User, UserCredentials};
use crate::services::repository::Repository;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredSave {
    pub id: i32,
    pub user_id: i32,
    pub recipe_id: String,
}

#[derive(Debug, Default)]
struct Tables {
    users: Vec<UserCredentials>,
    saves: Vec<StoredSave>,
}

/// In-process repository for tests and local runs without PostgreSQL.
/// Ids are assigned sequentially from 1, as a `SERIAL` column would.
#[derive(Debug, Clone, Default)]
pub struct MemoryRepository {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn user_count(&self) -> usize {
        self.tables.lock().await.users.len()
    }

    pub async fn saves(&self) -> Vec<StoredSave> {
        self.tables.lock().await.saves.clone()
    }
}

#[async_trait]
impl Repository for MemoryRepository {
    async fn find_credentials(
        &self,
        username: &str,
    ) -> Result<Option<UserCredentials>, StoreError> {
        let tables = self.tables.lock().await;
        Ok(tables.users.iter().find(|u| u.username == username).cloned())
    }

    async fn find_user(&self, username: &str) -> Result<Option<User>, StoreError> {
        Ok(self.find_credentials(username).await?.map(UserCredentials::into_user))
    }

    async fn find_user_id(&self, username: &str) -> Result<Option<i32>, StoreError> {
        Ok(self.find_credentials(username).await?.map(|u| u.id))
    }

    async fn insert_user(&self, user: NewUser) -> Result<User, StoreError> {
        let mut tables = self.tables.lock().await;
        if tables.users.iter().any(|u| u.username == user.username) {
            return Err(StoreError::DuplicateUsername);
        }
        let row = UserCredentials {
            id: tables.users.len() as i32 + 1,
            username: user.username,
            password: user.password_hash,
            is_admin: user.is_admin,
        };
        tables.users.push(row.clone());
        Ok(row.into_user())
    }

    async fn insert_save(&self, user_id: i32, recipe_id: &str) -> Result<Save, StoreError> {
        let mut tables = self.tables.lock().await;
        if !tables.users.iter().any(|u| u.id == user_id) {
            return Err(StoreError::NotFound(format!("id {}", user_id)));
        }
        let id = tables.saves.len() as i32 + 1;
        tables.saves.push(StoredSave {
            id,
            user_id,
            recipe_id: recipe_id.to_string(),
        });
        Ok(Save { id })
    }
}
