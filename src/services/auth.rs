// src/services/auth.rs
use bcrypt::{hash, verify};
use std::sync::Arc;
use tokio::sync::OnceCell;
use tokio::task::spawn_blocking;
use tracing::{debug, info, warn};

use crate::error::StoreError;
use crate::models::user::{NewUser, Save, User};
use crate::services::repository::Repository;

const DUMMY_PASSWORD: &str = "recipe-box-dummy-password";

async fn hash_password(password: String, cost: u32) -> Result<String, StoreError> {
    Ok(spawn_blocking(move || hash(password, cost)).await??)
}

async fn verify_password(password: String, hashed: String) -> Result<bool, StoreError> {
    Ok(spawn_blocking(move || verify(password, &hashed).unwrap_or(false)).await?)
}

/// Credential and user store.
///
/// Owns the repository handle and the bcrypt work factor. Cheap to clone;
/// every clone shares the same repository.
#[derive(Clone)]
pub struct UserStore {
    repo: Arc<dyn Repository>,
    work_factor: u32,
    // compared against when the username is unknown, so both paths cost one bcrypt verify
    dummy_hash: Arc<OnceCell<String>>,
}

impl UserStore {
    pub fn new(repo: Arc<dyn Repository>, work_factor: u32) -> Self {
        UserStore {
            repo,
            work_factor,
            dummy_hash: Arc::new(OnceCell::new()),
        }
    }

    async fn dummy_hash(&self) -> Result<&String, StoreError> {
        self.dummy_hash
            .get_or_try_init(|| hash_password(DUMMY_PASSWORD.to_string(), self.work_factor))
            .await
    }

    /// Checks `password` against the stored hash for `username`.
    ///
    /// An unknown username and a wrong password both yield
    /// [`StoreError::InvalidCredentials`], after the same amount of hashing work.
    pub async fn authenticate(&self, username: &str, password: &str) -> Result<User, StoreError> {
        debug!(username, "authenticating");
        let Some(creds) = self.repo.find_credentials(username).await? else {
            let dummy = self.dummy_hash().await?.clone();
            verify_password(password.to_string(), dummy).await?;
            warn!(username, "authentication failed: unknown user");
            return Err(StoreError::InvalidCredentials);
        };

        if verify_password(password.to_string(), creds.password.clone()).await? {
            Ok(creds.into_user())
        } else {
            warn!(username, "authentication failed: password mismatch");
            Err(StoreError::InvalidCredentials)
        }
    }

    /// Creates a user. The lookup beforehand only gives an early answer;
    /// the repository's unique constraint decides races.
    pub async fn register(
        &self,
        username: &str,
        password: &str,
        is_admin: bool,
    ) -> Result<User, StoreError> {
        debug!(username, "registering");
        if self.repo.find_user_id(username).await?.is_some() {
            warn!(username, "registration rejected: username taken");
            return Err(StoreError::DuplicateUsername);
        }

        let password_hash = hash_password(password.to_string(), self.work_factor).await?;
        let user = self
            .repo
            .insert_user(NewUser {
                username: username.to_string(),
                password_hash,
                is_admin,
            })
            .await?;

        info!(user_id = user.id, username, "registered user");
        Ok(user)
    }

    pub async fn get(&self, username: &str) -> Result<User, StoreError> {
        debug!(username, "fetching user");
        self.repo
            .find_user(username)
            .await?
            .ok_or_else(|| StoreError::NotFound(username.to_string()))
    }

    pub async fn save_recipe(&self, username: &str, recipe_id: &str) -> Result<Save, StoreError> {
        debug!(username, recipe_id, "saving recipe");
        let user_id = self
            .repo
            .find_user_id(username)
            .await?
            .ok_or_else(|| StoreError::NotFound(username.to_string()))?;

        let save = self.repo.insert_save(user_id, recipe_id).await?;
        info!(save_id = save.id, user_id, recipe_id, "saved recipe");
        Ok(save)
    }
}
