// src/client/api.rs
use axum::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::error;

use crate::client::register::RegisterForm;
use crate::config::ClientConfig;
use crate::client::search::SearchForm;
use crate::client::ActionResult;
use crate::models::recipe::{Recipe, RecipeList};

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("{message}")]
    Rejected { status: StatusCode, message: String },
}

/// External recipe search service.
#[async_trait]
pub trait RecipeApi: Send + Sync {
    async fn find_recipes(&self, form: &SearchForm) -> Result<Vec<Recipe>, ClientError>;
}

/// Whatever performs a registration on behalf of the register page.
#[async_trait]
pub trait Registrar: Send + Sync {
    async fn register(&self, form: &RegisterForm) -> ActionResult;
}

#[derive(Deserialize)]
struct ErrorBody {
    message: String,
}

#[derive(Deserialize)]
struct ErrorEnvelope {
    error: ErrorBody,
}

async fn rejection(res: reqwest::Response) -> ClientError {
    let status = res.status();
    let message = match res.json::<ErrorEnvelope>().await {
        Ok(envelope) => envelope.error.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("request rejected")
            .to_string(),
    };
    ClientError::Rejected { status, message }
}

#[derive(Clone)]
pub struct HttpRecipeApi {
    client: Client,
    base_url: String,
}

impl HttpRecipeApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpRecipeApi {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.recipe_api_url.clone())
    }
}

#[async_trait]
impl RecipeApi for HttpRecipeApi {
    async fn find_recipes(&self, form: &SearchForm) -> Result<Vec<Recipe>, ClientError> {
        let res = self
            .client
            .get(format!("{}/recipes", self.base_url))
            .query(form)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(rejection(res).await);
        }
        Ok(res.json::<RecipeList>().await?.recipes)
    }
}

/// Registers through the service's `POST /api/auth/register` endpoint.
#[derive(Clone)]
pub struct HttpRegistrar {
    client: Client,
    base_url: String,
}

impl HttpRegistrar {
    pub fn new(base_url: impl Into<String>) -> Self {
        HttpRegistrar {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn from_config(config: &ClientConfig) -> Self {
        Self::new(config.auth_api_url.clone())
    }

    async fn try_register(&self, form: &RegisterForm) -> Result<(), ClientError> {
        let res = self
            .client
            .post(format!("{}/api/auth/register", self.base_url))
            .json(form)
            .send()
            .await?;
        if !res.status().is_success() {
            return Err(rejection(res).await);
        }
        Ok(())
    }
}

#[async_trait]
impl Registrar for HttpRegistrar {
    async fn register(&self, form: &RegisterForm) -> ActionResult {
        match self.try_register(form).await {
            Ok(()) => ActionResult::ok(),
            Err(e) => {
                error!("Registration failed: {}", e);
                ActionResult::failed(vec![e.to_string()])
            }
        }
    }
}
