//! Remote prompt generation client.
//!
//! Thin pass-through to an LLM endpoint: POST `{prompt, model?}`, expect
//! `{result}` or `{error}` back. Callers fall back to local template
//! generation on any failure, so every failure mode surfaces as an
//! `AppError` rather than a panic or retry loop.

use async_trait::async_trait;
use reqwest::Client;
use tokio::time::timeout;
use tracing::info;
use validator::Validate;

use crate::config::RemoteConfig;
use crate::error::AppError;
use crate::models::{GenerateRequest, GenerateResponse};

/// Seam for prompt generation backends; lets the engine swap the remote
/// client for a stub in tests and keeps the fallback logic backend-agnostic.
#[async_trait]
pub trait PromptGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AppError>;
}

/// HTTP client for the remote generation endpoint.
pub struct RemoteGenerator {
    client: Client,
    config: RemoteConfig,
}

impl RemoteGenerator {
    pub fn new(config: RemoteConfig) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }
}

#[async_trait]
impl PromptGenerator for RemoteGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, AppError> {
        let request = GenerateRequest {
            prompt: prompt.to_string(),
            model: self.config.model.clone(),
        };
        request.validate()?;

        info!(endpoint = %self.config.endpoint, "requesting remote prompt generation");

        let request_future = self
            .client
            .post(self.config.endpoint.clone())
            .json(&request)
            .send();

        let response = timeout(self.config.timeout, request_future).await??;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(AppError::Remote(format!(
                "generation request failed with status {}: {}",
                status, body
            )));
        }

        let payload: GenerateResponse = response.json().await?;

        if let Some(error) = payload.error {
            return Err(AppError::Remote(error));
        }

        payload
            .result
            .filter(|r| !r.is_empty())
            .ok_or_else(|| AppError::Remote("endpoint returned an empty result".to_string()))
    }
}
