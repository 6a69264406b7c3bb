//! Subscription backend client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use paysub_core::{CreateSubscriptionRequest, CreateSubscriptionResponse};

use crate::error::BackendError;

/// Where the adapter sends wallet tokens.
#[async_trait]
pub trait SubscriptionBackend: Send + Sync {
    /// Submit a token and email for a new subscription.
    async fn create_subscription(
        &self,
        request: &CreateSubscriptionRequest,
    ) -> Result<CreateSubscriptionResponse, BackendError>;
}

#[async_trait]
impl<T: SubscriptionBackend + ?Sized> SubscriptionBackend for std::sync::Arc<T> {
    async fn create_subscription(
        &self,
        request: &CreateSubscriptionRequest,
    ) -> Result<CreateSubscriptionResponse, BackendError> {
        (**self).create_subscription(request).await
    }
}

/// HTTP client for `POST /create-subscription`.
#[derive(Debug, Clone)]
pub struct BackendClient {
    client: Client,
    base_url: String,
}

impl BackendClient {
    /// Default request timeout in seconds.
    pub const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

    /// Create a new backend client.
    ///
    /// # Arguments
    ///
    /// * `base_url` - Base URL of the backend (e.g., `"http://localhost:4242"`)
    pub fn new(base_url: impl Into<String>) -> Result<Self, BackendError> {
        Self::with_timeout(base_url, Self::DEFAULT_TIMEOUT_SECONDS)
    }

    /// Create a new backend client with a custom timeout.
    pub fn with_timeout(
        base_url: impl Into<String>,
        timeout_seconds: u64,
    ) -> Result<Self, BackendError> {
        let base_url = base_url.into();
        if base_url.trim().is_empty() {
            return Err(BackendError::Configuration("backend URL is empty".into()));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl SubscriptionBackend for BackendClient {
    async fn create_subscription(
        &self,
        request: &CreateSubscriptionRequest,
    ) -> Result<CreateSubscriptionResponse, BackendError> {
        let url = format!("{}/create-subscription", self.base_url);

        let response = self.client.post(&url).json(request).send().await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(BackendError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}
