//! Stripe API client implementation.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::types::{Customer, PaymentMethod, StripeErrorResponse, StripeList, Subscription};
use crate::processor::{PaymentProcessor, ProcessorError};

/// Stripe API base URL.
pub const DEFAULT_BASE_URL: &str = "https://api.stripe.com/v1";

/// Expansion requested on new subscriptions.
const SUBSCRIPTION_EXPAND: &str = "latest_invoice.payment_intent";

/// Stripe API client.
#[derive(Debug, Clone)]
pub struct StripeClient {
    client: Client,
    base_url: String,
    api_key: String,
}

/// Client options for customization.
#[derive(Debug, Clone)]
pub struct StripeOptions {
    /// API base URL (default: [`DEFAULT_BASE_URL`]).
    pub base_url: String,
    /// Per-call timeout in seconds (default: 20).
    pub timeout_seconds: u64,
}

impl Default for StripeOptions {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_seconds: 20,
        }
    }
}

impl StripeClient {
    /// Create a new Stripe client against the live API.
    ///
    /// # Arguments
    ///
    /// * `api_key` - Stripe secret API key (`sk_test_...` or `sk_live_...`)
    pub fn new(api_key: impl Into<String>) -> Result<Self, ProcessorError> {
        Self::with_options(api_key, StripeOptions::default())
    }

    /// Create a new Stripe client with custom options.
    pub fn with_options(
        api_key: impl Into<String>,
        options: StripeOptions,
    ) -> Result<Self, ProcessorError> {
        let api_key = api_key.into();
        if api_key.trim().is_empty() {
            return Err(ProcessorError::Configuration(
                "Stripe API key is empty".into(),
            ));
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(options.timeout_seconds))
            .build()?;

        Ok(Self {
            client,
            base_url: options.base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// POST a form to `path` and decode the response.
    async fn post_form<T: serde::de::DeserializeOwned>(
        &self,
        path: &str,
        params: &[(&str, &str)],
    ) -> Result<T, ProcessorError> {
        let response = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .basic_auth(&self.api_key, Option::<&str>::None)
            .form(params)
            .send()
            .await?;

        self.handle_response(response).await
    }

    /// Handle API response and convert errors.
    async fn handle_response<T: serde::de::DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> Result<T, ProcessorError> {
        let status = response.status();

        if status.is_success() {
            return Ok(response.json().await?);
        }

        // Try to parse error response
        let error_body: Result<StripeErrorResponse, _> = response.json().await;

        match error_body {
            Ok(stripe_error) => {
                let detail = stripe_error.error;
                let message = detail
                    .message
                    .or_else(|| detail.decline_code.clone())
                    .or_else(|| detail.code.clone())
                    .unwrap_or_else(|| format!("HTTP {status}"));

                Err(ProcessorError::Api {
                    error_type: detail.error_type,
                    message,
                    code: detail.code,
                })
            }
            Err(_) => Err(ProcessorError::Api {
                error_type: "unknown".to_string(),
                message: format!("HTTP {status}"),
                code: None,
            }),
        }
    }
}

#[async_trait]
impl PaymentProcessor for StripeClient {
    async fn create_card_payment_method(
        &self,
        token: &str,
    ) -> Result<PaymentMethod, ProcessorError> {
        self.post_form("/payment_methods", &[("type", "card"), ("card[token]", token)])
            .await
    }

    async fn create_customer(
        &self,
        email: &str,
        payment_method_id: &str,
    ) -> Result<Customer, ProcessorError> {
        self.post_form(
            "/customers",
            &[
                ("email", email),
                ("payment_method", payment_method_id),
                ("invoice_settings[default_payment_method]", payment_method_id),
            ],
        )
        .await
    }

    async fn find_customer_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Customer>, ProcessorError> {
        let response = self
            .client
            .get(format!("{}/customers", self.base_url))
            .basic_auth(&self.api_key, Option::<&str>::None)
            .query(&[("email", email), ("limit", "1")])
            .send()
            .await?;

        let list: StripeList<Customer> = self.handle_response(response).await?;
        Ok(list.data.into_iter().next())
    }

    async fn attach_payment_method(
        &self,
        payment_method_id: &str,
        customer_id: &str,
    ) -> Result<PaymentMethod, ProcessorError> {
        self.post_form(
            &format!("/payment_methods/{payment_method_id}/attach"),
            &[("customer", customer_id)],
        )
        .await
    }

    async fn set_default_payment_method(
        &self,
        customer_id: &str,
        payment_method_id: &str,
    ) -> Result<Customer, ProcessorError> {
        self.post_form(
            &format!("/customers/{customer_id}"),
            &[("invoice_settings[default_payment_method]", payment_method_id)],
        )
        .await
    }

    async fn create_subscription(
        &self,
        customer_id: &str,
        price_id: &str,
    ) -> Result<Subscription, ProcessorError> {
        self.post_form(
            "/subscriptions",
            &[
                ("customer", customer_id),
                ("items[0][price]", price_id),
                ("expand[]", SUBSCRIPTION_EXPAND),
            ],
        )
        .await
    }
}
