//! Payment processor seam.
//!
//! The subscription flow only talks to the processor through
//! [`PaymentProcessor`]. [`crate::StripeClient`] is the production
//! implementation.

use async_trait::async_trait;

use crate::stripe::{Customer, PaymentMethod, Subscription};

/// Error type for payment processor operations.
#[derive(Debug, thiserror::Error)]
pub enum ProcessorError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Processor API returned an error.
    #[error("processor API error: {error_type} - {message}")]
    Api {
        /// Error type.
        error_type: String,
        /// Error message.
        message: String,
        /// Error code.
        code: Option<String>,
    },

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl ProcessorError {
    /// Message relayed to callers.
    ///
    /// API errors carry the processor's own message verbatim.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Api { message, .. } => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Outbound calls the subscription flow makes against a payment processor.
#[async_trait]
pub trait PaymentProcessor: Send + Sync {
    /// Exchange a wallet token for a card payment method.
    async fn create_card_payment_method(
        &self,
        token: &str,
    ) -> Result<PaymentMethod, ProcessorError>;

    /// Create a customer with `payment_method_id` as the invoice default.
    async fn create_customer(
        &self,
        email: &str,
        payment_method_id: &str,
    ) -> Result<Customer, ProcessorError>;

    /// Find an existing customer by email.
    async fn find_customer_by_email(&self, email: &str)
        -> Result<Option<Customer>, ProcessorError>;

    /// Attach a payment method to an existing customer.
    async fn attach_payment_method(
        &self,
        payment_method_id: &str,
        customer_id: &str,
    ) -> Result<PaymentMethod, ProcessorError>;

    /// Make `payment_method_id` the invoice default of a customer.
    async fn set_default_payment_method(
        &self,
        customer_id: &str,
        payment_method_id: &str,
    ) -> Result<Customer, ProcessorError>;

    /// Subscribe a customer to a price.
    async fn create_subscription(
        &self,
        customer_id: &str,
        price_id: &str,
    ) -> Result<Subscription, ProcessorError>;
}
