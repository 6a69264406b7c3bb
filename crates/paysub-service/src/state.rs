//! Application state.

use std::sync::Arc;

use crate::config::ServiceConfig;
use crate::processor::PaymentProcessor;
use crate::stripe::{StripeClient, StripeOptions};
use crate::subscription::{Subscriber, SubscriptionPlan};

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration.
    pub config: ServiceConfig,

    /// Subscription flow (optional, needs a processor key and a price ID).
    pub subscriber: Option<Arc<Subscriber>>,
}

impl AppState {
    /// Create a new application state backed by Stripe.
    #[must_use]
    pub fn new(config: ServiceConfig) -> Self {
        // Create Stripe client if configured
        let processor = config.stripe_api_key.as_ref().and_then(|key| {
            let options = StripeOptions {
                base_url: config.stripe_api_base.clone(),
                timeout_seconds: config.processor_timeout_seconds,
            };

            match StripeClient::with_options(key, options) {
                Ok(client) => {
                    tracing::info!(
                        api_base = %config.stripe_api_base,
                        "Stripe integration enabled"
                    );
                    Some(Arc::new(client) as Arc<dyn PaymentProcessor>)
                }
                Err(e) => {
                    tracing::error!(error = %e, "Failed to create Stripe client");
                    None
                }
            }
        });

        if processor.is_none() {
            tracing::warn!("Stripe not configured - subscriptions will not be available");
        }

        Self::build(config, processor)
    }

    /// Create a state over an explicit processor.
    #[must_use]
    pub fn with_processor(config: ServiceConfig, processor: Arc<dyn PaymentProcessor>) -> Self {
        Self::build(config, Some(processor))
    }

    fn build(config: ServiceConfig, processor: Option<Arc<dyn PaymentProcessor>>) -> Self {
        let subscriber = match (processor, config.stripe_price_id.clone()) {
            (Some(processor), Some(price_id)) => {
                if config.customer_lookup_by_email {
                    tracing::info!("Existing customers will be reused by email");
                } else {
                    tracing::warn!(
                        "Customer lookup disabled - every request creates a new customer"
                    );
                }

                Some(Arc::new(Subscriber::new(
                    processor,
                    SubscriptionPlan {
                        price_id,
                        lookup_customer_by_email: config.customer_lookup_by_email,
                    },
                )))
            }
            (Some(_), None) => {
                tracing::warn!("Stripe price ID not configured - subscriptions will not be available");
                None
            }
            (None, _) => None,
        };

        Self { config, subscriber }
    }

    /// Check if subscriptions can be created.
    #[must_use]
    pub fn has_subscriber(&self) -> bool {
        self.subscriber.is_some()
    }
}
