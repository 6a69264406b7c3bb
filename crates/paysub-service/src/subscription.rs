//! Token-to-subscription flow.

use std::sync::Arc;

use paysub_core::CreateSubscriptionRequest;

use crate::processor::{PaymentProcessor, ProcessorError};
use crate::stripe::{Customer, Subscription};

/// Plan every new subscription is created against.
#[derive(Debug, Clone)]
pub struct SubscriptionPlan {
    /// Processor price ID.
    pub price_id: String,

    /// Reuse an existing customer with the same email instead of creating a
    /// new one.
    ///
    /// Off by default: every request creates a fresh customer, so a retried
    /// request produces duplicate customers and subscriptions.
    pub lookup_customer_by_email: bool,
}

/// Turns wallet tokens into subscriptions.
///
/// The processor calls are strictly sequential and nothing is rolled back
/// when a later call fails.
#[derive(Clone)]
pub struct Subscriber {
    processor: Arc<dyn PaymentProcessor>,
    plan: SubscriptionPlan,
}

impl Subscriber {
    /// Create a subscriber over a processor.
    #[must_use]
    pub fn new(processor: Arc<dyn PaymentProcessor>, plan: SubscriptionPlan) -> Self {
        Self { processor, plan }
    }

    /// The configured plan.
    #[must_use]
    pub fn plan(&self) -> &SubscriptionPlan {
        &self.plan
    }

    /// Exchange the token, set up the customer and subscribe it.
    pub async fn subscribe(
        &self,
        request: &CreateSubscriptionRequest,
    ) -> Result<Subscription, ProcessorError> {
        let payment_method = self
            .processor
            .create_card_payment_method(&request.token)
            .await?;

        tracing::debug!(
            payment_method_id = %payment_method.id,
            "Payment method created from wallet token"
        );

        let customer = self.customer_for(&request.email, &payment_method.id).await?;

        let subscription = self
            .processor
            .create_subscription(&customer.id, &self.plan.price_id)
            .await?;

        tracing::info!(
            customer_id = %customer.id,
            subscription_id = %subscription.id,
            status = %subscription.status,
            payment_intent_status = ?subscription.payment_intent_status(),
            "Subscription created"
        );

        Ok(subscription)
    }

    async fn customer_for(
        &self,
        email: &str,
        payment_method_id: &str,
    ) -> Result<Customer, ProcessorError> {
        if self.plan.lookup_customer_by_email {
            if let Some(existing) = self.processor.find_customer_by_email(email).await? {
                self.processor
                    .attach_payment_method(payment_method_id, &existing.id)
                    .await?;
                let customer = self
                    .processor
                    .set_default_payment_method(&existing.id, payment_method_id)
                    .await?;

                tracing::info!(customer_id = %customer.id, "Reusing existing customer");
                return Ok(customer);
            }
        }

        let customer = self
            .processor
            .create_customer(email, payment_method_id)
            .await?;

        tracing::info!(customer_id = %customer.id, "Customer created");
        Ok(customer)
    }
}
