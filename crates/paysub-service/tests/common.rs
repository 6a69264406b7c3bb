//! Common test utilities for paysub integration tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use axum::Router;
use axum_test::TestServer;

use paysub_service::stripe::{Customer, PaymentMethod, Subscription};
use paysub_service::{create_router, AppState, PaymentProcessor, ProcessorError, ServiceConfig};

/// A processor call, as recorded by [`StubProcessor`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Call {
    CreatePaymentMethod { token: String },
    CreateCustomer { email: String, payment_method_id: String },
    FindCustomer { email: String },
    AttachPaymentMethod { payment_method_id: String, customer_id: String },
    SetDefaultPaymentMethod { customer_id: String, payment_method_id: String },
    CreateSubscription { customer_id: String, price_id: String },
}

/// Which processor step should fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailAt {
    Nothing,
    PaymentMethod,
    Customer,
    Subscription,
}

/// In-memory processor that records every call.
pub struct StubProcessor {
    calls: Mutex<Vec<Call>>,
    fail_at: FailAt,
    failure_message: String,
    existing_customer: Option<String>,
    delay: Duration,
}

impl StubProcessor {
    /// A processor where every call succeeds.
    pub fn succeeding() -> Self {
        Self::failing(FailAt::Nothing, "")
    }

    /// A processor failing at `step` with `message`.
    pub fn failing(step: FailAt, message: &str) -> Self {
        Self {
            calls: Mutex::new(Vec::new()),
            fail_at: step,
            failure_message: message.to_string(),
            existing_customer: None,
            delay: Duration::ZERO,
        }
    }

    /// Pretend a customer already exists for every email.
    pub fn with_existing_customer(mut self, customer_id: &str) -> Self {
        self.existing_customer = Some(customer_id.to_string());
        self
    }

    /// Stall every payment method exchange for `delay`.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Calls received so far.
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn fail_if(&self, step: FailAt) -> Result<(), ProcessorError> {
        if self.fail_at == step {
            return Err(ProcessorError::Api {
                error_type: "card_error".into(),
                message: self.failure_message.clone(),
                code: Some(self.failure_message.clone()),
            });
        }
        Ok(())
    }
}

fn payment_method(id: &str, customer: Option<&str>) -> PaymentMethod {
    serde_json::from_value(serde_json::json!({
        "id": id,
        "type": "card",
        "customer": customer,
    }))
    .unwrap()
}

fn customer(id: &str, email: Option<&str>) -> Customer {
    serde_json::from_value(serde_json::json!({ "id": id, "email": email })).unwrap()
}

#[async_trait]
impl PaymentProcessor for StubProcessor {
    async fn create_card_payment_method(
        &self,
        token: &str,
    ) -> Result<PaymentMethod, ProcessorError> {
        self.record(Call::CreatePaymentMethod {
            token: token.to_string(),
        });
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        self.fail_if(FailAt::PaymentMethod)?;
        Ok(payment_method("pm_123", None))
    }

    async fn create_customer(
        &self,
        email: &str,
        payment_method_id: &str,
    ) -> Result<Customer, ProcessorError> {
        self.record(Call::CreateCustomer {
            email: email.to_string(),
            payment_method_id: payment_method_id.to_string(),
        });
        self.fail_if(FailAt::Customer)?;
        Ok(customer("cus_123", Some(email)))
    }

    async fn find_customer_by_email(
        &self,
        email: &str,
    ) -> Result<Option<Customer>, ProcessorError> {
        self.record(Call::FindCustomer {
            email: email.to_string(),
        });
        Ok(self
            .existing_customer
            .as_deref()
            .map(|id| customer(id, Some(email))))
    }

    async fn attach_payment_method(
        &self,
        payment_method_id: &str,
        customer_id: &str,
    ) -> Result<PaymentMethod, ProcessorError> {
        self.record(Call::AttachPaymentMethod {
            payment_method_id: payment_method_id.to_string(),
            customer_id: customer_id.to_string(),
        });
        Ok(payment_method(payment_method_id, Some(customer_id)))
    }

    async fn set_default_payment_method(
        &self,
        customer_id: &str,
        payment_method_id: &str,
    ) -> Result<Customer, ProcessorError> {
        self.record(Call::SetDefaultPaymentMethod {
            customer_id: customer_id.to_string(),
            payment_method_id: payment_method_id.to_string(),
        });
        Ok(customer(customer_id, None))
    }

    async fn create_subscription(
        &self,
        customer_id: &str,
        price_id: &str,
    ) -> Result<Subscription, ProcessorError> {
        self.record(Call::CreateSubscription {
            customer_id: customer_id.to_string(),
            price_id: price_id.to_string(),
        });
        self.fail_if(FailAt::Subscription)?;
        Ok(serde_json::from_value(serde_json::json!({
            "id": "sub_123",
            "customer": customer_id,
            "status": "active",
        }))
        .unwrap())
    }
}

/// Configuration used by the test harness.
pub fn test_config() -> ServiceConfig {
    ServiceConfig {
        listen_addr: "127.0.0.1:0".into(),
        stripe_api_key: None,
        stripe_price_id: Some("price_monthly".into()),
        ..ServiceConfig::default()
    }
}

/// Test harness containing everything needed for integration tests.
pub struct TestHarness {
    /// The test server for making HTTP requests.
    pub server: TestServer,
    /// The stub processor behind the server.
    pub processor: Arc<StubProcessor>,
}

impl TestHarness {
    /// Create a harness over a processor where every call succeeds.
    pub fn new() -> Self {
        Self::with_processor(StubProcessor::succeeding(), test_config())
    }

    /// Create a harness over a specific processor and configuration.
    pub fn with_processor(processor: StubProcessor, config: ServiceConfig) -> Self {
        let processor = Arc::new(processor);
        let state = AppState::with_processor(config, processor.clone());
        let router: Router = create_router(state);

        let server = TestServer::new(router).expect("Failed to create test server");

        Self { server, processor }
    }

    /// Create a harness with no processor configured.
    pub fn unconfigured() -> Self {
        let state = AppState::new(test_config());
        let server = TestServer::new(create_router(state)).expect("Failed to create test server");

        Self {
            server,
            processor: Arc::new(StubProcessor::succeeding()),
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}
