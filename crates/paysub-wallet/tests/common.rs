//! Common test utilities for wallet adapter tests.

#![allow(dead_code)] // Some utilities are used by different test files

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use serde_json::json;

use paysub_core::{
    CreateSubscriptionRequest, CreateSubscriptionResponse, IsReadyToPayResponse, PaymentData,
    PaymentRequest,
};
use paysub_wallet::{
    BackendError, ButtonBinding, ClientOptions, Page, Placeholder, ProviderStatus,
    SubscriptionBackend, WalletAdapter, WalletConfig, WalletError, WalletProvider,
};

// ============================================================================
// Wallet provider
// ============================================================================

/// How the stub provider answers.
#[derive(Debug, Clone)]
pub struct ProviderScript {
    pub ready: Result<bool, ProviderStatus>,
    pub payment: Result<PaymentData, ProviderStatus>,
}

impl Default for ProviderScript {
    fn default() -> Self {
        Self {
            ready: Ok(true),
            payment: Ok(payment_data("tok_valid", Some("a@b.com"))),
        }
    }
}

/// Button rendered by the stub provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StubButton {
    pub binding: ButtonBinding,
}

/// Wallet provider answering from a script and recording requests.
pub struct StubProvider {
    pub options: ClientOptions,
    script: ProviderScript,
    readiness_requests: Mutex<Vec<PaymentRequest>>,
    payment_requests: Mutex<Vec<PaymentRequest>>,
}

impl StubProvider {
    pub fn readiness_requests(&self) -> Vec<PaymentRequest> {
        self.readiness_requests.lock().unwrap().clone()
    }

    pub fn payment_requests(&self) -> Vec<PaymentRequest> {
        self.payment_requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl WalletProvider for StubProvider {
    type Button = StubButton;

    async fn is_ready_to_pay(
        &self,
        request: &PaymentRequest,
    ) -> Result<IsReadyToPayResponse, WalletError> {
        self.readiness_requests.lock().unwrap().push(request.clone());
        match &self.script.ready {
            Ok(result) => Ok(IsReadyToPayResponse { result: *result }),
            Err(status) => Err(status.clone().into()),
        }
    }

    async fn load_payment_data(
        &self,
        request: &PaymentRequest,
    ) -> Result<PaymentData, WalletError> {
        self.payment_requests.lock().unwrap().push(request.clone());
        match &self.script.payment {
            Ok(data) => Ok(data.clone()),
            Err(status) => Err(status.clone().into()),
        }
    }

    fn create_button(&self, on_click: ButtonBinding) -> Self::Button {
        StubButton { binding: on_click }
    }
}

/// Payment data as the wallet returns it.
pub fn payment_data(token: &str, email: Option<&str>) -> PaymentData {
    serde_json::from_value(json!({
        "apiVersion": 2,
        "apiVersionMinor": 0,
        "email": email,
        "paymentMethodData": {
            "type": "CARD",
            "tokenizationData": { "type": "PAYMENT_GATEWAY", "token": token }
        }
    }))
    .unwrap()
}

/// Provider rejection.
pub fn rejection(code: &str) -> ProviderStatus {
    serde_json::from_value(json!({ "statusCode": code, "statusMessage": "stub rejection" }))
        .unwrap()
}

// ============================================================================
// Page
// ============================================================================

/// State of one placeholder element.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Slot {
    pub price: Option<String>,
    pub description: Option<String>,
    pub content: Vec<StubButton>,
    pub hidden: bool,
}

/// In-memory page.
#[derive(Default)]
pub struct StubPage {
    slots: Mutex<BTreeMap<String, Slot>>,
    navigations: Mutex<Vec<String>>,
}

impl StubPage {
    pub fn with_placeholders(placeholders: &[(&str, Option<&str>, Option<&str>)]) -> Self {
        let slots = placeholders
            .iter()
            .map(|(id, price, description)| {
                (
                    (*id).to_string(),
                    Slot {
                        price: price.map(String::from),
                        description: description.map(String::from),
                        ..Slot::default()
                    },
                )
            })
            .collect();

        Self {
            slots: Mutex::new(slots),
            navigations: Mutex::default(),
        }
    }

    pub fn slot(&self, id: &str) -> Slot {
        self.slots.lock().unwrap().get(id).cloned().unwrap_or_default()
    }

    pub fn slots(&self) -> Vec<Slot> {
        self.slots.lock().unwrap().values().cloned().collect()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.navigations.lock().unwrap().clone()
    }
}

impl Page for StubPage {
    type Button = StubButton;

    fn placeholders(&self) -> Vec<Placeholder> {
        self.slots
            .lock()
            .unwrap()
            .iter()
            .map(|(id, slot)| Placeholder {
                id: id.clone(),
                price: slot.price.clone(),
                description: slot.description.clone(),
            })
            .collect()
    }

    fn mount_button(&self, placeholder_id: &str, button: Self::Button) {
        if let Some(slot) = self.slots.lock().unwrap().get_mut(placeholder_id) {
            slot.content.clear();
            slot.content.push(button);
        }
    }

    fn hide(&self, placeholder_id: &str) {
        if let Some(slot) = self.slots.lock().unwrap().get_mut(placeholder_id) {
            slot.hidden = true;
        }
    }

    fn navigate(&self, url: &str) {
        self.navigations.lock().unwrap().push(url.to_string());
    }
}

// ============================================================================
// Backend
// ============================================================================

/// Backend answering with a fixed response and recording requests.
pub struct StubBackend {
    response: CreateSubscriptionResponse,
    requests: Mutex<Vec<CreateSubscriptionRequest>>,
}

impl StubBackend {
    pub fn answering(response: CreateSubscriptionResponse) -> Self {
        Self {
            response,
            requests: Mutex::default(),
        }
    }

    pub fn requests(&self) -> Vec<CreateSubscriptionRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl SubscriptionBackend for StubBackend {
    async fn create_subscription(
        &self,
        request: &CreateSubscriptionRequest,
    ) -> Result<CreateSubscriptionResponse, BackendError> {
        self.requests.lock().unwrap().push(request.clone());
        Ok(self.response.clone())
    }
}

// ============================================================================
// Harness
// ============================================================================

pub type TestAdapter = WalletAdapter<StubProvider, Arc<StubPage>, Arc<StubBackend>>;

/// Adapter wired to stubs, with handles to inspect them.
pub struct TestHarness {
    pub adapter: TestAdapter,
    pub page: Arc<StubPage>,
    pub backend: Arc<StubBackend>,
    pub clients_built: Arc<AtomicUsize>,
}

impl TestHarness {
    /// Two priced placeholders, a succeeding wallet and backend.
    pub fn new() -> Self {
        Self::build(
            ProviderScript::default(),
            StubPage::with_placeholders(&[
                ("monthly", Some("10.00"), Some("Widget")),
                ("yearly", Some("100.00"), Some("Widget yearly")),
            ]),
            CreateSubscriptionResponse::succeeded("sub_123"),
        )
    }

    pub fn build(
        script: ProviderScript,
        page: StubPage,
        backend_response: CreateSubscriptionResponse,
    ) -> Self {
        let page = Arc::new(page);
        let backend = Arc::new(StubBackend::answering(backend_response));
        let clients_built = Arc::new(AtomicUsize::new(0));

        let counter = clients_built.clone();
        let factory = move |options: &ClientOptions| {
            counter.fetch_add(1, Ordering::SeqCst);
            StubProvider {
                options: options.clone(),
                script: script.clone(),
                readiness_requests: Mutex::default(),
                payment_requests: Mutex::default(),
            }
        };

        let adapter = WalletAdapter::new(test_config(), factory, page.clone(), backend.clone());

        Self {
            adapter,
            page,
            backend,
            clients_built,
        }
    }
}

impl Default for TestHarness {
    fn default() -> Self {
        Self::new()
    }
}

/// A fully configured wallet.
pub fn test_config() -> WalletConfig {
    WalletConfig {
        merchant_id: "BCR2DN4T26363CST".into(),
        merchant_name: "Demo Store".into(),
        gateway: "stripe".into(),
        gateway_merchant_id: "acct_123".into(),
        success_page: "./success.html".into(),
        ..WalletConfig::default()
    }
}
