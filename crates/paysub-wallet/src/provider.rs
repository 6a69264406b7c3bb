//! Wallet provider seam and the lazily built client handle.

use std::fmt;
use std::sync::{Arc, OnceLock};

use async_trait::async_trait;

use paysub_core::{IsReadyToPayResponse, MerchantInfo, PaymentData, PaymentRequest};

use crate::config::Environment;
use crate::error::WalletError;

/// Options a wallet client is constructed with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientOptions {
    /// Provider environment.
    pub environment: Environment,
    /// Merchant identity.
    pub merchant_info: MerchantInfo,
}

/// What a rendered button buys when clicked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ButtonBinding {
    /// Decimal price, as read from the placeholder.
    pub price: String,
    /// Item description, used as the total label.
    pub description: String,
}

impl ButtonBinding {
    /// Binding for `price` and `description`.
    #[must_use]
    pub fn new(price: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            price: price.into(),
            description: description.into(),
        }
    }
}

/// The wallet provider SDK.
///
/// Implemented over the browser SDK in production and by stubs in tests.
#[async_trait]
pub trait WalletProvider: Send + Sync {
    /// Provider-rendered button element.
    type Button: Send;

    /// Ask whether the payer can pay with `request`'s methods.
    async fn is_ready_to_pay(
        &self,
        request: &PaymentRequest,
    ) -> Result<IsReadyToPayResponse, WalletError>;

    /// Show the payment sheet and return the chosen, tokenized method.
    async fn load_payment_data(&self, request: &PaymentRequest)
        -> Result<PaymentData, WalletError>;

    /// Render a button whose click is routed back with `on_click`.
    fn create_button(&self, on_click: ButtonBinding) -> Self::Button;
}

type ClientFactory<P> = Box<dyn Fn(&ClientOptions) -> P + Send + Sync>;

/// Holds the wallet client, built on first use.
///
/// The first call to [`ClientCell::get`] decides the options; later calls
/// return the same instance whatever options they pass.
pub struct ClientCell<P> {
    factory: ClientFactory<P>,
    client: OnceLock<Arc<P>>,
}

impl<P> ClientCell<P> {
    /// Create an empty cell.
    pub fn new(factory: impl Fn(&ClientOptions) -> P + Send + Sync + 'static) -> Self {
        Self {
            factory: Box::new(factory),
            client: OnceLock::new(),
        }
    }

    /// The client, constructing it with `options` if needed.
    pub fn get(&self, options: &ClientOptions) -> Arc<P> {
        self.client
            .get_or_init(|| {
                tracing::debug!(
                    environment = ?options.environment,
                    merchant_id = %options.merchant_info.merchant_id,
                    "Constructing wallet client"
                );
                Arc::new((self.factory)(options))
            })
            .clone()
    }

    /// Whether the client has been constructed.
    #[must_use]
    pub fn is_initialized(&self) -> bool {
        self.client.get().is_some()
    }
}

impl<P> fmt::Debug for ClientCell<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientCell")
            .field("initialized", &self.is_initialized())
            .finish_non_exhaustive()
    }
}
