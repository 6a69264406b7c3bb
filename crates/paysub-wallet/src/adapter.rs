//! Wallet adapter flows: readiness, button rendering and checkout.

use std::fmt;
use std::sync::Arc;

use paysub_core::{BaseRequest, CreateSubscriptionRequest, PaymentRequest};

use crate::backend::SubscriptionBackend;
use crate::config::WalletConfig;
use crate::error::WalletError;
use crate::page::Page;
use crate::provider::{ButtonBinding, ClientCell, ClientOptions, WalletProvider};

/// Result of a readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Readiness {
    /// The payer can use the wallet; buttons were rendered.
    Ready {
        /// Number of buttons rendered.
        rendered: usize,
    },
    /// The payer cannot use the wallet; placeholders were hidden.
    NotReady {
        /// Number of placeholders hidden.
        hidden: usize,
    },
}

/// Result of a completed checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutOutcome {
    /// Subscription created by the backend.
    pub subscription_id: String,
    /// Page the browser was sent to.
    pub redirected_to: String,
}

/// Mediates between the page, the wallet provider and the backend.
///
/// Owns the request template and the lazily built provider client. Flows
/// started from different buttons run independently.
pub struct WalletAdapter<P, G, B> {
    config: WalletConfig,
    base: BaseRequest,
    client: ClientCell<P>,
    page: G,
    backend: B,
}

impl<P, G, B> WalletAdapter<P, G, B>
where
    P: WalletProvider,
    G: Page<Button = P::Button>,
    B: SubscriptionBackend,
{
    /// Create an adapter. The provider client is built by `factory` on first
    /// use.
    pub fn new(
        config: WalletConfig,
        factory: impl Fn(&ClientOptions) -> P + Send + Sync + 'static,
        page: G,
        backend: B,
    ) -> Self {
        let base = config.base_request();

        if let Err(e) = base.validate() {
            tracing::warn!(
                error = %e,
                "Wallet request is incomplete - tokenization will fail until it is configured"
            );
        }

        Self {
            config,
            base,
            client: ClientCell::new(factory),
            page,
            backend,
        }
    }

    /// The frozen request template.
    #[must_use]
    pub fn base_request(&self) -> &BaseRequest {
        &self.base
    }

    /// The adapter configuration.
    #[must_use]
    pub fn config(&self) -> &WalletConfig {
        &self.config
    }

    /// The wallet client, built on first call.
    pub fn client(&self) -> Arc<P> {
        self.client.get(&self.config.client_options())
    }

    /// The payment data request for a button.
    ///
    /// The payer email is always requested; the backend creates the
    /// customer from it.
    #[must_use]
    pub fn transaction_request(&self, binding: &ButtonBinding) -> PaymentRequest {
        let info = self
            .config
            .transaction_info(&binding.price, &binding.description);

        self.base
            .transaction_request(info)
            .with_email_required(true)
    }

    /// Ask the provider whether the payer can pay, then render or hide the
    /// buttons.
    ///
    /// A provider rejection is logged and returned; placeholders are left
    /// as they were.
    pub async fn check_readiness(&self) -> Result<Readiness, WalletError> {
        let request = self.base.readiness_request();

        match self.client().is_ready_to_pay(&request).await {
            Ok(response) if response.result => {
                let rendered = self.render_buttons();
                tracing::info!(rendered, "Wallet is ready to pay");
                Ok(Readiness::Ready { rendered })
            }
            Ok(_) => {
                let placeholders = self.page.placeholders();
                for placeholder in &placeholders {
                    self.page.hide(&placeholder.id);
                }
                tracing::info!(hidden = placeholders.len(), "Wallet is not ready to pay");
                Ok(Readiness::NotReady {
                    hidden: placeholders.len(),
                })
            }
            Err(e) => {
                tracing::error!(error = %e, "Error checking wallet readiness");
                Err(e)
            }
        }
    }

    /// Render a provider button into every placeholder.
    ///
    /// Each placeholder is cleared before mounting, so calling this again
    /// refreshes rather than duplicates. Placeholders without a price are
    /// hidden.
    pub fn render_buttons(&self) -> usize {
        let client = self.client();
        let mut rendered = 0;

        for placeholder in self.page.placeholders() {
            let Some(price) = placeholder.price else {
                tracing::warn!(
                    placeholder = %placeholder.id,
                    "Wallet button placeholder has no price"
                );
                self.page.hide(&placeholder.id);
                continue;
            };

            let binding = ButtonBinding {
                price,
                description: placeholder.description.unwrap_or_default(),
            };
            let button = client.create_button(binding);
            self.page.mount_button(&placeholder.id, button);
            rendered += 1;
        }

        rendered
    }

    /// Request payment data for a button, submit the token to the backend
    /// and navigate to the success page.
    ///
    /// Failures are logged and returned; the browser stays on the page.
    pub async fn on_button_clicked(
        &self,
        binding: &ButtonBinding,
    ) -> Result<CheckoutOutcome, WalletError> {
        let result = self.checkout(binding).await;

        match &result {
            Ok(outcome) => {
                tracing::info!(
                    subscription_id = %outcome.subscription_id,
                    "Checkout completed"
                );
            }
            Err(e) if e.is_canceled() => {
                tracing::info!("Payment sheet closed by the payer");
            }
            Err(e) => {
                tracing::error!(error = %e, "Checkout failed");
            }
        }

        result
    }

    async fn checkout(&self, binding: &ButtonBinding) -> Result<CheckoutOutcome, WalletError> {
        let request = self.transaction_request(binding);

        tracing::debug!(
            price = %binding.price,
            label = %binding.description,
            "Requesting payment data"
        );

        let data = self.client().load_payment_data(&request).await?;

        let token = data.token().ok_or(WalletError::MissingToken)?;
        let email = data.email().ok_or(WalletError::MissingEmail)?;

        let response = self
            .backend
            .create_subscription(&CreateSubscriptionRequest {
                token: token.to_string(),
                email: email.to_string(),
            })
            .await?;

        if !response.success {
            return Err(WalletError::Rejected(
                response
                    .error
                    .unwrap_or_else(|| "subscription was not created".into()),
            ));
        }

        let subscription_id = response
            .subscription_id
            .filter(|id| !id.is_empty())
            .ok_or(WalletError::MissingSubscriptionId)?;

        self.page.navigate(&self.config.success_page);

        Ok(CheckoutOutcome {
            subscription_id,
            redirected_to: self.config.success_page.clone(),
        })
    }
}

impl<P, G, B> fmt::Debug for WalletAdapter<P, G, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WalletAdapter")
            .field("config", &self.config)
            .field("client", &self.client)
            .finish_non_exhaustive()
    }
}
