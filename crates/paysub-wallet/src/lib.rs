//! Paysub wallet client adapter.
//!
//! Mediates between a page carrying buy-button placeholders and a wallet
//! provider SDK, then hands the issued token to the subscription backend.
//!
//! # Example
//!
//! ```no_run
//! use paysub_wallet::{BackendClient, ButtonBinding, Page, WalletAdapter, WalletConfig, WalletProvider};
//!
//! # async fn example<P, G>(make_provider: fn(&paysub_wallet::ClientOptions) -> P, page: G)
//! # -> Result<(), paysub_wallet::WalletError>
//! # where P: WalletProvider + 'static, G: Page<Button = P::Button> {
//! let config = WalletConfig::from_json(r#"{
//!     "merchant_id": "BCR2DN4T26363CST",
//!     "merchant_name": "Demo Store",
//!     "gateway": "stripe",
//!     "gateway_merchant_id": "acct_123",
//!     "backend_url": "https://shop.example.com"
//! }"#)?;
//! let backend = BackendClient::new(&config.backend_url)?;
//! let adapter = WalletAdapter::new(config, make_provider, page, backend);
//!
//! // Render buttons if the payer can use the wallet
//! adapter.check_readiness().await?;
//!
//! // Later, when a button is clicked
//! let outcome = adapter
//!     .on_button_clicked(&ButtonBinding::new("10.00", "Widget"))
//!     .await?;
//! println!("Subscribed: {}", outcome.subscription_id);
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

mod adapter;
mod backend;
mod config;
mod error;
mod page;
mod provider;

pub use adapter::{CheckoutOutcome, Readiness, WalletAdapter};
pub use backend::{BackendClient, SubscriptionBackend};
pub use config::{Environment, WalletConfig};
pub use error::{BackendError, ProviderStatus, WalletError};
pub use page::{Page, Placeholder};
pub use provider::{ButtonBinding, ClientCell, ClientOptions, WalletProvider};
