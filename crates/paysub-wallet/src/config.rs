//! Wallet adapter configuration.

use serde::{Deserialize, Serialize};

use paysub_core::{
    AuthMethod, BaseRequest, CardNetwork, MerchantInfo, PaymentMethodSpec, TransactionInfo,
};

use crate::error::WalletError;
use crate::provider::ClientOptions;

/// Wallet provider environment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Environment {
    /// Sandbox; tokens are not chargeable.
    #[default]
    Test,
    /// Live payments.
    Production,
}

/// Deployment configuration of the wallet adapter.
///
/// Merchant identity and gateway routing must be filled in per deployment;
/// [`WalletConfig::validate`] reports what is still missing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Wallet provider merchant id.
    pub merchant_id: String,

    /// Merchant display name.
    pub merchant_name: String,

    /// Payment gateway receiving the tokens.
    pub gateway: String,

    /// Merchant id at the gateway.
    pub gateway_merchant_id: String,

    /// Accepted card authentication methods.
    pub allowed_auth_methods: Vec<AuthMethod>,

    /// Accepted card networks.
    pub allowed_card_networks: Vec<CardNetwork>,

    /// Provider environment (default: test).
    pub environment: Environment,

    /// Transaction country (default: "US").
    pub country_code: String,

    /// Transaction currency (default: "USD").
    pub currency_code: String,

    /// Base URL of the subscription backend.
    pub backend_url: String,

    /// Page to navigate to after a successful subscription.
    pub success_page: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            merchant_id: String::new(),
            merchant_name: String::new(),
            gateway: String::new(),
            gateway_merchant_id: String::new(),
            allowed_auth_methods: vec![AuthMethod::PanOnly, AuthMethod::Cryptogram3ds],
            allowed_card_networks: CardNetwork::ALL.to_vec(),
            environment: Environment::Test,
            country_code: "US".into(),
            currency_code: "USD".into(),
            backend_url: "http://localhost:4242".into(),
            success_page: "./success.html".into(),
        }
    }
}

impl WalletConfig {
    /// Parse a JSON configuration, filling unspecified fields with defaults.
    pub fn from_json(json: &str) -> Result<Self, WalletError> {
        serde_json::from_str(json).map_err(|e| WalletError::Configuration(e.to_string()))
    }

    /// Merchant identity.
    #[must_use]
    pub fn merchant_info(&self) -> MerchantInfo {
        MerchantInfo {
            merchant_id: self.merchant_id.clone(),
            merchant_name: self.merchant_name.clone(),
        }
    }

    /// Build the frozen request template.
    #[must_use]
    pub fn base_request(&self) -> BaseRequest {
        BaseRequest::new(
            self.merchant_info(),
            PaymentMethodSpec::gateway_card(
                self.allowed_auth_methods.clone(),
                self.allowed_card_networks.clone(),
                self.gateway.clone(),
                self.gateway_merchant_id.clone(),
            ),
        )
    }

    /// Options the wallet client is constructed with.
    #[must_use]
    pub fn client_options(&self) -> ClientOptions {
        ClientOptions {
            environment: self.environment,
            merchant_info: self.merchant_info(),
        }
    }

    /// Final-price transaction in the configured country and currency.
    #[must_use]
    pub fn transaction_info(&self, price: &str, description: &str) -> TransactionInfo {
        TransactionInfo::final_price(&self.country_code, &self.currency_code, price, description)
    }

    /// Check merchant identity and routing.
    pub fn validate(&self) -> Result<(), WalletError> {
        self.base_request()
            .validate()
            .map_err(|e| WalletError::Configuration(e.to_string()))
    }
}
