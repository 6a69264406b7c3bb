//! Wallet provider responses.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Response of a readiness check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IsReadyToPayResponse {
    /// Whether the payer can pay with the wallet.
    pub result: bool,
}

/// Tokenized card returned by the wallet provider.
///
/// The token is a bearer secret; `Debug` never prints it.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizationData {
    /// Tokenization type, e.g. `PAYMENT_GATEWAY`.
    #[serde(rename = "type", default)]
    pub token_type: String,
    /// Opaque token for the gateway.
    pub token: String,
}

impl fmt::Debug for TokenizationData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TokenizationData")
            .field("token_type", &self.token_type)
            .field("token", &"<redacted>")
            .finish()
    }
}

/// Payment method chosen by the payer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodData {
    /// Method type, e.g. `CARD`.
    #[serde(rename = "type", default)]
    pub method_type: String,
    /// Card description shown to the payer.
    #[serde(default)]
    pub description: Option<String>,
    /// Tokenized credential.
    pub tokenization_data: TokenizationData,
}

/// Response of a payment data request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentData {
    /// API major version.
    #[serde(default)]
    pub api_version: u32,
    /// API minor version.
    #[serde(default)]
    pub api_version_minor: u32,
    /// Chosen payment method.
    pub payment_method_data: PaymentMethodData,
    /// Payer email, present when it was requested.
    #[serde(default)]
    pub email: Option<String>,
}

impl PaymentData {
    /// The tokenized credential, if the provider returned a non-empty one.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        let token = self.payment_method_data.tokenization_data.token.as_str();
        (!token.is_empty()).then_some(token)
    }

    /// The payer email, if present and non-empty.
    #[must_use]
    pub fn email(&self) -> Option<&str> {
        self.email.as_deref().filter(|e| !e.trim().is_empty())
    }
}
