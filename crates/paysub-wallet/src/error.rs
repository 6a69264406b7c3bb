//! Wallet adapter error types.

use serde::Deserialize;

/// Status code the wallet provider uses when the payer closes the sheet.
const CANCELED: &str = "CANCELED";

/// Errors that can occur in the wallet adapter.
#[derive(Debug, thiserror::Error)]
pub enum WalletError {
    /// The wallet provider rejected the call.
    #[error("wallet provider error: {status_code} - {message}")]
    Provider {
        /// Provider status code (e.g., "CANCELED", "DEVELOPER_ERROR").
        status_code: String,
        /// Provider status message.
        message: String,
    },

    /// Payment data carried no token.
    #[error("payment data did not include a token")]
    MissingToken,

    /// Payment data carried no payer email.
    #[error("payment data did not include the payer email")]
    MissingEmail,

    /// The subscription backend could not be reached.
    #[error("backend error: {0}")]
    Backend(#[from] BackendError),

    /// The backend answered `success: false`.
    #[error("subscription rejected: {0}")]
    Rejected(String),

    /// The backend answered `success: true` without a subscription id.
    #[error("backend reported success without a subscription id")]
    MissingSubscriptionId,

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl WalletError {
    /// Whether the payer dismissed the payment sheet.
    #[must_use]
    pub fn is_canceled(&self) -> bool {
        matches!(self, Self::Provider { status_code, .. } if status_code == CANCELED)
    }
}

/// Rejection payload of the wallet provider SDK.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderStatus {
    /// Status code.
    pub status_code: String,
    /// Human-readable status message.
    #[serde(default)]
    pub status_message: String,
}

impl From<ProviderStatus> for WalletError {
    fn from(status: ProviderStatus) -> Self {
        Self::Provider {
            status_code: status.status_code,
            message: status.status_message,
        }
    }
}

/// Errors talking to the subscription backend.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Backend answered with a non-success status.
    #[error("unexpected status {status}: {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body.
        body: String,
    },

    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),
}
