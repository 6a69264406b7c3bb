//! Wire types of the `/create-subscription` endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Body of `POST /create-subscription`.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateSubscriptionRequest {
    /// Opaque wallet token.
    pub token: String,
    /// Customer email.
    pub email: String,
}

impl fmt::Debug for CreateSubscriptionRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CreateSubscriptionRequest")
            .field("token", &"<redacted>")
            .field("email", &self.email)
            .finish()
    }
}

/// Response of `POST /create-subscription`.
///
/// Always sent with HTTP 200; callers inspect `success`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSubscriptionResponse {
    /// Whether the subscription was created.
    pub success: bool,
    /// Processor subscription id on success.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subscription_id: Option<String>,
    /// Failure message otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CreateSubscriptionResponse {
    /// A successful response.
    #[must_use]
    pub fn succeeded(subscription_id: impl Into<String>) -> Self {
        Self {
            success: true,
            subscription_id: Some(subscription_id.into()),
            error: None,
        }
    }

    /// A failed response.
    #[must_use]
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            subscription_id: None,
            error: Some(error.into()),
        }
    }
}
