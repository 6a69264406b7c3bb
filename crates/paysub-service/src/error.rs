//! Subscription error responses.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use paysub_core::CreateSubscriptionResponse;

use crate::processor::ProcessorError;

/// Failure of a `/create-subscription` request.
///
/// Every variant is answered with HTTP 200 and `success: false`; callers
/// inspect the body rather than the status.
#[derive(Debug, thiserror::Error)]
pub enum SubscriptionError {
    /// The request body could not be read as a subscription request.
    #[error("invalid request: {0}")]
    InvalidRequest(String),

    /// No payment processor is configured.
    #[error("payment processor not configured")]
    NotConfigured,

    /// The processor calls did not finish within the request budget.
    ///
    /// Calls that already completed are not rolled back.
    #[error("subscription request timed out after {0}s")]
    Timeout(u64),

    /// A processor call failed.
    #[error(transparent)]
    Processor(#[from] ProcessorError),
}

impl SubscriptionError {
    /// Message placed in the `error` field of the response.
    #[must_use]
    pub fn client_message(&self) -> String {
        match self {
            Self::InvalidRequest(msg) => msg.clone(),
            Self::NotConfigured | Self::Timeout(_) => self.to_string(),
            Self::Processor(err) => err.message(),
        }
    }
}

impl IntoResponse for SubscriptionError {
    fn into_response(self) -> Response {
        match &self {
            Self::InvalidRequest(msg) => {
                tracing::warn!(error = %msg, "Rejected subscription request");
            }
            Self::NotConfigured => {
                tracing::error!("Subscription requested but no processor is configured");
            }
            Self::Timeout(seconds) => {
                tracing::error!(timeout_seconds = seconds, "Subscription request timed out");
            }
            Self::Processor(err) => {
                tracing::error!(error = %err, "Subscription creation failed");
            }
        }

        let body = CreateSubscriptionResponse::failed(self.client_message());
        (StatusCode::OK, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn processor_message_is_relayed_verbatim() {
        let err = SubscriptionError::from(ProcessorError::Api {
            error_type: "card_error".into(),
            message: "card_declined".into(),
            code: None,
        });
        assert_eq!(err.client_message(), "card_declined");
    }

    #[test]
    fn failures_answer_200() {
        for err in [SubscriptionError::NotConfigured, SubscriptionError::Timeout(60)] {
            assert_eq!(err.into_response().status(), StatusCode::OK);
        }
    }

    #[test]
    fn timeout_message_names_the_budget() {
        assert_eq!(
            SubscriptionError::Timeout(60).client_message(),
            "subscription request timed out after 60s"
        );
    }
}
