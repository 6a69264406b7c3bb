//! Subscription handlers.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use paysub_core::{CreateSubscriptionRequest, CreateSubscriptionResponse};

use crate::error::SubscriptionError;
use crate::state::AppState;

/// Create a customer and a subscription from a wallet token.
///
/// No authentication: holding a valid wallet token is the only proof of
/// payer consent. Retried requests create duplicate records unless customer
/// lookup by email is enabled.
///
/// Runs under [`ServiceConfig::subscription_timeout`](crate::ServiceConfig::subscription_timeout);
/// running out answers with a failure body like any other error.
pub async fn create_subscription(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateSubscriptionRequest>, JsonRejection>,
) -> Result<Json<CreateSubscriptionResponse>, SubscriptionError> {
    let Json(request) = body.map_err(|e| SubscriptionError::InvalidRequest(e.body_text()))?;

    let subscriber = state
        .subscriber
        .as_ref()
        .ok_or(SubscriptionError::NotConfigured)?;

    let budget = state.config.subscription_timeout();
    let subscription = tokio::time::timeout(budget, subscriber.subscribe(&request))
        .await
        .map_err(|_| SubscriptionError::Timeout(budget.as_secs()))??;

    Ok(Json(CreateSubscriptionResponse::succeeded(subscription.id)))
}
