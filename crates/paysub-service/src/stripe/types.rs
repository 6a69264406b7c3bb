//! Stripe API types.

use serde::Deserialize;

/// Stripe `PaymentMethod` object.
#[derive(Debug, Clone, Deserialize)]
pub struct PaymentMethod {
    /// Payment method ID.
    pub id: String,
    /// Method type (e.g., "card").
    #[serde(rename = "type", default)]
    pub method_type: String,
    /// Card details, for card methods.
    #[serde(default)]
    pub card: Option<CardDetails>,
    /// Customer the method is attached to.
    #[serde(default)]
    pub customer: Option<String>,
}

/// Card details of a payment method.
#[derive(Debug, Clone, Deserialize)]
pub struct CardDetails {
    /// Card brand (e.g., "visa").
    #[serde(default)]
    pub brand: Option<String>,
    /// Last four digits.
    #[serde(default)]
    pub last4: Option<String>,
}

/// Stripe customer object.
#[derive(Debug, Clone, Deserialize)]
pub struct Customer {
    /// Stripe customer ID.
    pub id: String,
    /// Customer email.
    #[serde(default)]
    pub email: Option<String>,
    /// Invoice settings.
    #[serde(default)]
    pub invoice_settings: Option<InvoiceSettings>,
    /// Created timestamp (Unix).
    #[serde(default)]
    pub created: i64,
}

/// Customer invoice settings.
#[derive(Debug, Clone, Deserialize)]
pub struct InvoiceSettings {
    /// Default payment method for invoices.
    #[serde(default)]
    pub default_payment_method: Option<String>,
}

/// Stripe subscription object.
#[derive(Debug, Clone, Deserialize)]
pub struct Subscription {
    /// Subscription ID.
    pub id: String,
    /// Customer ID.
    #[serde(default)]
    pub customer: Option<String>,
    /// Status (active, incomplete, trialing, etc.).
    #[serde(default)]
    pub status: String,
    /// Latest invoice, expanded with its payment intent when requested.
    #[serde(default)]
    pub latest_invoice: Option<serde_json::Value>,
}

impl Subscription {
    /// Status of the expanded latest invoice payment intent, if present.
    #[must_use]
    pub fn payment_intent_status(&self) -> Option<&str> {
        self.latest_invoice
            .as_ref()?
            .get("payment_intent")?
            .get("status")?
            .as_str()
    }
}

/// Stripe list response wrapper.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeList<T> {
    /// Data items.
    pub data: Vec<T>,
    /// Whether there are more items.
    #[serde(default)]
    pub has_more: bool,
}

/// Stripe API error response.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorResponse {
    /// Error details.
    pub error: StripeErrorDetail,
}

/// Stripe error detail.
#[derive(Debug, Clone, Deserialize)]
pub struct StripeErrorDetail {
    /// Error type.
    #[serde(rename = "type")]
    pub error_type: String,
    /// Error message.
    #[serde(default)]
    pub message: Option<String>,
    /// Error code.
    #[serde(default)]
    pub code: Option<String>,
    /// Decline code for card errors.
    #[serde(default)]
    pub decline_code: Option<String>,
}
