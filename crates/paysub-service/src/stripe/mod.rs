//! Stripe integration for subscriptions.
//!
//! Stripe handles:
//! - Exchanging wallet tokens for card payment methods
//! - Customer creation and lookup
//! - Subscription creation against a fixed price

pub mod client;
pub mod types;

pub use client::{StripeClient, StripeOptions, DEFAULT_BASE_URL};
pub use types::*;
