//! Paysub subscription backend.
//!
//! This crate provides the HTTP API that turns a wallet payment token into a
//! recurring subscription:
//!
//! 1. exchange the token for a card payment method,
//! 2. create (or, optionally, reuse) a customer with that method as default,
//! 3. subscribe the customer to the configured price.
//!
//! # Failure reporting
//!
//! `POST /create-subscription` always answers HTTP 200. Failures carry
//! `success: false` and the processor's message under `error`.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)] // Processor calls all return Result

pub mod config;
pub mod error;
pub mod handlers;
pub mod processor;
pub mod routes;
pub mod state;
pub mod stripe;
pub mod subscription;

pub use config::{ConfigError, ServiceConfig};
pub use error::SubscriptionError;
pub use processor::{PaymentProcessor, ProcessorError};
pub use routes::create_router;
pub use state::AppState;
pub use stripe::{StripeClient, StripeOptions};
pub use subscription::{Subscriber, SubscriptionPlan};
