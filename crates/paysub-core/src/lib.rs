//! Core types for paysub.
//!
//! This crate holds the types shared by the browser-side wallet adapter and
//! the subscription backend:
//!
//! - **Request descriptors**: `BaseRequest`, `PaymentRequest`, `TransactionInfo`
//! - **Wallet responses**: `IsReadyToPayResponse`, `PaymentData`
//! - **Backend wire types**: `CreateSubscriptionRequest`, `CreateSubscriptionResponse`
//!
//! # Descriptor cloning
//!
//! A `BaseRequest` is built once from deployment configuration and is never
//! mutated afterwards. Every readiness check or transaction works on an owned
//! `PaymentRequest` cloned out of it.

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod payment_data;
pub mod request;
pub mod subscription;

pub use error::DescriptorError;
pub use payment_data::{IsReadyToPayResponse, PaymentData, PaymentMethodData, TokenizationData};
pub use request::{
    AuthMethod, BaseRequest, CardNetwork, CardParameters, GatewayParameters, MerchantInfo,
    PaymentMethodSpec, PaymentMethodType, PaymentRequest, TokenizationSpecification,
    TokenizationType, TotalPriceStatus, TransactionInfo, API_VERSION, API_VERSION_MINOR,
};
pub use subscription::{CreateSubscriptionRequest, CreateSubscriptionResponse};
