//! Wallet provider request descriptors.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::error::DescriptorError;

/// Wallet API major version.
pub const API_VERSION: u32 = 2;

/// Wallet API minor version.
pub const API_VERSION_MINOR: u32 = 0;

/// Gateway values shipped in sample integrations.
const PLACEHOLDER_GATEWAYS: &[&str] = &["example"];
const PLACEHOLDER_GATEWAY_MERCHANT_IDS: &[&str] = &["exampleGatewayMerchantId"];

/// Payment method type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethodType {
    /// Credit or debit card.
    Card,
}

/// Card authentication method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AuthMethod {
    /// Card stored on file with the wallet account.
    #[serde(rename = "PAN_ONLY")]
    PanOnly,
    /// Device token with a 3-D Secure cryptogram.
    #[serde(rename = "CRYPTOGRAM_3DS")]
    Cryptogram3ds,
}

/// Card network accepted by the merchant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardNetwork {
    /// American Express.
    Amex,
    /// Discover.
    Discover,
    /// Interac.
    Interac,
    /// JCB.
    Jcb,
    /// Mastercard.
    Mastercard,
    /// Visa.
    Visa,
}

impl CardNetwork {
    /// Every network the wallet API knows about.
    pub const ALL: [Self; 6] = [
        Self::Amex,
        Self::Discover,
        Self::Interac,
        Self::Jcb,
        Self::Mastercard,
        Self::Visa,
    ];
}

/// Tokenization routing type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TokenizationType {
    /// Token is issued for a payment gateway.
    PaymentGateway,
}

/// Price status of a transaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TotalPriceStatus {
    /// Price will not change.
    Final,
    /// Price may still change.
    Estimated,
    /// Price is not known yet.
    NotCurrentlyKnown,
}

/// Merchant identity shown to the payer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MerchantInfo {
    /// Wallet provider merchant id.
    pub merchant_id: String,
    /// Display name.
    pub merchant_name: String,
}

/// Card parameters of an accepted payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardParameters {
    /// Accepted authentication methods.
    pub allowed_auth_methods: Vec<AuthMethod>,
    /// Accepted card networks.
    pub allowed_card_networks: Vec<CardNetwork>,
}

/// Gateway routing for issued tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GatewayParameters {
    /// Gateway name.
    pub gateway: String,
    /// Merchant id at the gateway.
    pub gateway_merchant_id: String,
}

/// How the wallet provider tokenizes the selected card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenizationSpecification {
    /// Routing type.
    #[serde(rename = "type")]
    pub spec_type: TokenizationType,
    /// Gateway routing.
    pub parameters: GatewayParameters,
}

/// An accepted payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentMethodSpec {
    /// Method type.
    #[serde(rename = "type")]
    pub method_type: PaymentMethodType,
    /// Card parameters.
    pub parameters: CardParameters,
    /// Tokenization routing.
    pub tokenization_specification: TokenizationSpecification,
}

impl PaymentMethodSpec {
    /// Card method routed through a payment gateway.
    #[must_use]
    pub fn gateway_card(
        auth_methods: Vec<AuthMethod>,
        networks: Vec<CardNetwork>,
        gateway: impl Into<String>,
        gateway_merchant_id: impl Into<String>,
    ) -> Self {
        Self {
            method_type: PaymentMethodType::Card,
            parameters: CardParameters {
                allowed_auth_methods: auth_methods,
                allowed_card_networks: networks,
            },
            tokenization_specification: TokenizationSpecification {
                spec_type: TokenizationType::PaymentGateway,
                parameters: GatewayParameters {
                    gateway: gateway.into(),
                    gateway_merchant_id: gateway_merchant_id.into(),
                },
            },
        }
    }
}

/// Transaction details attached to a payment data request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransactionInfo {
    /// ISO 3166-1 alpha-2 country code.
    pub country_code: String,
    /// ISO 4217 currency code.
    pub currency_code: String,
    /// Price status.
    pub total_price_status: TotalPriceStatus,
    /// Label shown next to the total.
    pub total_price_label: String,
    /// Decimal price as a string, e.g. `"10.00"`.
    pub total_price: String,
}

impl TransactionInfo {
    /// A final-price transaction.
    #[must_use]
    pub fn final_price(
        country_code: impl Into<String>,
        currency_code: impl Into<String>,
        total_price: impl Into<String>,
        label: impl Into<String>,
    ) -> Self {
        Self {
            country_code: country_code.into(),
            currency_code: currency_code.into(),
            total_price_status: TotalPriceStatus::Final,
            total_price_label: label.into(),
            total_price: total_price.into(),
        }
    }
}

/// A request sent to the wallet provider.
///
/// Used as-is for readiness checks and, with `transaction_info` set, for
/// payment data requests.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// API major version.
    pub api_version: u32,
    /// API minor version.
    pub api_version_minor: u32,
    /// Accepted payment methods.
    pub allowed_payment_methods: Vec<PaymentMethodSpec>,
    /// Merchant identity.
    pub merchant_info: MerchantInfo,
    /// Ask the payer's email along with the card.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email_required: Option<bool>,
    /// Transaction details, set per transaction.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub transaction_info: Option<TransactionInfo>,
}

impl PaymentRequest {
    /// Set whether the payer's email is requested.
    #[must_use]
    pub fn with_email_required(mut self, required: bool) -> Self {
        self.email_required = Some(required);
        self
    }
}

/// The frozen request template.
///
/// Built once from configuration. The template is only reachable through a
/// shared reference, so each use receives an owned clone.
#[derive(Debug, Clone)]
pub struct BaseRequest {
    template: Arc<PaymentRequest>,
}

impl BaseRequest {
    /// Build the template for the given merchant and accepted method.
    #[must_use]
    pub fn new(merchant_info: MerchantInfo, method: PaymentMethodSpec) -> Self {
        Self {
            template: Arc::new(PaymentRequest {
                api_version: API_VERSION,
                api_version_minor: API_VERSION_MINOR,
                allowed_payment_methods: vec![method],
                merchant_info,
                email_required: None,
                transaction_info: None,
            }),
        }
    }

    /// The template itself.
    #[must_use]
    pub fn template(&self) -> &PaymentRequest {
        &self.template
    }

    /// Merchant identity of the template.
    #[must_use]
    pub fn merchant_info(&self) -> &MerchantInfo {
        &self.template.merchant_info
    }

    /// An owned copy of the template for a readiness check.
    #[must_use]
    pub fn readiness_request(&self) -> PaymentRequest {
        PaymentRequest::clone(&self.template)
    }

    /// An owned copy of the template carrying `info`.
    #[must_use]
    pub fn transaction_request(&self, info: TransactionInfo) -> PaymentRequest {
        PaymentRequest {
            transaction_info: Some(info),
            ..PaymentRequest::clone(&self.template)
        }
    }

    /// Check that merchant identity and gateway routing are filled in.
    ///
    /// # Errors
    ///
    /// Returns the first missing or placeholder value found.
    pub fn validate(&self) -> Result<(), DescriptorError> {
        if self.template.merchant_info.merchant_id.trim().is_empty() {
            return Err(DescriptorError::MissingMerchantId);
        }

        for method in &self.template.allowed_payment_methods {
            let routing = &method.tokenization_specification.parameters;

            if routing.gateway.trim().is_empty() {
                return Err(DescriptorError::MissingGateway);
            }
            if PLACEHOLDER_GATEWAYS.contains(&routing.gateway.as_str()) {
                return Err(DescriptorError::Placeholder {
                    field: "gateway",
                    value: routing.gateway.clone(),
                });
            }
            if routing.gateway_merchant_id.trim().is_empty() {
                return Err(DescriptorError::MissingGatewayMerchantId);
            }
            if PLACEHOLDER_GATEWAY_MERCHANT_IDS.contains(&routing.gateway_merchant_id.as_str()) {
                return Err(DescriptorError::Placeholder {
                    field: "gatewayMerchantId",
                    value: routing.gateway_merchant_id.clone(),
                });
            }
            if method.parameters.allowed_card_networks.is_empty() {
                return Err(DescriptorError::NoCardNetworks);
            }
            if method.parameters.allowed_auth_methods.is_empty() {
                return Err(DescriptorError::NoAuthMethods);
            }
        }

        Ok(())
    }
}
