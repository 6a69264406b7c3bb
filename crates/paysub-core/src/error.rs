//! Error types for paysub descriptors.

/// Problems found when checking a base request descriptor.
///
/// The wallet provider accepts descriptors with placeholder routing values
/// and only fails later, at tokenization time, so these are reported up
/// front instead.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DescriptorError {
    /// Merchant id is empty.
    #[error("merchant id is not configured")]
    MissingMerchantId,

    /// Gateway name is empty.
    #[error("payment gateway is not configured")]
    MissingGateway,

    /// Gateway merchant id is empty.
    #[error("gateway merchant id is not configured")]
    MissingGatewayMerchantId,

    /// A routing value still holds a sample placeholder.
    #[error("{field} still holds placeholder value {value:?}")]
    Placeholder {
        /// The descriptor field.
        field: &'static str,
        /// The placeholder value found.
        value: String,
    },

    /// No card networks are accepted.
    #[error("no card networks are allowed")]
    NoCardNetworks,

    /// No card authentication methods are accepted.
    #[error("no card authentication methods are allowed")]
    NoAuthMethods,
}
