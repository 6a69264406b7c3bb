//! Service configuration.

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

use crate::stripe::DEFAULT_BASE_URL;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ServiceConfig {
    /// Address to listen on (default: "0.0.0.0:4242").
    pub listen_addr: String,

    /// Stripe secret API key (optional).
    pub stripe_api_key: Option<String>,

    /// Stripe API base URL (default: `<https://api.stripe.com/v1>`).
    pub stripe_api_base: String,

    /// Stripe price ID every subscription is created against (optional).
    pub stripe_price_id: Option<String>,

    /// Reuse existing customers matched by email.
    pub customer_lookup_by_email: bool,

    /// Timeout for each Stripe call in seconds.
    pub processor_timeout_seconds: u64,

    /// CORS allowed origins.
    pub cors_origins: Vec<String>,

    /// Maximum request body size in bytes.
    pub max_body_bytes: usize,

    /// Request timeout in seconds. Raised for `/create-subscription` when
    /// the processor calls need longer, see
    /// [`ServiceConfig::subscription_timeout`].
    pub request_timeout_seconds: u64,

    /// Maximum concurrent subscription requests.
    pub max_concurrent_requests: usize,
}

/// Stripe secrets file structure.
#[derive(Debug, Deserialize)]
struct StripeSecrets {
    api_key: String,
    #[serde(default)]
    price_id: Option<String>,
}

impl ServiceConfig {
    /// Load configuration from environment variables and secrets files.
    #[must_use]
    pub fn from_env() -> Self {
        // Try to load Stripe secrets from file first, then fall back to env vars
        let (stripe_api_key, file_price_id) = load_stripe_secrets();
        let defaults = Self::default();

        Self {
            listen_addr: std::env::var("LISTEN_ADDR").unwrap_or(defaults.listen_addr),
            stripe_api_key,
            stripe_api_base: std::env::var("STRIPE_API_BASE").unwrap_or(defaults.stripe_api_base),
            stripe_price_id: std::env::var("STRIPE_PRICE_ID").ok().or(file_price_id),
            customer_lookup_by_email: std::env::var("CUSTOMER_LOOKUP_BY_EMAIL")
                .ok()
                .is_some_and(|s| parse_flag(&s)),
            processor_timeout_seconds: env_parse("PROCESSOR_TIMEOUT_SECONDS")
                .unwrap_or(defaults.processor_timeout_seconds),
            cors_origins: std::env::var("CORS_ORIGINS")
                .unwrap_or_else(|_| "*".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .collect(),
            max_body_bytes: env_parse("MAX_BODY_BYTES").unwrap_or(defaults.max_body_bytes),
            request_timeout_seconds: env_parse("REQUEST_TIMEOUT_SECONDS")
                .unwrap_or(defaults.request_timeout_seconds),
            max_concurrent_requests: env_parse("MAX_CONCURRENT_REQUESTS")
                .unwrap_or(defaults.max_concurrent_requests),
        }
    }

    /// Most processor calls a single subscription request makes.
    #[must_use]
    pub fn max_processor_calls(&self) -> u64 {
        // payment method, customer, subscription; lookup adds find, attach
        // and set-default but skips the create
        if self.customer_lookup_by_email {
            5
        } else {
            3
        }
    }

    /// Time budget for one `/create-subscription` request.
    ///
    /// Never shorter than every processor call timing out in turn.
    #[must_use]
    pub fn subscription_timeout(&self) -> Duration {
        let processor_budget = self
            .processor_timeout_seconds
            .saturating_mul(self.max_processor_calls());
        Duration::from_secs(self.request_timeout_seconds.max(processor_budget))
    }
}

/// Parse an environment variable, ignoring unset or malformed values.
fn env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    std::env::var(name).ok().and_then(|s| s.trim().parse().ok())
}

/// Interpret a boolean flag value.
fn parse_flag(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}

/// Error reading a secrets file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// No file at the path.
    #[error("secrets file not found: {0}")]
    NotFound(String),

    /// The file exists but could not be read.
    #[error("failed to read secrets file {path}: {source}")]
    Io {
        /// File path.
        path: String,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// The file is not valid JSON of the expected shape.
    #[error("invalid secrets file {path}: {source}")]
    Parse {
        /// File path.
        path: String,
        /// Underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

/// Load Stripe secrets from file or environment.
///
/// Returns the API key and, when the file has one, the price ID.
fn load_stripe_secrets() -> (Option<String>, Option<String>) {
    let secret_paths = [
        ".secrets/stripe.json",
        "paysub/.secrets/stripe.json",
        "../.secrets/stripe.json",
    ];

    for path in &secret_paths {
        match load_secrets_file::<StripeSecrets>(path) {
            Ok(secrets) => {
                tracing::info!(path = %path, "Loaded Stripe secrets from file");
                return (Some(secrets.api_key), secrets.price_id);
            }
            Err(ConfigError::NotFound(_)) => {}
            Err(e) => tracing::warn!(error = %e, "Skipping unreadable Stripe secrets file"),
        }
    }

    // Fall back to environment variables
    tracing::debug!("Stripe secrets file not found, using environment variables");
    (std::env::var("STRIPE_API_KEY").ok(), None)
}

/// Load secrets from a JSON file.
fn load_secrets_file<T: serde::de::DeserializeOwned>(path: &str) -> Result<T, ConfigError> {
    if !Path::new(path).exists() {
        return Err(ConfigError::NotFound(path.to_string()));
    }

    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_string(),
        source,
    })?;

    serde_json::from_str(&contents).map_err(|source| ConfigError::Parse {
        path: path.to_string(),
        source,
    })
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            listen_addr: "0.0.0.0:4242".into(),
            stripe_api_key: None,
            stripe_api_base: DEFAULT_BASE_URL.into(),
            stripe_price_id: None,
            customer_lookup_by_email: false,
            processor_timeout_seconds: 20,
            cors_origins: vec!["*".into()],
            max_body_bytes: 1024 * 1024,
            request_timeout_seconds: 60,
            max_concurrent_requests: 50,
        }
    }
}
