//! # Revolut Configuration
//!
//! Configuration management for the Revolut Merchant API.
//! The secret credential is loaded from environment variables.

use checkout_core::CheckoutError;
use std::env;

/// Default API base URL (sandbox merchant environment)
pub const SANDBOX_API_URL: &str = "https://sandbox-merchant.revolut.com/api/1.0";

/// Revolut Merchant API configuration
#[derive(Debug, Clone)]
pub struct RevolutConfig {
    /// Secret merchant API key
    pub api_key: String,

    /// API base URL (sandbox by default; override for production or tests)
    pub api_base_url: String,
}

impl RevolutConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `REVOLUT_API_KEY`
    ///
    /// Optional:
    /// - `REVOLUT_API_URL` (defaults to the sandbox merchant API)
    pub fn from_env() -> Result<Self, CheckoutError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let api_key = env::var("REVOLUT_API_KEY").map_err(|_| {
            CheckoutError::Configuration(
                "REVOLUT_API_KEY environment variable is not set".to_string(),
            )
        })?;

        if api_key.trim().is_empty() {
            return Err(CheckoutError::Configuration(
                "REVOLUT_API_KEY is empty".to_string(),
            ));
        }

        let api_base_url =
            env::var("REVOLUT_API_URL").unwrap_or_else(|_| SANDBOX_API_URL.to_string());

        Ok(Self {
            api_key,
            api_base_url,
        })
    }

    /// Create config with an explicit key (for testing)
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            api_base_url: SANDBOX_API_URL.to_string(),
        }
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.api_key)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }
}
