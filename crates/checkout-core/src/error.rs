//! # Checkout Error Types
//!
//! Typed error handling for the checkout flow.
//! Gateway, store, and handler operations return `Result<T, CheckoutError>`.

use thiserror::Error;

/// Core error type for all checkout operations
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// Request payload rejected (missing email, malformed body)
    #[error("{0}")]
    Validation(String),

    /// Configuration errors (missing credentials, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Payment provider rejected the order creation; `message` carries the
    /// raw provider response so the caller can see what the provider said
    #[error("Failed to create {provider} order: {message}")]
    Gateway { provider: String, message: String },

    /// Network/HTTP error reaching an external collaborator
    #[error("Network error: {0}")]
    Network(String),

    /// Order store insert/read failure
    #[error("Order store error: {0}")]
    Persistence(String),

    /// HTTP method other than POST/OPTIONS on the payment route
    #[error("Method not allowed")]
    MethodNotAllowed,
}

impl CheckoutError {
    /// Returns the HTTP status code for this error at the handler boundary.
    ///
    /// Every failure class surfaces as 400 with a human-readable message;
    /// only the method restriction gets its own status.
    pub fn status_code(&self) -> u16 {
        match self {
            CheckoutError::Validation(_) => 400,
            CheckoutError::Configuration(_) => 400,
            CheckoutError::Gateway { .. } => 400,
            CheckoutError::Network(_) => 400,
            CheckoutError::Persistence(_) => 400,
            CheckoutError::MethodNotAllowed => 405,
        }
    }
}

/// Result type alias for checkout operations
pub type CheckoutResult<T> = Result<T, CheckoutError>;
