//! # checkout-revolut
//!
//! Revolut Merchant API gateway for revolut-checkout-rs.
//!
//! Implements the `PaymentGateway` seam with a single operation: create a
//! provider order with automatic capture and hand back the order id plus the
//! public token the browser widget needs.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use checkout_revolut::RevolutGateway;
//! use checkout_core::{OrderDraft, PaymentGateway};
//!
//! // Reads REVOLUT_API_KEY (and optionally REVOLUT_API_URL)
//! let gateway = RevolutGateway::from_env()?;
//!
//! let order = gateway
//!     .create_order(&OrderDraft {
//!         amount: 50000,
//!         currency: "USD".to_string(),
//!         email: "customer@example.com".to_string(),
//!     })
//!     .await?;
//!
//! // order.public_id initializes the client-side widget
//! ```

pub mod config;
pub mod orders;

// Re-exports
pub use config::{RevolutConfig, SANDBOX_API_URL};
pub use orders::RevolutGateway;
