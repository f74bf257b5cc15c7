//! # checkout-core
//!
//! Core types and trait seams for the revolut-checkout flow.
//!
//! This crate provides:
//! - `PaymentGateway` trait for the provider order-creation API
//! - `OrderStore` trait for order persistence
//! - `NewOrder`, `OrderRecord`, and `OrderStatus` for the order data model
//! - `CheckoutError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use checkout_core::{NewOrder, OrderDraft};
//!
//! // Validated request input
//! let draft = OrderDraft {
//!     amount: 50000,
//!     currency: "USD".to_string(),
//!     email: "customer@example.com".to_string(),
//! };
//!
//! // Create the provider order, then persist it
//! let provider_order = gateway.create_order(&draft).await?;
//! let record = store
//!     .insert_order(&NewOrder::pending(
//!         draft.amount,
//!         &draft.currency,
//!         &draft.email,
//!         &provider_order.id,
//!     ))
//!     .await?;
//! ```

pub mod error;
pub mod gateway;
pub mod order;
pub mod store;

// Re-exports for convenience
pub use error::{CheckoutError, CheckoutResult};
pub use gateway::{BoxedPaymentGateway, OrderDraft, PaymentGateway, ProviderOrder};
pub use order::{NewOrder, OrderRecord, OrderStatus};
pub use store::{BoxedOrderStore, OrderStore};
