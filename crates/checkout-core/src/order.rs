//! # Order Types
//!
//! The persisted order row and its lifecycle status.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Order lifecycle status.
///
/// This service only ever writes `Pending`; the remaining states belong to
/// the provider's payment lifecycle and exist so rows touched by other
/// tooling still deserialize cleanly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderStatus {
    /// Order created, payment not yet confirmed
    Pending,
    /// Payment in flight at the provider
    Processing,
    /// Funds authorised, awaiting capture
    Authorised,
    /// Payment captured
    Completed,
    /// Payment failed
    Failed,
    /// Order cancelled
    Cancelled,
}

impl Default for OrderStatus {
    fn default() -> Self {
        OrderStatus::Pending
    }
}

/// Insert payload for the order store.
///
/// The row is only built after the payment provider has confirmed order
/// creation, so `provider_order_id` is always present.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewOrder {
    /// Amount in minor currency units (cents for USD)
    pub amount: i64,

    /// ISO 4217 currency code, passed through unvalidated
    pub currency: String,

    /// Customer email captured at checkout
    pub customer_email: String,

    /// Order id assigned by the payment provider
    pub provider_order_id: String,

    /// Initial lifecycle status
    #[serde(default)]
    pub status: OrderStatus,
}

impl NewOrder {
    /// Build the pending row for a freshly confirmed provider order
    pub fn pending(
        amount: i64,
        currency: impl Into<String>,
        customer_email: impl Into<String>,
        provider_order_id: impl Into<String>,
    ) -> Self {
        Self {
            amount,
            currency: currency.into(),
            customer_email: customer_email.into(),
            provider_order_id: provider_order_id.into(),
            status: OrderStatus::Pending,
        }
    }
}

/// An order row read back from the store, including the generated fields.
///
/// Rows are immutable once written; no operation in this service updates or
/// deletes them.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderRecord {
    /// Store-generated identifier
    pub id: String,

    /// Amount in minor currency units
    pub amount: i64,

    /// ISO 4217 currency code
    pub currency: String,

    /// Customer email
    pub customer_email: String,

    /// Provider-side order id
    pub provider_order_id: String,

    /// Lifecycle status
    pub status: OrderStatus,

    /// Insert timestamp assigned by the store
    pub created_at: DateTime<Utc>,
}
