//! # Payment Gateway Seam
//!
//! Trait boundary for the payment provider's order-creation API.
//! Implementations hold the provider credential and issue the outbound call;
//! the handler only sees validated input and the confirmed provider order.

use crate::error::CheckoutResult;
use async_trait::async_trait;
use std::sync::Arc;

/// Validated input for a provider order
#[derive(Debug, Clone)]
pub struct OrderDraft {
    /// Amount in minor currency units
    pub amount: i64,
    /// ISO 4217 currency code
    pub currency: String,
    /// Customer email
    pub email: String,
}

/// A provider-confirmed order
#[derive(Debug, Clone)]
pub struct ProviderOrder {
    /// Provider-side order identifier
    pub id: String,
    /// Token safe to expose to the browser; initializes the client-side
    /// widget without revealing the private API credential
    pub public_id: String,
}

/// Payment provider order-creation API.
///
/// One implementation per provider; the handler takes the trait object so
/// tests can inject a stub.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order with the provider.
    ///
    /// A non-success provider response surfaces the raw provider body in the
    /// returned error; nothing is retried.
    async fn create_order(&self, draft: &OrderDraft) -> CheckoutResult<ProviderOrder>;

    /// Get the provider name (for logging)
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a boxed payment gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
