//! # Order Store Seam
//!
//! Trait boundary for order persistence. The store assigns row ids; the
//! service never generates them.

use crate::error::CheckoutResult;
use crate::order::{NewOrder, OrderRecord};
use async_trait::async_trait;
use std::sync::Arc;

/// Persistence boundary for order rows.
#[async_trait]
pub trait OrderStore: Send + Sync {
    /// Insert one order row and read back the stored row, including the
    /// store-generated id and timestamp.
    async fn insert_order(&self, order: &NewOrder) -> CheckoutResult<OrderRecord>;
}

/// Type alias for a boxed order store (dynamic dispatch)
pub type BoxedOrderStore = Arc<dyn OrderStore>;
