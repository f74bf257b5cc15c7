//! # Supabase Order Store
//!
//! Order persistence via the Supabase PostgREST interface. Inserts ask for
//! the stored representation back so the caller sees the generated id.

use crate::config::SupabaseConfig;
use async_trait::async_trait;
use checkout_core::{
    CheckoutError, CheckoutResult, NewOrder, OrderRecord, OrderStatus, OrderStore,
};
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

const ORDERS_TABLE: &str = "orders";

/// PostgREST-backed order store.
pub struct SupabaseOrderStore {
    config: SupabaseConfig,
    client: Client,
}

impl SupabaseOrderStore {
    /// Create a new store client
    pub fn new(config: SupabaseConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> CheckoutResult<Self> {
        let config = SupabaseConfig::from_env()?;
        Ok(Self::new(config))
    }
}

#[async_trait]
impl OrderStore for SupabaseOrderStore {
    #[instrument(skip(self, order), fields(provider_order_id = %order.provider_order_id))]
    async fn insert_order(&self, order: &NewOrder) -> CheckoutResult<OrderRecord> {
        let url = self.config.table_url(ORDERS_TABLE);
        let row = InsertOrderRow {
            amount: order.amount,
            currency: &order.currency,
            revolut_order_id: &order.provider_order_id,
            customer_email: &order.customer_email,
            status: order.status,
        };

        debug!(
            "Inserting order row for provider order {}",
            order.provider_order_id
        );

        let response = self
            .client
            .post(&url)
            .header("apikey", &self.config.service_role_key)
            .header("Authorization", self.config.auth_header())
            .header("Prefer", "return=representation")
            .json(&row)
            .send()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Supabase insert failed: status={}, body={}", status, body);
            return Err(CheckoutError::Persistence(body));
        }

        // PostgREST returns the representation as an array of inserted rows
        let rows: Vec<StoredOrderRow> = serde_json::from_str(&body).map_err(|e| {
            CheckoutError::Persistence(format!("unparsable insert representation: {}", e))
        })?;

        let row = rows
            .into_iter()
            .next()
            .ok_or_else(|| CheckoutError::Persistence("insert returned no rows".to_string()))?;

        info!("Stored order row: id={}", row.id);

        Ok(OrderRecord {
            id: row.id,
            amount: row.amount,
            currency: row.currency,
            customer_email: row.customer_email,
            provider_order_id: row.revolut_order_id,
            status: row.status,
            created_at: row.created_at,
        })
    }
}

// =============================================================================
// `orders` Table Rows
// =============================================================================

/// Insert payload in the table's column names
#[derive(Debug, Serialize)]
struct InsertOrderRow<'a> {
    amount: i64,
    currency: &'a str,
    revolut_order_id: &'a str,
    customer_email: &'a str,
    status: OrderStatus,
}

/// Row representation returned by PostgREST
#[derive(Debug, Deserialize)]
struct StoredOrderRow {
    id: String,
    amount: i64,
    currency: String,
    revolut_order_id: String,
    customer_email: String,
    status: OrderStatus,
    created_at: DateTime<Utc>,
}
