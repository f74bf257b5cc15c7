//! # Revolut Order Creation
//!
//! Client for the Revolut Merchant API order-creation endpoint.
//! One POST per checkout attempt; no retries, no idempotency keys, so a
//! repeated call creates a second provider order.

use crate::config::RevolutConfig;
use async_trait::async_trait;
use checkout_core::{CheckoutError, CheckoutResult, OrderDraft, PaymentGateway, ProviderOrder};
use reqwest::Client;
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument};

/// Revolut Merchant API gateway.
///
/// Creates provider orders that the browser widget later completes using
/// the public token; the secret key never leaves the server.
pub struct RevolutGateway {
    config: RevolutConfig,
    client: Client,
}

impl RevolutGateway {
    /// Create a new gateway client
    pub fn new(config: RevolutConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Create from environment variables
    pub fn from_env() -> CheckoutResult<Self> {
        let config = RevolutConfig::from_env()?;
        Ok(Self::new(config))
    }
}

#[async_trait]
impl PaymentGateway for RevolutGateway {
    #[instrument(skip(self, draft), fields(amount = draft.amount, currency = %draft.currency))]
    async fn create_order(&self, draft: &OrderDraft) -> CheckoutResult<ProviderOrder> {
        let url = format!("{}/orders", self.config.api_base_url);
        let request = RevolutOrderRequest {
            amount: draft.amount,
            currency: &draft.currency,
            email: &draft.email,
            capture_mode: CaptureMode::Automatic,
        };

        debug!(
            "Creating Revolut order: amount={}, currency={}",
            draft.amount, draft.currency
        );

        let response = self
            .client
            .post(&url)
            .header("Authorization", self.config.auth_header())
            .json(&request)
            .send()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| CheckoutError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Revolut API error: status={}, body={}", status, body);
            return Err(CheckoutError::Gateway {
                provider: "revolut".to_string(),
                message: body,
            });
        }

        let order: RevolutOrderResponse =
            serde_json::from_str(&body).map_err(|e| CheckoutError::Gateway {
                provider: "revolut".to_string(),
                message: format!("unparsable order response: {}", e),
            })?;

        info!("Created Revolut order: id={}", order.id);

        Ok(ProviderOrder {
            id: order.id,
            public_id: order.public_id,
        })
    }

    fn provider_name(&self) -> &'static str {
        "revolut"
    }
}

// =============================================================================
// Revolut API Types
// =============================================================================

/// Capture mode for a provider order
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
enum CaptureMode {
    /// Settle funds immediately upon authorization
    Automatic,
}

#[derive(Debug, Serialize)]
struct RevolutOrderRequest<'a> {
    amount: i64,
    currency: &'a str,
    email: &'a str,
    capture_mode: CaptureMode,
}

#[derive(Debug, Deserialize)]
struct RevolutOrderResponse {
    id: String,
    public_id: String,
}
