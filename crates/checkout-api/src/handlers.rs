//! # Request Handlers
//!
//! Axum request handlers for the checkout API.
//! One payment operation: validate the body, create the provider order,
//! persist the row, return the identifiers the browser widget needs.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{header, HeaderMap, HeaderValue, StatusCode},
    response::IntoResponse,
    Json,
};
use checkout_core::{CheckoutError, NewOrder, OrderDraft};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

/// Default charge when the caller does not override: 500.00 USD in cents
pub const DEFAULT_AMOUNT_MINOR: i64 = 50_000;

/// Default currency code
pub const DEFAULT_CURRENCY: &str = "USD";

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create payment request
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentRequest {
    /// Customer email (preferred field name)
    #[serde(default)]
    pub customer_email: Option<String>,
    /// Customer email (accepted fallback field name)
    #[serde(default)]
    pub email: Option<String>,
    /// Amount override in minor currency units
    #[serde(default)]
    pub amount: Option<i64>,
    /// Currency override (ISO 4217 code)
    #[serde(default)]
    pub currency: Option<String>,
}

impl CreatePaymentRequest {
    /// Resolve the customer email: `customerEmail` wins, `email` is the
    /// fallback, empty strings count as absent.
    pub fn resolved_email(&self) -> Option<&str> {
        [self.customer_email.as_deref(), self.email.as_deref()]
            .into_iter()
            .flatten()
            .find(|e| !e.is_empty())
    }

    /// Amount in minor units, defaulted when not supplied
    pub fn amount_or_default(&self) -> i64 {
        self.amount.unwrap_or(DEFAULT_AMOUNT_MINOR)
    }

    /// Currency code, defaulted when not supplied
    pub fn currency_or_default(&self) -> String {
        self.currency
            .clone()
            .unwrap_or_else(|| DEFAULT_CURRENCY.to_string())
    }
}

/// Create payment response: the identifiers the browser needs to open the
/// payment widget
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePaymentResponse {
    /// Store-generated order id
    pub order_id: String,
    /// Provider-side order id
    pub revolut_order_id: String,
    /// Public token for the client-side widget
    pub public_id: String,
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

fn checkout_error_to_response(err: CheckoutError) -> (StatusCode, Json<ErrorResponse>) {
    let status = StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::BAD_REQUEST);
    (status, Json(ErrorResponse::new(err.to_string())))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "service": "revolut-checkout",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

/// Create a payment order: one provider order, one stored row.
///
/// The body is read raw so a malformed payload surfaces as the same JSON
/// error shape as every other failure.
#[instrument(skip(state, body))]
pub async fn create_payment(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<CreatePaymentResponse>, (StatusCode, Json<ErrorResponse>)> {
    create_payment_internal(&state, body.as_ref())
        .await
        .map_err(|e| {
            error!("Create payment failed: {}", e);
            checkout_error_to_response(e)
        })
}

async fn create_payment_internal(
    state: &AppState,
    body: &[u8],
) -> Result<Json<CreatePaymentResponse>, CheckoutError> {
    let request: CreatePaymentRequest = serde_json::from_slice(body)
        .map_err(|e| CheckoutError::Validation(format!("Invalid request body: {}", e)))?;

    let email = request.resolved_email().ok_or_else(|| {
        CheckoutError::Validation(
            "Customer email is required (use either \"customerEmail\" or \"email\" in the request)"
                .to_string(),
        )
    })?;

    let draft = OrderDraft {
        amount: request.amount_or_default(),
        currency: request.currency_or_default(),
        email: email.to_string(),
    };

    info!(
        "Creating {} order: amount={}, currency={}",
        state.gateway.provider_name(),
        draft.amount,
        draft.currency
    );

    let provider_order = state.gateway.create_order(&draft).await?;

    info!("Provider order confirmed: id={}", provider_order.id);

    let record = state
        .store
        .insert_order(&NewOrder::pending(
            draft.amount,
            &draft.currency,
            email,
            &provider_order.id,
        ))
        .await?;

    info!("Order stored: id={}", record.id);

    Ok(Json(CreatePaymentResponse {
        order_id: record.id,
        revolut_order_id: provider_order.id,
        public_id: provider_order.public_id,
    }))
}

/// CORS preflight: permissive headers, cacheable for a day.
///
/// Answered unconditionally, without inspecting the request, so a
/// browser-hosted caller on any origin can reach the payment route.
pub async fn preflight() -> impl IntoResponse {
    let mut headers = HeaderMap::new();
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_ORIGIN,
        HeaderValue::from_static("*"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_METHODS,
        HeaderValue::from_static("POST, OPTIONS"),
    );
    headers.insert(
        header::ACCESS_CONTROL_ALLOW_HEADERS,
        HeaderValue::from_static("Content-Type, Authorization"),
    );
    headers.insert(
        header::ACCESS_CONTROL_MAX_AGE,
        HeaderValue::from_static("86400"),
    );
    (StatusCode::NO_CONTENT, headers)
}

/// Reject methods other than POST/OPTIONS on the payment route
pub async fn method_not_allowed() -> (StatusCode, Json<ErrorResponse>) {
    checkout_error_to_response(CheckoutError::MethodNotAllowed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routes::create_router;
    use crate::state::AppConfig;
    use async_trait::async_trait;
    use axum::http::Method;
    use axum_test::TestServer;
    use checkout_core::{
        CheckoutResult, OrderRecord, OrderStatus, OrderStore, PaymentGateway, ProviderOrder,
    };
    use serde_json::{json, Value};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use uuid::Uuid;

    struct StubGateway {
        fail: bool,
    }

    #[async_trait]
    impl PaymentGateway for StubGateway {
        async fn create_order(&self, _draft: &OrderDraft) -> CheckoutResult<ProviderOrder> {
            if self.fail {
                return Err(CheckoutError::Gateway {
                    provider: "revolut".to_string(),
                    message: "card country not supported".to_string(),
                });
            }
            Ok(ProviderOrder {
                id: "rev_mock_1".to_string(),
                public_id: "pub_mock_1".to_string(),
            })
        }

        fn provider_name(&self) -> &'static str {
            "revolut"
        }
    }

    struct StubStore {
        fail: bool,
        inserts: AtomicUsize,
        seen: Mutex<Vec<NewOrder>>,
    }

    impl StubStore {
        fn new(fail: bool) -> Arc<Self> {
            Arc::new(Self {
                fail,
                inserts: AtomicUsize::new(0),
                seen: Mutex::new(Vec::new()),
            })
        }

        fn insert_count(&self) -> usize {
            self.inserts.load(Ordering::SeqCst)
        }

        fn last_order(&self) -> Option<NewOrder> {
            self.seen.lock().unwrap().last().cloned()
        }
    }

    #[async_trait]
    impl OrderStore for StubStore {
        async fn insert_order(&self, order: &NewOrder) -> CheckoutResult<OrderRecord> {
            self.inserts.fetch_add(1, Ordering::SeqCst);
            self.seen.lock().unwrap().push(order.clone());

            if self.fail {
                return Err(CheckoutError::Persistence(
                    "duplicate key value violates unique constraint".to_string(),
                ));
            }

            Ok(OrderRecord {
                id: Uuid::new_v4().to_string(),
                amount: order.amount,
                currency: order.currency.clone(),
                customer_email: order.customer_email.clone(),
                provider_order_id: order.provider_order_id.clone(),
                status: order.status,
                created_at: chrono::Utc::now(),
            })
        }
    }

    fn test_config() -> AppConfig {
        AppConfig {
            host: "127.0.0.1".to_string(),
            port: 0,
            environment: "test".to_string(),
        }
    }

    fn server_with(gateway_fail: bool, store: Arc<StubStore>) -> TestServer {
        let state = AppState::with_collaborators(
            test_config(),
            Arc::new(StubGateway { fail: gateway_fail }),
            store,
        );
        TestServer::new(create_router(state)).unwrap()
    }

    #[test]
    fn test_email_field_fallback() {
        let request = CreatePaymentRequest {
            email: Some("a@b.com".to_string()),
            ..Default::default()
        };
        assert_eq!(request.resolved_email(), Some("a@b.com"));

        // customerEmail wins when both are present
        let request = CreatePaymentRequest {
            customer_email: Some("primary@b.com".to_string()),
            email: Some("fallback@b.com".to_string()),
            ..Default::default()
        };
        assert_eq!(request.resolved_email(), Some("primary@b.com"));

        // empty customerEmail falls through to email
        let request = CreatePaymentRequest {
            customer_email: Some(String::new()),
            email: Some("fallback@b.com".to_string()),
            ..Default::default()
        };
        assert_eq!(request.resolved_email(), Some("fallback@b.com"));

        let request = CreatePaymentRequest::default();
        assert_eq!(request.resolved_email(), None);
    }

    #[test]
    fn test_amount_and_currency_defaults() {
        let request = CreatePaymentRequest::default();
        assert_eq!(request.amount_or_default(), 50_000);
        assert_eq!(request.currency_or_default(), "USD");

        let request = CreatePaymentRequest {
            amount: Some(1999),
            currency: Some("GBP".to_string()),
            ..Default::default()
        };
        assert_eq!(request.amount_or_default(), 1999);
        assert_eq!(request.currency_or_default(), "GBP");
    }

    #[tokio::test]
    async fn test_create_payment_accepts_email_field() {
        let store = StubStore::new(false);
        let server = server_with(false, store.clone());

        let response = server
            .post("/create-payment")
            .json(&json!({ "email": "a@b.com" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let body: Value = response.json();
        assert_eq!(body["revolutOrderId"], "rev_mock_1");
        assert_eq!(body["publicId"], "pub_mock_1");
        assert!(body["orderId"].as_str().is_some_and(|id| !id.is_empty()));

        let order = store.last_order().unwrap();
        assert_eq!(order.customer_email, "a@b.com");
        assert_eq!(order.amount, 50_000);
        assert_eq!(order.currency, "USD");
        assert_eq!(order.status, OrderStatus::Pending);
        assert_eq!(order.provider_order_id, "rev_mock_1");
    }

    #[tokio::test]
    async fn test_missing_email_is_rejected() {
        let server = server_with(false, StubStore::new(false));

        let response = server.post("/create-payment").json(&json!({})).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert!(body["error"].as_str().unwrap().contains("email is required"));
    }

    #[tokio::test]
    async fn test_empty_email_is_rejected() {
        let server = server_with(false, StubStore::new(false));

        let response = server
            .post("/create-payment")
            .json(&json!({ "customerEmail": "", "email": "" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_malformed_body_is_rejected() {
        let server = server_with(false, StubStore::new(false));

        let response = server.post("/create-payment").text("not json").await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("Invalid request body"));
    }

    #[tokio::test]
    async fn test_gateway_failure_skips_store_insert() {
        let store = StubStore::new(false);
        let server = server_with(true, store.clone());

        let response = server
            .post("/create-payment")
            .json(&json!({ "customerEmail": "a@b.com" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

        let body: Value = response.json();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("card country not supported"));
        assert_eq!(store.insert_count(), 0);
    }

    #[tokio::test]
    async fn test_store_failure_surfaces_store_error() {
        let store = StubStore::new(true);
        let server = server_with(false, store.clone());

        let response = server
            .post("/create-payment")
            .json(&json!({ "customerEmail": "a@b.com" }))
            .await;

        // The provider order was created before the insert failed; the row
        // is the orphan, the error is the store's.
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(store.insert_count(), 1);

        let body: Value = response.json();
        assert!(body["error"]
            .as_str()
            .unwrap()
            .contains("duplicate key value"));
    }

    #[tokio::test]
    async fn test_amount_and_currency_overrides_reach_the_store() {
        let store = StubStore::new(false);
        let server = server_with(false, store.clone());

        let response = server
            .post("/create-payment")
            .json(&json!({ "email": "a@b.com", "amount": 1999, "currency": "GBP" }))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let order = store.last_order().unwrap();
        assert_eq!(order.amount, 1999);
        assert_eq!(order.currency, "GBP");
    }

    #[tokio::test]
    async fn test_preflight_returns_204_with_cors_headers() {
        let server = server_with(false, StubStore::new(false));

        let response = server.method(Method::OPTIONS, "/create-payment").await;

        assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

        let headers = response.headers();
        assert_eq!(headers.get("access-control-allow-origin").unwrap(), "*");
        assert_eq!(
            headers.get("access-control-allow-methods").unwrap(),
            "POST, OPTIONS"
        );
        assert_eq!(
            headers.get("access-control-allow-headers").unwrap(),
            "Content-Type, Authorization"
        );
        assert_eq!(headers.get("access-control-max-age").unwrap(), "86400");
    }

    #[tokio::test]
    async fn test_other_methods_are_rejected_with_405() {
        let server = server_with(false, StubStore::new(false));

        let response = server.delete("/create-payment").await;

        assert_eq!(response.status_code(), StatusCode::METHOD_NOT_ALLOWED);

        let body: Value = response.json();
        assert_eq!(body["error"], "Method not allowed");

        // Even rejections carry the permissive origin header
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_error_responses_carry_cors_headers() {
        let server = server_with(false, StubStore::new(false));

        let response = server.post("/create-payment").json(&json!({})).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.headers().get("access-control-allow-origin").unwrap(),
            "*"
        );
    }

    #[tokio::test]
    async fn test_health_endpoint() {
        let server = server_with(false, StubStore::new(false));

        let response = server.get("/health").await;

        assert_eq!(response.status_code(), StatusCode::OK);

        let body: Value = response.json();
        assert_eq!(body["status"], "healthy");
    }
}
