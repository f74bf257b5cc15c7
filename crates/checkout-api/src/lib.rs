//! # checkout-api
//!
//! HTTP API layer for revolut-checkout-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - The create-payment endpoint bridging the browser, the Revolut order
//!   API, and the Supabase order store
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/health` | Health check |
//! | POST | `/create-payment` | Create a payment order |
//! | OPTIONS | `/create-payment` | CORS preflight |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
