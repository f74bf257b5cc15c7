//! # Application State
//!
//! Shared state for the Axum application: configuration plus the injected
//! payment gateway and order store collaborators.

use checkout_core::{BoxedOrderStore, BoxedPaymentGateway};
use checkout_revolut::RevolutGateway;
use checkout_supabase::SupabaseOrderStore;
use std::sync::Arc;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment provider gateway
    pub gateway: BoxedPaymentGateway,
    /// Order persistence store
    pub store: BoxedOrderStore,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Build the production state: Revolut gateway and Supabase store, both
    /// configured from the environment. Missing credentials abort startup.
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env();

        let gateway = RevolutGateway::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Revolut gateway: {}", e))?;
        let store = SupabaseOrderStore::from_env()
            .map_err(|e| anyhow::anyhow!("Failed to initialize Supabase store: {}", e))?;

        Ok(Self::with_collaborators(
            config,
            Arc::new(gateway),
            Arc::new(store),
        ))
    }

    /// Build state around explicit collaborators (tests inject stubs here)
    pub fn with_collaborators(
        config: AppConfig,
        gateway: BoxedPaymentGateway,
        store: BoxedOrderStore,
    ) -> Self {
        Self {
            gateway,
            store,
            config,
        }
    }
}
