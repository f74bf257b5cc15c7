//! # Revolut Checkout RS
//!
//! Hosted-checkout order service: creates Revolut payment orders and
//! persists them to Supabase, returning the public token the browser widget
//! needs to collect the card.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export REVOLUT_API_KEY=sk_sandbox_...
//! export SUPABASE_URL=https://<project>.supabase.co
//! export SUPABASE_SERVICE_ROLE_KEY=...
//!
//! # Run the server
//! revolut-checkout
//! ```

use checkout_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!("Payment provider: {}", state.gateway.provider_name());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("Revolut checkout starting on http://{}", addr);

    if !is_prod {
        info!("💳 Create payment: POST http://{}/create-payment", addr);
        info!("❤️ Health: GET http://{}/health", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
