//! # Supabase Configuration
//!
//! Configuration management for the Supabase PostgREST interface.
//! The service-role key is privileged and must stay server-side.

use checkout_core::CheckoutError;
use std::env;

/// Supabase project configuration
#[derive(Debug, Clone)]
pub struct SupabaseConfig {
    /// Project base URL (`https://<project>.supabase.co`)
    pub url: String,

    /// Service-role key used for both the `apikey` and bearer headers
    pub service_role_key: String,
}

impl SupabaseConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `SUPABASE_URL`
    /// - `SUPABASE_SERVICE_ROLE_KEY`
    pub fn from_env() -> Result<Self, CheckoutError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let url = env::var("SUPABASE_URL").map_err(|_| {
            CheckoutError::Configuration("SUPABASE_URL environment variable is not set".to_string())
        })?;

        let service_role_key = env::var("SUPABASE_SERVICE_ROLE_KEY").map_err(|_| {
            CheckoutError::Configuration(
                "SUPABASE_SERVICE_ROLE_KEY environment variable is not set".to_string(),
            )
        })?;

        Ok(Self {
            url,
            service_role_key,
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(url: impl Into<String>, service_role_key: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            service_role_key: service_role_key.into(),
        }
    }

    /// PostgREST endpoint for a table
    pub fn table_url(&self, table: &str) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), table)
    }

    /// Get authorization header value
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.service_role_key)
    }
}
