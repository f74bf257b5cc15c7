//! # checkout-supabase
//!
//! Supabase PostgREST order store for revolut-checkout-rs.
//!
//! Implements the `OrderStore` seam: insert one row into the `orders` table
//! with `Prefer: return=representation` and hand back the stored row,
//! including the store-generated id. Rows are never updated or deleted here;
//! the payment outcome is only ever known in the browser and is not written
//! back.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use checkout_supabase::SupabaseOrderStore;
//! use checkout_core::{NewOrder, OrderStore};
//!
//! // Reads SUPABASE_URL and SUPABASE_SERVICE_ROLE_KEY
//! let store = SupabaseOrderStore::from_env()?;
//!
//! let record = store
//!     .insert_order(&NewOrder::pending(50000, "USD", "customer@example.com", "rev_123"))
//!     .await?;
//!
//! // record.id is the store-generated order id
//! ```

pub mod config;
pub mod store;

// Re-exports
pub use config::SupabaseConfig;
pub use store::SupabaseOrderStore;
