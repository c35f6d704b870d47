//! HTTP route handlers for the admin BFF.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Health check
//!
//! # Products (read/write against Shopify)
//! GET  /api/products           - Product listing (?after=<cursor>)
//! POST /api/products/update    - Update title/status/tags of one product
//! POST /api/products/delete    - Delete one product
//! ```
//!
//! Update and delete are distinct operations with distinct routes; the
//! mutation selected is never inferred from a query flag.

use axum::Router;

use crate::state::AppState;

pub mod products;

/// Build the application router.
pub fn routes() -> Router<AppState> {
    Router::new().merge(products::router())
}
