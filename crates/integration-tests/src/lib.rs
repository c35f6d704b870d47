//! Integration tests for Merchdesk.
//!
//! # Running Tests
//!
//! ```bash
//! # Start the admin BFF with real Shopify credentials
//! cargo run -p merchdesk-admin
//!
//! # Run the live tests
//! cargo test -p merchdesk-integration-tests -- --ignored
//! ```
//!
//! The tests in `tests/` drive a running instance over HTTP and are
//! ignored by default: they need a store with at least six products so
//! that pagination crosses a page boundary, and they create no data of
//! their own except where a test says otherwise.

/// Base URL for the admin BFF (configurable via environment).
#[must_use]
pub fn admin_base_url() -> String {
    std::env::var("ADMIN_BASE_URL").unwrap_or_else(|_| "http://localhost:3001".to_string())
}
