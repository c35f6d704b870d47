//! Shopify Admin API client (HIGH PRIVILEGE - Tailscale only).
//!
//! # Security
//!
//! **CRITICAL: This module holds the high-privilege Shopify Admin API token.**
//!
//! It should ONLY run on Tailscale-protected infrastructure. The Admin API
//! has full access to products, variants, inventory, and shop settings.
//!
//! # Architecture
//!
//! - Uses `graphql_client` envelope types with hand-wired query documents
//! - Direct API calls to Shopify (no local database sync)
//! - Exactly one upstream call per operation; rate limiting and
//!   authorization failures are detected and surfaced, never retried here
//!
//! # Example
//!
//! ```rust,ignore
//! use merchdesk_admin::shopify::AdminClient;
//!
//! let client = AdminClient::new(&config.shopify);
//!
//! // Get a page of products
//! let page = client.get_products(5, None).await?;
//!
//! // Delete a product
//! let deleted_id = client.delete_product("gid://shopify/Product/123").await?;
//! ```

mod admin;
pub mod types;

pub use admin::{AdminClient, ProductUpdateInput};

use thiserror::Error;

use types::UserError;

/// Errors that can occur when interacting with Shopify Admin API.
#[derive(Debug, Error)]
pub enum AdminShopifyError {
    /// HTTP request failed.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// GraphQL query returned errors.
    #[error("GraphQL errors: {}", format_graphql_errors(.0))]
    GraphQL(Vec<GraphQLError>),

    /// JSON parsing failed.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// Rate limited by Shopify.
    #[error("Rate limited, retry after {0} seconds")]
    RateLimited(u64),

    /// Authentication/authorization failed.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Field-level validation errors from a mutation, passed through
    /// unmodified from the upstream `userErrors` payload.
    #[error("User errors: {}", format_user_errors(.0))]
    UserErrors(Vec<UserError>),

    /// The response decoded but the expected payload was absent.
    #[error("Missing data in response: {0}")]
    MissingData(&'static str),
}

/// A GraphQL error returned by the Shopify Admin API.
#[derive(Debug, Clone)]
pub struct GraphQLError {
    /// Error message.
    pub message: String,
    /// Source locations in the query.
    pub locations: Vec<GraphQLErrorLocation>,
    /// Path to the error in the response.
    pub path: Vec<serde_json::Value>,
}

/// Location in a GraphQL query where an error occurred.
#[derive(Debug, Clone)]
pub struct GraphQLErrorLocation {
    /// Line number (1-indexed).
    pub line: i64,
    /// Column number (1-indexed).
    pub column: i64,
}

fn format_graphql_errors(errors: &[GraphQLError]) -> String {
    errors
        .iter()
        .map(|e| e.message.clone())
        .collect::<Vec<_>>()
        .join("; ")
}

fn format_user_errors(errors: &[UserError]) -> String {
    errors
        .iter()
        .map(|e| match &e.field {
            Some(field) => format!("{field}: {}", e.message),
            None => e.message.clone(),
        })
        .collect::<Vec<_>>()
        .join("; ")
}
