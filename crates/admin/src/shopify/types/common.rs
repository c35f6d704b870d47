//! Common domain types shared across Shopify Admin API operations.

use serde::{Deserialize, Serialize};

/// Product or media image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    /// Image URL.
    pub url: String,
    /// Alt text for accessibility.
    pub alt_text: Option<String>,
}

/// Pagination information.
///
/// `end_cursor` is an opaque token owned by the upstream API; it is only
/// ever passed back unmodified to fetch the next page.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PageInfo {
    /// Whether there are more items after this page.
    pub has_next_page: bool,
    /// Cursor for the last item.
    pub end_cursor: Option<String>,
}

/// Field-level validation error from a mutation payload.
///
/// Upstream reports these inside an otherwise successful GraphQL response;
/// they are passed through to the browser verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserError {
    /// Dotted path of the offending input field, when upstream names one.
    pub field: Option<String>,
    /// Human-readable validation message.
    pub message: String,
}
