//! Unified error handling for the admin BFF.
//!
//! Every handler failure funnels through [`AppError`], which renders the
//! JSON envelopes the browser contract expects: field-level `userErrors`
//! become a structured 400, everything else becomes a 500 carrying the
//! upstream message.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::shopify::AdminShopifyError;

/// Application-level error type for the admin BFF.
///
/// The upstream API is the only failure domain: there is no database and
/// no local validation, so every error a handler can produce is a Shopify
/// error wearing an HTTP status.
#[derive(Debug, Error)]
pub enum AppError {
    /// Shopify API operation failed.
    #[error("Shopify error: {0}")]
    Shopify(#[from] AdminShopifyError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            // Upstream validation rejections pass through verbatim.
            Self::Shopify(AdminShopifyError::UserErrors(errors)) => (
                StatusCode::BAD_REQUEST,
                Json(json!({ "success": false, "errors": errors })),
            )
                .into_response(),
            Self::Shopify(err) => {
                let event_id = sentry::capture_error(&err);
                tracing::error!(
                    error = %err,
                    sentry_event_id = %event_id,
                    "Admin request error"
                );

                // The upstream message lands in the body unfiltered. This
                // panel is reachable only over Tailscale and the UI shows
                // the message as-is.
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "success": false, "error": err.to_string() })),
                )
                    .into_response()
            }
        }
    }
}
