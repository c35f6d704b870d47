//! Shopify Admin API GraphQL client.
//!
//! This module provides a type-safe client for the product operations the
//! admin panel needs. The client is constructed once at startup and handed
//! to request handlers through application state - it is never looked up
//! ambiently.

use std::sync::Arc;

use graphql_client::{GraphQLQuery, Response};
use secrecy::{ExposeSecret, SecretString};
use tracing::instrument;

use crate::config::ShopifyAdminConfig;

use super::{AdminShopifyError, GraphQLError, GraphQLErrorLocation};
use super::types::{Product, ProductConnection};

mod conversions;
pub mod queries;

use conversions::{convert_product, convert_product_connection, convert_user_errors};
use queries::{GetProducts, ProductDelete, ProductUpdate};

/// Input for updating a product.
///
/// All fields are optional - only provided fields will be updated. Values
/// are forwarded to upstream exactly as received; in particular the status
/// string is not checked against any local enumeration.
#[derive(Debug, Default)]
pub struct ProductUpdateInput {
    /// New product title.
    pub title: Option<String>,
    /// New status string (upstream accepts "ACTIVE", "DRAFT", "ARCHIVED").
    pub status: Option<String>,
    /// New tags (replaces existing tags).
    pub tags: Option<Vec<String>>,
}

/// Shopify Admin API GraphQL client.
///
/// Provides type-safe access to the Admin API for listing, updating, and
/// deleting products. Each operation performs exactly one upstream call.
///
/// # Security
///
/// This client uses an access token with HIGH PRIVILEGE access to the
/// store. Only use on Tailscale-protected infrastructure.
#[derive(Clone)]
pub struct AdminClient {
    inner: Arc<AdminClientInner>,
}

struct AdminClientInner {
    client: reqwest::Client,
    endpoint: String,
    access_token: SecretString,
}

impl AdminClient {
    /// Create a new Admin API client from configuration.
    #[must_use]
    pub fn new(config: &ShopifyAdminConfig) -> Self {
        let endpoint = format!(
            "https://{}/admin/api/{}/graphql.json",
            config.store, config.api_version
        );

        Self::from_endpoint(endpoint, config.access_token.clone())
    }

    /// Create a client against an explicit GraphQL endpoint.
    ///
    /// Useful for pointing the client at a test double; production code
    /// goes through [`AdminClient::new`].
    #[must_use]
    pub fn from_endpoint(endpoint: String, access_token: SecretString) -> Self {
        Self {
            inner: Arc::new(AdminClientInner {
                client: reqwest::Client::new(),
                endpoint,
                access_token,
            }),
        }
    }

    // =========================================================================
    // GraphQL Execution
    // =========================================================================

    /// Execute a GraphQL operation.
    async fn execute<Q: GraphQLQuery>(
        &self,
        variables: Q::Variables,
    ) -> Result<Q::ResponseData, AdminShopifyError>
    where
        Q::Variables: serde::Serialize,
    {
        let request_body = Q::build_query(variables);

        let response = self
            .inner
            .client
            .post(&self.inner.endpoint)
            .header(
                "X-Shopify-Access-Token",
                self.inner.access_token.expose_secret(),
            )
            .header("Content-Type", "application/json")
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();

        // Check for rate limiting
        if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
            let retry_after = response
                .headers()
                .get("Retry-After")
                .and_then(|v| v.to_str().ok())
                .and_then(|s| s.parse::<u64>().ok())
                .unwrap_or(60);
            return Err(AdminShopifyError::RateLimited(retry_after));
        }

        // Check for unauthorized
        if status == reqwest::StatusCode::UNAUTHORIZED {
            return Err(AdminShopifyError::Unauthorized(
                "Invalid or expired access token".to_string(),
            ));
        }

        // Get response body as text first for better error diagnostics
        let response_text = response.text().await?;

        // Check for non-success status codes
        if !status.is_success() {
            tracing::error!(
                status = %status,
                body = %response_text.chars().take(500).collect::<String>(),
                "Shopify API returned non-success status"
            );
            return Err(AdminShopifyError::GraphQL(vec![GraphQLError {
                message: format!(
                    "HTTP {status}: {}",
                    response_text.chars().take(200).collect::<String>()
                ),
                locations: vec![],
                path: vec![],
            }]));
        }

        // Parse the response
        let response: Response<Q::ResponseData> = match serde_json::from_str(&response_text) {
            Ok(r) => r,
            Err(e) => {
                tracing::error!(
                    error = %e,
                    body = %response_text.chars().take(500).collect::<String>(),
                    "Failed to parse Shopify GraphQL response"
                );
                return Err(AdminShopifyError::Parse(e));
            }
        };

        // Check for GraphQL errors
        if let Some(errors) = response.errors
            && !errors.is_empty()
        {
            tracing::debug!(
                errors = ?errors,
                "GraphQL errors in response"
            );

            return Err(AdminShopifyError::GraphQL(
                errors
                    .into_iter()
                    .map(|e| GraphQLError {
                        message: e.message,
                        locations: e.locations.map_or_else(Vec::new, |locs| {
                            locs.into_iter()
                                .map(|l| GraphQLErrorLocation {
                                    line: i64::from(l.line),
                                    column: i64::from(l.column),
                                })
                                .collect()
                        }),
                        path: e.path.map_or_else(Vec::new, |p| {
                            p.into_iter()
                                .map(|fragment| match fragment {
                                    graphql_client::PathFragment::Key(s) => {
                                        serde_json::Value::String(s)
                                    }
                                    graphql_client::PathFragment::Index(i) => {
                                        serde_json::Value::Number(i.into())
                                    }
                                })
                                .collect()
                        }),
                    })
                    .collect(),
            ));
        }

        // A response with neither data nor errors is malformed, never an
        // empty result.
        response.data.ok_or_else(|| {
            tracing::error!(
                body = %response_text.chars().take(500).collect::<String>(),
                "Shopify GraphQL response has no data and no errors"
            );
            AdminShopifyError::MissingData("response data")
        })
    }

    // =========================================================================
    // Product methods
    // =========================================================================

    /// Get a paginated list of products.
    ///
    /// # Arguments
    ///
    /// * `first` - Number of products to return
    /// * `after` - Opaque cursor from a previous page, passed back unmodified
    ///
    /// # Errors
    ///
    /// Returns an error if the API request fails or returns an error response.
    #[instrument(skip(self))]
    pub async fn get_products(
        &self,
        first: i64,
        after: Option<String>,
    ) -> Result<ProductConnection, AdminShopifyError> {
        let variables = queries::get_products::Variables { first, after };

        let response = self.execute::<GetProducts>(variables).await?;

        Ok(convert_product_connection(response.products))
    }

    /// Update an existing product.
    ///
    /// # Arguments
    ///
    /// * `id` - Product ID (e.g., `gid://shopify/Product/123`)
    /// * `input` - Fields to update, forwarded verbatim
    ///
    /// # Returns
    ///
    /// Returns the updated product on success.
    ///
    /// # Errors
    ///
    /// Returns `UserErrors` with the upstream field-level errors when the
    /// mutation is rejected, or another error if the request itself fails.
    #[instrument(skip(self, input), fields(product_id = %id))]
    pub async fn update_product(
        &self,
        id: &str,
        input: ProductUpdateInput,
    ) -> Result<Product, AdminShopifyError> {
        use queries::product_update::{ProductInput, Variables};

        let variables = Variables {
            input: ProductInput {
                id: id.to_string(),
                title: input.title,
                status: input.status,
                tags: input.tags,
            },
        };

        let response = self.execute::<ProductUpdate>(variables).await?;

        let payload = response
            .product_update
            .ok_or(AdminShopifyError::MissingData("productUpdate payload"))?;

        if !payload.user_errors.is_empty() {
            return Err(AdminShopifyError::UserErrors(convert_user_errors(
                payload.user_errors,
            )));
        }

        payload
            .product
            .map(convert_product)
            .ok_or(AdminShopifyError::MissingData(
                "product returned from update",
            ))
    }

    /// Delete a product.
    ///
    /// # Arguments
    ///
    /// * `id` - Product ID to delete
    ///
    /// # Returns
    ///
    /// Returns the deleted product's ID on success.
    ///
    /// # Errors
    ///
    /// Returns `UserErrors` with the upstream field-level errors when the
    /// mutation is rejected, or another error if the request itself fails.
    #[instrument(skip(self), fields(product_id = %id))]
    pub async fn delete_product(&self, id: &str) -> Result<String, AdminShopifyError> {
        use queries::product_delete::{ProductDeleteInput, Variables};

        let variables = Variables {
            input: ProductDeleteInput { id: id.to_string() },
        };

        let response = self.execute::<ProductDelete>(variables).await?;

        let payload = response
            .product_delete
            .ok_or(AdminShopifyError::MissingData("productDelete payload"))?;

        if !payload.user_errors.is_empty() {
            return Err(AdminShopifyError::UserErrors(convert_user_errors(
                payload.user_errors,
            )));
        }

        payload
            .deleted_product_id
            .ok_or(AdminShopifyError::MissingData("deleted product id"))
    }
}
