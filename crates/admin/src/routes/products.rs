//! Product listing and mutation handlers.

use axum::{
    Json, Router,
    extract::{Query, State},
    routing::{get, post},
};
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::{
    error::AppError,
    shopify::ProductUpdateInput,
    shopify::types::{PageInfo, Product, ProductConnection},
    state::AppState,
};

/// Products requested per page. The upstream cursor drives everything
/// beyond this number.
const PAGE_SIZE: i64 = 5;

/// Build the products router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/api/products", get(list))
        .route("/api/products/update", post(update))
        .route("/api/products/delete", post(delete))
}

// =============================================================================
// Payloads
// =============================================================================

/// Pagination query parameters.
#[derive(Debug, Deserialize)]
pub struct PaginationQuery {
    pub after: Option<String>,
}

/// Image payload for the browser.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImagePayload {
    pub url: String,
    pub alt_text: Option<String>,
}

/// Primary variant payload for the browser.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantPayload {
    pub id: String,
    /// Decimal amount as a string (e.g., "19.99").
    pub price: String,
    pub barcode: Option<String>,
}

/// Product payload for the browser.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPayload {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub status: String,
    pub tags: Vec<String>,
    pub image: Option<ImagePayload>,
    pub variant: Option<VariantPayload>,
}

impl From<&Product> for ProductPayload {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            handle: product.handle.clone(),
            status: product.status.as_str().to_string(),
            tags: product.tags.clone(),
            image: product.featured_image.as_ref().map(|i| ImagePayload {
                url: i.url.clone(),
                alt_text: i.alt_text.clone(),
            }),
            variant: product.variant.as_ref().map(|v| VariantPayload {
                id: v.id.to_string(),
                price: v.price.amount.to_string(),
                barcode: v.barcode.clone(),
            }),
        }
    }
}

/// Pagination payload for the browser.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfoPayload {
    pub has_next_page: bool,
    pub end_cursor: Option<String>,
}

impl From<PageInfo> for PageInfoPayload {
    fn from(page_info: PageInfo) -> Self {
        Self {
            has_next_page: page_info.has_next_page,
            end_cursor: page_info.end_cursor,
        }
    }
}

/// Response for the product listing.
///
/// An upstream failure still answers 200 with an empty list and a non-empty
/// `error`; callers must check `error` before treating an empty list as the
/// end of the data.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductListResponse {
    pub products: Vec<ProductPayload>,
    pub page_info: PageInfoPayload,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProductListResponse {
    fn failed(message: String) -> Self {
        Self {
            products: vec![],
            page_info: PageInfoPayload {
                has_next_page: false,
                end_cursor: None,
            },
            error: Some(message),
        }
    }
}

impl From<ProductConnection> for ProductListResponse {
    fn from(conn: ProductConnection) -> Self {
        Self {
            products: conn.products.iter().map(ProductPayload::from).collect(),
            page_info: conn.page_info.into(),
            error: None,
        }
    }
}

/// Request body for updating a product.
///
/// Nothing is validated here: empty titles, unknown status strings, and
/// malformed IDs all travel to upstream, which owns the business rules.
#[derive(Debug, Deserialize)]
pub struct UpdateProductRequest {
    pub id: String,
    pub title: String,
    pub status: String,
    pub tags: Vec<String>,
}

/// Response for a successful update.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductResponse {
    pub success: bool,
    pub updated_product: ProductPayload,
}

/// Request body for deleting a product.
#[derive(Debug, Deserialize)]
pub struct DeleteProductRequest {
    pub id: String,
}

/// Response for a successful delete.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProductResponse {
    pub success: bool,
    pub deleted_id: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Product listing handler.
#[instrument(skip(state))]
pub async fn list(
    State(state): State<AppState>,
    Query(query): Query<PaginationQuery>,
) -> Json<ProductListResponse> {
    match state.shopify().get_products(PAGE_SIZE, query.after).await {
        Ok(conn) => Json(conn.into()),
        Err(e) => {
            tracing::error!("Failed to fetch products: {e}");
            Json(ProductListResponse::failed(e.to_string()))
        }
    }
}

/// Product update handler.
///
/// # Errors
///
/// Returns 400 with the upstream `userErrors` when the mutation is
/// rejected, 500 with the upstream message otherwise.
#[instrument(skip(state, body), fields(product_id = %body.id))]
pub async fn update(
    State(state): State<AppState>,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<UpdateProductResponse>, AppError> {
    let input = ProductUpdateInput {
        title: Some(body.title),
        status: Some(body.status),
        tags: Some(body.tags),
    };

    let product = state.shopify().update_product(&body.id, input).await?;

    Ok(Json(UpdateProductResponse {
        success: true,
        updated_product: ProductPayload::from(&product),
    }))
}

/// Product delete handler.
///
/// # Errors
///
/// Returns 400 with the upstream `userErrors` when the mutation is
/// rejected, 500 with the upstream message otherwise.
#[instrument(skip(state, body), fields(product_id = %body.id))]
pub async fn delete(
    State(state): State<AppState>,
    Json(body): Json<DeleteProductRequest>,
) -> Result<Json<DeleteProductResponse>, AppError> {
    let deleted_id = state.shopify().delete_product(&body.id).await?;

    Ok(Json(DeleteProductResponse {
        success: true,
        deleted_id,
    }))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use merchdesk_core::{CurrencyCode, Price, ProductId, ProductStatus, VariantId};
    use crate::shopify::types::{Image, ProductVariant};

    fn sample_product() -> Product {
        Product {
            id: ProductId::new("gid://shopify/Product/1"),
            title: "Juniper Socks".to_string(),
            handle: "juniper-socks".to_string(),
            status: ProductStatus::Active,
            tags: vec!["socks".to_string()],
            featured_image: Some(Image {
                url: "https://cdn.example.com/socks.jpg".to_string(),
                alt_text: None,
            }),
            variant: Some(ProductVariant {
                id: VariantId::new("gid://shopify/ProductVariant/11"),
                price: Price::parse("12.50", CurrencyCode::USD).unwrap(),
                barcode: None,
            }),
        }
    }

    #[test]
    fn test_product_payload_serializes_camel_case() {
        let payload = ProductPayload::from(&sample_product());
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["id"], "gid://shopify/Product/1");
        assert_eq!(json["status"], "ACTIVE");
        assert_eq!(json["variant"]["price"], "12.50");
        assert_eq!(json["image"]["altText"], serde_json::Value::Null);
    }

    #[test]
    fn test_list_response_success_has_no_error_field() {
        let conn = ProductConnection {
            products: vec![sample_product()],
            page_info: PageInfo {
                has_next_page: true,
                end_cursor: Some("cursor-1".to_string()),
            },
        };

        let json = serde_json::to_value(ProductListResponse::from(conn)).unwrap();
        assert_eq!(json["pageInfo"]["hasNextPage"], true);
        assert_eq!(json["pageInfo"]["endCursor"], "cursor-1");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn test_list_response_failure_is_empty_with_error() {
        let json =
            serde_json::to_value(ProductListResponse::failed("upstream down".to_string()))
                .unwrap();

        assert_eq!(json["products"], serde_json::json!([]));
        assert_eq!(json["pageInfo"]["hasNextPage"], false);
        assert_eq!(json["error"], "upstream down");
    }

    #[test]
    fn test_mutation_responses_use_contract_keys() {
        let update = UpdateProductResponse {
            success: true,
            updated_product: ProductPayload::from(&sample_product()),
        };
        let json = serde_json::to_value(&update).unwrap();
        assert_eq!(json["success"], true);
        assert!(json["updatedProduct"]["title"].is_string());

        let delete = DeleteProductResponse {
            success: true,
            deleted_id: "gid://shopify/Product/1".to_string(),
        };
        let json = serde_json::to_value(&delete).unwrap();
        assert_eq!(json["deletedId"], "gid://shopify/Product/1");
    }
}
