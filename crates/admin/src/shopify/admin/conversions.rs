//! Conversions from wire shapes to domain types.

use merchdesk_core::{CurrencyCode, Price, ProductId, ProductStatus, VariantId};

use super::queries;
use crate::shopify::types::{Image, PageInfo, Product, ProductConnection, ProductVariant, UserError};

pub fn convert_product(node: queries::ProductNode) -> Product {
    let status = match node.status {
        queries::ProductStatus::Active => ProductStatus::Active,
        queries::ProductStatus::Archived => ProductStatus::Archived,
        queries::ProductStatus::Draft | queries::ProductStatus::Other => ProductStatus::Draft,
    };

    let variant = node.variants.edges.into_iter().next().map(|e| {
        // Price is a Money scalar with no currency info; the store
        // currency is USD.
        let price = Price::parse(&e.node.price, CurrencyCode::USD).unwrap_or_default();

        ProductVariant {
            id: VariantId::from(e.node.id),
            price,
            barcode: e.node.barcode,
        }
    });

    Product {
        id: ProductId::from(node.id),
        title: node.title,
        handle: node.handle,
        status,
        tags: node.tags,
        featured_image: node.featured_image.map(|i| Image {
            url: i.url,
            alt_text: i.alt_text,
        }),
        variant,
    }
}

pub fn convert_product_connection(
    conn: queries::get_products::ProductConnection,
) -> ProductConnection {
    ProductConnection {
        products: conn.edges.into_iter().map(|e| convert_product(e.node)).collect(),
        page_info: PageInfo {
            has_next_page: conn.page_info.has_next_page,
            end_cursor: conn.page_info.end_cursor,
        },
    }
}

/// Flatten the upstream field path (e.g., `["input", "title"]`) into the
/// dotted form the browser contract carries. The message is untouched.
pub fn convert_user_errors(errors: Vec<queries::UserErrorNode>) -> Vec<UserError> {
    errors
        .into_iter()
        .map(|e| UserError {
            field: e.field.map(|f| f.join(".")),
            message: e.message,
        })
        .collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn sample_node(json: serde_json::Value) -> queries::ProductNode {
        serde_json::from_value(json).unwrap()
    }

    #[test]
    fn test_convert_product_maps_fields() {
        let node = sample_node(serde_json::json!({
            "id": "gid://shopify/Product/1",
            "title": "Juniper Socks",
            "handle": "juniper-socks",
            "status": "ACTIVE",
            "tags": ["socks", "summer"],
            "featuredImage": { "url": "https://cdn.example.com/socks.jpg", "altText": "Socks" },
            "variants": { "edges": [
                { "node": { "id": "gid://shopify/ProductVariant/11", "price": "12.50", "barcode": "0123456789" } }
            ] }
        }));

        let product = convert_product(node);

        assert_eq!(product.id.as_str(), "gid://shopify/Product/1");
        assert_eq!(product.status, ProductStatus::Active);
        assert_eq!(product.tags, vec!["socks", "summer"]);

        let image = product.featured_image.unwrap();
        assert_eq!(image.alt_text.as_deref(), Some("Socks"));

        let variant = product.variant.unwrap();
        assert_eq!(variant.price.amount.to_string(), "12.50");
        assert_eq!(variant.barcode.as_deref(), Some("0123456789"));
    }

    #[test]
    fn test_convert_product_unknown_status_falls_back_to_draft() {
        let node = sample_node(serde_json::json!({
            "id": "gid://shopify/Product/2",
            "title": "Mystery",
            "handle": "mystery",
            "status": "UNLISTED",
            "tags": [],
            "featuredImage": null,
            "variants": { "edges": [] }
        }));

        let product = convert_product(node);
        assert_eq!(product.status, ProductStatus::Draft);
        assert!(product.featured_image.is_none());
        assert!(product.variant.is_none());
    }

    #[test]
    fn test_convert_user_errors_joins_field_path() {
        let errors = vec![
            queries::UserErrorNode {
                field: Some(vec!["input".to_string(), "title".to_string()]),
                message: "can't be blank".to_string(),
            },
            queries::UserErrorNode {
                field: None,
                message: "Product does not exist".to_string(),
            },
        ];

        let converted = convert_user_errors(errors);
        assert_eq!(converted[0].field.as_deref(), Some("input.title"));
        assert_eq!(converted[0].message, "can't be blank");
        assert!(converted[1].field.is_none());
    }
}
