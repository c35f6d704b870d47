//! Product domain types for the Shopify Admin API.

use serde::{Deserialize, Serialize};

use merchdesk_core::{Price, ProductId, ProductStatus, VariantId};

use super::common::{Image, PageInfo};

/// The primary variant of a product.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductVariant {
    /// Variant ID.
    pub id: VariantId,
    /// Current price.
    pub price: Price,
    /// Barcode.
    pub barcode: Option<String>,
}

/// A product in the admin.
///
/// A transient copy of upstream state; discarded on navigation, never
/// persisted locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Product {
    /// Product ID.
    pub id: ProductId,
    /// Product title.
    pub title: String,
    /// URL handle.
    pub handle: String,
    /// Product status (Active, Draft, Archived).
    pub status: ProductStatus,
    /// Product tags.
    pub tags: Vec<String>,
    /// Cover image.
    pub featured_image: Option<Image>,
    /// Primary variant.
    pub variant: Option<ProductVariant>,
}

/// Paginated list of products.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductConnection {
    /// Products in this page.
    pub products: Vec<Product>,
    /// Pagination info.
    pub page_info: PageInfo,
}
