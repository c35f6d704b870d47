//! GraphQL operations for the Shopify Admin API.
//!
//! Each operation is a marker type implementing [`GraphQLQuery`] over a
//! hand-wired query document, so the client's `execute` stays generic over
//! operations without carrying schema codegen artifacts. Variables and
//! response data are plain serde structs mirroring the wire shape.

use graphql_client::{GraphQLQuery, QueryBody};
use serde::Deserialize;

// =============================================================================
// Shared wire types
// =============================================================================

/// Product status as it appears in responses.
///
/// Unknown future values decode as `Other` rather than failing the whole
/// response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ProductStatus {
    Active,
    Draft,
    Archived,
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ImageNode {
    pub url: String,
    #[serde(rename = "altText")]
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantNode {
    pub id: String,
    pub price: String,
    pub barcode: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantEdge {
    pub node: VariantNode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct VariantConnection {
    pub edges: Vec<VariantEdge>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ProductNode {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub status: ProductStatus,
    pub tags: Vec<String>,
    #[serde(rename = "featuredImage")]
    pub featured_image: Option<ImageNode>,
    pub variants: VariantConnection,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PageInfoNode {
    #[serde(rename = "hasNextPage")]
    pub has_next_page: bool,
    #[serde(rename = "endCursor")]
    pub end_cursor: Option<String>,
}

/// A `userErrors` entry as upstream reports it: the field is a path of
/// input keys (e.g., `["input", "title"]`).
#[derive(Debug, Clone, Deserialize)]
pub struct UserErrorNode {
    pub field: Option<Vec<String>>,
    pub message: String,
}

// =============================================================================
// GetProducts
// =============================================================================

pub mod get_products {
    use super::{PageInfoNode, ProductNode};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize)]
    pub struct Variables {
        pub first: i64,
        pub after: Option<String>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        pub products: ProductConnection,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ProductConnection {
        pub edges: Vec<ProductEdge>,
        #[serde(rename = "pageInfo")]
        pub page_info: PageInfoNode,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ProductEdge {
        pub node: ProductNode,
    }
}

pub struct GetProducts;

impl GraphQLQuery for GetProducts {
    type Variables = get_products::Variables;
    type ResponseData = get_products::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: GET_PRODUCTS_QUERY,
            operation_name: "GetProducts",
        }
    }
}

const GET_PRODUCTS_QUERY: &str = concat!(
    "query GetProducts($first: Int!, $after: String) {\n",
    "  products(first: $first, after: $after) {\n",
    "    edges {\n",
    "      node {\n",
    "        id\n",
    "        title\n",
    "        handle\n",
    "        status\n",
    "        tags\n",
    "        featuredImage {\n",
    "          url\n",
    "          altText\n",
    "        }\n",
    "        variants(first: 1) {\n",
    "          edges {\n",
    "            node {\n",
    "              id\n",
    "              price\n",
    "              barcode\n",
    "            }\n",
    "          }\n",
    "        }\n",
    "      }\n",
    "    }\n",
    "    pageInfo {\n",
    "      hasNextPage\n",
    "      endCursor\n",
    "    }\n",
    "  }\n",
    "}\n",
);

// =============================================================================
// ProductUpdate
// =============================================================================

pub mod product_update {
    use super::{ProductNode, UserErrorNode};
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize)]
    pub struct Variables {
        pub input: ProductInput,
    }

    /// Mutation input. Values travel exactly as received from the browser;
    /// upstream owns all validation, including the status enumeration.
    #[derive(Debug, Default, Serialize)]
    pub struct ProductInput {
        pub id: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub title: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub status: Option<String>,
        #[serde(skip_serializing_if = "Option::is_none")]
        pub tags: Option<Vec<String>>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        #[serde(rename = "productUpdate")]
        pub product_update: Option<ProductUpdatePayload>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ProductUpdatePayload {
        pub product: Option<ProductNode>,
        #[serde(rename = "userErrors")]
        pub user_errors: Vec<UserErrorNode>,
    }
}

pub struct ProductUpdate;

impl GraphQLQuery for ProductUpdate {
    type Variables = product_update::Variables;
    type ResponseData = product_update::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: PRODUCT_UPDATE_QUERY,
            operation_name: "ProductUpdate",
        }
    }
}

const PRODUCT_UPDATE_QUERY: &str = concat!(
    "mutation ProductUpdate($input: ProductInput!) {\n",
    "  productUpdate(input: $input) {\n",
    "    product {\n",
    "      id\n",
    "      title\n",
    "      handle\n",
    "      status\n",
    "      tags\n",
    "      featuredImage {\n",
    "        url\n",
    "        altText\n",
    "      }\n",
    "      variants(first: 1) {\n",
    "        edges {\n",
    "          node {\n",
    "            id\n",
    "            price\n",
    "            barcode\n",
    "          }\n",
    "        }\n",
    "      }\n",
    "    }\n",
    "    userErrors {\n",
    "      field\n",
    "      message\n",
    "    }\n",
    "  }\n",
    "}\n",
);

// =============================================================================
// ProductDelete
// =============================================================================

pub mod product_delete {
    use super::UserErrorNode;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Serialize)]
    pub struct Variables {
        pub input: ProductDeleteInput,
    }

    #[derive(Debug, Serialize)]
    pub struct ProductDeleteInput {
        pub id: String,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ResponseData {
        #[serde(rename = "productDelete")]
        pub product_delete: Option<ProductDeletePayload>,
    }

    #[derive(Debug, Clone, Deserialize)]
    pub struct ProductDeletePayload {
        #[serde(rename = "deletedProductId")]
        pub deleted_product_id: Option<String>,
        #[serde(rename = "userErrors")]
        pub user_errors: Vec<UserErrorNode>,
    }
}

pub struct ProductDelete;

impl GraphQLQuery for ProductDelete {
    type Variables = product_delete::Variables;
    type ResponseData = product_delete::ResponseData;

    fn build_query(variables: Self::Variables) -> QueryBody<Self::Variables> {
        QueryBody {
            variables,
            query: PRODUCT_DELETE_QUERY,
            operation_name: "ProductDelete",
        }
    }
}

const PRODUCT_DELETE_QUERY: &str = concat!(
    "mutation ProductDelete($input: ProductDeleteInput!) {\n",
    "  productDelete(input: $input) {\n",
    "    deletedProductId\n",
    "    userErrors {\n",
    "      field\n",
    "      message\n",
    "    }\n",
    "  }\n",
    "}\n",
);
