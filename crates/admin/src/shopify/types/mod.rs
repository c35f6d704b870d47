//! Domain types returned by the Shopify Admin API client.

pub mod common;
pub mod product;

pub use common::{Image, PageInfo, UserError};
pub use product::{Product, ProductConnection, ProductVariant};
