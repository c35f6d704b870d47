//! UI state models for the admin panel.
//!
//! The browser renders with a prebuilt component library; these types are
//! the state those components bind to, kept transport-agnostic so the
//! transitions can be exercised without a running server.

pub mod products_page;

pub use products_page::{ModalState, PageRequest, ProductDraft, ProductRow, ProductsPage};
