//! Products page state model.
//!
//! Holds the product list, pagination cursor, modal state, and in-flight
//! flags. The UI drives the user-triggered transitions (open/cancel/
//! confirm) and feeds responses back through the `*_succeeded`/`*_failed`
//! transitions. The in-flight flags gate this state machine's own
//! transitions; they do not serialize HTTP requests a caller fires past
//! the disabled controls.

use serde::Serialize;

use merchdesk_core::ProductId;

use crate::shopify::types::{Product, ProductConnection};

/// Draft of an edit in progress.
///
/// The status is a plain string: the editor submits whatever the user
/// picked and upstream owns validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDraft {
    pub id: ProductId,
    pub title: String,
    pub status: String,
    pub tags: Vec<String>,
}

impl From<&Product> for ProductDraft {
    fn from(product: &Product) -> Self {
        Self {
            id: product.id.clone(),
            title: product.title.clone(),
            status: product.status.as_str().to_string(),
            tags: product.tags.clone(),
        }
    }
}

/// Cursor argument for the next page fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageRequest {
    /// Opaque cursor to send, absent on the first fetch.
    pub after: Option<String>,
}

/// Modal state for the product-level dialogs.
///
/// Update flow: `Closed -> Editing -> Saving -> Closed`.
/// Delete flow: `Closed -> ConfirmingDelete -> Deleting -> Closed`.
/// Failures return to the open state with the message kept in
/// [`ProductsPage::last_error`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModalState {
    Closed,
    Editing(ProductDraft),
    Saving(ProductDraft),
    ConfirmingDelete(ProductId),
    Deleting(ProductId),
}

/// Product row view for the list table.
#[derive(Debug, Clone, Serialize)]
pub struct ProductRow {
    pub id: String,
    pub title: String,
    pub handle: String,
    pub status: String,
    pub price: String,
    pub image_url: Option<String>,
}

impl From<&Product> for ProductRow {
    fn from(product: &Product) -> Self {
        let price = product
            .variant
            .as_ref()
            .map_or_else(|| "$0.00".to_string(), |v| format!("${:.2}", v.price.amount));

        Self {
            id: product.id.to_string(),
            title: product.title.clone(),
            handle: product.handle.clone(),
            status: product.status.label().to_string(),
            price,
            image_url: product.featured_image.as_ref().map(|i| i.url.clone()),
        }
    }
}

/// State for the products page.
#[derive(Debug)]
pub struct ProductsPage {
    products: Vec<Product>,
    end_cursor: Option<String>,
    has_next_page: bool,
    loading: bool,
    modal: ModalState,
    last_error: Option<String>,
}

impl Default for ProductsPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductsPage {
    /// Fresh page state: nothing loaded, first fetch allowed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            products: Vec::new(),
            end_cursor: None,
            has_next_page: true,
            loading: false,
            modal: ModalState::Closed,
            last_error: None,
        }
    }

    // =========================================================================
    // Pagination: idle -> loading -> idle
    // =========================================================================

    /// Start fetching the next page.
    ///
    /// Returns the request to issue, or `None` when the fetch must not
    /// start (already loading, or the upstream said there is nothing more).
    pub fn begin_load_more(&mut self) -> Option<PageRequest> {
        if self.loading || !self.has_next_page {
            return None;
        }

        self.loading = true;
        Some(PageRequest {
            after: self.end_cursor.clone(),
        })
    }

    /// Apply a successfully fetched page.
    pub fn page_loaded(&mut self, page: ProductConnection) {
        self.products.extend(page.products);
        self.has_next_page = page.page_info.has_next_page;
        self.end_cursor = page.page_info.end_cursor;
        self.loading = false;
        self.last_error = None;
    }

    /// Record a failed page fetch.
    pub fn page_failed(&mut self, message: impl Into<String>) {
        self.loading = false;
        self.last_error = Some(message.into());
    }

    // =========================================================================
    // Update modal: Closed -> Editing -> Saving -> Closed
    // =========================================================================

    /// Open the editor for a listed product. No-op unless the modal is
    /// closed and the product is on the page.
    pub fn open_editor(&mut self, id: &ProductId) -> bool {
        if self.modal != ModalState::Closed {
            return false;
        }

        match self.products.iter().find(|p| &p.id == id) {
            Some(product) => {
                self.modal = ModalState::Editing(ProductDraft::from(product));
                true
            }
            None => false,
        }
    }

    /// Mutable access to the draft while editing.
    pub fn draft_mut(&mut self) -> Option<&mut ProductDraft> {
        match &mut self.modal {
            ModalState::Editing(draft) => Some(draft),
            _ => None,
        }
    }

    /// Submit the edit. Returns the draft to ship to the backend, or
    /// `None` when there is no edit in progress.
    pub fn begin_save(&mut self) -> Option<ProductDraft> {
        match &self.modal {
            ModalState::Editing(draft) => {
                let draft = draft.clone();
                self.modal = ModalState::Saving(draft.clone());
                Some(draft)
            }
            _ => None,
        }
    }

    /// Apply a successful save: the row is patched and the modal closes.
    pub fn save_succeeded(&mut self, updated: Product) {
        if matches!(self.modal, ModalState::Saving(_)) {
            if let Some(row) = self.products.iter_mut().find(|p| p.id == updated.id) {
                *row = updated;
            }
            self.modal = ModalState::Closed;
            self.last_error = None;
        }
    }

    /// Record a failed save: the modal reopens on the same draft with the
    /// failure surfaced.
    pub fn save_failed(&mut self, message: impl Into<String>) {
        if let ModalState::Saving(draft) = &self.modal {
            let draft = draft.clone();
            self.modal = ModalState::Editing(draft);
            self.last_error = Some(message.into());
        }
    }

    // =========================================================================
    // Delete modal: Closed -> ConfirmingDelete -> Deleting -> Closed
    // =========================================================================

    /// Open the delete confirmation for a listed product.
    pub fn request_delete(&mut self, id: &ProductId) -> bool {
        if self.modal != ModalState::Closed {
            return false;
        }

        if self.products.iter().any(|p| &p.id == id) {
            self.modal = ModalState::ConfirmingDelete(id.clone());
            true
        } else {
            false
        }
    }

    /// Confirm the delete. Returns the ID to ship to the backend.
    pub fn begin_delete(&mut self) -> Option<ProductId> {
        match &self.modal {
            ModalState::ConfirmingDelete(id) => {
                let id = id.clone();
                self.modal = ModalState::Deleting(id.clone());
                Some(id)
            }
            _ => None,
        }
    }

    /// Apply a successful delete: the row is removed and the modal closes.
    pub fn delete_succeeded(&mut self, deleted_id: &ProductId) {
        if matches!(self.modal, ModalState::Deleting(_)) {
            self.products.retain(|p| &p.id != deleted_id);
            self.modal = ModalState::Closed;
            self.last_error = None;
        }
    }

    /// Record a failed delete: back to the confirmation with the failure
    /// surfaced.
    pub fn delete_failed(&mut self, message: impl Into<String>) {
        if let ModalState::Deleting(id) = &self.modal {
            let id = id.clone();
            self.modal = ModalState::ConfirmingDelete(id);
            self.last_error = Some(message.into());
        }
    }

    /// Dismiss the modal. Allowed only while no request is in flight.
    pub fn cancel_modal(&mut self) -> bool {
        match self.modal {
            ModalState::Editing(_) | ModalState::ConfirmingDelete(_) => {
                self.modal = ModalState::Closed;
                true
            }
            _ => false,
        }
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    #[must_use]
    pub fn products(&self) -> &[Product] {
        &self.products
    }

    /// Rows for the list table.
    #[must_use]
    pub fn rows(&self) -> Vec<ProductRow> {
        self.products.iter().map(ProductRow::from).collect()
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        self.loading
    }

    #[must_use]
    pub const fn has_next_page(&self) -> bool {
        self.has_next_page
    }

    #[must_use]
    pub const fn modal(&self) -> &ModalState {
        &self.modal
    }

    #[must_use]
    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
