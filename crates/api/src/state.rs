//! Shared handler state.

use holocron_core::CatalogStore;

/// Application state.
#[derive(Clone)]
pub struct AppState {
    /// Catalog services.
    pub store: CatalogStore,
}

impl AppState {
    /// Wrap a catalog store for the router.
    #[must_use]
    pub const fn new(store: CatalogStore) -> Self {
        Self { store }
    }
}
