//! Application state shared across handlers.

use std::sync::Arc;

use autoparts_core::Catalog;

use crate::cart_store::{CartStore, MAX_CARTS};
use crate::config::StorefrontConfig;
use crate::content::{ContentError, ContentStore};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides read-only access to
/// the configuration, the product catalog and the information panels, plus
/// the cart store. Carts are reached through the cart id in the session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    content: ContentStore,
    carts: CartStore,
}

impl AppState {
    /// Create a new application state with the store's product range.
    ///
    /// # Errors
    ///
    /// Returns an error if the information panels cannot be loaded from
    /// `config.content_dir`.
    pub fn new(config: StorefrontConfig) -> Result<Self, ContentError> {
        let content = ContentStore::load(&config.content_dir)?;
        Ok(Self::with_catalog(config, Catalog::default(), content))
    }

    /// Create a state from explicit parts.
    #[must_use]
    pub fn with_catalog(config: StorefrontConfig, catalog: Catalog, content: ContentStore) -> Self {
        let carts = CartStore::new(config.session_idle(), MAX_CARTS);
        Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                content,
                carts,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the information panels.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }

    /// Get a reference to the cart store.
    #[must_use]
    pub fn carts(&self) -> &CartStore {
        &self.inner.carts
    }
}
