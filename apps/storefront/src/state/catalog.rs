//! # Catalog State
//!
//! Wraps the shared [`Catalog`] for use in commands.
//!
//! ## Usage in Commands
//! ```rust,ignore
//! pub fn list_discounts(
//!     catalog: &CatalogState,
//!     scope: MerchantScope,
//! ) -> Result<Vec<Discount>, ApiError> {
//!     Ok(catalog.inner().discounts().list_for_merchant(scope.merchant_id())?)
//! }
//! ```

use storefront_catalog::Catalog;
use tracing::info;

use crate::error::ApiError;
use crate::state::ConfigState;

/// Wrapper around `Catalog` for command state.
#[derive(Debug, Clone, Default)]
pub struct CatalogState {
    catalog: Catalog,
}

impl CatalogState {
    pub fn new(catalog: Catalog) -> Self {
        CatalogState { catalog }
    }

    /// Loads the configured snapshot, or starts empty when none is set.
    pub fn from_config(config: &ConfigState) -> Result<Self, ApiError> {
        match &config.catalog_path {
            Some(path) => Ok(CatalogState::new(Catalog::load(path)?)),
            None => {
                info!("No catalog snapshot configured, starting empty");
                Ok(CatalogState::default())
            }
        }
    }

    /// Returns a reference to the inner Catalog.
    pub fn inner(&self) -> &Catalog {
        &self.catalog
    }
}
