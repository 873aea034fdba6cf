//! # Catalog Store
//!
//! Shared in-memory tables and the handle that hands out repositories.
//!
//! ## Sharing Model
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Catalog (Clone)                                                        │
//! │     │                                                                   │
//! │     └── Arc<RwLock<Tables>> ◄── shared by every clone and repository    │
//! │            ├── merchants: HashMap<MerchantId, Merchant>                 │
//! │            ├── items:     HashMap<ItemId, Item>                         │
//! │            └── discounts: HashMap<DiscountId, Discount>                 │
//! │                                                                         │
//! │  Pricing reads take the read lock per lookup and return owned copies.   │
//! │  Merchant mutations take the write lock for the whole change.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use storefront_core::{
    CatalogLookup, CoreError, CoreResult, Discount, DiscountId, Item, ItemId, Merchant, MerchantId,
};

use crate::error::{CatalogError, CatalogResult};
use crate::repository::{DiscountRepository, ItemRepository, MerchantRepository};

/// The raw record tables.
#[derive(Debug, Default)]
pub(crate) struct Tables {
    pub(crate) merchants: HashMap<MerchantId, Merchant>,
    pub(crate) items: HashMap<ItemId, Item>,
    pub(crate) discounts: HashMap<DiscountId, Discount>,
}

impl Tables {
    pub(crate) fn discounts_of(&self, merchant_id: MerchantId) -> Vec<Discount> {
        let mut discounts: Vec<Discount> = self
            .discounts
            .values()
            .filter(|d| d.merchant_id == merchant_id)
            .cloned()
            .collect();
        discounts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        discounts
    }
}

/// Cloneable handle over the shared catalog tables.
///
/// ## Usage
/// ```rust
/// use storefront_catalog::Catalog;
///
/// let catalog = Catalog::new();
/// assert!(catalog.merchants().list().unwrap().is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    tables: Arc<RwLock<Tables>>,
}

impl Catalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Catalog::default()
    }

    pub(crate) fn from_tables(tables: Tables) -> Self {
        Catalog {
            tables: Arc::new(RwLock::new(tables)),
        }
    }

    // =========================================================================
    // Repository Access
    // =========================================================================

    pub fn merchants(&self) -> MerchantRepository {
        MerchantRepository::new(self.clone())
    }

    pub fn items(&self) -> ItemRepository {
        ItemRepository::new(self.clone())
    }

    pub fn discounts(&self) -> DiscountRepository {
        DiscountRepository::new(self.clone())
    }

    // =========================================================================
    // Lock Helpers
    // =========================================================================

    pub(crate) fn read(&self) -> CatalogResult<RwLockReadGuard<'_, Tables>> {
        self.tables.read().map_err(|_| CatalogError::Poisoned)
    }

    pub(crate) fn write(&self) -> CatalogResult<RwLockWriteGuard<'_, Tables>> {
        self.tables.write().map_err(|_| CatalogError::Poisoned)
    }
}

/// The cart's view of the catalog.
///
/// Inactive items are still returned: a line already in a cart keeps
/// pricing until the shopper removes it.
impl CatalogLookup for Catalog {
    fn find_item(&self, id: ItemId) -> CoreResult<Item> {
        let tables = self.read()?;
        tables
            .items
            .get(&id)
            .cloned()
            .ok_or(CoreError::ItemNotFound(id))
    }

    fn merchant_discounts(&self, merchant_id: MerchantId) -> CoreResult<Vec<Discount>> {
        let tables = self.read()?;
        if !tables.merchants.contains_key(&merchant_id) {
            return Err(CoreError::MerchantNotFound(merchant_id));
        }
        Ok(tables.discounts_of(merchant_id))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
