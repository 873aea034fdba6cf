//! # Item Repository
//!
//! Merchant-scoped item CRUD.
//!
//! ## Update Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  update(scope, id, params)                                              │
//! │       │                                                                 │
//! │       ├── validate_item(params) ──✗──► Validation (record untouched)    │
//! │       │                                                                 │
//! │       ├── write lock                                                    │
//! │       ├── item exists and scope owns it? ──✗──► NotFound                │
//! │       │                                                                 │
//! │       └── apply draft, bump updated_at                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::Utc;
use tracing::{debug, warn};

use storefront_core::validation::{validate_item, ItemDraft, ItemParams};
use storefront_core::{Item, ItemId, MerchantId};

use crate::error::{CatalogError, CatalogResult};
use crate::repository::MerchantScope;
use crate::store::Catalog;

/// Repository for item records.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    catalog: Catalog,
}

impl ItemRepository {
    pub fn new(catalog: Catalog) -> Self {
        ItemRepository { catalog }
    }

    /// Validates and stores a new, active item for the scoped merchant.
    pub fn create(&self, scope: &MerchantScope, params: &ItemParams) -> CatalogResult<Item> {
        let draft = Self::validated(params)?;

        let mut tables = self.catalog.write()?;
        if !tables.merchants.contains_key(&scope.merchant_id()) {
            return Err(CatalogError::not_found("Merchant", scope.merchant_id()));
        }

        let now = Utc::now();
        let item = Item {
            id: ItemId::new(),
            merchant_id: scope.merchant_id(),
            name: draft.name,
            description: draft.description,
            price_cents: draft.price_cents,
            inventory: draft.inventory,
            image: draft.image,
            active: true,
            created_at: now,
            updated_at: now,
        };
        tables.items.insert(item.id, item.clone());

        debug!(
            item_id = %item.id,
            merchant_id = %item.merchant_id,
            price_cents = item.price_cents,
            inventory = item.inventory,
            "Created item"
        );
        Ok(item)
    }

    /// Replaces an item's editable fields.
    ///
    /// A rejected submission leaves the stored item exactly as it was.
    pub fn update(
        &self,
        scope: &MerchantScope,
        id: ItemId,
        params: &ItemParams,
    ) -> CatalogResult<Item> {
        let draft = Self::validated(params)?;

        let mut tables = self.catalog.write()?;
        let item = tables
            .items
            .get_mut(&id)
            .filter(|item| scope.owns(item.merchant_id))
            .ok_or_else(|| CatalogError::not_found("Item", id))?;

        item.name = draft.name;
        item.description = draft.description;
        item.price_cents = draft.price_cents;
        item.inventory = draft.inventory;
        item.image = draft.image;
        item.updated_at = Utc::now();

        debug!(item_id = %id, price_cents = item.price_cents, "Updated item");
        Ok(item.clone())
    }

    /// Flips whether the item is for sale and returns the new state.
    pub fn toggle_active(&self, scope: &MerchantScope, id: ItemId) -> CatalogResult<Item> {
        let mut tables = self.catalog.write()?;
        let item = tables
            .items
            .get_mut(&id)
            .filter(|item| scope.owns(item.merchant_id))
            .ok_or_else(|| CatalogError::not_found("Item", id))?;

        item.active = !item.active;
        item.updated_at = Utc::now();

        debug!(item_id = %id, active = item.active, "Toggled item");
        Ok(item.clone())
    }

    /// Deletes an item and returns the removed record.
    pub fn delete(&self, scope: &MerchantScope, id: ItemId) -> CatalogResult<Item> {
        let mut tables = self.catalog.write()?;
        match tables.items.get(&id) {
            Some(item) if scope.owns(item.merchant_id) => {}
            _ => return Err(CatalogError::not_found("Item", id)),
        }

        let removed = tables
            .items
            .remove(&id)
            .ok_or_else(|| CatalogError::not_found("Item", id))?;

        debug!(item_id = %id, "Deleted item");
        Ok(removed)
    }

    /// Gets an item by ID.
    pub fn get(&self, id: ItemId) -> CatalogResult<Option<Item>> {
        Ok(self.catalog.read()?.items.get(&id).cloned())
    }

    /// Lists a merchant's items, oldest first.
    pub fn list_for_merchant(&self, merchant_id: MerchantId) -> CatalogResult<Vec<Item>> {
        let tables = self.catalog.read()?;
        let mut items: Vec<Item> = tables
            .items
            .values()
            .filter(|item| item.merchant_id == merchant_id)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    /// Lists items currently for sale across every merchant.
    pub fn list_active(&self) -> CatalogResult<Vec<Item>> {
        let tables = self.catalog.read()?;
        let mut items: Vec<Item> = tables
            .items
            .values()
            .filter(|item| item.active)
            .cloned()
            .collect();
        items.sort_by(|a, b| a.name.cmp(&b.name).then(a.id.cmp(&b.id)));
        Ok(items)
    }

    fn validated(params: &ItemParams) -> CatalogResult<ItemDraft> {
        validate_item(params).map_err(|errors| {
            warn!(errors = %errors, "Rejected item submission");
            CatalogError::Validation(errors)
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
