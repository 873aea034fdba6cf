//! # Catalog Lookup
//!
//! The seam between the pure cart and whatever stores items and discounts.
//!
//! ```text
//! Cart::subtotal(catalog, item_id)
//!      │
//!      ├── catalog.find_item(item_id)               → Item | ItemNotFound
//!      └── catalog.merchant_discounts(merchant_id)  → Vec<Discount>
//! ```
//!
//! Implementations hand out owned snapshots; the cart never holds on to
//! them between calls.

use crate::error::CoreResult;
use crate::types::{Discount, Item, ItemId, MerchantId};

/// Read-only access to catalog records needed for pricing.
pub trait CatalogLookup {
    /// Returns the current item record, or [`crate::CoreError::ItemNotFound`].
    fn find_item(&self, id: ItemId) -> CoreResult<Item>;

    /// Returns every discount the merchant currently offers (any order).
    fn merchant_discounts(&self, merchant_id: MerchantId) -> CoreResult<Vec<Discount>>;
}

impl<T: CatalogLookup + ?Sized> CatalogLookup for &T {
    fn find_item(&self, id: ItemId) -> CoreResult<Item> {
        (**self).find_item(id)
    }

    fn merchant_discounts(&self, merchant_id: MerchantId) -> CoreResult<Vec<Discount>> {
        (**self).merchant_discounts(merchant_id)
    }
}
