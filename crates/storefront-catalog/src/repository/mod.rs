//! # Repository Module
//!
//! Record access for the storefront catalog.
//!
//! ## Repository Pattern
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Repository Layout                                    │
//! │                                                                         │
//! │  App command                                                            │
//! │       │                                                                 │
//! │       │  catalog.discounts().create(&scope, &params)                    │
//! │       ▼                                                                 │
//! │  DiscountRepository                                                     │
//! │  ├── create(&self, scope, params)                                       │
//! │  ├── update(&self, scope, id, params)                                   │
//! │  ├── delete(&self, scope, id)                                           │
//! │  └── list_for_merchant(&self, merchant_id)                              │
//! │       │                                                                 │
//! │       │  validate → write lock → tables                                 │
//! │       ▼                                                                 │
//! │  Catalog tables (store.rs)                                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Available Repositories
//!
//! - [`MerchantRepository`] - Merchant registration and lookup
//! - [`ItemRepository`] - Item CRUD and activation
//! - [`DiscountRepository`] - Quantity-break discount CRUD

pub mod discount;
pub mod item;
pub mod merchant;

pub use discount::DiscountRepository;
pub use item::ItemRepository;
pub use merchant::{MerchantParams, MerchantRepository};

use storefront_core::MerchantId;

/// The merchant on whose behalf a mutation runs.
///
/// Every create, update and delete takes one explicitly. A record owned by
/// a different merchant is reported as not found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MerchantScope {
    merchant_id: MerchantId,
}

impl MerchantScope {
    pub fn new(merchant_id: MerchantId) -> Self {
        MerchantScope { merchant_id }
    }

    #[inline]
    pub fn merchant_id(&self) -> MerchantId {
        self.merchant_id
    }

    /// Whether a record owned by `owner` is visible to this scope.
    #[inline]
    pub fn owns(&self, owner: MerchantId) -> bool {
        self.merchant_id == owner
    }
}
