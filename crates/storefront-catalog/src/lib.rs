//! # storefront-catalog: Catalog Records for the Storefront
//!
//! Holds merchants, items and discounts in memory and answers the cart's
//! [`storefront_core::CatalogLookup`] queries.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Data Flow                             │
//! │                                                                         │
//! │  App command (create_discount, get_cart)                                │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │                storefront-catalog (THIS CRATE)                  │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────────┐    ┌───────────────┐    ┌──────────────┐    │    │
//! │  │   │    Catalog    │    │  Repositories │    │   Snapshot   │    │    │
//! │  │   │  (store.rs)   │    │               │    │  (JSON seed) │    │    │
//! │  │   │               │    │ MerchantRepo  │    │              │    │    │
//! │  │   │ Arc<RwLock<>> │◄───│ ItemRepo      │    │ load(path)   │    │    │
//! │  │   │ CatalogLookup │    │ DiscountRepo  │    │ snapshot()   │    │    │
//! │  │   └───────────────┘    └───────────────┘    └──────────────┘    │    │
//! │  │                                                                 │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  storefront-core Cart prices against it                                 │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`store`] - The shared catalog handle
//! - [`repository`] - Merchant, item and discount repositories
//! - [`snapshot`] - JSON seed loading and export
//! - [`error`] - Catalog error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use storefront_catalog::{Catalog, MerchantScope};
//!
//! let catalog = Catalog::load("catalog.json")?;
//! let scope = MerchantScope::new(merchant_id);
//!
//! catalog.discounts().create(&scope, &params)?;
//! let total = cart.total(&catalog)?;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod repository;
pub mod snapshot;
pub mod store;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{CatalogError, CatalogResult};
pub use snapshot::CatalogSnapshot;
pub use store::Catalog;

pub use repository::{
    DiscountRepository, ItemRepository, MerchantParams, MerchantRepository, MerchantScope,
};
