//! # storefront-core: Pure Pricing Logic for the Storefront
//!
//! This crate is the **heart** of the storefront. It prices shopping carts
//! with quantity-break discounts as pure functions with zero I/O.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Storefront Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐    │
//! │  │              Controllers / session layer (apps/storefront)      │    │
//! │  │    add_to_cart, increment_item, create_discount, ...            │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │             ★ storefront-core (THIS CRATE) ★                    │    │
//! │  │                                                                 │    │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐    │    │
//! │  │   │   types   │  │  pricing  │  │   cart    │  │ validation│    │    │
//! │  │   │   Item    │  │  select_  │  │   Cart    │  │  discount │    │    │
//! │  │   │ Discount  │  │  discount │  │ CartQuote │  │   item    │    │    │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘    │    │
//! │  │                                                                 │    │
//! │  │   NO I/O • NO DATABASE • NO NETWORK • PURE FUNCTIONS            │    │
//! │  └─────────────────────────────┬───────────────────────────────────┘    │
//! │                                │ CatalogLookup                          │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐    │
//! │  │              storefront-catalog (records)                       │    │
//! │  └─────────────────────────────────────────────────────────────────┘    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Item, Merchant, Discount, ids)
//! - [`money`] - Money type with integer arithmetic
//! - [`pricing`] - Discount selection and discounted prices
//! - [`cart`] - The Cart aggregate
//! - [`lookup`] - The catalog collaborator trait
//! - [`validation`] - Discount and item form validation
//! - [`error`] - Domain error types
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront_core::money::Money;
//! use storefront_core::pricing::discounted_price;
//!
//! let price = Money::from_cents(1000);
//! assert_eq!(discounted_price(price, None), price);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod error;
pub mod lookup;
pub mod money;
pub mod pricing;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartQuote};
pub use error::{CoreError, CoreResult, ValidationError, ValidationErrors};
pub use lookup::CatalogLookup;
pub use money::Money;
pub use pricing::ItemQuote;
pub use types::*;
