//! # Commands Module
//!
//! Every operation the outer controller layer can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (exports)
//! ├── cart.rs      ◄─── Shopper cart manipulation
//! ├── discount.rs  ◄─── Merchant discount CRUD
//! └── item.rs      ◄─── Merchant item CRUD
//! ```
//!
//! ## State Injection
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the cart
//! fn clear_cart(cart: &CartState)
//!
//! // Needs catalog and cart
//! fn add_to_cart(catalog: &CatalogState, cart: &CartState, item_id: &str)
//!
//! // Merchant side: catalog plus who is acting
//! fn create_discount(catalog: &CatalogState, scope: &MerchantScope, params: &DiscountParams)
//! ```
//!
//! Identifiers arrive as strings and are parsed into canonical ids before
//! anything else happens.

pub mod cart;
pub mod discount;
pub mod item;
