//! # Cart State
//!
//! The shopper's session cart.
//!
//! ## Thread Safety
//! The cart sits behind `Arc<Mutex<Cart>>`. Commands for one session may run
//! concurrently and each one must see the cart a previous one left behind.
//!
//! ## Session Round Trip
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  request ──► CartState::from_session(json) ──► command ──► to_session() │
//! │                    │                                          │         │
//! │              keys parsed into                           JSON object     │
//! │              canonical ItemIds                          keyed by id     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use storefront_core::Cart;
use tracing::debug;

use crate::error::ApiError;

/// Session-owned cart state.
#[derive(Debug, Clone, Default)]
pub struct CartState {
    cart: Arc<Mutex<Cart>>,
}

impl CartState {
    /// Creates a new empty cart state.
    pub fn new() -> Self {
        CartState::default()
    }

    pub fn from_cart(cart: Cart) -> Self {
        CartState {
            cart: Arc::new(Mutex::new(cart)),
        }
    }

    /// Restores a cart stored by [`CartState::to_session`].
    ///
    /// Keys are normalized, so a session written by an older client with
    /// differently formatted ids still lands on one line per item.
    pub fn from_session(json: &str) -> Result<Self, ApiError> {
        let raw: HashMap<String, u32> = serde_json::from_str(json)
            .map_err(|e| ApiError::cart(format!("Unreadable session cart: {}", e)))?;
        let cart = Cart::from_raw(raw)?;
        debug!(lines = cart.line_count(), "Restored session cart");
        Ok(CartState::from_cart(cart))
    }

    /// Serializes the cart for the session store.
    pub fn to_session(&self) -> Result<String, ApiError> {
        self.with_cart(|cart| serde_json::to_string(cart))?
            .map_err(|e| ApiError::internal(format!("Failed to store session cart: {}", e)))
    }

    /// Executes a function with read access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let count = cart_state.with_cart(|cart| cart.total_item_count())?;
    /// ```
    pub fn with_cart<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&Cart) -> R,
    {
        let cart = self
            .cart
            .lock()
            .map_err(|_| ApiError::internal("Cart state poisoned"))?;
        Ok(f(&cart))
    }

    /// Executes a function with write access to the cart.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// cart_state.with_cart_mut(|cart| cart.add_item(item_id))?;
    /// ```
    pub fn with_cart_mut<F, R>(&self, f: F) -> Result<R, ApiError>
    where
        F: FnOnce(&mut Cart) -> R,
    {
        let mut cart = self
            .cart
            .lock()
            .map_err(|_| ApiError::internal("Cart state poisoned"))?;
        Ok(f(&mut cart))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storefront_core::ItemId;

    #[test]
    fn test_mutation_is_visible_to_later_reads() {
        let state = CartState::new();
        let id = ItemId::new();

        state.with_cart_mut(|c| c.add_item(id)).unwrap();
        state.with_cart_mut(|c| c.add_item(id)).unwrap();

        assert_eq!(state.with_cart(|c| c.quantity(id)).unwrap(), 2);
    }

    #[test]
    fn test_clones_share_one_cart() {
        let state = CartState::new();
        let other = state.clone();
        let id = ItemId::new();

        other.with_cart_mut(|c| c.add_item(id)).unwrap();
        assert!(!state.with_cart(|c| c.is_zero(id)).unwrap());
    }

    #[test]
    fn test_session_round_trip_normalizes_keys() {
        let id = ItemId::new();
        let upper = id.to_string().to_uppercase();
        let json = format!(r#"{{"{}": 2, " {} ": 3}}"#, upper, id);

        let state = CartState::from_session(&json).unwrap();
        assert_eq!(state.with_cart(|c| c.quantity(id)).unwrap(), 5);

        let stored = state.to_session().unwrap();
        assert_eq!(stored, format!(r#"{{"{}":5}}"#, id));
    }

    #[test]
    fn test_bad_session_is_an_error() {
        assert!(CartState::from_session("[1, 2]").is_err());

        let err = CartState::from_session(r#"{"not-an-id": 1}"#).unwrap_err();
        assert_eq!(err.code, crate::error::ErrorCode::ValidationError);
    }
}
