//! # Cart Commands
//!
//! Shopper-side cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                         │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │                         │
//! │  │  Cart    │     │          │     │ (outer)  │                         │
//! │  └──────────┘     └──────────┘     └──────────┘                         │
//! │                        │                                                │
//! │                   add_to_cart                                           │
//! │                   increment_item  (stops at inventory)                  │
//! │                   decrement_item  (line removed at zero)                │
//! │                   remove_from_cart                                      │
//! │                        │                                                │
//! │                        ▼                                                │
//! │                   clear_cart ──────────► (back to empty)                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every command answers with the freshly priced cart, so a discount the
//! merchant edited a moment ago is already reflected.

use serde::{Deserialize, Serialize};
use tracing::debug;

use storefront_core::{Cart, CartQuote, CatalogLookup, ItemId, ItemQuote, MerchantId};

use crate::error::{ApiError, ErrorCode};
use crate::state::{CartState, CatalogState};

/// One priced cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLineResponse {
    pub item_id: ItemId,
    pub merchant_id: MerchantId,
    pub name: String,
    pub image: String,
    pub quantity: u32,
    pub unit_price_cents: i64,
    pub effective_unit_price_cents: i64,
    pub subtotal_cents: i64,
    /// Percentage off applied to this line, if a discount is met
    pub discount_percentage: Option<u8>,
    /// The "+1" button should be disabled. Also set when inventory dropped
    /// below a quantity already in the cart.
    pub limit_reached: bool,
}

impl From<ItemQuote> for CartLineResponse {
    fn from(quote: ItemQuote) -> Self {
        CartLineResponse {
            limit_reached: quote.quantity >= quote.item.inventory,
            discount_percentage: quote.applied_discount.as_ref().map(|d| d.percentage.value()),
            unit_price_cents: quote.unit_price.cents(),
            effective_unit_price_cents: quote.effective_unit_price.cents(),
            subtotal_cents: quote.subtotal.cents(),
            quantity: quote.quantity,
            item_id: quote.item.id,
            merchant_id: quote.item.merchant_id,
            name: quote.item.name,
            image: quote.item.image,
        }
    }
}

/// Cart response including lines and totals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLineResponse>,
    pub total_items: u64,
    pub total_cents: i64,
    pub savings_cents: i64,
    pub discount_applied: bool,
}

impl From<CartQuote> for CartResponse {
    fn from(quote: CartQuote) -> Self {
        CartResponse {
            lines: quote.lines.into_iter().map(CartLineResponse::from).collect(),
            total_items: quote.total_items,
            total_cents: quote.total.cents(),
            savings_cents: quote.savings.cents(),
            discount_applied: quote.discount_applied,
        }
    }
}

fn priced(catalog: &CatalogState, cart: &Cart) -> Result<CartResponse, ApiError> {
    Ok(CartResponse::from(cart.quote(catalog.inner())?))
}

fn parse_item_id(item_id: &str) -> Result<ItemId, ApiError> {
    Ok(item_id.parse::<ItemId>()?)
}

/// Gets the current cart, priced against the catalog as it is now.
pub fn get_cart(catalog: &CatalogState, cart: &CartState) -> Result<CartResponse, ApiError> {
    debug!("get_cart command");
    cart.with_cart(|c| priced(catalog, c))?
}

/// Adds one unit of an item to the cart.
///
/// ## Behavior
/// - Item already in cart: quantity increases by one
/// - Item not in cart: added with quantity one
/// - Inactive items are refused
pub fn add_to_cart(
    catalog: &CatalogState,
    cart: &CartState,
    item_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, "add_to_cart command");
    let id = parse_item_id(item_id)?;

    let item = catalog
        .inner()
        .items()
        .get(id)?
        .ok_or_else(|| ApiError::not_found("Item", id))?;

    if !item.active {
        return Err(ApiError::validation(format!(
            "{} is not available for sale",
            item.name
        )));
    }

    cart.with_cart_mut(|c| {
        c.add_item(id);
        priced(catalog, c)
    })?
}

/// Adds one more unit of an item already being bought.
///
/// ## Errors
/// - `LIMIT_REACHED` when the line already holds every unit in stock
pub fn increment_item(
    catalog: &CatalogState,
    cart: &CartState,
    item_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, "increment_item command");
    let id = parse_item_id(item_id)?;

    cart.with_cart_mut(|c| {
        let item = catalog.inner().find_item(id)?;
        if c.quantity(id) >= item.inventory {
            return Err(ApiError::new(
                ErrorCode::LimitReached,
                "Not enough inventory to add another",
            ));
        }
        c.increment(id);
        priced(catalog, c)
    })?
}

/// Takes one unit off a line, dropping the line when it reaches zero.
pub fn decrement_item(
    catalog: &CatalogState,
    cart: &CartState,
    item_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, "decrement_item command");
    let id = parse_item_id(item_id)?;

    cart.with_cart_mut(|c| {
        if c.decrement(id)? == 0 {
            c.remove_item(id);
        }
        priced(catalog, c)
    })?
}

/// Removes a whole line from the cart.
pub fn remove_from_cart(
    catalog: &CatalogState,
    cart: &CartState,
    item_id: &str,
) -> Result<CartResponse, ApiError> {
    debug!(item_id = %item_id, "remove_from_cart command");
    let id = parse_item_id(item_id)?;

    cart.with_cart_mut(|c| {
        c.remove_item(id)
            .ok_or_else(|| ApiError::cart(format!("Item {} is not in the cart", id)))?;
        priced(catalog, c)
    })?
}

/// Empties the cart.
pub fn clear_cart(cart: &CartState) -> Result<CartResponse, ApiError> {
    debug!("clear_cart command");
    cart.with_cart_mut(|c| {
        c.clear();
        CartResponse::from(CartQuote::default())
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{bike_shop, BikeShop};
    use storefront_core::validation::ItemParams;

    fn with_rim(shop: &BikeShop, quantity: u32) -> CartState {
        CartState::from_cart(Cart::from_contents([(shop.rim.id, quantity)]))
    }

    #[test]
    fn test_get_cart_prices_lines() {
        let shop = bike_shop();
        let cart = CartState::from_cart(Cart::from_contents([
            (shop.rim.id, 5),
            (shop.grips.id, 4),
        ]));

        let response = get_cart(&shop.catalog, &cart).unwrap();
        assert_eq!(response.total_cents, 10500);
        assert_eq!(response.total_items, 9);
        assert!(response.discount_applied);

        let rim = response
            .lines
            .iter()
            .find(|l| l.item_id == shop.rim.id)
            .unwrap();
        assert_eq!(rim.effective_unit_price_cents, 500);
        assert_eq!(rim.subtotal_cents, 2500);
        assert_eq!(rim.discount_percentage, Some(50));
    }

    #[test]
    fn test_add_to_cart() {
        let shop = bike_shop();
        let cart = CartState::new();

        add_to_cart(&shop.catalog, &cart, &shop.rim.id.to_string()).unwrap();
        let response = add_to_cart(&shop.catalog, &cart, &shop.rim.id.to_string()).unwrap();

        assert_eq!(response.lines.len(), 1);
        assert_eq!(response.lines[0].quantity, 2);
        assert_eq!(response.total_cents, 2000);
    }

    #[test]
    fn test_add_inactive_item_refused() {
        let shop = bike_shop();
        shop.catalog
            .inner()
            .items()
            .toggle_active(&shop.scope, shop.rim.id)
            .unwrap();

        let cart = CartState::new();
        let err = add_to_cart(&shop.catalog, &cart, &shop.rim.id.to_string()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
        assert!(cart.with_cart(|c| c.is_empty()).unwrap());
    }

    #[test]
    fn test_add_unknown_or_malformed_id() {
        let shop = bike_shop();
        let cart = CartState::new();

        let err = add_to_cart(&shop.catalog, &cart, &ItemId::new().to_string()).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);

        let err = add_to_cart(&shop.catalog, &cart, "42").unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationError);
    }

    #[test]
    fn test_increment_stops_at_inventory() {
        let shop = bike_shop();
        let cart = with_rim(&shop, shop.rim.inventory - 1);

        let response = increment_item(&shop.catalog, &cart, &shop.rim.id.to_string()).unwrap();
        assert!(response.lines[0].limit_reached);

        let err = increment_item(&shop.catalog, &cart, &shop.rim.id.to_string()).unwrap_err();
        assert_eq!(err.code, ErrorCode::LimitReached);
        assert_eq!(
            cart.with_cart(|c| c.quantity(shop.rim.id)).unwrap(),
            shop.rim.inventory
        );
    }

    #[test]
    fn test_line_over_reduced_inventory_is_at_limit() {
        let shop = bike_shop();
        let cart = with_rim(&shop, 5);
        shop.catalog
            .inner()
            .items()
            .update(
                &shop.scope,
                shop.rim.id,
                &ItemParams {
                    name: Some(shop.rim.name.clone()),
                    description: Some(shop.rim.description.clone()),
                    price_cents: Some(shop.rim.price_cents.to_string()),
                    inventory: Some("2".to_string()),
                    image: Some(shop.rim.image.clone()),
                },
            )
            .unwrap();

        let response = get_cart(&shop.catalog, &cart).unwrap();
        assert!(response.lines[0].limit_reached);

        let err = increment_item(&shop.catalog, &cart, &shop.rim.id.to_string()).unwrap_err();
        assert_eq!(err.code, ErrorCode::LimitReached);
        assert_eq!(cart.with_cart(|c| c.quantity(shop.rim.id)).unwrap(), 5);
    }

    #[test]
    fn test_decrement_crosses_discount_threshold() {
        let shop = bike_shop();
        let cart = with_rim(&shop, 5);

        let response = decrement_item(&shop.catalog, &cart, &shop.rim.id.to_string()).unwrap();
        assert_eq!(response.total_cents, 4000);
        assert!(!response.discount_applied);
    }

    #[test]
    fn test_decrement_to_zero_removes_line() {
        let shop = bike_shop();
        let cart = with_rim(&shop, 1);

        let response = decrement_item(&shop.catalog, &cart, &shop.rim.id.to_string()).unwrap();
        assert!(response.lines.is_empty());
        assert!(cart.with_cart(|c| c.is_empty()).unwrap());

        let err = decrement_item(&shop.catalog, &cart, &shop.rim.id.to_string()).unwrap_err();
        assert_eq!(err.code, ErrorCode::CartError);
    }

    #[test]
    fn test_remove_and_clear() {
        let shop = bike_shop();
        let cart = CartState::from_cart(Cart::from_contents([
            (shop.rim.id, 2),
            (shop.grips.id, 1),
        ]));

        let response = remove_from_cart(&shop.catalog, &cart, &shop.rim.id.to_string()).unwrap();
        assert_eq!(response.lines.len(), 1);
        assert!(remove_from_cart(&shop.catalog, &cart, &shop.rim.id.to_string()).is_err());

        let response = clear_cart(&cart).unwrap();
        assert!(response.lines.is_empty());
        assert_eq!(response.total_cents, 0);
    }

    #[test]
    fn test_deleted_item_surfaces_not_found() {
        let shop = bike_shop();
        let cart = with_rim(&shop, 2);
        shop.catalog
            .inner()
            .items()
            .delete(&shop.scope, shop.rim.id)
            .unwrap();

        let err = get_cart(&shop.catalog, &cart).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
    }

    #[test]
    fn test_response_is_camel_case() {
        let shop = bike_shop();
        let cart = with_rim(&shop, 5);
        let json = serde_json::to_value(get_cart(&shop.catalog, &cart).unwrap()).unwrap();

        assert_eq!(json["totalCents"], 2500);
        assert_eq!(json["discountApplied"], true);
        assert_eq!(json["lines"][0]["effectiveUnitPriceCents"], 500);
    }
}
