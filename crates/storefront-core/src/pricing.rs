//! # Pricing Module
//!
//! Discount selection and discounted prices.
//!
//! ## Quantity Breaks
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Merchant discounts            Cart quantity of one item: 6             │
//! │  ──────────────────                                                     │
//! │  buy 5+  → 50% off   ✔ eligible (5 ≤ 6)                                 │
//! │  buy 5+  → 25% off   ✔ eligible (5 ≤ 6)                                 │
//! │  buy 10+ → 90% off   ✘ threshold not met                                │
//! │                                                                         │
//! │  select_discount → 50% off (max percentage among eligible)              │
//! │  discounted_price($10.00, 50%) → $5.00                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Everything here is a pure function of its inputs. The effective price is
//! recomputed for every quote, so a quantity change can never leave a stale
//! discounted price behind.

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{Discount, Item};

/// Picks the most generous discount whose threshold `quantity` meets.
///
/// Among discounts with `discount.quantity <= quantity`, returns the one with
/// the highest percentage. When several share the highest percentage the
/// first of them (in slice order) wins. Returns `None` when no threshold is
/// met.
pub fn select_discount(discounts: &[Discount], quantity: u32) -> Option<&Discount> {
    discounts
        .iter()
        .filter(|d| d.is_met_by(quantity))
        .fold(None, |best: Option<&Discount>, d| match best {
            Some(b) if b.percentage >= d.percentage => Some(b),
            _ => Some(d),
        })
}

/// Unit price after `discount`, or `price` itself when there is none.
///
/// Rounds down to a whole cent (see [`Money::percent_off`]).
pub fn discounted_price(price: Money, discount: Option<&Discount>) -> Money {
    match discount {
        Some(d) => price.percent_off(d.percentage),
        None => price,
    }
}

/// Whether any discount threshold is met by `quantity`.
pub fn discount_applies(discounts: &[Discount], quantity: u32) -> bool {
    discounts.iter().any(|d| d.is_met_by(quantity))
}

/// Priced view of one cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct ItemQuote {
    pub item: Item,
    pub quantity: u32,
    /// Plain catalog price.
    pub unit_price: Money,
    /// Price actually charged per unit at this quantity.
    pub effective_unit_price: Money,
    /// Discount behind `effective_unit_price`, if one applies.
    pub applied_discount: Option<Discount>,
    /// `effective_unit_price × quantity`.
    pub subtotal: Money,
    /// Amount saved on this line compared to the plain price.
    pub savings: Money,
}

impl ItemQuote {
    pub fn is_discounted(&self) -> bool {
        self.applied_discount.is_some()
    }
}

/// Prices `quantity` units of `item` against its merchant's `discounts`.
///
/// Fails with [`CoreError::AmountOverflow`] when the line leaves the cent
/// range.
pub fn quote_item(item: &Item, discounts: &[Discount], quantity: u32) -> CoreResult<ItemQuote> {
    let discount = select_discount(discounts, quantity);
    let unit_price = item.price();
    let effective_unit_price = discounted_price(unit_price, discount);

    let overflow = || CoreError::AmountOverflow { item_id: item.id };
    let full = unit_price
        .checked_multiply_quantity(quantity)
        .ok_or_else(overflow)?;
    let subtotal = effective_unit_price
        .checked_multiply_quantity(quantity)
        .ok_or_else(overflow)?;
    let savings = Money::from_cents(
        full.cents()
            .checked_sub(subtotal.cents())
            .ok_or_else(overflow)?,
    );

    tracing::trace!(
        item_id = %item.id,
        quantity,
        discount_id = ?discount.map(|d| d.id),
        "quoted item"
    );

    Ok(ItemQuote {
        item: item.clone(),
        quantity,
        unit_price,
        effective_unit_price,
        applied_discount: discount.cloned(),
        subtotal,
        savings,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
