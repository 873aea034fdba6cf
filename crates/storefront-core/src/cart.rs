//! # Cart Aggregate
//!
//! A shopper's cart: item ids mapped to quantities, priced on demand.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Caller action             Cart method                 State change     │
//! │  ─────────────             ───────────                 ────────────     │
//! │  "Add To Cart"  ─────────► add_item(id) ─────────────► qty += 1         │
//! │  "+1"           ─────────► increment(id) ────────────► qty += 1         │
//! │  "-1"           ─────────► decrement(id) ────────────► qty -= 1         │
//! │  "Remove"       ─────────► remove_item(id) ──────────► line dropped     │
//! │                                                                         │
//! │  View cart      ─────────► quote(catalog) ───────────► (read only)      │
//! │                              ├── find_item per line                     │
//! │                              ├── merchant_discounts per merchant        │
//! │                              └── quote_item per line                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Caller Responsibilities
//! The cart does not enforce stock. Check [`Cart::is_limit_reached`] before
//! [`Cart::increment`], and [`Cart::is_zero`] before [`Cart::decrement`].
//! Decrementing a zero line is reported as
//! [`CoreError::QuantityUnderflow`], never clamped.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::error::{CoreError, CoreResult};
use crate::lookup::CatalogLookup;
use crate::money::Money;
use crate::pricing::{self, ItemQuote};
use crate::types::{Discount, Item, ItemId, MerchantId};

/// Item ids mapped to quantities.
///
/// Serializes as a JSON object keyed by the id string, which is how session
/// layers store it between requests. Deserializing goes through
/// [`Cart::from_raw`], so keys are normalized the same way.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    contents: BTreeMap<ItemId, u32>,
}

impl<'de> Deserialize<'de> for Cart {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = HashMap::<String, u32>::deserialize(deserializer)?;
        Cart::from_raw(raw).map_err(serde::de::Error::custom)
    }
}

/// A cart line resolved against the catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    pub item: Item,
    pub quantity: u32,
}

/// Every line priced, plus cart-level figures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartQuote {
    pub lines: Vec<ItemQuote>,
    pub total_items: u64,
    pub total: Money,
    pub savings: Money,
    pub discount_applied: bool,
}

impl Cart {
    /// Creates an empty cart.
    pub fn new() -> Self {
        Cart::default()
    }

    /// Creates a cart from an existing quantity mapping.
    ///
    /// Repeated ids are merged by adding their quantities, saturating at
    /// `u32::MAX`.
    pub fn from_contents<I>(contents: I) -> Self
    where
        I: IntoIterator<Item = (ItemId, u32)>,
    {
        let mut cart = Cart::new();
        for (id, qty) in contents {
            let line = cart.contents.entry(id).or_insert(0);
            *line = line.saturating_add(qty);
        }
        cart
    }

    /// Creates a cart from a mapping keyed by id strings (session data,
    /// form posts).
    ///
    /// Every key is parsed into its canonical [`ItemId`]; keys naming the
    /// same item in different spellings collapse into one line.
    pub fn from_raw<I, K>(contents: I) -> CoreResult<Self>
    where
        I: IntoIterator<Item = (K, u32)>,
        K: AsRef<str>,
    {
        let parsed = contents
            .into_iter()
            .map(|(key, qty)| key.as_ref().parse::<ItemId>().map(|id| (id, qty)))
            .collect::<CoreResult<Vec<_>>>()?;
        Ok(Cart::from_contents(parsed))
    }

    // =========================================================================
    // Mutation
    // =========================================================================

    /// Adds one unit of `id`, starting the line at zero if it is new.
    pub fn add_item(&mut self, id: ItemId) {
        let qty = self.bump(id);
        tracing::debug!(item_id = %id, quantity = qty, "added item to cart");
    }

    /// Adds one unit to a line. An absent line starts at zero.
    pub fn increment(&mut self, id: ItemId) -> u32 {
        let qty = self.bump(id);
        tracing::debug!(item_id = %id, quantity = qty, "incremented cart line");
        qty
    }

    fn bump(&mut self, id: ItemId) -> u32 {
        let qty = self.contents.entry(id).or_insert(0);
        *qty = qty.saturating_add(1);
        *qty
    }

    /// Removes one unit from a line and returns the new quantity.
    ///
    /// A line that reaches zero stays in the cart; call
    /// [`Cart::remove_item`] to drop it.
    pub fn decrement(&mut self, id: ItemId) -> CoreResult<u32> {
        match self.contents.get_mut(&id) {
            Some(qty) if *qty > 0 => {
                *qty -= 1;
                tracing::debug!(item_id = %id, quantity = *qty, "decremented cart line");
                Ok(*qty)
            }
            _ => Err(CoreError::QuantityUnderflow { item_id: id }),
        }
    }

    /// Drops a line entirely. Returns the quantity it had.
    pub fn remove_item(&mut self, id: ItemId) -> Option<u32> {
        self.contents.remove(&id)
    }

    pub fn clear(&mut self) {
        self.contents.clear();
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Quantity of `id`; absent lines count as zero.
    pub fn quantity(&self, id: ItemId) -> u32 {
        self.contents.get(&id).copied().unwrap_or(0)
    }

    pub fn contents(&self) -> &BTreeMap<ItemId, u32> {
        &self.contents
    }

    /// Whether the line for `id` holds exactly zero units.
    pub fn is_zero(&self, id: ItemId) -> bool {
        self.quantity(id) == 0
    }

    pub fn is_empty(&self) -> bool {
        self.contents.is_empty()
    }

    /// Number of distinct lines.
    pub fn line_count(&self) -> usize {
        self.contents.len()
    }

    /// Sum of all quantities.
    pub fn total_item_count(&self) -> u64 {
        self.contents.values().map(|&q| u64::from(q)).sum()
    }

    /// Whether the line for `id` already holds every unit in stock.
    pub fn is_limit_reached<C>(&self, catalog: &C, id: ItemId) -> CoreResult<bool>
    where
        C: CatalogLookup + ?Sized,
    {
        let item = catalog.find_item(id)?;
        Ok(self.quantity(id) == item.inventory)
    }

    // =========================================================================
    // Pricing
    // =========================================================================

    /// Looks up the current record of every line, in id order.
    ///
    /// Built fresh on each call so it always reflects the catalog as it is now.
    pub fn resolved_items<C>(&self, catalog: &C) -> CoreResult<Vec<CartLine>>
    where
        C: CatalogLookup + ?Sized,
    {
        self.contents
            .iter()
            .map(|(&id, &quantity)| {
                catalog
                    .find_item(id)
                    .map(|item| CartLine { item, quantity })
            })
            .collect()
    }

    /// Quantity of `id` times its effective unit price at that quantity.
    pub fn subtotal<C>(&self, catalog: &C, id: ItemId) -> CoreResult<Money>
    where
        C: CatalogLookup + ?Sized,
    {
        let item = catalog.find_item(id)?;
        let discounts = catalog.merchant_discounts(item.merchant_id)?;
        let quote = pricing::quote_item(&item, &discounts, self.quantity(id))?;
        Ok(quote.subtotal)
    }

    /// Sum of every line's subtotal.
    pub fn total<C>(&self, catalog: &C) -> CoreResult<Money>
    where
        C: CatalogLookup + ?Sized,
    {
        Ok(self.quote(catalog)?.total)
    }

    /// Whether at least one line meets at least one of its merchant's
    /// discount thresholds.
    pub fn is_discount_applied<C>(&self, catalog: &C) -> CoreResult<bool>
    where
        C: CatalogLookup + ?Sized,
    {
        let mut discounts = DiscountCache::new(catalog);
        for line in self.resolved_items(catalog)? {
            if pricing::discount_applies(discounts.get(line.item.merchant_id)?, line.quantity) {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// Prices every line in one pass.
    ///
    /// Each item and each merchant's discount set is looked up once, so all
    /// lines are priced against the same view of the catalog.
    pub fn quote<C>(&self, catalog: &C) -> CoreResult<CartQuote>
    where
        C: CatalogLookup + ?Sized,
    {
        let mut discounts = DiscountCache::new(catalog);
        let mut lines = Vec::with_capacity(self.contents.len());

        for line in self.resolved_items(catalog)? {
            let merchant_discounts = discounts.get(line.item.merchant_id)?;
            lines.push(pricing::quote_item(&line.item, merchant_discounts, line.quantity)?);
        }

        let total = checked_sum(&lines, |l| l.subtotal)?;
        let savings = checked_sum(&lines, |l| l.savings)?;
        let discount_applied = lines.iter().any(|l| {
            discounts
                .peek(l.item.merchant_id)
                .is_some_and(|d| pricing::discount_applies(d, l.quantity))
        });

        tracing::debug!(
            lines = lines.len(),
            total_cents = total.cents(),
            discount_applied,
            "quoted cart"
        );

        Ok(CartQuote {
            lines,
            total_items: self.total_item_count(),
            total,
            savings,
            discount_applied,
        })
    }
}

/// Adds up one amount per line, failing on the line that overflows.
fn checked_sum<F>(lines: &[ItemQuote], amount: F) -> CoreResult<Money>
where
    F: Fn(&ItemQuote) -> Money,
{
    lines.iter().try_fold(Money::zero(), |acc, line| {
        acc.checked_add(amount(line))
            .ok_or(CoreError::AmountOverflow { item_id: line.item.id })
    })
}

/// Discount sets fetched once per merchant for the duration of one computation.
struct DiscountCache<'a, C: ?Sized> {
    catalog: &'a C,
    by_merchant: HashMap<MerchantId, Vec<Discount>>,
}

impl<'a, C: CatalogLookup + ?Sized> DiscountCache<'a, C> {
    fn new(catalog: &'a C) -> Self {
        DiscountCache {
            catalog,
            by_merchant: HashMap::new(),
        }
    }

    fn get(&mut self, merchant_id: MerchantId) -> CoreResult<&[Discount]> {
        if !self.by_merchant.contains_key(&merchant_id) {
            let discounts = self.catalog.merchant_discounts(merchant_id)?;
            self.by_merchant.insert(merchant_id, discounts);
        }
        Ok(self
            .by_merchant
            .get(&merchant_id)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    fn peek(&self, merchant_id: MerchantId) -> Option<&[Discount]> {
        self.by_merchant.get(&merchant_id).map(Vec::as_slice)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{DiscountId, Percentage};
    use chrono::Utc;

    #[derive(Default)]
    struct TestCatalog {
        items: HashMap<ItemId, Item>,
        discounts: HashMap<MerchantId, Vec<Discount>>,
    }

    impl TestCatalog {
        fn add_item(&mut self, merchant_id: MerchantId, price_cents: i64, inventory: u32) -> Item {
            let item = Item {
                id: ItemId::new(),
                merchant_id,
                name: "Item".to_string(),
                description: "Test item".to_string(),
                price_cents,
                inventory,
                image: String::new(),
                active: true,
                created_at: Utc::now(),
                updated_at: Utc::now(),
            };
            self.items.insert(item.id, item.clone());
            item
        }

        fn add_discount(&mut self, merchant_id: MerchantId, quantity: u32, percentage: u8) {
            self.discounts.entry(merchant_id).or_default().push(Discount {
                id: DiscountId::new(),
                merchant_id,
                name: None,
                quantity,
                percentage: Percentage::new(percentage).unwrap(),
                created_at: Utc::now(),
                updated_at: Utc::now(),
            });
        }
    }

    impl CatalogLookup for TestCatalog {
        fn find_item(&self, id: ItemId) -> CoreResult<Item> {
            self.items.get(&id).cloned().ok_or(CoreError::ItemNotFound(id))
        }

        fn merchant_discounts(&self, merchant_id: MerchantId) -> CoreResult<Vec<Discount>> {
            Ok(self.discounts.get(&merchant_id).cloned().unwrap_or_default())
        }
    }

    #[test]
    fn test_add_item_starts_at_one() {
        let id = ItemId::new();
        let mut cart = Cart::new();

        assert!(cart.is_zero(id));
        cart.add_item(id);
        assert!(!cart.is_zero(id));
        assert_eq!(cart.quantity(id), 1);
    }

    #[test]
    fn test_n_adds_give_quantity_n() {
        let id = ItemId::new();
        let mut cart = Cart::new();
        for _ in 0..7 {
            cart.add_item(id);
        }
        assert_eq!(cart.quantity(id), 7);
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_total_item_count() {
        let paper = ItemId::new();
        let pencil = ItemId::new();
        let mut cart = Cart::new();

        cart.add_item(paper);
        cart.add_item(paper);
        cart.add_item(pencil);

        assert_eq!(cart.total_item_count(), 3);
    }

    #[test]
    fn test_increment_and_decrement() {
        let id = ItemId::new();
        let mut cart = Cart::new();

        cart.add_item(id);
        assert_eq!(cart.increment(id), 2);
        assert_eq!(cart.decrement(id).unwrap(), 1);
        assert_eq!(cart.decrement(id).unwrap(), 0);
        assert!(cart.is_zero(id));
        // zero lines stay until removed
        assert_eq!(cart.line_count(), 1);
    }

    #[test]
    fn test_decrement_at_zero_is_reported() {
        let id = ItemId::new();
        let mut cart = Cart::new();

        let err = cart.decrement(id).unwrap_err();
        assert!(matches!(err, CoreError::QuantityUnderflow { item_id } if item_id == id));

        cart.add_item(id);
        cart.decrement(id).unwrap();
        assert!(cart.decrement(id).is_err());
        assert_eq!(cart.quantity(id), 0);
    }

    #[test]
    fn test_remove_and_clear() {
        let a = ItemId::new();
        let b = ItemId::new();
        let mut cart = Cart::from_contents([(a, 2), (b, 1)]);

        assert_eq!(cart.remove_item(a), Some(2));
        assert_eq!(cart.remove_item(a), None);
        assert_eq!(cart.line_count(), 1);

        cart.clear();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_from_raw_normalizes_keys() {
        let id = ItemId::new();
        let upper = id.to_string().to_uppercase();
        let cart = Cart::from_raw([(id.to_string(), 2), (upper, 3)]).unwrap();

        assert_eq!(cart.line_count(), 1);
        assert_eq!(cart.quantity(id), 5);

        assert!(Cart::from_raw([("7", 1)]).is_err());
    }

    #[test]
    fn test_session_round_trip_shape() {
        let id = ItemId::new();
        let cart = Cart::from_contents([(id, 4)]);

        let json = serde_json::to_value(&cart).unwrap();
        assert_eq!(json, serde_json::json!({ id.to_string(): 4 }));

        let restored: Cart = serde_json::from_value(json).unwrap();
        assert_eq!(restored, cart);

        let mixed = format!(
            r#"{{"{}": 2, "{}": 3}}"#,
            id,
            id.to_string().to_uppercase()
        );
        let merged: Cart = serde_json::from_str(&mixed).unwrap();
        assert_eq!(merged.line_count(), 1);
        assert_eq!(merged.quantity(id), 5);

        assert!(serde_json::from_str::<Cart>(r#"{"7": 1}"#).is_err());
    }

    #[test]
    fn test_merging_spellings_saturates() {
        let id = ItemId::new();
        let half = u32::MAX / 2 + 1;
        let cart = Cart::from_raw([
            (id.to_string(), half),
            (id.to_string().to_uppercase(), half),
        ])
        .unwrap();
        assert_eq!(cart.quantity(id), u32::MAX);

        let mut full = Cart::from_contents([(id, u32::MAX)]);
        assert_eq!(full.increment(id), u32::MAX);
    }

    #[test]
    fn test_is_limit_reached() {
        let mut catalog = TestCatalog::default();
        let merchant = MerchantId::new();
        let paper = catalog.add_item(merchant, 2000, 2);
        let mut cart = Cart::new();

        cart.add_item(paper.id);
        assert!(!cart.is_limit_reached(&catalog, paper.id).unwrap());
        cart.add_item(paper.id);
        assert!(cart.is_limit_reached(&catalog, paper.id).unwrap());
    }

    #[test]
    fn test_resolved_items() {
        let mut catalog = TestCatalog::default();
        let merchant = MerchantId::new();
        let paper = catalog.add_item(merchant, 2000, 2);
        let pencil = catalog.add_item(merchant, 200, 100);

        let mut cart = Cart::new();
        cart.add_item(paper.id);
        cart.add_item(pencil.id);
        cart.add_item(paper.id);

        let lines = cart.resolved_items(&catalog).unwrap();
        assert_eq!(lines.len(), 2);

        let quantity_of = |id: ItemId| {
            lines
                .iter()
                .find(|l| l.item.id == id)
                .map(|l| l.quantity)
        };
        assert_eq!(quantity_of(paper.id), Some(2));
        assert_eq!(quantity_of(pencil.id), Some(1));
    }

    #[test]
    fn test_resolved_items_reflect_current_catalog() {
        let mut catalog = TestCatalog::default();
        let merchant = MerchantId::new();
        let paper = catalog.add_item(merchant, 2000, 2);
        let cart = Cart::from_contents([(paper.id, 1)]);

        assert_eq!(cart.subtotal(&catalog, paper.id).unwrap(), Money::from_major(20));

        catalog.items.get_mut(&paper.id).unwrap().price_cents = 2500;
        assert_eq!(cart.subtotal(&catalog, paper.id).unwrap(), Money::from_major(25));
    }

    #[test]
    fn test_subtotal_without_discount() {
        let mut catalog = TestCatalog::default();
        let merchant = MerchantId::new();
        let paper = catalog.add_item(merchant, 2000, 2);
        let mut cart = Cart::new();

        cart.add_item(paper.id);
        assert_eq!(cart.subtotal(&catalog, paper.id).unwrap(), Money::from_major(20));
        cart.add_item(paper.id);
        assert_eq!(cart.subtotal(&catalog, paper.id).unwrap(), Money::from_major(40));
    }

    #[test]
    fn test_total_without_discounts_is_plain_sum() {
        let mut catalog = TestCatalog::default();
        let merchant = MerchantId::new();
        let paper = catalog.add_item(merchant, 2000, 2);
        let pencil = catalog.add_item(merchant, 200, 100);
        let mut cart = Cart::new();

        cart.add_item(paper.id);
        cart.add_item(pencil.id);
        assert_eq!(cart.total(&catalog).unwrap(), Money::from_major(22));

        cart.add_item(pencil.id);
        assert_eq!(cart.total(&catalog).unwrap(), Money::from_major(24));
    }

    #[test]
    fn test_discounted_subtotal() {
        let mut catalog = TestCatalog::default();
        let bike_shop = MerchantId::new();
        catalog.add_discount(bike_shop, 5, 50);
        let rim = catalog.add_item(bike_shop, 1000, 30);
        let grips = catalog.add_item(bike_shop, 2000, 12);

        let cart = Cart::from_contents([(rim.id, 5), (grips.id, 1)]);
        assert_eq!(cart.subtotal(&catalog, rim.id).unwrap(), Money::from_major(25));
        assert_eq!(cart.subtotal(&catalog, grips.id).unwrap(), Money::from_major(20));

        let below = Cart::from_contents([(rim.id, 4)]);
        assert_eq!(below.subtotal(&catalog, rim.id).unwrap(), Money::from_major(40));
    }

    #[test]
    fn test_best_discount_is_used_for_subtotal() {
        let mut catalog = TestCatalog::default();
        let bike_shop = MerchantId::new();
        catalog.add_discount(bike_shop, 5, 50);
        catalog.add_discount(bike_shop, 5, 25);
        let rim = catalog.add_item(bike_shop, 1000, 30);

        let cart = Cart::from_contents([(rim.id, 5)]);
        let quote = cart.quote(&catalog).unwrap();
        assert_eq!(quote.lines[0].effective_unit_price, Money::from_major(5));
        assert_eq!(
            quote.lines[0].applied_discount.as_ref().map(|d| d.percentage.value()),
            Some(50)
        );
    }

    #[test]
    fn test_discounted_total() {
        let mut catalog = TestCatalog::default();
        let bike_shop = MerchantId::new();
        catalog.add_discount(bike_shop, 5, 50);
        let rim = catalog.add_item(bike_shop, 1000, 30);
        let grips = catalog.add_item(bike_shop, 2000, 12);

        let cart = Cart::from_contents([(rim.id, 5), (grips.id, 4)]);
        assert_eq!(cart.total(&catalog).unwrap(), Money::from_major(105));

        let quote = cart.quote(&catalog).unwrap();
        assert_eq!(quote.total, Money::from_major(105));
        assert_eq!(quote.savings, Money::from_major(25));
        assert_eq!(quote.total_items, 9);
    }

    #[test]
    fn test_total_overflow_is_an_error() {
        let mut catalog = TestCatalog::default();
        let merchant = MerchantId::new();
        let yacht = catalog.add_item(merchant, i64::MAX, 5);
        let mut cart = Cart::new();

        cart.add_item(yacht.id);
        assert_eq!(cart.total(&catalog).unwrap().cents(), i64::MAX);

        cart.add_item(yacht.id);
        assert!(matches!(
            cart.total(&catalog),
            Err(CoreError::AmountOverflow { item_id }) if item_id == yacht.id
        ));
        assert!(cart.subtotal(&catalog, yacht.id).is_err());

        let half = catalog.add_item(merchant, i64::MAX / 2 + 1, 5);
        let lines = Cart::from_contents([(half.id, 1), (yacht.id, 1)]);
        assert!(matches!(
            lines.quote(&catalog),
            Err(CoreError::AmountOverflow { .. })
        ));
    }

    #[test]
    fn test_discount_threshold_steps_during_increments() {
        let mut catalog = TestCatalog::default();
        let bike_shop = MerchantId::new();
        catalog.add_discount(bike_shop, 5, 50);
        catalog.add_discount(bike_shop, 6, 90);
        let rim = catalog.add_item(bike_shop, 1000, 30);

        let mut cart = Cart::new();
        for _ in 0..4 {
            cart.add_item(rim.id);
        }
        assert_eq!(cart.total(&catalog).unwrap(), Money::from_major(40));

        cart.increment(rim.id);
        assert_eq!(cart.total(&catalog).unwrap(), Money::from_major(25));

        cart.increment(rim.id);
        assert_eq!(cart.total(&catalog).unwrap(), Money::from_major(6));

        cart.decrement(rim.id).unwrap();
        assert_eq!(cart.total(&catalog).unwrap(), Money::from_major(25));
    }

    #[test]
    fn test_discount_applied() {
        let mut catalog = TestCatalog::default();
        let bike_shop = MerchantId::new();
        catalog.add_discount(bike_shop, 5, 50);
        let rim = catalog.add_item(bike_shop, 1000, 30);

        let cart = Cart::from_contents([(rim.id, 4)]);
        assert!(!cart.is_discount_applied(&catalog).unwrap());
        assert!(!cart.quote(&catalog).unwrap().discount_applied);

        let cart = Cart::from_contents([(rim.id, 5)]);
        assert!(cart.is_discount_applied(&catalog).unwrap());
        assert!(cart.quote(&catalog).unwrap().discount_applied);
    }

    #[test]
    fn test_discounts_are_scoped_to_the_items_merchant() {
        let mut catalog = TestCatalog::default();
        let bike_shop = MerchantId::new();
        let print_shop = MerchantId::new();
        catalog.add_discount(bike_shop, 1, 50);
        let paper = catalog.add_item(print_shop, 2000, 10);

        let cart = Cart::from_contents([(paper.id, 3)]);
        assert!(!cart.is_discount_applied(&catalog).unwrap());
        assert_eq!(cart.total(&catalog).unwrap(), Money::from_major(60));
    }

    #[test]
    fn test_subtotal_is_idempotent() {
        let mut catalog = TestCatalog::default();
        let bike_shop = MerchantId::new();
        catalog.add_discount(bike_shop, 5, 50);
        let rim = catalog.add_item(bike_shop, 1000, 30);
        let cart = Cart::from_contents([(rim.id, 5)]);

        let first = cart.subtotal(&catalog, rim.id).unwrap();
        let second = cart.subtotal(&catalog, rim.id).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_unknown_item_is_a_hard_failure() {
        let catalog = TestCatalog::default();
        let ghost = ItemId::new();
        let cart = Cart::from_contents([(ghost, 1)]);

        assert!(matches!(
            cart.subtotal(&catalog, ghost),
            Err(CoreError::ItemNotFound(id)) if id == ghost
        ));
        assert!(cart.total(&catalog).is_err());
        assert!(cart.resolved_items(&catalog).is_err());
        assert!(cart.is_limit_reached(&catalog, ghost).is_err());
    }

    #[test]
    fn test_empty_cart_totals() {
        let catalog = TestCatalog::default();
        let cart = Cart::new();

        assert!(cart.total(&catalog).unwrap().is_zero());
        assert!(!cart.is_discount_applied(&catalog).unwrap());
        assert_eq!(cart.total_item_count(), 0);
    }
}
