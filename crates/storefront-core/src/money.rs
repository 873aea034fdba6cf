//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    $19.99 × 35% off = 12.9935  → which cent does the shopper pay?       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents, floor on every percentage                 │
//! │    1999 cents × 65 / 100 = 1299 cents (remainder dropped)               │
//! │    Every discounted price is derived the same way, every time           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::money::Money;
//! use storefront_core::types::Percentage;
//!
//! let price = Money::from_cents(1000); // $10.00
//! let half = Percentage::new(50).unwrap();
//!
//! assert_eq!(price.percent_off(half).cents(), 500);
//! assert_eq!((price * 3).cents(), 3000);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul, Sub};
use ts_rs::TS;

use crate::types::Percentage;

// =============================================================================
// Money Type
// =============================================================================

/// A monetary value in the smallest currency unit (cents for USD).
///
/// ## Where Money is Used
/// ```text
/// Item.price_cents ──► ItemQuote.unit_price ──► discounted unit price
///                                                      │
///                                          × cart quantity
///                                                      ▼
///                                              ItemQuote.subtotal ──► Cart total
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Creates a Money value from whole currency units.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// assert_eq!(Money::from_major(20).cents(), 2000);
    /// ```
    #[inline]
    pub const fn from_major(major: i64) -> Self {
        Money(major * 100)
    }

    /// Returns the value in cents.
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion, always 0-99.
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Multiplies a unit price by a cart quantity.
    ///
    /// Returns `None` when the product leaves the `i64` cent range.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    ///
    /// let unit_price = Money::from_cents(299);
    /// assert_eq!(unit_price.checked_multiply_quantity(3), Some(Money::from_cents(897)));
    /// assert_eq!(Money::from_cents(i64::MAX).checked_multiply_quantity(2), None);
    /// ```
    #[inline]
    pub const fn checked_multiply_quantity(&self, qty: u32) -> Option<Self> {
        match self.0.checked_mul(qty as i64) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Adds two amounts, or `None` on overflow.
    #[inline]
    pub const fn checked_add(&self, other: Money) -> Option<Self> {
        match self.0.checked_add(other.0) {
            Some(cents) => Some(Money(cents)),
            None => None,
        }
    }

    /// Returns the price left after taking `percentage` off.
    ///
    /// ## Rounding
    /// `price × (100 − percentage) / 100`, floored to a whole cent. The
    /// shopper never pays a fraction of a cent more than the exact value.
    ///
    /// ```rust
    /// use storefront_core::money::Money;
    /// use storefront_core::types::Percentage;
    ///
    /// let price = Money::from_cents(1999);
    /// let pct = Percentage::new(35).unwrap();
    /// // 1999 × 65 / 100 = 1299.35 → 1299
    /// assert_eq!(price.percent_off(pct).cents(), 1299);
    /// ```
    pub fn percent_off(&self, percentage: Percentage) -> Money {
        let kept = 100 - i128::from(percentage.value());
        // i128 keeps the intermediate product from overflowing
        let cents = (i128::from(self.0) * kept).div_euclid(100);
        Money(cents as i64)
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Debug-friendly rendering. Storefront display goes through
/// the app's configured currency formatting.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(f, "{}${}.{:02}", sign, self.dollars().abs(), self.cents_part())
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0 + other.0)
    }
}

impl AddAssign for Money {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

impl Sub for Money {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        Money(self.0 - other.0)
    }
}

/// Multiplication by a cart quantity. Overflows like `i64`; pricing code
/// uses [`Money::checked_multiply_quantity`].
impl Mul<u32> for Money {
    type Output = Self;

    #[inline]
    fn mul(self, qty: u32) -> Self {
        Money(self.0 * i64::from(qty))
    }
}

impl Sum for Money {
    fn sum<I: Iterator<Item = Money>>(iter: I) -> Self {
        iter.fold(Money::zero(), Add::add)
    }
}

impl<'a> Sum<&'a Money> for Money {
    fn sum<I: Iterator<Item = &'a Money>>(iter: I) -> Self {
        iter.copied().sum()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn pct(value: u8) -> Percentage {
        Percentage::new(value).unwrap()
    }

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(4000)), "$40.00");
        assert_eq!(format!("{}", Money::from_cents(-550)), "-$5.50");
        assert_eq!(format!("{}", Money::zero()), "$0.00");
    }

    #[test]
    fn test_arithmetic() {
        let a = Money::from_cents(1000);
        let b = Money::from_cents(500);

        assert_eq!((a + b).cents(), 1500);
        assert_eq!((a - b).cents(), 500);
        assert_eq!((a * 3).cents(), 3000);
    }

    #[test]
    fn test_sum() {
        let amounts = [Money::from_cents(2500), Money::from_cents(8000)];
        let total: Money = amounts.iter().sum();
        assert_eq!(total, Money::from_cents(10500));

        let empty: Money = Vec::<Money>::new().into_iter().sum();
        assert!(empty.is_zero());
    }

    #[test]
    fn test_checked_arithmetic_overflow() {
        let max = Money::from_cents(i64::MAX);
        assert_eq!(max.checked_multiply_quantity(1), Some(max));
        assert_eq!(max.checked_multiply_quantity(2), None);
        assert_eq!(max.checked_add(Money::from_cents(1)), None);
        assert_eq!(
            Money::from_cents(2500).checked_add(Money::from_cents(8000)),
            Some(Money::from_cents(10500))
        );
    }

    #[test]
    fn test_percent_off_exact() {
        assert_eq!(Money::from_major(10).percent_off(pct(50)), Money::from_major(5));
        assert_eq!(Money::from_major(20).percent_off(pct(25)), Money::from_major(15));
    }

    #[test]
    fn test_percent_off_floors_fractional_cents() {
        // 999 × 90 / 100 = 899.1 → 899
        assert_eq!(Money::from_cents(999).percent_off(pct(10)).cents(), 899);
        // 1 × 1 / 100 = 0.01 → 0
        assert_eq!(Money::from_cents(1).percent_off(pct(99)).cents(), 0);
    }

    #[test]
    fn test_percent_off_full_discount_is_free() {
        assert!(Money::from_cents(1234).percent_off(pct(100)).is_zero());
    }

    #[test]
    fn test_serializes_as_bare_cents() {
        let json = serde_json::to_string(&Money::from_cents(4000)).unwrap();
        assert_eq!(json, "4000");
    }
}
