//! # Domain Types
//!
//! Core domain types shared by the pricing engine and its collaborators.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐        │
//! │  │    Merchant     │   │      Item       │   │    Discount     │        │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │        │
//! │  │  id             │◄──│  merchant_id    │   │  merchant_id    │──►     │
//! │  │  name           │   │  price_cents    │   │  quantity (≥1)  │        │
//! │  │  address        │   │  inventory      │   │  percentage     │        │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘        │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │  ItemId etc.    │   │   Percentage    │                              │
//! │  │  UUID newtypes  │   │   1..=100       │                              │
//! │  └─────────────────┘   └─────────────────┘                              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Canonical Identifiers
//! Every identifier is a UUID newtype. String forms coming from forms,
//! sessions or URLs are parsed with [`std::str::FromStr`] at the boundary, so
//! one record can never end up under two different cart keys.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::error::{CoreError, ValidationError};
use crate::money::Money;

// =============================================================================
// Identifiers
// =============================================================================

macro_rules! uuid_id {
    ($(#[$meta:meta])* $name:ident, $kind:literal) => {
        $(#[$meta])*
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
        )]
        #[ts(export)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generates a fresh random identifier.
            pub fn new() -> Self {
                $name(Uuid::new_v4())
            }

            #[inline]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                $name(uuid)
            }

            #[inline]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl From<Uuid> for $name {
            fn from(uuid: Uuid) -> Self {
                $name(uuid)
            }
        }

        impl FromStr for $name {
            type Err = CoreError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Uuid::parse_str(s.trim())
                    .map($name)
                    .map_err(|_| CoreError::InvalidIdentifier {
                        kind: $kind,
                        value: s.to_string(),
                    })
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                fmt::Display::fmt(&self.0, f)
            }
        }
    };
}

uuid_id!(
    /// Identifier of a catalog item. The only key type a cart accepts.
    ItemId,
    "item"
);

uuid_id!(
    /// Identifier of a merchant.
    MerchantId,
    "merchant"
);

uuid_id!(
    /// Identifier of a discount.
    DiscountId,
    "discount"
);

// =============================================================================
// Percentage
// =============================================================================

/// Whole-number percentage off, always within 1..=100.
///
/// The bounds are enforced on construction and on deserialization, so a
/// `Discount` in hand never needs to be re-checked before pricing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(try_from = "u8", into = "u8")]
pub struct Percentage(u8);

impl Percentage {
    pub const MIN: u8 = 1;
    pub const MAX: u8 = 100;

    /// Returns `None` when `value` is outside 1..=100.
    pub const fn new(value: u8) -> Option<Self> {
        if value >= Self::MIN && value <= Self::MAX {
            Some(Percentage(value))
        } else {
            None
        }
    }

    #[inline]
    pub const fn value(&self) -> u8 {
        self.0
    }
}

impl TryFrom<u8> for Percentage {
    type Error = ValidationError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        if value > Self::MAX {
            return Err(ValidationError::MustBeAtMost {
                field: "percentage".to_string(),
                max: i64::from(Self::MAX),
            });
        }
        Percentage::new(value).ok_or_else(|| ValidationError::MustBeGreaterThan {
            field: "percentage".to_string(),
            bound: 0,
        })
    }
}

impl From<Percentage> for u8 {
    fn from(pct: Percentage) -> Self {
        pct.0
    }
}

impl fmt::Display for Percentage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

// =============================================================================
// Merchant
// =============================================================================

/// A merchant selling items in the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Merchant {
    pub id: MerchantId,
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Item
// =============================================================================

/// A catalog item offered by a merchant.
///
/// There is no "discounted price" field: the effective price
/// depends on the cart quantity and is returned by
/// [`crate::pricing::quote_item`] instead of being stored here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Item {
    pub id: ItemId,

    /// Merchant that owns the item and whose discounts apply to it.
    pub merchant_id: MerchantId,

    pub name: String,

    pub description: String,

    /// Price in cents (smallest currency unit).
    pub price_cents: i64,

    /// Units in stock. A cart line may not grow past this number.
    pub inventory: u32,

    /// Image URL shown on the item page.
    pub image: String,

    /// Whether the item is currently for sale.
    pub active: bool,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Returns the plain (undiscounted) unit price.
    #[inline]
    pub fn price(&self) -> Money {
        Money::from_cents(self.price_cents)
    }
}

// =============================================================================
// Discount
// =============================================================================

/// A merchant-scoped quantity break: buy `quantity` or more of one item,
/// get `percentage` off that item's unit price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Discount {
    pub id: DiscountId,
    pub merchant_id: MerchantId,

    /// Optional label shown on the merchant dashboard.
    pub name: Option<String>,

    /// Minimum cart quantity of a single item for the discount to apply.
    pub quantity: u32,

    pub percentage: Percentage,

    #[ts(as = "String")]
    pub created_at: DateTime<Utc>,

    #[ts(as = "String")]
    pub updated_at: DateTime<Utc>,
}

impl Discount {
    /// Whether a cart quantity meets this discount's threshold.
    #[inline]
    pub fn is_met_by(&self, quantity: u32) -> bool {
        self.quantity <= quantity
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
