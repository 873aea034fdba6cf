//! # Validation Module
//!
//! Form validation for merchant-submitted records.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Form params (raw strings, exactly as submitted)               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: THIS MODULE                                                   │
//! │  ├── presence / numericality / range per field                          │
//! │  ├── every violated field collected into ValidationErrors               │
//! │  └── success yields a typed draft (u32, Percentage, cents)              │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: Catalog repository stores the draft                           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use storefront_core::validation::{validate_discount, DiscountParams};
//!
//! let params = DiscountParams {
//!     name: Some("Bulk".to_string()),
//!     quantity: Some("10".to_string()),
//!     percentage: Some("5".to_string()),
//! };
//! let draft = validate_discount(&params).unwrap();
//! assert_eq!(draft.quantity, 10);
//!
//! let bad = DiscountParams {
//!     name: None,
//!     quantity: Some("ten".to_string()),
//!     percentage: Some("5".to_string()),
//! };
//! let errors = validate_discount(&bad).unwrap_err();
//! assert_eq!(errors.to_string(), "quantity is not a number");
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::{ValidationError, ValidationErrors};
use crate::types::Percentage;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationErrors>;

/// Image used when a merchant leaves the image field blank.
pub const DEFAULT_ITEM_IMAGE: &str = "https://www.thesun.co.uk/wp-content/uploads/2018/11/cat-2.png";

/// Highest accepted unit price. Any `u32` quantity of it still fits in
/// `i64` cents.
pub const MAX_PRICE_CENTS: i64 = i64::MAX / u32::MAX as i64;

const MAX_NAME_LEN: usize = 200;
const MAX_DISCOUNT_NAME_LEN: usize = 100;

// =============================================================================
// Discount Validation
// =============================================================================

/// Discount form fields as submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiscountParams {
    pub name: Option<String>,
    pub quantity: Option<String>,
    pub percentage: Option<String>,
}

/// A discount that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscountDraft {
    pub name: Option<String>,
    pub quantity: u32,
    pub percentage: Percentage,
}

/// Validates a discount submission.
///
/// ## Rules
/// - `quantity`: required, integer, greater than 0
/// - `percentage`: required, integer, greater than 0, at most 100
/// - `name`: optional, at most 100 characters; blank counts as absent
///
/// Every violated field is reported, not just the first one.
pub fn validate_discount(params: &DiscountParams) -> ValidationResult<DiscountDraft> {
    let mut errors = ValidationErrors::new();

    let name = optional_text("name", params.name.as_deref(), MAX_DISCOUNT_NAME_LEN, &mut errors);

    let quantity = parse_integer("quantity", params.quantity.as_deref())
        .and_then(|n| greater_than("quantity", n, 0))
        .and_then(|n| fit_u32("quantity", n))
        .map_err(|e| errors.push(e))
        .ok();

    let percentage = parse_integer("percentage", params.percentage.as_deref())
        .and_then(|n| greater_than("percentage", n, 0))
        .and_then(|n| at_most("percentage", n, i64::from(Percentage::MAX)))
        .map(|n| Percentage::new(n as u8))
        .map_err(|e| errors.push(e))
        .ok()
        .flatten();

    match (quantity, percentage) {
        (Some(quantity), Some(percentage)) if errors.is_empty() => Ok(DiscountDraft {
            name,
            quantity,
            percentage,
        }),
        _ => Err(errors),
    }
}

// =============================================================================
// Item Validation
// =============================================================================

/// Item form fields as submitted.
#[derive(Debug, Clone, Default, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ItemParams {
    pub name: Option<String>,
    pub description: Option<String>,
    /// Price in cents.
    pub price_cents: Option<String>,
    pub inventory: Option<String>,
    pub image: Option<String>,
}

/// An item that passed validation and is ready to be stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemDraft {
    pub name: String,
    pub description: String,
    pub price_cents: i64,
    pub inventory: u32,
    pub image: String,
}

/// Validates an item submission.
///
/// ## Rules
/// - `name`: required, at most 200 characters
/// - `description`: required
/// - `price_cents`: required, integer, zero or more (free items allowed),
///   at most [`MAX_PRICE_CENTS`]
/// - `inventory`: required, integer, zero or more
/// - `image`: blank falls back to [`DEFAULT_ITEM_IMAGE`]
pub fn validate_item(params: &ItemParams) -> ValidationResult<ItemDraft> {
    let mut errors = ValidationErrors::new();

    let name = required_text("name", params.name.as_deref(), MAX_NAME_LEN)
        .map_err(|e| errors.push(e))
        .ok();

    let description = required_text("description", params.description.as_deref(), usize::MAX)
        .map_err(|e| errors.push(e))
        .ok();

    let price_cents = parse_integer("price", params.price_cents.as_deref())
        .and_then(|n| at_least("price", n, 0))
        .and_then(|n| at_most("price", n, MAX_PRICE_CENTS))
        .map_err(|e| errors.push(e))
        .ok();

    let inventory = parse_integer("inventory", params.inventory.as_deref())
        .and_then(|n| at_least("inventory", n, 0))
        .and_then(|n| fit_u32("inventory", n))
        .map_err(|e| errors.push(e))
        .ok();

    let image = params
        .image
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_ITEM_IMAGE)
        .to_string();

    match (name, description, price_cents, inventory) {
        (Some(name), Some(description), Some(price_cents), Some(inventory)) => {
            errors.into_result(ItemDraft {
                name,
                description,
                price_cents,
                inventory,
                image,
            })
        }
        _ => Err(errors),
    }
}

// =============================================================================
// Field Helpers
// =============================================================================

/// Parses an integer form value the way a numericality check does.
///
/// - missing or blank → `Required`
/// - decimal notation ("2.5", "3.0") → `NotAnInteger`
/// - anything else unparseable ("ten") → `NotANumber`
fn parse_integer(field: &str, raw: Option<&str>) -> Result<i64, ValidationError> {
    let raw = raw.map(str::trim).unwrap_or_default();

    if raw.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if let Ok(n) = raw.parse::<i64>() {
        return Ok(n);
    }

    let unsigned = raw.strip_prefix(['-', '+']).unwrap_or(raw);
    let is_digits = |s: &str| !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit());

    if is_digits(unsigned) {
        // Integer syntax that overflowed i64
        return Err(ValidationError::MustBeAtMost {
            field: field.to_string(),
            max: i64::MAX,
        });
    }

    match unsigned.split_once('.') {
        Some((whole, frac)) if (whole.is_empty() || is_digits(whole)) && is_digits(frac) => {
            Err(ValidationError::NotAnInteger {
                field: field.to_string(),
            })
        }
        _ => Err(ValidationError::NotANumber {
            field: field.to_string(),
        }),
    }
}

fn greater_than(field: &str, value: i64, bound: i64) -> Result<i64, ValidationError> {
    if value > bound {
        Ok(value)
    } else {
        Err(ValidationError::MustBeGreaterThan {
            field: field.to_string(),
            bound,
        })
    }
}

fn at_least(field: &str, value: i64, min: i64) -> Result<i64, ValidationError> {
    if value >= min {
        Ok(value)
    } else {
        Err(ValidationError::MustBeAtLeast {
            field: field.to_string(),
            min,
        })
    }
}

fn at_most(field: &str, value: i64, max: i64) -> Result<i64, ValidationError> {
    if value <= max {
        Ok(value)
    } else {
        Err(ValidationError::MustBeAtMost {
            field: field.to_string(),
            max,
        })
    }
}

fn fit_u32(field: &str, value: i64) -> Result<u32, ValidationError> {
    u32::try_from(value).map_err(|_| ValidationError::MustBeAtMost {
        field: field.to_string(),
        max: i64::from(u32::MAX),
    })
}

fn required_text(field: &str, raw: Option<&str>, max: usize) -> Result<String, ValidationError> {
    let text = raw.map(str::trim).unwrap_or_default();

    if text.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    if text.chars().count() > max {
        return Err(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
    }

    Ok(text.to_string())
}

fn optional_text(
    field: &str,
    raw: Option<&str>,
    max: usize,
    errors: &mut ValidationErrors,
) -> Option<String> {
    let text = raw.map(str::trim).filter(|s| !s.is_empty())?;

    if text.chars().count() > max {
        errors.push(ValidationError::TooLong {
            field: field.to_string(),
            max,
        });
        return None;
    }

    Some(text.to_string())
}

// =============================================================================
// Unit Tests
// =============================================================================
