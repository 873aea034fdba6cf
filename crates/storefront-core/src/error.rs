//! # Error Types
//!
//! Domain-specific error types for storefront-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  storefront-core errors (this file)                                     │
//! │  ├── CoreError         - Lookup failures, cart misuse                   │
//! │  ├── ValidationError   - One violated field                             │
//! │  └── ValidationErrors  - Every violated field of one submission         │
//! │                                                                         │
//! │  storefront-catalog errors (separate crate)                             │
//! │  └── CatalogError      - Repository failures                            │
//! │                                                                         │
//! │  App errors                                                             │
//! │  └── ApiError          - What the caller sees (serialized)              │
//! │                                                                         │
//! │  Flow: ValidationErrors → CoreError → CatalogError → ApiError           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use thiserror::Error;

use crate::types::{ItemId, MerchantId};

// =============================================================================
// Core Error
// =============================================================================

/// Pricing engine and cart errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The cart references an item the catalog doesn't know.
    ///
    /// ## When This Occurs
    /// - Item was deleted while it sat in a shopper's cart
    /// - Session cart restored against a different catalog
    ///
    /// The cart never drops the line on its own; the caller decides.
    #[error("Item not found: {0}")]
    ItemNotFound(ItemId),

    /// An item points at a merchant the catalog doesn't know.
    #[error("Merchant not found: {0}")]
    MerchantNotFound(MerchantId),

    /// Decrement was called on a line that is already at zero.
    ///
    /// ## User Workflow
    /// ```text
    /// Shopper clicks "-1" on a line showing qty 0
    ///      │
    ///      ▼
    /// caller should have checked is_zero() first
    ///      │
    ///      ▼
    /// QuantityUnderflow { item_id }
    /// ```
    #[error("Quantity of item {item_id} is already zero")]
    QuantityUnderflow { item_id: ItemId },

    /// A price, subtotal or total left the representable cent range.
    ///
    /// ## When This Occurs
    /// - A line's quantity times its unit price overflows
    /// - The sum of a cart's subtotals overflows
    #[error("Amount out of range for item {item_id}")]
    AmountOverflow { item_id: ItemId },

    /// A string could not be parsed into a canonical identifier.
    #[error("Invalid {kind} id: '{value}'")]
    InvalidIdentifier { kind: &'static str, value: String },

    /// The catalog behind a lookup could not answer.
    #[error("Catalog unavailable: {0}")]
    CatalogUnavailable(String),

    /// Submitted fields failed validation.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),
}

// =============================================================================
// Validation Error
// =============================================================================

/// A single field-level validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or blank.
    #[error("{field} can't be blank")]
    Required { field: String },

    /// Field value doesn't parse as a number at all ("ten").
    #[error("{field} is not a number")]
    NotANumber { field: String },

    /// Field value is numeric but has a fractional part ("2.5").
    #[error("{field} must be an integer")]
    NotAnInteger { field: String },

    /// Value must be strictly greater than `bound`.
    #[error("{field} must be greater than {bound}")]
    MustBeGreaterThan { field: String, bound: i64 },

    /// Value must be greater than or equal to `min`.
    #[error("{field} must be greater than or equal to {min}")]
    MustBeAtLeast { field: String, min: i64 },

    /// Value must be less than or equal to `max`.
    #[error("{field} must be less than or equal to {max}")]
    MustBeAtMost { field: String, max: i64 },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },
}

impl ValidationError {
    /// Name of the field this error refers to.
    pub fn field(&self) -> &str {
        match self {
            ValidationError::Required { field }
            | ValidationError::NotANumber { field }
            | ValidationError::NotAnInteger { field }
            | ValidationError::MustBeGreaterThan { field, .. }
            | ValidationError::MustBeAtLeast { field, .. }
            | ValidationError::MustBeAtMost { field, .. }
            | ValidationError::TooLong { field, .. } => field,
        }
    }
}

/// Every field-level failure of one submission, in field order.
///
/// Renders as a single sentence for flash messages:
/// `"quantity must be greater than 0 and percentage must be less than or equal to 100"`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors(Vec<ValidationError>);

impl ValidationErrors {
    pub fn new() -> Self {
        ValidationErrors(Vec::new())
    }

    pub fn push(&mut self, error: ValidationError) {
        self.0.push(error);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ValidationError> {
        self.0.iter()
    }

    /// Errors recorded against `field`.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a ValidationError> {
        self.0.iter().filter(move |e| e.field() == field)
    }

    /// `Ok(value)` when nothing was recorded, otherwise `Err(self)`.
    pub fn into_result<T>(self, value: T) -> Result<T, ValidationErrors> {
        if self.is_empty() {
            Ok(value)
        } else {
            Err(self)
        }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        ValidationErrors(vec![error])
    }
}

impl IntoIterator for ValidationErrors {
    type Item = ValidationError;
    type IntoIter = std::vec::IntoIter<ValidationError>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        match messages.as_slice() {
            [] => Ok(()),
            [only] => f.write_str(only),
            [first, second] => write!(f, "{} and {}", first, second),
            [rest @ .., last] => write!(f, "{}, and {}", rest.join(", "), last),
        }
    }
}

impl std::error::Error for ValidationErrors {}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
