//! # API Error Type
//!
//! Unified error type for storefront commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in the Storefront                         │
//! │                                                                         │
//! │  Controller                  Command Function                           │
//! │  ──────────                  ────────────────                           │
//! │                                                                         │
//! │  increment_item(id) ───────► Result<CartResponse, ApiError>             │
//! │                                     │                                   │
//! │         CatalogError::NotFound ─────┤                                   │
//! │         CoreError::Validation ──────┼──► ApiError { code, message }     │
//! │         inventory limit reached ────┘             │                     │
//! │                                                   ▼                     │
//! │  flash[:error] = e.message  ◄───────────── serialized JSON              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use storefront_catalog::CatalogError;
use storefront_core::CoreError;

/// API error returned from commands.
///
/// ## Serialization
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "quantity must be greater than 0 and percentage must be less than or equal to 100"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// Record not found, or owned by another merchant (404)
    NotFound,

    /// Submitted fields failed validation (400)
    ValidationError,

    /// Cart operation refused
    CartError,

    /// Cart line already holds every unit in stock
    LimitReached,

    /// Catalog snapshot could not be loaded
    CatalogError,

    /// Internal error (500)
    Internal,
}

impl ApiError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    pub fn validation(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::ValidationError, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::Internal, message)
    }

    pub fn cart(message: impl Into<String>) -> Self {
        ApiError::new(ErrorCode::CartError, message)
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::ItemNotFound(id) => ApiError::not_found("Item", id),
            CoreError::MerchantNotFound(id) => ApiError::not_found("Merchant", id),
            err @ (CoreError::QuantityUnderflow { .. } | CoreError::AmountOverflow { .. }) => {
                ApiError::cart(err.to_string())
            }
            err @ CoreError::InvalidIdentifier { .. } => ApiError::validation(err.to_string()),
            CoreError::CatalogUnavailable(reason) => {
                tracing::error!("Catalog unavailable: {}", reason);
                ApiError::internal("Catalog is unavailable")
            }
            CoreError::Validation(errors) => ApiError::validation(format!("{}.", errors)),
        }
    }
}

/// Converts catalog errors to API errors.
impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::NotFound { entity, id } => ApiError::not_found(entity, id),
            CatalogError::Validation(errors) => ApiError::validation(format!("{}.", errors)),
            CatalogError::Core(core) => ApiError::from(core),
            CatalogError::Poisoned => {
                tracing::error!("Catalog lock poisoned");
                ApiError::internal("Catalog is unavailable")
            }
            err @ (CatalogError::Io(_)
            | CatalogError::Json(_)
            | CatalogError::InvalidSnapshot(_)) => {
                ApiError::new(ErrorCode::CatalogError, err.to_string())
            }
        }
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}
