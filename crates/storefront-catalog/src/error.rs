//! # Catalog Error Types
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ValidationErrors (storefront-core) ──┐                                 │
//! │  serde_json / io (snapshot load) ─────┼──► CatalogError (this module)   │
//! │  lock poisoning ──────────────────────┘          │                      │
//! │                                                  ▼                      │
//! │                                  ApiError (in the app) → caller         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use storefront_core::{CoreError, ValidationErrors};
use thiserror::Error;

/// Catalog operation errors.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Record doesn't exist, or isn't visible to the acting merchant.
    ///
    /// ## When This Occurs
    /// - ID doesn't exist
    /// - Merchant A tries to edit merchant B's discount
    #[error("{entity} not found: {id}")]
    NotFound { entity: &'static str, id: String },

    /// Submitted fields failed validation; nothing was written.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationErrors),

    /// Snapshot file could not be read.
    #[error("Failed to read snapshot: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot is not valid JSON for the expected shape.
    #[error("Malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),

    /// Snapshot parsed but its records are inconsistent.
    #[error("Invalid snapshot: {}", .0.join("; "))]
    InvalidSnapshot(Vec<String>),

    /// A writer panicked while holding the catalog lock.
    #[error("Catalog lock poisoned")]
    Poisoned,

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CatalogError {
    /// Creates a NotFound error for a given entity type and ID.
    pub fn not_found(entity: &'static str, id: impl ToString) -> Self {
        CatalogError::NotFound {
            entity,
            id: id.to_string(),
        }
    }
}

/// Converts catalog failures into what the cart understands.
impl From<CatalogError> for CoreError {
    fn from(err: CatalogError) -> Self {
        match err {
            CatalogError::Core(core) => core,
            CatalogError::Validation(errors) => CoreError::Validation(errors),
            other => CoreError::CatalogUnavailable(other.to_string()),
        }
    }
}

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;
