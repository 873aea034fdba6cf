//! # Discount Commands
//!
//! Merchant dashboard commands for quantity-break discounts.
//!
//! ## Flash Messages
//! ```text
//! create_discount ── ok ──► "Discount has been created."
//!                 └─ err ─► "quantity is not a number."   (VALIDATION_ERROR)
//! update_discount ── ok ──► "Discount successfully updated."
//! delete_discount ── ok ──► "Discount has been deleted."
//! ```
//!
//! The acting merchant is always passed in as a [`MerchantScope`]; a
//! discount id belonging to someone else answers `NOT_FOUND`.

use serde::Serialize;
use tracing::debug;

use storefront_catalog::MerchantScope;
use storefront_core::validation::DiscountParams;
use storefront_core::{Discount, DiscountId};

use crate::error::ApiError;
use crate::state::CatalogState;

/// A discount plus the confirmation shown to the merchant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DiscountResponse {
    pub discount: Discount,
    pub message: String,
}

fn parse_discount_id(discount_id: &str) -> Result<DiscountId, ApiError> {
    Ok(discount_id.parse::<DiscountId>()?)
}

pub fn create_discount(
    catalog: &CatalogState,
    scope: &MerchantScope,
    params: &DiscountParams,
) -> Result<DiscountResponse, ApiError> {
    debug!(merchant_id = %scope.merchant_id(), "create_discount command");

    let discount = catalog.inner().discounts().create(scope, params)?;
    Ok(DiscountResponse {
        discount,
        message: "Discount has been created.".to_string(),
    })
}

/// Replaces a discount's fields; a rejected submission changes nothing.
pub fn update_discount(
    catalog: &CatalogState,
    scope: &MerchantScope,
    discount_id: &str,
    params: &DiscountParams,
) -> Result<DiscountResponse, ApiError> {
    debug!(discount_id = %discount_id, "update_discount command");
    let id = parse_discount_id(discount_id)?;

    let discount = catalog.inner().discounts().update(scope, id, params)?;
    Ok(DiscountResponse {
        discount,
        message: "Discount successfully updated.".to_string(),
    })
}

pub fn delete_discount(
    catalog: &CatalogState,
    scope: &MerchantScope,
    discount_id: &str,
) -> Result<DiscountResponse, ApiError> {
    debug!(discount_id = %discount_id, "delete_discount command");
    let id = parse_discount_id(discount_id)?;

    let discount = catalog.inner().discounts().delete(scope, id)?;
    Ok(DiscountResponse {
        discount,
        message: "Discount has been deleted.".to_string(),
    })
}

/// Lists the acting merchant's own discounts.
pub fn list_discounts(
    catalog: &CatalogState,
    scope: &MerchantScope,
) -> Result<Vec<Discount>, ApiError> {
    debug!(merchant_id = %scope.merchant_id(), "list_discounts command");
    Ok(catalog
        .inner()
        .discounts()
        .list_for_merchant(scope.merchant_id())?)
}
