//! # Item Commands
//!
//! Merchant dashboard commands for catalog items.

use serde::Serialize;
use tracing::debug;

use storefront_catalog::MerchantScope;
use storefront_core::validation::ItemParams;
use storefront_core::{Item, ItemId};

use crate::error::ApiError;
use crate::state::CatalogState;

/// An item plus the confirmation shown to the merchant.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemResponse {
    pub item: Item,
    pub message: String,
}

fn parse_item_id(item_id: &str) -> Result<ItemId, ApiError> {
    Ok(item_id.parse::<ItemId>()?)
}

pub fn create_item(
    catalog: &CatalogState,
    scope: &MerchantScope,
    params: &ItemParams,
) -> Result<ItemResponse, ApiError> {
    debug!(merchant_id = %scope.merchant_id(), "create_item command");

    let item = catalog.inner().items().create(scope, params)?;
    let message = format!("{} has been added to your catalog.", item.name);
    Ok(ItemResponse { item, message })
}

/// Replaces an item's fields; a rejected submission changes nothing.
pub fn update_item(
    catalog: &CatalogState,
    scope: &MerchantScope,
    item_id: &str,
    params: &ItemParams,
) -> Result<ItemResponse, ApiError> {
    debug!(item_id = %item_id, "update_item command");
    let id = parse_item_id(item_id)?;

    let item = catalog.inner().items().update(scope, id, params)?;
    Ok(ItemResponse {
        item,
        message: "Item successfully updated.".to_string(),
    })
}

/// Puts an item on sale or takes it off sale.
pub fn toggle_item_active(
    catalog: &CatalogState,
    scope: &MerchantScope,
    item_id: &str,
) -> Result<ItemResponse, ApiError> {
    debug!(item_id = %item_id, "toggle_item_active command");
    let id = parse_item_id(item_id)?;

    let item = catalog.inner().items().toggle_active(scope, id)?;
    let message = if item.active {
        format!("{} is now for sale.", item.name)
    } else {
        format!("{} is no longer for sale.", item.name)
    };
    Ok(ItemResponse { item, message })
}

pub fn delete_item(
    catalog: &CatalogState,
    scope: &MerchantScope,
    item_id: &str,
) -> Result<ItemResponse, ApiError> {
    debug!(item_id = %item_id, "delete_item command");
    let id = parse_item_id(item_id)?;

    let item = catalog.inner().items().delete(scope, id)?;
    let message = format!("{} has been removed from your inventory.", item.name);
    Ok(ItemResponse { item, message })
}

/// Lists the acting merchant's items, including inactive ones.
pub fn list_items(catalog: &CatalogState, scope: &MerchantScope) -> Result<Vec<Item>, ApiError> {
    debug!(merchant_id = %scope.merchant_id(), "list_items command");
    Ok(catalog
        .inner()
        .items()
        .list_for_merchant(scope.merchant_id())?)
}
