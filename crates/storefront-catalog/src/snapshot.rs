//! # Catalog Snapshots
//!
//! JSON seed format for loading a catalog in one go.
//!
//! ## Format
//! ```text
//! {
//!   "merchants": [{ "id": "...", "name": "Brian's Bike Shop", "city": "Richmond" }],
//!   "items":     [{ "id": "...", "merchant_id": "...", "name": "Rim",
//!                   "description": "Strong spokes.", "price_cents": 1000,
//!                   "inventory": 30 }],
//!   "discounts": [{ "id": "...", "merchant_id": "...", "quantity": 5,
//!                   "percentage": 50 }]
//! }
//! ```
//!
//! Records without timestamps are stamped at load time in file order, so the
//! order discounts appear in the file is the order pricing sees them in.
//!
//! Every integrity problem is collected before failing, the same way form
//! validation reports every field.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use storefront_core::validation::{DEFAULT_ITEM_IMAGE, MAX_PRICE_CENTS};
use storefront_core::{
    Discount, DiscountId, Item, ItemId, Merchant, MerchantId, Percentage,
};

use crate::error::{CatalogError, CatalogResult};
use crate::store::{Catalog, Tables};

fn default_active() -> bool {
    true
}

fn default_image() -> String {
    DEFAULT_ITEM_IMAGE.to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedMerchant {
    pub id: MerchantId,
    pub name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedItem {
    pub id: ItemId,
    pub merchant_id: MerchantId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price_cents: i64,
    pub inventory: u32,
    #[serde(default = "default_image")]
    pub image: String,
    #[serde(default = "default_active")]
    pub active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedDiscount {
    pub id: DiscountId,
    pub merchant_id: MerchantId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub quantity: u32,
    /// Checked against 1..=100 on load.
    pub percentage: u8,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

/// A whole catalog as plain records.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogSnapshot {
    #[serde(default)]
    pub merchants: Vec<SeedMerchant>,
    #[serde(default)]
    pub items: Vec<SeedItem>,
    #[serde(default)]
    pub discounts: Vec<SeedDiscount>,
}

impl CatalogSnapshot {
    /// Parses a snapshot from JSON text without checking integrity.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Builds tables from the snapshot, reporting every integrity problem.
    fn into_tables(self) -> CatalogResult<Tables> {
        let mut problems = Vec::new();
        let mut tables = Tables::default();
        let loaded_at = Utc::now();
        let stamp = |given: Option<DateTime<Utc>>, index: usize| {
            given.unwrap_or_else(|| loaded_at + Duration::microseconds(index as i64))
        };

        for (index, seed) in self.merchants.into_iter().enumerate() {
            if seed.name.trim().is_empty() {
                problems.push(format!("merchant {}: name can't be blank", seed.id));
            }
            let merchant = Merchant {
                id: seed.id,
                name: seed.name.trim().to_string(),
                address: seed.address,
                city: seed.city,
                state: seed.state,
                zip: seed.zip,
                created_at: stamp(seed.created_at, index),
            };
            if tables.merchants.insert(merchant.id, merchant).is_some() {
                problems.push(format!("merchant {}: duplicate id", seed.id));
            }
        }

        let merchant_ids: HashSet<MerchantId> = tables.merchants.keys().copied().collect();

        for (index, seed) in self.items.into_iter().enumerate() {
            if !merchant_ids.contains(&seed.merchant_id) {
                problems.push(format!(
                    "item {}: unknown merchant {}",
                    seed.id, seed.merchant_id
                ));
            }
            if seed.name.trim().is_empty() {
                problems.push(format!("item {}: name can't be blank", seed.id));
            }
            if seed.price_cents < 0 {
                problems.push(format!(
                    "item {}: price must be greater than or equal to 0",
                    seed.id
                ));
            }
            if seed.price_cents > MAX_PRICE_CENTS {
                problems.push(format!(
                    "item {}: price must be less than or equal to {}",
                    seed.id, MAX_PRICE_CENTS
                ));
            }
            let created_at = stamp(seed.created_at, index);
            let item = Item {
                id: seed.id,
                merchant_id: seed.merchant_id,
                name: seed.name.trim().to_string(),
                description: seed.description,
                price_cents: seed.price_cents,
                inventory: seed.inventory,
                image: seed.image,
                active: seed.active,
                created_at,
                updated_at: created_at,
            };
            if tables.items.insert(item.id, item).is_some() {
                problems.push(format!("item {}: duplicate id", seed.id));
            }
        }

        for (index, seed) in self.discounts.into_iter().enumerate() {
            if !merchant_ids.contains(&seed.merchant_id) {
                problems.push(format!(
                    "discount {}: unknown merchant {}",
                    seed.id, seed.merchant_id
                ));
            }
            if seed.quantity == 0 {
                problems.push(format!(
                    "discount {}: quantity must be greater than 0",
                    seed.id
                ));
            }
            let percentage = match Percentage::try_from(seed.percentage) {
                Ok(percentage) => percentage,
                Err(err) => {
                    problems.push(format!("discount {}: {}", seed.id, err));
                    continue;
                }
            };
            let created_at = stamp(seed.created_at, index);
            let discount = Discount {
                id: seed.id,
                merchant_id: seed.merchant_id,
                name: seed.name.filter(|n| !n.trim().is_empty()),
                quantity: seed.quantity,
                percentage,
                created_at,
                updated_at: created_at,
            };
            if tables.discounts.insert(discount.id, discount).is_some() {
                problems.push(format!("discount {}: duplicate id", seed.id));
            }
        }

        if problems.is_empty() {
            Ok(tables)
        } else {
            warn!(count = problems.len(), "Rejected catalog snapshot");
            Err(CatalogError::InvalidSnapshot(problems))
        }
    }
}

impl Catalog {
    /// Builds a catalog from a snapshot.
    pub fn from_snapshot(snapshot: CatalogSnapshot) -> CatalogResult<Self> {
        let tables = snapshot.into_tables()?;
        info!(
            merchants = tables.merchants.len(),
            items = tables.items.len(),
            discounts = tables.discounts.len(),
            "Loaded catalog snapshot"
        );
        Ok(Catalog::from_tables(tables))
    }

    /// Parses and loads a snapshot from JSON text.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        Catalog::from_snapshot(CatalogSnapshot::from_json_str(json)?)
    }

    /// Reads and loads a snapshot file.
    pub fn load(path: impl AsRef<Path>) -> CatalogResult<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "Reading catalog snapshot");
        let json = fs::read_to_string(path)?;
        Catalog::from_json_str(&json)
    }

    /// Exports the current records, oldest first within each table.
    pub fn snapshot(&self) -> CatalogResult<CatalogSnapshot> {
        let tables = self.read()?;

        let mut merchants: Vec<&Merchant> = tables.merchants.values().collect();
        merchants.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        let mut items: Vec<&Item> = tables.items.values().collect();
        items.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        let mut discounts: Vec<&Discount> = tables.discounts.values().collect();
        discounts.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));

        Ok(CatalogSnapshot {
            merchants: merchants
                .into_iter()
                .map(|m| SeedMerchant {
                    id: m.id,
                    name: m.name.clone(),
                    address: m.address.clone(),
                    city: m.city.clone(),
                    state: m.state.clone(),
                    zip: m.zip.clone(),
                    created_at: Some(m.created_at),
                })
                .collect(),
            items: items
                .into_iter()
                .map(|i| SeedItem {
                    id: i.id,
                    merchant_id: i.merchant_id,
                    name: i.name.clone(),
                    description: i.description.clone(),
                    price_cents: i.price_cents,
                    inventory: i.inventory,
                    image: i.image.clone(),
                    active: i.active,
                    created_at: Some(i.created_at),
                })
                .collect(),
            discounts: discounts
                .into_iter()
                .map(|d| SeedDiscount {
                    id: d.id,
                    merchant_id: d.merchant_id,
                    name: d.name.clone(),
                    quantity: d.quantity,
                    percentage: d.percentage.value(),
                    created_at: Some(d.created_at),
                })
                .collect(),
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
