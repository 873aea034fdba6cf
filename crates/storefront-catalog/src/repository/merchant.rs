//! # Merchant Repository
//!
//! Merchant registration and lookup. Merchants are created by the
//! storefront operator, not by other merchants, so no scope is involved.

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use storefront_core::{Merchant, MerchantId, ValidationError, ValidationErrors};

use crate::error::{CatalogError, CatalogResult};
use crate::store::Catalog;

/// Fields for a new merchant.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MerchantParams {
    pub name: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// Repository for merchant records.
#[derive(Debug, Clone)]
pub struct MerchantRepository {
    catalog: Catalog,
}

impl MerchantRepository {
    pub fn new(catalog: Catalog) -> Self {
        MerchantRepository { catalog }
    }

    /// Registers a merchant. Only the name is required.
    pub fn create(&self, params: &MerchantParams) -> CatalogResult<Merchant> {
        let name = params.name.trim();
        if name.is_empty() {
            warn!("Rejected merchant without a name");
            return Err(ValidationErrors::from(ValidationError::Required {
                field: "name".to_string(),
            })
            .into());
        }

        let merchant = Merchant {
            id: MerchantId::new(),
            name: name.to_string(),
            address: params.address.trim().to_string(),
            city: params.city.trim().to_string(),
            state: params.state.trim().to_string(),
            zip: params.zip.trim().to_string(),
            created_at: Utc::now(),
        };

        self.catalog
            .write()?
            .merchants
            .insert(merchant.id, merchant.clone());

        debug!(merchant_id = %merchant.id, name = %merchant.name, "Created merchant");
        Ok(merchant)
    }

    /// Gets a merchant by ID.
    pub fn get(&self, id: MerchantId) -> CatalogResult<Option<Merchant>> {
        Ok(self.catalog.read()?.merchants.get(&id).cloned())
    }

    /// Gets a merchant by ID, failing with `NotFound` when absent.
    pub fn require(&self, id: MerchantId) -> CatalogResult<Merchant> {
        self.get(id)?
            .ok_or_else(|| CatalogError::not_found("Merchant", id))
    }

    /// Lists every merchant, oldest first.
    pub fn list(&self) -> CatalogResult<Vec<Merchant>> {
        let mut merchants: Vec<Merchant> =
            self.catalog.read()?.merchants.values().cloned().collect();
        merchants.sort_by(|a, b| a.created_at.cmp(&b.created_at).then(a.id.cmp(&b.id)));
        Ok(merchants)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
