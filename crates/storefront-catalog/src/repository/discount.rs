//! # Discount Repository
//!
//! Merchant-scoped CRUD for quantity-break discounts.
//!
//! Discounts are never copied into carts. The next quote after any change
//! here picks it up through [`storefront_core::CatalogLookup`].

use chrono::Utc;
use tracing::{debug, warn};

use storefront_core::validation::{validate_discount, DiscountDraft, DiscountParams};
use storefront_core::{Discount, DiscountId, MerchantId};

use crate::error::{CatalogError, CatalogResult};
use crate::repository::MerchantScope;
use crate::store::Catalog;

/// Repository for discount records.
///
/// ## Usage
/// ```rust,ignore
/// let repo = catalog.discounts();
///
/// let discount = repo.create(&scope, &params)?;
/// let all = repo.list_for_merchant(scope.merchant_id())?;
/// ```
#[derive(Debug, Clone)]
pub struct DiscountRepository {
    catalog: Catalog,
}

impl DiscountRepository {
    pub fn new(catalog: Catalog) -> Self {
        DiscountRepository { catalog }
    }

    /// Validates and stores a new discount for the scoped merchant.
    ///
    /// ## Errors
    /// - `Validation` with every violated field
    /// - `NotFound` when the scoped merchant does not exist
    pub fn create(
        &self,
        scope: &MerchantScope,
        params: &DiscountParams,
    ) -> CatalogResult<Discount> {
        let draft = Self::validated(params)?;

        let mut tables = self.catalog.write()?;
        if !tables.merchants.contains_key(&scope.merchant_id()) {
            return Err(CatalogError::not_found("Merchant", scope.merchant_id()));
        }

        let now = Utc::now();
        let discount = Discount {
            id: DiscountId::new(),
            merchant_id: scope.merchant_id(),
            name: draft.name,
            quantity: draft.quantity,
            percentage: draft.percentage,
            created_at: now,
            updated_at: now,
        };
        tables.discounts.insert(discount.id, discount.clone());

        debug!(
            discount_id = %discount.id,
            merchant_id = %discount.merchant_id,
            quantity = discount.quantity,
            percentage = discount.percentage.value(),
            "Created discount"
        );
        Ok(discount)
    }

    /// Replaces a discount's name, threshold and percentage.
    pub fn update(
        &self,
        scope: &MerchantScope,
        id: DiscountId,
        params: &DiscountParams,
    ) -> CatalogResult<Discount> {
        let draft = Self::validated(params)?;

        let mut tables = self.catalog.write()?;
        let discount = tables
            .discounts
            .get_mut(&id)
            .filter(|d| scope.owns(d.merchant_id))
            .ok_or_else(|| CatalogError::not_found("Discount", id))?;

        discount.name = draft.name;
        discount.quantity = draft.quantity;
        discount.percentage = draft.percentage;
        discount.updated_at = Utc::now();

        debug!(
            discount_id = %id,
            quantity = discount.quantity,
            percentage = discount.percentage.value(),
            "Updated discount"
        );
        Ok(discount.clone())
    }

    /// Deletes a discount and returns the removed record.
    pub fn delete(&self, scope: &MerchantScope, id: DiscountId) -> CatalogResult<Discount> {
        let mut tables = self.catalog.write()?;
        match tables.discounts.get(&id) {
            Some(d) if scope.owns(d.merchant_id) => {}
            _ => return Err(CatalogError::not_found("Discount", id)),
        }

        let removed = tables
            .discounts
            .remove(&id)
            .ok_or_else(|| CatalogError::not_found("Discount", id))?;

        debug!(discount_id = %id, "Deleted discount");
        Ok(removed)
    }

    /// Gets a discount by ID.
    pub fn get(&self, id: DiscountId) -> CatalogResult<Option<Discount>> {
        Ok(self.catalog.read()?.discounts.get(&id).cloned())
    }

    /// Lists a merchant's discounts, oldest first.
    ///
    /// This is also the order pricing sees them in, so among equal
    /// percentages the oldest discount is the one reported on a quote.
    pub fn list_for_merchant(&self, merchant_id: MerchantId) -> CatalogResult<Vec<Discount>> {
        Ok(self.catalog.read()?.discounts_of(merchant_id))
    }

    fn validated(params: &DiscountParams) -> CatalogResult<DiscountDraft> {
        validate_discount(params).map_err(|errors| {
            warn!(errors = %errors, "Rejected discount submission");
            CatalogError::Validation(errors)
        })
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::MerchantParams;

    fn setup() -> (Catalog, MerchantScope) {
        let catalog = Catalog::new();
        let merchant = catalog
            .merchants()
            .create(&MerchantParams {
                name: "Brian's Bike Shop".to_string(),
                ..MerchantParams::default()
            })
            .unwrap();
        (catalog, MerchantScope::new(merchant.id))
    }

    fn params(quantity: &str, percentage: &str) -> DiscountParams {
        DiscountParams {
            name: Some("Bulk".to_string()),
            quantity: Some(quantity.to_string()),
            percentage: Some(percentage.to_string()),
        }
    }

    #[test]
    fn test_create_discount() {
        let (catalog, scope) = setup();
        let discount = catalog.discounts().create(&scope, &params("10", "5")).unwrap();

        assert_eq!(discount.quantity, 10);
        assert_eq!(discount.percentage.value(), 5);
        assert_eq!(discount.merchant_id, scope.merchant_id());
        assert_eq!(catalog.discounts().get(discount.id).unwrap(), Some(discount));
    }

    #[test]
    fn test_create_rejects_invalid_fields() {
        let (catalog, scope) = setup();
        let err = catalog
            .discounts()
            .create(&scope, &params("ten", "5"))
            .unwrap_err();

        match err {
            CatalogError::Validation(errors) => {
                assert_eq!(errors.to_string(), "quantity is not a number")
            }
            other => panic!("expected validation error, got {other:?}"),
        }
        assert!(catalog
            .discounts()
            .list_for_merchant(scope.merchant_id())
            .unwrap()
            .is_empty());
    }

    #[test]
    fn test_update_discount() {
        let (catalog, scope) = setup();
        let discount = catalog.discounts().create(&scope, &params("10", "5")).unwrap();

        let updated = catalog
            .discounts()
            .update(&scope, discount.id, &params("5", "50"))
            .unwrap();
        assert_eq!(updated.quantity, 5);
        assert_eq!(updated.percentage.value(), 50);

        let err = catalog
            .discounts()
            .update(&scope, discount.id, &params("5", "101"))
            .unwrap_err();
        assert!(matches!(err, CatalogError::Validation(_)));
        assert_eq!(catalog.discounts().get(discount.id).unwrap(), Some(updated));
    }

    #[test]
    fn test_foreign_merchant_sees_not_found() {
        let (catalog, scope) = setup();
        let discount = catalog.discounts().create(&scope, &params("10", "5")).unwrap();
        let other = MerchantScope::new(MerchantId::new());

        assert!(matches!(
            catalog.discounts().update(&other, discount.id, &params("1", "99")),
            Err(CatalogError::NotFound { entity: "Discount", .. })
        ));
        assert!(matches!(
            catalog.discounts().delete(&other, discount.id),
            Err(CatalogError::NotFound { .. })
        ));
        assert_eq!(
            catalog.discounts().get(discount.id).unwrap(),
            Some(discount)
        );
    }

    #[test]
    fn test_delete_discount() {
        let (catalog, scope) = setup();
        let discount = catalog.discounts().create(&scope, &params("10", "5")).unwrap();

        catalog.discounts().delete(&scope, discount.id).unwrap();
        assert!(catalog.discounts().get(discount.id).unwrap().is_none());
        assert!(catalog.discounts().delete(&scope, discount.id).is_err());
    }

    #[test]
    fn test_list_only_own_discounts() {
        let (catalog, scope) = setup();
        let other = catalog
            .merchants()
            .create(&MerchantParams {
                name: "Other".to_string(),
                ..MerchantParams::default()
            })
            .unwrap();

        catalog.discounts().create(&scope, &params("10", "5")).unwrap();
        catalog.discounts().create(&scope, &params("20", "10")).unwrap();
        catalog
            .discounts()
            .create(&MerchantScope::new(other.id), &params("1", "1"))
            .unwrap();

        let own = catalog
            .discounts()
            .list_for_merchant(scope.merchant_id())
            .unwrap();
        assert_eq!(own.len(), 2);
        assert!(own.iter().all(|d| d.merchant_id == scope.merchant_id()));
    }
}
