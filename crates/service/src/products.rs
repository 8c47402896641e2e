//! Product management. Catalogs belong to restaurants.

use marketplace_core::{DomainError, DomainResult, EnterpriseId, Entity, ProductId};
use marketplace_products::ProductDetails;

use crate::attribute::ProductAttribute;
use crate::format::format_list;
use crate::marketplace::Marketplace;

impl Marketplace {
    pub fn create_product(
        &mut self,
        enterprise: EnterpriseId,
        name: &str,
        price: f64,
        category: &str,
    ) -> DomainResult<ProductId> {
        let details = ProductDetails::new(name, price, category)?;

        if self.restaurant(enterprise)?.product_by_name(name).is_some() {
            return Err(DomainError::duplicate_name(format!(
                "product '{name}' already exists in enterprise {enterprise}"
            )));
        }

        let id = self.repo.insert_product(enterprise, details)?;
        tracing::info!(product_id = %id, enterprise_id = %enterprise, "product created");
        Ok(id)
    }

    /// Overwrite name, price and category of the product `id`, wherever it lives.
    pub fn edit_product(
        &mut self,
        id: ProductId,
        name: &str,
        price: f64,
        category: &str,
    ) -> DomainResult<()> {
        let details = ProductDetails::new(name, price, category)?;

        let (enterprise, _) = self.repo.find_product(id).ok_or(DomainError::ProductNotFound)?;
        if enterprise
            .product_by_name(name)
            .is_some_and(|other| other.id() != id)
        {
            return Err(DomainError::duplicate_name(format!(
                "product '{name}' already exists in enterprise {}",
                enterprise.id()
            )));
        }

        let product = self.repo.product_mut(id).ok_or(DomainError::ProductNotFound)?;
        product.apply_edit(details);
        tracing::info!(product_id = %id, "product edited");
        Ok(())
    }

    pub fn product_attribute(
        &self,
        name: &str,
        enterprise: EnterpriseId,
        attribute: &str,
    ) -> DomainResult<String> {
        let restaurant = self.restaurant(enterprise)?;
        let product = restaurant
            .product_by_name(name)
            .ok_or(DomainError::ProductNotFound)?;

        let value = match attribute.parse::<ProductAttribute>()? {
            ProductAttribute::Id => product.id().to_string(),
            ProductAttribute::Name => product.name().to_string(),
            ProductAttribute::Price => product.price().to_string(),
            ProductAttribute::Category => product.category().to_string(),
            ProductAttribute::Enterprise => restaurant.name().to_string(),
        };
        Ok(value)
    }

    /// `{[name, ...]}` of the catalog, in insertion order.
    pub fn list_products(&self, enterprise: EnterpriseId) -> DomainResult<String> {
        let catalog = self
            .restaurant(enterprise)?
            .catalog()
            .ok_or(DomainError::EnterpriseNotFound)?;
        Ok(format_list(catalog.iter().map(|p| p.name())))
    }
}
