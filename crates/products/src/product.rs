use serde::{Deserialize, Serialize};

use marketplace_core::{DomainResult, Entity, Price, ProductId, require_non_empty};

/// Entity: Product.
///
/// Owned by exactly one restaurant catalog. Orders hold its id, never a copy.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Price,
    category: String,
}

impl Product {
    pub fn create(id: ProductId, details: ProductDetails) -> Self {
        Self {
            id,
            name: details.name,
            price: details.price,
            category: details.category,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    /// Overwrite every editable field in place. The id never changes.
    pub fn apply_edit(&mut self, details: ProductDetails) {
        self.name = details.name;
        self.price = details.price;
        self.category = details.category;
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> ProductId {
        self.id
    }
}

/// Validated product fields, shared by creation and edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductDetails {
    name: String,
    price: Price,
    category: String,
}

impl ProductDetails {
    /// Validate raw input: non-empty name, non-negative price, non-empty category.
    pub fn new(name: impl Into<String>, price: f64, category: impl Into<String>) -> DomainResult<Self> {
        let name = name.into();
        let category = category.into();

        require_non_empty(&name, "product name")?;
        let price = Price::from_decimal(price)?;
        require_non_empty(&category, "category")?;

        Ok(Self { name, price, category })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn price(&self) -> Price {
        self.price
    }
}
