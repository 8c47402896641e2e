use core::str::FromStr;

use serde::{Deserialize, Serialize};

use marketplace_core::{
    DomainError, DomainResult, EnterpriseId, Entity, ProductId, UserId, find_by_id, require_non_empty,
};
use marketplace_products::Product;

use crate::hours::OpeningHours;

/// Enterprise type tag, as given to the type-dispatching creation entry point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnterpriseType {
    Restaurant,
    Market,
}

impl FromStr for EnterpriseType {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "restaurante" | "restaurant" => Ok(EnterpriseType::Restaurant),
            "mercado" | "market" => Ok(EnterpriseType::Market),
            other => Err(DomainError::invalid_argument(format!(
                "unknown enterprise type: {other}"
            ))),
        }
    }
}

impl core::fmt::Display for EnterpriseType {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            EnterpriseType::Restaurant => f.write_str("restaurant"),
            EnterpriseType::Market => f.write_str("market"),
        }
    }
}

/// Variant data of an enterprise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum EnterpriseKind {
    Restaurant {
        cuisine: String,
        /// Owned catalog, in insertion order.
        #[serde(default)]
        products: Vec<Product>,
    },
    Market {
        hours: OpeningHours,
        market_type: String,
    },
}

/// Entity: Enterprise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Enterprise {
    id: EnterpriseId,
    name: String,
    address: String,
    owner: UserId,
    #[serde(flatten)]
    kind: EnterpriseKind,
}

impl Enterprise {
    /// Materialize a validated registration under a freshly allocated id.
    pub fn register(id: EnterpriseId, cmd: RegisterEnterprise) -> Self {
        let kind = match cmd.spec {
            EnterpriseSpec::Restaurant { cuisine } => EnterpriseKind::Restaurant {
                cuisine,
                products: Vec::new(),
            },
            EnterpriseSpec::Market { hours, market_type } => {
                EnterpriseKind::Market { hours, market_type }
            }
        };

        Self {
            id,
            name: cmd.name,
            address: cmd.address,
            owner: cmd.owner,
            kind,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn owner(&self) -> UserId {
        self.owner
    }

    pub fn cuisine(&self) -> Option<&str> {
        match &self.kind {
            EnterpriseKind::Restaurant { cuisine, .. } => Some(cuisine),
            EnterpriseKind::Market { .. } => None,
        }
    }

    pub fn market_type(&self) -> Option<&str> {
        match &self.kind {
            EnterpriseKind::Market { market_type, .. } => Some(market_type),
            EnterpriseKind::Restaurant { .. } => None,
        }
    }

    pub fn hours(&self) -> Option<&OpeningHours> {
        match &self.kind {
            EnterpriseKind::Market { hours, .. } => Some(hours),
            EnterpriseKind::Restaurant { .. } => None,
        }
    }

    /// Overwrite opening hours. Fails with `EnterpriseNotFound` on a restaurant,
    /// which has no hours to edit.
    pub fn set_hours(&mut self, new_hours: OpeningHours) -> DomainResult<()> {
        match &mut self.kind {
            EnterpriseKind::Market { hours, .. } => {
                *hours = new_hours;
                Ok(())
            }
            EnterpriseKind::Restaurant { .. } => Err(DomainError::EnterpriseNotFound),
        }
    }

    /// Product catalog; `None` for markets.
    pub fn catalog(&self) -> Option<&[Product]> {
        match &self.kind {
            EnterpriseKind::Restaurant { products, .. } => Some(products),
            EnterpriseKind::Market { .. } => None,
        }
    }

    pub fn catalog_mut(&mut self) -> Option<&mut Vec<Product>> {
        match &mut self.kind {
            EnterpriseKind::Restaurant { products, .. } => Some(products),
            EnterpriseKind::Market { .. } => None,
        }
    }

    pub fn product(&self, id: ProductId) -> Option<&Product> {
        find_by_id(self.catalog()?, id)
    }

    pub fn product_by_name(&self, name: &str) -> Option<&Product> {
        self.catalog()?.iter().find(|p| p.name() == name)
    }

    /// Whether the name/address pair clashes with this enterprise for `owner`.
    ///
    /// A different owner may never reuse the name; the same owner may reuse it
    /// only at another address.
    pub fn check_name_clash(&self, owner: UserId, name: &str, address: &str) -> DomainResult<()> {
        if self.name != name {
            return Ok(());
        }
        if self.owner != owner {
            return Err(DomainError::duplicate_name(format!(
                "enterprise name '{name}' belongs to another owner"
            )));
        }
        if self.address == address {
            return Err(DomainError::DuplicateNameAndAddress);
        }
        Ok(())
    }
}

impl Entity for Enterprise {
    type Id = EnterpriseId;

    fn id(&self) -> EnterpriseId {
        self.id
    }
}

/// Variant fields supplied at creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnterpriseSpec {
    Restaurant { cuisine: String },
    Market { hours: OpeningHours, market_type: String },
}

impl EnterpriseSpec {
    pub fn restaurant(cuisine: impl Into<String>) -> Self {
        EnterpriseSpec::Restaurant {
            cuisine: cuisine.into(),
        }
    }

    pub fn market(opens: &str, closes: &str, market_type: impl Into<String>) -> DomainResult<Self> {
        Ok(EnterpriseSpec::Market {
            hours: OpeningHours::parse(opens, closes)?,
            market_type: market_type.into(),
        })
    }

    /// Build a spec from a type tag and its positional variant fields:
    /// `[cuisine]` for a restaurant, `[opens, closes, market_type]` for a market.
    pub fn from_tag(tag: &str, fields: &[&str]) -> DomainResult<Self> {
        let kind: EnterpriseType = tag.parse()?;
        match (kind, fields) {
            (EnterpriseType::Restaurant, [cuisine]) => Ok(Self::restaurant(*cuisine)),
            (EnterpriseType::Market, [opens, closes, market_type]) => {
                Self::market(opens, closes, *market_type)
            }
            (kind, _) => Err(DomainError::invalid_argument(format!(
                "wrong number of fields for a {kind}: got {}",
                fields.len()
            ))),
        }
    }

    pub fn enterprise_type(&self) -> EnterpriseType {
        match self {
            EnterpriseSpec::Restaurant { .. } => EnterpriseType::Restaurant,
            EnterpriseSpec::Market { .. } => EnterpriseType::Market,
        }
    }
}

/// Command: register a new enterprise.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegisterEnterprise {
    pub owner: UserId,
    pub name: String,
    pub address: String,
    pub spec: EnterpriseSpec,
}

impl RegisterEnterprise {
    /// Field validation. Ownership and naming rules are checked by the caller.
    pub fn validate(&self) -> DomainResult<()> {
        require_non_empty(&self.name, "enterprise name")?;
        require_non_empty(&self.address, "enterprise address")?;
        match &self.spec {
            EnterpriseSpec::Restaurant { cuisine } => require_non_empty(cuisine, "cuisine type"),
            EnterpriseSpec::Market { market_type, .. } => {
                require_non_empty(market_type, "market type")
            }
        }
    }
}
