//! Enterprise management.

use marketplace_core::{DomainError, DomainResult, EnterpriseId, Entity, UserId, require_non_empty};
use marketplace_enterprises::{EnterpriseSpec, OpeningHours, RegisterEnterprise};

use crate::attribute::EnterpriseAttribute;
use crate::format::{format_list, format_pair};
use crate::marketplace::Marketplace;

impl Marketplace {
    /// Register an enterprise of the kind described by `spec`.
    ///
    /// Fails with `UnauthorizedRole` unless `owner` is a registered owner, and
    /// applies the naming rules across every enterprise of either kind.
    pub fn create_enterprise(
        &mut self,
        owner: UserId,
        name: &str,
        address: &str,
        spec: EnterpriseSpec,
    ) -> DomainResult<EnterpriseId> {
        self.owner(owner)?;

        let cmd = RegisterEnterprise {
            owner,
            name: name.to_string(),
            address: address.to_string(),
            spec,
        };
        cmd.validate()?;

        for existing in self.repo.enterprises() {
            if let Err(err) = existing.check_name_clash(owner, name, address) {
                tracing::warn!(owner = %owner, name, "enterprise rejected: {err}");
                return Err(err);
            }
        }

        let kind = cmd.spec.enterprise_type();
        let id = self.repo.insert_enterprise(cmd);
        tracing::info!(enterprise_id = %id, owner = %owner, %kind, "enterprise created");
        Ok(id)
    }

    pub fn create_restaurant(
        &mut self,
        owner: UserId,
        name: &str,
        address: &str,
        cuisine: &str,
    ) -> DomainResult<EnterpriseId> {
        self.create_enterprise(owner, name, address, EnterpriseSpec::restaurant(cuisine))
    }

    pub fn create_market(
        &mut self,
        owner: UserId,
        name: &str,
        address: &str,
        opens: &str,
        closes: &str,
        market_type: &str,
    ) -> DomainResult<EnterpriseId> {
        self.owner(owner)?;
        let spec = EnterpriseSpec::market(opens, closes, market_type)?;
        self.create_enterprise(owner, name, address, spec)
    }

    /// `{[[name, address], ...]}` for every enterprise of `owner`, in insertion order.
    pub fn enterprises_of_owner(&self, owner: UserId) -> DomainResult<String> {
        self.owner(owner)?;
        let pairs = self
            .repo
            .enterprises()
            .iter()
            .filter(|e| e.owner() == owner)
            .map(|e| format_pair(e.name(), e.address()));
        Ok(format_list(pairs))
    }

    /// Id of the `index`-th enterprise (storage order) named `name`.
    pub fn enterprise_id_by_name(&self, name: &str, index: usize) -> DomainResult<EnterpriseId> {
        require_non_empty(name, "enterprise name")?;

        let matches: Vec<EnterpriseId> = self
            .repo
            .enterprises()
            .iter()
            .filter(|e| e.name() == name)
            .map(|e| e.id())
            .collect();

        if matches.is_empty() {
            return Err(DomainError::EnterpriseNotFound);
        }
        matches.get(index).copied().ok_or_else(|| {
            DomainError::invalid_argument(format!(
                "index {index} out of range for {} enterprise(s) named '{name}'",
                matches.len()
            ))
        })
    }

    pub fn enterprise_attribute(&self, id: EnterpriseId, attribute: &str) -> DomainResult<String> {
        let enterprise = self.enterprise(id)?;
        let unknown = || DomainError::unknown_attribute(attribute);

        let value = match attribute.parse::<EnterpriseAttribute>()? {
            EnterpriseAttribute::Id => enterprise.id().to_string(),
            EnterpriseAttribute::Name => enterprise.name().to_string(),
            EnterpriseAttribute::Address => enterprise.address().to_string(),
            EnterpriseAttribute::Owner => self.user(enterprise.owner())?.name().to_string(),
            EnterpriseAttribute::Cuisine => enterprise.cuisine().ok_or_else(unknown)?.to_string(),
            EnterpriseAttribute::MarketType => {
                enterprise.market_type().ok_or_else(unknown)?.to_string()
            }
            EnterpriseAttribute::Opens => enterprise.hours().ok_or_else(unknown)?.opens_label(),
            EnterpriseAttribute::Closes => enterprise.hours().ok_or_else(unknown)?.closes_label(),
        };
        Ok(value)
    }

    /// Overwrite a market's opening hours.
    pub fn update_market_hours(
        &mut self,
        market: EnterpriseId,
        opens: &str,
        closes: &str,
    ) -> DomainResult<()> {
        let enterprise = self
            .repo
            .enterprise_mut(market)
            .filter(|e| e.hours().is_some())
            .ok_or(DomainError::EnterpriseNotFound)?;

        let hours = OpeningHours::parse(opens, closes)?;
        let overnight = hours.crosses_midnight();
        enterprise.set_hours(hours)?;
        tracing::info!(enterprise_id = %market, opens, closes, overnight, "market hours updated");
        Ok(())
    }
}
