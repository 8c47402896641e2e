//! User management.

use marketplace_core::{DomainError, DomainResult, Entity, UserId};
use marketplace_users::{RegisterUser, UserRole, validate_login};

use crate::attribute::UserAttribute;
use crate::marketplace::Marketplace;

impl Marketplace {
    pub fn create_customer(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        address: &str,
    ) -> DomainResult<UserId> {
        self.register(RegisterUser::customer(name, email, password, address))
    }

    pub fn create_owner(
        &mut self,
        name: &str,
        email: &str,
        password: &str,
        address: &str,
        tax_id: &str,
    ) -> DomainResult<UserId> {
        self.register(RegisterUser::owner(name, email, password, address, tax_id))
    }

    fn register(&mut self, cmd: RegisterUser) -> DomainResult<UserId> {
        cmd.validate()?;
        if self.repo.user_by_email(&cmd.email).is_some() {
            tracing::warn!(email = %cmd.email, "registration rejected: email already registered");
            return Err(DomainError::DuplicateEmail);
        }

        let role = cmd.role.label();
        let id = self.repo.insert_user(cmd);
        tracing::info!(user_id = %id, role, "user registered");
        Ok(id)
    }

    /// Plaintext credential check. Returns the matching user's id; issues no session.
    pub fn login(&self, email: &str, password: &str) -> DomainResult<UserId> {
        validate_login(email, password)?;
        self.repo
            .users()
            .iter()
            .find(|u| u.matches_credentials(email, password))
            .map(|u| u.id())
            .ok_or(DomainError::UserNotFound)
    }

    pub fn user_attribute(&self, id: UserId, attribute: &str) -> DomainResult<String> {
        let user = self.user(id)?;
        let unknown = || DomainError::unknown_attribute(attribute);

        let value = match attribute.parse::<UserAttribute>()? {
            UserAttribute::Id => user.id().to_string(),
            UserAttribute::Name => user.name().to_string(),
            UserAttribute::Email => user.email().to_string(),
            UserAttribute::Password => user.password().to_string(),
            UserAttribute::Address => user.address().to_string(),
            UserAttribute::TaxId => user.tax_id().ok_or_else(unknown)?.to_string(),
            UserAttribute::Vehicle => match user.role() {
                UserRole::Courier { vehicle, .. } => vehicle.clone(),
                _ => return Err(unknown()),
            },
            UserAttribute::Plate => match user.role() {
                UserRole::Courier { plate, .. } => plate.clone(),
                _ => return Err(unknown()),
            },
        };
        Ok(value)
    }
}
