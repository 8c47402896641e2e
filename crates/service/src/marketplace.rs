//! The marketplace domain service.
//!
//! ## Lifecycle
//!
//! ```text
//! Marketplace::open(store)   load every document (absent => empty)
//!   ↓
//! operations                 validate → query/mutate the repository
//!   ↓
//! shutdown()                 flush every collection to the store
//! ```
//!
//! A failed shutdown hands the service back inside [`ShutdownError`], so no
//! unsaved change is lost and the caller can retry. [`Marketplace::save`]
//! flushes without ending the session.
//!
//! The service is single-threaded: mutating operations take `&mut self`, so a
//! caller serving several clients puts the whole `Marketplace` behind one lock.

use marketplace_core::{DomainError, DomainResult, EnterpriseId, OrderId, UserId};
use marketplace_enterprises::Enterprise;
use marketplace_infra::{DocumentStore, Repository, StorageConfig, StoreError};
use marketplace_orders::Order;
use marketplace_users::User;

/// Domain service over an explicitly owned repository.
#[derive(Debug)]
pub struct Marketplace {
    pub(crate) repo: Repository,
}

/// A shutdown whose save failed. Owns the still-live service.
#[derive(Debug, thiserror::Error)]
#[error("marketplace shutdown failed: {source}")]
pub struct ShutdownError {
    marketplace: Box<Marketplace>,
    #[source]
    source: StoreError,
}

impl ShutdownError {
    pub fn store_error(&self) -> &StoreError {
        &self.source
    }

    /// Recover the service, with every unsaved change intact.
    pub fn into_marketplace(self) -> Marketplace {
        *self.marketplace
    }
}

impl Marketplace {
    /// Load the repository from `store`.
    pub fn open(store: impl DocumentStore + 'static) -> Result<Self, StoreError> {
        Ok(Self {
            repo: Repository::load(store)?,
        })
    }

    /// Open over JSON documents in the configured data directory.
    pub fn from_config(config: &StorageConfig) -> Result<Self, StoreError> {
        tracing::info!(data_dir = %config.data_dir.display(), "opening marketplace");
        Self::open(config.open_store())
    }

    /// Flush every collection, keeping the service open.
    pub fn save(&self) -> Result<(), StoreError> {
        self.repo.save()
    }

    /// Flush every collection and release the service.
    pub fn shutdown(self) -> Result<(), ShutdownError> {
        match self.repo.save() {
            Ok(()) => {
                tracing::info!("marketplace shut down");
                Ok(())
            }
            Err(source) => {
                tracing::error!(error = %source, "marketplace shutdown failed");
                Err(ShutdownError {
                    marketplace: Box::new(self),
                    source,
                })
            }
        }
    }

    /// Clear all state, in memory and persisted.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        self.repo.reset()
    }

    /// Read-only view of the underlying collections.
    pub fn repository(&self) -> &Repository {
        &self.repo
    }

    // Lookups shared by the operation families.

    pub(crate) fn user(&self, id: UserId) -> DomainResult<&User> {
        self.repo.user(id).ok_or(DomainError::UserNotFound)
    }

    pub(crate) fn enterprise(&self, id: EnterpriseId) -> DomainResult<&Enterprise> {
        self.repo.enterprise(id).ok_or(DomainError::EnterpriseNotFound)
    }

    /// A restaurant, i.e. an enterprise that has a product catalog.
    pub(crate) fn restaurant(&self, id: EnterpriseId) -> DomainResult<&Enterprise> {
        self.repo
            .enterprise(id)
            .filter(|e| e.catalog().is_some())
            .ok_or(DomainError::EnterpriseNotFound)
    }

    pub(crate) fn order(&self, id: OrderId) -> DomainResult<&Order> {
        self.repo.order(id).ok_or(DomainError::OrderNotFound)
    }

    pub(crate) fn order_mut(&mut self, id: OrderId) -> DomainResult<&mut Order> {
        self.repo.order_mut(id).ok_or(DomainError::OrderNotFound)
    }

    /// The registered owner `id`, or `UnauthorizedRole` for anyone else.
    pub(crate) fn owner(&self, id: UserId) -> DomainResult<&User> {
        self.repo
            .user(id)
            .filter(|u| u.is_owner())
            .ok_or_else(|| DomainError::unauthorized_role(format!("user {id} is not an owner")))
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use marketplace_infra::InMemoryDocumentStore;

    pub const TAX_ID: &str = "123.456.789-01";

    pub fn marketplace() -> Marketplace {
        Marketplace::open(InMemoryDocumentStore::new()).unwrap()
    }

    /// Owner with one restaurant.
    pub fn with_restaurant() -> (Marketplace, UserId, EnterpriseId) {
        let mut m = marketplace();
        let owner = m
            .create_owner("Ana", "ana@mail.com", "secret", "Rua A", TAX_ID)
            .unwrap();
        let restaurant = m
            .create_restaurant(owner, "Casa", "Rua 1", "italiana")
            .unwrap();
        (m, owner, restaurant)
    }
}
