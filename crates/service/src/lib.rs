//! `marketplace-service` — the single entry point for marketplace operations.
//!
//! [`Marketplace`] validates every request before touching the repository and
//! reports violations as typed [`DomainError`]s. Operations are grouped by
//! family: users, enterprises, products and orders.

pub mod attribute;
pub mod format;
pub mod marketplace;

mod enterprises;
mod orders;
mod products;
mod users;

pub use marketplace::{Marketplace, ShutdownError};

pub use marketplace_core::{DomainError, DomainResult, EnterpriseId, OrderId, Price, ProductId, UserId};
pub use marketplace_enterprises::{EnterpriseSpec, EnterpriseType};
pub use marketplace_infra::{InMemoryDocumentStore, JsonFileStore, StorageConfig, StoreError};
pub use marketplace_orders::OrderState;
