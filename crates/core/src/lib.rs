//! `marketplace-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the entity crates
//! and the marketplace service (no infrastructure concerns).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::{Entity, find_by_id, find_by_id_mut, max_id};
pub use error::{require_non_empty, DomainError, DomainResult};
pub use id::{EnterpriseId, OrderId, ProductId, UserId};
pub use value_object::{Price, ValueObject};
