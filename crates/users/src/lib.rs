//! Users domain module.
//!
//! Customers place orders, owners run enterprises, couriers are carried in the
//! model only. Pure domain logic (no IO, no storage).

pub mod user;

pub use user::{RegisterUser, User, UserRole, validate_login, validate_tax_id};
