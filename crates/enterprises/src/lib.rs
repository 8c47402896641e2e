//! Enterprises domain module.
//!
//! Restaurants own a product catalog; markets carry opening hours. Both are
//! owned by exactly one owner user.

pub mod enterprise;
pub mod hours;

pub use enterprise::{Enterprise, EnterpriseSpec, EnterpriseType, RegisterEnterprise};
pub use hours::OpeningHours;
