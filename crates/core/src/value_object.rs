//! Value object trait: equality by value, not identity.
//!
//! Value objects are domain objects that have **no identity** - they are defined entirely
//! by their attribute values. Two value objects with the same values are considered equal.

use serde::{Deserialize, Serialize};

use crate::error::{DomainError, DomainResult};

/// Marker trait for value objects.
///
/// Value objects are **immutable** and **compared by value**. To "modify" one,
/// build a new one.
///
/// - **Value Object**: `Price` (two prices of 1250 cents are the same price)
/// - **Entity**: `Product` (two products with the same id are the same product)
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}

/// Non-negative price, held in the smallest currency unit (cents).
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u64);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(0);

    pub const fn from_cents(cents: u64) -> Self {
        Self(cents)
    }

    /// Build a price from a decimal amount (e.g. `10.5`), rounded to the cent.
    ///
    /// Negative, NaN and infinite amounts are rejected.
    pub fn from_decimal(amount: f64) -> DomainResult<Self> {
        if !amount.is_finite() {
            return Err(DomainError::invalid_argument("price must be a finite number"));
        }
        if amount < 0.0 {
            return Err(DomainError::invalid_argument("price cannot be negative"));
        }
        let cents = (amount * 100.0).round();
        if cents > u64::MAX as f64 {
            return Err(DomainError::invalid_argument("price is too large"));
        }
        Ok(Self(cents as u64))
    }

    pub const fn cents(self) -> u64 {
        self.0
    }
}

/// Two decimal places with a period separator, e.g. `12.00`.
impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}.{:02}", self.0 / 100, self.0 % 100)
    }
}

impl core::ops::Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price(self.0.saturating_add(rhs.0))
    }
}

impl core::iter::Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats_with_two_decimals_and_period() {
        assert_eq!(Price::from_decimal(12.0).unwrap().to_string(), "12.00");
        assert_eq!(Price::from_decimal(7.25).unwrap().to_string(), "7.25");
        assert_eq!(Price::from_decimal(10.5).unwrap().to_string(), "10.50");
        assert_eq!(Price::from_decimal(0.05).unwrap().to_string(), "0.05");
    }

    #[test]
    fn rejects_negative_and_non_finite_amounts() {
        assert!(matches!(Price::from_decimal(-0.01), Err(DomainError::InvalidArgument(_))));
        assert!(matches!(Price::from_decimal(f64::NAN), Err(DomainError::InvalidArgument(_))));
        assert!(matches!(
            Price::from_decimal(f64::INFINITY),
            Err(DomainError::InvalidArgument(_))
        ));
    }

    #[test]
    fn zero_is_a_valid_price() {
        assert_eq!(Price::from_decimal(0.0).unwrap(), Price::ZERO);
    }

    #[test]
    fn sums_prices() {
        let total: Price = [Price::from_cents(1050), Price::from_cents(725)].into_iter().sum();
        assert_eq!(total.to_string(), "17.75");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: formatting always has exactly two fraction digits.
            #[test]
            fn display_has_two_fraction_digits(cents in 0u64..10_000_000) {
                let text = Price::from_cents(cents).to_string();
                let (whole, fraction) = text.split_once('.').unwrap();
                prop_assert_eq!(fraction.len(), 2);
                prop_assert_eq!(whole.parse::<u64>().unwrap() * 100 + fraction.parse::<u64>().unwrap(), cents);
            }

            /// Property: whole-cent decimal amounts round-trip exactly.
            #[test]
            fn whole_cent_amounts_round_trip(cents in 0u64..10_000_000) {
                let amount = cents as f64 / 100.0;
                prop_assert_eq!(Price::from_decimal(amount).unwrap().cents(), cents);
            }
        }
    }
}
