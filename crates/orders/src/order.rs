use serde::{Deserialize, Serialize};

use marketplace_core::{DomainError, DomainResult, EnterpriseId, Entity, OrderId, ProductId, UserId};

/// Order lifecycle: `Open --close--> Preparing`. No transition back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderState {
    Open,
    Preparing,
}

impl OrderState {
    /// Label used by attribute lookups.
    pub fn label(self) -> &'static str {
        match self {
            OrderState::Open => "aberto",
            OrderState::Preparing => "preparando",
        }
    }
}

impl core::fmt::Display for OrderState {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

/// Entity: Order.
///
/// Holds references (ids) to products of its enterprise's catalog; removing a
/// reference never touches the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    id: OrderId,
    customer: UserId,
    enterprise: EnterpriseId,
    products: Vec<ProductId>,
    state: OrderState,
}

impl Order {
    /// New open order with no products.
    pub fn open(id: OrderId, customer: UserId, enterprise: EnterpriseId) -> Self {
        Self {
            id,
            customer,
            enterprise,
            products: Vec::new(),
            state: OrderState::Open,
        }
    }

    pub fn customer(&self) -> UserId {
        self.customer
    }

    pub fn enterprise(&self) -> EnterpriseId {
        self.enterprise
    }

    pub fn products(&self) -> &[ProductId] {
        &self.products
    }

    pub fn state(&self) -> OrderState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == OrderState::Open
    }

    pub fn belongs_to(&self, customer: UserId, enterprise: EnterpriseId) -> bool {
        self.customer == customer && self.enterprise == enterprise
    }

    fn ensure_open(&self, action: &str) -> DomainResult<()> {
        if !self.is_open() {
            return Err(DomainError::invalid_state(format!(
                "cannot {action} a closed order"
            )));
        }
        Ok(())
    }

    pub fn add_product(&mut self, product: ProductId) -> DomainResult<()> {
        self.ensure_open("add products to")?;
        self.products.push(product);
        Ok(())
    }

    /// Remove the first reference to `product`.
    pub fn remove_product(&mut self, product: ProductId) -> DomainResult<()> {
        self.ensure_open("remove products from")?;
        let position = self
            .products
            .iter()
            .position(|p| *p == product)
            .ok_or(DomainError::ProductNotFound)?;
        self.products.remove(position);
        Ok(())
    }

    /// Move to `Preparing`. Closing an already closed order changes nothing.
    pub fn close(&mut self) {
        self.state = OrderState::Preparing;
    }
}

impl Entity for Order {
    type Id = OrderId;

    fn id(&self) -> OrderId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_order() -> Order {
        Order::open(OrderId::new(1), UserId::new(2), EnterpriseId::new(3))
    }

    #[test]
    fn new_order_is_open_and_empty() {
        let order = test_order();
        assert_eq!(order.state(), OrderState::Open);
        assert!(order.products().is_empty());
        assert!(order.belongs_to(UserId::new(2), EnterpriseId::new(3)));
        assert!(!order.belongs_to(UserId::new(2), EnterpriseId::new(4)));
    }

    #[test]
    fn add_and_remove_products_while_open() {
        let mut order = test_order();
        order.add_product(ProductId::new(10)).unwrap();
        order.add_product(ProductId::new(11)).unwrap();
        order.add_product(ProductId::new(10)).unwrap();

        order.remove_product(ProductId::new(10)).unwrap();
        assert_eq!(order.products(), &[ProductId::new(11), ProductId::new(10)]);

        assert_eq!(order.remove_product(ProductId::new(99)), Err(DomainError::ProductNotFound));
    }

    #[test]
    fn cannot_modify_closed_order() {
        let mut order = test_order();
        order.add_product(ProductId::new(10)).unwrap();
        order.close();

        let err = order.add_product(ProductId::new(11)).unwrap_err();
        match err {
            DomainError::InvalidState(msg) if msg.contains("closed order") => {}
            _ => panic!("Expected InvalidState for adding to a closed order"),
        }

        assert!(matches!(
            order.remove_product(ProductId::new(10)),
            Err(DomainError::InvalidState(_))
        ));
        assert_eq!(order.products(), &[ProductId::new(10)]);
    }

    #[test]
    fn closing_twice_is_a_no_op() {
        let mut order = test_order();
        order.close();
        let snapshot = order.clone();
        order.close();
        assert_eq!(order, snapshot);
        assert_eq!(order.state().label(), "preparando");
    }

    #[test]
    fn state_serializes_lowercase() {
        let json = serde_json::to_value(test_order()).unwrap();
        assert_eq!(json["state"], "open");
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: once closed, no sequence of edits changes the product list.
            #[test]
            fn closed_order_is_frozen(ids in proptest::collection::vec(1u64..20, 0..30)) {
                let mut order = test_order();
                for id in &ids[..ids.len() / 2] {
                    order.add_product(ProductId::new(*id)).unwrap();
                }
                order.close();
                let frozen = order.products().to_vec();

                for id in &ids {
                    prop_assert!(order.add_product(ProductId::new(*id)).is_err());
                    prop_assert!(order.remove_product(ProductId::new(*id)).is_err());
                }
                prop_assert_eq!(order.products(), frozen.as_slice());
            }
        }
    }
}
