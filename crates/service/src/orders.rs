//! Order management.
//!
//! Orders reference products of their enterprise's catalog by id, so names and
//! prices are resolved through the catalog at lookup time.

use marketplace_core::{
    DomainError, DomainResult, EnterpriseId, Entity, OrderId, Price, ProductId, UserId,
    require_non_empty,
};
use marketplace_orders::Order;
use marketplace_products::Product;

use crate::attribute::OrderAttribute;
use crate::format::format_list;
use crate::marketplace::Marketplace;

impl Marketplace {
    /// Open an order for `customer` at `enterprise`.
    ///
    /// Only customers may order, and a customer holds at most one open order
    /// per enterprise.
    pub fn create_order(
        &mut self,
        customer: UserId,
        enterprise: EnterpriseId,
    ) -> DomainResult<OrderId> {
        let user = self.user(customer)?;
        if !user.is_customer() {
            return Err(DomainError::unauthorized_role(format!(
                "user {customer} ({}) cannot place orders",
                user.role().label()
            )));
        }
        self.enterprise(enterprise)?;

        if self
            .repo
            .orders()
            .iter()
            .any(|o| o.belongs_to(customer, enterprise) && o.is_open())
        {
            tracing::warn!(customer = %customer, enterprise_id = %enterprise, "order rejected: open order exists");
            return Err(DomainError::DuplicateOpenOrder);
        }

        let id = self.repo.insert_order(customer, enterprise);
        tracing::info!(order_id = %id, customer = %customer, enterprise_id = %enterprise, "order opened");
        Ok(id)
    }

    /// Id of the `index`-th order (storage order) of `customer` at `enterprise`.
    pub fn order_id_by_index(
        &self,
        customer: UserId,
        enterprise: EnterpriseId,
        index: usize,
    ) -> DomainResult<OrderId> {
        self.repo
            .orders()
            .iter()
            .filter(|o| o.belongs_to(customer, enterprise))
            .nth(index)
            .map(|o| o.id())
            .ok_or(DomainError::OrderNotFound)
    }

    pub fn add_product_to_order(&mut self, order: OrderId, product: ProductId) -> DomainResult<()> {
        let current = self.order(order)?;
        if !current.is_open() {
            return Err(DomainError::invalid_state(format!(
                "order {order} is {} and no longer accepts products",
                current.state()
            )));
        }
        self.enterprise(current.enterprise())?
            .product(product)
            .ok_or(DomainError::ProductNotFound)?;

        self.order_mut(order)?.add_product(product)?;
        tracing::debug!(order_id = %order, product_id = %product, "product added to order");
        Ok(())
    }

    /// Remove the first reference to the product named `product_name`.
    pub fn remove_product_from_order(
        &mut self,
        order: OrderId,
        product_name: &str,
    ) -> DomainResult<()> {
        if let Some(current) = self.repo.order(order) {
            if !current.is_open() {
                return Err(DomainError::invalid_state(format!(
                    "order {order} is {} and no longer accepts changes",
                    current.state()
                )));
            }
        }
        require_non_empty(product_name, "product name")?;

        let current = self.order(order)?;
        let product = self
            .enterprise(current.enterprise())?
            .product_by_name(product_name)
            .map(|p| p.id())
            .ok_or(DomainError::ProductNotFound)?;

        self.order_mut(order)?.remove_product(product)?;
        tracing::debug!(order_id = %order, product_id = %product, "product removed from order");
        Ok(())
    }

    /// Move an open order to preparing. Closing a preparing order changes nothing.
    pub fn close_order(&mut self, order: OrderId) -> DomainResult<()> {
        let current = self.order_mut(order)?;
        if current.is_open() {
            current.close();
            tracing::info!(order_id = %order, "order closed");
        }
        Ok(())
    }

    /// Remove an order in any state.
    pub fn delete_order(&mut self, order: OrderId) -> DomainResult<()> {
        self.repo
            .remove_order(order)
            .ok_or(DomainError::OrderNotFound)?;
        tracing::info!(order_id = %order, "order deleted");
        Ok(())
    }

    pub fn order_attribute(&self, order: OrderId, attribute: &str) -> DomainResult<String> {
        require_non_empty(attribute, "attribute")?;
        let order = self.order(order)?;

        let value = match attribute.parse::<OrderAttribute>()? {
            OrderAttribute::Id => order.id().to_string(),
            OrderAttribute::Customer => self.user(order.customer())?.name().to_string(),
            OrderAttribute::Enterprise => self.enterprise(order.enterprise())?.name().to_string(),
            OrderAttribute::State => order.state().to_string(),
            OrderAttribute::Products => {
                let products = self.order_products(order)?;
                format_list(products.iter().map(|p| p.name()))
            }
            OrderAttribute::Price => self.order_total(order)?.to_string(),
        };
        Ok(value)
    }

    /// Products referenced by `order`, in order, resolved through its enterprise.
    fn order_products<'a>(&'a self, order: &Order) -> DomainResult<Vec<&'a Product>> {
        let enterprise = self.enterprise(order.enterprise())?;
        order
            .products()
            .iter()
            .map(|id| enterprise.product(*id).ok_or(DomainError::ProductNotFound))
            .collect()
    }

    fn order_total(&self, order: &Order) -> DomainResult<Price> {
        Ok(self.order_products(order)?.iter().map(|p| p.price()).sum())
    }
}
