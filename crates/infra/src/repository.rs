//! In-memory entity collections with explicit load/save against a document store.
//!
//! The repository owns identity: every id is allocated here, sequentially from
//! 1 per entity type. Product ids come from one system-wide sequence so they
//! stay unique across catalogs. Sequences are persisted alongside the
//! collections; after a load each one continues after both its saved value
//! and the largest persisted id.

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;

use marketplace_core::{
    DomainError, DomainResult, EnterpriseId, Entity, OrderId, ProductId, UserId, find_by_id,
    find_by_id_mut, max_id,
};
use marketplace_enterprises::{Enterprise, RegisterEnterprise};
use marketplace_orders::Order;
use marketplace_products::{Product, ProductDetails};
use marketplace_users::{RegisterUser, User};

use crate::store::{Document, DocumentStore, StoreError};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct Sequences {
    user: UserId,
    enterprise: EnterpriseId,
    product: ProductId,
    order: OrderId,
}

impl Sequences {
    fn fresh() -> Self {
        Self {
            user: UserId::new(1),
            enterprise: EnterpriseId::new(1),
            product: ProductId::new(1),
            order: OrderId::new(1),
        }
    }

    fn after(users: &[User], enterprises: &[Enterprise], orders: &[Order]) -> Self {
        let user = max_id(users, UserId::get);
        let enterprise = max_id(enterprises, EnterpriseId::get);
        let product = enterprises
            .iter()
            .filter_map(Enterprise::catalog)
            .map(|catalog| max_id(catalog, ProductId::get))
            .max()
            .unwrap_or(0);
        let order = max_id(orders, OrderId::get);

        Self {
            user: UserId::new(user).next(),
            enterprise: EnterpriseId::new(enterprise).next(),
            product: ProductId::new(product).next(),
            order: OrderId::new(order).next(),
        }
    }

    /// Field-wise maximum.
    fn merge(self, other: Self) -> Self {
        Self {
            user: self.user.max(other.user),
            enterprise: self.enterprise.max(other.enterprise),
            product: self.product.max(other.product),
            order: self.order.max(other.order),
        }
    }
}

/// Entity collections in insertion order.
pub struct Repository {
    store: Box<dyn DocumentStore>,
    users: Vec<User>,
    enterprises: Vec<Enterprise>,
    orders: Vec<Order>,
    next: Sequences,
}

impl core::fmt::Debug for Repository {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Repository")
            .field("users", &self.users.len())
            .field("enterprises", &self.enterprises.len())
            .field("orders", &self.orders.len())
            .finish_non_exhaustive()
    }
}

fn load_collection<T: DeserializeOwned>(
    store: &dyn DocumentStore,
    document: Document,
) -> Result<Vec<T>, StoreError> {
    match store.read(document)? {
        Some(contents) => serde_json::from_str(&contents)
            .map_err(|source| StoreError::Malformed { document, source }),
        None => Ok(Vec::new()),
    }
}

fn save_collection<T: Serialize>(
    store: &dyn DocumentStore,
    document: Document,
    records: &[T],
) -> Result<(), StoreError> {
    let contents = serde_json::to_string_pretty(records)
        .map_err(|source| StoreError::Malformed { document, source })?;
    store.write(document, &contents)
}

impl Repository {
    /// Load every collection from `store`. Absent documents start empty.
    pub fn load(store: impl DocumentStore + 'static) -> Result<Self, StoreError> {
        let store: Box<dyn DocumentStore> = Box::new(store);
        let users: Vec<User> = load_collection(store.as_ref(), Document::Users)?;
        let enterprises: Vec<Enterprise> = load_collection(store.as_ref(), Document::Enterprises)?;
        let orders: Vec<Order> = load_collection(store.as_ref(), Document::Orders)?;
        let rebuilt = Sequences::after(&users, &enterprises, &orders);
        let next = match store.read(Document::Sequences)? {
            Some(contents) => serde_json::from_str::<Sequences>(&contents)
                .map_err(|source| StoreError::Malformed {
                    document: Document::Sequences,
                    source,
                })?
                .merge(rebuilt),
            None => rebuilt,
        };

        tracing::info!(
            users = users.len(),
            enterprises = enterprises.len(),
            orders = orders.len(),
            "repository loaded"
        );

        Ok(Self {
            store,
            users,
            enterprises,
            orders,
            next,
        })
    }

    /// Flush every collection to the store.
    pub fn save(&self) -> Result<(), StoreError> {
        save_collection(self.store.as_ref(), Document::Users, &self.users)?;
        save_collection(self.store.as_ref(), Document::Enterprises, &self.enterprises)?;
        save_collection(self.store.as_ref(), Document::Orders, &self.orders)?;
        let sequences = serde_json::to_string_pretty(&self.next).map_err(|source| {
            StoreError::Malformed {
                document: Document::Sequences,
                source,
            }
        })?;
        self.store.write(Document::Sequences, &sequences)?;

        tracing::info!(
            users = self.users.len(),
            enterprises = self.enterprises.len(),
            orders = self.orders.len(),
            "repository saved"
        );
        Ok(())
    }

    /// Delete every persisted document, then clear every collection and
    /// restart the id sequences. In-memory state is untouched if a removal
    /// fails.
    pub fn reset(&mut self) -> Result<(), StoreError> {
        for document in Document::ALL {
            self.store.remove(document)?;
        }

        self.users.clear();
        self.enterprises.clear();
        self.orders.clear();
        self.next = Sequences::fresh();
        tracing::info!("repository reset");
        Ok(())
    }

    // Users

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn user(&self, id: UserId) -> Option<&User> {
        find_by_id(&self.users, id)
    }

    pub fn user_by_email(&self, email: &str) -> Option<&User> {
        self.users.iter().find(|u| u.email() == email)
    }

    /// Store an already validated registration.
    pub fn insert_user(&mut self, cmd: RegisterUser) -> UserId {
        let id = self.next.user;
        self.next.user = id.next();
        self.users.push(User::register(id, cmd));
        id
    }

    /// Store a user record as is (e.g. a courier imported from elsewhere),
    /// keeping the sequence ahead of its id.
    pub fn insert_user_record(&mut self, user: User) -> DomainResult<()> {
        if self.user(user.id()).is_some() {
            return Err(DomainError::invalid_argument(format!(
                "user id {} already in use",
                user.id()
            )));
        }
        if self.user_by_email(user.email()).is_some() {
            return Err(DomainError::DuplicateEmail);
        }
        if user.id() >= self.next.user {
            self.next.user = user.id().next();
        }
        self.users.push(user);
        Ok(())
    }

    // Enterprises

    pub fn enterprises(&self) -> &[Enterprise] {
        &self.enterprises
    }

    pub fn enterprise(&self, id: EnterpriseId) -> Option<&Enterprise> {
        find_by_id(&self.enterprises, id)
    }

    pub fn enterprise_mut(&mut self, id: EnterpriseId) -> Option<&mut Enterprise> {
        find_by_id_mut(&mut self.enterprises, id)
    }

    /// Store an already validated registration.
    pub fn insert_enterprise(&mut self, cmd: RegisterEnterprise) -> EnterpriseId {
        let id = self.next.enterprise;
        self.next.enterprise = id.next();
        self.enterprises.push(Enterprise::register(id, cmd));
        id
    }

    // Products

    /// Locate a product in any catalog, with the enterprise that owns it.
    pub fn find_product(&self, id: ProductId) -> Option<(&Enterprise, &Product)> {
        self.enterprises
            .iter()
            .find_map(|e| e.product(id).map(|p| (e, p)))
    }

    pub fn product_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.enterprises
            .iter_mut()
            .filter_map(Enterprise::catalog_mut)
            .flat_map(|catalog| catalog.iter_mut())
            .find(|p| p.id() == id)
    }

    /// Append a product to a restaurant catalog under a fresh global id.
    pub fn insert_product(
        &mut self,
        enterprise: EnterpriseId,
        details: ProductDetails,
    ) -> DomainResult<ProductId> {
        let id = self.next.product;
        let catalog = self
            .enterprise_mut(enterprise)
            .and_then(Enterprise::catalog_mut)
            .ok_or(DomainError::EnterpriseNotFound)?;
        catalog.push(Product::create(id, details));
        self.next.product = id.next();
        Ok(id)
    }

    // Orders

    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    pub fn order(&self, id: OrderId) -> Option<&Order> {
        find_by_id(&self.orders, id)
    }

    pub fn order_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        find_by_id_mut(&mut self.orders, id)
    }

    pub fn insert_order(&mut self, customer: UserId, enterprise: EnterpriseId) -> OrderId {
        let id = self.next.order;
        self.next.order = id.next();
        self.orders.push(Order::open(id, customer, enterprise));
        id
    }

    pub fn remove_order(&mut self, id: OrderId) -> Option<Order> {
        let position = self.orders.iter().position(|o| o.id() == id)?;
        Some(self.orders.remove(position))
    }
}
