use std::sync::Arc;

use marketplace_infra::{Document, DocumentStore};
use marketplace_service::{
    EnterpriseId, InMemoryDocumentStore, Marketplace, OrderId, StorageConfig, StoreError, UserId,
};

const TAX_ID: &str = "12345678901234";

/// Owner, restaurant with one product, customer and an order holding the product.
fn populate(m: &mut Marketplace) -> (UserId, EnterpriseId, OrderId) {
    let owner = m
        .create_owner("Ana", "ana@mail.com", "secret", "Rua A", TAX_ID)
        .unwrap();
    let restaurant = m.create_restaurant(owner, "Casa", "Rua 1", "italiana").unwrap();
    m.create_market(owner, "Mercadinho", "Rua 3", "08:00", "20:00", "minimercado")
        .unwrap();
    let pizza = m.create_product(restaurant, "Pizza", 12.0, "comida").unwrap();
    let customer = m
        .create_customer("Joao", "joao@mail.com", "1234", "Rua B")
        .unwrap();
    let order = m.create_order(customer, restaurant).unwrap();
    m.add_product_to_order(order, pizza).unwrap();
    (customer, restaurant, order)
}

#[test]
fn state_survives_shutdown_and_reopen() {
    marketplace_observability::init();
    let store = InMemoryDocumentStore::arc();

    let mut m = Marketplace::open(Arc::clone(&store)).unwrap();
    let (customer, restaurant, order) = populate(&mut m);
    m.shutdown().unwrap();

    for document in Document::ALL {
        assert!(store.contains(document), "{document} was not written");
    }

    let mut reopened = Marketplace::open(Arc::clone(&store)).unwrap();
    assert_eq!(reopened.login("joao@mail.com", "1234").unwrap(), customer);
    assert_eq!(reopened.list_products(restaurant).unwrap(), "{[Pizza]}");
    assert_eq!(reopened.order_attribute(order, "valor").unwrap(), "12.00");
    assert_eq!(
        reopened.enterprise_attribute(EnterpriseId::new(2), "abre").unwrap(),
        "08:00"
    );

    // Sequences continue after the loaded ids.
    let bia = reopened
        .create_customer("Bia", "bia@mail.com", "1234", "Rua C")
        .unwrap();
    assert_eq!(bia, UserId::new(3));
    let suco = reopened.create_product(restaurant, "Suco", 5.0, "bebida").unwrap();
    assert_eq!(suco.get(), 2);
}

#[test]
fn json_files_round_trip_through_a_data_dir() {
    marketplace_observability::init();
    let dir = tempfile::tempdir().unwrap();
    let config = StorageConfig::new(dir.path());

    let mut m = Marketplace::from_config(&config).unwrap();
    let (customer, restaurant, order) = populate(&mut m);
    m.close_order(order).unwrap();
    m.shutdown().unwrap();

    for document in Document::ALL {
        assert!(dir.path().join(document.file_name()).exists());
    }

    let reopened = Marketplace::from_config(&config).unwrap();
    assert_eq!(reopened.order_id_by_index(customer, restaurant, 0).unwrap(), order);
    assert_eq!(reopened.order_attribute(order, "estado").unwrap(), "preparando");
    assert_eq!(reopened.order_attribute(order, "produtos").unwrap(), "{[Pizza]}");
}

#[test]
fn reset_clears_memory_and_storage() {
    marketplace_observability::init();
    let store = InMemoryDocumentStore::arc();

    let mut m = Marketplace::open(Arc::clone(&store)).unwrap();
    populate(&mut m);
    m.shutdown().unwrap();

    let mut m = Marketplace::open(Arc::clone(&store)).unwrap();
    m.reset().unwrap();
    assert!(m.repository().users().is_empty());
    assert!(m.repository().enterprises().is_empty());
    assert!(m.repository().orders().is_empty());
    for document in Document::ALL {
        assert!(store.read(document).unwrap().is_none());
    }

    // Ids restart from one after a reset.
    let id = m
        .create_customer("Joao", "joao@mail.com", "1234", "Rua B")
        .unwrap();
    assert_eq!(id, UserId::new(1));
}

#[test]
fn failed_shutdown_returns_the_marketplace_for_a_retry() {
    marketplace_observability::init();
    let dir = tempfile::tempdir().unwrap();
    let data_dir = dir.path().join("data");
    let config = StorageConfig::new(&data_dir);

    let mut m = Marketplace::from_config(&config).unwrap();
    let customer = m
        .create_customer("Joao", "joao@mail.com", "1234", "Rua B")
        .unwrap();

    // A regular file where the data directory should be.
    std::fs::write(&data_dir, "x").unwrap();
    let err = m.shutdown().unwrap_err();
    assert!(matches!(err.store_error(), StoreError::Io { .. }));

    let m = err.into_marketplace();
    assert_eq!(m.login("joao@mail.com", "1234").unwrap(), customer);
    assert!(m.save().is_err());

    std::fs::remove_file(&data_dir).unwrap();
    m.shutdown().unwrap();

    let reopened = Marketplace::from_config(&config).unwrap();
    assert_eq!(reopened.login("joao@mail.com", "1234").unwrap(), customer);
}

#[test]
fn deleted_order_number_is_not_reused_across_sessions() {
    marketplace_observability::init();
    let store = InMemoryDocumentStore::arc();

    let mut m = Marketplace::open(Arc::clone(&store)).unwrap();
    let (customer, restaurant, first) = populate(&mut m);
    m.close_order(first).unwrap();
    let second = m.create_order(customer, restaurant).unwrap();
    assert_eq!(second, OrderId::new(2));
    m.delete_order(second).unwrap();
    m.shutdown().unwrap();

    let mut reopened = Marketplace::open(Arc::clone(&store)).unwrap();
    let third = reopened.create_order(customer, restaurant).unwrap();
    assert_eq!(third, OrderId::new(3));
}

#[test]
fn missing_documents_open_an_empty_marketplace() {
    let dir = tempfile::tempdir().unwrap();
    let m = Marketplace::from_config(&StorageConfig::new(dir.path().join("fresh"))).unwrap();

    assert!(m.repository().users().is_empty());
    assert!(m.repository().orders().is_empty());
}
