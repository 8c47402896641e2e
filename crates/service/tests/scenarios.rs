use marketplace_service::{DomainError, EnterpriseId, InMemoryDocumentStore, Marketplace, OrderId, UserId};

const TAX_ID: &str = "12345678901234";

struct World {
    m: Marketplace,
    owner: UserId,
    customer: UserId,
    restaurant: EnterpriseId,
}

fn world() -> World {
    marketplace_observability::init();

    let mut m = Marketplace::open(InMemoryDocumentStore::new()).expect("empty store opens");
    let owner = m
        .create_owner("Ana", "ana@mail.com", "secret", "Rua A", TAX_ID)
        .expect("owner registers");
    let restaurant = m
        .create_restaurant(owner, "Casa", "Rua 1", "italiana")
        .expect("restaurant registers");
    let customer = m
        .create_customer("Joao", "joao@mail.com", "1234", "Rua B")
        .expect("customer registers");

    World {
        m,
        owner,
        customer,
        restaurant,
    }
}

#[test]
fn order_total_reflects_added_product() {
    let World {
        mut m,
        customer,
        restaurant,
        ..
    } = world();
    let pizza = m.create_product(restaurant, "Pizza", 12.0, "comida").unwrap();

    let order = m.create_order(customer, restaurant).unwrap();
    assert_eq!(order, OrderId::new(1));

    m.add_product_to_order(order, pizza).unwrap();
    assert_eq!(m.order_attribute(order, "valor").unwrap(), "12.00");
    assert_eq!(m.order_attribute(order, "produtos").unwrap(), "{[Pizza]}");
}

#[test]
fn second_open_order_for_the_same_pair_is_rejected() {
    let World {
        mut m,
        customer,
        restaurant,
        ..
    } = world();
    m.create_order(customer, restaurant).unwrap();

    assert_eq!(
        m.create_order(customer, restaurant),
        Err(DomainError::DuplicateOpenOrder)
    );
}

#[test]
fn closed_orders_are_frozen() {
    let World {
        mut m,
        customer,
        restaurant,
        ..
    } = world();
    let pizza = m.create_product(restaurant, "Pizza", 12.0, "comida").unwrap();
    let order = m.create_order(customer, restaurant).unwrap();
    m.add_product_to_order(order, pizza).unwrap();
    m.close_order(order).unwrap();

    assert!(matches!(
        m.remove_product_from_order(order, "Pizza"),
        Err(DomainError::InvalidState(_))
    ));
    assert!(matches!(
        m.add_product_to_order(order, pizza),
        Err(DomainError::InvalidState(_))
    ));
    assert_eq!(m.order_attribute(order, "produtos").unwrap(), "{[Pizza]}");

    m.close_order(order).unwrap();
    assert_eq!(m.order_attribute(order, "valor").unwrap(), "12.00");
    assert_eq!(m.order_attribute(order, "estado").unwrap(), "preparando");
}

#[test]
fn owner_without_enterprises_lists_nothing() {
    let World { mut m, .. } = world();
    let lonely = m
        .create_owner("Bia", "bia@mail.com", "secret", "Rua Z", TAX_ID)
        .unwrap();

    assert_eq!(m.enterprises_of_owner(lonely).unwrap(), "{[]}");
}

#[test]
fn owners_cannot_order_and_customers_cannot_own() {
    let World {
        mut m,
        owner,
        customer,
        restaurant,
    } = world();

    assert!(matches!(
        m.create_order(owner, restaurant),
        Err(DomainError::UnauthorizedRole(_))
    ));
    assert!(matches!(
        m.create_restaurant(customer, "Outra", "Rua 5", "arabe"),
        Err(DomainError::UnauthorizedRole(_))
    ));
}

#[test]
fn full_session_through_lookups() {
    let World {
        mut m,
        owner,
        customer,
        restaurant,
    } = world();
    let market = m
        .create_market(owner, "Mercadinho", "Rua 3", "08:00", "20:00", "minimercado")
        .unwrap();

    assert_eq!(m.login("joao@mail.com", "1234").unwrap(), customer);
    assert_eq!(m.enterprise_id_by_name("Mercadinho", 0).unwrap(), market);
    assert_eq!(
        m.enterprises_of_owner(owner).unwrap(),
        "{[[Casa, Rua 1], [Mercadinho, Rua 3]]}"
    );

    m.create_product(restaurant, "Pizza", 10.5, "comida").unwrap();
    m.create_product(restaurant, "Suco", 4.25, "bebida").unwrap();
    assert_eq!(m.list_products(restaurant).unwrap(), "{[Pizza, Suco]}");

    let order = m.create_order(customer, restaurant).unwrap();
    let pizza = m.product_attribute("Pizza", restaurant, "id").unwrap().parse().unwrap();
    let suco = m.product_attribute("Suco", restaurant, "produto").unwrap().parse().unwrap();
    m.add_product_to_order(order, pizza).unwrap();
    m.add_product_to_order(order, suco).unwrap();
    assert_eq!(m.order_attribute(order, "preço").unwrap(), "14.75");

    m.remove_product_from_order(order, "Pizza").unwrap();
    assert_eq!(m.order_attribute(order, "valor").unwrap(), "4.25");

    m.close_order(order).unwrap();
    let next = m.create_order(customer, restaurant).unwrap();
    assert_eq!(m.order_id_by_index(customer, restaurant, 1).unwrap(), next);

    m.delete_order(order).unwrap();
    assert_eq!(m.order_id_by_index(customer, restaurant, 0).unwrap(), next);
}
