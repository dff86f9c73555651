//! Cart and order lifecycle through the public core API.

use inkwell_core::{
    AddOutcome, CartState, Catalog, CheckoutError, Customer, CustomerId, OrderId, Product,
    ProductCode,
};
use serde_json::Value;

fn product<'a>(catalog: &'a Catalog, code: &str) -> &'a Product {
    catalog
        .find(&ProductCode::parse(code).expect("valid code"))
        .expect("product in catalog")
}

#[test]
fn cart_state_machine() {
    let catalog = Catalog::standard();
    let mut customer = Customer::new(CustomerId::new(1), "Ada", "ada@example.com");
    assert_eq!(customer.cart().state(), CartState::Empty);

    // Empty -> checkout is rejected and stays Empty.
    assert_eq!(customer.checkout().err(), Some(CheckoutError::EmptyCart));
    assert_eq!(customer.cart().state(), CartState::Empty);
    assert!(customer.orders().is_empty());

    // Empty -> add -> NonEmpty -> add -> NonEmpty.
    assert_eq!(customer.add_to_cart(product(&catalog, "DFG"), 1), AddOutcome::Added);
    assert_eq!(customer.cart().state(), CartState::NonEmpty);
    assert_eq!(customer.add_to_cart(product(&catalog, "DFG"), 1), AddOutcome::Updated);
    assert_eq!(customer.cart().state(), CartState::NonEmpty);

    // NonEmpty -> checkout -> Empty.
    customer.checkout().expect("checkout succeeds");
    assert_eq!(customer.cart().state(), CartState::Empty);
}

#[test]
fn order_ids_follow_checkout_count() {
    let catalog = Catalog::standard();
    let mut customer = Customer::new(CustomerId::new(2), "Grace", "grace@example.com");

    for (n, code) in ["ABC", "CDE", "QWE", "RTY", "UIO"].iter().enumerate() {
        customer.add_to_cart(product(&catalog, code), 1);
        let id = customer.checkout().expect("checkout succeeds").id();
        assert_eq!(id, OrderId::after(n));
    }

    let ids: Vec<u32> = customer.orders().iter().map(|o| o.id().as_u32()).collect();
    assert_eq!(ids, [1, 2, 3, 4, 5]);
}

#[test]
fn order_total_matches_pre_checkout_cart() {
    let catalog = Catalog::standard();
    let mut customer = Customer::new(CustomerId::new(3), "Alan", "alan@example.com");
    customer.add_to_cart(product(&catalog, "PAS"), 3);
    customer.add_to_cart(product(&catalog, "FEK"), 2);
    customer.add_to_cart(product(&catalog, "PAS"), 1);

    let expected_total = customer.cart().calculate_total_amount();
    let expected_lines: Vec<_> = customer.cart().lines().cloned().collect();

    let order = customer.checkout().expect("checkout succeeds");
    assert_eq!(order.total_amount(), expected_total);
    assert_eq!(order.total_amount().to_string(), "62.00");
    assert!(order.lines().cloned().eq(expected_lines));
}

#[test]
fn customer_serializes_with_history() {
    let catalog = Catalog::standard();
    let mut customer = Customer::new(CustomerId::new(4), "Edsger", "edsger@example.com");
    customer.add_to_cart(product(&catalog, "CVB"), 2);
    customer.checkout().expect("checkout succeeds");
    customer.add_to_cart(product(&catalog, "HJK"), 1);

    let json: Value = serde_json::to_value(&customer).expect("serializes");
    assert_eq!(json["id"], 4);
    assert_eq!(json["orders"][0]["id"], 1);
    assert_eq!(json["orders"][0]["total_amount"], "36.00");
    assert_eq!(json["cart"]["lines"][0]["product"]["code"], "HJK");
    assert_eq!(json["cart"]["lines"][0]["quantity"], 1);
}
