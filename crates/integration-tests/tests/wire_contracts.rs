//! Tests for the JSON shapes browser clients depend on.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde_json::json;

use clove_core::{Email, Price, ProductId, Username};
use clove_storefront::models::CartLine;

#[test]
fn test_cart_line_wire_shape() {
    let line = CartLine {
        product_id: ProductId::new(12),
        quantity: 3,
    };

    let value = serde_json::to_value(&line).expect("serialize");
    assert_eq!(value, json!({ "productId": 12, "quantity": 3 }));
}

#[test]
fn test_cart_serializes_as_bare_array() {
    // GET /api/cart returns the lines directly, not wrapped in an object.
    let cart = vec![
        CartLine {
            product_id: ProductId::new(1),
            quantity: 2,
        },
        CartLine {
            product_id: ProductId::new(5),
            quantity: 1,
        },
    ];

    let value = serde_json::to_value(&cart).expect("serialize");
    assert!(value.is_array());
    assert_eq!(value.as_array().map(Vec::len), Some(2));
}

#[test]
fn test_price_serializes_as_decimal_string() {
    // Money travels as strings so clients never see float artifacts.
    let price = Price::new(Decimal::from_str("2499.50").expect("decimal")).expect("price");
    let value = serde_json::to_value(price).expect("serialize");
    assert_eq!(value, json!("2499.50"));
}

#[test]
fn test_price_deserializes_from_json_numbers() {
    // The admin dashboard posts prices as plain JSON numbers.
    let price: Decimal = serde_json::from_value(json!(2999)).expect("from int");
    assert_eq!(price, Decimal::from(2999));

    let price: Decimal = serde_json::from_value(json!("19.99")).expect("from string");
    assert_eq!(price, Decimal::from_str("19.99").expect("decimal"));
}

// =============================================================================
// Identifier Validation (signup contract)
// =============================================================================

#[test]
fn test_signup_identifiers_normalize_to_lowercase() {
    assert_eq!(
        Username::parse("NewUser_1").expect("username").as_str(),
        "newuser_1"
    );
    assert_eq!(
        Email::parse("New.User@Example.COM").expect("email").as_str(),
        "new.user@example.com"
    );
}

#[test]
fn test_signup_rejects_malformed_identifiers() {
    assert!(Username::parse("ab").is_err());
    assert!(Username::parse("has space").is_err());
    assert!(Email::parse("not-an-email").is_err());
    assert!(Email::parse("user@nodot").is_err());
}

#[test]
fn test_product_price_validation_contract() {
    // POST /api/admin/products: price must be strictly positive with at
    // most two decimal places.
    assert!(Price::new(Decimal::ZERO).is_err());
    assert!(Price::new(Decimal::from_str("-1").expect("decimal")).is_err());
    assert!(Price::new(Decimal::from_str("0.001").expect("decimal")).is_err());
    assert!(Price::new(Decimal::from_str("59999").expect("decimal")).is_ok());
}
