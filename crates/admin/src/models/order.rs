//! Order domain types for the admin surface.
//!
//! Admin order views carry the customer summary alongside the snapshot, the
//! way the dashboard's order table renders them.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use clove_core::{OrderId, OrderStatus, Price, ProductId, UserId};

/// An order with its customer and line items, as listed in the admin panel.
#[derive(Debug, Clone)]
pub struct AdminOrder {
    pub id: OrderId,
    pub customer: CustomerSummary,
    pub status: OrderStatus,
    pub total: Decimal,
    pub items: Vec<OrderLine>,
    pub shipping_name: String,
    pub shipping_address: String,
    pub shipping_city: String,
    pub shipping_postal_code: String,
    pub shipping_phone: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// The customer who placed an order.
#[derive(Debug, Clone)]
pub struct CustomerSummary {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// One snapshotted order line.
#[derive(Debug, Clone)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: i32,
}
