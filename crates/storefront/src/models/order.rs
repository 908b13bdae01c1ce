//! Order domain types.
//!
//! An order is an immutable snapshot of a cart at checkout time; only its
//! delivery status changes afterwards, and only through the admin binary.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use clove_core::{OrderId, OrderStatus, Price, ProductId, UserId};

/// A placed order with its line-item snapshots.
#[derive(Debug, Clone)]
pub struct Order {
    /// Unique order ID.
    pub id: OrderId,
    /// The customer who placed the order.
    pub user_id: UserId,
    /// Current delivery status.
    pub status: OrderStatus,
    /// Total charged, computed server-side at checkout.
    pub total: Decimal,
    /// Delivery destination captured at checkout.
    pub shipping: ShippingInfo,
    /// Line items, snapshotted from the cart.
    pub items: Vec<OrderItem>,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// When the order was last updated (status changes).
    pub updated_at: DateTime<Utc>,
}

/// One line of an order: the product as it was at purchase time.
#[derive(Debug, Clone)]
pub struct OrderItem {
    /// The product this line refers to.
    pub product_id: ProductId,
    /// Product name at purchase time.
    pub name: String,
    /// Unit price at purchase time.
    pub price: Price,
    /// Units purchased.
    pub quantity: i32,
}

/// Delivery destination for an order.
#[derive(Debug, Clone)]
pub struct ShippingInfo {
    pub name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub phone: String,
}
