//! Order-history handlers and the order wire shape.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use clove_core::{OrderId, OrderStatus, Price, ProductId};

use crate::db::OrderRepository;
use crate::error::Result;
use crate::middleware::RequireUser;
use crate::models::{Order, OrderItem, ShippingInfo};
use crate::state::AppState;

/// Order as returned on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: OrderId,
    pub status: OrderStatus,
    pub total: Decimal,
    pub items: Vec<OrderItemResponse>,
    pub shipping: ShippingResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Order line as returned on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: i32,
}

/// Shipping destination as returned on the wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingResponse {
    pub name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub phone: String,
}

impl From<OrderItem> for OrderItemResponse {
    fn from(item: OrderItem) -> Self {
        Self {
            product_id: item.product_id,
            name: item.name,
            price: item.price,
            quantity: item.quantity,
        }
    }
}

impl From<ShippingInfo> for ShippingResponse {
    fn from(shipping: ShippingInfo) -> Self {
        Self {
            name: shipping.name,
            address: shipping.address,
            city: shipping.city,
            postal_code: shipping.postal_code,
            phone: shipping.phone,
        }
    }
}

impl From<Order> for OrderResponse {
    fn from(order: Order) -> Self {
        Self {
            id: order.id,
            status: order.status,
            total: order.total,
            items: order.items.into_iter().map(Into::into).collect(),
            shipping: order.shipping.into(),
            created_at: order.created_at,
            updated_at: order.updated_at,
        }
    }
}

/// Wrapper matching the `{"orders": [...]}` shape.
#[derive(Debug, Serialize)]
pub struct OrdersResponse {
    pub orders: Vec<OrderResponse>,
}

/// `GET /api/orders` - the caller's orders, newest first.
pub async fn index(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
) -> Result<Json<OrdersResponse>> {
    let orders = OrderRepository::new(state.pool())
        .list_for_user(user_id)
        .await?;

    Ok(Json(OrdersResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    }))
}
