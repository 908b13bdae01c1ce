//! Order management handlers.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use clove_core::{OrderId, OrderStatus, Price, ProductId, UserId};

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::{AdminOrder, CustomerSummary, OrderLine};
use crate::state::AppState;

/// Order as returned on the admin wire, customer embedded.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderResponse {
    pub id: OrderId,
    pub user: CustomerResponse,
    pub status: OrderStatus,
    pub total: Decimal,
    pub items: Vec<OrderItemResponse>,
    pub shipping: ShippingResponse,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Customer summary as embedded in admin order rows.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerResponse {
    pub id: UserId,
    pub username: String,
    pub email: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// Order line as returned on the admin wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderItemResponse {
    pub product_id: ProductId,
    pub name: String,
    pub price: Price,
    pub quantity: i32,
}

/// Shipping destination as returned on the admin wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingResponse {
    pub name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub phone: String,
}

impl From<CustomerSummary> for CustomerResponse {
    fn from(customer: CustomerSummary) -> Self {
        Self {
            id: customer.id,
            username: customer.username,
            email: customer.email,
            first_name: customer.first_name,
            last_name: customer.last_name,
        }
    }
}

impl From<OrderLine> for OrderItemResponse {
    fn from(line: OrderLine) -> Self {
        Self {
            product_id: line.product_id,
            name: line.name,
            price: line.price,
            quantity: line.quantity,
        }
    }
}

impl From<AdminOrder> for OrderResponse {
    fn from(order: AdminOrder) -> Self {
        Self {
            id: order.id,
            user: order.customer.into(),
            status: order.status,
            total: order.total,
            items: order.items.into_iter().map(Into::into).collect(),
            shipping: ShippingResponse {
                name: order.shipping_name,
                address: order.shipping_address,
                city: order.shipping_city,
                postal_code: order.shipping_postal_code,
                phone: order.shipping_phone,
            },
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

/// `GET /api/admin/orders` - every order, newest first.
pub async fn index(
    State(state): State<AppState>,
    RequireAdmin(_admin_id): RequireAdmin,
) -> Result<Json<OrdersResponse>> {
    let orders = OrderRepository::new(state.pool()).list_all().await?;

    Ok(Json(OrdersResponse {
        orders: orders.into_iter().map(Into::into).collect(),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateOrderRequest {
    order_id: Option<i64>,
    status: Option<String>,
}

/// Wrapper matching the `{"order": {...}}` shape.
#[derive(Debug, Serialize)]
pub struct OrderUpdatedResponse {
    pub order: OrderResponse,
}

/// `PUT /api/admin/orders` - transition an order's status.
///
/// Unknown status strings are 400; legal-status-but-illegal-transition is
/// 409. The dashboard only offers legal next steps, but the server is the
/// authority.
pub async fn update_status(
    State(state): State<AppState>,
    RequireAdmin(admin_id): RequireAdmin,
    Json(body): Json<UpdateOrderRequest>,
) -> Result<Json<OrderUpdatedResponse>> {
    let (Some(order_id), Some(status)) = (body.order_id, body.status) else {
        return Err(AppError::BadRequest(
            "Order ID and status are required".to_string(),
        ));
    };

    let status: OrderStatus = status
        .parse()
        .map_err(|_| AppError::BadRequest("Invalid status".to_string()))?;

    let order = OrderRepository::new(state.pool())
        .update_status(OrderId::new(order_id), status)
        .await?;

    tracing::info!(
        order_id = %order.id,
        admin_id = %admin_id,
        status = %order.status,
        "order status updated"
    );

    Ok(Json(OrderUpdatedResponse {
        order: order.into(),
    }))
}
