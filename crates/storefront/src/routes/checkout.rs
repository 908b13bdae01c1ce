//! Checkout handler.

use axum::{Json, extract::State, http::StatusCode};
use serde::Deserialize;

use crate::db::OrderRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireUser;
use crate::models::ShippingInfo;
use crate::routes::orders::OrderResponse;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckoutRequest {
    shipping: Option<ShippingRequest>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRequest {
    name: Option<String>,
    address: Option<String>,
    city: Option<String>,
    postal_code: Option<String>,
    phone: Option<String>,
}

impl TryFrom<ShippingRequest> for ShippingInfo {
    type Error = AppError;

    fn try_from(body: ShippingRequest) -> Result<Self> {
        let (Some(name), Some(address), Some(city), Some(postal_code), Some(phone)) =
            (body.name, body.address, body.city, body.postal_code, body.phone)
        else {
            return Err(AppError::BadRequest(
                "All shipping fields are required".to_string(),
            ));
        };

        if [&name, &address, &city, &postal_code, &phone]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(AppError::BadRequest(
                "All shipping fields are required".to_string(),
            ));
        }

        Ok(Self {
            name,
            address,
            city,
            postal_code,
            phone,
        })
    }
}

/// `POST /api/checkout` - snapshot the cart into an order.
///
/// The total is recomputed server-side from live prices; stock is
/// decremented conditionally inside one transaction, so a shortfall on any
/// line aborts the whole checkout with 409.
pub async fn create(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
    Json(body): Json<CheckoutRequest>,
) -> Result<(StatusCode, Json<OrderResponse>)> {
    let shipping: ShippingInfo = body
        .shipping
        .ok_or_else(|| AppError::BadRequest("Shipping information is required".to_string()))?
        .try_into()?;

    let order = OrderRepository::new(state.pool())
        .create_from_cart(user_id, &shipping)
        .await?;

    tracing::info!(order_id = %order.id, user_id = %user_id, total = %order.total, "order placed");

    Ok((StatusCode::CREATED, Json(order.into())))
}
