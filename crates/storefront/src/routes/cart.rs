//! Cart handlers.
//!
//! Every mutation returns the full updated cart, matching the original wire
//! contract: clients re-render from the response instead of re-fetching.

use axum::{Json, extract::State};
use serde::Deserialize;

use clove_core::ProductId;

use crate::db::{CartRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::middleware::RequireUser;
use crate::models::CartLine;
use crate::state::AppState;

/// `GET /api/cart` - the cart as a JSON array of lines.
pub async fn show(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
) -> Result<Json<Vec<CartLine>>> {
    let cart = CartRepository::new(state.pool()).list(user_id).await?;
    Ok(Json(cart))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    product_id: Option<i64>,
    quantity: Option<i32>,
}

/// `POST /api/cart` - add a product; an existing line is incremented
/// atomically.
pub async fn add(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
    Json(body): Json<AddToCartRequest>,
) -> Result<Json<Vec<CartLine>>> {
    let Some(product_id) = body.product_id else {
        return Err(AppError::BadRequest("Product ID is required".to_string()));
    };
    let quantity = body.quantity.unwrap_or(1);
    if quantity < 1 {
        return Err(AppError::BadRequest(
            "Quantity must be at least 1".to_string(),
        ));
    }

    let carts = CartRepository::new(state.pool());
    carts
        .add(user_id, ProductId::new(product_id), quantity)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound("Product".to_string()),
            other => other.into(),
        })?;

    Ok(Json(carts.list(user_id).await?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartRequest {
    product_id: Option<i64>,
    quantity: Option<i32>,
}

/// `PUT /api/cart` - set a line's quantity; zero or less removes the line.
pub async fn update(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
    Json(body): Json<UpdateCartRequest>,
) -> Result<Json<Vec<CartLine>>> {
    let (Some(product_id), Some(quantity)) = (body.product_id, body.quantity) else {
        return Err(AppError::BadRequest(
            "Product ID and quantity are required".to_string(),
        ));
    };

    let carts = CartRepository::new(state.pool());
    carts
        .set_quantity(user_id, ProductId::new(product_id), quantity)
        .await?;

    Ok(Json(carts.list(user_id).await?))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RemoveFromCartRequest {
    product_id: Option<i64>,
}

/// `DELETE /api/cart` - remove a line.
pub async fn remove(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
    Json(body): Json<RemoveFromCartRequest>,
) -> Result<Json<Vec<CartLine>>> {
    let Some(product_id) = body.product_id else {
        return Err(AppError::BadRequest("Product ID is required".to_string()));
    };

    let carts = CartRepository::new(state.pool());
    carts.remove(user_id, ProductId::new(product_id)).await?;

    Ok(Json(carts.list(user_id).await?))
}
