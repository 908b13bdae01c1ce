//! Catalog management handlers.
//!
//! Field validation mirrors what the dashboard relies on: every field is
//! required, the price must be positive, and the stock a non-negative
//! integer. IDs for update/delete travel in the request body.

use axum::{Json, extract::State, http::StatusCode};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use clove_core::{Price, ProductId};

use crate::db::{ProductRepository, RepositoryError};
use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::{NewProduct, Product};
use crate::state::AppState;

/// Product as returned on the admin wire.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductResponse {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: String,
    pub category: String,
    pub stock: i32,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<Product> for ProductResponse {
    fn from(product: Product) -> Self {
        Self {
            id: product.id,
            name: product.name,
            description: product.description,
            price: product.price,
            image: product.image,
            category: product.category,
            stock: product.stock,
            created_at: product.created_at,
            updated_at: product.updated_at,
        }
    }
}

/// Wrapper matching the `{"products": [...]}` shape.
#[derive(Debug, Serialize)]
pub struct ProductsResponse {
    pub products: Vec<ProductResponse>,
}

/// Mutation responses carry the affected product and a human message.
#[derive(Debug, Serialize)]
pub struct ProductMutationResponse {
    pub product: ProductResponse,
    pub message: String,
}

/// The writable product fields, shared by create and update bodies.
#[derive(Debug, Deserialize)]
pub struct ProductFields {
    name: Option<String>,
    description: Option<String>,
    price: Option<Decimal>,
    image: Option<String>,
    category: Option<String>,
    stock: Option<i32>,
}

impl TryFrom<ProductFields> for NewProduct {
    type Error = AppError;

    fn try_from(fields: ProductFields) -> Result<Self> {
        let (Some(name), Some(description), Some(price), Some(image), Some(category), Some(stock)) = (
            fields.name,
            fields.description,
            fields.price,
            fields.image,
            fields.category,
            fields.stock,
        ) else {
            return Err(AppError::BadRequest("All fields are required".to_string()));
        };

        if [&name, &description, &image, &category]
            .iter()
            .any(|field| field.trim().is_empty())
        {
            return Err(AppError::BadRequest("All fields are required".to_string()));
        }

        let price = Price::new(price)
            .map_err(|_| AppError::BadRequest("Price must be a positive number".to_string()))?;

        if stock < 0 {
            return Err(AppError::BadRequest(
                "Stock must be a non-negative integer".to_string(),
            ));
        }

        Ok(Self {
            name,
            description,
            price,
            image,
            category,
            stock,
        })
    }
}

/// `GET /api/admin/products` - the whole catalog.
pub async fn index(
    State(state): State<AppState>,
    RequireAdmin(_admin_id): RequireAdmin,
) -> Result<Json<ProductsResponse>> {
    let products = ProductRepository::new(state.pool()).list().await?;

    Ok(Json(ProductsResponse {
        products: products.into_iter().map(Into::into).collect(),
    }))
}

/// `POST /api/admin/products` - create a product.
pub async fn create(
    State(state): State<AppState>,
    RequireAdmin(admin_id): RequireAdmin,
    Json(body): Json<ProductFields>,
) -> Result<(StatusCode, Json<ProductMutationResponse>)> {
    let new_product: NewProduct = body.try_into()?;

    let product = ProductRepository::new(state.pool())
        .create(&new_product)
        .await?;

    tracing::info!(product_id = %product.id, admin_id = %admin_id, "product created");

    Ok((
        StatusCode::CREATED,
        Json(ProductMutationResponse {
            product: product.into(),
            message: "Product created successfully".to_string(),
        }),
    ))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProductRequest {
    product_id: Option<i64>,
    #[serde(flatten)]
    fields: ProductFields,
}

/// `PUT /api/admin/products` - replace every field of a product.
pub async fn update(
    State(state): State<AppState>,
    RequireAdmin(admin_id): RequireAdmin,
    Json(body): Json<UpdateProductRequest>,
) -> Result<Json<ProductMutationResponse>> {
    let Some(product_id) = body.product_id else {
        return Err(AppError::BadRequest("Product ID is required".to_string()));
    };
    let new_product: NewProduct = body.fields.try_into()?;

    let product = ProductRepository::new(state.pool())
        .update(ProductId::new(product_id), &new_product)
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound("Product".to_string()),
            other => other.into(),
        })?;

    tracing::info!(product_id = %product.id, admin_id = %admin_id, "product updated");

    Ok(Json(ProductMutationResponse {
        product: product.into(),
        message: "Product updated successfully".to_string(),
    }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteProductRequest {
    product_id: Option<i64>,
}

/// Delete responses only carry a message.
#[derive(Debug, Serialize)]
pub struct DeleteProductResponse {
    pub message: String,
}

/// `DELETE /api/admin/products` - delete a product.
pub async fn remove(
    State(state): State<AppState>,
    RequireAdmin(admin_id): RequireAdmin,
    Json(body): Json<DeleteProductRequest>,
) -> Result<Json<DeleteProductResponse>> {
    let Some(product_id) = body.product_id else {
        return Err(AppError::BadRequest("Product ID is required".to_string()));
    };

    ProductRepository::new(state.pool())
        .delete(ProductId::new(product_id))
        .await
        .map_err(|e| match e {
            RepositoryError::NotFound => AppError::NotFound("Product".to_string()),
            other => other.into(),
        })?;

    tracing::info!(product_id, admin_id = %admin_id, "product deleted");

    Ok(Json(DeleteProductResponse {
        message: "Product deleted successfully".to_string(),
    }))
}
