//! Product domain types for the admin surface.

use chrono::{DateTime, Utc};

use clove_core::{Price, ProductId};

/// A catalog product as managed from the admin panel.
#[derive(Debug, Clone)]
pub struct Product {
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

/// Validated input for creating or replacing a product.
///
/// Construction happens in the route layer, after the all-fields-required,
/// positive-price, and non-negative-stock checks.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: String,
    pub description: String,
    pub price: Price,
    pub image: String,
    pub category: String,
    pub stock: i32,
}
