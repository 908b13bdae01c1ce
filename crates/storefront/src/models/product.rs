//! Product domain type.

use chrono::{DateTime, Utc};

use clove_core::{Price, ProductId};

/// A catalog product.
#[derive(Debug, Clone)]
pub struct Product {
    /// Unique product ID.
    pub id: ProductId,
    /// Display name.
    pub name: String,
    /// Long-form description.
    pub description: String,
    /// Unit price.
    pub price: Price,
    /// Image URL or reference.
    pub image: String,
    /// Category label used for storefront filtering.
    pub category: String,
    /// Units currently in stock. Never negative.
    pub stock: i32,
    /// When the product was created.
    pub created_at: DateTime<Utc>,
    /// When the product was last updated.
    pub updated_at: DateTime<Utc>,
}
