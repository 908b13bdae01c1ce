//! Order repository: checkout and order history.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use thiserror::Error;

use clove_core::{OrderId, OrderStatus, Price, ProductId, UserId};

use super::RepositoryError;
use crate::models::{Order, OrderItem, ShippingInfo};

/// Errors that can occur while turning a cart into an order.
#[derive(Debug, Error)]
pub enum CheckoutError {
    /// The cart has no lines.
    #[error("Cart is empty")]
    EmptyCart,

    /// A product doesn't have enough stock left.
    #[error("Insufficient stock for {name}")]
    InsufficientStock {
        /// Product name, for the client-facing message.
        name: String,
    },

    /// Underlying repository failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<sqlx::Error> for CheckoutError {
    fn from(e: sqlx::Error) -> Self {
        Self::Repository(RepositoryError::Database(e))
    }
}

/// Internal row type for order header queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderRow {
    id: i64,
    user_id: i64,
    status: String,
    total: Decimal,
    shipping_name: String,
    shipping_address: String,
    shipping_city: String,
    shipping_postal_code: String,
    shipping_phone: String,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl OrderRow {
    fn into_order(self, items: Vec<OrderItem>) -> Result<Order, RepositoryError> {
        let status: OrderStatus = self.status.parse().map_err(|_| {
            RepositoryError::DataCorruption(format!("invalid order status: {}", self.status))
        })?;

        Ok(Order {
            id: OrderId::new(self.id),
            user_id: UserId::new(self.user_id),
            status,
            total: self.total,
            shipping: ShippingInfo {
                name: self.shipping_name,
                address: self.shipping_address,
                city: self.shipping_city,
                postal_code: self.shipping_postal_code,
                phone: self.shipping_phone,
            },
            items,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Internal row type for order item queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderItemRow {
    order_id: i64,
    product_id: i64,
    name: String,
    price: Decimal,
    quantity: i32,
}

impl TryFrom<OrderItemRow> for OrderItem {
    type Error = RepositoryError;

    fn try_from(row: OrderItemRow) -> Result<Self, Self::Error> {
        let price = Price::new(row.price).map_err(|e| {
            RepositoryError::DataCorruption(format!("invalid price in database: {e}"))
        })?;

        Ok(Self {
            product_id: ProductId::new(row.product_id),
            name: row.name,
            price,
            quantity: row.quantity,
        })
    }
}

/// One cart line joined with its product, as read at the start of checkout.
#[derive(Debug, sqlx::FromRow)]
struct CheckoutLineRow {
    product_id: i64,
    quantity: i32,
    name: String,
    price: Decimal,
}

const ORDER_COLUMNS: &str = "id, user_id, status, total, shipping_name, shipping_address, \
     shipping_city, shipping_postal_code, shipping_phone, created_at, updated_at";

/// Repository for order database operations.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Snapshot a user's cart into an order.
    ///
    /// Runs entirely in one transaction:
    /// 1. read the cart joined with live product rows,
    /// 2. decrement each product's stock conditionally
    ///    (`stock = stock - q .. WHERE stock >= q`),
    /// 3. insert the order header and item snapshots with the total computed
    ///    from live prices,
    /// 4. clear the cart.
    ///
    /// Any stock shortfall aborts the whole transaction, so partial
    /// decrements can never be observed.
    ///
    /// # Errors
    ///
    /// Returns `CheckoutError::EmptyCart` if there is nothing to order,
    /// `CheckoutError::InsufficientStock` naming the first product that
    /// cannot be fulfilled, or `CheckoutError::Repository` for database
    /// failures.
    pub async fn create_from_cart(
        &self,
        user_id: UserId,
        shipping: &ShippingInfo,
    ) -> Result<Order, CheckoutError> {
        let mut tx = self.pool.begin().await?;

        let lines = sqlx::query_as::<_, CheckoutLineRow>(
            "SELECT ci.product_id, ci.quantity, p.name, p.price
             FROM store.cart_item ci
             JOIN store.product p ON p.id = ci.product_id
             WHERE ci.user_id = $1
             ORDER BY ci.added_at ASC, ci.product_id ASC",
        )
        .bind(user_id.as_i64())
        .fetch_all(&mut *tx)
        .await?;

        if lines.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        for line in &lines {
            let result = sqlx::query(
                "UPDATE store.product
                 SET stock = stock - $1, updated_at = now()
                 WHERE id = $2 AND stock >= $1",
            )
            .bind(line.quantity)
            .bind(line.product_id)
            .execute(&mut *tx)
            .await?;

            if result.rows_affected() == 0 {
                // Dropping the open transaction rolls everything back.
                return Err(CheckoutError::InsufficientStock {
                    name: line.name.clone(),
                });
            }
        }

        let total: Decimal = lines
            .iter()
            .map(|line| line.price * Decimal::from(line.quantity))
            .sum();

        let order_row = sqlx::query_as::<_, OrderRow>(&format!(
            "INSERT INTO store.\"order\"
                 (user_id, total, shipping_name, shipping_address, shipping_city,
                  shipping_postal_code, shipping_phone)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {ORDER_COLUMNS}"
        ))
        .bind(user_id.as_i64())
        .bind(total)
        .bind(&shipping.name)
        .bind(&shipping.address)
        .bind(&shipping.city)
        .bind(&shipping.postal_code)
        .bind(&shipping.phone)
        .fetch_one(&mut *tx)
        .await?;

        let mut items = Vec::with_capacity(lines.len());
        for line in &lines {
            sqlx::query(
                "INSERT INTO store.order_item (order_id, product_id, name, price, quantity)
                 VALUES ($1, $2, $3, $4, $5)",
            )
            .bind(order_row.id)
            .bind(line.product_id)
            .bind(&line.name)
            .bind(line.price)
            .bind(line.quantity)
            .execute(&mut *tx)
            .await?;

            let price = Price::new(line.price).map_err(|e| {
                RepositoryError::DataCorruption(format!("invalid price in database: {e}"))
            })?;
            items.push(OrderItem {
                product_id: ProductId::new(line.product_id),
                name: line.name.clone(),
                price,
                quantity: line.quantity,
            });
        }

        sqlx::query("DELETE FROM store.cart_item WHERE user_id = $1")
            .bind(user_id.as_i64())
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(order_row.into_order(items)?)
    }

    /// List a user's orders, newest first, with items embedded.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    /// Returns `RepositoryError::DataCorruption` if stored data is invalid.
    pub async fn list_for_user(&self, user_id: UserId) -> Result<Vec<Order>, RepositoryError> {
        let rows = sqlx::query_as::<_, OrderRow>(&format!(
            "SELECT {ORDER_COLUMNS} FROM store.\"order\"
             WHERE user_id = $1
             ORDER BY created_at DESC, id DESC"
        ))
        .bind(user_id.as_i64())
        .fetch_all(self.pool)
        .await?;

        self.attach_items(rows).await
    }

    /// Load items for a batch of order rows and assemble domain orders.
    async fn attach_items(&self, rows: Vec<OrderRow>) -> Result<Vec<Order>, RepositoryError> {
        let order_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();

        let item_rows = sqlx::query_as::<_, OrderItemRow>(
            "SELECT order_id, product_id, name, price, quantity
             FROM store.order_item
             WHERE order_id = ANY($1)
             ORDER BY id ASC",
        )
        .bind(&order_ids)
        .fetch_all(self.pool)
        .await?;

        let mut items_by_order: std::collections::HashMap<i64, Vec<OrderItem>> =
            std::collections::HashMap::new();
        for item_row in item_rows {
            let order_id = item_row.order_id;
            items_by_order
                .entry(order_id)
                .or_default()
                .push(item_row.try_into()?);
        }

        rows.into_iter()
            .map(|row| {
                let items = items_by_order.remove(&row.id).unwrap_or_default();
                row.into_order(items)
            })
            .collect()
    }
}
