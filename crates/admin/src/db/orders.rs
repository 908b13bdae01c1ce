//! Order repository: listing and status transitions.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use thiserror::Error;

use clove_core::{OrderId, OrderStatus, Price, ProductId, UserId};

use super::RepositoryError;
use crate::models::{AdminOrder, CustomerSummary, OrderLine};

/// Errors that can occur while updating an order's status.
#[derive(Debug, Error)]
pub enum StatusUpdateError {
    /// The order doesn't exist.
    #[error("order not found")]
    NotFound,

    /// The requested transition is not legal from the order's current status.
    #[error("cannot change order status from {from} to {to}")]
    IllegalTransition {
        from: OrderStatus,
        to: OrderStatus,
    },

    /// Underlying repository failure.
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl From<sqlx::Error> for StatusUpdateError {
    fn from(e: sqlx::Error) -> Self {
        Self::Repository(RepositoryError::Database(e))
    }
}

/// Internal row type for order-with-customer queries.
#[derive(Debug, sqlx::FromRow)]
struct AdminOrderRow {
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
    username: String,
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
}

impl AdminOrderRow {
    fn into_order(self, items: Vec<OrderLine>) -> Result<AdminOrder, RepositoryError> {
        let status: OrderStatus = self.status.parse().map_err(|_| {
            RepositoryError::DataCorruption(format!("invalid order status: {}", self.status))
        })?;

        Ok(AdminOrder {
            id: OrderId::new(self.id),
            customer: CustomerSummary {
                id: UserId::new(self.user_id),
                username: self.username,
                email: self.email,
                first_name: self.first_name,
                last_name: self.last_name,
            },
            status,
            total: self.total,
            items,
            shipping_name: self.shipping_name,
            shipping_address: self.shipping_address,
            shipping_city: self.shipping_city,
            shipping_postal_code: self.shipping_postal_code,
            shipping_phone: self.shipping_phone,
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}

/// Internal row type for order item queries.
#[derive(Debug, sqlx::FromRow)]
struct OrderLineRow {
    order_id: i64,
    product_id: i64,
    name: String,
    price: Decimal,
    quantity: i32,
}

impl TryFrom<OrderLineRow> for OrderLine {
    type Error = RepositoryError;

    fn try_from(row: OrderLineRow) -> Result<Self, Self::Error> {
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

const ADMIN_ORDER_QUERY: &str = "SELECT o.id, o.user_id, o.status, o.total,
            o.shipping_name, o.shipping_address, o.shipping_city,
            o.shipping_postal_code, o.shipping_phone,
            o.created_at, o.updated_at,
            u.username, u.email, u.first_name, u.last_name
     FROM store.\"order\" o
     JOIN store.user u ON u.id = o.user_id";

/// Repository for order management.
pub struct OrderRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> OrderRepository<'a> {
    /// Create a new order repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List every order, newest first, with customer and items embedded.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn list_all(&self) -> Result<Vec<AdminOrder>, RepositoryError> {
        let rows = sqlx::query_as::<_, AdminOrderRow>(&format!(
            "{ADMIN_ORDER_QUERY} ORDER BY o.created_at DESC, o.id DESC"
        ))
        .fetch_all(self.pool)
        .await?;

        self.attach_items(rows).await
    }

    /// Get one order with customer and items.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if a query fails.
    pub async fn get(&self, id: OrderId) -> Result<Option<AdminOrder>, RepositoryError> {
        let row = sqlx::query_as::<_, AdminOrderRow>(&format!(
            "{ADMIN_ORDER_QUERY} WHERE o.id = $1"
        ))
        .bind(id.as_i64())
        .fetch_optional(self.pool)
        .await?;

        let Some(row) = row else {
            return Ok(None);
        };

        Ok(self.attach_items(vec![row]).await?.into_iter().next())
    }

    /// Transition an order to a new status.
    ///
    /// The legality check runs against the current status, and the `UPDATE`
    /// re-checks it (`WHERE status = $current`), so two admins racing on the
    /// same order cannot interleave an illegal hop: the loser's update
    /// matches zero rows and the check reruns against the fresh status.
    ///
    /// # Errors
    ///
    /// Returns `StatusUpdateError::NotFound` for unknown orders,
    /// `StatusUpdateError::IllegalTransition` when the state machine forbids
    /// the move, or `StatusUpdateError::Repository` for database failures.
    pub async fn update_status(
        &self,
        id: OrderId,
        new_status: OrderStatus,
    ) -> Result<AdminOrder, StatusUpdateError> {
        loop {
            let current = sqlx::query_scalar::<_, String>(
                "SELECT status FROM store.\"order\" WHERE id = $1",
            )
            .bind(id.as_i64())
            .fetch_optional(self.pool)
            .await?
            .ok_or(StatusUpdateError::NotFound)?;

            let current: OrderStatus = current.parse().map_err(|_| {
                RepositoryError::DataCorruption(format!("invalid order status: {current}"))
            })?;

            if !current.can_transition_to(new_status) {
                return Err(StatusUpdateError::IllegalTransition {
                    from: current,
                    to: new_status,
                });
            }

            let result = sqlx::query(
                "UPDATE store.\"order\"
                 SET status = $2, updated_at = now()
                 WHERE id = $1 AND status = $3",
            )
            .bind(id.as_i64())
            .bind(new_status.to_string())
            .bind(current.to_string())
            .execute(self.pool)
            .await?;

            if result.rows_affected() > 0 {
                break;
            }
            // Lost a race with a concurrent update; re-validate from scratch.
        }

        self.get(id)
            .await?
            .ok_or(StatusUpdateError::NotFound)
    }

    /// Load items for a batch of order rows and assemble domain orders.
    async fn attach_items(
        &self,
        rows: Vec<AdminOrderRow>,
    ) -> Result<Vec<AdminOrder>, RepositoryError> {
        let order_ids: Vec<i64> = rows.iter().map(|r| r.id).collect();

        let item_rows = sqlx::query_as::<_, OrderLineRow>(
            "SELECT order_id, product_id, name, price, quantity
             FROM store.order_item
             WHERE order_id = ANY($1)
             ORDER BY id ASC",
        )
        .bind(&order_ids)
        .fetch_all(self.pool)
        .await?;

        let mut items_by_order: std::collections::HashMap<i64, Vec<OrderLine>> =
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
