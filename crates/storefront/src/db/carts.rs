//! Cart repository.
//!
//! Every mutation is a single SQL statement, so concurrent requests against
//! the same cart serialize at the row level instead of racing a
//! fetch-mutate-save cycle.

use sqlx::PgPool;

use clove_core::{ProductId, UserId};

use super::RepositoryError;
use crate::models::CartLine;

/// Internal row type for cart queries.
#[derive(Debug, sqlx::FromRow)]
struct CartLineRow {
    product_id: i64,
    quantity: i32,
}

impl From<CartLineRow> for CartLine {
    fn from(row: CartLineRow) -> Self {
        Self {
            product_id: ProductId::new(row.product_id),
            quantity: row.quantity,
        }
    }
}

/// Repository for cart database operations.
pub struct CartRepository<'a> {
    pool: &'a PgPool,
}

impl<'a> CartRepository<'a> {
    /// Create a new cart repository.
    #[must_use]
    pub const fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// List a user's cart, oldest line first.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn list(&self, user_id: UserId) -> Result<Vec<CartLine>, RepositoryError> {
        let rows = sqlx::query_as::<_, CartLineRow>(
            "SELECT product_id, quantity
             FROM store.cart_item
             WHERE user_id = $1
             ORDER BY added_at ASC, product_id ASC",
        )
        .bind(user_id.as_i64())
        .fetch_all(self.pool)
        .await?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    /// Add `quantity` units of a product to the cart.
    ///
    /// If the product is already in the cart the line quantity is incremented
    /// atomically in the same statement.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::NotFound` if the product doesn't exist.
    /// Returns `RepositoryError::Database` for other database errors.
    pub async fn add(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        sqlx::query(
            "INSERT INTO store.cart_item (user_id, product_id, quantity)
             VALUES ($1, $2, $3)
             ON CONFLICT (user_id, product_id)
             DO UPDATE SET quantity = store.cart_item.quantity + EXCLUDED.quantity",
        )
        .bind(user_id.as_i64())
        .bind(product_id.as_i64())
        .bind(quantity)
        .execute(self.pool)
        .await
        .map_err(|e| {
            if let sqlx::Error::Database(ref db_err) = e
                && db_err.is_foreign_key_violation()
            {
                return RepositoryError::NotFound;
            }
            RepositoryError::Database(e)
        })?;

        Ok(())
    }

    /// Set the quantity of an existing cart line.
    ///
    /// A quantity of zero or less removes the line. A line that isn't in the
    /// cart is left alone, matching the original contract.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn set_quantity(
        &self,
        user_id: UserId,
        product_id: ProductId,
        quantity: i32,
    ) -> Result<(), RepositoryError> {
        if quantity <= 0 {
            return self.remove(user_id, product_id).await;
        }

        sqlx::query(
            "UPDATE store.cart_item
             SET quantity = $3
             WHERE user_id = $1 AND product_id = $2",
        )
        .bind(user_id.as_i64())
        .bind(product_id.as_i64())
        .bind(quantity)
        .execute(self.pool)
        .await?;

        Ok(())
    }

    /// Remove a line from the cart. Removing an absent line is a no-op.
    ///
    /// # Errors
    ///
    /// Returns `RepositoryError::Database` if the query fails.
    pub async fn remove(
        &self,
        user_id: UserId,
        product_id: ProductId,
    ) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM store.cart_item WHERE user_id = $1 AND product_id = $2")
            .bind(user_id.as_i64())
            .bind(product_id.as_i64())
            .execute(self.pool)
            .await?;

        Ok(())
    }
}
