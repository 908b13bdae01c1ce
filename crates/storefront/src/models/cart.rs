//! Cart domain types.

use serde::Serialize;

use clove_core::ProductId;

/// One line of a user's cart.
///
/// Serialized directly: the `/api/cart` endpoints return the cart as a JSON
/// array of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartLine {
    /// The product in the cart.
    pub product_id: ProductId,
    /// How many units. Always positive; a zero-quantity update removes the line.
    pub quantity: i32,
}
