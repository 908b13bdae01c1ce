//! Domain types for the storefront.
//!
//! These are validated domain objects, separate from database row types
//! (which live beside their repositories) and from wire-format response
//! structs (which live beside their routes).

pub mod cart;
pub mod order;
pub mod product;
pub mod user;

pub use cart::CartLine;
pub use order::{Order, OrderItem, ShippingInfo};
pub use product::Product;
pub use user::User;
