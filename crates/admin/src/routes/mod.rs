//! HTTP route handlers for the admin API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                   - Liveness check
//! GET  /health/ready             - Readiness check (pings the database)
//!
//! # Auth
//! POST /api/admin/auth/login     - Admin login, returns admin-typed token
//! GET  /api/admin/auth/me        - Current admin for the presented token
//!
//! # Catalog management
//! GET    /api/admin/products     - List products
//! POST   /api/admin/products     - Create product
//! PUT    /api/admin/products     - Replace product (ID in body)
//! DELETE /api/admin/products     - Delete product (ID in body)
//!
//! # Order management
//! GET  /api/admin/orders         - List all orders with customers
//! PUT  /api/admin/orders         - Transition an order's status
//! ```
//!
//! Product and order mutation take entity IDs in the request body, not the
//! path; that is the wire contract the dashboard speaks.

pub mod auth;
pub mod orders;
pub mod products;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the admin auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/me", get(auth::me))
}

/// Create all routes for the admin API.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/admin/auth", auth_routes())
        .route(
            "/api/admin/products",
            get(products::index)
                .post(products::create)
                .put(products::update)
                .delete(products::remove),
        )
        .route(
            "/api/admin/orders",
            get(orders::index).put(orders::update_status),
        )
}
