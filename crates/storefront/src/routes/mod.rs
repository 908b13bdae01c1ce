//! HTTP route handlers for the storefront API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health                 - Liveness check
//! GET  /health/ready           - Readiness check (pings the database)
//!
//! # Catalog (public)
//! GET  /api/products           - Product listing
//! GET  /api/products/{id}      - Product detail
//!
//! # Auth
//! POST /api/auth/signup        - Create account, returns token
//! POST /api/auth/login         - Login, returns token
//! GET  /api/auth/me            - Current user for the presented token
//!
//! # Profile (requires auth)
//! GET  /api/user/profile       - Full profile
//! PUT  /api/user/profile       - Partial profile update
//!
//! # Cart (requires auth)
//! GET    /api/cart             - Cart lines
//! POST   /api/cart             - Add product (increments existing line)
//! PUT    /api/cart             - Set line quantity (<= 0 removes)
//! DELETE /api/cart             - Remove line
//!
//! # Orders (requires auth)
//! POST /api/checkout           - Snapshot the cart into an order
//! GET  /api/orders             - Order history, newest first
//! ```

pub mod auth;
pub mod cart;
pub mod checkout;
pub mod orders;
pub mod products;
pub mod profile;

use axum::{
    Router,
    routing::{get, post},
};

use crate::state::AppState;

/// Create the catalog routes router.
pub fn product_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(products::index))
        .route("/{id}", get(products::show))
}

/// Create the auth routes router.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/signup", post(auth::signup))
        .route("/login", post(auth::login))
        .route("/me", get(auth::me))
}

/// Create the profile routes router.
pub fn profile_routes() -> Router<AppState> {
    Router::new().route("/profile", get(profile::show).put(profile::update))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/api/products", product_routes())
        .nest("/api/auth", auth_routes())
        .nest("/api/user", profile_routes())
        .route(
            "/api/cart",
            get(cart::show)
                .post(cart::add)
                .put(cart::update)
                .delete(cart::remove),
        )
        .route("/api/checkout", post(checkout::create))
        .route("/api/orders", get(orders::index))
}
