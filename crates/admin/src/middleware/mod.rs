//! HTTP middleware and extractors for the admin binary.

pub mod auth;

pub use auth::RequireAdmin;
