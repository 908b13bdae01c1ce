//! Business-logic services for the admin binary.

pub mod auth;
pub mod tokens;
