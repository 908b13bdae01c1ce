//! Clove Admin library.
//!
//! This crate provides the admin functionality as a library,
//! allowing it to be tested and reused (the CLI uses it to create admins).
//!
//! # Security
//!
//! This crate contains HIGH PRIVILEGE access: catalog mutation and order
//! management. Deploy it separately from the public storefront and never
//! expose it on the same origin.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod db;
pub mod error;
pub mod middleware;
pub mod models;
pub mod routes;
pub mod services;
pub mod state;
