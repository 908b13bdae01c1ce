//! Integration tests for Clove Commerce.
//!
//! # Test Categories
//!
//! - `order_status_transitions` - The order-status state machine both
//!   binaries enforce
//! - `auth_tokens` - Token compatibility across the storefront/admin split
//! - `wire_contracts` - JSON shapes the browser clients depend on
//!
//! These tests exercise the library crates directly and need no network or
//! database; request/response tests against a live server run separately.
