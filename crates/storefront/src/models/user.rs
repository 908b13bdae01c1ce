//! User domain types.

use chrono::{DateTime, Utc};

use clove_core::{Email, UserId, Username};

/// A storefront customer account.
#[derive(Debug, Clone)]
pub struct User {
    /// Unique user ID.
    pub id: UserId,
    /// Login name.
    pub username: Username,
    /// Email address.
    pub email: Email,
    /// Optional profile: given name.
    pub first_name: Option<String>,
    /// Optional profile: family name.
    pub last_name: Option<String>,
    /// Optional profile: contact phone.
    pub phone: Option<String>,
    /// Optional profile: Plus Code for deliveries without street addresses.
    pub plus_code: Option<String>,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Partial profile update. `None` fields are left unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub plus_code: Option<String>,
}
