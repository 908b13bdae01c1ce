//! Admin user domain type.

use chrono::{DateTime, Utc};

use clove_core::{AdminUserId, Username};

/// An administrator account.
///
/// Created only through the CLI (`clove admin create`); there is no signup
/// surface for admins.
#[derive(Debug, Clone)]
pub struct AdminUser {
    /// Unique admin ID. Distinct ID space from customer accounts.
    pub id: AdminUserId,
    /// Login name.
    pub username: Username,
    /// Name shown in the dashboard.
    pub display_name: String,
    /// When the account was created.
    pub created_at: DateTime<Utc>,
    /// When the account was last updated.
    pub updated_at: DateTime<Utc>,
}
