//! Admin login and token introspection handlers.

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use clove_core::{AdminUserId, Username};

use crate::error::{AppError, Result};
use crate::middleware::RequireAdmin;
use crate::models::AdminUser;
use crate::services::auth::AdminAuthService;
use crate::services::tokens;
use crate::state::AppState;

/// Admin shape returned by auth endpoints.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminSummary {
    pub id: AdminUserId,
    pub username: Username,
    pub display_name: String,
}

impl From<AdminUser> for AdminSummary {
    fn from(admin: AdminUser) -> Self {
        Self {
            id: admin.id,
            username: admin.username,
            display_name: admin.display_name,
        }
    }
}

/// Response for admin login: an admin-typed token plus the admin it names.
#[derive(Debug, Serialize)]
pub struct AdminAuthResponse {
    pub token: String,
    pub admin: AdminSummary,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    username: Option<String>,
    password: Option<String>,
}

/// `POST /api/admin/auth/login` - exchange admin credentials for a token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AdminAuthResponse>> {
    let (Some(username), Some(password)) = (body.username, body.password) else {
        return Err(AppError::BadRequest(
            "Username and password are required".to_string(),
        ));
    };

    let admin = AdminAuthService::new(state.pool())
        .login(&username, &password)
        .await?;

    let token = tokens::mint(state.jwt_secret(), admin.id)?;
    tracing::info!(admin_id = %admin.id, "admin logged in");

    Ok(Json(AdminAuthResponse {
        token,
        admin: admin.into(),
    }))
}

/// Wrapper matching the `{"admin": {...}}` shape the dashboard expects.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub admin: AdminSummary,
}

/// `GET /api/admin/auth/me` - the admin the presented token belongs to.
pub async fn me(
    State(state): State<AppState>,
    RequireAdmin(admin_id): RequireAdmin,
) -> Result<Json<MeResponse>> {
    let admin = AdminAuthService::new(state.pool()).get(admin_id).await?;

    Ok(Json(MeResponse {
        admin: admin.into(),
    }))
}
