//! Profile handlers.

use axum::{Json, extract::State};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use clove_core::{Email, UserId, Username};

use crate::db::UserRepository;
use crate::error::{AppError, Result};
use crate::middleware::RequireUser;
use crate::models::User;
use crate::models::user::ProfileUpdate;
use crate::services::auth::AuthService;
use crate::state::AppState;

/// Full profile shape (everything except the password hash).
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileView {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone: Option<String>,
    pub plus_code: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<User> for ProfileView {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            first_name: user.first_name,
            last_name: user.last_name,
            phone: user.phone,
            plus_code: user.plus_code,
            created_at: user.created_at,
            updated_at: user.updated_at,
        }
    }
}

/// Wrapper matching the original `{"user": {...}}` shape.
#[derive(Debug, Serialize)]
pub struct ProfileResponse {
    pub user: ProfileView,
}

/// `GET /api/user/profile` - the caller's full profile.
pub async fn show(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
) -> Result<Json<ProfileResponse>> {
    let user = AuthService::new(state.pool()).get_user(user_id).await?;

    Ok(Json(ProfileResponse { user: user.into() }))
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    first_name: Option<String>,
    last_name: Option<String>,
    phone: Option<String>,
    plus_code: Option<String>,
}

/// `PUT /api/user/profile` - update any subset of the profile fields.
pub async fn update(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>> {
    let update = ProfileUpdate {
        first_name: body.first_name,
        last_name: body.last_name,
        phone: body.phone,
        plus_code: body.plus_code,
    };

    let user = UserRepository::new(state.pool())
        .update_profile(user_id, &update)
        .await
        .map_err(|e| match e {
            crate::db::RepositoryError::NotFound => AppError::NotFound("User".to_string()),
            other => other.into(),
        })?;

    Ok(Json(ProfileResponse { user: user.into() }))
}
