//! Signup, login, and token introspection handlers.

use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use clove_core::{Email, UserId, Username};

use crate::error::{AppError, Result};
use crate::middleware::RequireUser;
use crate::models::User;
use crate::services::auth::AuthService;
use crate::services::tokens;
use crate::state::AppState;

/// Abbreviated user shape returned by auth endpoints.
#[derive(Debug, Serialize)]
pub struct UserSummary {
    pub id: UserId,
    pub username: Username,
    pub email: Email,
}

impl From<User> for UserSummary {
    fn from(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
        }
    }
}

/// Response for signup and login: a bearer token plus the user it names.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    pub user: UserSummary,
}

#[derive(Debug, Deserialize)]
pub struct SignupRequest {
    username: Option<String>,
    email: Option<String>,
    password: Option<String>,
}

/// `POST /api/auth/signup` - create an account and return a token.
pub async fn signup(
    State(state): State<AppState>,
    Json(body): Json<SignupRequest>,
) -> Result<(StatusCode, Json<AuthResponse>)> {
    let (Some(username), Some(email), Some(password)) =
        (body.username, body.email, body.password)
    else {
        return Err(AppError::BadRequest("All fields are required".to_string()));
    };

    let user = AuthService::new(state.pool())
        .register(&username, &email, &password)
        .await?;

    let token = tokens::mint(state.jwt_secret(), user.id)?;
    tracing::info!(user_id = %user.id, "user registered");

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            token,
            user: user.into(),
        }),
    ))
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    username: Option<String>,
    password: Option<String>,
}

/// `POST /api/auth/login` - exchange credentials for a token.
pub async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginRequest>,
) -> Result<Json<AuthResponse>> {
    let (Some(username), Some(password)) = (body.username, body.password) else {
        return Err(AppError::BadRequest(
            "Username and password are required".to_string(),
        ));
    };

    let user = AuthService::new(state.pool())
        .login(&username, &password)
        .await?;

    let token = tokens::mint(state.jwt_secret(), user.id)?;

    Ok(Json(AuthResponse {
        token,
        user: user.into(),
    }))
}

/// Wrapper matching the original `{"user": {...}}` shape.
#[derive(Debug, Serialize)]
pub struct MeResponse {
    pub user: UserSummary,
}

/// `GET /api/auth/me` - the user the presented token belongs to.
pub async fn me(
    State(state): State<AppState>,
    RequireUser(user_id): RequireUser,
) -> Result<Json<MeResponse>> {
    let user = AuthService::new(state.pool()).get_user(user_id).await?;

    Ok(Json(MeResponse { user: user.into() }))
}
