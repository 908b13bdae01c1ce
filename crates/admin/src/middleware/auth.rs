//! Admin authentication extractor.

use axum::{
    extract::FromRequestParts,
    http::{header, request::Parts},
};

use clove_core::AdminUserId;

use crate::error::AppError;
use crate::services::tokens::{self, TokenError};
use crate::state::AppState;

/// Extractor that requires a valid admin bearer token.
///
/// Missing/invalid tokens reject with 401; tokens that verify but lack the
/// `type: "admin"` claim reject with 403, so customer tokens can never reach
/// an admin handler.
pub struct RequireAdmin(pub AdminUserId);

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or(AppError::Token(TokenError::Missing))?;
        let admin_id = tokens::verify(state.jwt_secret(), token)?;
        Ok(Self(admin_id))
    }
}

/// Pull the token out of an `Authorization: Bearer <token>` header.
fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}
