//! Unified error handling with Sentry integration.
//!
//! Same contract as the storefront: every failure is a status code plus an
//! `{"error": "<message>"}` body. The one admin-specific mapping is
//! `TokenError::NotAdmin` -> 403, the claim check the original spelled as
//! `decoded.type !== 'admin'`.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::{RepositoryError, StatusUpdateError};
use crate::services::auth::AuthError;
use crate::services::tokens::TokenError;

/// Application-level error type for the admin binary.
#[derive(Debug, Error)]
pub enum AppError {
    /// Database operation failed.
    #[error("Database error: {0}")]
    Database(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Bearer token missing, malformed, expired, or not an admin token.
    #[error("Token error: {0}")]
    Token(#[from] TokenError),

    /// Order status transition failed.
    #[error("Status update error: {0}")]
    StatusUpdate(#[from] StatusUpdateError),

    /// Resource not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request conflicts with current state.
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials | AuthError::AdminNotFound => {
                    StatusCode::UNAUTHORIZED
                }
                AuthError::Repository(_) | AuthError::PasswordHash => {
                    StatusCode::INTERNAL_SERVER_ERROR
                }
            },
            Self::Token(TokenError::NotAdmin) => StatusCode::FORBIDDEN,
            Self::Token(_) => StatusCode::UNAUTHORIZED,
            Self::StatusUpdate(err) => match err {
                StatusUpdateError::NotFound => StatusCode::NOT_FOUND,
                StatusUpdateError::IllegalTransition { .. } => StatusCode::CONFLICT,
                StatusUpdateError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::CONFLICT,
        }
    }

    /// Client-facing message. Internal details never leak.
    fn message(&self) -> String {
        match self {
            Self::Database(_) | Self::Internal(_) => "Internal server error".to_string(),
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials | AuthError::AdminNotFound => {
                    "Invalid credentials".to_string()
                }
                AuthError::Repository(_) | AuthError::PasswordHash => {
                    "Internal server error".to_string()
                }
            },
            Self::Token(TokenError::Missing) => "No token provided".to_string(),
            Self::Token(TokenError::NotAdmin) => "Admin access required".to_string(),
            Self::Token(_) => "Invalid token".to_string(),
            Self::StatusUpdate(err) => match err {
                StatusUpdateError::NotFound => "Order not found".to_string(),
                StatusUpdateError::IllegalTransition { .. } => err.to_string(),
                StatusUpdateError::Repository(_) => "Internal server error".to_string(),
            },
            Self::NotFound(what) => format!("{what} not found"),
            Self::BadRequest(msg) | Self::Conflict(msg) => msg.clone(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        (status, Json(json!({ "error": self.message() }))).into_response()
    }
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use clove_core::OrderStatus;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_non_admin_token_is_forbidden() {
        assert_eq!(
            status_of(AppError::Token(TokenError::NotAdmin)),
            StatusCode::FORBIDDEN
        );
    }

    #[test]
    fn test_missing_token_is_unauthorized() {
        assert_eq!(
            status_of(AppError::Token(TokenError::Missing)),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_illegal_transition_is_conflict() {
        let err = AppError::StatusUpdate(StatusUpdateError::IllegalTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Shipped,
        });
        assert_eq!(status_of(err), StatusCode::CONFLICT);
    }

    #[test]
    fn test_illegal_transition_names_both_states() {
        let err = AppError::StatusUpdate(StatusUpdateError::IllegalTransition {
            from: OrderStatus::Delivered,
            to: OrderStatus::Shipped,
        });
        let msg = err.message();
        assert!(msg.contains("delivered"));
        assert!(msg.contains("shipped"));
    }
}
