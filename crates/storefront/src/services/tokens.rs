//! Bearer-token minting and verification for customers.
//!
//! Tokens are HS256 JWTs signed with the shared `JWT_SECRET`. Customer
//! tokens carry only `sub`/`iat`/`exp`; admin tokens (minted by the admin
//! binary) additionally carry `type: "admin"` and are rejected here so a
//! leaked admin token cannot impersonate a customer account.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use clove_core::UserId;

/// Customer token lifetime.
const USER_TOKEN_TTL_DAYS: i64 = 7;

/// Errors that can occur while handling bearer tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    /// No `Authorization: Bearer` header on the request.
    #[error("no token provided")]
    Missing,

    /// The token has expired.
    #[error("token expired")]
    Expired,

    /// The token is malformed, has a bad signature, or is of the wrong kind.
    #[error("invalid token")]
    Invalid,
}

/// JWT claims for customer tokens.
#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    /// User ID.
    sub: i64,
    /// Issued-at, seconds since epoch.
    iat: i64,
    /// Expiry, seconds since epoch.
    exp: i64,
    /// Privilege marker. Never set on customer tokens; present on admin
    /// tokens, which must not pass verification here.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    token_type: Option<String>,
}

/// Mint a customer token for `user_id`.
///
/// # Errors
///
/// Returns `TokenError::Invalid` if signing fails (which only happens with a
/// broken key, not bad input).
pub fn mint(secret: &SecretString, user_id: UserId) -> Result<String, TokenError> {
    let now = Utc::now();
    let claims = Claims {
        sub: user_id.as_i64(),
        iat: now.timestamp(),
        exp: (now + Duration::days(USER_TOKEN_TTL_DAYS)).timestamp(),
        token_type: None,
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
    .map_err(|_| TokenError::Invalid)
}

/// Verify a customer token and return the user ID it was minted for.
///
/// # Errors
///
/// Returns `TokenError::Expired` for expired tokens and
/// `TokenError::Invalid` for anything else wrong with the token, including
/// admin tokens presented on the customer surface.
pub fn verify(secret: &SecretString, token: &str) -> Result<UserId, TokenError> {
    let data = jsonwebtoken::decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })?;

    if data.claims.token_type.is_some() {
        return Err(TokenError::Invalid);
    }

    Ok(UserId::new(data.claims.sub))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn secret() -> SecretString {
        SecretString::from("test-signing-secret-0123456789abcdef")
    }

    #[test]
    fn test_mint_verify_roundtrip() {
        let token = mint(&secret(), UserId::new(42)).unwrap();
        let user_id = verify(&secret(), &token).unwrap();
        assert_eq!(user_id, UserId::new(42));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = mint(&secret(), UserId::new(1)).unwrap();
        let other = SecretString::from("another-signing-secret-fedcba987654");
        assert!(matches!(verify(&other, &token), Err(TokenError::Invalid)));
    }

    #[test]
    fn test_verify_rejects_garbage() {
        assert!(matches!(
            verify(&secret(), "not-a-jwt"),
            Err(TokenError::Invalid)
        ));
    }

    #[test]
    fn test_verify_rejects_typed_tokens() {
        // Simulate an admin token: same secret, but with a type claim.
        let now = Utc::now();
        let claims = Claims {
            sub: 1,
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
            token_type: Some("admin".to_string()),
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret().expose_secret().as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            verify(&secret(), &token),
            Err(TokenError::Invalid)
        ));
    }
}
