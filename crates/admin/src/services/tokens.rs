//! Bearer-token minting and verification for administrators.
//!
//! Admin tokens are HS256 JWTs signed with the same `JWT_SECRET` as customer
//! tokens but carry a `type: "admin"` claim. Verification here requires that
//! claim, so a customer token presented on the admin surface is refused even
//! though the signature checks out.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, errors::ErrorKind};
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use clove_core::AdminUserId;

/// Admin token lifetime. Deliberately shorter than customer tokens.
const ADMIN_TOKEN_TTL_HOURS: i64 = 8;

/// The privilege marker carried by admin tokens.
const ADMIN_TOKEN_TYPE: &str = "admin";

/// Errors that can occur while handling admin bearer tokens.
#[derive(Debug, Error)]
pub enum TokenError {
    /// No `Authorization: Bearer` header on the request.
    #[error("no token provided")]
    Missing,

    /// The token has expired.
    #[error("token expired")]
    Expired,

    /// The token is malformed or has a bad signature.
    #[error("invalid token")]
    Invalid,

    /// The token verified but does not carry the admin claim.
    #[error("admin access required")]
    NotAdmin,
}

/// JWT claims for admin tokens.
#[derive(Debug, Serialize, Deserialize)]
struct AdminClaims {
    /// Admin user ID.
    sub: i64,
    /// Issued-at, seconds since epoch.
    iat: i64,
    /// Expiry, seconds since epoch.
    exp: i64,
    /// Privilege marker; must be `"admin"`.
    #[serde(rename = "type", default)]
    token_type: Option<String>,
}

/// Mint an admin token for `admin_id`.
///
/// # Errors
///
/// Returns `TokenError::Invalid` if signing fails.
pub fn mint(secret: &SecretString, admin_id: AdminUserId) -> Result<String, TokenError> {
    let now = Utc::now();
    let claims = AdminClaims {
        sub: admin_id.as_i64(),
        iat: now.timestamp(),
        exp: (now + Duration::hours(ADMIN_TOKEN_TTL_HOURS)).timestamp(),
        token_type: Some(ADMIN_TOKEN_TYPE.to_string()),
    };

    jsonwebtoken::encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.expose_secret().as_bytes()),
    )
    .map_err(|_| TokenError::Invalid)
}

/// Verify an admin token and return the admin ID it was minted for.
///
/// # Errors
///
/// Returns `TokenError::Expired`/`Invalid` for bad tokens and
/// `TokenError::NotAdmin` for tokens that verify but lack the
/// `type: "admin"` claim (i.e., customer tokens).
pub fn verify(secret: &SecretString, token: &str) -> Result<AdminUserId, TokenError> {
    let data = jsonwebtoken::decode::<AdminClaims>(
        token,
        &DecodingKey::from_secret(secret.expose_secret().as_bytes()),
        &Validation::default(),
    )
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        _ => TokenError::Invalid,
    })?;

    if data.claims.token_type.as_deref() != Some(ADMIN_TOKEN_TYPE) {
        return Err(TokenError::NotAdmin);
    }

    Ok(AdminUserId::new(data.claims.sub))
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
        let token = mint(&secret(), AdminUserId::new(3)).unwrap();
        assert_eq!(verify(&secret(), &token).unwrap(), AdminUserId::new(3));
    }

    #[test]
    fn test_verify_rejects_untyped_tokens() {
        // A customer-shaped token: valid signature, no type claim.
        let now = Utc::now();
        let claims = AdminClaims {
            sub: 9,
            iat: now.timestamp(),
            exp: (now + Duration::hours(1)).timestamp(),
            token_type: None,
        };
        let token = jsonwebtoken::encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(secret().expose_secret().as_bytes()),
        )
        .unwrap();

        assert!(matches!(
            verify(&secret(), &token),
            Err(TokenError::NotAdmin)
        ));
    }

    #[test]
    fn test_verify_rejects_wrong_secret() {
        let token = mint(&secret(), AdminUserId::new(1)).unwrap();
        let other = SecretString::from("another-signing-secret-fedcba987654");
        assert!(matches!(verify(&other, &token), Err(TokenError::Invalid)));
    }
}
