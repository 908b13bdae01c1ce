//! Tests for bearer-token compatibility across the storefront/admin split.
//!
//! Both binaries sign with the same secret; the `type: "admin"` claim is the
//! only thing separating privilege levels, so these tests pin both rejection
//! directions.

use secrecy::SecretString;

use clove_admin::services::tokens as admin_tokens;
use clove_core::{AdminUserId, UserId};
use clove_storefront::services::tokens as user_tokens;

fn shared_secret() -> SecretString {
    SecretString::from("integration-test-signing-key-0123456789")
}

#[test]
fn test_user_token_roundtrip() {
    let token = user_tokens::mint(&shared_secret(), UserId::new(7)).expect("mint");
    let user_id = user_tokens::verify(&shared_secret(), &token).expect("verify");
    assert_eq!(user_id, UserId::new(7));
}

#[test]
fn test_admin_token_roundtrip() {
    let token = admin_tokens::mint(&shared_secret(), AdminUserId::new(1)).expect("mint");
    let admin_id = admin_tokens::verify(&shared_secret(), &token).expect("verify");
    assert_eq!(admin_id, AdminUserId::new(1));
}

#[test]
fn test_customer_token_rejected_on_admin_surface() {
    // A customer token is well-signed but has no type claim; the admin
    // verifier must refuse it (the handler maps this to 403).
    let token = user_tokens::mint(&shared_secret(), UserId::new(7)).expect("mint");
    assert!(matches!(
        admin_tokens::verify(&shared_secret(), &token),
        Err(admin_tokens::TokenError::NotAdmin)
    ));
}

#[test]
fn test_admin_token_rejected_on_customer_surface() {
    // The reverse direction: an admin token must not resolve to a customer
    // account even though the signature checks out.
    let token = admin_tokens::mint(&shared_secret(), AdminUserId::new(1)).expect("mint");
    assert!(matches!(
        user_tokens::verify(&shared_secret(), &token),
        Err(user_tokens::TokenError::Invalid)
    ));
}

#[test]
fn test_tokens_do_not_verify_across_secrets() {
    let other = SecretString::from("a-completely-different-signing-key-xyz");

    let user_token = user_tokens::mint(&shared_secret(), UserId::new(7)).expect("mint");
    assert!(user_tokens::verify(&other, &user_token).is_err());

    let admin_token = admin_tokens::mint(&shared_secret(), AdminUserId::new(1)).expect("mint");
    assert!(admin_tokens::verify(&other, &admin_token).is_err());
}

#[test]
fn test_tampered_token_is_rejected() {
    let token = user_tokens::mint(&shared_secret(), UserId::new(7)).expect("mint");

    // Flip a character in the payload segment.
    let mut chars: Vec<char> = token.chars().collect();
    let mid = token.len() / 2;
    chars[mid] = if chars[mid] == 'a' { 'b' } else { 'a' };
    let tampered: String = chars.into_iter().collect();

    assert!(user_tokens::verify(&shared_secret(), &tampered).is_err());
}
