//! Admin user management commands.
//!
//! # Usage
//!
//! ```bash
//! clove admin create -u store_admin -n "Store Admin"
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` - `PostgreSQL` connection string
//! - `CLOVE_ADMIN_PASSWORD` - Password for the new admin. When unset, a
//!   random password is generated and printed once.

use rand::{Rng, distr::Alphanumeric};
use sqlx::PgPool;
use thiserror::Error;

use clove_admin::db::AdminUserRepository;
use clove_admin::services::auth::hash_password;
use clove_core::{Username, UsernameError};

/// Length of generated one-shot passwords.
const GENERATED_PASSWORD_LENGTH: usize = 24;

/// Errors that can occur during admin operations.
#[derive(Debug, Error)]
pub enum AdminError {
    /// Required environment variable is missing.
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(&'static str),

    /// Database connection error.
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Invalid username.
    #[error("Invalid username: {0}")]
    InvalidUsername(#[from] UsernameError),

    /// Admin already exists.
    #[error("Admin user already exists: {0}")]
    UserExists(String),

    /// Password hashing failed.
    #[error("Password hashing failed")]
    PasswordHash,
}

/// Create a new admin user and report its ID.
///
/// # Errors
///
/// Returns `AdminError` if the username is invalid or taken, the database is
/// unreachable, or hashing fails.
pub async fn create_user(username: &str, display_name: &str) -> Result<i64, AdminError> {
    dotenvy::dotenv().ok();

    let username = Username::parse(username)?;

    let database_url =
        std::env::var("DATABASE_URL").map_err(|_| AdminError::MissingEnvVar("DATABASE_URL"))?;

    let (password, generated) = match std::env::var("CLOVE_ADMIN_PASSWORD") {
        Ok(p) => (p, false),
        Err(_) => (generate_password(), true),
    };

    let password_hash = hash_password(&password).map_err(|_| AdminError::PasswordHash)?;

    tracing::info!("Connecting to database...");
    let pool = PgPool::connect(&database_url).await?;

    tracing::info!("Creating admin user: {username}");
    let admin = AdminUserRepository::new(&pool)
        .create(&username, display_name, &password_hash)
        .await
        .map_err(|e| match e {
            clove_admin::db::RepositoryError::Conflict(_) => {
                AdminError::UserExists(username.to_string())
            }
            clove_admin::db::RepositoryError::Database(db) => AdminError::Database(db),
            other => AdminError::Database(sqlx::Error::Protocol(other.to_string())),
        })?;

    tracing::info!("Admin user created with ID {}", admin.id);

    if generated {
        // One-shot credential handoff; this is the only place it ever appears.
        #[allow(clippy::print_stdout)]
        {
            println!("Generated password for {username}: {password}");
            println!("Store it now; it is not recoverable.");
        }
    }

    Ok(admin.id.as_i64())
}

/// Generate a random alphanumeric password.
fn generate_password() -> String {
    rand::rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_PASSWORD_LENGTH)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_password_length_and_charset() {
        let password = generate_password();
        assert_eq!(password.len(), GENERATED_PASSWORD_LENGTH);
        assert!(password.chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_generated_passwords_differ() {
        assert_ne!(generate_password(), generate_password());
    }
}
