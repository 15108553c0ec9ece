//! Credential store contract and SQLite implementation
//!
//! The service only ever reads user records; account creation and updates
//! belong to the wider admin backend.

use async_trait::async_trait;
use sqlx::SqlitePool;

use super::models::UserRecord;

/// Lookup contract the authentication service depends on.
///
/// Absence of a user is `Ok(None)`, not an error; errors are reserved for
/// the backing store itself failing.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, sqlx::Error>;
}

/// Credential store backed by the platform's SQLite database.
#[derive(Debug, Clone)]
pub struct SqliteCredentialStore {
    pool: SqlitePool,
}

impl SqliteCredentialStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CredentialStore for SqliteCredentialStore {
    async fn find_by_email(&self, email: &str) -> Result<Option<UserRecord>, sqlx::Error> {
        // TEXT equality in SQLite is case-sensitive, matching the stored form
        sqlx::query_as::<_, UserRecord>(
            "SELECT id, email, name, role, password_hash FROM users WHERE email = ?",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await
    }
}
