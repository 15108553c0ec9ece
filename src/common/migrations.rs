// src/common/migrations.rs
//! Database schema management for the authentication core

use sqlx::SqlitePool;
use std::env;
use tracing::{error, info};

use crate::auth::password;
use crate::common::safe_email_log;

/// Run all database migrations
pub async fn run_migrations(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    create_user_tables(pool).await?;
    seed_admin_user(pool).await?;

    info!("Database migration completed successfully");

    Ok(())
}

async fn create_user_tables(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS users (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            email TEXT NOT NULL UNIQUE,
            name TEXT NOT NULL,
            role TEXT NOT NULL DEFAULT 'volunteer',
            password_hash TEXT NOT NULL,
            created_at TEXT DEFAULT (datetime('now'))
        )
        "#,
    )
    .execute(pool)
    .await?;

    Ok(())
}

/// Create the initial admin account from `ADMIN_EMAIL` / `ADMIN_PASSWORD`
/// environment variables. Only inserts if the email is not already present,
/// so restarts never overwrite an existing account.
async fn seed_admin_user(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    let (email, password) = match (env::var("ADMIN_EMAIL"), env::var("ADMIN_PASSWORD")) {
        (Ok(e), Ok(p)) if !e.is_empty() && !p.is_empty() => (e, p),
        _ => return Ok(()),
    };

    let existing: Option<(i64,)> = sqlx::query_as("SELECT id FROM users WHERE email = ?")
        .bind(&email)
        .fetch_optional(pool)
        .await?;

    if existing.is_some() {
        return Ok(());
    }

    let password_hash = match password::hash(&password) {
        Ok(h) => h,
        Err(e) => {
            // Seeding is best-effort; the schema itself is already in place
            error!(error = %e, "Failed to hash admin password, skipping admin seed");
            return Ok(());
        }
    };

    sqlx::query("INSERT INTO users (email, name, role, password_hash) VALUES (?, ?, 'admin', ?)")
        .bind(&email)
        .bind("Administrator")
        .bind(&password_hash)
        .execute(pool)
        .await?;

    info!(email = %safe_email_log(&email), "Seeded initial admin account");

    Ok(())
}
