// Signing secrets and token lifetimes, loaded once at startup

use chrono::Duration;
use dotenv::dotenv;
use std::env;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    MissingSecret(&'static str),

    #[error("invalid value for {0}")]
    InvalidTtl(&'static str),
}

/// Authentication configuration.
///
/// The two secrets are independent: access tokens and refresh tokens are
/// signed with different keys so one kind can never verify as the other.
/// Read-only after construction, safe to share across request tasks.
#[derive(Debug, Clone)]
pub struct AuthConfig {
    pub access_secret: String,
    pub refresh_secret: String,
    pub access_ttl: Duration,
    pub refresh_ttl: Duration,
}

impl AuthConfig {
    /// Build a config with the default lifetimes (15 minutes / 7 days).
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: access_secret.into(),
            refresh_secret: refresh_secret.into(),
            access_ttl: Duration::minutes(15),
            refresh_ttl: Duration::days(7),
        }
    }

    /// Load configuration from the environment.
    ///
    /// `ACCESS_TOKEN_SECRET` and `REFRESH_TOKEN_SECRET` are required; a
    /// missing secret is a startup failure, not something to default.
    /// `ACCESS_TOKEN_TTL_MINUTES` and `REFRESH_TOKEN_TTL_DAYS` are optional
    /// overrides.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();

        let access_secret = env::var("ACCESS_TOKEN_SECRET")
            .map_err(|_| ConfigError::MissingSecret("ACCESS_TOKEN_SECRET"))?;
        let refresh_secret = env::var("REFRESH_TOKEN_SECRET")
            .map_err(|_| ConfigError::MissingSecret("REFRESH_TOKEN_SECRET"))?;

        let access_minutes = parse_ttl("ACCESS_TOKEN_TTL_MINUTES", 15)?;
        let refresh_days = parse_ttl("REFRESH_TOKEN_TTL_DAYS", 7)?;

        Ok(Self {
            access_secret,
            refresh_secret,
            access_ttl: Duration::minutes(access_minutes),
            refresh_ttl: Duration::days(refresh_days),
        })
    }
}

fn parse_ttl(key: &'static str, default: i64) -> Result<i64, ConfigError> {
    match env::var(key) {
        Ok(raw) => raw
            .parse::<i64>()
            .ok()
            .filter(|n| *n > 0)
            .ok_or(ConfigError::InvalidTtl(key)),
        Err(_) => Ok(default),
    }
}
