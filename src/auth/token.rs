//! Token codec
//!
//! Turns a profile snapshot into a signed, time-bounded JWT and a presented
//! token string back into claims. Access and refresh tokens use independent
//! secrets; which secret a caller passes decides which kind verifies.

use chrono::{Duration, Utc};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use thiserror::Error;

use super::models::{Claims, PublicProfile};

#[derive(Debug, Error)]
pub enum TokenError {
    #[error("token is malformed")]
    Malformed,

    #[error("token signature is invalid")]
    InvalidSignature,

    #[error("token has expired")]
    Expired,

    #[error("token encoding failed: {0}")]
    Encoding(#[source] jsonwebtoken::errors::Error),
}

/// Issue a signed token carrying `profile` with the given lifetime.
pub fn issue(profile: &PublicProfile, secret: &str, ttl: Duration) -> Result<String, TokenError> {
    let now = Utc::now();
    let claims = Claims {
        sub: profile.id,
        email: profile.email.clone(),
        name: profile.name.clone(),
        role: profile.role,
        iat: now.timestamp(),
        exp: (now + ttl).timestamp(),
    };

    encode(
        &Header::new(Algorithm::HS256),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(TokenError::Encoding)
}

/// Verify a presented token string against `secret` and return its claims.
///
/// Expiry is checked with zero leeway: a token whose `exp` is at or before
/// the current time is rejected even when the signature is valid.
pub fn verify(token: &str, secret: &str) -> Result<Claims, TokenError> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.leeway = 0;

    decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map(|data| data.claims)
    .map_err(|e| match e.kind() {
        ErrorKind::ExpiredSignature => TokenError::Expired,
        ErrorKind::InvalidSignature => TokenError::InvalidSignature,
        _ => TokenError::Malformed,
    })
}
