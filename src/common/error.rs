// Error types crossing the authentication service boundary

use thiserror::Error;

use crate::auth::token::TokenError;

/// Failures reported to callers of the authentication service.
///
/// Codec-level outcomes (malformed, bad signature, expired) never cross this
/// boundary during verification; they are collapsed into the two opaque
/// variants below so a caller cannot distinguish an expired token from a
/// forged one.
#[derive(Debug, Error)]
pub enum AuthError {
    /// Unknown account or wrong password. The two sub-cases are reported
    /// identically so login cannot be used to probe which emails exist.
    #[error("invalid email or password")]
    InvalidCredentials,

    /// Malformed, expired, wrong-signature, or user-no-longer-found during
    /// a refresh exchange.
    #[error("invalid refresh token")]
    InvalidRefreshToken,

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Token issuance failed. Verification failures never surface here.
    #[error("token issuance failed: {0}")]
    Token(#[source] TokenError),
}
