//! Authentication service
//!
//! Orchestrates login and refresh-token exchange. Holds no state between
//! calls beyond the injected store and configuration, so concurrent
//! invocations never interact.

use tracing::{debug, info, warn};

use super::models::{PublicProfile, SessionBundle};
use super::store::CredentialStore;
use super::{password, token};
use crate::common::{safe_email_log, safe_token_log, AuthConfig, AuthError};

pub struct AuthService<S> {
    store: S,
    config: AuthConfig,
}

impl<S: CredentialStore> AuthService<S> {
    pub fn new(store: S, config: AuthConfig) -> Self {
        Self { store, config }
    }

    /// Verify an email/password pair and issue a fresh token pair.
    ///
    /// Unknown account and wrong password produce the identical error so
    /// the endpoint cannot be used to enumerate registered emails.
    pub async fn login(&self, email: &str, password: &str) -> Result<SessionBundle, AuthError> {
        let user = match self.store.find_by_email(email).await? {
            Some(user) => user,
            None => {
                warn!(email = %safe_email_log(email), "Login failed: unknown account");
                return Err(AuthError::InvalidCredentials);
            }
        };

        if !password::verify(password, &user.password_hash) {
            warn!(user_id = user.id, "Login failed: password mismatch");
            return Err(AuthError::InvalidCredentials);
        }

        let bundle = self.issue_session(PublicProfile::from(&user))?;

        info!(
            user_id = user.id,
            email = %safe_email_log(&user.email),
            "User login successful"
        );

        Ok(bundle)
    }

    /// Exchange a valid refresh token for a brand-new token pair.
    ///
    /// The user is looked up again so the new tokens carry the account's
    /// current profile fields, not the snapshot from the old token. Every
    /// codec-level failure and a vanished account all collapse into
    /// `InvalidRefreshToken`.
    pub async fn refresh(&self, refresh_token: &str) -> Result<SessionBundle, AuthError> {
        let claims = match token::verify(refresh_token, &self.config.refresh_secret) {
            Ok(claims) => claims,
            Err(e) => {
                warn!(
                    error = %e,
                    token = %safe_token_log(refresh_token),
                    "Refresh token rejected"
                );
                return Err(AuthError::InvalidRefreshToken);
            }
        };

        let user = match self.store.find_by_email(&claims.email).await? {
            Some(user) => user,
            None => {
                warn!(
                    email = %safe_email_log(&claims.email),
                    "Refresh rejected: account no longer exists"
                );
                return Err(AuthError::InvalidRefreshToken);
            }
        };

        let bundle = self.issue_session(PublicProfile::from(&user))?;

        debug!(user_id = user.id, "Refresh exchange successful");

        Ok(bundle)
    }

    fn issue_session(&self, profile: PublicProfile) -> Result<SessionBundle, AuthError> {
        let access_token = token::issue(&profile, &self.config.access_secret, self.config.access_ttl)
            .map_err(AuthError::Token)?;
        let refresh_token =
            token::issue(&profile, &self.config.refresh_secret, self.config.refresh_ttl)
                .map_err(AuthError::Token)?;

        Ok(SessionBundle {
            access_token,
            refresh_token,
            user: profile,
        })
    }
}
