//! Authentication data models

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Profile tag attached to every account.
///
/// Stored lowercase in the database and serialized lowercase on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, sqlx::Type)]
#[serde(rename_all = "lowercase")]
#[sqlx(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Staff,
    Volunteer,
}

/// User database model.
///
/// Deliberately not `Serialize`: the credential hash must never pass
/// through a serializer on its way out of the service.
#[derive(Debug, Clone, FromRow)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub password_hash: String,
}

/// The subset of a user record that is safe to expose: embedded in every
/// issued token and returned to the caller alongside the token pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PublicProfile {
    pub id: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
}

impl From<&UserRecord> for PublicProfile {
    fn from(user: &UserRecord) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role,
        }
    }
}

/// JWT claims structure: one profile snapshot plus the validity window
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Claims {
    pub sub: i64,
    pub email: String,
    pub name: String,
    pub role: Role,
    pub iat: i64,
    pub exp: i64,
}

impl Claims {
    pub fn profile(&self) -> PublicProfile {
        PublicProfile {
            id: self.sub,
            email: self.email.clone(),
            name: self.name.clone(),
            role: self.role,
        }
    }
}

/// Token pair handed back on successful login or refresh
#[derive(Debug, Clone, Serialize)]
pub struct SessionBundle {
    pub access_token: String,
    pub refresh_token: String,
    pub user: PublicProfile,
}
