//! # Auth Module
//!
//! This module handles all authentication-related functionality including:
//! - Credential verification against the user store
//! - Access/refresh token issuance and validation
//! - Refresh-token exchange with rotation

pub mod models;
pub mod password;
pub mod service;
pub mod store;
pub mod token;


pub use models::{Claims, PublicProfile, Role, SessionBundle, UserRecord};
pub use service::AuthService;
pub use store::{CredentialStore, SqliteCredentialStore};
