//! Account Payloads
//!
//! Request and response bodies of the `/api/auth` endpoints. Missing fields
//! deserialize to empty strings so the server can answer with a validation
//! error instead of a generic rejection.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Body of `POST /api/auth/register`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegisterRequest {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Plain password, hashed before storage
    #[serde(default)]
    pub password: String,
}

/// Body of `POST /api/auth/login`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub password: String,
}

/// Bearer token issued by register and login
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    pub token: String,
}

/// Public profile of the authenticated user (no password hash)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
}
