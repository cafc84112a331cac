//! Authentication models for the Murmur auth service

use serde::{Deserialize, Serialize};
use sqlx::types::chrono::{DateTime, Utc};
use uuid::Uuid;
use validator::Validate;

use super::UserRole;

/// Narrow credentials row loaded during login
///
/// This is the only type in the crate that carries the password hash, and it
/// is never serialized.
#[derive(Debug, sqlx::FromRow, Clone)]
pub struct UserCredentials {
    pub id: Uuid,
    pub password_hash: String,
    pub role: UserRole,
}

// ============================================================================
// Request/Response DTOs
// ============================================================================

/// Registration request body
///
/// Email format is intentionally not validated here; only presence is. Login
/// is the stricter of the two.
#[derive(Debug, Deserialize, Validate)]
pub struct RegisterRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,

    #[validate(length(min = 1, message = "Email is required"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Login request body
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password is required"))]
    pub password: String,
}

/// Token response returned by register, login and refresh
///
/// The refresh token travels separately as an HTTP-only cookie.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenResponse {
    pub access_token: String,
}

/// User response (sanitized for API)
#[derive(Debug, Serialize, Clone)]
pub struct UserResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub role: UserRole,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_register_request_accepts_unconventional_email() {
        // Presence is checked, format is not
        let req = RegisterRequest {
            name: "Ada".to_string(),
            email: "not-an-email".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_register_request_rejects_empty_fields() {
        let req = RegisterRequest {
            name: String::new(),
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(req.validate().is_err());

        let req = RegisterRequest {
            name: "Ada".to_string(),
            email: String::new(),
            password: "hunter2".to_string(),
        };
        assert!(req.validate().is_err());

        let req = RegisterRequest {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            password: String::new(),
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_login_request_requires_valid_email() {
        let req = LoginRequest {
            email: "not-an-email".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(req.validate().is_err());

        let req = LoginRequest {
            email: "ada@example.com".to_string(),
            password: "hunter2".to_string(),
        };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_token_response_uses_camel_case() {
        let resp = TokenResponse {
            access_token: "abc".to_string(),
        };
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"accessToken":"abc"}"#);
    }
}
