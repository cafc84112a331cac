//! JWT token generation and validation
//!
//! Handles creation and verification of access and refresh tokens. Both token
//! kinds share one payload shape and differ only in TTL and `token_type`.

use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use uuid::Uuid;

use crate::models::UserRole;

/// JWT-related errors
#[derive(Error, Debug)]
pub enum JwtError {
    #[error("Token encoding failed: {0}")]
    EncodingFailed(String),

    #[error("Token decoding failed: {0}")]
    DecodingFailed(String),

    #[error("Token expired")]
    TokenExpired,

    #[error("Invalid token: {0}")]
    InvalidToken(String),
}

/// JWT claims shared by access and refresh tokens
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Subject (user ID)
    pub sub: String,
    /// User role
    pub role: String,
    /// Issued at (Unix timestamp)
    pub iat: i64,
    /// Expiration (Unix timestamp)
    pub exp: i64,
    /// Token type (access or refresh)
    pub token_type: String,
}

/// Token type enum
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenType {
    Access,
    Refresh,
}

impl TokenType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TokenType::Access => "access",
            TokenType::Refresh => "refresh",
        }
    }
}

/// Generate an access token for a user
///
/// # Arguments
/// * `user_id` - The authenticated user's ID
/// * `role` - The user's role
/// * `secret` - JWT signing secret
/// * `ttl_seconds` - Token time-to-live in seconds
pub fn generate_access_token(
    user_id: Uuid,
    role: UserRole,
    secret: &str,
    ttl_seconds: i64,
) -> Result<String, JwtError> {
    generate_token(user_id, role, secret, ttl_seconds, TokenType::Access)
}

/// Generate a refresh token for a user
///
/// # Arguments
/// * `user_id` - The authenticated user's ID
/// * `role` - The user's role
/// * `secret` - JWT signing secret
/// * `ttl_days` - Token time-to-live in days
pub fn generate_refresh_token(
    user_id: Uuid,
    role: UserRole,
    secret: &str,
    ttl_days: i64,
) -> Result<String, JwtError> {
    let ttl_seconds = ttl_days * 24 * 60 * 60;
    generate_token(user_id, role, secret, ttl_seconds, TokenType::Refresh)
}

/// Internal function to generate tokens
fn generate_token(
    user_id: Uuid,
    role: UserRole,
    secret: &str,
    ttl_seconds: i64,
    token_type: TokenType,
) -> Result<String, JwtError> {
    let now = Utc::now();
    let exp = now + Duration::seconds(ttl_seconds);

    let claims = Claims {
        sub: user_id.to_string(),
        role: role.as_str().to_string(),
        iat: now.timestamp(),
        exp: exp.timestamp(),
        token_type: token_type.as_str().to_string(),
    };

    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| JwtError::EncodingFailed(e.to_string()))
}

/// Verify and decode a JWT token
///
/// # Arguments
/// * `token` - The JWT token string
/// * `secret` - JWT signing secret
///
/// # Returns
/// * `Ok(Claims)` if token is valid
/// * `Err(JwtError)` if validation fails
pub fn verify_token(token: &str, secret: &str) -> Result<Claims, JwtError> {
    let mut validation = Validation::default();
    validation.validate_exp = true;

    let token_data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| {
        if e.to_string().contains("ExpiredSignature") {
            JwtError::TokenExpired
        } else {
            JwtError::DecodingFailed(e.to_string())
        }
    })?;

    Ok(token_data.claims)
}

/// Extract user ID from claims
pub fn get_user_id_from_claims(claims: &Claims) -> Result<Uuid, JwtError> {
    Uuid::parse_str(&claims.sub).map_err(|e| JwtError::InvalidToken(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_access_token() {
        let user_id = Uuid::new_v4();
        let secret = "test-secret-key";

        let token = generate_access_token(user_id, UserRole::Regular, secret, 900).unwrap();
        assert!(!token.is_empty());

        // Verify the token
        let claims = verify_token(&token, secret).unwrap();
        assert_eq!(claims.sub, user_id.to_string());
        assert_eq!(claims.role, "regular");
        assert_eq!(claims.token_type, "access");
        assert_eq!(get_user_id_from_claims(&claims).unwrap(), user_id);
    }

    #[test]
    fn test_generate_refresh_token() {
        let user_id = Uuid::new_v4();
        let secret = "test-secret-key";

        let token = generate_refresh_token(user_id, UserRole::Admin, secret, 7).unwrap();
        assert!(!token.is_empty());

        let claims = verify_token(&token, secret).unwrap();
        assert_eq!(claims.token_type, "refresh");
        assert_eq!(claims.role, "admin");

        // Seven days out, give or take scheduling slack
        let expected = Utc::now().timestamp() + 7 * 24 * 60 * 60;
        assert!((claims.exp - expected).abs() < 5);
    }

    #[test]
    fn test_invalid_token() {
        let secret = "test-secret-key";
        let result = verify_token("invalid.token.here", secret);
        assert!(result.is_err());
    }

    #[test]
    fn test_wrong_secret() {
        let user_id = Uuid::new_v4();

        let token = generate_access_token(user_id, UserRole::Regular, "secret1", 900).unwrap();
        let result = verify_token(&token, "secret2");
        assert!(result.is_err());
    }

    #[test]
    fn test_expired_token() {
        let user_id = Uuid::new_v4();
        let secret = "test-secret-key";

        // Validation::default() allows 60s leeway, so push well past it
        let token = generate_access_token(user_id, UserRole::Regular, secret, -120).unwrap();
        let result = verify_token(&token, secret);
        assert!(matches!(result, Err(JwtError::TokenExpired)));
    }

    #[test]
    fn test_tampered_subject_rejected() {
        let secret = "test-secret-key";
        let claims = Claims {
            sub: "not-a-uuid".to_string(),
            role: "regular".to_string(),
            iat: Utc::now().timestamp(),
            exp: Utc::now().timestamp() + 900,
            token_type: "access".to_string(),
        };
        assert!(get_user_id_from_claims(&claims).is_err());
    }
}
