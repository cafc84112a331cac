//! Authentication middleware
//!
//! Middleware for JWT access token verification and user extraction.

use axum::{
    async_trait,
    extract::{FromRef, FromRequestParts},
    http::{request::Parts, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use axum_extra::{
    headers::{authorization::Bearer, Authorization},
    TypedHeader,
};
use serde::Serialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::{verify_token, AuthService};
use crate::models::UserRole;

/// Authenticated user extracted from a JWT access token
#[derive(Debug, Clone)]
pub struct AuthenticatedUser {
    pub user_id: Uuid,
    pub role: UserRole,
}

/// Error response for authentication failures
#[derive(Debug, Serialize)]
struct AuthRejection {
    error: AuthRejectionDetails,
}

#[derive(Debug, Serialize)]
struct AuthRejectionDetails {
    code: String,
    message: String,
}

impl AuthRejection {
    fn new(code: &str, message: &str) -> Self {
        Self {
            error: AuthRejectionDetails {
                code: code.to_string(),
                message: message.to_string(),
            },
        }
    }
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        (StatusCode::UNAUTHORIZED, Json(self)).into_response()
    }
}

/// Extractor for authenticated users
///
/// Verifies the JWT from the Authorization header and hands the handler a
/// typed principal. Only access tokens pass; a refresh token presented here
/// is rejected.
///
/// # Example
///
/// ```rust,ignore
/// async fn protected_handler(user: AuthenticatedUser) -> impl IntoResponse {
///     format!("Hello, user {}", user.user_id)
/// }
/// ```
#[async_trait]
impl<S> FromRequestParts<S> for AuthenticatedUser
where
    Arc<AuthService>: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        // Extract the Authorization header
        let TypedHeader(Authorization(bearer)) =
            TypedHeader::<Authorization<Bearer>>::from_request_parts(parts, state)
                .await
                .map_err(|_| {
                    AuthRejection::new(
                        "MISSING_TOKEN",
                        "Authorization header with Bearer token required",
                    )
                    .into_response()
                })?;

        // Get the auth service from state
        let auth_service = Arc::<AuthService>::from_ref(state);

        // Verify the token
        let claims = verify_token(bearer.token(), auth_service.jwt_secret()).map_err(|e| {
            let (code, message) = match e.to_string().as_str() {
                s if s.contains("expired") => ("TOKEN_EXPIRED", "Token has expired"),
                _ => ("INVALID_TOKEN", "Invalid token"),
            };
            AuthRejection::new(code, message).into_response()
        })?;

        // Check token type is access
        if claims.token_type != "access" {
            return Err(
                AuthRejection::new("INVALID_TOKEN_TYPE", "Expected access token").into_response(),
            );
        }

        // Parse user ID
        let user_id = Uuid::parse_str(&claims.sub).map_err(|_| {
            AuthRejection::new("INVALID_TOKEN", "Invalid user ID in token").into_response()
        })?;

        // Parse role
        let role = UserRole::from_str(&claims.role).ok_or_else(|| {
            AuthRejection::new("INVALID_TOKEN", "Invalid role in token").into_response()
        })?;

        Ok(AuthenticatedUser { user_id, role })
    }
}
