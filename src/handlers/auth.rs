//! Authentication HTTP handlers
//!
//! Endpoints for registration, login, token refresh and logout. The refresh
//! token only ever moves through the `refreshToken` cookie; response bodies
//! carry the access token alone. Malformed request bodies surface through the
//! standard validation error envelope.

use axum::{extract::State, http::StatusCode, Json};
use axum_extra::extract::{CookieJar, WithRejection};
use serde_json::json;
use validator::Validate;

use super::AuthenticatedUser;
use crate::auth::{build_clear_cookie, build_refresh_cookie, TokenPair, REFRESH_COOKIE_NAME};
use crate::error::ApiError;
use crate::models::{LoginRequest, RegisterRequest, TokenResponse, UserResponse};
use crate::state::AppState;

/// POST /auth/register - Create an account and issue tokens
pub async fn register(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(req), _): WithRejection<Json<RegisterRequest>, ApiError>,
) -> Result<(StatusCode, CookieJar, Json<TokenResponse>), ApiError> {
    req.validate()?;

    let tokens = state
        .auth_service
        .register(&req.name, &req.email, &req.password)
        .await?;

    let (jar, body) = issue_cookie_and_body(&state, jar, tokens);
    Ok((StatusCode::CREATED, jar, body))
}

/// POST /auth/login - Verify credentials and issue tokens
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    WithRejection(Json(req), _): WithRejection<Json<LoginRequest>, ApiError>,
) -> Result<(CookieJar, Json<TokenResponse>), ApiError> {
    req.validate()?;

    let tokens = state.auth_service.login(&req.email, &req.password).await?;

    Ok(issue_cookie_and_body(&state, jar, tokens))
}

/// POST /auth/refresh - Rotate the refresh token cookie into a new pair
pub async fn refresh_token(
    State(state): State<AppState>,
    jar: CookieJar,
) -> Result<(CookieJar, Json<TokenResponse>), ApiError> {
    let refresh_token = jar
        .get(REFRESH_COOKIE_NAME)
        .map(|cookie| cookie.value().to_string())
        .ok_or_else(|| ApiError::Unauthorized("Refresh token not provided".to_string()))?;

    let tokens = state.auth_service.refresh(&refresh_token).await?;

    Ok(issue_cookie_and_body(&state, jar, tokens))
}

/// POST /auth/logout - Clear the refresh token cookie
///
/// Tokens are stateless, so there is nothing to revoke server-side; the
/// cookie is overwritten unconditionally and the call never fails.
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<serde_json::Value>) {
    let jar = jar.add(build_clear_cookie(
        &state.config.cookie_domain,
        &state.config.environment,
    ));

    (jar, Json(json!({ "success": true })))
}

/// GET /auth/me - Get current authenticated user
pub async fn get_current_user(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> Result<Json<UserResponse>, ApiError> {
    let user = state.auth_service.validate(user.user_id).await?;

    Ok(Json(user.into()))
}

/// Attach the refresh cookie and wrap the access token for the body
fn issue_cookie_and_body(
    state: &AppState,
    jar: CookieJar,
    tokens: TokenPair,
) -> (CookieJar, Json<TokenResponse>) {
    let jar = jar.add(build_refresh_cookie(
        &tokens.refresh_token,
        &state.config.cookie_domain,
        &state.config.environment,
    ));

    (
        jar,
        Json(TokenResponse {
            access_token: tokens.access_token,
        }),
    )
}
