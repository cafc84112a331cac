//! Health check handler

use axum::{extract::State, Json};
use serde::Serialize;

use crate::db;
use crate::error::ApiError;
use crate::state::AppState;

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub version: String,
}

/// GET /health - Service and database connectivity check
pub async fn health_check(State(state): State<AppState>) -> Result<Json<HealthResponse>, ApiError> {
    db::check_health(&state.db_pool)
        .await
        .map_err(|e| ApiError::ServiceUnavailable(e.to_string()))?;

    Ok(Json(HealthResponse {
        status: "healthy".to_string(),
        database: "connected".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    }))
}

/// GET / - Service banner
pub async fn root() -> &'static str {
    "Murmur Auth API"
}
