//! Application state shared across handlers

use std::sync::Arc;

use axum::extract::FromRef;
use sqlx::PgPool;

use crate::auth::AuthService;
use crate::config::Config;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub db_pool: PgPool,
    pub auth_service: Arc<AuthService>,
}

impl AppState {
    pub fn new(config: Config, db_pool: PgPool, auth_service: Arc<AuthService>) -> Self {
        Self {
            config,
            db_pool,
            auth_service,
        }
    }
}

impl FromRef<AppState> for Arc<AuthService> {
    fn from_ref(app_state: &AppState) -> Self {
        app_state.auth_service.clone()
    }
}
