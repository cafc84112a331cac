//! Authentication module for the Murmur auth service
//!
//! Provides credential-based authentication for the messenger:
//! - Registration and login with Argon2id password hashing
//! - JWT access token generation and validation
//! - Refresh token rotation via an HTTP-only cookie

mod cookie;
mod jwt;
mod password;
mod service;

pub use cookie::{build_clear_cookie, build_refresh_cookie, REFRESH_COOKIE_NAME};
pub use jwt::{generate_access_token, generate_refresh_token, verify_token, Claims};
pub use service::{AuthError, AuthService, TokenPair};
