//! Route definitions for the Murmur auth API

mod auth;

pub use auth::auth_routes;
