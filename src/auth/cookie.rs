//! Refresh token cookie construction
//!
//! The refresh token never appears in a response body; it always travels as
//! an HTTP-only cookie. The cookie's `Expires` is fixed at seven days from
//! issuance, while the token's own `exp` claim stays authoritative.

use axum_extra::extract::cookie::{Cookie, SameSite};
use time::{Duration, OffsetDateTime};

use crate::config::Environment;

/// Name of the refresh token cookie
pub const REFRESH_COOKIE_NAME: &str = "refreshToken";

/// Build the cookie carrying a freshly issued refresh token
pub fn build_refresh_cookie(
    value: &str,
    domain: &str,
    environment: &Environment,
) -> Cookie<'static> {
    let expires = OffsetDateTime::now_utc() + Duration::days(7);
    build_cookie(value, domain, environment, expires)
}

/// Build the cookie that clears the refresh token on logout
///
/// Empty value with an expiry in 1970, so the browser drops it immediately.
pub fn build_clear_cookie(domain: &str, environment: &Environment) -> Cookie<'static> {
    build_cookie("", domain, environment, OffsetDateTime::UNIX_EPOCH)
}

fn build_cookie(
    value: &str,
    domain: &str,
    environment: &Environment,
    expires: OffsetDateTime,
) -> Cookie<'static> {
    // Cross-site cookies need SameSite=None + Secure; local development runs
    // over plain HTTP, so it gets Lax without Secure instead.
    let (secure, same_site) = if environment.is_development() {
        (false, SameSite::Lax)
    } else {
        (true, SameSite::None)
    };

    Cookie::build((REFRESH_COOKIE_NAME, value.to_string()))
        .http_only(true)
        .path("/")
        .domain(domain.to_string())
        .expires(expires)
        .secure(secure)
        .same_site(same_site)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_refresh_cookie_development_attributes() {
        let cookie = build_refresh_cookie("token-value", "localhost", &Environment::Development);

        assert_eq!(cookie.name(), REFRESH_COOKIE_NAME);
        assert_eq!(cookie.value(), "token-value");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.domain(), Some("localhost"));
        assert_eq!(cookie.secure(), Some(false));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
    }

    #[test]
    fn test_refresh_cookie_production_attributes() {
        let cookie = build_refresh_cookie("token-value", "murmur.app", &Environment::Production);

        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::None));
    }

    #[test]
    fn test_refresh_cookie_expires_in_seven_days() {
        let cookie = build_refresh_cookie("token-value", "localhost", &Environment::Development);

        let expires = cookie.expires_datetime().unwrap();
        let expected = OffsetDateTime::now_utc() + Duration::days(7);
        assert!((expires - expected).abs() < Duration::seconds(5));
    }

    #[test]
    fn test_clear_cookie_is_empty_and_epoch_expired() {
        let cookie = build_clear_cookie("localhost", &Environment::Development);

        assert_eq!(cookie.name(), REFRESH_COOKIE_NAME);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(
            cookie.expires_datetime().unwrap(),
            OffsetDateTime::UNIX_EPOCH
        );
    }
}
