//! Token store: the `auth_token` cookie.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

use crate::config::AppConfig;

pub const COOKIE_NAME: &str = "auth_token";

/// Read the session token; an empty cookie counts as no token.
#[must_use]
pub fn read_token(jar: &CookieJar) -> Option<String> {
    jar.get(COOKIE_NAME)
        .map(Cookie::value)
        .filter(|token| !token.is_empty())
        .map(str::to_owned)
}

/// `auth_token=<token>; Path=/; HttpOnly; SameSite=Lax; Max-Age=<days>` (+ `Secure` in production).
#[must_use]
pub fn session_cookie(config: &AppConfig, token: String) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(Duration::days(config.session_max_age_days))
        .build()
}

/// Same name and path as the session cookie, emptied and expired immediately.
#[must_use]
pub fn expired_cookie(config: &AppConfig) -> Cookie<'static> {
    Cookie::build((COOKIE_NAME, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(config.cookie_secure)
        .max_age(Duration::ZERO)
        .build()
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderMap;

    use super::*;

    fn jar_with(cookie_header: &str) -> CookieJar {
        let mut headers = HeaderMap::new();
        headers.insert("cookie", cookie_header.parse().unwrap());
        CookieJar::from_headers(&headers)
    }

    #[test]
    fn read_token_finds_cookie() {
        assert_eq!(read_token(&jar_with("theme=dark; auth_token=abc")), Some("abc".into()));
    }

    #[test]
    fn read_token_treats_empty_as_missing() {
        assert_eq!(read_token(&jar_with("auth_token=")), None);
        assert_eq!(read_token(&CookieJar::new()), None);
    }

    #[test]
    fn session_cookie_attributes() {
        let cookie = session_cookie(&AppConfig::default(), "abc".into());
        let rendered = cookie.to_string();
        assert!(rendered.starts_with("auth_token=abc"));
        assert!(rendered.contains("Path=/"));
        assert!(rendered.contains("HttpOnly"));
        assert!(rendered.contains("SameSite=Lax"));
        assert!(rendered.contains("Max-Age=604800"));
        assert!(!rendered.contains("Secure"));
    }

    #[test]
    fn session_cookie_is_secure_in_production() {
        let config = AppConfig { cookie_secure: true, ..AppConfig::default() };
        assert_eq!(session_cookie(&config, "abc".into()).secure(), Some(true));
    }

    #[test]
    fn expired_cookie_clears_value_on_root_path() {
        let cookie = expired_cookie(&AppConfig::default());
        assert_eq!(cookie.name(), COOKIE_NAME);
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
    }
}
