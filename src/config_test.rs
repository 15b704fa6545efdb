use std::collections::HashMap;

use super::*;

fn from_pairs(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
    let env: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
        .collect();
    AppConfig::from_lookup(|key| env.get(key).cloned())
}

// =============================================================================
// parse_bool
// =============================================================================

#[test]
fn parse_bool_true_variants() {
    for val in ["1", "true", "yes", "on", "TRUE", "On", "  yes  "] {
        assert_eq!(parse_bool(val), Some(true), "expected true for {val:?}");
    }
}

#[test]
fn parse_bool_false_variants() {
    for val in ["0", "false", "no", "off", "False"] {
        assert_eq!(parse_bool(val), Some(false), "expected false for {val:?}");
    }
}

#[test]
fn parse_bool_rejects_garbage() {
    assert_eq!(parse_bool("maybe"), None);
    assert_eq!(parse_bool(""), None);
}

// =============================================================================
// from_lookup
// =============================================================================

#[test]
fn empty_env_yields_defaults() {
    let cfg = from_pairs(&[]).unwrap();
    assert_eq!(cfg, AppConfig::default());
    assert_eq!(cfg.api_base_url, "http://localhost:8080/api");
    assert_eq!(cfg.landing_path, "/");
    assert!(!cfg.cookie_secure);
    assert_eq!(cfg.session_max_age_days, 7);
}

#[test]
fn overrides_are_parsed() {
    let cfg = from_pairs(&[
        ("PORT", "8081"),
        ("AUTH_API_BASE_URL", "https://api.example.test/api/"),
        ("LANDING_PATH", "/home"),
        ("SESSION_MAX_AGE_DAYS", "30"),
        ("AUTH_API_REQUEST_TIMEOUT_SECS", "42"),
        ("AUTH_API_CONNECT_TIMEOUT_SECS", " 3 "),
    ])
    .unwrap();

    assert_eq!(cfg.port, 8081);
    assert_eq!(cfg.api_base_url, "https://api.example.test/api");
    assert_eq!(cfg.landing_path, "/home");
    assert_eq!(cfg.session_max_age_days, 30);
    assert_eq!(cfg.timeouts, ApiTimeouts { request_secs: 42, connect_secs: 3 });
}

#[test]
fn production_marks_cookie_secure() {
    assert!(from_pairs(&[("APP_ENV", "production")]).unwrap().cookie_secure);
    assert!(from_pairs(&[("APP_ENV", "Production")]).unwrap().cookie_secure);
    assert!(!from_pairs(&[("APP_ENV", "development")]).unwrap().cookie_secure);
}

#[test]
fn cookie_secure_override_wins_over_app_env() {
    let cfg = from_pairs(&[("APP_ENV", "production"), ("COOKIE_SECURE", "false")]).unwrap();
    assert!(!cfg.cookie_secure);

    let cfg = from_pairs(&[("COOKIE_SECURE", "on")]).unwrap();
    assert!(cfg.cookie_secure);
}

#[test]
fn cookie_secure_garbage_is_rejected() {
    let err = from_pairs(&[("COOKIE_SECURE", "maybe")]).unwrap_err().to_string();
    assert!(err.contains("COOKIE_SECURE"));
}

#[test]
fn relative_landing_path_is_rejected() {
    let err = from_pairs(&[("LANDING_PATH", "home")]).unwrap_err().to_string();
    assert!(err.contains("LANDING_PATH"));
}

#[test]
fn bad_port_is_rejected() {
    let err = from_pairs(&[("PORT", "not-a-port")]).unwrap_err().to_string();
    assert!(err.contains("PORT"));
}

#[test]
fn non_positive_session_age_is_rejected() {
    assert!(from_pairs(&[("SESSION_MAX_AGE_DAYS", "0")]).is_err());
    assert!(from_pairs(&[("SESSION_MAX_AGE_DAYS", "-1")]).is_err());
}

#[test]
fn landing_path_cannot_shadow_auth_or_admin_routes() {
    for path in ["/sign-in", "/sign-up", "/logout", "/healthz", "/admin", "/admin/users", "/{id}", "/*all"] {
        assert!(from_pairs(&[("LANDING_PATH", path)]).is_err(), "{path} should be rejected");
    }
    assert!(from_pairs(&[("LANDING_PATH", "/home")]).is_ok());
    assert!(from_pairs(&[("LANDING_PATH", "/profile")]).is_ok());
}

#[test]
fn landing_path_must_be_visible_ascii() {
    for path in ["/home\u{7}", "/ho me", "/home\n", "/caf\u{e9}"] {
        assert!(from_pairs(&[("LANDING_PATH", path)]).is_err(), "{path:?} should be rejected");
    }
}
