//! Portal configuration parsed from environment variables.

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8080/api";
pub const DEFAULT_LANDING_PATH: &str = "/";
pub const DEFAULT_SESSION_MAX_AGE_DAYS: i64 = 7;
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An environment variable held a value that could not be parsed.
    #[error("invalid {key}: {value:?}")]
    Invalid { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApiTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub port: u16,
    /// Auth API base, without a trailing slash (e.g. `http://localhost:8080/api`).
    pub api_base_url: String,
    /// Where authenticated visitors land after sign-in and when they hit a public page.
    pub landing_path: String,
    pub cookie_secure: bool,
    pub session_max_age_days: i64,
    pub timeouts: ApiTimeouts,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            landing_path: DEFAULT_LANDING_PATH.to_string(),
            cookie_secure: false,
            session_max_age_days: DEFAULT_SESSION_MAX_AGE_DAYS,
            timeouts: ApiTimeouts {
                request_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
                connect_secs: DEFAULT_CONNECT_TIMEOUT_SECS,
            },
        }
    }
}

impl AppConfig {
    /// Build typed config from environment variables.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `AUTH_API_BASE_URL`: default `http://localhost:8080/api`
    /// - `LANDING_PATH`: default `/`, an absolute path outside the auth and admin routes
    /// - `APP_ENV`: `production` marks the session cookie `Secure`
    /// - `COOKIE_SECURE`: explicit override of the `Secure` attribute
    /// - `SESSION_MAX_AGE_DAYS`: default 7
    /// - `AUTH_API_REQUEST_TIMEOUT_SECS`: default 10
    /// - `AUTH_API_CONNECT_TIMEOUT_SECS`: default 5
    ///
    /// # Errors
    ///
    /// Returns an error if any variable is set to an unparsable value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary key lookup (the process env in production).
    ///
    /// # Errors
    ///
    /// Returns an error if any key resolves to an unparsable value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = parse_or(&lookup, "PORT", DEFAULT_PORT)?;
        let api_base_url = lookup("AUTH_API_BASE_URL")
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
            .trim_end_matches('/')
            .to_string();

        let landing_path = lookup("LANDING_PATH").unwrap_or_else(|| DEFAULT_LANDING_PATH.to_string());
        if !is_valid_landing(&landing_path) {
            return Err(ConfigError::Invalid { key: "LANDING_PATH", value: landing_path });
        }

        let production = lookup("APP_ENV").is_some_and(|env| env.trim().eq_ignore_ascii_case("production"));
        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { key: "COOKIE_SECURE", value: raw })?,
            None => production,
        };

        let session_max_age_days = parse_or(&lookup, "SESSION_MAX_AGE_DAYS", DEFAULT_SESSION_MAX_AGE_DAYS)?;
        if session_max_age_days <= 0 {
            return Err(ConfigError::Invalid { key: "SESSION_MAX_AGE_DAYS", value: session_max_age_days.to_string() });
        }

        let timeouts = ApiTimeouts {
            request_secs: parse_or(&lookup, "AUTH_API_REQUEST_TIMEOUT_SECS", DEFAULT_REQUEST_TIMEOUT_SECS)?,
            connect_secs: parse_or(&lookup, "AUTH_API_CONNECT_TIMEOUT_SECS", DEFAULT_CONNECT_TIMEOUT_SECS)?,
        };

        Ok(Self { port, api_base_url, landing_path, cookie_secure, session_max_age_days, timeouts })
    }
}

/// Paths the landing page may never take over.
const RESERVED_PATHS: [&str; 5] = ["/sign-in", "/sign-up", "/logout", "/healthz", "/admin"];

/// Absolute, visible ASCII only, not a route parameter, and not shadowing an auth or admin route.
fn is_valid_landing(path: &str) -> bool {
    path.starts_with('/')
        && path.bytes().all(|b| b.is_ascii_graphic())
        && !path.contains(['{', '}', '*', '?', '#'])
        && !RESERVED_PATHS.contains(&path)
        && !path.starts_with("/admin/")
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().map_err(|_| ConfigError::Invalid { key, value: raw }),
        None => Ok(default),
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
