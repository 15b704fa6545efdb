//! Portal error taxonomy and its mapping onto HTTP responses.
//!
//! ARCHITECTURE
//! ============
//! Page loads resolve `AuthRequired`/`Forbidden` to redirects, never to an
//! error body. User-facing actions (sign-in, sign-up, survey submit) turn
//! every other variant into a displayable `{ success: false, error }` body.

use axum::http::StatusCode;
use axum::http::header::LOCATION;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use crate::api::ApiError;

pub const SIGN_IN_PATH: &str = "/sign-in";
pub const ROOT_PATH: &str = "/";

#[derive(Debug, thiserror::Error)]
pub enum PortalError {
    /// The Auth API could not be reached or answered with garbage.
    #[error("{0}")]
    NetworkFailure(String),

    /// The Auth API answered with a non-success status.
    #[error("{message}")]
    Api { status: u16, message: String },

    /// Local form checks failed before any network call.
    #[error("{0}")]
    Validation(String),

    /// No usable session token on a gated route.
    #[error("authentication required")]
    AuthRequired,

    /// Authenticated, but lacking the required role.
    #[error("forbidden")]
    Forbidden,
}

impl PortalError {
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NetworkFailure(_) => "E_NETWORK",
            Self::Api { .. } => "E_API",
            Self::Validation(_) => "E_VALIDATION",
            Self::AuthRequired => "E_AUTH_REQUIRED",
            Self::Forbidden => "E_FORBIDDEN",
        }
    }

    #[must_use]
    pub fn status(&self) -> StatusCode {
        match self {
            Self::NetworkFailure(_) => StatusCode::BAD_GATEWAY,
            Self::Api { status, .. } => StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY),
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::AuthRequired => StatusCode::UNAUTHORIZED,
            Self::Forbidden => StatusCode::FORBIDDEN,
        }
    }
}

impl From<ApiError> for PortalError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Status { status, message } => Self::Api { status, message },
            ApiError::Request(_) | ApiError::Parse(_) | ApiError::HttpClientBuild(_) => {
                Self::NetworkFailure(err.to_string())
            }
        }
    }
}

/// Body returned by form actions.
#[derive(Debug, Serialize)]
pub struct ActionFailure {
    pub success: bool,
    pub error: String,
    pub code: &'static str,
}

impl IntoResponse for PortalError {
    fn into_response(self) -> Response {
        match self {
            Self::AuthRequired => found(SIGN_IN_PATH),
            Self::Forbidden => found(ROOT_PATH),
            other => {
                let body = ActionFailure { success: false, error: other.to_string(), code: other.error_code() };
                (other.status(), Json(body)).into_response()
            }
        }
    }
}

/// `302 Found`: used for every gating redirect.
#[must_use]
pub fn found(location: &str) -> Response {
    (StatusCode::FOUND, [(LOCATION, location.to_string())]).into_response()
}

#[cfg(test)]
#[path = "error_test.rs"]
mod tests;
