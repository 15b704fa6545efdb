//! Auth API wire types and errors.
//!
//! Every Auth API response is wrapped in a `{ "success": bool, "data": ... }`
//! envelope. Error responses carry a human-readable message in `data`.

use serde::{Deserialize, Serialize};

// =============================================================================
// ERROR
// =============================================================================

/// Errors produced by Auth API client operations.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// The request never produced a response (connect failure, timeout, reset).
    #[error("auth api request failed: {0}")]
    Request(String),

    /// The Auth API returned a non-success HTTP status.
    #[error("auth api returned status {status}: {message}")]
    Status { status: u16, message: String },

    /// The response body could not be deserialized.
    #[error("auth api response parse failed: {0}")]
    Parse(String),

    /// The underlying HTTP client could not be constructed.
    #[error("HTTP client build failed: {0}")]
    HttpClientBuild(String),
}

impl ApiError {
    /// HTTP status reported by the Auth API, if it answered at all.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// `true` when the Auth API explicitly refused the bearer token.
    #[must_use]
    pub fn is_token_rejected(&self) -> bool {
        matches!(self, Self::Status { status: 401 | 403, .. })
    }

    /// `true` for 4xx answers, i.e. the request itself was refused.
    #[must_use]
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Status { status: 400..=499, .. })
    }
}

// =============================================================================
// ENVELOPE
// =============================================================================

#[derive(Debug, Deserialize)]
pub(crate) struct Envelope<T> {
    pub data: T,
}

// =============================================================================
// REQUESTS
// =============================================================================

#[derive(Debug, Clone, Serialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct Registration {
    pub email: String,
    pub password: String,
    pub name: String,
}

/// One survey answer as posted to `/submit`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub id: String,
    pub value: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct SubmitRequest<'a> {
    pub answers: &'a [Answer],
}

// =============================================================================
// RESPONSES
// =============================================================================

/// Bearer token issued by `/login` and `/register`.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenGrant {
    #[serde(default)]
    pub token: String,
}

/// The signed-in user's profile as reported by `/profile`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub is_admin: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub id: String,
    pub question: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub min: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max: Option<i64>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QuestionsPayload {
    #[serde(default)]
    pub questions: Option<Vec<Question>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReceipt {
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

/// A user row from the admin listing. Credential fields are never deserialized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserSummary {
    pub id: String,
    pub email: String,
    pub name: String,
    #[serde(default)]
    pub picture: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct UsersPayload {
    #[serde(default)]
    pub users: Option<Vec<UserSummary>>,
}

/// A stored questionnaire submission. Answers are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    pub user_id: String,
    #[serde(default)]
    pub answers: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SubmissionsPayload {
    #[serde(default)]
    pub submissions: Option<Vec<Submission>>,
}
