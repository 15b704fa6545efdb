//! reqwest-backed Auth API client.
//!
//! Thin HTTP wrapper over the Auth API's JSON endpoints. Envelope unwrapping
//! and error-message extraction are pure functions for testability.

use std::time::Duration;

use serde::de::DeserializeOwned;

use super::AuthApi;
use super::types::{
    Answer, ApiError, Credentials, Envelope, Profile, Question, QuestionsPayload, Registration, Submission,
    SubmissionReceipt, SubmissionsPayload, SubmitRequest, TokenGrant, UserSummary, UsersPayload,
};
use crate::config::ApiTimeouts;

// =============================================================================
// CLIENT
// =============================================================================

pub struct ApiClient {
    http: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Build a client rooted at `base_url` (e.g. `http://localhost:8080/api`).
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(base_url: impl Into<String>, timeouts: ApiTimeouts) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(timeouts.request_secs))
            .connect_timeout(Duration::from_secs(timeouts.connect_secs))
            .build()
            .map_err(|e| ApiError::HttpClientBuild(e.to_string()))?;
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Ok(Self { http, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    fn get_with_token(&self, endpoint: &str, token: &str) -> reqwest::RequestBuilder {
        self.http
            .get(self.url(endpoint))
            .header("Authorization", format!("Bearer {token}"))
    }

    async fn send<T: DeserializeOwned>(&self, request: reqwest::RequestBuilder) -> Result<T, ApiError> {
        let response = request
            .send()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        let status = response.status();
        let text = response
            .text()
            .await
            .map_err(|e| ApiError::Request(e.to_string()))?;

        if !status.is_success() {
            return Err(ApiError::Status { status: status.as_u16(), message: error_message(&text) });
        }

        parse_data(&text)
    }
}

#[async_trait::async_trait]
impl AuthApi for ApiClient {
    async fn login(&self, credentials: &Credentials) -> Result<TokenGrant, ApiError> {
        self.send(self.http.post(self.url("/login")).json(credentials))
            .await
    }

    async fn register(&self, registration: &Registration) -> Result<TokenGrant, ApiError> {
        self.send(self.http.post(self.url("/register")).json(registration))
            .await
    }

    async fn profile(&self, token: &str) -> Result<Profile, ApiError> {
        self.send(self.get_with_token("/profile", token)).await
    }

    async fn questions(&self, token: &str) -> Result<Vec<Question>, ApiError> {
        let payload: QuestionsPayload = self.send(self.get_with_token("/questions", token)).await?;
        Ok(payload.questions.unwrap_or_default())
    }

    async fn submit(&self, token: &str, answers: &[Answer]) -> Result<SubmissionReceipt, ApiError> {
        let request = self
            .http
            .post(self.url("/submit"))
            .header("Authorization", format!("Bearer {token}"))
            .json(&SubmitRequest { answers });
        self.send(request).await
    }

    async fn users(&self, token: &str) -> Result<Vec<UserSummary>, ApiError> {
        let payload: UsersPayload = self.send(self.get_with_token("/admin/users", token)).await?;
        Ok(payload.users.unwrap_or_default())
    }

    async fn submissions(&self, token: &str) -> Result<Vec<Submission>, ApiError> {
        let payload: SubmissionsPayload = self
            .send(self.get_with_token("/admin/submissions/all", token))
            .await?;
        Ok(payload.submissions.unwrap_or_default())
    }
}

// =============================================================================
// PARSING
// =============================================================================

/// Unwrap the `data` member of a success envelope.
pub(crate) fn parse_data<T: DeserializeOwned>(body: &str) -> Result<T, ApiError> {
    let envelope: Envelope<T> = serde_json::from_str(body).map_err(|e| ApiError::Parse(e.to_string()))?;
    Ok(envelope.data)
}

/// Best-effort message from an error body: `data` when it is a string,
/// then `message`, then the raw (trimmed) body.
pub(crate) fn error_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["data", "message", "error"] {
            if let Some(msg) = value.get(key).and_then(serde_json::Value::as_str) {
                return msg.to_string();
            }
        }
    }
    body.trim().to_string()
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
