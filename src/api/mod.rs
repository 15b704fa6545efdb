//! Auth API: the remote service that issues and validates bearer tokens.
//!
//! DESIGN
//! ======
//! Route handlers never talk HTTP to the Auth API directly. They go through
//! the `AuthApi` trait so the gate and session actions can be exercised
//! against a recording mock, while production wires in `ApiClient`.

pub mod client;
pub mod types;

pub use client::ApiClient;
pub use types::{
    Answer, ApiError, Credentials, Profile, Question, Registration, Submission, SubmissionReceipt, TokenGrant,
    UserSummary,
};

/// Operations the portal needs from the Auth API.
#[async_trait::async_trait]
pub trait AuthApi: Send + Sync {
    /// `POST /login`.
    async fn login(&self, credentials: &Credentials) -> Result<TokenGrant, ApiError>;

    /// `POST /register`.
    async fn register(&self, registration: &Registration) -> Result<TokenGrant, ApiError>;

    /// `GET /profile` with the bearer token. Doubles as token validation.
    async fn profile(&self, token: &str) -> Result<Profile, ApiError>;

    /// `GET /questions` with the bearer token.
    async fn questions(&self, token: &str) -> Result<Vec<Question>, ApiError>;

    /// `POST /submit` with the bearer token.
    async fn submit(&self, token: &str, answers: &[Answer]) -> Result<SubmissionReceipt, ApiError>;

    /// `GET /admin/users` with an admin bearer token.
    async fn users(&self, token: &str) -> Result<Vec<UserSummary>, ApiError>;

    /// `GET /admin/submissions/all` with an admin bearer token.
    async fn submissions(&self, token: &str) -> Result<Vec<Submission>, ApiError>;
}
