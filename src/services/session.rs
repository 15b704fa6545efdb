//! Session actions: sign-in and sign-up against the Auth API.
//!
//! Both actions return the freshly issued bearer token; writing it into the
//! cookie is the route layer's job. Neither ever yields an empty token.

use crate::api::{AuthApi, Credentials, Registration};
use crate::error::PortalError;

pub const MIN_PASSWORD_LEN: usize = 8;

pub const MISSING_CREDENTIALS: &str = "Must provide an email and password";
pub const INVALID_CREDENTIALS: &str = "Invalid email or password";
pub const MISSING_FIELDS: &str = "All fields are required";
pub const PASSWORD_MISMATCH: &str = "Passwords do not match";
pub const PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters long";
pub const EMAIL_TAKEN: &str = "Email already exists";
pub const UNEXPECTED: &str = "An unexpected error occurred";

/// Sign-up form as posted by the browser.
#[derive(Debug, Clone, Default)]
pub struct SignUp {
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub name: String,
}

/// Exchange email + password for a bearer token.
///
/// # Errors
///
/// `Validation` when a field is missing, `Api { 400 }` when the Auth API
/// refuses the credentials, `NetworkFailure` for anything else.
pub async fn login(api: &dyn AuthApi, email: &str, password: &str) -> Result<String, PortalError> {
    if email.trim().is_empty() || password.is_empty() {
        return Err(PortalError::Validation(MISSING_CREDENTIALS.into()));
    }

    let credentials = Credentials { email: email.trim().to_string(), password: password.to_string() };
    match api.login(&credentials).await {
        Ok(grant) if !grant.token.is_empty() => Ok(grant.token),
        Ok(_) => {
            tracing::error!("login succeeded without a token");
            Err(PortalError::NetworkFailure(UNEXPECTED.into()))
        }
        Err(e) if e.is_client_error() => {
            tracing::info!(error = %e, "login refused");
            Err(PortalError::Api { status: 400, message: INVALID_CREDENTIALS.into() })
        }
        Err(e) => {
            tracing::error!(error = %e, "login failed");
            Err(PortalError::NetworkFailure(UNEXPECTED.into()))
        }
    }
}

/// Local sign-up checks, in order. No network call is made.
///
/// # Errors
///
/// `Validation` naming the first failed check.
pub fn validate_sign_up(form: &SignUp) -> Result<Registration, PortalError> {
    if form.email.trim().is_empty()
        || form.name.trim().is_empty()
        || form.password.is_empty()
        || form.confirm_password.is_empty()
    {
        return Err(PortalError::Validation(MISSING_FIELDS.into()));
    }
    if form.password != form.confirm_password {
        return Err(PortalError::Validation(PASSWORD_MISMATCH.into()));
    }
    if form.password.chars().count() < MIN_PASSWORD_LEN {
        return Err(PortalError::Validation(PASSWORD_TOO_SHORT.into()));
    }

    Ok(Registration {
        email: form.email.trim().to_string(),
        password: form.password.clone(),
        name: form.name.trim().to_string(),
    })
}

/// Validate locally, then create the account and return its bearer token.
///
/// # Errors
///
/// `Validation` for local checks, `Api { 400 }` carrying the Auth API's
/// message for 4xx answers, `Api { 500 }` with a generic message otherwise.
pub async fn register(api: &dyn AuthApi, form: &SignUp) -> Result<String, PortalError> {
    let registration = validate_sign_up(form)?;

    match api.register(&registration).await {
        Ok(grant) if !grant.token.is_empty() => Ok(grant.token),
        Ok(_) => {
            tracing::error!("registration succeeded without a token");
            Err(PortalError::Api { status: 500, message: UNEXPECTED.into() })
        }
        Err(e) if e.is_client_error() => {
            tracing::info!(error = %e, "registration refused");
            let message = match e {
                crate::api::ApiError::Status { message, .. } if !message.is_empty() => message,
                _ => EMAIL_TAKEN.into(),
            };
            Err(PortalError::Api { status: 400, message })
        }
        Err(e) => {
            tracing::error!(error = %e, "registration failed");
            Err(PortalError::Api { status: 500, message: UNEXPECTED.into() })
        }
    }
}

#[cfg(test)]
#[path = "session_test.rs"]
mod tests;
