//! Auth gate: per-request access decision from the session token.
//!
//! DESIGN
//! ======
//! `decide` is the only place that turns "what cookie did we get" into
//! "may this request proceed". Protected capabilities re-validate the token
//! against the Auth API on every request and fail closed: any error that is
//! not a clean profile answer sends the visitor to sign-in.

use crate::api::{AuthApi, Profile};

/// What a route requires of the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Capability {
    /// Sign-in / sign-up: only for visitors without a session.
    Public,
    /// Any signed-in user.
    Authenticated,
    /// Signed-in user whose profile reports `is_admin`.
    Admin,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthDecision {
    /// Proceed. Protected capabilities carry the freshly fetched profile.
    Allow(Option<Profile>),
    /// Send to `/sign-in`. `clear_token` is set when the Auth API refused the
    /// token outright, so the caller can expire the dead cookie.
    RedirectSignIn { clear_token: bool },
    /// Already signed in; send to the landing page.
    RedirectHome,
    /// Signed in but not an admin; send to `/`.
    RedirectRoot,
}

/// Return the token only if it is present and non-empty.
#[must_use]
pub fn present(token: Option<&str>) -> Option<&str> {
    token.filter(|t| !t.is_empty())
}

/// Decide whether a request holding `token` may access a `capability` route.
pub async fn decide(api: &dyn AuthApi, token: Option<&str>, capability: Capability) -> AuthDecision {
    let token = present(token);

    if capability == Capability::Public {
        return if token.is_some() { AuthDecision::RedirectHome } else { AuthDecision::Allow(None) };
    }

    let Some(token) = token else {
        return AuthDecision::RedirectSignIn { clear_token: false };
    };

    let profile = match api.profile(token).await {
        Ok(profile) => profile,
        Err(e) => {
            let clear_token = e.is_token_rejected();
            tracing::warn!(error = %e, ?capability, clear_token, "session validation failed");
            return AuthDecision::RedirectSignIn { clear_token };
        }
    };

    if capability == Capability::Admin && !profile.is_admin {
        tracing::info!(user = %profile.name, "non-admin denied admin route");
        return AuthDecision::RedirectRoot;
    }

    AuthDecision::Allow(Some(profile))
}

#[cfg(test)]
#[path = "gate_test.rs"]
mod tests;
