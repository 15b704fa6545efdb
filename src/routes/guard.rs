//! Gate extractors: put one in a handler's signature to require a capability.
//!
//! Rejections are always redirects: 302 to `/sign-in`, to the landing page
//! or to `/`. When the Auth API refused the token, the sign-in redirect also
//! expires the cookie, otherwise the public pages would bounce the visitor
//! straight back to the gated page.

use axum::extract::FromRef;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Response};
use axum_extra::extract::cookie::CookieJar;

use super::token;
use crate::api::Profile;
use crate::config::AppConfig;
use crate::error::{PortalError, SIGN_IN_PATH, found};
use crate::services::gate::{self, AuthDecision, Capability};
use crate::state::AppState;

/// Visitor without a session (sign-in / sign-up).
pub struct GuestOnly;

/// Signed-in user whose token the Auth API just confirmed.
pub struct RequireUser {
    pub profile: Profile,
    pub token: String,
}

/// Signed-in admin whose token the Auth API just confirmed.
pub struct RequireAdmin {
    pub profile: Profile,
    pub token: String,
}

/// Redirect to sign-in, expiring the cookie when it is known to be dead.
#[must_use]
pub fn sign_in_redirect(config: &AppConfig, clear_token: bool) -> Response {
    if clear_token {
        let jar = CookieJar::new().add(token::expired_cookie(config));
        (jar, found(SIGN_IN_PATH)).into_response()
    } else {
        PortalError::AuthRequired.into_response()
    }
}

/// Map a decision onto either the allowed profile or the redirect to send.
///
/// # Errors
///
/// Every non-`Allow` decision becomes its redirect response.
pub fn resolve(decision: AuthDecision, config: &AppConfig) -> Result<Option<Profile>, Response> {
    match decision {
        AuthDecision::Allow(profile) => Ok(profile),
        AuthDecision::RedirectSignIn { clear_token } => Err(sign_in_redirect(config, clear_token)),
        AuthDecision::RedirectHome => Err(found(&config.landing_path)),
        AuthDecision::RedirectRoot => Err(PortalError::Forbidden.into_response()),
    }
}

async fn check(
    parts: &Parts,
    state: &AppState,
    capability: Capability,
) -> Result<(Option<String>, Option<Profile>), Response> {
    let jar = CookieJar::from_headers(&parts.headers);
    let token = token::read_token(&jar);
    let decision = gate::decide(state.api.as_ref(), token.as_deref(), capability).await;
    let profile = resolve(decision, &state.config)?;
    Ok((token, profile))
}

async fn check_signed_in(
    parts: &Parts,
    state: &AppState,
    capability: Capability,
) -> Result<(Profile, String), Response> {
    match check(parts, state, capability).await? {
        (Some(token), Some(profile)) => Ok((profile, token)),
        _ => Err(sign_in_redirect(&state.config, false)),
    }
}

impl<S> axum::extract::FromRequestParts<S> for GuestOnly
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        check(parts, &app_state, Capability::Public).await?;
        Ok(Self)
    }
}

impl<S> axum::extract::FromRequestParts<S> for RequireUser
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let (profile, token) = check_signed_in(parts, &app_state, Capability::Authenticated).await?;
        Ok(Self { profile, token })
    }
}

impl<S> axum::extract::FromRequestParts<S> for RequireAdmin
where
    AppState: FromRef<S>,
    S: Send + Sync,
{
    type Rejection = Response;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = AppState::from_ref(state);
        let (profile, token) = check_signed_in(parts, &app_state, Capability::Admin).await?;
        Ok(Self { profile, token })
    }
}
