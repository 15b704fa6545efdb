//! Auth routes: sign-in, sign-up and logout.

use axum::extract::State;
use axum::response::{IntoResponse, Json, Redirect, Response};
use axum_extra::extract::cookie::CookieJar;
use serde::Serialize;

use super::form::FormFields;
use super::guard::GuestOnly;
use super::token;
use crate::error::{PortalError, SIGN_IN_PATH};
use crate::services::nav::{Nav, nav_for};
use crate::services::session::{self, SignUp};
use crate::state::AppState;

/// Page data for the anonymous pages.
#[derive(Serialize)]
pub struct PublicPage {
    pub page: &'static str,
    pub nav: Nav,
}

/// `GET /sign-in`
pub async fn sign_in_page(_guest: GuestOnly) -> Json<PublicPage> {
    Json(PublicPage { page: "sign-in", nav: nav_for(None) })
}

/// `GET /sign-up`
pub async fn sign_up_page(_guest: GuestOnly) -> Json<PublicPage> {
    Json(PublicPage { page: "sign-up", nav: nav_for(None) })
}

/// `POST /sign-in`: exchange credentials for a token, set cookie, 303 to landing.
pub async fn sign_in(
    State(state): State<AppState>,
    _guest: GuestOnly,
    jar: CookieJar,
    form: FormFields,
) -> Result<Response, PortalError> {
    let token = session::login(state.api.as_ref(), form.value("email"), form.value("password")).await?;
    tracing::info!("user signed in");

    let jar = jar.add(token::session_cookie(&state.config, token));
    Ok((jar, Redirect::to(&state.config.landing_path)).into_response())
}

/// `POST /sign-up`: validate, register, set cookie, 303 to landing.
pub async fn sign_up(
    State(state): State<AppState>,
    _guest: GuestOnly,
    jar: CookieJar,
    form: FormFields,
) -> Result<Response, PortalError> {
    let sign_up = SignUp {
        email: form.value("email").to_string(),
        password: form.value("password").to_string(),
        confirm_password: form.value("confirmPassword").to_string(),
        name: form.value("name").to_string(),
    };
    let token = session::register(state.api.as_ref(), &sign_up).await?;
    tracing::info!("user registered");

    let jar = jar.add(token::session_cookie(&state.config, token));
    Ok((jar, Redirect::to(&state.config.landing_path)).into_response())
}

/// `POST /logout`: expire the cookie and 303 to sign-in, whatever the prior state.
pub async fn logout(State(state): State<AppState>, jar: CookieJar) -> impl IntoResponse {
    let jar = jar.add(token::expired_cookie(&state.config));
    (jar, Redirect::to(SIGN_IN_PATH))
}

#[cfg(test)]
#[path = "auth_test.rs"]
mod tests;
