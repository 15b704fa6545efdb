//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page is gated by one of the extractors in `guard`; handlers only
//! ever see requests the gate already allowed. Pages answer with the JSON
//! data a template would render, actions answer with a redirect or an
//! `{ success: false, error }` body.

pub mod admin;
pub mod auth;
pub mod form;
pub mod guard;
pub mod pages;
pub mod token;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Paths with their own handler; a landing path equal to one of these is not re-routed.
const PAGE_PATHS: [&str; 3] = ["/", "/profile", "/survey"];

/// Full application router.
#[must_use]
pub fn app(state: AppState) -> Router {
    let landing = state.config.landing_path.clone();

    let mut router = Router::new()
        .route("/", get(pages::landing))
        .route("/sign-in", get(auth::sign_in_page).post(auth::sign_in))
        .route("/sign-up", get(auth::sign_up_page).post(auth::sign_up))
        .route("/logout", post(auth::logout))
        .route("/profile", get(pages::profile))
        .route("/survey", get(pages::survey_page).post(pages::submit_survey))
        .route("/admin", get(admin::overview))
        .route("/admin/", get(admin::overview))
        .route("/admin/{*section}", get(admin::section))
        .route("/healthz", get(healthz));

    if !PAGE_PATHS.contains(&landing.as_str()) {
        router = router.route(&landing, get(pages::landing));
    }

    router.layer(TraceLayer::new_for_http()).with_state(state)
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}

#[cfg(test)]
mod test_support;

#[cfg(test)]
#[path = "mod_test.rs"]
mod tests;
