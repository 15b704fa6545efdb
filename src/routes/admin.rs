//! Admin routes: everything under `/admin` requires an admin profile.

use axum::extract::{Path, State};
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use super::guard::{RequireAdmin, sign_in_redirect};
use crate::api::{ApiError, Profile, Submission, UserSummary};
use crate::config::AppConfig;
use crate::error::PortalError;
use crate::services::nav::{Nav, nav_for};
use crate::state::AppState;

#[derive(Serialize)]
pub struct AdminPage {
    pub user: Profile,
    pub nav: Nav,
    pub section: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub users: Option<Vec<UserSummary>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub submissions: Option<Vec<Submission>>,
}

impl AdminPage {
    fn new(user: Profile, section: Option<String>) -> Self {
        let nav = nav_for(Some(&user));
        Self { user, nav, section, users: None, submissions: None }
    }
}

/// A refused token or revoked admin right redirects like the gate does;
/// any other failure is a 502 JSON error.
fn listing_failed(config: &AppConfig, what: &'static str, err: &ApiError) -> Response {
    tracing::error!(error = %err, listing = what, "admin listing failed");
    let message = format!("Failed to load {what}");
    match err.status() {
        Some(401) => sign_in_redirect(config, true),
        Some(403) => PortalError::Forbidden.into_response(),
        Some(_) => PortalError::Api { status: 502, message }.into_response(),
        None => PortalError::NetworkFailure(message).into_response(),
    }
}

/// `GET /admin`
pub async fn overview(admin: RequireAdmin) -> Json<AdminPage> {
    Json(AdminPage::new(admin.profile, None))
}

/// `GET /admin/{*section}`: `users` and `submissions` carry their listings.
pub async fn section(
    State(state): State<AppState>,
    admin: RequireAdmin,
    Path(section): Path<String>,
) -> Result<Json<AdminPage>, Response> {
    let mut page = AdminPage::new(admin.profile, Some(section.clone()));

    match section.trim_end_matches('/') {
        "users" => {
            let users = state
                .api
                .users(&admin.token)
                .await
                .map_err(|e| listing_failed(&state.config, "users", &e))?;
            page.users = Some(users);
        }
        "submissions" => {
            let submissions = state
                .api
                .submissions(&admin.token)
                .await
                .map_err(|e| listing_failed(&state.config, "submissions", &e))?;
            page.submissions = Some(submissions);
        }
        _ => {}
    }

    Ok(Json(page))
}

#[cfg(test)]
#[path = "admin_test.rs"]
mod tests;
