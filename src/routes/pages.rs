//! Page routes for signed-in users: landing, profile and survey.

use axum::extract::State;
use axum::response::{IntoResponse, Json, Response};
use serde::Serialize;

use super::form::FormFields;
use super::guard::{RequireUser, sign_in_redirect};
use crate::api::{Profile, Question};
use crate::error::PortalError;
use crate::services::nav::{Nav, nav_for};
use crate::services::survey;
use crate::state::AppState;

#[derive(Serialize)]
pub struct UserPage {
    pub profile: Profile,
    pub nav: Nav,
}

impl UserPage {
    fn new(profile: Profile) -> Self {
        let nav = nav_for(Some(&profile));
        Self { profile, nav }
    }
}

#[derive(Serialize)]
pub struct SurveyPage {
    #[serde(flatten)]
    pub page: UserPage,
    pub questions: Vec<Question>,
}

#[derive(Serialize)]
pub struct SubmitSuccess {
    pub success: bool,
    pub submission_id: String,
}

/// `GET /` (and the configured landing path).
pub async fn landing(user: RequireUser) -> Json<UserPage> {
    Json(UserPage::new(user.profile))
}

/// `GET /profile`
pub async fn profile(user: RequireUser) -> Json<UserPage> {
    Json(UserPage::new(user.profile))
}

/// `GET /survey`: questionnaire for the signed-in user.
pub async fn survey_page(State(state): State<AppState>, user: RequireUser) -> Response {
    match survey::load_questions(state.api.as_ref(), &user.token).await {
        Ok(questions) => Json(SurveyPage { page: UserPage::new(user.profile), questions }).into_response(),
        Err(PortalError::AuthRequired) => sign_in_redirect(&state.config, true),
        Err(e) => e.into_response(),
    }
}

/// `POST /survey`: submit `question_<id>` fields; failures come back as `{ success: false, error }`.
pub async fn submit_survey(State(state): State<AppState>, user: RequireUser, form: FormFields) -> Response {
    let answers = survey::collect_answers(form.into_pairs());
    match survey::submit(state.api.as_ref(), &user.token, &answers).await {
        Ok(receipt) => {
            tracing::info!(submission = %receipt.id, answers = answers.len(), "questionnaire submitted");
            Json(SubmitSuccess { success: true, submission_id: receipt.id }).into_response()
        }
        Err(e) => e.into_response(),
    }
}

#[cfg(test)]
#[path = "pages_test.rs"]
mod tests;
