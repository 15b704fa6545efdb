//! Survey: questionnaire load and submit on behalf of the signed-in user.

use crate::api::{Answer, AuthApi, Question, SubmissionReceipt};
use crate::error::PortalError;

/// Form fields carrying answers are named `question_<id>`.
pub const QUESTION_PREFIX: &str = "question_";

pub const LOAD_FAILED: &str = "Failed to load questionnaire";
pub const SUBMIT_FAILED: &str = "Failed to submit questionnaire";

/// Turn posted form fields into answers, keeping submission order.
/// Fields without the prefix, or with nothing after it, are ignored.
#[must_use]
pub fn collect_answers<I, K, V>(fields: I) -> Vec<Answer>
where
    I: IntoIterator<Item = (K, V)>,
    K: AsRef<str>,
    V: Into<String>,
{
    fields
        .into_iter()
        .filter_map(|(key, value)| {
            let id = key.as_ref().strip_prefix(QUESTION_PREFIX)?;
            if id.is_empty() {
                return None;
            }
            Some(Answer { id: id.to_string(), value: value.into() })
        })
        .collect()
}

/// Fetch the questionnaire.
///
/// # Errors
///
/// `AuthRequired` when the Auth API refuses the token, otherwise a generic
/// `Api { 500 }`.
pub async fn load_questions(api: &dyn AuthApi, token: &str) -> Result<Vec<Question>, PortalError> {
    api.questions(token).await.map_err(|e| {
        if e.is_token_rejected() {
            tracing::warn!(error = %e, "questionnaire token refused");
            return PortalError::AuthRequired;
        }
        tracing::error!(error = %e, "error fetching questions");
        PortalError::Api { status: 500, message: LOAD_FAILED.into() }
    })
}

/// Post `answers` for the token's owner.
///
/// # Errors
///
/// Never `AuthRequired`: a submit failure is always reported back to the
/// form. API refusals keep their status and message; transport failures
/// become `NetworkFailure`.
pub async fn submit(api: &dyn AuthApi, token: &str, answers: &[Answer]) -> Result<SubmissionReceipt, PortalError> {
    api.submit(token, answers).await.map_err(|e| {
        tracing::error!(error = %e, answers = answers.len(), "error submitting questionnaire");
        match e {
            crate::api::ApiError::Status { status, message } => {
                let message = if message.is_empty() { SUBMIT_FAILED.to_string() } else { message };
                PortalError::Api { status, message }
            }
            _ => PortalError::NetworkFailure(SUBMIT_FAILED.into()),
        }
    })
}

#[cfg(test)]
#[path = "survey_test.rs"]
mod tests;
