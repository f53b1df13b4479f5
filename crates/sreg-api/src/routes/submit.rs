//! # Submission Route
//!
//! - POST /submit — Validate a registration and render the outcome
//! - any other method — 303 redirect to the form, nothing is processed
//!
//! Accepted registrations are not stored. The record is rendered back to
//! the user and dropped with the response.

use axum::extract::rejection::FormRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{Html, Redirect};
use axum::routing::post;
use axum::{Form, Router};
use sreg_core::validate_submission;

use crate::extractors::{extract_submission, FormPairs};
use crate::render;
use crate::render::form::SUBMIT_PATH;
use crate::routes::form::FORM_PATH;
use crate::state::AppState;

/// Build the submission router.
pub fn router() -> Router<AppState> {
    Router::new().route(SUBMIT_PATH, post(submit).fallback(redirect_to_form))
}

/// POST /submit — Re-validate every field and render the result page.
///
/// 200 with the confirmation page, or 422 with the ordered error list.
async fn submit(
    State(state): State<AppState>,
    body: Result<Form<FormPairs>, FormRejection>,
) -> (StatusCode, Html<String>) {
    let raw = extract_submission(body);
    match validate_submission(&raw) {
        Ok(record) => {
            state.metrics.record_accepted();
            tracing::info!(
                course = %record.course,
                gender = %record.gender,
                "registration accepted"
            );
            (StatusCode::OK, Html(render::confirmation_page(&record)))
        }
        Err(errors) => {
            state.metrics.record_rejected();
            tracing::info!(failed = ?errors.fields(), "registration rejected");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                Html(render::error_page(&errors)),
            )
        }
    }
}

/// Any non-POST method on /submit — send the browser back to the form.
async fn redirect_to_form() -> Redirect {
    Redirect::to(FORM_PATH)
}
