//! # Form Routes
//!
//! - GET /              — Registration form
//! - GET /index.html    — Registration form
//! - GET /assets/validate.js — Client rule interpreter

use axum::http::header;
use axum::response::{Html, IntoResponse};
use axum::routing::get;
use axum::Router;

use crate::error::AppError;
use crate::render;
use crate::render::form::SCRIPT_PATH;
use crate::state::AppState;

/// Browser interpreter for the client rule manifest.
const VALIDATOR_SCRIPT: &str = include_str!("../../assets/validate.js");

/// Path of the form page; non-POST submissions are redirected here.
pub const FORM_PATH: &str = "/index.html";

/// Build the form router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(form_page))
        .route(FORM_PATH, get(form_page))
        .route(SCRIPT_PATH, get(validator_script))
}

/// GET / — Render the registration form.
async fn form_page() -> Result<Html<String>, AppError> {
    let manifest = sreg_core::client_manifest_json()?;
    Ok(Html(render::form_page(&manifest)))
}

/// GET /assets/validate.js — Serve the client rule interpreter.
async fn validator_script() -> impl IntoResponse {
    (
        [(header::CONTENT_TYPE, "text/javascript; charset=utf-8")],
        VALIDATOR_SCRIPT,
    )
}
