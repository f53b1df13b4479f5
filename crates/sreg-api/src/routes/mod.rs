//! # Route Modules
//!
//! - `form` — the registration form page and the browser rule interpreter.
//! - `submit` — authoritative submission processing; any method other
//!   than POST is redirected to the form without validation.

pub mod form;
pub mod submit;

use axum::Router;

use crate::state::AppState;

/// All registration routes.
pub fn router() -> Router<AppState> {
    Router::new().merge(form::router()).merge(submit::router())
}
