//! # sreg-api — Axum Service for Student Registration
//!
//! Serves the registration form and is the authoritative validator for
//! its submissions. Browser-side checks are advisory; every POST is
//! sanitized and re-validated with the shared rule table from `sreg-core`
//! and answered with one of two complete HTML documents.
//!
//! ## Surface
//!
//! | Path                  | Method | Module              | Purpose |
//! |-----------------------|--------|---------------------|---------|
//! | `/`, `/index.html`    | GET    | [`routes::form`]    | Registration form |
//! | `/assets/validate.js` | GET    | [`routes::form`]    | Client rule interpreter |
//! | `/submit`             | POST   | [`routes::submit`]  | Validate, render confirmation or errors |
//! | `/submit`             | other  | [`routes::submit`]  | Redirect to the form |
//! | `/health/*`           | GET    | this module         | Liveness / readiness |
//! | `/metrics`            | GET    | this module         | Prometheus request and outcome metrics |
//!
//! ## Middleware Stack (execution order)
//!
//! ```text
//! TraceLayer → MetricsMiddleware → BodyLimit → Handler
//! ```

pub mod error;
pub mod extractors;
pub mod middleware;
pub mod render;
pub mod routes;
pub mod state;

use axum::extract::{DefaultBodyLimit, State};
use axum::http::{header, Uri};
use axum::middleware::from_fn;
use axum::response::IntoResponse;
use axum::routing::get;
use axum::Router;

use crate::error::AppError;
use crate::state::AppState;

/// Assemble the full application router with all routes and middleware.
pub fn app(state: AppState) -> Router {
    let pages = routes::router()
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(state.config.max_body_bytes));

    Router::new()
        .route("/health/liveness", get(liveness))
        .route("/health/readiness", get(readiness))
        .route("/metrics", get(metrics))
        .merge(pages)
        .layer(from_fn(middleware::metrics::metrics_middleware))
        .layer(middleware::tracing_layer::layer())
        .layer(axum::Extension(state.metrics.clone()))
        .with_state(state)
}

/// Liveness probe — always returns 200 if the process is running.
async fn liveness() -> &'static str {
    "ok"
}

/// Readiness probe. No backing services, so ready once serving.
async fn readiness() -> &'static str {
    "ready"
}

/// GET /metrics — Prometheus text exposition of request and submission
/// counters.
async fn metrics(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let body = state.metrics.gather_and_encode().map_err(AppError::Internal)?;
    Ok((
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4; charset=utf-8")],
        body,
    ))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}
