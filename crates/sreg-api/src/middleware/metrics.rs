//! # Prometheus Metrics
//!
//! Request counters and latency recorded by middleware, plus the outcome
//! of every submission, held in a `prometheus` registry and encoded in
//! the text exposition format at `/metrics`.
//!
//! The `path` label is the matched route template. Requests that match no
//! route share the `unmatched` label, so arbitrary URLs cannot grow the
//! label set.

use std::sync::Arc;
use std::time::Instant;

use axum::extract::{MatchedPath, Request};
use axum::middleware::Next;
use axum::response::Response;
use prometheus::core::Collector;
use prometheus::{Encoder, HistogramOpts, HistogramVec, IntCounterVec, Opts, Registry, TextEncoder};

/// Path label for requests that matched no route.
const UNMATCHED_PATH: &str = "unmatched";

/// Submission outcome label values.
const ACCEPTED: &str = "accepted";
const REJECTED: &str = "rejected";

/// Shared metrics state backed by a Prometheus registry.
#[derive(Clone)]
pub struct ApiMetrics {
    inner: Arc<Inner>,
}

struct Inner {
    registry: Registry,
    http_requests_total: IntCounterVec,
    http_request_duration_seconds: HistogramVec,
    http_errors_total: IntCounterVec,
    submissions_total: IntCounterVec,
}

impl std::fmt::Debug for ApiMetrics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiMetrics")
            .field("requests", &self.requests())
            .field("errors", &self.errors())
            .field("accepted", &self.accepted())
            .field("rejected", &self.rejected())
            .finish()
    }
}

impl ApiMetrics {
    /// Create a new metrics instance with a fresh Prometheus registry.
    pub fn new() -> Self {
        let registry = Registry::new();

        let http_requests_total = IntCounterVec::new(
            Opts::new("sreg_http_requests_total", "Total HTTP requests"),
            &["method", "path", "status"],
        )
        .expect("metric can be created");

        let http_request_duration_seconds = HistogramVec::new(
            HistogramOpts::new(
                "sreg_http_request_duration_seconds",
                "HTTP request duration in seconds",
            )
            .buckets(vec![0.001, 0.005, 0.01, 0.025, 0.05, 0.1, 0.25, 0.5, 1.0]),
            &["method", "path"],
        )
        .expect("metric can be created");

        let http_errors_total = IntCounterVec::new(
            Opts::new("sreg_http_errors_total", "Total HTTP errors (4xx and 5xx)"),
            &["method", "path", "status"],
        )
        .expect("metric can be created");

        let submissions_total = IntCounterVec::new(
            Opts::new("sreg_submissions_total", "Registration submissions by outcome"),
            &["outcome"],
        )
        .expect("metric can be created");

        for collector in [
            Box::new(http_requests_total.clone()) as Box<dyn Collector>,
            Box::new(http_request_duration_seconds.clone()) as Box<dyn Collector>,
            Box::new(http_errors_total.clone()) as Box<dyn Collector>,
            Box::new(submissions_total.clone()) as Box<dyn Collector>,
        ] {
            registry
                .register(collector)
                .expect("metric can be registered");
        }

        // Both outcomes are exported from the first scrape.
        submissions_total.with_label_values(&[ACCEPTED]);
        submissions_total.with_label_values(&[REJECTED]);

        Self {
            inner: Arc::new(Inner {
                registry,
                http_requests_total,
                http_request_duration_seconds,
                http_errors_total,
                submissions_total,
            }),
        }
    }

    /// Total request count across all labels.
    pub fn requests(&self) -> u64 {
        sum(&self.inner.http_requests_total)
    }

    /// Total 4xx/5xx response count across all labels.
    pub fn errors(&self) -> u64 {
        sum(&self.inner.http_errors_total)
    }

    pub fn accepted(&self) -> u64 {
        self.inner.submissions_total.with_label_values(&[ACCEPTED]).get()
    }

    pub fn rejected(&self) -> u64 {
        self.inner.submissions_total.with_label_values(&[REJECTED]).get()
    }

    pub fn record_accepted(&self) {
        self.inner.submissions_total.with_label_values(&[ACCEPTED]).inc();
    }

    pub fn record_rejected(&self) {
        self.inner.submissions_total.with_label_values(&[REJECTED]).inc();
    }

    /// Record an HTTP request (called by the middleware).
    fn record_request(&self, method: &str, path: &str, status: u16, duration_secs: f64) {
        let status_str = status.to_string();
        self.inner
            .http_requests_total
            .with_label_values(&[method, path, &status_str])
            .inc();

        self.inner
            .http_request_duration_seconds
            .with_label_values(&[method, path])
            .observe(duration_secs);

        if status >= 400 {
            self.inner
                .http_errors_total
                .with_label_values(&[method, path, &status_str])
                .inc();
        }
    }

    /// Gather all metrics and encode to Prometheus text format.
    pub fn gather_and_encode(&self) -> Result<String, String> {
        let encoder = TextEncoder::new();
        let metric_families = self.inner.registry.gather();
        let mut buffer = Vec::new();
        encoder
            .encode(&metric_families, &mut buffer)
            .map_err(|e| format!("failed to encode metrics: {e}"))?;
        String::from_utf8(buffer).map_err(|e| format!("metrics encoding produced invalid UTF-8: {e}"))
    }
}

impl Default for ApiMetrics {
    fn default() -> Self {
        Self::new()
    }
}

fn sum(counter: &IntCounterVec) -> u64 {
    counter
        .collect()
        .iter()
        .flat_map(|family| family.get_metric())
        .map(|m| m.get_counter().get_value() as u64)
        .sum()
}

/// Middleware that records HTTP request metrics via Prometheus.
pub async fn metrics_middleware(request: Request, next: Next) -> Response {
    let metrics = request.extensions().get::<ApiMetrics>().cloned();
    let method = request.method().to_string();
    let path = request
        .extensions()
        .get::<MatchedPath>()
        .map_or_else(|| UNMATCHED_PATH.to_string(), |p| p.as_str().to_string());
    let start = Instant::now();

    let response = next.run(request).await;

    if let Some(m) = metrics {
        let duration = start.elapsed().as_secs_f64();
        m.record_request(&method, &path, response.status().as_u16(), duration);
    }

    response
}
