//! # Middleware Modules
//!
//! Tower middleware layers for the registration service.

pub mod metrics;
pub mod tracing_layer;
