//! # Application State
//!
//! Configuration and request counters shared by every handler. Submissions
//! themselves are request-scoped; nothing about a registration outlives
//! the response that renders it.

use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::sync::Arc;

use crate::middleware::metrics::ApiMetrics;

/// Default request body limit: registration forms are a few hundred bytes.
pub const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

/// Runtime configuration, read once at startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Port to bind the HTTP server to (`PORT`).
    pub port: u16,
    /// Interface to bind to (`SREG_BIND_ADDR`).
    pub bind_addr: IpAddr,
    /// Largest accepted request body (`SREG_MAX_BODY_BYTES`).
    pub max_body_bytes: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(Ipv4Addr::UNSPECIFIED),
            max_body_bytes: DEFAULT_MAX_BODY_BYTES,
        }
    }
}

impl AppConfig {
    /// Build configuration from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    ///
    /// Unparseable values fall back to the default with a warning.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            port: parse_or(&lookup, "PORT", defaults.port),
            bind_addr: parse_or(&lookup, "SREG_BIND_ADDR", defaults.bind_addr),
            max_body_bytes: parse_or(&lookup, "SREG_MAX_BODY_BYTES", defaults.max_body_bytes),
        }
    }

    /// Socket address the server listens on.
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_addr, self.port)
    }
}

fn parse_or<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!(%key, value = %raw, fallback = %default, "ignoring invalid configuration value");
            default
        }),
    }
}

/// Shared application state passed to all route handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub metrics: ApiMetrics,
}

impl AppState {
    /// Create state with default configuration.
    pub fn new() -> Self {
        Self::with_config(AppConfig::default())
    }

    pub fn with_config(config: AppConfig) -> Self {
        Self {
            config: Arc::new(config),
            metrics: ApiMetrics::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn defaults_without_environment() {
        let config = AppConfig::from_lookup(lookup(&[]));
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.socket_addr().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn reads_overrides() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "3000"),
            ("SREG_BIND_ADDR", "127.0.0.1"),
            ("SREG_MAX_BODY_BYTES", "1024"),
        ]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:3000");
        assert_eq!(config.max_body_bytes, 1024);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = AppConfig::from_lookup(lookup(&[
            ("PORT", "eighty"),
            ("SREG_BIND_ADDR", "localhost"),
        ]));
        assert_eq!(config.port, 8080);
        assert_eq!(config.bind_addr, AppConfig::default().bind_addr);
    }
}
