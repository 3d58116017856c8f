//! Tracing/logging setup shared by every binary.

/// Logging configuration read from the environment.
pub mod config;

/// Tracing subscriber installation.
pub mod tracing;

pub use config::{LogConfig, LogFormat};

/// Initialize process-wide observability from the environment.
///
/// This is safe to call multiple times; subsequent calls become no-ops.
pub fn init() {
    tracing::init(&LogConfig::from_env());
}
