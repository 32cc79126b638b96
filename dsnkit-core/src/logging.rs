//! Logging setup.
//!
//! The parser logs through `tracing`: a `debug` event per parse (input
//! length, protocol, host count; never the raw DSN, which may carry a
//! password) and `trace` events for each stage. This module installs a
//! global subscriber for applications that do not bring their own.
//!
//! # Environment Variables
//!
//! - `DSNKIT_DEBUG=true|1|yes` - Enable debug logging
//! - `DSNKIT_LOG_LEVEL=trace|debug|info|warn|error` - Set a specific level
//! - `DSNKIT_LOG_FORMAT=json|pretty|compact` - Output format (default: json)
//!
//! The subscriber is only installed with the `tracing-subscriber` feature.
//! Only the first successful call installs it; later calls return `false`.
//!
//! ```rust,no_run
//! use dsnkit_core::logging;
//!
//! logging::init();
//! // or, without touching the environment
//! logging::init_with_level("debug");
//! ```

use crate::env::{EnvSource, StdEnvSource};

const DEBUG_VAR: &str = "DSNKIT_DEBUG";
const LEVEL_VAR: &str = "DSNKIT_LOG_LEVEL";
const FORMAT_VAR: &str = "DSNKIT_LOG_FORMAT";

/// Check if `DSNKIT_DEBUG` is set to "true", "1" or "yes" (case-insensitive).
#[inline]
pub fn is_debug_enabled() -> bool {
    debug_enabled_in(&StdEnvSource)
}

/// Get the configured log level.
///
/// Falls back to "debug" when `DSNKIT_DEBUG` is enabled, otherwise "warn".
pub fn get_log_level() -> &'static str {
    log_level_in(&StdEnvSource)
}

/// Get the configured log format. Defaults to "json".
pub fn get_log_format() -> &'static str {
    log_format_in(&StdEnvSource)
}

fn debug_enabled_in<S: EnvSource>(source: &S) -> bool {
    source
        .get(DEBUG_VAR)
        .is_some_and(|v| matches!(v.to_lowercase().as_str(), "true" | "1" | "yes"))
}

fn log_level_in<S: EnvSource>(source: &S) -> &'static str {
    let fallback = if debug_enabled_in(source) { "debug" } else { "warn" };

    match source.get(LEVEL_VAR) {
        Some(level) => normalize_level(&level).unwrap_or(fallback),
        None => fallback,
    }
}

fn log_format_in<S: EnvSource>(source: &S) -> &'static str {
    match source.get(FORMAT_VAR).map(|f| f.to_lowercase()).as_deref() {
        Some("pretty") => "pretty",
        Some("compact") => "compact",
        _ => "json",
    }
}

fn normalize_level(level: &str) -> Option<&'static str> {
    match level.to_lowercase().as_str() {
        "trace" => Some("trace"),
        "debug" => Some("debug"),
        "info" => Some("info"),
        "warn" => Some("warn"),
        "error" => Some("error"),
        _ => None,
    }
}

/// Initialize logging from the `DSNKIT_*` variables.
///
/// Does nothing unless `DSNKIT_DEBUG` or `DSNKIT_LOG_LEVEL` is set.
/// Returns `true` if this call installed the subscriber.
pub fn init() -> bool {
    if !is_debug_enabled() && StdEnvSource.get(LEVEL_VAR).is_none() {
        return false;
    }
    install(get_log_level(), get_log_format())
}

/// Initialize logging with a specific level. Unknown levels fall back to
/// "warn"; the format still comes from `DSNKIT_LOG_FORMAT`.
///
/// Returns `true` if this call installed the subscriber.
pub fn init_with_level(level: &str) -> bool {
    install(normalize_level(level).unwrap_or("warn"), get_log_format())
}

/// Initialize debug-level logging.
///
/// Returns `true` if this call installed the subscriber.
pub fn init_debug() -> bool {
    install("debug", get_log_format())
}

#[cfg(feature = "tracing-subscriber")]
fn install(level: &'static str, format: &'static str) -> bool {
    use tracing_subscriber::{EnvFilter, fmt, prelude::*};

    let filter = EnvFilter::try_new(format!("dsnkit={level},dsnkit_core={level}"))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let registry = tracing_subscriber::registry().with(filter);
    let installed = match format {
        "json" => registry.with(fmt::layer().json()).try_init(),
        "compact" => registry.with(fmt::layer().compact()).try_init(),
        _ => registry.with(fmt::layer().pretty()).try_init(),
    }
    .is_ok();

    if installed {
        tracing::info!(level = level, format = format, "dsnkit logging initialized");
    }
    installed
}

#[cfg(not(feature = "tracing-subscriber"))]
fn install(_level: &'static str, _format: &'static str) -> bool {
    // no subscriber available; the host application brings its own
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::env::MapEnvSource;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let source = MapEnvSource::new();
        assert!(!debug_enabled_in(&source));
        assert_eq!(log_level_in(&source), "warn");
        assert_eq!(log_format_in(&source), "json");
    }

    #[test]
    fn test_debug_flag_raises_level() {
        let source = MapEnvSource::new().set(DEBUG_VAR, "YES");
        assert!(debug_enabled_in(&source));
        assert_eq!(log_level_in(&source), "debug");

        let source = MapEnvSource::new().set(DEBUG_VAR, "off");
        assert!(!debug_enabled_in(&source));
    }

    #[test]
    fn test_explicit_level_and_format() {
        let source = MapEnvSource::new()
            .set(LEVEL_VAR, "Trace")
            .set(FORMAT_VAR, "COMPACT");
        assert_eq!(log_level_in(&source), "trace");
        assert_eq!(log_format_in(&source), "compact");
    }

    #[test]
    fn test_unknown_level_uses_fallback() {
        let source = MapEnvSource::new().set(LEVEL_VAR, "loud");
        assert_eq!(log_level_in(&source), "warn");

        let source = source.set(DEBUG_VAR, "1");
        assert_eq!(log_level_in(&source), "debug");
        assert_eq!(normalize_level("loud"), None);
    }

    #[cfg(feature = "tracing-subscriber")]
    #[test]
    fn test_init_installs_once() {
        assert!(init_with_level("trace"));
        assert!(!init_with_level("trace"));
        assert!(!init_debug());
    }

    #[cfg(not(feature = "tracing-subscriber"))]
    #[test]
    fn test_init_without_subscriber_feature() {
        assert!(!init_with_level("trace"));
        assert!(!init_debug());
    }
}
