//! Logging infrastructure for schema conversion
//!
//! Structured logging through the `tracing` crate. Events are written to
//! stderr so that diagram markup sent to stdout stays clean.
//!
//! # Usage
//!
//! ```rust
//! use schemauml::core::logging::init_logging;
//!
//! // Initialize with default settings; a second call reports an error
//! // because the global subscriber is already set.
//! let _ = init_logging(None, None);
//! let _ = init_logging(Some("debug"), Some("pretty"));
//! ```
//!
//! # Log Formats
//!
//! - `compact`: Single-line format (default)
//! - `pretty`: Multi-line format with source locations
//! - `json`: JSON lines for log aggregation systems
//!
//! # Environment Variables
//!
//! - `SCHEMAUML_LOG_LEVEL`: Set log level (trace|debug|info|warn|error|off)
//! - `SCHEMAUML_LOG_FORMAT`: Set log format (compact|pretty|json)
//! - `RUST_LOG`: Standard filter directives, e.g.
//!   `RUST_LOG="info,schemauml::io::source=debug"`

use std::str::FromStr;

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Layer, Registry,
};

#[cfg(target_arch = "wasm32")]
use tracing_wasm::WASMLayerConfig;

/// Environment variable overriding the log level
pub const LOG_LEVEL_ENV: &str = "SCHEMAUML_LOG_LEVEL";

/// Environment variable overriding the log format
pub const LOG_FORMAT_ENV: &str = "SCHEMAUML_LOG_FORMAT";

/// Log format options
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Compact single-line format
    Compact,
    /// Pretty multi-line format with colors
    Pretty,
    /// JSON format for log aggregation
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(LogFormat::Compact),
            "pretty" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            _ => Err(format!("Unknown log format: {}", s)),
        }
    }
}

impl LogFormat {
    /// Get all valid format names
    pub fn variants() -> &'static [&'static str] {
        &["compact", "pretty", "json"]
    }
}

/// Resolve the filter directive: argument, `SCHEMAUML_LOG_LEVEL`,
/// `RUST_LOG`, then `info`
pub fn resolve_level(level: Option<&str>) -> String {
    level
        .map(str::to_string)
        .or_else(|| std::env::var(LOG_LEVEL_ENV).ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| "info".to_string())
}

/// Resolve the output format: argument, `SCHEMAUML_LOG_FORMAT`, then compact
pub fn resolve_format(format: Option<&str>) -> Result<LogFormat, String> {
    match format
        .map(str::to_string)
        .or_else(|| std::env::var(LOG_FORMAT_ENV).ok())
    {
        Some(name) => LogFormat::from_str(&name).map_err(|e| format!("Invalid log format: {}", e)),
        None => Ok(LogFormat::Compact),
    }
}

/// Initialize the tracing subscriber with the given log level and format
///
/// Events go to stderr so markup written to stdout is never interleaved
/// with log lines. An unparseable directive falls back to `info`.
///
/// Returns an error for an unknown format or when a global subscriber is
/// already installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<&str>,
) -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(target_arch = "wasm32")]
    {
        // Browser console output; level and format are not configurable here
        let _ = (level, format);
        tracing_wasm::set_as_global_default_with_config(WASMLayerConfig::default());

        Ok(())
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let filter = EnvFilter::try_new(resolve_level(level))
            .unwrap_or_else(|_| EnvFilter::new("info"));
        let format = resolve_format(format)?;

        let base = fmt::layer().with_writer(std::io::stderr).with_level(true);
        let layer: Box<dyn Layer<Registry> + Send + Sync> = match format {
            LogFormat::Compact => base.compact().with_target(false).boxed(),
            LogFormat::Pretty => base
                .pretty()
                .with_file(true)
                .with_line_number(true)
                .with_span_events(FmtSpan::ACTIVE)
                .boxed(),
            LogFormat::Json => base
                .json()
                .with_current_span(true)
                .with_span_list(false)
                .boxed(),
        };

        Registry::default().with(layer).with(filter).try_init()?;
        Ok(())
    }
}
