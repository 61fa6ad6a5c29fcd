//! Logging setup for the `aetheris` binary.
//!
//! Library code only emits `tracing` events; this module installs the
//! subscriber. Output always goes to stderr so diagram text written to
//! stdout stays clean.
//!
//! # Environment Variables
//!
//! - `AETHERIS_LOG_LEVEL`: log level or filter directive (e.g. `debug`,
//!   `aetheris_core::synth=trace`)
//! - `RUST_LOG`: standard `tracing-subscriber` filter, used when the above is unset
//! - `AETHERIS_LOG_FORMAT`: `compact`, `pretty` or `json`

use std::str::FromStr;

use clap::ValueEnum;
use tracing_subscriber::{
    fmt::{self, format::FmtSpan},
    layer::SubscriberExt,
    util::SubscriberInitExt,
    EnvFilter, Registry,
};

/// Level used when neither a flag nor an environment variable sets one.
pub const DEFAULT_LOG_LEVEL: &str = "warn";

/// Log format options.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Single-line output.
    Compact,
    /// Multi-line output with source locations.
    Pretty,
    /// One JSON object per event.
    Json,
}

impl FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "compact" => Ok(Self::Compact),
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown log format: {s}")),
        }
    }
}

/// Resolve the filter directive from the flag, then the environment.
fn resolve_level(level: Option<&str>) -> String {
    level
        .map(|s| s.to_string())
        .or_else(|| std::env::var("AETHERIS_LOG_LEVEL").ok())
        .or_else(|| std::env::var("RUST_LOG").ok())
        .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string())
}

/// Resolve the format from the flag, then `AETHERIS_LOG_FORMAT`.
fn resolve_format(format: Option<LogFormat>) -> Result<LogFormat, String> {
    match format {
        Some(format) => Ok(format),
        None => std::env::var("AETHERIS_LOG_FORMAT")
            .ok()
            .map(|s| s.parse())
            .unwrap_or(Ok(LogFormat::Compact)),
    }
}

/// Install the global subscriber.
///
/// Fails if the format is invalid or a subscriber is already installed.
pub fn init_logging(
    level: Option<&str>,
    format: Option<LogFormat>,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let directive = resolve_level(level);
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_LEVEL));
    let format = resolve_format(format)?;

    let layer = fmt::Layer::default().with_writer(std::io::stderr);

    match format {
        LogFormat::Compact => {
            Registry::default()
                .with(filter)
                .with(
                    layer
                        .with_target(false)
                        .with_level(true)
                        .with_span_events(FmtSpan::NONE)
                        .compact(),
                )
                .try_init()?;
        }
        LogFormat::Pretty => {
            Registry::default()
                .with(filter)
                .with(
                    layer
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_span_events(FmtSpan::ACTIVE)
                        .pretty(),
                )
                .try_init()?;
        }
        LogFormat::Json => {
            Registry::default()
                .with(filter)
                .with(
                    layer
                        .with_target(true)
                        .with_file(true)
                        .with_line_number(true)
                        .with_span_events(FmtSpan::CLOSE)
                        .json(),
                )
                .try_init()?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_format_from_str() {
        assert_eq!("compact".parse::<LogFormat>(), Ok(LogFormat::Compact));
        assert_eq!("PRETTY".parse::<LogFormat>(), Ok(LogFormat::Pretty));
        assert_eq!("json".parse::<LogFormat>(), Ok(LogFormat::Json));
        assert!("xml".parse::<LogFormat>().is_err());
    }

    #[test]
    fn test_flag_wins_over_environment() {
        assert_eq!(resolve_level(Some("debug")), "debug");
        assert_eq!(resolve_format(Some(LogFormat::Json)), Ok(LogFormat::Json));
    }
}
