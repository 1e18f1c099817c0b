//! Logging initialization for the bompack CLI
//!
//! Configures `tracing-subscriber` once at startup from the global
//! flags: the hidden `--debug` toggle forces debug level and overrides
//! `--minimum-log-level` when both are present.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::cli::LogLevel;

/// Initialize the global tracing subscriber.
///
/// Must be called exactly once, before any tracing macros are used.
/// `RUST_LOG` takes precedence over both CLI flags when set.
pub fn init(debug: bool, minimum: Option<LogLevel>) -> Result<(), crate::error::CliError> {
    let level = if debug {
        "debug"
    } else {
        minimum.map_or("info", LogLevel::as_str)
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .map_err(|e| crate::error::CliError::Logging(e.to_string()))?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_overrides_level_selector() {
        // Resolution logic only; initializing the global subscriber in
        // tests would collide across the suite.
        let level = |debug: bool, min: Option<LogLevel>| {
            if debug {
                "debug"
            } else {
                min.map_or("info", LogLevel::as_str)
            }
        };

        assert_eq!(level(true, Some(LogLevel::Error)), "debug");
        assert_eq!(level(false, Some(LogLevel::Warn)), "warn");
        assert_eq!(level(false, None), "info");
    }
}
