// src/logging.rs

//! Logging setup using `tracing` + `tracing-subscriber`.
//!
//! The filter is built from `EnvFilter` directives:
//! - `IMAPSYNC_RUNNER_LOG` may hold a bare level (`debug`) or per-module
//!   directives (`info,imapsync_runner::exec=debug`).
//! - `--log-level` sets the base level and wins over any bare level in the
//!   environment; per-module directives from the environment still apply.
//! - with neither, everything logs at `info`.
//!
//! Logs go to STDERR; stdout carries only the final report.

use anyhow::{Context, Result, anyhow};
use tracing_subscriber::{EnvFilter, fmt};

use crate::cli::LogLevel;

pub const LOG_ENV_VAR: &str = "IMAPSYNC_RUNNER_LOG";

const DEFAULT_DIRECTIVE: &str = "info";

/// Initialise the global logging subscriber. Call once at startup.
pub fn init_logging(cli_level: Option<LogLevel>) -> Result<()> {
    let from_env = std::env::var(LOG_ENV_VAR).ok();
    let directives = filter_directives(cli_level, from_env.as_deref());
    let filter = EnvFilter::try_new(&directives)
        .with_context(|| format!("invalid log filter '{directives}' (check {LOG_ENV_VAR})"))?;

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| anyhow!("logging already initialised: {e}"))?;

    Ok(())
}

/// Compose the directive string handed to `EnvFilter`.
fn filter_directives(cli_level: Option<LogLevel>, from_env: Option<&str>) -> String {
    let env_parts = from_env
        .into_iter()
        .flat_map(|s| s.split(','))
        .map(str::trim)
        .filter(|d| !d.is_empty());

    match cli_level {
        Some(level) => std::iter::once(level_directive(level))
            .chain(env_parts.filter(|d| d.contains('=')))
            .collect::<Vec<_>>()
            .join(","),
        None => {
            let parts: Vec<&str> = env_parts.collect();
            if parts.is_empty() {
                DEFAULT_DIRECTIVE.to_string()
            } else {
                parts.join(",")
            }
        }
    }
}

fn level_directive(level: LogLevel) -> &'static str {
    match level {
        LogLevel::Error => "error",
        LogLevel::Warn => "warn",
        LogLevel::Info => "info",
        LogLevel::Debug => "debug",
        LogLevel::Trace => "trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_info_without_flag_or_env() {
        assert_eq!(filter_directives(None, None), "info");
        assert_eq!(filter_directives(None, Some(" , ")), "info");
    }

    #[test]
    fn env_module_directives_pass_through() {
        let directives = filter_directives(None, Some("warn, imapsync_runner::exec=debug"));
        assert_eq!(directives, "warn,imapsync_runner::exec=debug");
        assert!(EnvFilter::try_new(&directives).is_ok());
    }

    #[test]
    fn cli_level_replaces_bare_env_level_but_keeps_module_directives() {
        let directives = filter_directives(
            Some(LogLevel::Trace),
            Some("error,imapsync_runner::notify=off"),
        );
        assert_eq!(directives, "trace,imapsync_runner::notify=off");
    }

    #[test]
    fn garbage_env_value_is_rejected_by_the_filter() {
        let directives = filter_directives(None, Some("imapsync_runner=loud"));
        assert!(EnvFilter::try_new(&directives).is_err());
    }
}
