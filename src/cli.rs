// src/cli.rs

//! CLI argument parsing using `clap`.

use clap::{Parser, ValueEnum};

/// Command-line arguments for `imapsync-runner`.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "imapsync-runner",
    version,
    about = "Run imapsync between two IMAP accounts and report its progress.",
    long_about = None
)]
pub struct CliArgs {
    /// Path to the job file (TOML) describing both hosts.
    ///
    /// Default: `Imapsync.toml` in the current working directory.
    #[arg(long, value_name = "PATH", default_value = "Imapsync.toml")]
    pub config: String,

    /// Logging level (error, warn, info, debug, trace).
    ///
    /// If omitted, `IMAPSYNC_RUNNER_LOG` or a default level will be used.
    #[arg(long, value_enum, value_name = "LEVEL")]
    pub log_level: Option<LogLevel>,

    /// Validate the job file and print the command line (passwords masked)
    /// without running anything.
    #[arg(long)]
    pub dry_run: bool,
}

/// Log level as exposed on the CLI.
#[derive(Debug, Copy, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// Convenience wrapper around `CliArgs::parse()`.
pub fn parse() -> CliArgs {
    CliArgs::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_job_file_in_cwd() {
        let args = CliArgs::try_parse_from(["imapsync-runner"]).unwrap();
        assert_eq!(args.config, "Imapsync.toml");
        assert!(!args.dry_run);
        assert!(args.log_level.is_none());
    }

    #[test]
    fn parses_flags() {
        let args = CliArgs::try_parse_from([
            "imapsync-runner",
            "--config",
            "jobs/alice.toml",
            "--log-level",
            "debug",
            "--dry-run",
        ])
        .unwrap();
        assert_eq!(args.config, "jobs/alice.toml");
        assert!(args.dry_run);
        assert!(matches!(args.log_level, Some(LogLevel::Debug)));
    }
}
