// src/config/model.rs

use std::time::Duration;

use serde::Deserialize;

use crate::types::{HostSpec, SyncOptions};

pub const DEFAULT_BINARY: &str = "imapsync";
pub const DEFAULT_POLL_INTERVAL: Duration = Duration::from_secs(5);
pub const DEFAULT_SMTP_HOST: &str = "localhost";
pub const DEFAULT_SMTP_PORT: u16 = 25;

/// A job file as read from TOML, before validation.
///
/// ```toml
/// [syncer]
/// binary = "imapsync"
/// poll_interval = "5s"
/// run_timeout = "2h"
///
/// [smtp]
/// host = "localhost"
/// port = 25
///
/// [host1]
/// host = "imap.old.example"
/// user = "alice"
/// password = "secret"
/// encryption = "ssl"
///
/// [host2]
/// host = "imap.new.example"
/// user = "alice"
/// password = "secret"
/// encryption = "tls"
///
/// [feedback]
/// to = "alice@example.org"
/// from = "imapsync@example.org"
/// ```
///
/// Every section except the two hosts is optional.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawJobFile {
    #[serde(default)]
    pub syncer: RawSyncerSection,

    #[serde(default)]
    pub smtp: SmtpSection,

    #[serde(default)]
    pub host1: HostSpec,

    #[serde(default)]
    pub host2: HostSpec,

    #[serde(default)]
    pub feedback: SyncOptions,
}

/// `[syncer]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct RawSyncerSection {
    /// Program to launch.
    #[serde(default = "default_binary")]
    pub binary: String,

    /// Extra arguments placed right after the program, before the fixed
    /// flags. Useful for wrappers such as `nice` or a container runtime.
    #[serde(default)]
    pub binary_args: Vec<String>,

    /// How long to wait on the output queue before checking whether the
    /// relay is still alive, e.g. `"5s"` or `"250ms"`.
    #[serde(default)]
    pub poll_interval: Option<String>,

    /// Upper bound on a whole run. Unset means wait as long as it takes.
    #[serde(default)]
    pub run_timeout: Option<String>,
}

fn default_binary() -> String {
    DEFAULT_BINARY.to_string()
}

impl Default for RawSyncerSection {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            binary_args: Vec::new(),
            poll_interval: None,
            run_timeout: None,
        }
    }
}

/// `[smtp]` section: where feedback emails are submitted.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SmtpSection {
    #[serde(default = "default_smtp_host")]
    pub host: String,

    #[serde(default = "default_smtp_port")]
    pub port: u16,
}

fn default_smtp_host() -> String {
    DEFAULT_SMTP_HOST.to_string()
}

fn default_smtp_port() -> u16 {
    DEFAULT_SMTP_PORT
}

impl Default for SmtpSection {
    fn default() -> Self {
        Self {
            host: default_smtp_host(),
            port: default_smtp_port(),
        }
    }
}

/// Validated settings for launching and supervising the sync tool.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncerConfig {
    pub binary: String,
    pub binary_args: Vec<String>,
    pub poll_interval: Duration,
    pub run_timeout: Option<Duration>,
}

impl Default for SyncerConfig {
    fn default() -> Self {
        Self {
            binary: default_binary(),
            binary_args: Vec::new(),
            poll_interval: DEFAULT_POLL_INTERVAL,
            run_timeout: None,
        }
    }
}

/// A validated job: everything needed for one sync run.
#[derive(Debug, Clone)]
pub struct JobFile {
    pub syncer: SyncerConfig,
    pub smtp: SmtpSection,
    pub host1: HostSpec,
    pub host2: HostSpec,
    pub options: SyncOptions,
}
