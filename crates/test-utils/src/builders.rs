#![allow(dead_code)]

use std::time::Duration;

use imapsync_runner::config::SyncerConfig;
use imapsync_runner::types::{Encryption, HostSpec};

/// Builder for `HostSpec` with sensible test values.
pub struct HostSpecBuilder {
    spec: HostSpec,
}

impl HostSpecBuilder {
    pub fn new(host: &str) -> Self {
        Self {
            spec: HostSpec::new(host, "alice", "s3cret"),
        }
    }

    pub fn user(mut self, user: &str) -> Self {
        self.spec.user = user.to_string();
        self
    }

    pub fn password(mut self, password: &str) -> Self {
        self.spec.password = password.to_string();
        self
    }

    pub fn encryption(mut self, encryption: Encryption) -> Self {
        self.spec.encryption = Some(encryption);
        self
    }

    pub fn build(self) -> HostSpec {
        self.spec
    }
}

/// Builder for `SyncerConfig`.
pub struct SyncerConfigBuilder {
    config: SyncerConfig,
}

impl SyncerConfigBuilder {
    pub fn new(binary: &str) -> Self {
        Self {
            config: SyncerConfig {
                binary: binary.to_string(),
                ..SyncerConfig::default()
            },
        }
    }

    /// Stand in for imapsync with a shell script.
    ///
    /// Runs `sh -c '<script>' imapsync <args...>`, so inside the script `$0`
    /// is `imapsync` and `"$@"` is exactly the argument list the supervisor
    /// built.
    pub fn fake_tool(script: &str) -> Self {
        let mut builder = Self::new("sh");
        builder.config.binary_args = vec![
            "-c".to_string(),
            script.to_string(),
            "imapsync".to_string(),
        ];
        builder.poll_interval(Duration::from_millis(50))
    }

    pub fn poll_interval(mut self, interval: Duration) -> Self {
        self.config.poll_interval = interval;
        self
    }

    pub fn run_timeout(mut self, limit: Duration) -> Self {
        self.config.run_timeout = Some(limit);
        self
    }

    pub fn build(self) -> SyncerConfig {
        self.config
    }
}
