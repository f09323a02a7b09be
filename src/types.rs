use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};
use tracing::warn;

/// Transport security requested for one IMAP endpoint.
///
/// - `None`: plain connection, no flag is passed to imapsync.
/// - `Tls`: STARTTLS, passed as `--tls<N>`.
/// - `Ssl`: implicit TLS, passed as `--ssl<N>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Encryption {
    None,
    Tls,
    Ssl,
}

impl Default for Encryption {
    fn default() -> Self {
        Encryption::None
    }
}

impl FromStr for Encryption {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "none" | "" => Ok(Encryption::None),
            "tls" => Ok(Encryption::Tls),
            "ssl" => Ok(Encryption::Ssl),
            other => Err(format!(
                "invalid encryption: {other} (expected \"none\", \"tls\" or \"ssl\")"
            )),
        }
    }
}

/// Connection parameters for one side of a sync run.
///
/// Fields default to empty so that a job file with a missing key still
/// deserializes and is rejected by validation with a readable message.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
pub struct HostSpec {
    #[serde(default)]
    pub host: String,
    #[serde(default)]
    pub user: String,
    #[serde(default)]
    pub password: String,
    /// Unrecognized values are logged and treated as absent.
    #[serde(default, deserialize_with = "lenient_encryption")]
    pub encryption: Option<Encryption>,
}

impl HostSpec {
    pub fn new(
        host: impl Into<String>,
        user: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            password: password.into(),
            encryption: None,
        }
    }

    pub fn with_encryption(mut self, encryption: Encryption) -> Self {
        self.encryption = Some(encryption);
        self
    }

    /// `user@host`, used for logging. Never includes the password.
    pub fn account(&self) -> String {
        format!("{}@{}", self.user, self.host)
    }
}

impl fmt::Debug for HostSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostSpec")
            .field("host", &self.host)
            .field("user", &self.user)
            .field("password", &"<redacted>")
            .field("encryption", &self.encryption)
            .finish()
    }
}

fn lenient_encryption<'de, D>(deserializer: D) -> Result<Option<Encryption>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    Ok(raw.and_then(|s| match s.parse::<Encryption>() {
        Ok(enc) => Some(enc),
        Err(e) => {
            warn!(value = %s, error = %e, "ignoring unrecognized encryption");
            None
        }
    }))
}

/// Per-run options. Both addresses must be set for feedback to be sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SyncOptions {
    #[serde(default, rename = "to")]
    pub feedback_to_email: Option<String>,
    #[serde(default, rename = "from")]
    pub feedback_from_email: Option<String>,
}

impl SyncOptions {
    pub fn with_feedback(to: impl Into<String>, from: impl Into<String>) -> Self {
        Self {
            feedback_to_email: Some(to.into()),
            feedback_from_email: Some(from.into()),
        }
    }

    /// `(to, from)` when both addresses are present and non-empty.
    pub fn feedback_addresses(&self) -> Option<(&str, &str)> {
        let to = self.feedback_to_email.as_deref().filter(|s| !s.is_empty())?;
        let from = self.feedback_from_email.as_deref().filter(|s| !s.is_empty())?;
        Some((to, from))
    }
}
