// src/exec/args.rs

//! Building the imapsync command line.
//!
//! imapsync addresses its two endpoints positionally, so every per-host flag
//! carries the endpoint ordinal (`--host1`, `--user2`, ...).

use std::fmt;

use crate::errors::{ImapsyncError, Result};
use crate::types::{Encryption, HostSpec};

/// Flags passed to every run, before any host arguments.
pub const FIXED_FLAGS: [&str; 2] = ["--nolog", "--noreleasecheck"];

const REDACTED: &str = "********";

/// Check that `host`, `user` and `password` are all present.
pub fn validate_host(ordinal: u8, host: &HostSpec) -> Result<()> {
    let missing: Vec<&str> = [
        ("host", host.host.as_str()),
        ("user", host.user.as_str()),
        ("password", host.password.as_str()),
    ]
    .into_iter()
    .filter(|(_, value)| value.trim().is_empty())
    .map(|(name, _)| name)
    .collect();

    if missing.is_empty() {
        Ok(())
    } else {
        Err(ImapsyncError::Validation(format!(
            "host{ordinal} is missing {}",
            missing.join(", ")
        )))
    }
}

/// Serialize one endpoint into imapsync flags.
///
/// Emits `--host<N> h --user<N> u --password<N> p`, followed by `--tls<N>` or
/// `--ssl<N>` when encryption asks for it.
pub fn build_host_args(ordinal: u8, host: &HostSpec) -> Result<Vec<String>> {
    validate_host(ordinal, host)?;

    let mut args = vec![
        format!("--host{ordinal}"),
        host.host.clone(),
        format!("--user{ordinal}"),
        host.user.clone(),
        format!("--password{ordinal}"),
        host.password.clone(),
    ];

    match host.encryption {
        Some(Encryption::Tls) => args.push(format!("--tls{ordinal}")),
        Some(Encryption::Ssl) => args.push(format!("--ssl{ordinal}")),
        Some(Encryption::None) | None => {}
    }

    Ok(args)
}

/// A fully built invocation: program plus argument vector.
#[derive(Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: String,
    pub args: Vec<String>,
}

impl CommandLine {
    /// Build `<binary> [leading...] --nolog --noreleasecheck <host1> <host2>`.
    ///
    /// Both hosts are validated before anything is returned, so a failure
    /// never leaves a partial command behind.
    pub fn build(
        binary: &str,
        leading_args: &[String],
        host1: &HostSpec,
        host2: &HostSpec,
    ) -> Result<Self> {
        let host1_args = build_host_args(1, host1)?;
        let host2_args = build_host_args(2, host2)?;

        let args = leading_args
            .iter()
            .cloned()
            .chain(FIXED_FLAGS.iter().map(|s| s.to_string()))
            .chain(host1_args)
            .chain(host2_args)
            .collect();

        Ok(Self {
            program: binary.to_string(),
            args,
        })
    }

    /// Arguments with every password value masked.
    pub fn redacted_args(&self) -> Vec<String> {
        let mut out = Vec::with_capacity(self.args.len());
        let mut mask_next = false;
        for arg in &self.args {
            if mask_next {
                out.push(REDACTED.to_string());
            } else {
                out.push(arg.clone());
            }
            mask_next = arg.starts_with("--password");
        }
        out
    }
}

/// Displays the command with passwords masked, safe for logs.
impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in self.redacted_args() {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

impl fmt::Debug for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandLine")
            .field("program", &self.program)
            .field("args", &self.redacted_args())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn host(h: &str, u: &str, p: &str) -> HostSpec {
        HostSpec::new(h, u, p)
    }

    #[test]
    fn host_args_are_tagged_with_ordinal() {
        let args = build_host_args(2, &host("imap.b", "bob", "pw")).unwrap();
        assert_eq!(
            args,
            vec!["--host2", "imap.b", "--user2", "bob", "--password2", "pw"]
        );
    }

    #[test]
    fn security_flag_follows_encryption() {
        let tls = host("a", "u", "p").with_encryption(Encryption::Tls);
        let ssl = host("a", "u", "p").with_encryption(Encryption::Ssl);
        let none = host("a", "u", "p").with_encryption(Encryption::None);

        assert_eq!(build_host_args(1, &tls).unwrap().last().unwrap(), "--tls1");
        assert_eq!(build_host_args(2, &ssl).unwrap().last().unwrap(), "--ssl2");
        assert_eq!(build_host_args(1, &none).unwrap().len(), 6);
        assert_eq!(build_host_args(1, &host("a", "u", "p")).unwrap().len(), 6);
    }

    #[test]
    fn missing_fields_are_reported_together() {
        let err = build_host_args(1, &host("", "u", "")).unwrap_err();
        match err {
            ImapsyncError::Validation(msg) => {
                assert!(msg.contains("host1"));
                assert!(msg.contains("host"));
                assert!(msg.contains("password"));
                assert!(!msg.contains("user"));
            }
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn whitespace_only_values_count_as_missing() {
        assert!(matches!(
            build_host_args(1, &host("a", "  ", "p")),
            Err(ImapsyncError::Validation(_))
        ));
    }

    #[test]
    fn command_line_orders_fixed_flags_then_hosts() {
        let cmd = CommandLine::build(
            "imapsync",
            &[],
            &host("a", "ua", "pa").with_encryption(Encryption::Ssl),
            &host("b", "ub", "pb"),
        )
        .unwrap();

        assert_eq!(cmd.program, "imapsync");
        assert_eq!(
            cmd.args,
            vec![
                "--nolog",
                "--noreleasecheck",
                "--host1",
                "a",
                "--user1",
                "ua",
                "--password1",
                "pa",
                "--ssl1",
                "--host2",
                "b",
                "--user2",
                "ub",
                "--password2",
                "pb",
            ]
        );
    }

    #[test]
    fn invalid_second_host_fails_whole_command() {
        let res = CommandLine::build("imapsync", &[], &host("a", "u", "p"), &HostSpec::default());
        match res {
            Err(ImapsyncError::Validation(msg)) => assert!(msg.contains("host2")),
            other => panic!("expected Validation error, got {other:?}"),
        }
    }

    #[test]
    fn display_masks_passwords() {
        let cmd = CommandLine::build(
            "imapsync",
            &["--dry".to_string()],
            &host("a", "u", "secret-one"),
            &host("b", "v", "secret-two"),
        )
        .unwrap();

        let shown = cmd.to_string();
        assert!(shown.starts_with("imapsync --dry --nolog --noreleasecheck"));
        assert!(!shown.contains("secret-one"));
        assert!(!shown.contains("secret-two"));
        assert!(shown.contains("--password1 ********"));
        assert!(!format!("{cmd:?}").contains("secret"));
    }
}
