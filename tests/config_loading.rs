// tests/config_loading.rs

use std::io::Write;
use std::time::Duration;

use tempfile::NamedTempFile;

use imapsync_runner::config::{JobFile, load_and_validate};
use imapsync_runner::errors::ImapsyncError;
use imapsync_runner::types::Encryption;

fn load(contents: &str) -> Result<JobFile, ImapsyncError> {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{contents}").unwrap();
    load_and_validate(file.path())
}

const HOSTS: &str = r#"
[host1]
host = "imap.old.example"
user = "alice"
password = "old-secret"
encryption = "ssl"

[host2]
host = "imap.new.example"
user = "alice"
password = "new-secret"
"#;

#[test]
fn minimal_job_file_uses_defaults() {
    let job = load(HOSTS).unwrap();

    assert_eq!(job.syncer.binary, "imapsync");
    assert!(job.syncer.binary_args.is_empty());
    assert_eq!(job.syncer.poll_interval, Duration::from_secs(5));
    assert!(job.syncer.run_timeout.is_none());
    assert_eq!(job.smtp.host, "localhost");
    assert_eq!(job.smtp.port, 25);
    assert_eq!(job.host1.encryption, Some(Encryption::Ssl));
    assert_eq!(job.host2.encryption, None);
    assert!(job.options.feedback_addresses().is_none());
}

#[test]
fn full_job_file_is_parsed() {
    let job = load(&format!(
        r#"
[syncer]
binary = "/usr/local/bin/imapsync"
binary_args = ["--debugcontent"]
poll_interval = "250ms"
run_timeout = "2h"

[smtp]
host = "mail.internal"
port = 2525

[feedback]
to = "ops@example.org"
from = "sync@example.org"
{HOSTS}"#
    ))
    .unwrap();

    assert_eq!(job.syncer.binary, "/usr/local/bin/imapsync");
    assert_eq!(job.syncer.binary_args, vec!["--debugcontent"]);
    assert_eq!(job.syncer.poll_interval, Duration::from_millis(250));
    assert_eq!(job.syncer.run_timeout, Some(Duration::from_secs(7200)));
    assert_eq!(job.smtp.host, "mail.internal");
    assert_eq!(job.smtp.port, 2525);
    assert_eq!(
        job.options.feedback_addresses(),
        Some(("ops@example.org", "sync@example.org"))
    );
}

#[test]
fn unrecognized_encryption_is_treated_as_absent() {
    let job = load(
        r#"
[host1]
host = "a"
user = "u"
password = "p"
encryption = "quantum"

[host2]
host = "b"
user = "u"
password = "p"
encryption = "TLS"
"#,
    )
    .unwrap();

    assert_eq!(job.host1.encryption, None);
    assert_eq!(job.host2.encryption, Some(Encryption::Tls));
}

#[test]
fn missing_host_section_is_a_validation_error() {
    let result = load(
        r#"
[host1]
host = "a"
user = "u"
password = "p"
"#,
    );

    match result {
        Err(ImapsyncError::Validation(msg)) => {
            assert!(msg.contains("host2"));
            assert!(msg.contains("password"));
        }
        Err(e) => panic!("Expected Validation error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn bad_duration_is_a_config_error() {
    let result = load(&format!(
        r#"
[syncer]
poll_interval = "soon"
{HOSTS}"#
    ));

    match result {
        Err(ImapsyncError::Config(msg)) => assert!(msg.contains("poll_interval")),
        Err(e) => panic!("Expected Config error, got: {:?}", e),
        Ok(_) => panic!("Expected error, got Ok"),
    }
}

#[test]
fn malformed_toml_is_reported() {
    let result = load("[host1\nhost = ");
    assert!(matches!(result, Err(ImapsyncError::TomlError(_))));
}
