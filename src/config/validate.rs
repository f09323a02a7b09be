// src/config/validate.rs

use std::time::Duration;

use crate::config::model::{
    DEFAULT_POLL_INTERVAL, JobFile, RawJobFile, RawSyncerSection, SyncerConfig,
};
use crate::errors::ImapsyncError;
use crate::exec::args::validate_host;

impl TryFrom<RawJobFile> for JobFile {
    type Error = ImapsyncError;

    fn try_from(raw: RawJobFile) -> std::result::Result<Self, Self::Error> {
        let syncer = SyncerConfig::try_from(raw.syncer)?;

        if raw.smtp.host.trim().is_empty() {
            return Err(ImapsyncError::Config(
                "[smtp].host must not be empty".to_string(),
            ));
        }

        validate_host(1, &raw.host1)?;
        validate_host(2, &raw.host2)?;

        Ok(JobFile {
            syncer,
            smtp: raw.smtp,
            host1: raw.host1,
            host2: raw.host2,
            options: raw.feedback,
        })
    }
}

impl TryFrom<RawSyncerSection> for SyncerConfig {
    type Error = ImapsyncError;

    fn try_from(raw: RawSyncerSection) -> std::result::Result<Self, Self::Error> {
        if raw.binary.trim().is_empty() {
            return Err(ImapsyncError::Config(
                "[syncer].binary must not be empty".to_string(),
            ));
        }

        let poll_interval = match raw.poll_interval.as_deref() {
            Some(s) => parse_duration(s).map_err(|e| {
                ImapsyncError::Config(format!("[syncer].poll_interval: {e}"))
            })?,
            None => DEFAULT_POLL_INTERVAL,
        };
        if poll_interval.is_zero() {
            return Err(ImapsyncError::Config(
                "[syncer].poll_interval must be greater than zero".to_string(),
            ));
        }

        let run_timeout = raw
            .run_timeout
            .as_deref()
            .map(parse_duration)
            .transpose()
            .map_err(|e| ImapsyncError::Config(format!("[syncer].run_timeout: {e}")))?;

        Ok(SyncerConfig {
            binary: raw.binary,
            binary_args: raw.binary_args,
            poll_interval,
            run_timeout,
        })
    }
}

/// Milliseconds per unit for the suffixes accepted in durations.
const DURATION_UNITS: &[(&str, u64)] = &[("ms", 1), ("s", 1_000), ("m", 60_000), ("h", 3_600_000)];

/// Parse a duration written as an integer with a unit suffix, e.g. `"250ms"`,
/// `"5s"`, `"2m"` or `"1h"`. Values that overflow are rejected.
pub fn parse_duration(s: &str) -> std::result::Result<Duration, String> {
    let s = s.trim();
    let split = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (digits, suffix) = s.split_at(split);

    if digits.is_empty() {
        return Err(format!("'{s}' does not start with a number"));
    }
    let suffix = suffix.trim().to_ascii_lowercase();
    if suffix.is_empty() {
        return Err(format!("'{s}' has no unit; expected ms, s, m or h"));
    }

    let value: u64 = digits
        .parse()
        .map_err(|e| format!("'{digits}' is not a valid count: {e}"))?;
    let per_unit = DURATION_UNITS
        .iter()
        .find(|(unit, _)| *unit == suffix)
        .map(|(_, millis)| *millis)
        .ok_or_else(|| format!("unknown unit '{suffix}'; expected ms, s, m or h"))?;

    value
        .checked_mul(per_unit)
        .map(Duration::from_millis)
        .ok_or_else(|| format!("'{s}' is too large"))
}
