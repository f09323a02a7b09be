// src/report.rs

//! The sealed result of a sync run.

use std::collections::BTreeMap;
use std::fmt;

/// Key under which the exit code appears in [`SyncReport::to_map`].
pub const RETURNCODE_KEY: &str = "returncode";

/// Statistics reported by imapsync plus the process exit code.
///
/// Built by [`ProgressTracker::seal`](crate::classify::ProgressTracker::seal)
/// once the process has exited; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncReport {
    statistics: BTreeMap<String, String>,
    returncode: i32,
}

impl SyncReport {
    pub fn new(statistics: BTreeMap<String, String>, returncode: i32) -> Self {
        Self {
            statistics,
            returncode,
        }
    }

    pub fn returncode(&self) -> i32 {
        self.returncode
    }

    pub fn success(&self) -> bool {
        self.returncode == 0
    }

    pub fn outcome(&self) -> &'static str {
        if self.success() { "success" } else { "failure" }
    }

    pub fn statistics(&self) -> &BTreeMap<String, String> {
        &self.statistics
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.statistics.get(key).map(String::as_str)
    }

    /// Flat view with `returncode` injected. The exit code overrides any
    /// statistic that happens to share its key.
    pub fn to_map(&self) -> BTreeMap<String, String> {
        let mut map = self.statistics.clone();
        map.insert(RETURNCODE_KEY.to_string(), self.returncode.to_string());
        map
    }
}

/// One `key: value` line per statistic, then the return code.
impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (key, value) in &self.statistics {
            if key != RETURNCODE_KEY {
                writeln!(f, "{key}: {value}")?;
            }
        }
        write!(f, "{RETURNCODE_KEY}: {}", self.returncode)
    }
}
