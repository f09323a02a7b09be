// src/classify/tracker.rs

//! Per-run progress state fed by classified lines.

use std::collections::BTreeMap;

use tracing::trace;

use super::classifier::{LineClass, classify};
use super::state::SyncState;
use crate::report::SyncReport;

/// Holds the current state and the statistics collected so far.
///
/// Owned by the supervisor for the lifetime of one run; the relay never
/// touches it.
#[derive(Debug, Default)]
pub struct ProgressTracker {
    state: Option<SyncState>,
    statistics: BTreeMap<String, String>,
    lines_seen: usize,
}

impl ProgressTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> Option<&SyncState> {
        self.state.as_ref()
    }

    pub fn statistics(&self) -> &BTreeMap<String, String> {
        &self.statistics
    }

    pub fn lines_seen(&self) -> usize {
        self.lines_seen
    }

    /// Feed one raw line. Trailing whitespace is stripped first.
    ///
    /// Returns the new state when the line moved the run into a different
    /// state; re-announcing the current state returns `None`.
    pub fn observe(&mut self, raw: &str) -> Option<SyncState> {
        let line = raw.trim_end();
        self.lines_seen += 1;
        trace!(line, "classifying");

        match classify(line, self.state.as_ref()) {
            LineClass::Transition(next) => {
                if self.state.as_ref() == Some(&next) {
                    return None;
                }
                self.state = Some(next.clone());
                Some(next)
            }
            LineClass::Statistic { key, value } => {
                self.statistics.insert(key, value);
                None
            }
            // Trimmed lines never reach the unnamed-marker case; a bare
            // sentinel is not a marker.
            LineClass::UnnamedMarker | LineClass::Ignored => None,
        }
    }

    /// Attach the exit code and hand over the finished report.
    pub fn seal(self, returncode: i32) -> SyncReport {
        SyncReport::new(self.statistics, returncode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed(tracker: &mut ProgressTracker, lines: &[&str]) -> Vec<SyncState> {
        lines.iter().filter_map(|l| tracker.observe(l)).collect()
    }

    #[test]
    fn full_run_reports_each_phase_once() {
        let mut tracker = ProgressTracker::new();
        let states = feed(
            &mut tracker,
            &[
                "++++ Started\n",
                "++++ Calculating sizes on Host1\n",
                "INBOX size: 1234\n",
                "++++ Calculating sizes on Host2\n",
                "++++ Listing folders\n",
                "++++ Looping on each folder\n",
                "msg INBOX/1 copied\n",
                "++++ Statistics\n",
                "Transferred: 42\n",
            ],
        );

        assert_eq!(
            states,
            vec![
                SyncState::Started,
                SyncState::Calculating,
                SyncState::Listing,
                SyncState::Syncing,
                SyncState::Statistics,
            ]
        );
        assert_eq!(tracker.lines_seen(), 9);

        let report = tracker.seal(0);
        assert_eq!(report.get("Transferred"), Some("42"));
        assert_eq!(report.statistics().len(), 1);
        assert_eq!(report.returncode(), 0);
    }

    #[test]
    fn last_statistic_value_wins() {
        let mut tracker = ProgressTracker::new();
        feed(&mut tracker, &["++++ Statistics", "Folders: 3", "Folders: 5"]);
        assert_eq!(tracker.statistics().get("Folders").map(String::as_str), Some("5"));
    }

    #[test]
    fn bare_sentinel_line_keeps_state() {
        let mut tracker = ProgressTracker::new();
        tracker.observe("++++ Looping on each folder");
        assert_eq!(tracker.observe("++++ "), None);
        assert_eq!(tracker.observe("++++ \t\n"), None);
        assert_eq!(tracker.observe("++++"), None);
        assert_eq!(tracker.state(), Some(&SyncState::Syncing));
        assert_eq!(tracker.lines_seen(), 4);
    }

    #[test]
    fn statistics_before_marker_are_dropped() {
        let mut tracker = ProgressTracker::new();
        feed(&mut tracker, &["Transferred: 1", "++++ Syncing now"]);
        assert!(tracker.statistics().is_empty());
        assert_eq!(tracker.seal(1).to_map().len(), 1);
    }
}
