// src/classify/classifier.rs

//! Line classification.
//!
//! Marker lines start with [`SENTINEL`]. The fixed phases are matched through
//! an ordered rule table; any other marker derives its state from the second
//! whitespace-separated token of the line (the sentinel being the first).
//! While in `STATISTICS`, ordinary `key: value` lines become statistics.

use super::state::SyncState;

/// Prefix of every imapsync progress marker.
pub const SENTINEL: &str = "++++ ";

/// Line injected ahead of the tool's own output to announce the run.
pub const STARTED_MARKER: &str = "++++ Started";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MarkerPattern {
    Prefix(&'static str),
    Exact(&'static str),
}

impl MarkerPattern {
    fn matches(self, line: &str) -> bool {
        match self {
            MarkerPattern::Prefix(p) => line.starts_with(p),
            MarkerPattern::Exact(p) => line == p,
        }
    }
}

/// Checked in order; the first match wins.
const MARKER_RULES: &[(MarkerPattern, &str)] = &[
    (MarkerPattern::Prefix("++++ Calculating sizes on Host"), "CALCULATING"),
    (MarkerPattern::Exact("++++ Listing folders"), "LISTING"),
    (MarkerPattern::Exact("++++ Looping on each folder"), "SYNCING"),
    (MarkerPattern::Exact("++++ Statistics"), "STATISTICS"),
];

/// What one output line means for the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineClass {
    /// A marker line naming the state the run is now in.
    Transition(SyncState),
    /// A `key: value` line from the statistics block.
    Statistic { key: String, value: String },
    /// A marker without enough tokens to name a state.
    UnnamedMarker,
    /// Anything else.
    Ignored,
}

pub fn is_marker(line: &str) -> bool {
    line.starts_with(SENTINEL)
}

/// Classify a single (already trimmed) line given the current state.
pub fn classify(line: &str, current: Option<&SyncState>) -> LineClass {
    if is_marker(line) {
        return classify_marker(line);
    }

    if current == Some(&SyncState::Statistics) {
        if let Some((key, value)) = line.split_once(':') {
            return LineClass::Statistic {
                key: key.trim().to_string(),
                value: value.trim().to_string(),
            };
        }
    }

    LineClass::Ignored
}

fn classify_marker(line: &str) -> LineClass {
    if let Some((_, token)) = MARKER_RULES.iter().find(|(p, _)| p.matches(line)) {
        return LineClass::Transition(SyncState::from_token(token));
    }

    match line.split_whitespace().nth(1) {
        Some(token) => LineClass::Transition(SyncState::from_token(&token.to_uppercase())),
        None => LineClass::UnnamedMarker,
    }
}
