// src/classify/state.rs

use std::fmt;

/// Lifecycle state of a sync run, as observed from imapsync's output.
///
/// The well-known phases get their own variants; any other marker produces
/// an uppercase token wrapped in `Other`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum SyncState {
    Started,
    Calculating,
    Listing,
    Syncing,
    Statistics,
    SendingFeedbackEmail,
    Other(String),
}

impl SyncState {
    /// Map an uppercase token to a state. Known tokens get their variant.
    pub fn from_token(token: &str) -> Self {
        match token {
            "STARTED" => SyncState::Started,
            "CALCULATING" => SyncState::Calculating,
            "LISTING" => SyncState::Listing,
            "SYNCING" => SyncState::Syncing,
            "STATISTICS" => SyncState::Statistics,
            "SENDING_FEEDBACK_EMAIL" => SyncState::SendingFeedbackEmail,
            other => SyncState::Other(other.to_string()),
        }
    }

    /// The token reported to observers.
    pub fn as_token(&self) -> &str {
        match self {
            SyncState::Started => "STARTED",
            SyncState::Calculating => "CALCULATING",
            SyncState::Listing => "LISTING",
            SyncState::Syncing => "SYNCING",
            SyncState::Statistics => "STATISTICS",
            SyncState::SendingFeedbackEmail => "SENDING_FEEDBACK_EMAIL",
            SyncState::Other(token) => token,
        }
    }
}

impl fmt::Display for SyncState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_token())
    }
}
