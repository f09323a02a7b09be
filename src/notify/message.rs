// src/notify/message.rs

use crate::report::SyncReport;

/// Subject prefix of every feedback email.
pub const SUBJECT_PREFIX: &str = "IMAP Sync completed with";

/// A plain-text feedback email, ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackMessage {
    pub from: String,
    pub to: String,
    pub subject: String,
    pub body: String,
}

/// Summarize a sealed report as an email from `from` to `to`.
pub fn compose_feedback(report: &SyncReport, to: &str, from: &str) -> FeedbackMessage {
    FeedbackMessage {
        from: from.to_string(),
        to: to.to_string(),
        subject: format!("{SUBJECT_PREFIX} {}", report.outcome()),
        body: format!("{report}\n"),
    }
}
