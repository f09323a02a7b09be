// src/exec/reporter.rs

//! Side channel through which state changes leave the supervisor.
//!
//! Whoever runs a sync (a task queue worker, the CLI, a test) decides what
//! observers see by choosing a [`StateReporter`]:
//! - any `FnMut(&SyncState)` closure,
//! - [`ChannelReporter`], for observers polling from another task,
//! - [`TracingReporter`], which only logs.

use tokio::sync::mpsc;
use tracing::{debug, info};

use crate::classify::SyncState;

/// Receives every state change of a run, in the order they happen.
pub trait StateReporter: Send {
    fn report_state(&mut self, state: &SyncState);
}

impl<F> StateReporter for F
where
    F: FnMut(&SyncState) + Send,
{
    fn report_state(&mut self, state: &SyncState) {
        self(state)
    }
}

/// Forwards state changes to an unbounded channel.
#[derive(Debug, Clone)]
pub struct ChannelReporter {
    tx: mpsc::UnboundedSender<SyncState>,
}

impl ChannelReporter {
    /// Create a reporter and the receiving end observers read from.
    pub fn channel() -> (Self, mpsc::UnboundedReceiver<SyncState>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx }, rx)
    }
}

impl StateReporter for ChannelReporter {
    fn report_state(&mut self, state: &SyncState) {
        if self.tx.send(state.clone()).is_err() {
            debug!(state = %state, "state observer dropped; change not delivered");
        }
    }
}

/// Reporter that only emits a log event per state change.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingReporter;

impl StateReporter for TracingReporter {
    fn report_state(&mut self, state: &SyncState) {
        info!(state = %state, "sync state");
    }
}
