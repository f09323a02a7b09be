use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use imapsync_runner::classify::SyncState;
use imapsync_runner::errors::{ImapsyncError, Result};
use imapsync_runner::exec::StateReporter;
use imapsync_runner::notify::{FeedbackMessage, Notifier};

/// A reporter that records every state it is given.
#[derive(Clone, Default)]
pub struct RecordingReporter {
    states: Arc<Mutex<Vec<SyncState>>>,
}

impl RecordingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn states(&self) -> Vec<SyncState> {
        self.states.lock().unwrap().clone()
    }

    pub fn tokens(&self) -> Vec<String> {
        self.states().iter().map(|s| s.to_string()).collect()
    }
}

impl StateReporter for RecordingReporter {
    fn report_state(&mut self, state: &SyncState) {
        self.states.lock().unwrap().push(state.clone());
    }
}

/// A notifier that:
/// - records each message instead of sending it
/// - optionally fails every delivery.
#[derive(Clone, Default)]
pub struct RecordingNotifier {
    sent: Arc<Mutex<Vec<FeedbackMessage>>>,
    fail: bool,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn sent(&self) -> Vec<FeedbackMessage> {
        self.sent.lock().unwrap().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn send<'a>(
        &'a mut self,
        message: &'a FeedbackMessage,
    ) -> Pin<Box<dyn Future<Output = Result<()>> + Send + 'a>> {
        let sent = Arc::clone(&self.sent);
        let fail = self.fail;

        Box::pin(async move {
            sent.lock().unwrap().push(message.clone());
            if fail {
                return Err(ImapsyncError::Other(anyhow::anyhow!(
                    "relay refused connection"
                )));
            }
            Ok(())
        })
    }
}
