// src/exec/supervisor.rs

//! Runs one imapsync process from spawn to sealed report.

use std::process::{ExitStatus, Stdio};
use std::time::Duration;

use tokio::process::{Child, Command};
use tokio::time::timeout;
use tracing::{Instrument, debug, info, info_span, trace, warn};

use crate::classify::{ProgressTracker, STARTED_MARKER, SyncState};
use crate::config::SyncerConfig;
use crate::errors::{ImapsyncError, Result};
use crate::exec::args::CommandLine;
use crate::exec::relay::{OutputRelay, RelayPoll};
use crate::exec::reporter::StateReporter;
use crate::notify::{Notifier, compose_feedback};
use crate::report::SyncReport;
use crate::types::{HostSpec, SyncOptions};

/// Supervises sync runs.
///
/// Each call to [`run_sync`](Self::run_sync) owns exactly one child process,
/// one relay task and its own progress tracker; nothing is shared between
/// runs except the configuration, the reporter and the notifier.
pub struct SyncSupervisor<R: StateReporter, N: Notifier> {
    config: SyncerConfig,
    reporter: R,
    notifier: N,
}

impl<R: StateReporter, N: Notifier> SyncSupervisor<R, N> {
    pub fn new(config: SyncerConfig, reporter: R, notifier: N) -> Self {
        Self {
            config,
            reporter,
            notifier,
        }
    }

    /// Sync `host1` into `host2`.
    ///
    /// Hosts are validated before anything is spawned. Once the process is
    /// running, output lines never cause a failure; only spawning, waiting,
    /// the optional run timeout and feedback delivery can.
    pub async fn run_sync(
        &mut self,
        host1: &HostSpec,
        host2: &HostSpec,
        options: &SyncOptions,
    ) -> Result<SyncReport> {
        let command = CommandLine::build(
            &self.config.binary,
            &self.config.binary_args,
            host1,
            host2,
        )?;

        let span = info_span!("imapsync", from = %host1.account(), to = %host2.account());
        self.run_command(command, options).instrument(span).await
    }

    async fn run_command(
        &mut self,
        command: CommandLine,
        options: &SyncOptions,
    ) -> Result<SyncReport> {
        info!(
            command = %command,
            feedback = options.feedback_addresses().is_some(),
            "starting sync"
        );

        let mut child = Command::new(&command.program)
            .args(&command.args)
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| ImapsyncError::Spawn {
                binary: command.program.clone(),
                source,
            })?;

        let stdout = child.stdout.take().ok_or_else(|| {
            ImapsyncError::Other(anyhow::anyhow!("stdout of the sync process was not captured"))
        })?;
        let relay = OutputRelay::spawn(stdout, Some(STARTED_MARKER));

        let supervised = supervise(
            &mut self.reporter,
            self.config.poll_interval,
            &mut child,
            relay,
        );

        let outcome = match self.config.run_timeout {
            Some(limit) => {
                let res = timeout(limit, supervised).await;
                match res {
                    Ok(outcome) => outcome,
                    Err(_elapsed) => {
                        warn!(timeout = ?limit, "sync exceeded run timeout; killing process");
                        if let Err(e) = child.kill().await {
                            warn!(error = %e, "failed to kill sync process");
                        }
                        return Err(ImapsyncError::Timeout(limit));
                    }
                }
            }
            None => supervised.await,
        };
        let (tracker, status) = outcome?;

        let returncode = status.code().unwrap_or(-1);
        let report = tracker.seal(returncode);
        info!(
            returncode,
            ?status,
            "sync completed with {}",
            report.outcome()
        );

        if let Some((to, from)) = options.feedback_addresses() {
            report_transition(&mut self.reporter, SyncState::SendingFeedbackEmail);
            info!(to, from, "sending feedback email");

            let message = compose_feedback(&report, to, from);
            self.notifier.send(&message).await?;
        }

        Ok(report)
    }
}

/// Drain the relay until it is finished and empty, then wait for the child.
async fn supervise<R: StateReporter>(
    reporter: &mut R,
    poll_interval: Duration,
    child: &mut Child,
    mut relay: OutputRelay,
) -> Result<(ProgressTracker, ExitStatus)> {
    let mut tracker = ProgressTracker::new();

    loop {
        match relay.poll(poll_interval).await {
            RelayPoll::Line(line) => {
                debug!(line = line.trim_end(), "imapsync output");
                if let Some(state) = tracker.observe(&line) {
                    report_transition(reporter, state);
                }
            }
            RelayPoll::Idle => trace!("no output within poll interval"),
            RelayPoll::Drained => break,
        }
    }

    let relayed = relay.join().await;
    debug!(lines = relayed, classified = tracker.lines_seen(), "output drained");

    let status = child.wait().await.map_err(ImapsyncError::Wait)?;
    Ok((tracker, status))
}

fn report_transition<R: StateReporter>(reporter: &mut R, state: SyncState) {
    info!(state = %state, "changed state");
    reporter.report_state(&state);
}
