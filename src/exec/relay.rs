// src/exec/relay.rs

//! Background forwarding of the child's stdout into an in-memory queue.
//!
//! The relay task is the single producer, the supervisor the single consumer.
//! Lines are forwarded verbatim (newline included) and in order. Output that
//! is not valid UTF-8 is decoded lossily rather than ending the stream.

use std::time::Duration;

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::timeout;
use tracing::{debug, warn};

/// Result of one bounded wait on the relay queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RelayPoll {
    /// The next line, in emission order.
    Line(String),
    /// Nothing arrived within the wait budget but the relay is still reading.
    Idle,
    /// The relay has finished and every line it produced has been handed out.
    Drained,
}

/// Handle on a running relay task and the queue it feeds.
pub struct OutputRelay {
    lines: mpsc::UnboundedReceiver<String>,
    handle: JoinHandle<usize>,
}

impl OutputRelay {
    /// Start relaying `stream`. When `seed` is given it is queued before any
    /// line read from the stream.
    pub fn spawn<R>(stream: R, seed: Option<&str>) -> Self
    where
        R: AsyncRead + Unpin + Send + 'static,
    {
        let (tx, lines) = mpsc::unbounded_channel::<String>();

        if let Some(seed) = seed {
            // The receiver is alive in this scope, so this cannot fail.
            let _ = tx.send(format!("{seed}\n"));
        }

        let handle = tokio::spawn(relay_lines(stream, tx));

        Self { lines, handle }
    }

    /// Wait up to `wait` for the next line.
    pub async fn poll(&mut self, wait: Duration) -> RelayPoll {
        match timeout(wait, self.lines.recv()).await {
            Ok(Some(line)) => RelayPoll::Line(line),
            Ok(None) => RelayPoll::Drained,
            Err(_elapsed) => {
                if !self.handle.is_finished() {
                    return RelayPoll::Idle;
                }
                // The relay may have pushed its last line right as the wait
                // expired.
                match self.lines.try_recv() {
                    Ok(line) => RelayPoll::Line(line),
                    Err(_) => RelayPoll::Drained,
                }
            }
        }
    }

    /// Wait for the relay task and return how many lines it read from the
    /// stream (the seed line is not counted).
    pub async fn join(self) -> usize {
        drop(self.lines);
        match self.handle.await {
            Ok(count) => count,
            Err(e) => {
                warn!(error = %e, "output relay task did not complete cleanly");
                0
            }
        }
    }
}

async fn relay_lines<R>(stream: R, tx: mpsc::UnboundedSender<String>) -> usize
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(stream);
    let mut buf = Vec::new();
    let mut count = 0usize;

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = String::from_utf8_lossy(&buf).into_owned();
                if tx.send(line).is_err() {
                    debug!("output queue closed by consumer; stopping relay");
                    break;
                }
                count += 1;
            }
            Err(e) => {
                warn!(error = %e, "error reading sync output; treating as end of stream");
                break;
            }
        }
    }

    // Dropping the reader closes the pipe; dropping `tx` marks the queue done.
    drop(reader);
    debug!(lines = count, "output relay finished");
    count
}
