// src/exec/mod.rs

//! Process execution layer.
//!
//! - [`args`] validates hosts and builds the imapsync command line.
//! - [`relay`] drains the child's stdout into a queue on a background task.
//! - [`reporter`] is the side channel for state changes.
//! - [`supervisor`] spawns the process, classifies its output, waits for it
//!   and seals the report.

pub mod args;
pub mod relay;
pub mod reporter;
pub mod supervisor;

pub use args::{CommandLine, FIXED_FLAGS, build_host_args, validate_host};
pub use relay::{OutputRelay, RelayPoll};
pub use reporter::{ChannelReporter, StateReporter, TracingReporter};
pub use supervisor::SyncSupervisor;
