// src/lib.rs

pub mod classify;
pub mod cli;
pub mod config;
pub mod errors;
pub mod exec;
pub mod logging;
pub mod notify;
pub mod report;
pub mod types;

use std::path::PathBuf;

use anyhow::{Result, bail};
use tracing::{debug, info, warn};

use crate::cli::CliArgs;
use crate::config::{JobFile, load_and_validate};
use crate::exec::{CommandLine, SyncSupervisor, TracingReporter};
use crate::notify::SmtpNotifier;

pub use crate::classify::SyncState;
pub use crate::errors::{ImapsyncError, Result as ImapsyncResult};
pub use crate::report::SyncReport;
pub use crate::types::{Encryption, HostSpec, SyncOptions};

/// High-level entry point used by `main.rs`.
///
/// Loads the job file, then either prints a dry run or runs one sync and
/// prints its report. Returns the exit code the binary should use: the
/// sync process's own return code.
pub async fn run(args: CliArgs) -> Result<i32> {
    let config_path = PathBuf::from(&args.config);
    let job = load_and_validate(&config_path)?;

    if args.dry_run {
        print_dry_run(&job)?;
        return Ok(0);
    }

    let notifier = SmtpNotifier::new(job.smtp.host.clone(), job.smtp.port);
    let mut supervisor = SyncSupervisor::new(job.syncer.clone(), TracingReporter, notifier);

    // Ctrl-C drops the run; the child is killed on drop.
    let report = tokio::select! {
        res = supervisor.run_sync(&job.host1, &job.host2, &job.options) => res?,
        signal = tokio::signal::ctrl_c() => {
            if let Err(e) = signal {
                warn!(error = %e, "failed to listen for Ctrl+C");
            }
            bail!("sync interrupted");
        }
    };

    info!(returncode = report.returncode(), "sync finished");
    println!("{report}");

    Ok(report.returncode())
}

/// Print the validated job: command line with passwords masked, plus
/// timing and feedback settings.
fn print_dry_run(job: &JobFile) -> Result<()> {
    let command = CommandLine::build(
        &job.syncer.binary,
        &job.syncer.binary_args,
        &job.host1,
        &job.host2,
    )?;

    println!("imapsync-runner dry-run");
    println!("  command: {command}");
    println!("  poll_interval = {:?}", job.syncer.poll_interval);
    match job.syncer.run_timeout {
        Some(limit) => println!("  run_timeout = {limit:?}"),
        None => println!("  run_timeout = none"),
    }
    match job.options.feedback_addresses() {
        Some((to, from)) => println!(
            "  feedback: {from} -> {to} via {}:{}",
            job.smtp.host, job.smtp.port
        ),
        None => println!("  feedback: disabled"),
    }

    debug!("dry-run complete (no execution)");
    Ok(())
}
