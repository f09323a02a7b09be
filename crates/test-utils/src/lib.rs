pub mod builders;
pub mod fakes;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use imapsync_runner::logging::LOG_ENV_VAR;
use tracing_subscriber::{EnvFilter, fmt};

/// Upper bound for one supervised run in a test, fake tool included.
pub const SYNC_TEST_DEADLINE: Duration = Duration::from_secs(10);

const TEST_LOG_DEFAULT: &str = "imapsync_runner=debug";

static INIT: Once = Once::new();

/// Capture supervisor logs in tests.
///
/// Directives come from `IMAPSYNC_RUNNER_LOG`, then `RUST_LOG`, and default
/// to debug output for this crate only. Output goes through the test writer,
/// so it is shown for failing tests (or with `--nocapture`).
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = test_filter(
            std::env::var(LOG_ENV_VAR)
                .ok()
                .or_else(|| std::env::var("RUST_LOG").ok())
                .as_deref(),
        );

        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .try_init();
    });
}

fn test_filter(directives: Option<&str>) -> EnvFilter {
    directives
        .filter(|d| !d.trim().is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(TEST_LOG_DEFAULT))
}

/// Await a sync (or anything else) and fail the test if it outlives
/// [`SYNC_TEST_DEADLINE`]; a hung fake tool must not hang the suite.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: Future<Output = T>,
{
    match tokio::time::timeout(SYNC_TEST_DEADLINE, f).await {
        Ok(value) => value,
        Err(_) => panic!("sync did not finish within {SYNC_TEST_DEADLINE:?}"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unusable_directives_fall_back_to_crate_debug() {
        assert_eq!(test_filter(None).to_string(), TEST_LOG_DEFAULT);
        assert_eq!(test_filter(Some("  ")).to_string(), TEST_LOG_DEFAULT);
        assert_eq!(
            test_filter(Some("imapsync_runner=loud")).to_string(),
            TEST_LOG_DEFAULT
        );
    }

    #[tokio::test]
    async fn with_timeout_returns_the_value() {
        assert_eq!(with_timeout(async { 7 }).await, 7);
    }
}
