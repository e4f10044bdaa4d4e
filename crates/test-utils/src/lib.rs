//! Shared helpers for pipedag's integration tests.

pub mod builders;

use std::future::Future;
use std::sync::Once;
use std::time::Duration;

use tracing_subscriber::EnvFilter;

/// Upper bound for any single await in an async test.
pub const TEST_TIMEOUT: Duration = Duration::from_secs(5);

static SUBSCRIBER: Once = Once::new();

/// Install a test-captured subscriber once per test binary.
///
/// The filter comes from `RUST_LOG` and falls back to `warn`, so validator
/// debug output stays quiet unless asked for.
pub fn init_tracing() {
    SUBSCRIBER.call_once(|| {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// Await `fut`, failing the test if it takes longer than [`TEST_TIMEOUT`].
pub async fn with_timeout<F: Future>(fut: F) -> F::Output {
    match tokio::time::timeout(TEST_TIMEOUT, fut).await {
        Ok(out) => out,
        Err(_) => panic!("future did not complete within {TEST_TIMEOUT:?}"),
    }
}
