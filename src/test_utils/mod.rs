//! Test utilities
//!
//! Available to unit tests and, through the `test-utils` feature, to the
//! integration suite.
//!
//! - [`init_test_logging`] - one-time tracing setup using the test writer
//! - [`BuildModelBuilder`] - fluent construction of build models
//! - [`MockFetcher`] - in-memory [`IndexFetcher`](crate::fetch::IndexFetcher)
//! - [`LogCapture`] - assertions on emitted log lines
//! - [`write_javadoc_jar`] - javadoc archive fixtures

pub mod builder;
pub mod fetcher;
pub mod fixtures;
pub mod logs;

pub use builder::BuildModelBuilder;
pub use fetcher::MockFetcher;
pub use fixtures::{seed_index_file, write_javadoc_jar};
pub use logs::LogCapture;

use std::sync::Once;
use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Global flag to ensure logging is only initialized once in tests
static INIT_LOGGING: Once = Once::new();

/// Initialize logging for tests.
///
/// Only the first call has an effect. Uses `level` if given, otherwise
/// `RUST_LOG`; with neither, tests run without a subscriber.
///
/// ```bash
/// RUST_LOG=javadoc_links=debug cargo test
/// ```
pub fn init_test_logging(level: Option<Level>) {
    INIT_LOGGING.call_once(|| {
        let filter = if let Some(level) = level {
            EnvFilter::new(level.to_string())
        } else if std::env::var("RUST_LOG").is_ok() {
            EnvFilter::from_default_env()
        } else {
            return;
        };

        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .with_target(true)
            .with_thread_ids(false)
            .with_ansi(true)
            .try_init();
    });
}
