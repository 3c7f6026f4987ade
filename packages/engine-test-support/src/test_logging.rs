//! Tracing setup shared by the engine's unit and integration test binaries.

use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INSTALLED: OnceCell<()> = OnceCell::new();

/// Filter used when neither `TEST_LOG` nor `RUST_LOG` parses.
pub const QUIET: &str = "warn";

/// Install a test-writer subscriber once per binary.
///
/// `TEST_LOG` wins over `RUST_LOG`; a malformed value falls through to the
/// next source rather than failing the test run.
pub fn init() {
    INSTALLED.get_or_init(|| {
        let filter = EnvFilter::try_from_env("TEST_LOG")
            .or_else(|_| EnvFilter::try_from_default_env())
            .unwrap_or_else(|_| EnvFilter::new(QUIET));

        // Another subscriber may already be global; keep it.
        let _ = fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .with_target(false)
            .compact()
            .try_init();
    });
}
