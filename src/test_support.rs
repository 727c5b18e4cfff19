// SPDX-License-Identifier: MIT OR Apache-2.0
//! Shared helpers for the crate's tests.

use std::sync::Once;
use std::time::Duration;

static INIT_LOGGING: Once = Once::new();

/// Routes the crate's `tracing` events to the test output at trace level.
pub(crate) fn init_test_logging() {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_test_writer()
            .with_thread_ids(true)
            .with_target(true)
            .with_ansi(false)
            .try_init();
    });
}

/// Upper bound for "eventually" in the liveness tests.
pub(crate) const LIVENESS_BOUND: Duration = Duration::from_secs(30);
