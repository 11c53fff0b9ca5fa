// src/log.rs
use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

use crate::config::consts::DEFAULT_LOG_FILTER;

static INIT: Once = Once::new();

/// Install the global subscriber. Safe to call more than once.
///
/// Honors `RUST_LOG`; falls back to `DEFAULT_LOG_FILTER`. Lines go to stderr
/// so `--dry-run` output on stdout stays clean JSON.
pub fn init() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

        let _ = fmt()
            .with_env_filter(filter)
            .with_timer(fmt::time::uptime())
            .with_target(false)
            .with_writer(std::io::stderr)
            .try_init();
    });
}

/// Info-level logging
#[macro_export]
macro_rules! logf {
    ($($arg:tt)*) => {
        ::tracing::info!($($arg)*)
    };
}

/// Debug-level logging
#[macro_export]
macro_rules! logd {
    ($($arg:tt)*) => {
        ::tracing::debug!($($arg)*)
    };
}

/// Error-level logging
#[macro_export]
macro_rules! loge {
    ($($arg:tt)*) => {
        ::tracing::error!($($arg)*)
    };
}
