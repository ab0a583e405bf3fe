//! Tracing initialization and configuration.

use std::sync::Once;

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

static INIT: Once = Once::new();

/// Environment variable holding the log filter directives.
pub const LOG_ENV_VAR: &str = "COMVERTER_LOG";

/// Filter used when `COMVERTER_LOG` is unset, empty or invalid.
pub const DEFAULT_FILTER: &str = "comverter_core=info";

/// Build the filter from `COMVERTER_LOG`.
pub fn env_filter() -> EnvFilter {
    filter_from(std::env::var(LOG_ENV_VAR).ok().as_deref())
}

/// Build a filter from directives, e.g. `comverter_core::registry=debug`,
/// falling back to [`DEFAULT_FILTER`] when they are missing or do not parse.
pub fn filter_from(directives: Option<&str>) -> EnvFilter {
    directives
        .map(str::trim)
        .filter(|d| !d.is_empty())
        .and_then(|d| EnvFilter::try_new(d).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_FILTER))
}

/// Initialize the comverter tracing/logging system.
///
/// Reads `COMVERTER_LOG` through [`env_filter`]. Safe to call more than
/// once; only the first call installs a subscriber.
pub fn init_tracing() {
    INIT.call_once(|| {
        let installed = tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true),
            )
            .with(env_filter())
            .try_init();

        if installed.is_err() {
            tracing::debug!("global tracing subscriber already set, keeping it");
        }
    });
}
