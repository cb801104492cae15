//! Subscriber setup for hosts that want to see textmine's events.
//!
//! The crate emits `debug` events when a corpus is parsed or a batch is
//! looked up, and `trace` events for every window or merged-token hit. None
//! of that is visible until a subscriber is installed, which these helpers do
//! at most once per process.

use std::sync::Once;

use ::tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Filter used when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "textmine=info";

static INIT: Once = Once::new();

/// Install a compact subscriber filtered by `RUST_LOG`, or [`DEFAULT_FILTER`].
///
/// Returns `true` only for the call that installed it.
pub fn init() -> bool {
    init_with_filter(DEFAULT_FILTER)
}

/// Like [`init`], with a caller-chosen fallback filter such as
/// `"textmine=trace"` to log every match.
///
/// Later calls, or a host that already set a global subscriber, leave the
/// existing subscriber in place and return `false`.
pub fn init_with_filter(default_filter: &str) -> bool {
    let mut installed = false;

    INIT.call_once(|| {
        let filter =
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

        installed = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().compact())
            .try_init()
            .is_ok();

        if installed {
            info!(filter = default_filter, "textmine logging initialized");
        }
    });

    installed
}
