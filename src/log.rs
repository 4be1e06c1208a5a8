//! Logging setup
//!
//! Core modules emit `tracing` events; the binary installs a subscriber that
//! honours `RUST_LOG` and otherwise falls back to `debug` for `--verbose`,
//! `off` without it.

use tracing_subscriber::{
    fmt, prelude::__tracing_subscriber_SubscriberExt, util::SubscriberInitExt, EnvFilter,
};

pub fn init_logging(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr).without_time())
        .with(filter)
        .init();
}

/// Filter used when `RUST_LOG` is unset or invalid
fn default_directive(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "off"
    }
}
