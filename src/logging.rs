//! Logging setup for the `gift-exchange` binary.
//!
//! The library only emits `tracing` events; installing a subscriber is up
//! to the caller.

use tracing_subscriber::{fmt, EnvFilter};

/// Default filter when `RUST_LOG` is unset
pub const DEFAULT_FILTER: &str = "info";

/// Install the global `fmt` subscriber.
///
/// # Environment
///
/// - `RUST_LOG`: filter directives (default: `info`), e.g.
///   `RUST_LOG=family_gift_exchange=debug` to see every draw and rotation
///
/// Logs go to stderr so stdout carries only the pairings.
pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_line_number(true)
        .with_writer(std::io::stderr)
        .init();
}

/// Install a debug-level subscriber that writes through the test harness.
///
/// Safe to call from several tests; only the first call wins.
pub fn init_test() {
    let _ = fmt()
        .with_env_filter(EnvFilter::new("debug"))
        .with_test_writer()
        .try_init();
}
