//! CN command-line driver.
//!
//! The `cn` binary is a thin argument parser over the command handlers in
//! [`commands`]. Handlers return their output (or a [`CommandError`]) so
//! they can be exercised directly from tests.

pub mod commands;
mod error;

pub use error::CommandError;

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a `tracing` subscriber when `RUST_LOG` is set.
///
/// Safe to call more than once; only the first call has any effect.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}
