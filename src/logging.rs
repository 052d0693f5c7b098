//! Tracing subscriber setup shared by both binaries.
//!
//! Logs always go to stderr: stdout carries the JSON documents that
//! Ansible and the scheduler parse.

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Initialize the tracing subscriber for logging.
///
/// Log level is controlled by:
/// 1. `--debug` flag sets level to DEBUG
/// 2. `RUST_LOG` environment variable (if set)
/// 3. `default_level` otherwise
pub fn init_tracing(debug: bool, default_level: &str) {
    let filter = if debug {
        EnvFilter::new("dotfacts=debug")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(format!("dotfacts={}", default_level)))
    };

    // A second init (e.g. in tests) keeps the first subscriber.
    let _ = tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(filter)
        .try_init();
}
