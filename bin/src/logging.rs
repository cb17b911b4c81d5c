//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Installs a stderr subscriber.
///
/// `RUST_LOG` wins when set; otherwise `verbose` picks the level.
pub(crate) fn init(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // Ignore the error if a subscriber is already installed
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}
