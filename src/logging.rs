//! Tracing subscriber setup.

use tracing_subscriber::EnvFilter;

/// Environment variable holding an explicit log filter (EnvFilter syntax).
pub const LOG_ENV: &str = "NEWYEAR_LOG";

/// Filter directive for a `-v` count.
pub fn level_for_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the global subscriber, logging to stderr.
///
/// `NEWYEAR_LOG` takes precedence over the verbosity flag. Calling this
/// twice is harmless; the second call is ignored.
pub fn init(verbose: u8) {
    let filter = EnvFilter::try_from_env(LOG_ENV)
        .unwrap_or_else(|_| EnvFilter::new(level_for_verbosity(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(atty::is(atty::Stream::Stderr))
        .with_target(false)
        .try_init();
}
