//! Logging initialization (tracing/tracing-subscriber).
//!
//! - `STEM_GUESS_LOG` sets the filter (e.g. "debug" or
//!   "info,stem_guess::engine=trace"). Defaults to the level the caller
//!   passes, so interactive play can stay quiet.
//! - `STEM_GUESS_LOG_FORMAT=json` switches to JSON output.
//!
//! Logs go to stderr so they never interleave with the game on stdout.

use tracing_subscriber::EnvFilter;

/// Install the global subscriber. Call once, from the binary.
pub fn init_tracing(default_directive: &str) {
    let filter = EnvFilter::try_from_env("STEM_GUESS_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_directive));

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    match std::env::var("STEM_GUESS_LOG_FORMAT").as_deref() {
        Ok("json") => builder.json().init(),
        _ => builder.init(),
    }
}
