//! Diagnostic logging setup
//!
//! Logs go to stderr so stdout stays reserved for command output
//! (`library-versions --print` is meant to be captured by scripts).

use tracing_subscriber::filter::EnvFilter;

/// Filter used when `--verbose` is given
const VERBOSE_FILTER: &str = "libver=debug";

/// Filter used when neither `--verbose` nor `RUST_LOG` is set
const DEFAULT_FILTER: &str = "warn";

/// Build the log filter.
///
/// `--verbose` wins over `RUST_LOG`; an unset or invalid `RUST_LOG`
/// falls back to `warn`.
pub fn filter(verbose: bool) -> EnvFilter {
    if verbose {
        return EnvFilter::new(VERBOSE_FILTER);
    }
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Install the global subscriber.
///
/// Calling this twice is harmless: the second subscriber is dropped.
pub fn init(verbose: bool) {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter(verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .try_init();
}
