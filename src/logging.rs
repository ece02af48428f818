//! Logger bootstrap for the demo binary and tests.
//!
//! Movement logs under the `tilestep` target: accepted and rejected requests
//! and arrivals at debug level, per-frame interpolation at trace level.
use env_logger::{Builder, Env};
use log::LevelFilter;

/// Default filter directive used when `RUST_LOG` is unset.
///
/// `verbose` raises only this crate's target to trace so per-frame progress
/// shows without flooding the output with Bevy internals.
///
/// # Examples
/// ```
/// use tilestep::logging::default_filter;
/// assert_eq!(default_filter(false), "info");
/// assert_eq!(default_filter(true), "info,tilestep=trace");
/// ```
#[must_use]
pub fn default_filter(verbose: bool) -> String {
    if verbose {
        format!("{},{}={}", LevelFilter::Info, env!("CARGO_CRATE_NAME"), LevelFilter::Trace)
            .to_lowercase()
    } else {
        LevelFilter::Info.to_string().to_lowercase()
    }
}

/// Initializes the global logger, honouring `RUST_LOG` over
/// [`default_filter`].
pub fn init(verbose: bool) {
    let env = Env::default().default_filter_or(default_filter(verbose));
    if Builder::from_env(env).try_init().is_err() {
        log::debug!("logger already initialised");
    }
}
