//! Logging setup.
//!
//! Library code only uses the `log` facade. Binaries call [`init`] once to
//! install `env_logger`, which honours `RUST_LOG` and otherwise logs at
//! `info`.

use std::time::Instant;

use log::info;

/// Builder reading `RUST_LOG`, with `default_filter` as fallback.
pub fn builder(default_filter: &str) -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
}

/// Install the global logger. Later calls are ignored.
pub fn init() {
    let _ = builder("info").try_init();
}

/// Log how long `what` took since `started` and return the seconds.
pub fn log_elapsed(what: &str, started: Instant) -> f64 {
    let secs = started.elapsed().as_secs_f64();
    info!("{what} executed in: {secs:.5}s");
    secs
}
