//! Console logging using env_logger
//!
//! Filter defaults to `info` (`debug` with `--verbose`); `RUST_LOG` overrides
//! both. Timestamps are left out since CI runners prefix their own.

use env_logger::Env;

pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };

    env_logger::Builder::from_env(Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .format_target(false)
        .init();
}
