//! Diagnostic logging to stderr.
//!
//! Secrets never go through the logger: only lengths, counts and paths.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// `RUST_LOG` is honoured (default `warn`); `verbose` forces debug.
pub fn init(verbose: bool) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if verbose {
        builder.filter_level(LevelFilter::Debug);
    }
    builder
        .format_timestamp_secs()
        .format_module_path(true)
        .format_target(false);
    // A second init (tests) is harmless.
    let _ = builder.try_init();
}
