// SPDX-License-Identifier: MIT
//
// Logging setup. Everything goes to stderr: stdout belongs to the filter
// output that the editor pastes back.

use env_logger::{Builder, Env, Target};
use log::{LevelFilter, SetLoggerError};

/// Level for a `-v` count: warn, then info, debug, trace.
#[must_use]
pub const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Install the global logger. `RUST_LOG`, when set, overrides `-v`.
///
/// # Errors
///
/// Fails if a logger is already installed.
pub fn init(verbosity: u8) -> Result<(), SetLoggerError> {
    Builder::new()
        .filter_level(level_for(verbosity))
        .parse_env(Env::default())
        .format_timestamp(None)
        .target(Target::Stderr)
        .try_init()
}
