//! Errors raised by text filters.
//!
//! Almost every filter is total: any input, including empty input, has a
//! well-defined output. The exceptions are multi-replace, whose header line
//! carries user-written regex source, and line numbering, whose start and
//! step come from the command line.

/// Errors produced by the filters in this crate.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A multi-replace header pattern is not valid regex syntax.
    #[error("invalid pattern `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// Numbering `lines` lines from `start` by `step` runs past `usize::MAX`.
    #[error("line numbers overflow: {lines} lines from {start} by {step}")]
    LineNumberOverflow {
        start: usize,
        step: usize,
        lines: usize,
    },
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;
