//! Error types for AS number and registry line parsing

use thiserror::Error;

/// Errors raised when text does not follow the AS number or registry line grammar
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// The line does not match `AS<number> <name>`
    #[error("malformed line: {line}")]
    MalformedLine {
        /// The offending line, as passed to the parser
        line: String,
    },

    /// The number token contains something other than ASCII decimal digits
    #[error("invalid AS number: {token:?}")]
    InvalidNumber {
        /// The offending token
        token: String,
    },

    /// The number token has more than one dot
    ///
    /// Dotted notation is exactly `hi.lo`; tokens such as `1.2.3` are not
    /// reinterpreted.
    #[error("invalid AS number {token:?}: more than one '.'")]
    TooManyDots {
        /// The offending token
        token: String,
    },

    /// The value does not fit a 32-bit AS number
    #[error("AS number out of range: {value}")]
    OutOfRange {
        /// The value as written by the caller
        value: String,
    },
}
