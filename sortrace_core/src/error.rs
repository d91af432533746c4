use std::error::Error as StdError;
use std::fmt;
use std::result::Result as StdResult;

/// Alias for `Result<T, sortrace_core::Error>`.
pub type Result<T> = StdResult<T, Error>;

/// Invalid-argument errors raised before any work is performed. The sorters
/// themselves are total and never fail.
#[derive(Debug, PartialEq, Eq)]
pub enum Error {
    /// Raised when an array of zero (or otherwise unusable) length is requested.
    InvalidSize,

    /// Raised when an array shape keyword is not one of the known shapes.
    UnknownShape(String),
}

impl StdError for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Error::InvalidSize => f.write_str("requested array size must be at least 1"),
            Error::UnknownShape(ref s) => write!(
                f,
                "unknown array shape `{s}` (expected one of: random, nearly-sorted, reverse, constant)"
            ),
        }
    }
}
