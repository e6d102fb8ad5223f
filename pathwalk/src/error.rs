//! Error types for the pathwalk library.
//!
//! Every operation either fully succeeds or fails as a whole; there are no
//! partial results, and because all operations are pure and deterministic
//! there is no retry policy. "Missing" results (a path without a basename,
//! an out-of-range segment index) are expressed as `Option`, not errors.

use thiserror::Error;

/// Result type alias for operations that may fail with a pathwalk error.
///
/// # Examples
///
/// ```
/// use pathwalk::{Result, Style};
///
/// fn build() -> Result<String> {
///     pathwalk::join(&["a", "b"], Style::Unix)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The error type for pathwalk operations.
#[derive(Debug, Error)]
pub enum Error {
    /// An operation was invoked with invalid arguments.
    #[error("invalid argument: {message}")]
    Argument {
        /// A description of what was wrong with the arguments.
        message: String,
    },

    /// A computed result exceeded a configured output cap.
    ///
    /// Output buffers grow to the size of the actual result; this error is
    /// only surfaced by consumers that configure a hard cap, and never by
    /// silent truncation.
    #[error("result length {length} exceeds maximum path length {max}")]
    Overflow {
        /// Length in bytes of the computed result.
        length: usize,
        /// The configured maximum length.
        max: usize,
    },

    /// Memory could not be reserved for a result buffer.
    #[error("out of memory while building a path result")]
    OutOfMemory(#[from] std::collections::TryReserveError),
}

impl Error {
    /// Check if this error reports invalid arguments.
    #[must_use]
    pub fn is_argument(&self) -> bool {
        matches!(self, Self::Argument { .. })
    }

    /// Check if this error reports an exceeded output cap.
    #[must_use]
    pub fn is_overflow(&self) -> bool {
        matches!(self, Self::Overflow { .. })
    }
}
