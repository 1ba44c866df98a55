use thiserror::Error;

/// Errors raised by sequence operations.
///
/// Only positional operations can fail; everything else is total.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// An index was not a valid position in the sequence.
    ///
    /// For lookup, update and removal the index must be below the length.
    /// For insertion it may also be equal to the length.
    #[error("index {index} out of range for sequence of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
