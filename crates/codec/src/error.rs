//! Error types for the codec operations.

use thiserror::Error;

/// Result type with the `byte-codec` crate's [`CodecError`] type.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors returned by the conversion and padding operations.
///
/// Every operation validates its input up front, so an error always means no
/// output was produced.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodecError {
    /// A character in a hex string is not `0-9`, `a-f` or `A-F`.
    ///
    /// `index` is the character's position in the caller's input.
    #[error("invalid hex digit {character:?} at index {index}")]
    InvalidHexDigit { character: char, index: usize },

    /// The block size is zero or does not fit in a single padding byte.
    #[error("invalid block size {0}: must be between 1 and 255")]
    InvalidBlockSize(usize),

    /// Padded data failed PKCS#7 verification.
    #[error("invalid padding: {0}")]
    InvalidPadding(&'static str),

    /// Decoded data has the wrong length for a fixed-size destination.
    #[error("invalid length (found {found} bytes, expected {expected} bytes)")]
    InvalidLength { found: usize, expected: usize },

    /// A legacy buffer has no terminating zero byte.
    #[error("buffer is not NUL-terminated")]
    MissingNulTerminator,

    /// Text passed to a NUL-terminated conversion contains a NUL.
    #[error("interior NUL byte at position {position}")]
    InteriorNul { position: usize },
}

impl CodecError {
    /// Returns `true` when the error was caused by the data being converted,
    /// and `false` when it was caused by an operation parameter.
    pub fn is_input_error(&self) -> bool {
        !matches!(self, CodecError::InvalidBlockSize(_))
    }
}
