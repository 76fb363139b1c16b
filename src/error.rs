//! Error types for reader operations.

use core::fmt;
use core::str::Utf8Error;

/// Errors produced by [`Reader`](crate::Reader) operations.
///
/// Failed scalar and string reads leave the cursor where it was; failed
/// array reads may leave it advanced through the elements that decoded
/// successfully (see [`Reader`](crate::Reader) for the exact policy).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadError {
    /// A start position or seek target lies outside the buffer.
    OutOfRange {
        /// The requested cursor position.
        position: usize,
        /// Total length of the buffer.
        length: usize,
    },
    /// A read needs more bytes than remain before the end of the buffer.
    OutOfBounds {
        /// Bytes the read required.
        needed: usize,
        /// Bytes left between the cursor and the end of the buffer.
        available: usize,
    },
    /// No null terminator between the cursor and the end of the buffer.
    UnterminatedString {
        /// Offset at which the scan started.
        start: usize,
    },
    /// A decoded count or length prefix was negative.
    NegativeCount {
        /// The offending prefix value.
        count: i32,
    },
    /// A varint kept its continuation bit set past the range of `u64`.
    VarIntTooLong {
        /// Offset of the first varint byte.
        start: usize,
    },
    /// String bytes were not valid UTF-8.
    InvalidUtf8 {
        /// The underlying decode error.
        error: Utf8Error,
    },
}

impl fmt::Display for ReadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { position, length } => {
                write!(
                    f,
                    "position {position} out of range for buffer of {length} bytes"
                )
            }
            Self::OutOfBounds { needed, available } => {
                write!(
                    f,
                    "read past end of buffer: needed {needed} bytes, only {available} available"
                )
            }
            Self::UnterminatedString { start } => {
                write!(f, "no null terminator after offset {start}")
            }
            Self::NegativeCount { count } => write!(f, "negative count prefix: {count}"),
            Self::VarIntTooLong { start } => {
                write!(f, "varint at offset {start} exceeds 64 bits")
            }
            Self::InvalidUtf8 { error } => write!(f, "string bytes are not valid UTF-8: {error}"),
        }
    }
}

// Rust 1.81+
impl core::error::Error for ReadError {}

/// Convenience alias for reader results.
pub type Result<T> = core::result::Result<T, ReadError>;
