//! Error types for the XOR primitives.
//!
//! Every failure is reported synchronously, before any output is produced.
//! Variants carry the lengths involved; they never carry buffer contents.

use core::fmt;

use crate::info::{ALIGNMENT, MIN_SIZE};

/// Errors returned by the XOR operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum XorError {
    /// The two inputs differ in length.
    LengthMismatch { left: usize, right: usize },
    /// Input shorter than the policy minimum.
    TooShort { len: usize, min: usize },
    /// Input length is not a multiple of the word size.
    Misaligned { len: usize, word: usize },
    /// Input longer than the policy maximum.
    TooLong { len: usize, max: usize },
    /// Caller-provided output buffer has the wrong length.
    OutputLength { expected: usize, actual: usize },
    /// The output buffer could not be allocated.
    AllocationFailed { len: usize },
    /// Wrapping the computed result for the caller failed.
    ResultConstruction,
}

/// Coarse classification of [`XorError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Recoverable by fixing the arguments; nothing was computed.
    InvalidArgument,
    /// Memory for the result was not available.
    ResourceExhausted,
    /// Failure while handing the result back.
    Internal,
}

impl XorError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            XorError::LengthMismatch { .. }
            | XorError::TooShort { .. }
            | XorError::Misaligned { .. }
            | XorError::TooLong { .. }
            | XorError::OutputLength { .. } => ErrorKind::InvalidArgument,
            XorError::AllocationFailed { .. } => ErrorKind::ResourceExhausted,
            XorError::ResultConstruction => ErrorKind::Internal,
        }
    }

    pub fn is_invalid_argument(&self) -> bool {
        self.kind() == ErrorKind::InvalidArgument
    }
}

impl ErrorKind {
    /// Status code used by the C ABI.
    pub const fn status(self) -> i32 {
        match self {
            ErrorKind::InvalidArgument => -1,
            ErrorKind::ResourceExhausted => -2,
            ErrorKind::Internal => -3,
        }
    }
}

impl fmt::Display for XorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            XorError::LengthMismatch { left, right } => {
                write!(f, "Byte buffers must have the same length ({} != {})", left, right)
            }
            XorError::TooShort { len, min } if *min == MIN_SIZE => {
                write!(f, "Input data must be at least 64 bits (8 bytes), got {} bytes", len)
            }
            XorError::TooShort { len, min } => {
                write!(f, "Input data must be at least {} bytes, got {} bytes", min, len)
            }
            XorError::Misaligned { len, word } if *word == ALIGNMENT => {
                write!(f, "Input data length must be a multiple of 8 bytes, got {} bytes", len)
            }
            XorError::Misaligned { len, word } => {
                write!(
                    f,
                    "Input data length must be a multiple of {} bytes, got {} bytes",
                    word, len
                )
            }
            XorError::TooLong { len, max } => {
                write!(f, "Input data must be at most {} bytes, got {} bytes", max, len)
            }
            XorError::OutputLength { expected, actual } => {
                write!(f, "Output buffer must be {} bytes, got {} bytes", expected, actual)
            }
            XorError::AllocationFailed { len } => {
                write!(f, "Failed to allocate {} bytes for result", len)
            }
            XorError::ResultConstruction => write!(f, "Failed to create result buffer"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for XorError {}
