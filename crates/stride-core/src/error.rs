//! Error types for the Stride containers.
//!
//! Every strict (`try_*`) container operation reports one of three kinds:
//! an invalid argument, an out-of-bounds position, or an allocation
//! failure. The lenient entry points turn the first two into no-ops.

use std::error::Error;
use std::fmt;

/// Errors from strict container operations.
///
/// A strict operation that returns `Err` has left the container unchanged.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SequenceError {
    /// An argument was absent or degenerate: a value of the wrong width,
    /// an empty or misaligned source range, a zero count or capacity.
    InvalidArgument {
        /// Which precondition was violated.
        reason: &'static str,
    },
    /// A position lies outside the live elements.
    OutOfBounds {
        /// The offending element index.
        index: usize,
        /// Element count at the time of the call.
        len: usize,
    },
    /// The backing buffer could not be allocated.
    AllocationFailed {
        /// Number of bytes requested (`usize::MAX` if the size overflowed).
        bytes: usize,
    },
}

/// Fieldless classification of a [`SequenceError`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// See [`SequenceError::InvalidArgument`].
    InvalidArgument,
    /// See [`SequenceError::OutOfBounds`].
    OutOfBounds,
    /// See [`SequenceError::AllocationFailed`].
    AllocationFailed,
}

impl SequenceError {
    /// The kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidArgument { .. } => ErrorKind::InvalidArgument,
            Self::OutOfBounds { .. } => ErrorKind::OutOfBounds,
            Self::AllocationFailed { .. } => ErrorKind::AllocationFailed,
        }
    }
}

impl fmt::Display for SequenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { reason } => write!(f, "invalid argument: {reason}"),
            Self::OutOfBounds { index, len } => {
                write!(f, "index {index} out of bounds for length {len}")
            }
            Self::AllocationFailed { bytes } => {
                write!(f, "allocation of {bytes} bytes failed")
            }
        }
    }
}

impl Error for SequenceError {}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument => write!(f, "invalid argument"),
            Self::OutOfBounds => write!(f, "out of bounds"),
            Self::AllocationFailed => write!(f, "allocation failure"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_matches_variant() {
        let e = SequenceError::OutOfBounds { index: 3, len: 2 };
        assert_eq!(e.kind(), ErrorKind::OutOfBounds);
        let e = SequenceError::AllocationFailed { bytes: 64 };
        assert_eq!(e.kind(), ErrorKind::AllocationFailed);
    }

    #[test]
    fn display_includes_context() {
        let e = SequenceError::OutOfBounds { index: 7, len: 5 };
        assert_eq!(e.to_string(), "index 7 out of bounds for length 5");
        let e = SequenceError::InvalidArgument {
            reason: "value width does not match element width",
        };
        assert!(e.to_string().starts_with("invalid argument"));
    }
}
