//! Configuration error types.

use std::error::Error;
use std::fmt;

use stride_core::SequenceError;

/// Errors detected by [`VectorConfig::validate()`](crate::VectorConfig::validate).
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// Element width is zero.
    ZeroElementWidth,
    /// Initial capacity is zero.
    ZeroInitialCapacity,
    /// Growth factor is below 1.
    InvalidGrowthFactor {
        /// The configured factor.
        factor: usize,
    },
    /// `initial_capacity * element_width` does not fit in `usize`.
    CapacityOverflow {
        /// Requested element count.
        elements: usize,
        /// Requested element width.
        element_width: usize,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ZeroElementWidth => write!(f, "element width must be positive"),
            Self::ZeroInitialCapacity => write!(f, "initial capacity must be positive"),
            Self::InvalidGrowthFactor { factor } => {
                write!(f, "growth factor must be at least 1, got {factor}")
            }
            Self::CapacityOverflow {
                elements,
                element_width,
            } => {
                write!(
                    f,
                    "capacity overflow: {elements} elements of {element_width} bytes"
                )
            }
        }
    }
}

impl Error for ConfigError {}

impl From<ConfigError> for SequenceError {
    fn from(e: ConfigError) -> Self {
        let reason = match e {
            ConfigError::ZeroElementWidth => "element width must be positive",
            ConfigError::ZeroInitialCapacity => "initial capacity must be positive",
            ConfigError::InvalidGrowthFactor { .. } => "growth factor must be at least 1",
            ConfigError::CapacityOverflow { .. } => "initial capacity overflows usize",
        };
        SequenceError::InvalidArgument { reason }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_core::ErrorKind;

    #[test]
    fn converts_to_invalid_argument() {
        let e: SequenceError = ConfigError::ZeroInitialCapacity.into();
        assert_eq!(e.kind(), ErrorKind::InvalidArgument);
    }

    #[test]
    fn display_names_factor() {
        let e = ConfigError::InvalidGrowthFactor { factor: 0 };
        assert_eq!(e.to_string(), "growth factor must be at least 1, got 0");
    }
}
