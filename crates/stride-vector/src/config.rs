//! Vector construction parameters.

use stride_core::ElementWidth;

use crate::error::ConfigError;

/// Configuration for a [`ByteVector`](crate::ByteVector).
///
/// Validated at construction; the element width and growth factor are
/// immutable afterwards.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VectorConfig {
    /// Byte width of one element, in bytes. Must be positive.
    pub element_width: usize,

    /// Number of elements the initial buffer holds. Must be positive.
    pub initial_capacity: usize,

    /// Multiplier applied to the required byte size when an insert
    /// overflows capacity.
    ///
    /// Default: 2. A factor of 1 gives exact-fit growth (every overflowing
    /// insert reallocates).
    pub growth_factor: usize,
}

impl VectorConfig {
    /// Default growth multiplier.
    pub const DEFAULT_GROWTH_FACTOR: usize = 2;

    /// Create a config with the default growth factor.
    pub fn new(element_width: usize, initial_capacity: usize) -> Self {
        Self {
            element_width,
            initial_capacity,
            growth_factor: Self::DEFAULT_GROWTH_FACTOR,
        }
    }

    /// Replace the growth factor.
    pub fn with_growth_factor(mut self, growth_factor: usize) -> Self {
        self.growth_factor = growth_factor;
        self
    }

    /// Check every field, returning the validated element width.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the width or capacity is zero, the growth factor is
    /// zero, or the initial byte capacity overflows `usize`.
    pub fn validate(&self) -> Result<ElementWidth, ConfigError> {
        let width = ElementWidth::new(self.element_width).ok_or(ConfigError::ZeroElementWidth)?;
        if self.initial_capacity == 0 {
            return Err(ConfigError::ZeroInitialCapacity);
        }
        if self.growth_factor == 0 {
            return Err(ConfigError::InvalidGrowthFactor {
                factor: self.growth_factor,
            });
        }
        self.initial_bytes()?;
        Ok(width)
    }

    /// Initial capacity in bytes.
    pub fn initial_bytes(&self) -> Result<usize, ConfigError> {
        self.initial_capacity
            .checked_mul(self.element_width)
            .ok_or(ConfigError::CapacityOverflow {
                elements: self.initial_capacity,
                element_width: self.element_width,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_growth_factor_is_two() {
        let config = VectorConfig::new(4, 6);
        assert_eq!(config.growth_factor, 2);
        assert_eq!(config.initial_bytes().unwrap(), 24);
    }

    #[test]
    fn validate_returns_width() {
        let width = VectorConfig::new(8, 1).validate().unwrap();
        assert_eq!(width.get(), 8);
    }

    #[test]
    fn zero_width_rejected() {
        assert_eq!(
            VectorConfig::new(0, 4).validate(),
            Err(ConfigError::ZeroElementWidth)
        );
    }

    #[test]
    fn zero_capacity_rejected() {
        assert_eq!(
            VectorConfig::new(4, 0).validate(),
            Err(ConfigError::ZeroInitialCapacity)
        );
    }

    #[test]
    fn zero_growth_factor_rejected() {
        let config = VectorConfig::new(4, 4).with_growth_factor(0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidGrowthFactor { factor: 0 })
        ));
    }

    #[test]
    fn capacity_overflow_rejected() {
        let config = VectorConfig::new(16, usize::MAX / 2);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::CapacityOverflow { .. })
        ));
    }
}
