//! The [`ElementWidth`] newtype.

use std::fmt;
use std::num::NonZeroUsize;

/// Byte width of one type-erased element.
///
/// Fixed when a container is constructed and used as the stride for every
/// index-to-offset conversion. Zero is unrepresentable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ElementWidth(NonZeroUsize);

impl ElementWidth {
    /// One byte.
    pub const MIN: Self = Self(NonZeroUsize::MIN);

    /// Create a width of `bytes` bytes. Returns `None` for zero.
    pub const fn new(bytes: usize) -> Option<Self> {
        match NonZeroUsize::new(bytes) {
            Some(n) => Some(Self(n)),
            None => None,
        }
    }

    /// Width of one `T`, for zero-sized types `None`.
    pub const fn of<T>() -> Option<Self> {
        Self::new(std::mem::size_of::<T>())
    }

    /// The width in bytes.
    pub const fn get(self) -> usize {
        self.0.get()
    }

    /// Byte span of `count` elements, or `None` on overflow.
    pub fn bytes_for(self, count: usize) -> Option<usize> {
        count.checked_mul(self.get())
    }

    /// Number of whole elements in `bytes` bytes (rounding down).
    pub fn elements_in(self, bytes: usize) -> usize {
        bytes / self.get()
    }

    /// Whether `bytes` is a whole number of elements.
    pub fn divides(self, bytes: usize) -> bool {
        bytes % self.get() == 0
    }
}

impl fmt::Display for ElementWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}B", self.0)
    }
}

impl TryFrom<usize> for ElementWidth {
    type Error = crate::SequenceError;

    fn try_from(bytes: usize) -> Result<Self, Self::Error> {
        Self::new(bytes).ok_or(crate::SequenceError::InvalidArgument {
            reason: "element width must be positive",
        })
    }
}

impl From<ElementWidth> for usize {
    fn from(w: ElementWidth) -> Self {
        w.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn zero_width_is_rejected() {
        assert!(ElementWidth::new(0).is_none());
        assert!(ElementWidth::try_from(0usize).is_err());
    }

    #[test]
    fn width_of_primitive() {
        assert_eq!(ElementWidth::of::<u32>().unwrap().get(), 4);
        assert_eq!(ElementWidth::of::<u64>().unwrap().get(), 8);
        assert!(ElementWidth::of::<()>().is_none());
    }

    #[test]
    fn bytes_for_overflow_is_none() {
        let w = ElementWidth::new(8).unwrap();
        assert_eq!(w.bytes_for(3), Some(24));
        assert_eq!(w.bytes_for(usize::MAX), None);
    }

    #[test]
    fn display_shows_bytes() {
        assert_eq!(ElementWidth::new(4).unwrap().to_string(), "4B");
    }

    proptest! {
        #[test]
        fn bytes_and_elements_agree(width in 1usize..64, count in 0usize..10_000) {
            let w = ElementWidth::new(width).unwrap();
            let bytes = w.bytes_for(count).unwrap();
            prop_assert!(w.divides(bytes));
            prop_assert_eq!(w.elements_in(bytes), count);
        }
    }
}
