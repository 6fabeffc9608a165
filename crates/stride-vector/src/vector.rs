//! The [`ByteVector`] type and its buffer management operations.
//!
//! Operations come in pairs. The `try_*` form reports failures through
//! [`SequenceError`] and leaves the vector untouched on `Err`. The plain
//! form is lenient: invalid arguments and out-of-range positions are
//! silent no-ops, and only allocation failure escapes, as a process abort
//! through [`std::alloc::handle_alloc_error`].

use std::alloc::Layout;
use std::fmt;

use stride_core::{ElementWidth, SequenceError};

use crate::config::VectorConfig;
use crate::raw::RawBuffer;

/// A contiguous, growable sequence of fixed-width, type-erased elements.
///
/// Elements are opaque byte strings exactly
/// [`element_width`](ByteVector::element_width) bytes long. Positions are
/// element indices. Capacity grows geometrically on overflowing inserts
/// (see [`VectorConfig::growth_factor`]) and is otherwise exactly what was
/// requested.
#[derive(Clone)]
pub struct ByteVector {
    pub(crate) width: ElementWidth,
    pub(crate) growth_factor: usize,
    pub(crate) raw: RawBuffer,
}

impl ByteVector {
    /// An empty vector that has not allocated a buffer yet.
    pub fn new(width: ElementWidth) -> Self {
        Self {
            width,
            growth_factor: VectorConfig::DEFAULT_GROWTH_FACTOR,
            raw: RawBuffer::unallocated(),
        }
    }

    /// Allocate an empty vector with room for `initial_capacity` elements
    /// of `element_width` bytes.
    ///
    /// Returns `None` if either argument is zero or the buffer cannot be
    /// allocated.
    pub fn allocate(initial_capacity: usize, element_width: usize) -> Option<Self> {
        Self::try_allocate(initial_capacity, element_width).ok()
    }

    /// Strict form of [`allocate`](Self::allocate).
    pub fn try_allocate(initial_capacity: usize, element_width: usize) -> Result<Self, SequenceError> {
        Self::with_config(VectorConfig::new(element_width, initial_capacity))
    }

    /// Build a vector from a validated [`VectorConfig`].
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the config fails validation, `AllocationFailed`
    /// if the initial buffer cannot be allocated.
    pub fn with_config(config: VectorConfig) -> Result<Self, SequenceError> {
        let width = config.validate()?;
        let raw = RawBuffer::with_capacity(config.initial_bytes()?)?;
        Ok(Self {
            width,
            growth_factor: config.growth_factor,
            raw,
        })
    }

    /// Byte width of one element.
    pub fn element_width(&self) -> ElementWidth {
        self.width
    }

    /// Multiplier used when an insert overflows capacity.
    pub fn growth_factor(&self) -> usize {
        self.growth_factor
    }

    /// Capacity in bytes.
    pub fn capacity_bytes(&self) -> usize {
        self.raw.capacity()
    }

    /// Whether a backing buffer has ever been allocated.
    pub fn is_allocated(&self) -> bool {
        self.raw.is_allocated()
    }

    /// Set the capacity to exactly `capacity` elements.
    ///
    /// No-op if the capacity already matches. Otherwise the buffer is
    /// reallocated to the requested size and the live prefix copied over.
    /// Asking for fewer elements than are live truncates the vector: the
    /// elements past the new capacity are dropped.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` for a zero capacity, `AllocationFailed` if the new
    /// buffer cannot be allocated.
    pub fn try_reserve(&mut self, capacity: usize) -> Result<(), SequenceError> {
        if capacity == 0 {
            return Err(SequenceError::InvalidArgument {
                reason: "capacity must be positive",
            });
        }
        let bytes = self
            .width
            .bytes_for(capacity)
            .ok_or(SequenceError::AllocationFailed { bytes: usize::MAX })?;
        if bytes == self.raw.capacity() {
            return Ok(());
        }
        let dropped = self.raw.reallocate_exact(bytes)?;
        if dropped > 0 {
            tracing::debug!(
                dropped_elements = self.width.elements_in(dropped),
                capacity,
                "reserve truncated live elements"
            );
        }
        Ok(())
    }

    /// Lenient form of [`try_reserve`](Self::try_reserve).
    pub fn reserve(&mut self, capacity: usize) {
        lenient("reserve", self.try_reserve(capacity));
    }

    /// Replace the contents with exactly `n` copies of `value`.
    ///
    /// If `n` exceeds the capacity the buffer is reallocated to exactly `n`
    /// elements, with no headroom. Otherwise the existing buffer is reused.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `n` is zero or `value` is not one element wide;
    /// use [`clear`](Self::clear) to empty a vector.
    pub fn try_resize(&mut self, n: usize, value: &[u8]) -> Result<(), SequenceError> {
        self.check_value(value)?;
        if n == 0 {
            return Err(SequenceError::InvalidArgument {
                reason: "resize count must be positive",
            });
        }
        let bytes = self
            .width
            .bytes_for(n)
            .ok_or(SequenceError::AllocationFailed { bytes: usize::MAX })?;
        let region = self.raw.overwrite(bytes)?;
        for slot in region.chunks_exact_mut(value.len()) {
            slot.copy_from_slice(value);
        }
        Ok(())
    }

    /// Lenient form of [`try_resize`](Self::try_resize).
    pub fn resize(&mut self, n: usize, value: &[u8]) {
        lenient("resize", self.try_resize(n, value));
    }

    /// Remove every element. The allocation is kept.
    pub fn clear(&mut self) {
        self.raw.truncate(0);
    }

    /// Free the buffer and the vector.
    pub fn release(self) {
        tracing::trace!(
            capacity_bytes = self.raw.capacity(),
            "released vector buffer"
        );
    }

    /// Reject a value that is not exactly one element wide.
    pub(crate) fn check_value(&self, value: &[u8]) -> Result<(), SequenceError> {
        if value.len() != self.width.get() {
            return Err(SequenceError::InvalidArgument {
                reason: "value width does not match element width",
            });
        }
        Ok(())
    }

    /// Reject a source range that is empty or not whole elements.
    pub(crate) fn check_range(&self, source: &[u8]) -> Result<(), SequenceError> {
        if source.is_empty() {
            return Err(SequenceError::InvalidArgument {
                reason: "source range is empty",
            });
        }
        if !self.width.divides(source.len()) {
            return Err(SequenceError::InvalidArgument {
                reason: "source range is not a whole number of elements",
            });
        }
        Ok(())
    }

    /// Reject an insertion position past the logical end.
    pub(crate) fn check_position(&self, position: usize) -> Result<(), SequenceError> {
        let len = self.len();
        if position > len {
            return Err(SequenceError::OutOfBounds {
                index: position,
                len,
            });
        }
        Ok(())
    }

    /// Byte offset of element `index`. `index` must not exceed `len()`.
    pub(crate) fn offset(&self, index: usize) -> usize {
        index * self.width.get()
    }
}

impl fmt::Debug for ByteVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteVector")
            .field("element_width", &self.width.get())
            .field("len", &self.len())
            .field("capacity", &self.capacity())
            .finish()
    }
}

/// Collapse a strict result into the lenient contract.
pub(crate) fn lenient(op: &'static str, result: Result<(), SequenceError>) {
    match result {
        Ok(()) => {}
        Err(SequenceError::AllocationFailed { bytes }) => allocation_failure(bytes),
        Err(error) => tracing::trace!(op, %error, "ignored invalid call"),
    }
}

fn allocation_failure(bytes: usize) -> ! {
    let layout = Layout::from_size_align(bytes, 1).unwrap_or_else(|_| Layout::new::<u8>());
    std::alloc::handle_alloc_error(layout)
}
