//! Insert and erase as byte shifts, and the operations derived from them.
//!
//! [`try_fill_at`](ByteVector::try_fill_at) and
//! [`try_insert_range`](ByteVector::try_insert_range) open a gap at the
//! insertion point, in place when the spare capacity allows and through a
//! geometrically grown buffer when it does not, then write into it.
//! [`try_erase_range`](ByteVector::try_erase_range) closes a gap and never
//! reallocates. Push, pop and remove are thin wrappers over these three.

use stride_core::SequenceError;

use crate::raw::grown_capacity;
use crate::scratch::ElementScratch;
use crate::vector::{lenient, ByteVector};

impl ByteVector {
    /// Insert `count` copies of `value` before element `position`.
    ///
    /// `position == len()` appends; `position == 0` prepends. If the spare
    /// capacity is too small the buffer grows to
    /// `growth_factor * (live bytes + inserted bytes)`.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `count` is zero or `value` is not one element
    /// wide, `OutOfBounds` if `position > len()`, `AllocationFailed` if
    /// growth fails.
    pub fn try_fill_at(
        &mut self,
        position: usize,
        count: usize,
        value: &[u8],
    ) -> Result<(), SequenceError> {
        self.check_value(value)?;
        if count == 0 {
            return Err(SequenceError::InvalidArgument {
                reason: "fill count must be positive",
            });
        }
        self.check_position(position)?;
        let gap = self
            .width
            .bytes_for(count)
            .ok_or(SequenceError::AllocationFailed { bytes: usize::MAX })?;
        let at = self.offset(position);
        let factor = self.growth_factor;
        let region = self
            .raw
            .open_gap(at, gap, |live, inserted| grown_capacity(live, inserted, factor))?;
        for slot in region.chunks_exact_mut(value.len()) {
            slot.copy_from_slice(value);
        }
        Ok(())
    }

    /// Lenient form of [`try_fill_at`](Self::try_fill_at).
    pub fn fill_at(&mut self, position: usize, count: usize, value: &[u8]) {
        lenient("fill_at", self.try_fill_at(position, count, value));
    }

    /// Insert the elements of `source` before element `position`.
    ///
    /// Same growth behaviour as [`try_fill_at`](Self::try_fill_at).
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `source` is empty or not a whole number of
    /// elements, `OutOfBounds` if `position > len()`, `AllocationFailed` if
    /// growth fails.
    pub fn try_insert_range(&mut self, position: usize, source: &[u8]) -> Result<(), SequenceError> {
        self.check_range(source)?;
        self.check_position(position)?;
        let at = self.offset(position);
        let factor = self.growth_factor;
        let region = self.raw.open_gap(at, source.len(), |live, inserted| {
            grown_capacity(live, inserted, factor)
        })?;
        region.copy_from_slice(source);
        Ok(())
    }

    /// Lenient form of [`try_insert_range`](Self::try_insert_range).
    pub fn insert_range(&mut self, position: usize, source: &[u8]) {
        lenient("insert_range", self.try_insert_range(position, source));
    }

    /// Remove elements `[first, last)`.
    ///
    /// `last` is clamped to `len()`. Later elements slide down to `first`;
    /// the capacity is unchanged.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if the clamped range is empty.
    pub fn try_erase_range(&mut self, first: usize, last: usize) -> Result<(), SequenceError> {
        let last = last.min(self.len());
        if first >= last {
            return Err(SequenceError::InvalidArgument {
                reason: "erase range is empty",
            });
        }
        let (from, to) = (self.offset(first), self.offset(last));
        self.raw.close_gap(from, to);
        Ok(())
    }

    /// Lenient form of [`try_erase_range`](Self::try_erase_range).
    pub fn erase_range(&mut self, first: usize, last: usize) {
        lenient("erase_range", self.try_erase_range(first, last));
    }

    /// Reverse the element order in place.
    pub fn reverse(&mut self) {
        let len = self.len();
        if len < 2 {
            return;
        }
        let width = self.width.get();
        let mut scratch = ElementScratch::new(width);
        let bytes = self.raw.bytes_mut();
        let (mut lo, mut hi) = (0, (len - 1) * width);
        while lo < hi {
            scratch.swap(bytes, lo, hi);
            lo += width;
            hi -= width;
        }
    }

    /// Append one element.
    pub fn try_push_back(&mut self, value: &[u8]) -> Result<(), SequenceError> {
        self.try_fill_at(self.len(), 1, value)
    }

    /// Lenient form of [`try_push_back`](Self::try_push_back).
    pub fn push_back(&mut self, value: &[u8]) {
        lenient("push_back", self.try_push_back(value));
    }

    /// Prepend one element.
    pub fn try_push_front(&mut self, value: &[u8]) -> Result<(), SequenceError> {
        self.try_fill_at(0, 1, value)
    }

    /// Lenient form of [`try_push_front`](Self::try_push_front).
    pub fn push_front(&mut self, value: &[u8]) {
        lenient("push_front", self.try_push_front(value));
    }

    /// Drop the last element. Moves no bytes.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` when empty.
    pub fn try_pop_back(&mut self) -> Result<(), SequenceError> {
        if self.is_empty() {
            return Err(SequenceError::OutOfBounds { index: 0, len: 0 });
        }
        let live = self.raw.live() - self.width.get();
        self.raw.truncate(live);
        Ok(())
    }

    /// Lenient form of [`try_pop_back`](Self::try_pop_back).
    pub fn pop_back(&mut self) {
        lenient("pop_back", self.try_pop_back());
    }

    /// Drop the first element, shifting the rest down.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` when empty.
    pub fn try_pop_front(&mut self) -> Result<(), SequenceError> {
        self.try_remove(0)
    }

    /// Lenient form of [`try_pop_front`](Self::try_pop_front).
    pub fn pop_front(&mut self) {
        lenient("pop_front", self.try_pop_front());
    }

    /// Remove the element at `position`.
    ///
    /// # Errors
    ///
    /// `OutOfBounds` if `position >= len()`.
    pub fn try_remove(&mut self, position: usize) -> Result<(), SequenceError> {
        let len = self.len();
        if position >= len {
            return Err(SequenceError::OutOfBounds {
                index: position,
                len,
            });
        }
        self.try_erase_range(position, position + 1)
    }

    /// Lenient form of [`try_remove`](Self::try_remove).
    pub fn remove(&mut self, position: usize) {
        lenient("remove", self.try_remove(position));
    }

    /// Replace the contents with the elements of `source`.
    ///
    /// The buffer is reused when it is large enough; otherwise it is
    /// reallocated to exactly `source.len()` bytes.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `source` is empty or not a whole number of
    /// elements, `AllocationFailed` if reallocation fails.
    pub fn try_assign(&mut self, source: &[u8]) -> Result<(), SequenceError> {
        self.check_range(source)?;
        self.raw.overwrite(source.len())?.copy_from_slice(source);
        Ok(())
    }

    /// Lenient form of [`try_assign`](Self::try_assign).
    pub fn assign(&mut self, source: &[u8]) {
        lenient("assign", self.try_assign(source));
    }
}
