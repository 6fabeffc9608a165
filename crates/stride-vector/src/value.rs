//! Copy and structural equality between vectors.

use stride_core::{ElementWidth, Sequence, SequenceError};

use crate::vector::{lenient, ByteVector};

impl ByteVector {
    /// Make `target` an independent copy of this vector's elements.
    ///
    /// `target` takes this vector's element width and receives the live
    /// bytes. Its buffer is reused when large enough, otherwise it is
    /// reallocated to exactly the live size. The two vectors share no
    /// storage afterwards. Copying an empty vector clears `target`.
    ///
    /// # Errors
    ///
    /// `AllocationFailed` if `target` needs a larger buffer and it cannot
    /// be allocated. `target` is unchanged on `Err`.
    pub fn try_copy_to(&self, target: &mut ByteVector) -> Result<(), SequenceError> {
        target
            .raw
            .overwrite(self.raw.live())?
            .copy_from_slice(self.data());
        target.width = self.width;
        Ok(())
    }

    /// Lenient form of [`try_copy_to`](Self::try_copy_to).
    pub fn copy_to(&self, target: &mut ByteVector) {
        lenient("copy_to", self.try_copy_to(target));
    }

    /// Structural equality.
    ///
    /// False if the widths differ, either vector has never allocated, or
    /// the lengths differ; otherwise compares all `len() * element_width`
    /// live bytes.
    pub fn equal(&self, other: &ByteVector) -> bool {
        if self.width != other.width {
            return false;
        }
        if !self.is_allocated() || !other.is_allocated() {
            return false;
        }
        if self.len() != other.len() {
            return false;
        }
        self.data() == other.data()
    }
}

impl PartialEq for ByteVector {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl Sequence for ByteVector {
    fn element_width(&self) -> ElementWidth {
        self.width
    }

    fn len(&self) -> usize {
        ByteVector::len(self)
    }

    fn push(&mut self, value: &[u8]) {
        self.push_back(value);
    }

    fn pop(&mut self) {
        self.pop_back();
    }

    fn front(&self) -> Option<&[u8]> {
        ByteVector::front(self)
    }

    fn clear(&mut self) {
        ByteVector::clear(self);
    }

    fn copy_to(&self, target: &mut Self) {
        ByteVector::copy_to(self, target);
    }

    fn equal(&self, other: &Self) -> bool {
        ByteVector::equal(self, other)
    }
}
