//! One-element scratch space for in-buffer swaps.
//!
//! [`ElementScratch`] holds exactly one element's bytes. Widths up to
//! [`INLINE_BYTES`] live on the stack; wider elements spill to a single
//! heap allocation that is freed when the scratch is dropped.

use smallvec::{smallvec, SmallVec};

/// Element widths up to this many bytes never touch the heap.
pub(crate) const INLINE_BYTES: usize = 16;

pub(crate) struct ElementScratch {
    data: SmallVec<[u8; INLINE_BYTES]>,
}

impl ElementScratch {
    /// Scratch space for one element of `width` bytes.
    pub(crate) fn new(width: usize) -> Self {
        Self {
            data: smallvec![0; width],
        }
    }

    /// Swap the elements starting at byte offsets `a` and `b` of `bytes`.
    ///
    /// Both offsets must be element-aligned and in bounds.
    pub(crate) fn swap(&mut self, bytes: &mut [u8], a: usize, b: usize) {
        let width = self.data.len();
        self.data.copy_from_slice(&bytes[a..a + width]);
        bytes.copy_within(b..b + width, a);
        bytes[b..b + width].copy_from_slice(&self.data);
    }

    /// Whether the scratch fits inline.
    #[cfg(test)]
    pub(crate) fn is_inline(&self) -> bool {
        !self.data.spilled()
    }
}
