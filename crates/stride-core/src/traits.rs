//! The calling convention shared by every Stride container.

use crate::width::ElementWidth;

/// Operations every sequence container exposes over opaque element bytes.
///
/// The dynamic array and the node-based stack, queue and deque all speak
/// this contract, so callers can drive any of them without knowing their
/// internals. Element values are byte slices exactly
/// [`element_width`](Sequence::element_width) long; a value of any other
/// length is ignored. Releasing a container is `Drop`.
pub trait Sequence {
    /// Byte width of one element.
    fn element_width(&self) -> ElementWidth;

    /// Number of live elements.
    fn len(&self) -> usize;

    /// Whether the container holds no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Add one element at the container's insertion end.
    ///
    /// No-op if `value` is not exactly one element wide.
    fn push(&mut self, value: &[u8]);

    /// Remove one element from the container's removal end.
    ///
    /// No-op when empty.
    fn pop(&mut self);

    /// The element at the container's front (its top, for a stack).
    fn front(&self) -> Option<&[u8]>;

    /// Remove all elements.
    fn clear(&mut self);

    /// Make `target` an independent copy of `self`.
    fn copy_to(&self, target: &mut Self)
    where
        Self: Sized;

    /// Structural equality: same width, same length, same bytes.
    fn equal(&self, other: &Self) -> bool
    where
        Self: Sized;
}
