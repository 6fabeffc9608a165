//! Read access to a [`ByteVector`]: element lookup and traversal bounds.
//!
//! Nothing here is cached. Every accessor recomputes its answer from the
//! live length, and every returned slice borrows the vector, so a view
//! cannot outlive the next mutation.

use crate::vector::ByteVector;

/// Forward iterator over the live elements, one slice per element.
///
/// Double-ended: `.rev()` walks from the last element to the first.
pub type Elements<'a> = std::slice::ChunksExact<'a, u8>;

/// A reverse traversal position.
///
/// `RevIndex(0)` is the last element ([`ByteVector::rbegin`]); stepping
/// with [`step`](RevIndex::step) moves toward the front, and
/// [`ByteVector::rend`] is the position one before the first element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RevIndex(pub usize);

impl RevIndex {
    /// The next position toward the front.
    pub fn step(self) -> Self {
        Self(self.0 + 1)
    }

    /// The forward index this position denotes in a sequence of `len`
    /// elements, or `None` at or past `rend`.
    pub fn to_index(self, len: usize) -> Option<usize> {
        len.checked_sub(self.0 + 1)
    }
}

impl ByteVector {
    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.width.elements_in(self.raw.live())
    }

    /// Number of elements the current buffer holds.
    pub fn capacity(&self) -> usize {
        self.width.elements_in(self.raw.capacity())
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.raw.live() == 0
    }

    /// The live bytes, `len() * element_width` long.
    pub fn data(&self) -> &[u8] {
        self.raw.bytes()
    }

    /// The first element, or `None` when empty.
    pub fn front(&self) -> Option<&[u8]> {
        self.at(0)
    }

    /// The last element, or `None` when empty.
    pub fn back(&self) -> Option<&[u8]> {
        self.len().checked_sub(1).and_then(|last| self.at(last))
    }

    /// The element at `index`, or `None` if `index >= len()`.
    pub fn at(&self, index: usize) -> Option<&[u8]> {
        if index >= self.len() {
            return None;
        }
        let start = self.offset(index);
        Some(&self.raw.bytes()[start..start + self.width.get()])
    }

    /// Mutable access to the element at `index`.
    pub fn at_mut(&mut self, index: usize) -> Option<&mut [u8]> {
        if index >= self.len() {
            return None;
        }
        let start = self.offset(index);
        let width = self.width.get();
        Some(&mut self.raw.bytes_mut()[start..start + width])
    }

    /// The element at a reverse position.
    pub fn at_rev(&self, position: RevIndex) -> Option<&[u8]> {
        position.to_index(self.len()).and_then(|i| self.at(i))
    }

    /// Index of the first element.
    pub fn begin(&self) -> usize {
        0
    }

    /// One past the last element. Not dereferenceable.
    pub fn end(&self) -> usize {
        self.len()
    }

    /// Reverse position of the last element.
    pub fn rbegin(&self) -> RevIndex {
        RevIndex(0)
    }

    /// Reverse position one before the first element. Not dereferenceable.
    pub fn rend(&self) -> RevIndex {
        RevIndex(self.len())
    }

    /// Iterate over the live elements.
    pub fn iter(&self) -> Elements<'_> {
        self.raw.bytes().chunks_exact(self.width.get())
    }
}

impl<'a> IntoIterator for &'a ByteVector {
    type Item = &'a [u8];
    type IntoIter = Elements<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use stride_test_utils::{decode_i32, encode_i32s};

    fn words(values: &[i32]) -> ByteVector {
        let mut v = ByteVector::allocate(8, 4).unwrap();
        v.assign(&encode_i32s(values));
        v
    }

    #[test]
    fn empty_vector_has_no_front_or_back() {
        let v = ByteVector::allocate(4, 4).unwrap();
        assert!(v.front().is_none());
        assert!(v.back().is_none());
        assert!(v.at(0).is_none());
        assert!(v.at_rev(v.rbegin()).is_none());
        assert_eq!(v.begin(), v.end());
        assert_eq!(v.rbegin(), v.rend());
    }

    #[test]
    fn front_back_and_at() {
        let v = words(&[0x01, 0x12, 0x23]);
        assert_eq!(v.front().map(decode_i32), Some(0x01));
        assert_eq!(v.back().map(decode_i32), Some(0x23));
        assert_eq!(v.at(1).map(decode_i32), Some(0x12));
        assert!(v.at(3).is_none());
    }

    #[test]
    fn size_capacity_empty() {
        let v = words(&[1, 2, 3]);
        assert_eq!(v.len(), 3);
        assert_eq!(v.capacity(), 8);
        assert!(!v.is_empty());
        assert_eq!(v.data().len(), 12);
    }

    #[test]
    fn forward_traversal_by_bounds() {
        let v = words(&[4, 5, 6]);
        let seen: Vec<i32> = (v.begin()..v.end())
            .filter_map(|i| v.at(i).map(decode_i32))
            .collect();
        assert_eq!(seen, vec![4, 5, 6]);
    }

    #[test]
    fn reverse_traversal_by_bounds() {
        let v = words(&[4, 5, 6]);
        let mut seen = Vec::new();
        let mut it = v.rbegin();
        while it != v.rend() {
            seen.push(decode_i32(v.at_rev(it).unwrap()));
            it = it.step();
        }
        assert_eq!(seen, vec![6, 5, 4]);
        assert!(v.at_rev(v.rend()).is_none());
    }

    #[test]
    fn iter_is_double_ended() {
        let v = words(&[1, 2, 3]);
        let fwd: Vec<i32> = v.iter().map(decode_i32).collect();
        let rev: Vec<i32> = v.iter().rev().map(decode_i32).collect();
        assert_eq!(fwd, vec![1, 2, 3]);
        assert_eq!(rev, vec![3, 2, 1]);
        assert_eq!((&v).into_iter().len(), 3);
    }

    #[test]
    fn at_mut_writes_through() {
        let mut v = words(&[1, 2, 3]);
        v.at_mut(1).unwrap().copy_from_slice(&42i32.to_ne_bytes());
        assert_eq!(v.at(1).map(decode_i32), Some(42));
        assert!(v.at_mut(3).is_none());
    }

    #[test]
    fn rev_index_to_index() {
        assert_eq!(RevIndex(0).to_index(3), Some(2));
        assert_eq!(RevIndex(2).to_index(3), Some(0));
        assert_eq!(RevIndex(3).to_index(3), None);
    }
}
