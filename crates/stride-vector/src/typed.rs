//! Compile-time typed facade over [`ByteVector`].
//!
//! [`Vector<T>`] stores each `T` as its native-endian byte encoding in a
//! `ByteVector` of width [`Element::WIDTH`], so it shares the growth policy
//! and shift behaviour exactly while handing out `T` values instead of
//! byte slices.

use std::fmt;
use std::marker::PhantomData;

use stride_core::{ElementWidth, SequenceError};

use crate::config::VectorConfig;
use crate::vector::ByteVector;

/// A fixed-width value that round-trips through bytes.
pub trait Element: Copy {
    /// Encoded width in bytes. Must be positive.
    const WIDTH: usize;

    /// Write the encoding of `self` into `out`, which is `WIDTH` bytes.
    fn write_bytes(&self, out: &mut [u8]);

    /// Decode a value from exactly `WIDTH` bytes.
    fn read_bytes(bytes: &[u8]) -> Self;
}

macro_rules! impl_element {
    ($($t:ty),* $(,)?) => {
        $(
            impl Element for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                fn write_bytes(&self, out: &mut [u8]) {
                    out.copy_from_slice(&self.to_ne_bytes());
                }

                fn read_bytes(bytes: &[u8]) -> Self {
                    let mut buf = [0u8; std::mem::size_of::<$t>()];
                    buf.copy_from_slice(bytes);
                    <$t>::from_ne_bytes(buf)
                }
            }
        )*
    };
}

impl_element!(u8, u16, u32, u64, u128, usize, i8, i16, i32, i64, i128, isize, f32, f64);

fn encode<T: Element>(values: &[T]) -> Vec<u8> {
    let mut bytes = vec![0u8; values.len() * T::WIDTH];
    for (slot, value) in bytes.chunks_exact_mut(T::WIDTH).zip(values) {
        value.write_bytes(slot);
    }
    bytes
}

fn encode_one<T: Element>(value: T) -> smallvec::SmallVec<[u8; 16]> {
    let mut bytes = smallvec::smallvec![0u8; T::WIDTH];
    value.write_bytes(&mut bytes);
    bytes
}

/// A contiguous vector of `T` with the [`ByteVector`] growth policy.
pub struct Vector<T: Element> {
    inner: ByteVector,
    _marker: PhantomData<T>,
}

impl<T: Element> Vector<T> {
    fn width() -> ElementWidth {
        ElementWidth::new(T::WIDTH).unwrap_or(ElementWidth::MIN)
    }

    /// An empty vector with no buffer.
    pub fn new() -> Self {
        Self {
            inner: ByteVector::new(Self::width()),
            _marker: PhantomData,
        }
    }

    /// An empty vector with room for `capacity` elements.
    ///
    /// # Errors
    ///
    /// `InvalidArgument` if `capacity` is zero, `AllocationFailed` if the
    /// buffer cannot be allocated.
    pub fn with_capacity(capacity: usize) -> Result<Self, SequenceError> {
        Self::with_config(VectorConfig::new(T::WIDTH, capacity))
    }

    /// Build from a config. The config's element width is overridden by
    /// `T::WIDTH`.
    pub fn with_config(config: VectorConfig) -> Result<Self, SequenceError> {
        let config = VectorConfig {
            element_width: T::WIDTH,
            ..config
        };
        Ok(Self {
            inner: ByteVector::with_config(config)?,
            _marker: PhantomData,
        })
    }

    /// The untyped storage.
    pub fn as_bytes(&self) -> &ByteVector {
        &self.inner
    }

    /// Unwrap into the untyped storage.
    pub fn into_bytes(self) -> ByteVector {
        self.inner
    }

    /// Number of elements.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Capacity in elements.
    pub fn capacity(&self) -> usize {
        self.inner.capacity()
    }

    /// Whether the vector is empty.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// First element.
    pub fn front(&self) -> Option<T> {
        self.inner.front().map(T::read_bytes)
    }

    /// Last element.
    pub fn back(&self) -> Option<T> {
        self.inner.back().map(T::read_bytes)
    }

    /// Element at `index`.
    pub fn at(&self, index: usize) -> Option<T> {
        self.inner.at(index).map(T::read_bytes)
    }

    /// Overwrite the element at `index`. Returns `false` if out of range.
    pub fn set(&mut self, index: usize, value: T) -> bool {
        match self.inner.at_mut(index) {
            Some(slot) => {
                value.write_bytes(slot);
                true
            }
            None => false,
        }
    }

    /// Iterate over the elements by value.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = T> + ExactSizeIterator + '_ {
        self.inner.iter().map(T::read_bytes)
    }

    /// Copy the elements out into a `Vec`.
    pub fn to_vec(&self) -> Vec<T> {
        self.iter().collect()
    }

    /// Append `value`.
    pub fn push_back(&mut self, value: T) -> Result<(), SequenceError> {
        self.inner.try_push_back(&encode_one(value))
    }

    /// Prepend `value`.
    pub fn push_front(&mut self, value: T) -> Result<(), SequenceError> {
        self.inner.try_push_front(&encode_one(value))
    }

    /// Remove and return the last element.
    pub fn pop_back(&mut self) -> Option<T> {
        let value = self.back()?;
        self.inner.pop_back();
        Some(value)
    }

    /// Remove and return the first element.
    pub fn pop_front(&mut self) -> Option<T> {
        let value = self.front()?;
        self.inner.pop_front();
        Some(value)
    }

    /// Insert `count` copies of `value` at `position`.
    pub fn fill_at(&mut self, position: usize, count: usize, value: T) -> Result<(), SequenceError> {
        self.inner.try_fill_at(position, count, &encode_one(value))
    }

    /// Insert `values` at `position`.
    pub fn insert_slice(&mut self, position: usize, values: &[T]) -> Result<(), SequenceError> {
        self.inner.try_insert_range(position, &encode(values))
    }

    /// Remove elements `[first, last)`, with `last` clamped to `len()`.
    pub fn erase_range(&mut self, first: usize, last: usize) -> Result<(), SequenceError> {
        self.inner.try_erase_range(first, last)
    }

    /// Remove and return the element at `position`.
    pub fn remove(&mut self, position: usize) -> Option<T> {
        let value = self.at(position)?;
        self.inner.remove(position);
        Some(value)
    }

    /// Replace the contents with `values`.
    pub fn assign(&mut self, values: &[T]) -> Result<(), SequenceError> {
        self.inner.try_assign(&encode(values))
    }

    /// Replace the contents with `n` copies of `value`.
    pub fn resize(&mut self, n: usize, value: T) -> Result<(), SequenceError> {
        self.inner.try_resize(n, &encode_one(value))
    }

    /// Set the capacity to exactly `capacity` elements, truncating if needed.
    pub fn reserve(&mut self, capacity: usize) -> Result<(), SequenceError> {
        self.inner.try_reserve(capacity)
    }

    /// Remove every element, keeping the allocation.
    pub fn clear(&mut self) {
        self.inner.clear();
    }

    /// Reverse in place.
    pub fn reverse(&mut self) {
        self.inner.reverse();
    }

    /// Make `target` an independent copy of `self`. `target` is unchanged
    /// on `Err`.
    pub fn copy_to(&self, target: &mut Vector<T>) -> Result<(), SequenceError> {
        self.inner.try_copy_to(&mut target.inner)
    }

    /// Structural equality, as [`ByteVector::equal`].
    pub fn equal(&self, other: &Vector<T>) -> bool {
        self.inner.equal(&other.inner)
    }
}

impl<T: Element> Default for Vector<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Element> Clone for Vector<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
            _marker: PhantomData,
        }
    }
}

impl<T: Element> PartialEq for Vector<T> {
    fn eq(&self, other: &Self) -> bool {
        self.equal(other)
    }
}

impl<T: Element + fmt::Debug> fmt::Debug for Vector<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T: Element> TryFrom<&[T]> for Vector<T> {
    type Error = SequenceError;

    fn try_from(values: &[T]) -> Result<Self, Self::Error> {
        let mut v = Self::new();
        if !values.is_empty() {
            v.assign(values)?;
        }
        Ok(v)
    }
}
