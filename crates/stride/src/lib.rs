//! Stride: sequence containers over elements of a runtime byte width.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Stride sub-crates. For most users, adding `stride` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use stride::prelude::*;
//!
//! // Byte-level: elements are opaque 4-byte strings.
//! let mut v = ByteVector::allocate(2, 4).unwrap();
//! for word in [1u32, 2, 3] {
//!     v.push_back(&word.to_ne_bytes());
//! }
//! v.insert_range(1, &[9u8, 0, 0, 0, 8, 0, 0, 0]);
//! assert_eq!(v.len(), 5);
//! assert_eq!(v.capacity(), 6);
//! v.erase_range(1, 3);
//! v.reverse();
//! assert_eq!(v.front(), Some(&3u32.to_ne_bytes()[..]));
//!
//! // Typed: the same storage behind a compile-time element type.
//! let mut t: Vector<u16> = Vector::new();
//! t.assign(&[5, 6, 7]).unwrap();
//! t.push_front(4).unwrap();
//! assert_eq!(t.to_vec(), vec![4, 5, 6, 7]);
//!
//! // Invalid calls are no-ops in the plain form and errors in `try_*`.
//! v.remove(99);
//! assert_eq!(v.len(), 3);
//! assert_eq!(v.try_remove(99).unwrap_err().kind(), ErrorKind::OutOfBounds);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `stride-core` | `ElementWidth`, `SequenceError`, the `Sequence` trait |
//! | [`vector`] | `stride-vector` | `ByteVector`, `Vector<T>`, `VectorConfig` |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Element widths, errors and the shared container contract (`stride-core`).
///
/// Every container implements [`types::Sequence`].
pub use stride_core as types;

/// The contiguous dynamic array (`stride-vector`).
///
/// [`vector::ByteVector`] works on raw element bytes;
/// [`vector::Vector`] wraps it for primitive element types.
pub use stride_vector as vector;

/// Common imports for typical Stride usage.
///
/// ```rust
/// use stride::prelude::*;
/// ```
pub mod prelude {
    // Core types and traits
    pub use stride_core::{ElementWidth, ErrorKind, Sequence, SequenceError};

    // Vector
    pub use stride_vector::{
        ByteVector, ConfigError, Element, RevIndex, Vector, VectorConfig,
    };
}
