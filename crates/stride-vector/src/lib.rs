//! Type-erased contiguous vector for the Stride containers.
//!
//! [`ByteVector`] stores elements of a width chosen at runtime in one owned
//! buffer. [`Vector<T>`] layers compile-time typing over the same storage.
//!
//! # Architecture
//!
//! ```text
//! ByteVector
//! ├── RawBuffer        (buffer manager: exact capacity, live cursor, reallocation)
//! ├── shift            (fill/insert open a gap, erase closes one; push/pop/remove/assign)
//! ├── view             (front/back/at, begin/end, rbegin/rend, iteration)
//! ├── value            (copy_to, equal, Sequence impl)
//! └── ElementScratch   (one-element swap space for reverse)
//! ```
//!
//! # Growth
//!
//! When an insert does not fit, the new capacity is
//! `growth_factor * (live bytes + inserted bytes)` (default factor 2).
//! `reserve`, `resize` and `assign` allocate exactly what they are asked
//! for. There is no `shrink_to_fit`.
//!
//! # Invalidation
//!
//! Any slice handed out by the view borrows the vector, so the borrow
//! checker rejects holding one across a mutation. Indices stay meaningful
//! across reallocation but not across inserts or erases before them.
//!
//! # Strict and lenient calls
//!
//! Each mutating operation has a `try_*` form returning
//! [`SequenceError`](stride_core::SequenceError) and a plain form that
//! treats invalid arguments as no-ops. Allocation failure in a plain form
//! aborts the process.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod config;
pub mod error;
mod raw;
mod scratch;
mod shift;
pub mod typed;
mod value;
mod vector;
pub mod view;

pub use config::VectorConfig;
pub use error::ConfigError;
pub use typed::{Element, Vector};
pub use vector::ByteVector;
pub use view::{Elements, RevIndex};
