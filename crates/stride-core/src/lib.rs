//! Core types and traits for the Stride sequence containers.
//!
//! This is the leaf crate with zero internal dependencies. It defines
//! the abstractions shared by every container in the workspace: the
//! [`ElementWidth`] of a type-erased element, the [`SequenceError`]
//! taxonomy, and the [`Sequence`] calling convention.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod error;
pub mod traits;
pub mod width;

pub use error::{ErrorKind, SequenceError};
pub use traits::Sequence;
pub use width::ElementWidth;
