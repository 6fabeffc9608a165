//! Test utilities and mock types for Stride development.
//!
//! Provides a mock implementation of the [`Sequence`] contract, the
//! [`compliance`] checks every container must pass, integer payload
//! [`fixtures`], and one-shot test logging.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod compliance;
pub mod fixtures;

use std::sync::Once;

use stride_core::{ElementWidth, Sequence};

pub use fixtures::{decode_i32, decode_i32s, encode_i32, encode_i32s, SCENARIO_WORDS};

static INIT_LOGGING: Once = Once::new();

/// Install a `tracing` subscriber that writes through the test harness.
///
/// The first call wins; later calls are no-ops.
pub fn init_test_logging() {
    init_test_logging_with_level(tracing::Level::TRACE);
}

/// Initialize test logging with a custom level.
pub fn init_test_logging_with_level(level: tracing::Level) {
    INIT_LOGGING.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_max_level(level)
            .with_test_writer()
            .with_target(true)
            .with_ansi(false)
            .try_init();
    });
}

/// Mock implementation of [`Sequence`].
///
/// Backed by a `Vec<Vec<u8>>`, one entry per element. `push` appends,
/// `pop` removes the last element, `front` is the first. Used to check
/// that the compliance suite itself agrees with a trivially correct model.
#[derive(Clone, Debug)]
pub struct MockSequence {
    width: ElementWidth,
    items: Vec<Vec<u8>>,
}

impl MockSequence {
    pub fn new(width: ElementWidth) -> Self {
        Self {
            width,
            items: Vec::new(),
        }
    }

    /// Elements in insertion order.
    pub fn items(&self) -> &[Vec<u8>] {
        &self.items
    }
}

impl Sequence for MockSequence {
    fn element_width(&self) -> ElementWidth {
        self.width
    }

    fn len(&self) -> usize {
        self.items.len()
    }

    fn push(&mut self, value: &[u8]) {
        if value.len() == self.width.get() {
            self.items.push(value.to_vec());
        }
    }

    fn pop(&mut self) {
        self.items.pop();
    }

    fn front(&self) -> Option<&[u8]> {
        self.items.first().map(Vec::as_slice)
    }

    fn clear(&mut self) {
        self.items.clear();
    }

    fn copy_to(&self, target: &mut Self) {
        target.width = self.width;
        target.items = self.items.clone();
    }

    fn equal(&self, other: &Self) -> bool {
        self.width == other.width && self.items == other.items
    }
}
