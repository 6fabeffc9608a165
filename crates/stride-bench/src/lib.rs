//! Benchmark workloads for the Stride containers.
//!
//! Provides pre-built vectors and deterministic position scripts:
//!
//! - [`filled_vector`]: a width-4 vector holding `0..n`, with exact capacity
//! - [`insert_positions`]: deterministic insertion points via seed
//! - [`wide_element`]: a payload for wide-element workloads

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use stride_core::ElementWidth;
use stride_vector::{ByteVector, VectorConfig};

/// Element width used by the word workloads.
pub const WORD: usize = 4;

const WORD_WIDTH: ElementWidth = match ElementWidth::new(WORD) {
    Some(width) => width,
    None => ElementWidth::MIN,
};

/// Build a vector of `n` four-byte words `0..n` with capacity exactly `n`.
///
/// Returns an unallocated vector when `n` is zero or too large to allocate.
pub fn filled_vector(n: usize) -> ByteVector {
    let Ok(mut v) = ByteVector::with_config(VectorConfig::new(WORD, n)) else {
        return ByteVector::new(WORD_WIDTH);
    };
    let bytes: Vec<u8> = (0..n as u32).flat_map(u32::to_ne_bytes).collect();
    v.assign(&bytes);
    v
}

/// Generate `count` deterministic insertion positions.
///
/// Position `i` is valid for a vector that starts with `base_len` elements
/// and gains one element per insertion, so it lies in `0..=base_len + i`.
pub fn insert_positions(base_len: usize, count: usize, seed: u64) -> Vec<usize> {
    (0..count)
        .map(|i| {
            let hash = seed
                .wrapping_mul(6364136223846793005)
                .wrapping_add(i as u64 * 1442695040888963407);
            (hash >> 17) as usize % (base_len + i + 1)
        })
        .collect()
}

/// A `width`-byte element with distinct bytes.
pub fn wide_element(width: usize) -> Vec<u8> {
    (0..width).map(|i| i as u8).collect()
}
