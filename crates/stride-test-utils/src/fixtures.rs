//! Integer payload fixtures.
//!
//! Containers store opaque bytes; tests drive them with 32-bit integers
//! encoded native-endian, four bytes per element.

/// The five-element payload used by the scenario tests.
pub const SCENARIO_WORDS: [i32; 5] = [0x01, 0x12, 0x23, 0x34, 0x45];

/// Encode one integer as an element.
pub fn encode_i32(value: i32) -> [u8; 4] {
    value.to_ne_bytes()
}

/// Encode a run of integers as a contiguous byte range.
pub fn encode_i32s(values: &[i32]) -> Vec<u8> {
    values.iter().flat_map(|v| v.to_ne_bytes()).collect()
}

/// Decode one four-byte element.
///
/// # Panics
///
/// Panics if `bytes` is not exactly four bytes long.
pub fn decode_i32(bytes: &[u8]) -> i32 {
    let word: [u8; 4] = bytes.try_into().expect("element is not four bytes");
    i32::from_ne_bytes(word)
}

/// Decode a byte range of four-byte elements.
pub fn decode_i32s(bytes: &[u8]) -> Vec<i32> {
    bytes.chunks_exact(4).map(decode_i32).collect()
}

/// A deterministic element of `width` bytes derived from `seed`.
pub fn sample_element(width: usize, seed: u8) -> Vec<u8> {
    (0..width).map(|i| seed.wrapping_add(i as u8)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn encode_decode_agree() {
        let bytes = encode_i32s(&SCENARIO_WORDS);
        assert_eq!(bytes.len(), 20);
        assert_eq!(decode_i32s(&bytes), SCENARIO_WORDS.to_vec());
        assert_eq!(decode_i32(&encode_i32(-7)), -7);
    }

    #[test]
    fn samples_differ_by_seed() {
        assert_ne!(sample_element(4, 1), sample_element(4, 2));
        assert_eq!(sample_element(3, 250), vec![250, 251, 252]);
    }
}
