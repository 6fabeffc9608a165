//! Integration test: the end-to-end vector scenarios.
//!
//! Drives one width-4 vector through push, range insert, fill, remove and
//! reverse, checking contents after each step, then the equality, copy and
//! growth properties that span more than one module.

use stride_core::{ElementWidth, ErrorKind, Sequence};
use stride_test_utils::{
    decode_i32, decode_i32s, encode_i32, encode_i32s, init_test_logging, SCENARIO_WORDS,
};
use stride_vector::{ByteVector, VectorConfig};

fn contents(v: &ByteVector) -> Vec<i32> {
    decode_i32s(v.data())
}

fn word_vector(values: &[i32]) -> ByteVector {
    let mut v = ByteVector::allocate(values.len().max(1), 4).unwrap();
    for &value in values {
        v.push_back(&encode_i32(value));
    }
    v
}

// ── Scenarios A to D on one evolving vector ─────────────────────────

#[test]
fn push_insert_fill_remove_sequence() {
    init_test_logging();
    let mut v = ByteVector::allocate(1, 4).unwrap();

    // A: push five words.
    for &word in &SCENARIO_WORDS {
        v.push_back(&encode_i32(word));
    }
    assert_eq!(v.len(), 5);
    assert_eq!(v.front().map(decode_i32), Some(0x01));
    assert_eq!(v.back().map(decode_i32), Some(0x45));

    // B: insert the same five words at index 2.
    v.insert_range(2, &encode_i32s(&SCENARIO_WORDS));
    assert_eq!(
        contents(&v),
        vec![0x01, 0x12, 0x01, 0x12, 0x23, 0x34, 0x45, 0x23, 0x34, 0x45]
    );
    assert_eq!(v.len(), 10);

    // C: four copies of 0x23 at the front.
    let begin = v.begin();
    v.fill_at(begin, 4, &encode_i32(0x23));
    assert_eq!(v.len(), 14);
    assert!(contents(&v)[..4].iter().all(|&x| x == 0x23));
    assert_eq!(v.at(4).map(decode_i32), Some(0x01));

    // D: remove index 4, later elements slide down.
    v.remove(4);
    assert_eq!(v.len(), 13);
    assert_eq!(
        contents(&v),
        vec![
            0x23, 0x23, 0x23, 0x23, 0x12, 0x01, 0x12, 0x23, 0x34, 0x45, 0x23, 0x34, 0x45
        ]
    );
    assert!(v.len() <= v.capacity());
}

// ── Scenario E: reverse ──────────────────────────────────────────────

#[test]
fn reverse_three_and_empty() {
    init_test_logging();
    let mut v = word_vector(&[1, 2, 3]);
    v.reverse();
    assert_eq!(contents(&v), vec![3, 2, 1]);

    let mut empty = word_vector(&[]);
    empty.reverse();
    assert!(empty.is_empty());
}

// ── Scenario F: equality ─────────────────────────────────────────────

#[test]
fn unequal_lengths_compare_unequal() {
    let a = word_vector(&[1, 2, 3]);
    let b = word_vector(&[1, 2]);
    assert!(!a.equal(&b));
    assert_ne!(a, b);
}

#[test]
fn unallocated_vectors_never_compare_equal() {
    let width = ElementWidth::new(4).unwrap();
    let a = ByteVector::new(width);
    let b = ByteVector::new(width);
    assert!(!a.equal(&b));
    let allocated = ByteVector::allocate(1, 4).unwrap();
    assert!(!a.equal(&allocated));
}

#[test]
fn widths_must_match_for_equality() {
    let mut a = ByteVector::allocate(2, 2).unwrap();
    let mut b = ByteVector::allocate(1, 4).unwrap();
    a.assign(&[1, 2, 3, 4]);
    b.assign(&[1, 2, 3, 4]);
    assert_eq!(a.data(), b.data());
    assert!(!a.equal(&b));
}

// ── Copy round trip ──────────────────────────────────────────────────

#[test]
fn copy_round_trip_is_independent() {
    init_test_logging();
    let source = word_vector(&SCENARIO_WORDS);
    let mut target = ByteVector::allocate(1, 2).unwrap();
    target.push_back(&[9, 9]);

    source.copy_to(&mut target);
    assert_eq!(target.element_width(), source.element_width());
    assert!(source.equal(&target));

    target.push_back(&encode_i32(0x56));
    target.at_mut(0).unwrap().copy_from_slice(&encode_i32(-1));
    assert_eq!(contents(&source), SCENARIO_WORDS.to_vec());
    assert!(!source.equal(&target));
}

#[test]
fn copy_of_empty_source_clears_target() {
    let source = ByteVector::allocate(4, 4).unwrap();
    let mut target = word_vector(&[7, 8]);
    source.copy_to(&mut target);
    assert!(target.is_empty());
    assert!(target.is_allocated());
}

#[test]
fn clone_keeps_capacity() {
    let mut v = ByteVector::allocate(9, 4).unwrap();
    v.push_back(&encode_i32(3));
    let c = v.clone();
    assert_eq!(c.capacity(), 9);
    assert_eq!(c, v);
}

// ── Clear idempotence ────────────────────────────────────────────────

#[test]
fn clear_twice_keeps_capacity() {
    let mut v = word_vector(&SCENARIO_WORDS);
    let capacity = v.capacity();
    v.clear();
    v.clear();
    assert_eq!(v.len(), 0);
    assert_eq!(v.capacity(), capacity);
}

// ── Growth ───────────────────────────────────────────────────────────

#[test]
fn push_onto_full_vector_doubles_required_size() {
    init_test_logging();
    for n in 1..=16 {
        let mut v = ByteVector::allocate(n, 4).unwrap();
        for i in 0..n {
            v.push_back(&encode_i32(i as i32));
        }
        assert_eq!(v.capacity(), n, "vector of {n} should be exactly full");
        v.push_back(&encode_i32(-1));
        assert_eq!(v.capacity(), 2 * (n + 1), "growth from full {n}");
        assert_eq!(v.len(), n + 1);
    }
}

#[test]
fn configured_growth_factor_applies() {
    let mut v = ByteVector::with_config(VectorConfig::new(4, 2).with_growth_factor(3)).unwrap();
    v.assign(&encode_i32s(&[1, 2]));
    v.push_front(&encode_i32(0));
    assert_eq!(v.capacity(), 9);
    assert_eq!(contents(&v), vec![0, 1, 2]);
}

#[test]
fn unallocated_vector_allocates_on_first_push() {
    let mut v = ByteVector::new(ElementWidth::new(4).unwrap());
    assert!(!v.is_allocated());
    v.push_back(&encode_i32(5));
    assert!(v.is_allocated());
    assert_eq!(v.capacity(), 2);
    assert_eq!(contents(&v), vec![5]);
}

// ── Strict calls are atomic ──────────────────────────────────────────

#[test]
fn failed_strict_calls_leave_vector_unchanged() {
    let mut v = word_vector(&SCENARIO_WORDS);
    let before = v.clone();
    let capacity = v.capacity();

    let failures = [
        v.try_fill_at(6, 1, &encode_i32(0)).unwrap_err(),
        v.try_insert_range(0, &[1, 2, 3]).unwrap_err(),
        v.try_erase_range(3, 3).unwrap_err(),
        v.try_remove(5).unwrap_err(),
        v.try_resize(0, &encode_i32(0)).unwrap_err(),
        v.try_reserve(usize::MAX).unwrap_err(),
        v.try_assign(&[]).unwrap_err(),
    ];
    let kinds: Vec<ErrorKind> = failures.iter().map(|e| e.kind()).collect();
    assert_eq!(
        kinds,
        vec![
            ErrorKind::OutOfBounds,
            ErrorKind::InvalidArgument,
            ErrorKind::InvalidArgument,
            ErrorKind::OutOfBounds,
            ErrorKind::InvalidArgument,
            ErrorKind::AllocationFailed,
            ErrorKind::InvalidArgument,
        ]
    );
    assert_eq!(v, before);
    assert_eq!(v.capacity(), capacity);
}

// ── Sequence contract ────────────────────────────────────────────────

#[test]
fn sequence_trait_drives_vector() {
    fn fill<S: Sequence>(seq: &mut S, values: &[i32]) {
        for &value in values {
            seq.push(&encode_i32(value));
        }
    }

    let mut v = ByteVector::allocate(2, 4).unwrap();
    fill(&mut v, &[4, 5, 6]);
    Sequence::pop(&mut v);
    assert_eq!(Sequence::len(&v), 2);
    assert_eq!(Sequence::front(&v).map(decode_i32), Some(4));
}

#[test]
fn release_consumes_vector() {
    init_test_logging();
    let v = word_vector(&SCENARIO_WORDS);
    v.release();
}
