//! Sequence trait compliance test helpers.
//!
//! These functions verify that a [`Sequence`] implementation satisfies the
//! shared calling convention. Each takes a factory producing a fresh,
//! empty container so checks do not leak state into each other.

use stride_core::Sequence;

use crate::fixtures::sample_element;

fn element<S: Sequence>(seq: &S, seed: u8) -> Vec<u8> {
    sample_element(seq.element_width().get(), seed)
}

/// Assert that a fresh container is empty with no front.
pub fn assert_starts_empty<S: Sequence>(make: impl Fn() -> S) {
    let seq = make();
    assert_eq!(seq.len(), 0, "fresh container has length {}", seq.len());
    assert!(seq.is_empty());
    assert!(seq.front().is_none(), "fresh container has a front element");
}

/// Assert that pushing one element makes it the front.
pub fn assert_push_then_front<S: Sequence>(make: impl Fn() -> S) {
    let mut seq = make();
    let value = element(&seq, 7);
    seq.push(&value);
    assert_eq!(seq.len(), 1);
    assert_eq!(seq.front(), Some(value.as_slice()));
}

/// Assert that values of the wrong width are ignored.
pub fn assert_wrong_width_ignored<S: Sequence>(make: impl Fn() -> S) {
    let mut seq = make();
    let width = seq.element_width().get();
    seq.push(&vec![0u8; width + 1]);
    seq.push(&[]);
    assert_eq!(seq.len(), 0, "wrong-width push changed the length");
}

/// Assert that `len` counts pushes minus pops.
pub fn assert_len_tracks_push_pop<S: Sequence>(make: impl Fn() -> S) {
    let mut seq = make();
    for seed in 0..10 {
        let value = element(&seq, seed);
        seq.push(&value);
    }
    for _ in 0..4 {
        seq.pop();
    }
    assert_eq!(seq.len(), 6);
}

/// Assert that popping an empty container is a no-op.
pub fn assert_pop_empty_is_noop<S: Sequence>(make: impl Fn() -> S) {
    let mut seq = make();
    seq.pop();
    seq.pop();
    assert!(seq.is_empty());
}

/// Assert that `clear` empties the container and is idempotent.
pub fn assert_clear_idempotent<S: Sequence>(make: impl Fn() -> S) {
    let mut seq = make();
    for seed in 0..3 {
        let value = element(&seq, seed);
        seq.push(&value);
    }
    seq.clear();
    assert!(seq.is_empty());
    seq.clear();
    assert!(seq.is_empty());
    let value = element(&seq, 9);
    seq.push(&value);
    assert_eq!(seq.len(), 1, "container unusable after clear");
}

/// Assert that `copy_to` yields an equal, independent container.
pub fn assert_copy_round_trip<S: Sequence>(make: impl Fn() -> S) {
    let mut source = make();
    for seed in 0..5 {
        let value = element(&source, seed);
        source.push(&value);
    }
    let mut target = make();
    source.copy_to(&mut target);
    assert!(source.equal(&target), "copy is not equal to its source");
    assert_eq!(target.len(), source.len());

    let extra = element(&target, 42);
    target.push(&extra);
    assert_eq!(source.len(), 5, "mutating the copy changed the source");
    assert!(!source.equal(&target), "equal ignored a length difference");
}

/// Assert that containers of different lengths are unequal.
pub fn assert_length_mismatch_unequal<S: Sequence>(make: impl Fn() -> S) {
    let mut a = make();
    let mut b = make();
    for seed in 0..3 {
        let value = element(&a, seed);
        a.push(&value);
        if seed < 2 {
            b.push(&value);
        }
    }
    assert!(!a.equal(&b));
    assert!(!b.equal(&a));
}

/// Run all compliance checks on a container type.
pub fn run_full_compliance<S: Sequence>(make: impl Fn() -> S) {
    assert_starts_empty(&make);
    assert_push_then_front(&make);
    assert_wrong_width_ignored(&make);
    assert_len_tracks_push_pop(&make);
    assert_pop_empty_is_noop(&make);
    assert_clear_idempotent(&make);
    assert_copy_round_trip(&make);
    assert_length_mismatch_unequal(&make);
}
