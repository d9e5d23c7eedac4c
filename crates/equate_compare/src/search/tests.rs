use std::cell::Cell;

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

// ── Forward ─────────────────────────────────────────────────────

#[test]
fn forward_finds_first_match() {
    let block = [3, 1, 4, 1, 5];
    assert_eq!(index_of(&block, 0, 5, |&x| x == 1), Some(1));
}

#[test]
fn forward_respects_start() {
    let block = [3, 1, 4, 1, 5];
    assert_eq!(index_of(&block, 2, 3, |&x| x == 1), Some(3));
}

#[test]
fn forward_respects_count() {
    let block = [3, 1, 4, 1, 5];
    assert_eq!(index_of(&block, 2, 1, |&x| x == 1), None);
}

#[test]
fn forward_miss_is_none() {
    assert_eq!(index_of(&[1, 2, 3], 0, 3, |&x| x == 9), None);
}

// ── Backward ────────────────────────────────────────────────────

#[test]
fn backward_finds_last_match() {
    let block = [3, 1, 4, 1, 5];
    assert_eq!(last_index_of(&block, 4, 5, |&x| x == 1), Some(3));
}

#[test]
fn backward_respects_start() {
    let block = [3, 1, 4, 1, 5];
    assert_eq!(last_index_of(&block, 2, 3, |&x| x == 1), Some(1));
}

#[test]
fn backward_respects_count() {
    let block = [3, 1, 4, 1, 5];
    // Visits indices 2 and 1 only.
    assert_eq!(last_index_of(&block, 2, 2, |&x| x == 3), None);
    assert_eq!(last_index_of(&block, 2, 3, |&x| x == 3), Some(0));
}

// ── Empty ranges ────────────────────────────────────────────────

#[test]
fn empty_range_never_calls_predicate() {
    let calls = Cell::new(0);
    let probe = |_: &i32| {
        calls.set(calls.get() + 1);
        true
    };

    assert_eq!(index_of(&[1, 2, 3], 1, 0, probe), None);
    assert_eq!(last_index_of(&[1, 2, 3], 1, 0, probe), None);
    assert_eq!(index_of::<i32>(&[], 0, 0, probe), None);
    assert_eq!(last_index_of::<i32>(&[], 0, 0, probe), None);
    assert_eq!(calls.get(), 0);
}

#[test]
#[cfg(debug_assertions)]
#[should_panic(expected = "exceeds block")]
fn forward_out_of_range_is_caller_error() {
    let _ = index_of(&[1, 2, 3], 2, 5, |&x| x == 1);
}

// ── Properties ──────────────────────────────────────────────────

/// Block plus an in-bounds `(start, count)` forward range.
fn block_and_range() -> impl Strategy<Value = (Vec<u8>, usize, usize)> {
    proptest::collection::vec(0u8..4, 0..32).prop_flat_map(|block| {
        let len = block.len();
        (Just(block), 0..=len).prop_flat_map(|(block, start)| {
            let rest = block.len() - start;
            (Just(block), Just(start), 0..=rest)
        })
    })
}

proptest! {
    #[test]
    fn forward_hit_is_first_in_range((block, start, count) in block_and_range(), needle in 0u8..4) {
        match index_of(&block, start, count, |&x| x == needle) {
            Some(i) => {
                prop_assert!(i >= start && i < start + count);
                prop_assert_eq!(block[i], needle);
                prop_assert!(block[start..i].iter().all(|&x| x != needle));
            }
            None => prop_assert!(block[start..start + count].iter().all(|&x| x != needle)),
        }
    }

    #[test]
    fn backward_mirrors_forward_on_reversed_block(
        (block, start, count) in block_and_range(),
        needle in 0u8..4,
    ) {
        prop_assume!(count > 0);
        let reversed: Vec<u8> = block.iter().rev().copied().collect();
        let len = block.len();
        // Forward range [start, start + count) maps to the reversed range
        // ending at len - 1 - start.
        let forward = index_of(&block, start, count, |&x| x == needle);
        let backward = last_index_of(&reversed, len - 1 - start, count, |&x| x == needle);
        prop_assert_eq!(forward.map(|i| len - 1 - i), backward);
    }
}
