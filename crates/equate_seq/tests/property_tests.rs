//! Property-based tests for sequence equality.
//!
//! Checks, over generated inputs:
//! 1. Reflexivity and symmetry of `sequence_equal`
//! 2. Agreement between the bitwise, indexed and iterator tiers
//! 3. Agreement with `==` on the underlying slices

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use std::collections::VecDeque;

use equate_compare::{EqualityComparer, FnComparer};
use equate_seq::{sequence_equal, sequence_equal_with, Sequence, Tier};
use proptest::prelude::*;

fn equal<T: equate_compare::Element>(first: Sequence<'_, T>, second: Sequence<'_, T>) -> bool {
    sequence_equal(Some(first), Some(second)).unwrap()
}

/// Short vectors over a small alphabet, so equal pairs are common.
fn small_vec() -> impl Strategy<Value = Vec<u32>> {
    proptest::collection::vec(0u32..4, 0..12)
}

proptest! {
    #[test]
    fn reflexive(block in small_vec()) {
        prop_assert!(equal(Sequence::from(&block), Sequence::from(&block)));
        prop_assert!(equal(Sequence::stream_ref(block.iter()), Sequence::from(&block)));
    }

    #[test]
    fn reflexive_for_any_floats(block in proptest::collection::vec(any::<f64>(), 0..12)) {
        prop_assert!(equal(Sequence::from(&block), Sequence::from(&block)));
        prop_assert!(equal(Sequence::stream(block.clone()), Sequence::from(&block)));
    }

    #[test]
    fn symmetric(first in small_vec(), second in small_vec()) {
        prop_assert_eq!(
            equal(Sequence::from(&first), Sequence::from(&second)),
            equal(Sequence::from(&second), Sequence::from(&first))
        );
    }

    #[test]
    fn agrees_with_slice_equality(first in small_vec(), second in small_vec()) {
        prop_assert_eq!(equal(Sequence::from(&first), Sequence::from(&second)), first == second);
    }

    #[test]
    fn tiers_agree(first in small_vec(), second in small_vec()) {
        prop_assert_eq!(
            Tier::select(&Sequence::from(&first), &Sequence::from(&second), false),
            Tier::Bitwise
        );

        let bitwise = equal(Sequence::from(&first), Sequence::from(&second));

        let deque: VecDeque<u32> = second.iter().copied().collect();
        let indexed = equal(Sequence::from(&first), Sequence::from(&deque));

        let iterated = equal(
            Sequence::stream(first.iter().copied()),
            Sequence::counted(second.clone()),
        );

        // A custom comparer rules out the bitwise tier even on slices.
        let plain = FnComparer::new(|a: &u32, b: &u32| a == b);
        let custom: &dyn EqualityComparer<u32> = &plain;
        let with_custom = sequence_equal_with(
            Some(Sequence::from(&first)),
            Some(Sequence::from(&second)),
            Some(custom),
        )
        .unwrap();

        prop_assert_eq!(bitwise, indexed);
        prop_assert_eq!(bitwise, iterated);
        prop_assert_eq!(bitwise, with_custom);
    }

    #[test]
    fn nullable_streams_match_slices(
        first in proptest::collection::vec(proptest::option::of(0i8..3), 0..10),
        second in proptest::collection::vec(proptest::option::of(0i8..3), 0..10),
    ) {
        prop_assert_eq!(
            equal(Sequence::from(&first), Sequence::stream(second.clone())),
            first == second
        );
    }
}
