//! Sequence equality for the equate workspace.
//!
//! [`sequence_equal`] compares two sequences element by element under the
//! element type's default comparer; [`sequence_equal_with`] accepts an
//! explicit one. The work is routed to the cheapest applicable tier:
//!
//! | Tier | Applies when | Strategy |
//! |------|--------------|----------|
//! | [`Tier::Bitwise`] | default comparer, bitwise-equatable `T`, both slices | one `memcmp` |
//! | [`Tier::Indexed`] | both sequences random access | length check, then index by index |
//! | [`Tier::Iterator`] | otherwise | counted short-circuit, then lockstep iteration |
//!
//! Sequences are described by [`Sequence`]: a slice, a random-access
//! container ([`RandomAccess`]), or a forward-only [`Stream`].

mod engine;
mod error;
mod sequence;
mod tier;

pub use engine::{sequence_equal, sequence_equal_with};
pub use error::{Param, SequenceError};
pub use sequence::{Item, RandomAccess, Sequence, Stream};
pub use tier::Tier;
