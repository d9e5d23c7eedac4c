//! Tier selection for sequence comparison.

use std::fmt;

use equate_compare::{bitwise, Element};

use crate::Sequence;

/// The strategy a comparison runs on, cheapest first.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tier {
    /// Compare both slices as raw bytes.
    Bitwise,
    /// Compare lengths, then elements by index.
    Indexed,
    /// Compare elements in lockstep through iterators.
    Iterator,
}

impl Tier {
    /// Choose the tier for comparing `first` with `second`.
    ///
    /// `custom_comparer` is `true` when the caller supplied a comparer other
    /// than `T`'s default; bitwise comparison is then ruled out because the
    /// comparer may disagree with byte equality.
    pub fn select<T: Element>(
        first: &Sequence<'_, T>,
        second: &Sequence<'_, T>,
        custom_comparer: bool,
    ) -> Self {
        match (first, second) {
            (Sequence::Contiguous(_), Sequence::Contiguous(_))
                if !custom_comparer && bitwise::is_eligible::<T>() =>
            {
                Tier::Bitwise
            }
            _ if first.is_random_access() && second.is_random_access() => Tier::Indexed,
            _ => Tier::Iterator,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Tier::Bitwise => "bitwise",
            Tier::Indexed => "indexed",
            Tier::Iterator => "iterator",
        }
    }
}

impl fmt::Display for Tier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
