use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use equate_types::ComparerKind;

use crate::comparer::{Sealed, Variant};
use crate::{search, EqualityComparer};

/// Comparer for types with a typed equality contract (`PartialEq`).
///
/// `equals` is `x == y`, resolved statically for `T`. Rust values are never
/// null, so no presence check is needed; nullable element types use
/// [`NullableComparer`](crate::NullableComparer) instead.
pub struct EquatableComparer<T>(PhantomData<fn(&T)>);

impl<T> EquatableComparer<T> {
    /// Create the comparer. It holds no state.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for EquatableComparer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for EquatableComparer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EquatableComparer<{}>", std::any::type_name::<T>())
    }
}

impl<T: PartialEq + 'static> EqualityComparer<T> for EquatableComparer<T> {
    #[inline]
    fn equals(&self, x: &T, y: &T) -> bool {
        x == y
    }

    fn index_of(&self, block: &[T], value: &T, start: usize, count: usize) -> Option<usize> {
        search::index_of(block, start, count, |item| item == value)
    }

    fn last_index_of(&self, block: &[T], value: &T, start: usize, count: usize) -> Option<usize> {
        search::last_index_of(block, start, count, |item| item == value)
    }

    #[inline]
    fn as_variant(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl<T> Sealed for EquatableComparer<T> {}

impl<T: PartialEq + 'static> Variant<T> for EquatableComparer<T> {
    const KIND: ComparerKind = ComparerKind::Equatable;
}
