use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use equate_types::ComparerKind;

use crate::comparer::{Sealed, Variant};
use crate::{search, EqualityComparer};

/// A fieldless enumeration backed by a fixed-width integer.
///
/// Usually implemented through
/// [`enumeration_element!`](crate::enumeration_element), which casts the
/// discriminant.
pub trait Enumeration: Copy + 'static {
    /// The backing integer type.
    type Repr: Copy + Eq;

    /// The integer this value is represented by.
    fn to_repr(self) -> Self::Repr;
}

/// Comparer for enumerations: compares integer representations.
pub struct EnumComparer<E>(PhantomData<fn(E)>);

impl<E> EnumComparer<E> {
    /// Create the comparer. It holds no state.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<E> Default for EnumComparer<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> fmt::Debug for EnumComparer<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "EnumComparer<{}>", std::any::type_name::<E>())
    }
}

impl<E: Enumeration> EqualityComparer<E> for EnumComparer<E> {
    #[inline]
    fn equals(&self, x: &E, y: &E) -> bool {
        x.to_repr() == y.to_repr()
    }

    fn index_of(&self, block: &[E], value: &E, start: usize, count: usize) -> Option<usize> {
        let needle = value.to_repr();
        search::index_of(block, start, count, |item| item.to_repr() == needle)
    }

    fn last_index_of(&self, block: &[E], value: &E, start: usize, count: usize) -> Option<usize> {
        let needle = value.to_repr();
        search::last_index_of(block, start, count, |item| item.to_repr() == needle)
    }

    #[inline]
    fn as_variant(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl<E> Sealed for EnumComparer<E> {}

impl<E: Enumeration> Variant<E> for EnumComparer<E> {
    const KIND: ComparerKind = ComparerKind::Enumeration;
}
