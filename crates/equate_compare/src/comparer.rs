//! The comparer contract.

use std::any::Any;
use std::fmt;

use equate_types::ComparerKind;

use crate::search;

/// Equality and positional search over one element type.
///
/// Only [`equals`](Self::equals) is required; the provided search methods
/// scan with it. The default variants override the search methods so their
/// per-element test is statically dispatched and their needle is inspected
/// once per search.
///
/// Searches return `None` when nothing in the range matches.
pub trait EqualityComparer<T>: Send + Sync {
    /// Returns `true` if `x` and `y` are equal under this comparer.
    fn equals(&self, x: &T, y: &T) -> bool;

    /// First index in `block[start .. start + count]` equal to `value`.
    fn index_of(&self, block: &[T], value: &T, start: usize, count: usize) -> Option<usize> {
        search::index_of(block, start, count, |item| self.equals(item, value))
    }

    /// Last index in `block[start + 1 - count ..= start]` equal to `value`.
    fn last_index_of(&self, block: &[T], value: &T, start: usize, count: usize) -> Option<usize> {
        search::last_index_of(block, start, count, |item| self.equals(item, value))
    }

    /// `Some` for the default variants, so an explicit comparer can be
    /// recognized as one by type.
    #[doc(hidden)]
    fn as_variant(&self) -> Option<&dyn Any> {
        None
    }
}

mod private {
    pub trait Sealed {}
}

pub(crate) use private::Sealed;

/// A default comparer variant: one of the closed set the resolver picks
/// from.
///
/// Sealed. Element types choose among the variants this crate provides;
/// arbitrary comparers implement [`EqualityComparer`] and are passed
/// explicitly instead.
pub trait Variant<T>: EqualityComparer<T> + Default + Sealed + 'static {
    /// The capability class this variant implements.
    const KIND: ComparerKind;
}

/// An explicit comparer built from a closure.
///
/// ```
/// use equate_compare::{EqualityComparer, FnComparer};
///
/// let last_digit = FnComparer::new(|a: &i32, b: &i32| a % 10 == b % 10);
/// assert!(last_digit.equals(&13, &23));
/// assert!(!last_digit.equals(&13, &24));
/// ```
#[derive(Clone, Copy)]
pub struct FnComparer<F>(F);

impl<F> FnComparer<F> {
    /// Wrap `f` as a comparer.
    pub const fn new(f: F) -> Self {
        Self(f)
    }
}

impl<T, F> EqualityComparer<T> for FnComparer<F>
where
    F: Fn(&T, &T) -> bool + Send + Sync,
{
    #[inline]
    fn equals(&self, x: &T, y: &T) -> bool {
        (self.0)(x, y)
    }
}

impl<F> fmt::Debug for FnComparer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("FnComparer")
    }
}
