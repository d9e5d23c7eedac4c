use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use equate_types::ComparerKind;

use crate::comparer::{Sealed, Variant};
use crate::{search, EqualityComparer};

/// Untyped equality for element types without a `PartialEq` contract.
///
/// The other side arrives as `&dyn Any`; implementations downcast it.
/// Without an override, values are equal only if they are the same value
/// in memory.
///
/// Zero-sized types carry no address of their own: every value may sit at
/// the same address, so under the default every value equals every other
/// and a search matches the first element of its range. Zero-sized object
/// types should override `object_eq`.
///
/// ```
/// use std::any::Any;
/// use equate_compare::ObjectEq;
///
/// struct Ticket {
///     id: u32,
/// }
///
/// impl ObjectEq for Ticket {
///     fn object_eq(&self, other: &dyn Any) -> bool {
///         other.downcast_ref::<Ticket>().is_some_and(|other| other.id == self.id)
///     }
/// }
/// ```
pub trait ObjectEq: Any {
    fn object_eq(&self, other: &dyn Any) -> bool {
        std::ptr::addr_eq(self, other)
    }
}

/// Fallback comparer: [`ObjectEq::object_eq`] through `&dyn Any`.
pub struct ObjectComparer<T>(PhantomData<fn(&T)>);

impl<T> ObjectComparer<T> {
    /// Create the comparer. It holds no state.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<T> Default for ObjectComparer<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for ObjectComparer<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ObjectComparer<{}>", std::any::type_name::<T>())
    }
}

impl<T: ObjectEq> EqualityComparer<T> for ObjectComparer<T> {
    #[inline]
    fn equals(&self, x: &T, y: &T) -> bool {
        x.object_eq(y)
    }

    fn index_of(&self, block: &[T], value: &T, start: usize, count: usize) -> Option<usize> {
        search::index_of(block, start, count, |item| item.object_eq(value))
    }

    fn last_index_of(&self, block: &[T], value: &T, start: usize, count: usize) -> Option<usize> {
        search::last_index_of(block, start, count, |item| item.object_eq(value))
    }

    #[inline]
    fn as_variant(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl<T> Sealed for ObjectComparer<T> {}

impl<T: ObjectEq> Variant<T> for ObjectComparer<T> {
    const KIND: ComparerKind = ComparerKind::Object;
}
