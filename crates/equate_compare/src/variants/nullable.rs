use std::any::Any;
use std::fmt;

use equate_types::ComparerKind;

use crate::comparer::{Sealed, Variant};
use crate::{search, Element, EqualityComparer};

/// Comparer for `Option<U>`.
///
/// Presence is compared first: two `None`s are equal, `None` never equals
/// `Some`. Two `Some`s delegate to `U`'s default variant, held inline so the
/// delegation is static. The kind is `NullableEquatable` or
/// `NullableEnumeration` depending on `U`.
pub struct NullableComparer<U: Element> {
    inner: U::Comparer,
}

impl<U: Element> NullableComparer<U> {
    /// Create the comparer around `U`'s default variant.
    pub fn new() -> Self {
        Self {
            inner: U::Comparer::default(),
        }
    }

    /// The comparer used for present values.
    pub fn inner(&self) -> &U::Comparer {
        &self.inner
    }
}

impl<U: Element> Default for NullableComparer<U> {
    fn default() -> Self {
        Self::new()
    }
}

impl<U: Element> fmt::Debug for NullableComparer<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NullableComparer<{}>", std::any::type_name::<U>())
    }
}

impl<U: Element> EqualityComparer<Option<U>> for NullableComparer<U> {
    #[inline]
    fn equals(&self, x: &Option<U>, y: &Option<U>) -> bool {
        match (x, y) {
            (Some(x), Some(y)) => self.inner.equals(x, y),
            (None, None) => true,
            _ => false,
        }
    }

    fn index_of(
        &self,
        block: &[Option<U>],
        value: &Option<U>,
        start: usize,
        count: usize,
    ) -> Option<usize> {
        match value {
            None => search::index_of(block, start, count, Option::is_none),
            Some(value) => search::index_of(block, start, count, |item| {
                item.as_ref()
                    .is_some_and(|item| self.inner.equals(item, value))
            }),
        }
    }

    fn last_index_of(
        &self,
        block: &[Option<U>],
        value: &Option<U>,
        start: usize,
        count: usize,
    ) -> Option<usize> {
        match value {
            None => search::last_index_of(block, start, count, Option::is_none),
            Some(value) => search::last_index_of(block, start, count, |item| {
                item.as_ref()
                    .is_some_and(|item| self.inner.equals(item, value))
            }),
        }
    }

    #[inline]
    fn as_variant(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl<U: Element> Sealed for NullableComparer<U> {}

impl<U: Element> Variant<Option<U>> for NullableComparer<U> {
    const KIND: ComparerKind =
        ComparerKind::wrap_nullable(<U::Comparer as Variant<U>>::KIND);
}
