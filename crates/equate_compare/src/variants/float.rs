use std::any::Any;
use std::fmt;
use std::marker::PhantomData;

use equate_types::ComparerKind;

use crate::comparer::{Sealed, Variant};
use crate::{search, EqualityComparer};

mod private {
    pub trait Float: Copy + PartialEq + Send + Sync + 'static {
        fn is_nan(self) -> bool;
    }

    impl Float for f32 {
        #[inline]
        fn is_nan(self) -> bool {
            f32::is_nan(self)
        }
    }

    impl Float for f64 {
        #[inline]
        fn is_nan(self) -> bool {
            f64::is_nan(self)
        }
    }
}

use private::Float;

/// Equatable comparer for `f32` and `f64`.
///
/// Value equality with one change to IEEE 754: NaN equals NaN, so
/// comparison stays reflexive. `0.0` and `-0.0` remain equal, which is why
/// floats never take the bitwise tier.
pub struct FloatComparer<F>(PhantomData<fn(F)>);

impl<F> FloatComparer<F> {
    /// Create the comparer. It holds no state.
    pub const fn new() -> Self {
        Self(PhantomData)
    }
}

impl<F> Default for FloatComparer<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> fmt::Debug for FloatComparer<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FloatComparer<{}>", std::any::type_name::<F>())
    }
}

impl<F: Float> EqualityComparer<F> for FloatComparer<F> {
    #[inline]
    fn equals(&self, x: &F, y: &F) -> bool {
        x == y || (x.is_nan() && y.is_nan())
    }

    fn index_of(&self, block: &[F], value: &F, start: usize, count: usize) -> Option<usize> {
        let needle = *value;
        if needle.is_nan() {
            search::index_of(block, start, count, |item| item.is_nan())
        } else {
            search::index_of(block, start, count, |item| *item == needle)
        }
    }

    fn last_index_of(&self, block: &[F], value: &F, start: usize, count: usize) -> Option<usize> {
        let needle = *value;
        if needle.is_nan() {
            search::last_index_of(block, start, count, |item| item.is_nan())
        } else {
            search::last_index_of(block, start, count, |item| *item == needle)
        }
    }

    #[inline]
    fn as_variant(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

impl<F> Sealed for FloatComparer<F> {}

impl<F: Float> Variant<F> for FloatComparer<F> {
    const KIND: ComparerKind = ComparerKind::Equatable;
}
