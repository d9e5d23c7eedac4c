use std::any::Any;

use equate_types::ComparerKind;

use crate::comparer::{Sealed, Variant};
use crate::EqualityComparer;

/// Placeholder comparer for `u8`.
///
/// Byte sequences are compared and searched through their byte view
/// ([`crate::bitwise`]); this variant exists so `u8` still has a default
/// comparer object. Its search methods are not meant to be reached: they
/// fail a debug assertion, and in release builds fall back to `memchr`.
#[derive(Debug, Default, Clone, Copy)]
pub struct ByteComparer;

impl EqualityComparer<u8> for ByteComparer {
    #[inline]
    fn equals(&self, x: &u8, y: &u8) -> bool {
        x == y
    }

    fn index_of(&self, block: &[u8], value: &u8, start: usize, count: usize) -> Option<usize> {
        reserved();
        if count == 0 {
            return None;
        }
        memchr::memchr(*value, &block[start..start + count]).map(|offset| start + offset)
    }

    fn last_index_of(&self, block: &[u8], value: &u8, start: usize, count: usize) -> Option<usize> {
        reserved();
        if count == 0 {
            return None;
        }
        let first = start + 1 - count;
        memchr::memrchr(*value, &block[first..=start]).map(|offset| first + offset)
    }

    #[inline]
    fn as_variant(&self) -> Option<&dyn Any> {
        Some(self)
    }
}

/// Trip debug builds that reach a reserved search path.
#[inline]
fn reserved() {
    if cfg!(debug_assertions) {
        panic!("byte search is served by the byte view, not ByteComparer");
    }
}

impl Sealed for ByteComparer {}

impl Variant<u8> for ByteComparer {
    const KIND: ComparerKind = ComparerKind::Byte;
}
