//! Whole-slice search with the default comparer.
//!
//! These are the entry points containers call. Byte elements are searched
//! through their byte view with `memchr`, which is why
//! [`ByteComparer`](crate::ByteComparer)'s own search is reserved.

use std::slice;

use crate::{bitwise, default_comparer, Element, EqualityComparer};

/// The byte and the byte view for a single-byte bitwise element type.
#[inline]
fn byte_view<'a, T: Element>(block: &'a [T], value: &T) -> Option<(&'a [u8], u8)> {
    if !T::TYPE.capabilities().is_single_byte() || T::TYPE.size() != 1 {
        return None;
    }
    let needle = bitwise::as_bytes(slice::from_ref(value))?.first().copied()?;
    Some((bitwise::as_bytes(block)?, needle))
}

/// First index of `value` in `block` under `T`'s default comparer.
pub fn index_of<T: Element>(block: &[T], value: &T) -> Option<usize> {
    if let Some((bytes, needle)) = byte_view(block, value) {
        return memchr::memchr(needle, bytes);
    }
    default_comparer::<T>().index_of(block, value, 0, block.len())
}

/// Last index of `value` in `block` under `T`'s default comparer.
pub fn last_index_of<T: Element>(block: &[T], value: &T) -> Option<usize> {
    if let Some((bytes, needle)) = byte_view(block, value) {
        return memchr::memrchr(needle, bytes);
    }
    match block.len() {
        0 => None,
        len => default_comparer::<T>().last_index_of(block, value, len - 1, len),
    }
}

#[cfg(test)]
mod tests;
