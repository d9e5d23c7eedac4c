//! Byte views of bitwise-equatable slices.
//!
//! The workspace's `unsafe` boundary has two parts: the
//! [`TypeInfo::assume_bitwise_equatable`](equate_types::TypeInfo::assume_bitwise_equatable)
//! assertion, which element descriptors make, and [`as_bytes`] here, the
//! only place memory is reinterpreted. Everything that compares memory
//! directly (the byte search in [`crate::lookup`] and the bitwise tier of
//! `equate_seq`) goes through [`as_bytes`].

use std::mem::size_of;

use crate::Element;

/// Returns `true` if slices of `T` may be viewed as bytes.
///
/// Requires the descriptor's bitwise proof and a descriptor that actually
/// describes `T` (matching size).
#[inline]
pub const fn is_eligible<T: Element>() -> bool {
    T::TYPE.is_bitwise_equatable() && T::TYPE.size() == size_of::<T>()
}

/// View `block` as its raw bytes, or `None` if `T` is not bitwise
/// equatable.
///
/// The view covers exactly `size_of_val(block)` bytes, so it cannot
/// overflow.
#[inline]
#[allow(
    unsafe_code,
    reason = "reinterprets a padding-free flat slice as bytes for memcmp/memchr"
)]
pub fn as_bytes<T: Element>(block: &[T]) -> Option<&[u8]> {
    if !is_eligible::<T>() {
        return None;
    }

    let len = std::mem::size_of_val(block);
    // SAFETY: `is_eligible` guarantees `T` is `Flat` (no pointers) and was
    // proven or asserted through `TypeInfo::assume_bitwise_equatable` to have
    // no padding, so all `len` bytes behind `block` are initialized. `u8` has
    // alignment 1, `len` is exactly the borrowed region, and the returned
    // slice borrows `block` for the same lifetime.
    Some(unsafe { std::slice::from_raw_parts(block.as_ptr().cast::<u8>(), len) })
}

/// Compare two slices byte for byte, or `None` if `T` is not bitwise
/// equatable.
///
/// Slices of different lengths are unequal; two empty slices are equal.
#[inline]
pub fn bytes_equal<T: Element>(first: &[T], second: &[T]) -> Option<bool> {
    let first_bytes = as_bytes(first)?;
    let second_bytes = as_bytes(second)?;
    Some(first.len() == second.len() && first_bytes == second_bytes)
}
