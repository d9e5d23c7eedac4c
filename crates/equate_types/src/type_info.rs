//! Static per-type descriptors.
//!
//! A [`TypeInfo`] is the type-inspection record the resolver and the
//! sequence engine consult. It is built in `const` context, so every fact it
//! carries is fixed at compile time and querying it costs nothing at run
//! time.
//!
//! # Bitwise Eligibility
//!
//! `BITWISE_EQUATABLE` cannot be set through [`TypeInfo::new`]. It enters a
//! descriptor in exactly two ways:
//!
//! - [`TypeInfo::assume_bitwise_equatable`], an `unsafe` assertion that
//!   also rejects non-[`Flat`](ValueClass::Flat) types at compile time.
//! - A layout proof in [`TypeInfo::composite`] / [`TypeInfo::array`]: every
//!   field is bitwise and the fields cover every byte (no padding).

use std::mem::size_of;

use crate::{Capabilities, ValueClass};

/// Compile-time descriptor of an element type.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TypeInfo {
    size: usize,
    class: ValueClass,
    caps: Capabilities,
    /// Capabilities of the wrapped type when `caps` is `NULLABLE`.
    underlying: Capabilities,
}

impl TypeInfo {
    /// Describe `T` with the given classification and capabilities.
    ///
    /// `BITWISE_EQUATABLE` is stripped from `caps`; see
    /// [`assume_bitwise_equatable`](Self::assume_bitwise_equatable).
    pub const fn new<T>(class: ValueClass, caps: Capabilities) -> Self {
        Self {
            size: size_of::<T>(),
            class,
            caps: caps.difference(Capabilities::BITWISE_EQUATABLE),
            underlying: Capabilities::empty(),
        }
    }

    /// Describe a `PartialEq` type.
    pub const fn equatable<T>(class: ValueClass) -> Self {
        Self::new::<T>(class, Capabilities::EQUATABLE)
    }

    /// Describe a fieldless, integer-backed enumeration.
    pub const fn enumeration<T>() -> Self {
        Self::new::<T>(ValueClass::Flat, Capabilities::ENUMERATION)
    }

    /// Describe a type with no typed equality contract.
    ///
    /// Nothing is assumed about its layout.
    pub const fn object<T>() -> Self {
        Self::new::<T>(ValueClass::PossibleRef, Capabilities::empty())
    }

    /// Describe `T`, a nullable wrapper around a type described by `inner`.
    ///
    /// Wrappers are never bitwise: the absent state leaves payload bytes
    /// unspecified.
    pub const fn nullable<T>(inner: TypeInfo) -> Self {
        Self {
            size: size_of::<T>(),
            class: inner.class,
            caps: Capabilities::NULLABLE,
            underlying: inner.caps,
        }
    }

    /// Describe `T`, a product of `fields` compared field by field.
    ///
    /// The result is equatable (its own equality is field-wise). It is
    /// bitwise only if every field is bitwise, the whole is `Flat`, and the
    /// field sizes add up to `size_of::<T>()`, which rules out padding.
    pub const fn composite<T>(fields: &[TypeInfo]) -> Self {
        let mut class = ValueClass::Flat;
        let mut caps = Capabilities::INHERITED_MASK;
        let mut covered = 0;
        let mut i = 0;
        while i < fields.len() {
            class = ValueClass::combine(&[class, fields[i].class]);
            caps = Capabilities::intersect_all(&[caps, fields[i].caps]);
            covered += fields[i].size;
            i += 1;
        }

        if covered != size_of::<T>() || !class.is_flat() {
            caps = caps.difference(Capabilities::BITWISE_EQUATABLE);
        }

        Self {
            size: size_of::<T>(),
            class,
            caps: caps.union(Capabilities::EQUATABLE),
            underlying: Capabilities::empty(),
        }
    }

    /// Describe `T`, a fixed-length array of `elem`.
    ///
    /// Array elements are laid out back to back, so an array is bitwise
    /// exactly when its element is.
    pub const fn array<T>(elem: TypeInfo) -> Self {
        Self {
            size: size_of::<T>(),
            class: elem.class,
            caps: Capabilities::intersect_all(&[elem.caps]).union(Capabilities::EQUATABLE),
            underlying: Capabilities::empty(),
        }
    }

    /// Mark the described type as bitwise equatable.
    ///
    /// Fails const evaluation if the type is not [`ValueClass::Flat`].
    ///
    /// # Safety
    ///
    /// The caller asserts that the described type has no padding or
    /// otherwise uninitialized bytes, and that two values are equal under
    /// its declared equality if and only if their bytes are identical.
    /// Violating the first half makes the bitwise tier read uninitialized
    /// memory.
    #[allow(
        unsafe_code,
        reason = "callers vouch for the layout facts the bitwise tier relies on"
    )]
    pub const unsafe fn assume_bitwise_equatable(self) -> Self {
        assert!(
            self.class.is_flat(),
            "only flat value types can be bitwise equatable"
        );
        Self {
            caps: self.caps.union(Capabilities::BITWISE_EQUATABLE),
            ..self
        }
    }

    /// Size of the described type in bytes.
    #[inline]
    pub const fn size(&self) -> usize {
        self.size
    }

    /// Ownership classification.
    #[inline]
    pub const fn class(&self) -> ValueClass {
        self.class
    }

    /// Declared capabilities.
    #[inline]
    pub const fn capabilities(&self) -> Capabilities {
        self.caps
    }

    /// Capabilities of the wrapped type (empty unless nullable).
    #[inline]
    pub const fn underlying(&self) -> Capabilities {
        self.underlying
    }

    /// Returns `true` if values may be compared as raw bytes.
    ///
    /// Rechecks the classification so a descriptor can never route a
    /// reference-holding type to the bitwise tier.
    #[inline]
    pub const fn is_bitwise_equatable(&self) -> bool {
        self.class.is_flat() && self.caps.contains(Capabilities::BITWISE_EQUATABLE)
    }
}
