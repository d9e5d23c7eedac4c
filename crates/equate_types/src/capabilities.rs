//! Static capability flags for element types.
//!
//! `Capabilities` are declared once per element type (as part of its
//! [`TypeInfo`](crate::TypeInfo)) and never recomputed. The resolver reads
//! them to pick a comparer variant; the sequence engine reads them to gate
//! the bitwise tier.
//!
//! Flags are organized into two groups:
//! - **Equality flags**: which typed equality contract the type offers.
//! - **Layout flags**: what is known about the type's in-memory bytes.

use bitflags::bitflags;

bitflags! {
    /// Pre-declared element type properties for O(1) queries.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
    #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
    pub struct Capabilities: u16 {
        // === Equality Flags (bits 0-7) ===

        /// Declares a typed equality contract (`PartialEq<Self>`).
        const EQUATABLE = 1 << 0;
        /// Nullable wrapper (`Option<U>`); see `TypeInfo::underlying`.
        const NULLABLE = 1 << 1;
        /// Fieldless enumeration compared through its integer repr.
        const ENUMERATION = 1 << 2;
        /// Single-byte value type (`u8`).
        const SINGLE_BYTE = 1 << 3;

        // === Layout Flags (bits 8-15) ===

        /// Equality is identical to raw byte-pattern equality and the
        /// type has no padding bytes. Only settable through an `unsafe`
        /// assertion or a layout proof.
        const BITWISE_EQUATABLE = 1 << 8;
    }
}

impl Capabilities {
    /// Flags a composite inherits only when *every* field has them.
    ///
    /// Equality flags are not inherited: a composite declares its own
    /// equality (field-wise `PartialEq`), whatever its fields declare.
    pub const INHERITED_MASK: Self = Self::BITWISE_EQUATABLE;

    /// Check if the type declares typed equality.
    #[inline]
    pub const fn is_equatable(self) -> bool {
        self.contains(Self::EQUATABLE)
    }

    /// Check if the type is a nullable wrapper.
    #[inline]
    pub const fn is_nullable(self) -> bool {
        self.contains(Self::NULLABLE)
    }

    /// Check if the type is an integer-backed enumeration.
    #[inline]
    pub const fn is_enumeration(self) -> bool {
        self.contains(Self::ENUMERATION)
    }

    /// Check if the type is a single byte.
    #[inline]
    pub const fn is_single_byte(self) -> bool {
        self.contains(Self::SINGLE_BYTE)
    }

    /// Combine the flags of composite fields.
    ///
    /// Only [`INHERITED_MASK`](Self::INHERITED_MASK) flags survive, and only
    /// when all fields carry them. An empty field list yields the full mask
    /// (the unit value is trivially bitwise).
    #[inline]
    pub const fn intersect_all(fields: &[Self]) -> Self {
        let mut bits = Self::INHERITED_MASK.bits();
        let mut i = 0;
        while i < fields.len() {
            bits &= fields[i].bits();
            i += 1;
        }
        Self::from_bits_truncate(bits)
    }
}

impl Default for Capabilities {
    fn default() -> Self {
        Self::empty()
    }
}
