//! Comparer variants and the resolution priority rule.

use std::fmt;

use crate::TypeInfo;

/// The closed set of default comparer variants.
///
/// Every element type resolves to exactly one kind through
/// [`ComparerKind::resolve`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ComparerKind {
    /// Typed equality (`PartialEq`), statically dispatched.
    Equatable,
    /// `Option<U>` where `U` is equatable.
    NullableEquatable,
    /// Integer-backed enumeration compared by its repr.
    Enumeration,
    /// `Option<E>` where `E` is an enumeration.
    NullableEnumeration,
    /// Single byte. Reserved: searching goes through the bitwise tier.
    Byte,
    /// Untyped equality override, or identity.
    Object,
}

impl ComparerKind {
    /// Pick the comparer variant for a described type.
    ///
    /// Priority: single byte (reserved) > equatable > nullable equatable >
    /// enumeration > nullable enumeration > object fallback.
    pub const fn resolve(info: &TypeInfo) -> Self {
        let caps = info.capabilities();
        let underlying = info.underlying();

        if caps.is_single_byte() {
            Self::Byte
        } else if caps.is_equatable() {
            Self::Equatable
        } else if caps.is_nullable() && underlying.is_equatable() {
            Self::NullableEquatable
        } else if caps.is_enumeration() {
            Self::Enumeration
        } else if caps.is_nullable() && underlying.is_enumeration() {
            Self::NullableEnumeration
        } else {
            Self::Object
        }
    }

    /// The kind `Option<U>` resolves to when `U` resolves to `inner`.
    ///
    /// Agrees with [`resolve`](Self::resolve) applied to
    /// [`TypeInfo::nullable`].
    pub const fn wrap_nullable(inner: Self) -> Self {
        match inner {
            Self::Equatable | Self::Byte => Self::NullableEquatable,
            Self::Enumeration => Self::NullableEnumeration,
            Self::NullableEquatable | Self::NullableEnumeration | Self::Object => Self::Object,
        }
    }

    /// Returns `true` for the presence-checking variants.
    #[inline]
    pub const fn is_nullable(self) -> bool {
        matches!(self, Self::NullableEquatable | Self::NullableEnumeration)
    }

    /// Stable lowercase name, used in logs.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Equatable => "equatable",
            Self::NullableEquatable => "nullable-equatable",
            Self::Enumeration => "enumeration",
            Self::NullableEnumeration => "nullable-enumeration",
            Self::Byte => "byte",
            Self::Object => "object",
        }
    }
}

impl fmt::Display for ComparerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
