//! Ownership classification of element types.
//!
//! Every element type is classified as [`Flat`](ValueClass::Flat) (plain
//! bytes, no pointers), [`DefiniteRef`](ValueClass::DefiniteRef) (holds a
//! reference, box, or other ownership-sensitive pointer), or
//! [`PossibleRef`](ValueClass::PossibleRef) (unknown, treated as a
//! reference). Only `Flat` types may ever be compared byte-for-byte.

/// Ownership classification for an element type.
///
/// Compound types classify transitively through [`ValueClass::combine`]:
///
/// - `(u32, bool)` → **Flat**
/// - `(u32, String)` → **`DefiniteRef`**
/// - a user type with no declared layout → **`PossibleRef`**
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ValueClass {
    /// No references anywhere in the value. The bytes are the value.
    ///
    /// Examples: `i32`, `f64`, `bool`, `char`, `u8`, `()`, `[u16; 4]`,
    /// `Option<i32>`, `(u8, u32)`.
    Flat,

    /// Definitely contains a pointer or an owning handle.
    ///
    /// Examples: `String`, `&'static str`, `Box<T>`, `Vec<T>`, `Arc<T>`,
    /// `(i32, String)`.
    DefiniteRef,

    /// Nothing is known about the layout. Conservatively treated as a
    /// reference.
    PossibleRef,
}

impl ValueClass {
    /// Returns `true` if values of this class are plain bytes.
    #[inline]
    pub const fn is_flat(self) -> bool {
        matches!(self, Self::Flat)
    }

    /// Classify a compound type by its children.
    ///
    /// If ANY child is `DefiniteRef`, the compound is `DefiniteRef`. If ANY
    /// child is `PossibleRef` (and none is `DefiniteRef`), the compound is
    /// `PossibleRef`. Otherwise `Flat`.
    pub const fn combine(children: &[Self]) -> Self {
        let mut has_possible = false;
        let mut i = 0;
        while i < children.len() {
            match children[i] {
                Self::Flat => {}
                // Short-circuit: DefiniteRef is the strongest classification.
                Self::DefiniteRef => return Self::DefiniteRef,
                Self::PossibleRef => has_possible = true,
            }
            i += 1;
        }

        if has_possible {
            Self::PossibleRef
        } else {
            Self::Flat
        }
    }
}
