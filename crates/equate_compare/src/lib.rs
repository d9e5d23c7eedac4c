//! Default equality comparers for the equate workspace.
//!
//! This crate provides:
//!
//! - **The comparer contract** ([`EqualityComparer`]): `equals`, plus
//!   `index_of`/`last_index_of` over a range of a slice.
//!
//! - **Default variants** ([`EquatableComparer`], [`FloatComparer`],
//!   [`NullableComparer`], [`EnumComparer`], [`ByteComparer`],
//!   [`ObjectComparer`]): the closed set of strategies. Each implements one
//!   [`ComparerKind`]; floats get their own equatable variant so NaN stays
//!   equal to itself.
//!
//! - **Element types** ([`Element`]): each type names its descriptor and,
//!   statically, its default variant. Per-element comparisons therefore
//!   never go through dynamic dispatch.
//!
//! - **The registry** ([`ComparerRegistry`], [`default_comparer`]): one
//!   `'static` default comparer per element type, published on first use.
//!
//! - **Search** ([`search`], [`index_of`], [`last_index_of`]): the shared
//!   scanning primitives and the whole-slice entry points containers call.
//!
//! # Crate Dependencies
//!
//! `equate_compare` depends on `equate_types` for descriptors and the
//! resolution rule, and re-exports them so the declaration macros only need
//! this crate.

pub mod bitwise;
mod comparer;
mod element;
mod lookup;
mod registry;
pub mod search;
mod variants;

pub use comparer::{EqualityComparer, FnComparer, Variant};
pub use element::Element;
pub use equate_types::{Capabilities, ComparerKind, TypeInfo, ValueClass};
pub use lookup::{index_of, last_index_of};
pub use registry::{default_comparer, default_dyn, is_default, ComparerRegistry};
pub use variants::{
    ByteComparer, EnumComparer, Enumeration, EquatableComparer, FloatComparer, NullableComparer,
    ObjectComparer, ObjectEq,
};

/// Kind of the default comparer `T` resolves to.
#[inline]
pub const fn kind_of<T: Element>() -> ComparerKind {
    <T::Comparer as Variant<T>>::KIND
}

#[cfg(test)]
mod test_helpers;
