//! Type descriptors for the equate comparer system.
//!
//! This crate provides:
//!
//! - **Capabilities** ([`Capabilities`]): which equality contract a type
//!   offers and what is known about its bytes.
//!
//! - **Ownership classification** ([`ValueClass`]): every element type is
//!   [`Flat`](ValueClass::Flat), [`DefiniteRef`](ValueClass::DefiniteRef),
//!   or [`PossibleRef`](ValueClass::PossibleRef).
//!
//! - **Descriptors** ([`TypeInfo`]): the compile-time record combining both,
//!   including layout proofs for tuples and arrays.
//!
//! - **Resolution** ([`ComparerKind::resolve`]): the priority rule that maps
//!   a descriptor to exactly one comparer variant.
//!
//! # Crate Dependencies
//!
//! No `equate_*` dependencies. `equate_compare` builds the comparers these
//! descriptors select; `equate_seq` reads them to gate its bitwise tier.

mod capabilities;
mod kind;
mod type_info;
mod value_class;

pub use capabilities::Capabilities;
pub use kind::ComparerKind;
pub use type_info::TypeInfo;
pub use value_class::ValueClass;
