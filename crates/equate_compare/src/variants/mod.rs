//! The default comparer variants.
//!
//! One type per capability class, each stateless:
//!
//! | Kind | Type | Equality |
//! |------|------|----------|
//! | `Equatable` | [`EquatableComparer`] | `PartialEq` |
//! | `Equatable` (floats) | [`FloatComparer`] | value, with NaN equal to NaN |
//! | `NullableEquatable` / `NullableEnumeration` | [`NullableComparer`] | presence, then the inner variant |
//! | `Enumeration` | [`EnumComparer`] | integer repr |
//! | `Byte` | [`ByteComparer`] | `u8` value; search reserved |
//! | `Object` | [`ObjectComparer`] | [`ObjectEq`] override or identity |

mod byte;
mod enumeration;
mod equatable;
mod float;
mod nullable;
mod object;

pub use byte::ByteComparer;
pub use enumeration::{EnumComparer, Enumeration};
pub use equatable::EquatableComparer;
pub use float::FloatComparer;
pub use nullable::NullableComparer;
pub use object::{ObjectComparer, ObjectEq};
