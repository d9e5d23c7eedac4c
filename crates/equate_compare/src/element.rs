//! Element types: a descriptor plus a statically chosen default comparer.
//!
//! Every type usable with the default comparer machinery implements
//! [`Element`]. The associated [`Comparer`](Element::Comparer) is the
//! variant [`ComparerKind::resolve`](equate_types::ComparerKind::resolve)
//! selects for [`TYPE`](Element::TYPE); the registry checks that the two
//! agree the first time the comparer is published.
//!
//! # Declaring Element Types
//!
//! | Macro | Kind |
//! |-------|------|
//! | [`equatable_element!`](crate::equatable_element) | `Equatable` (`PartialEq`) |
//! | [`enumeration_element!`](crate::enumeration_element) | `Enumeration` |
//! | [`object_element!`](crate::object_element) | `Object` ([`ObjectEq`](crate::ObjectEq)) |
//!
//! `Option<U>` of any element is an element. Types that are bitwise
//! equatable implement `Element` by hand with
//! [`TypeInfo::assume_bitwise_equatable`].

use std::rc::Rc;
use std::sync::Arc;

use equate_types::{Capabilities, TypeInfo, ValueClass};

use crate::comparer::Variant;
use crate::{ByteComparer, EquatableComparer, FloatComparer, NullableComparer};

/// A type with a compile-time descriptor and a default comparer.
pub trait Element: Sized + 'static {
    /// Static description of the type's capabilities and layout.
    const TYPE: TypeInfo;

    /// The default comparer variant for this type.
    type Comparer: Variant<Self>;
}

/// Integers, `bool` and `char`: every bit pattern of a valid value is
/// significant and there is no padding.
macro_rules! bitwise_primitive {
    ($($t:ty),+ $(,)?) => {$(
        #[allow(unsafe_code, reason = "asserts bitwise equality of a padding-free integer")]
        impl Element for $t {
            // SAFETY: no padding; equality is equality of the value bits.
            const TYPE: TypeInfo =
                unsafe { TypeInfo::equatable::<$t>(ValueClass::Flat).assume_bitwise_equatable() };
            type Comparer = EquatableComparer<$t>;
        }
    )+};
}

bitwise_primitive!(i8, i16, i32, i64, i128, isize, u16, u32, u64, u128, usize, bool, char);

#[allow(unsafe_code, reason = "asserts bitwise equality of a single byte")]
impl Element for u8 {
    // SAFETY: a byte is its own bit pattern.
    const TYPE: TypeInfo = unsafe {
        TypeInfo::new::<u8>(
            ValueClass::Flat,
            Capabilities::EQUATABLE.union(Capabilities::SINGLE_BYTE),
        )
        .assume_bitwise_equatable()
    };
    type Comparer = ByteComparer;
}

// Floats are flat but not bitwise: `0.0 == -0.0`, and NaN payloads differ.
impl Element for f32 {
    const TYPE: TypeInfo = TypeInfo::equatable::<f32>(ValueClass::Flat);
    type Comparer = FloatComparer<f32>;
}

impl Element for f64 {
    const TYPE: TypeInfo = TypeInfo::equatable::<f64>(ValueClass::Flat);
    type Comparer = FloatComparer<f64>;
}

impl Element for () {
    const TYPE: TypeInfo = TypeInfo::composite::<()>(&[]);
    type Comparer = EquatableComparer<()>;
}

impl Element for String {
    const TYPE: TypeInfo = TypeInfo::equatable::<String>(ValueClass::DefiniteRef);
    type Comparer = EquatableComparer<String>;
}

impl Element for &'static str {
    const TYPE: TypeInfo = TypeInfo::equatable::<&'static str>(ValueClass::DefiniteRef);
    type Comparer = EquatableComparer<&'static str>;
}

impl<T: ?Sized + PartialEq + 'static> Element for Box<T> {
    const TYPE: TypeInfo = TypeInfo::equatable::<Box<T>>(ValueClass::DefiniteRef);
    type Comparer = EquatableComparer<Box<T>>;
}

impl<T: ?Sized + PartialEq + 'static> Element for Rc<T> {
    const TYPE: TypeInfo = TypeInfo::equatable::<Rc<T>>(ValueClass::DefiniteRef);
    type Comparer = EquatableComparer<Rc<T>>;
}

impl<T: ?Sized + PartialEq + 'static> Element for Arc<T> {
    const TYPE: TypeInfo = TypeInfo::equatable::<Arc<T>>(ValueClass::DefiniteRef);
    type Comparer = EquatableComparer<Arc<T>>;
}

impl<T: PartialEq + 'static> Element for Vec<T> {
    const TYPE: TypeInfo = TypeInfo::equatable::<Vec<T>>(ValueClass::DefiniteRef);
    type Comparer = EquatableComparer<Vec<T>>;
}

impl<U: Element> Element for Option<U> {
    const TYPE: TypeInfo = TypeInfo::nullable::<Option<U>>(U::TYPE);
    type Comparer = NullableComparer<U>;
}

impl<T: Element + PartialEq, const N: usize> Element for [T; N] {
    const TYPE: TypeInfo = TypeInfo::array::<[T; N]>(T::TYPE);
    type Comparer = EquatableComparer<[T; N]>;
}

/// Tuples compare field-wise and are bitwise only when padding-free.
macro_rules! tuple_element {
    ($($name:ident),+) => {
        impl<$($name: Element + PartialEq),+> Element for ($($name,)+) {
            const TYPE: TypeInfo = TypeInfo::composite::<($($name,)+)>(&[$($name::TYPE),+]);
            type Comparer = EquatableComparer<($($name,)+)>;
        }
    };
}

tuple_element!(A);
tuple_element!(A, B);
tuple_element!(A, B, C);
tuple_element!(A, B, C, D);

/// Declare `PartialEq` types as elements with the `Equatable` comparer.
///
/// Nothing is assumed about their layout (`PossibleRef`), so they never
/// take the bitwise tier.
///
/// ```
/// #[derive(PartialEq)]
/// struct Point { x: i32, y: i32 }
///
/// equate_compare::equatable_element!(Point);
///
/// let points = [Point { x: 1, y: 2 }, Point { x: 3, y: 4 }];
/// assert_eq!(equate_compare::index_of(&points, &Point { x: 3, y: 4 }), Some(1));
/// ```
#[macro_export]
macro_rules! equatable_element {
    ($($t:ty),+ $(,)?) => {$(
        impl $crate::Element for $t {
            const TYPE: $crate::TypeInfo =
                $crate::TypeInfo::equatable::<$t>($crate::ValueClass::PossibleRef);
            type Comparer = $crate::EquatableComparer<$t>;
        }
    )+};
}

/// Declare fieldless enums as elements compared by their integer repr.
///
/// The enum must be `Copy`; the repr is the discriminant cast to the given
/// integer type.
///
/// ```
/// #[derive(Clone, Copy)]
/// #[repr(u8)]
/// enum Color { Red, Green, Blue }
///
/// equate_compare::enumeration_element!(Color as u8);
///
/// let colors = [Color::Red, Color::Blue, Color::Green, Color::Blue];
/// assert_eq!(equate_compare::last_index_of(&colors, &Color::Blue), Some(3));
/// ```
#[macro_export]
macro_rules! enumeration_element {
    ($($t:ty as $repr:ty),+ $(,)?) => {$(
        impl $crate::Enumeration for $t {
            type Repr = $repr;

            #[inline]
            fn to_repr(self) -> $repr {
                self as $repr
            }
        }

        impl $crate::Element for $t {
            const TYPE: $crate::TypeInfo = $crate::TypeInfo::enumeration::<$t>();
            type Comparer = $crate::EnumComparer<$t>;
        }
    )+};
}

/// Declare types without typed equality as elements with the `Object`
/// comparer. Each type must implement [`ObjectEq`](crate::ObjectEq).
///
/// ```
/// struct Handle(std::cell::Cell<u32>);
///
/// impl equate_compare::ObjectEq for Handle {}
/// equate_compare::object_element!(Handle);
///
/// let handles = [Handle(0.into()), Handle(0.into())];
/// // Identity: only the very same handle matches.
/// assert_eq!(equate_compare::index_of(&handles, &handles[1]), Some(1));
/// ```
#[macro_export]
macro_rules! object_element {
    ($($t:ty),+ $(,)?) => {$(
        impl $crate::Element for $t {
            const TYPE: $crate::TypeInfo = $crate::TypeInfo::object::<$t>();
            type Comparer = $crate::ObjectComparer<$t>;
        }
    )+};
}
