//! The sequence equality engine.
//!
//! Absent arguments are rejected before any work. The comparer is resolved
//! once: an explicit comparer that is the element type's default counts as
//! no comparer, so it does not rule out the bitwise tier. Per-element
//! comparisons under the default comparer are statically dispatched.

use equate_compare::{bitwise, default_comparer, is_default, Element, EqualityComparer};

use crate::sequence::Access;
use crate::{Param, Sequence, SequenceError, Stream, Tier};

/// Compare two sequences under `T`'s default comparer.
///
/// Equivalent to [`sequence_equal_with`] with no comparer.
///
/// ```
/// use equate_seq::{sequence_equal, Sequence};
///
/// let first = [1, 2, 3];
/// let second = vec![1, 2, 3];
/// let result = sequence_equal(
///     Some(Sequence::Contiguous(&first[..])),
///     Some(Sequence::Contiguous(&second[..])),
/// );
/// assert_eq!(result, Ok(true));
/// assert!(sequence_equal::<i32>(None, Some(Sequence::stream(0..3))).is_err());
/// ```
pub fn sequence_equal<T: Element>(
    first: Option<Sequence<'_, T>>,
    second: Option<Sequence<'_, T>>,
) -> Result<bool, SequenceError> {
    sequence_equal_with(first, second, None)
}

/// Compare two sequences element by element.
///
/// Returns `Ok(true)` if both have the same length and every pair of
/// elements at the same position is equal under `comparer`, or under `T`'s
/// default comparer when `comparer` is `None`.
///
/// # Errors
///
/// [`SequenceError::AbsentArgument`] if `first` or `second` is `None`,
/// naming `first` when both are.
#[tracing::instrument(level = "trace", skip_all)]
pub fn sequence_equal_with<T: Element>(
    first: Option<Sequence<'_, T>>,
    second: Option<Sequence<'_, T>>,
    comparer: Option<&dyn EqualityComparer<T>>,
) -> Result<bool, SequenceError> {
    let first = first.ok_or(SequenceError::AbsentArgument { param: Param::First })?;
    let second = second.ok_or(SequenceError::AbsentArgument {
        param: Param::Second,
    })?;

    let custom = custom_comparer(comparer);
    let tier = Tier::select(&first, &second, custom.is_some());
    tracing::trace!(
        %tier,
        first_len = ?first.known_len(),
        second_len = ?second.known_len(),
        custom_comparer = custom.is_some(),
        "selected tier"
    );

    Ok(match custom {
        Some(comparer) => compare(tier, first, second, comparer),
        None => compare(tier, first, second, default_comparer::<T>()),
    })
}

/// The explicit comparer, unless it is `T`'s default.
fn custom_comparer<'c, T: Element>(
    comparer: Option<&'c dyn EqualityComparer<T>>,
) -> Option<&'c dyn EqualityComparer<T>> {
    comparer.filter(|comparer| !is_default::<T>(*comparer))
}

fn compare<T, C>(tier: Tier, first: Sequence<'_, T>, second: Sequence<'_, T>, comparer: &C) -> bool
where
    T: Element,
    C: EqualityComparer<T> + ?Sized,
{
    match (first.into_access(), second.into_access()) {
        (Ok(first), Ok(second)) => {
            if tier == Tier::Bitwise {
                if let Some(equal) = bitwise_equal(&first, &second) {
                    return equal;
                }
            }
            indexed_equal(&first, &second, comparer)
        }
        (first, second) => iterator_equal(into_stream(first), into_stream(second), comparer),
    }
}

/// Tier 1: byte comparison of two slices. `None` if either side is not a
/// slice of a bitwise-equatable type.
fn bitwise_equal<T: Element>(first: &Access<'_, T>, second: &Access<'_, T>) -> Option<bool> {
    match (first, second) {
        (Access::Slice(first), Access::Slice(second)) => bitwise::bytes_equal(first, second),
        _ => None,
    }
}

/// Tier 2: length check, then index by index.
fn indexed_equal<T, C>(first: &Access<'_, T>, second: &Access<'_, T>, comparer: &C) -> bool
where
    C: EqualityComparer<T> + ?Sized,
{
    if first.len() != second.len() {
        return false;
    }

    match (first, second) {
        (Access::Slice(first), Access::Slice(second)) => first
            .iter()
            .zip(second.iter())
            .all(|(x, y)| comparer.equals(x, y)),
        _ => (0..first.len()).all(|index| match (first.get(index), second.get(index)) {
            (Some(x), Some(y)) => comparer.equals(x, y),
            _ => false,
        }),
    }
}

/// Tier 3: counted short-circuit, then lockstep iteration.
///
/// Both streams are owned here and dropped on every return.
fn iterator_equal<T, C>(mut first: Stream<'_, T>, mut second: Stream<'_, T>, comparer: &C) -> bool
where
    C: EqualityComparer<T> + ?Sized,
{
    if let (Some(first_len), Some(second_len)) = (first.known_len(), second.known_len()) {
        if first_len != second_len {
            return false;
        }
    }

    loop {
        match (first.next(), second.next()) {
            (Some(x), Some(y)) => {
                if !comparer.equals(&x, &y) {
                    return false;
                }
            }
            (None, None) => return true,
            _ => return false,
        }
    }
}

fn into_stream<'a, T: 'a>(sequence: Result<Access<'a, T>, Stream<'a, T>>) -> Stream<'a, T> {
    match sequence {
        Ok(access) => access.into_stream(),
        Err(stream) => stream,
    }
}
