//! Positional search primitives shared by every comparer variant.
//!
//! Both directions take a predicate rather than a comparer so each variant
//! can special-case its needle once (for example, searching for `None`)
//! and keep the per-element test statically dispatched.
//!
//! Ranges are the caller's responsibility. An out-of-range `start`/`count`
//! is a contract violation: it trips a debug assertion, and otherwise the
//! slice bounds check.

/// Forward scan of `block[start .. start + count]`.
///
/// Returns the first index whose element satisfies `matches`. An empty
/// range returns `None` without calling `matches`.
#[inline]
pub fn index_of<T>(
    block: &[T],
    start: usize,
    count: usize,
    matches: impl FnMut(&T) -> bool,
) -> Option<usize> {
    if count == 0 {
        return None;
    }
    debug_assert!(
        start <= block.len() && count <= block.len() - start,
        "forward range {start}+{count} exceeds block of {}",
        block.len()
    );

    block[start..start + count]
        .iter()
        .position(matches)
        .map(|offset| start + offset)
}

/// Backward scan from `start` (inclusive) over `count` elements.
///
/// Visits `start`, `start - 1`, ..., `start - count + 1` and returns the
/// first index (that is, the highest) whose element satisfies `matches`. An
/// empty range returns `None` without calling `matches`.
#[inline]
pub fn last_index_of<T>(
    block: &[T],
    start: usize,
    count: usize,
    matches: impl FnMut(&T) -> bool,
) -> Option<usize> {
    if count == 0 {
        return None;
    }
    debug_assert!(
        start < block.len() && count <= start + 1,
        "backward range {start}-{count} exceeds block of {}",
        block.len()
    );

    let first = start + 1 - count;
    block[first..=start]
        .iter()
        .rposition(matches)
        .map(|offset| first + offset)
}

#[cfg(test)]
mod tests;
