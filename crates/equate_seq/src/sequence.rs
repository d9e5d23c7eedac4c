//! The sequence model: the three shapes a compared collection can take.

use std::collections::VecDeque;
use std::fmt;
use std::ops::Deref;

/// Random access without contiguous storage.
pub trait RandomAccess<T> {
    /// Number of elements.
    fn len(&self) -> usize;

    /// The element at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<&T>;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<T> RandomAccess<T> for VecDeque<T> {
    #[inline]
    fn len(&self) -> usize {
        VecDeque::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        VecDeque::get(self, index)
    }
}

impl<T> RandomAccess<T> for Vec<T> {
    #[inline]
    fn len(&self) -> usize {
        Vec::len(self)
    }

    #[inline]
    fn get(&self, index: usize) -> Option<&T> {
        self.as_slice().get(index)
    }
}

/// An element produced by a [`Stream`]: borrowed from a container, or
/// produced by value.
pub enum Item<'a, T> {
    Borrowed(&'a T),
    Owned(T),
}

impl<T> Deref for Item<'_, T> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &T {
        match self {
            Item::Borrowed(item) => item,
            Item::Owned(item) => item,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Item<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&**self, f)
    }
}

/// A forward-only producer of elements, optionally with a known count.
///
/// The boxed iterator is owned by the stream; dropping the stream releases
/// whatever the iterator holds.
pub struct Stream<'a, T> {
    len: Option<usize>,
    items: Box<dyn Iterator<Item = Item<'a, T>> + 'a>,
}

impl<'a, T> Stream<'a, T> {
    fn new(len: Option<usize>, items: impl Iterator<Item = Item<'a, T>> + 'a) -> Self {
        Self {
            len,
            items: Box::new(items),
        }
    }

    /// The element count, if the producer declared one up front.
    #[inline]
    pub fn known_len(&self) -> Option<usize> {
        self.len
    }
}

impl<'a, T> Iterator for Stream<'a, T> {
    type Item = Item<'a, T>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.items.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.items.size_hint()
    }
}

impl<T> fmt::Debug for Stream<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream").field("len", &self.len).finish_non_exhaustive()
    }
}

/// A finite ordered collection to compare.
///
/// The shape decides which tier can serve a comparison: two `Contiguous`
/// sequences allow every tier, `Indexed` allows the indexed tier, and any
/// `Stream` forces iteration.
pub enum Sequence<'a, T> {
    /// A contiguous block of elements.
    Contiguous(&'a [T]),
    /// Random access with a known count but no contiguous memory.
    Indexed(&'a dyn RandomAccess<T>),
    /// Forward-only iteration.
    Stream(Stream<'a, T>),
}

impl<'a, T: 'a> Sequence<'a, T> {
    /// A stream of owned elements with no declared count.
    pub fn stream<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: 'a,
    {
        Self::Stream(Stream::new(None, items.into_iter().map(Item::Owned)))
    }

    /// A stream of borrowed elements with no declared count.
    pub fn stream_ref<I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: 'a,
    {
        Self::Stream(Stream::new(None, items.into_iter().map(Item::Borrowed)))
    }

    /// A stream of owned elements whose count is known before iteration.
    pub fn counted<I>(items: I) -> Self
    where
        I: IntoIterator<Item = T>,
        I::IntoIter: ExactSizeIterator + 'a,
    {
        let items = items.into_iter();
        Self::Stream(Stream::new(Some(items.len()), items.map(Item::Owned)))
    }

    /// A stream of borrowed elements whose count is known before iteration.
    pub fn counted_ref<I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a T>,
        I::IntoIter: ExactSizeIterator + 'a,
    {
        let items = items.into_iter();
        Self::Stream(Stream::new(Some(items.len()), items.map(Item::Borrowed)))
    }

    /// The element count, if known without iterating.
    pub fn known_len(&self) -> Option<usize> {
        match self {
            Sequence::Contiguous(block) => Some(block.len()),
            Sequence::Indexed(access) => Some(access.len()),
            Sequence::Stream(stream) => stream.known_len(),
        }
    }

    /// Returns `true` if the sequence supports random access.
    pub fn is_random_access(&self) -> bool {
        !matches!(self, Sequence::Stream(_))
    }

    /// Split into random access, or the stream it already is.
    pub(crate) fn into_access(self) -> Result<Access<'a, T>, Stream<'a, T>> {
        match self {
            Sequence::Contiguous(block) => Ok(Access::Slice(block)),
            Sequence::Indexed(access) => Ok(Access::Dyn(access)),
            Sequence::Stream(stream) => Err(stream),
        }
    }
}

impl<'a, T> From<&'a [T]> for Sequence<'a, T> {
    fn from(block: &'a [T]) -> Self {
        Sequence::Contiguous(block)
    }
}

impl<'a, T, const N: usize> From<&'a [T; N]> for Sequence<'a, T> {
    fn from(block: &'a [T; N]) -> Self {
        Sequence::Contiguous(block)
    }
}

impl<'a, T> From<&'a Vec<T>> for Sequence<'a, T> {
    fn from(block: &'a Vec<T>) -> Self {
        Sequence::Contiguous(block)
    }
}

impl<'a, T> From<&'a VecDeque<T>> for Sequence<'a, T> {
    fn from(deque: &'a VecDeque<T>) -> Self {
        Sequence::Indexed(deque)
    }
}

impl<T> fmt::Debug for Sequence<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Sequence::Contiguous(block) => write!(f, "Contiguous(len={})", block.len()),
            Sequence::Indexed(access) => write!(f, "Indexed(len={})", access.len()),
            Sequence::Stream(stream) => fmt::Debug::fmt(stream, f),
        }
    }
}

/// A random-access view used by the indexed tier.
pub(crate) enum Access<'a, T> {
    Slice(&'a [T]),
    Dyn(&'a dyn RandomAccess<T>),
}

impl<'a, T: 'a> Access<'a, T> {
    pub(crate) fn len(&self) -> usize {
        match self {
            Access::Slice(block) => block.len(),
            Access::Dyn(access) => access.len(),
        }
    }

    pub(crate) fn get(&self, index: usize) -> Option<&'a T> {
        match self {
            Access::Slice(block) => block.get(index),
            Access::Dyn(access) => access.get(index),
        }
    }

    /// Iterate in order, for comparisons against a stream.
    pub(crate) fn into_stream(self) -> Stream<'a, T> {
        match self {
            Access::Slice(block) => Stream::new(Some(block.len()), block.iter().map(Item::Borrowed)),
            Access::Dyn(access) => Stream::new(
                Some(access.len()),
                (0..access.len())
                    .map_while(move |index| access.get(index))
                    .map(Item::Borrowed),
            ),
        }
    }
}
