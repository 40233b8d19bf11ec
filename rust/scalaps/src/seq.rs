//! Lazy, single-pass sequence wrapper.

use std::fmt;

use crate::iterable::ScIterable;

/// A lazy wrapper around an arbitrary iterator.
///
/// `ScSeq` is the sequence every lazy combinator of [`ScIterable`] returns. It is
/// single-pass: iterating consumes the wrapper, so a sequence cannot be walked
/// twice. Realize it with [`ScIterable::to_list`] or
/// [`ScIterable::to_frozen_list`] when repeated access is needed, or clone the
/// sequence up front when the underlying iterator is `Clone`.
///
/// `ScSeq` deliberately does not implement [`Iterator`]; it implements
/// [`IntoIterator`] instead, which keeps the fluent methods of [`ScIterable`]
/// free of name clashes with the standard iterator methods.
///
/// # Examples
///
/// ```
/// use scalaps::{ScIterable, ScSeq};
///
/// let evens = ScSeq::new(0..10)
///     .map(|x| x + 3)
///     .filter(|x| x % 2 == 0)
///     .to_vec();
/// assert_eq!(evens, vec![4, 6, 8, 10, 12]);
/// ```
#[derive(Clone)]
pub struct ScSeq<I> {
    inner: I,
}

impl<I> ScSeq<I>
where
    I: Iterator,
{
    /// Wraps anything that can be iterated.
    pub fn new<S>(source: S) -> ScSeq<I>
    where
        S: IntoIterator<IntoIter = I>,
    {
        ScSeq {
            inner: source.into_iter(),
        }
    }

    /// Unwraps the underlying iterator.
    pub fn into_inner(self) -> I {
        self.inner
    }
}

impl<T> ScSeq<std::iter::Empty<T>> {
    /// Returns a sequence with no elements.
    pub fn empty() -> ScSeq<std::iter::Empty<T>> {
        ScSeq {
            inner: std::iter::empty(),
        }
    }
}

impl<I> IntoIterator for ScSeq<I>
where
    I: Iterator,
{
    type Item = I::Item;
    type IntoIter = I;

    fn into_iter(self) -> I {
        self.inner
    }
}

impl<I> ScIterable for ScSeq<I> where I: Iterator {}

impl<I> fmt::Debug for ScSeq<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScSeq").finish_non_exhaustive()
    }
}
