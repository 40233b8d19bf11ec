//! An immutable, cheaply cloneable and sliceable list wrapper.
//!
//! `ScFrozenList` keeps its elements in an `Arc<[T]>` and stores an offset and
//! length to describe its view, so cloning and slicing never copy elements.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::RangeBounds;
use std::sync::Arc;

use crate::{iterable::ScIterable, seq::ScSeq};

/// An immutable list that can be iterated any number of times and shared freely.
///
/// Iterating an owned `ScFrozenList` by value yields clones of its elements, so
/// by-value combinators require `T: Clone`. Iterating a reference yields `&T`.
///
/// # Examples
///
/// ```
/// use scalaps::{ScIterable, ScSeq};
///
/// let squares = ScSeq::new(1..=5).map(|x| x * x).to_frozen_list();
/// let tail = squares.slice(2..);
/// assert_eq!(tail.as_slice(), &[9, 16, 25]);
///
/// // `squares` is still available: slicing shares the storage.
/// let odd = squares.iter().filter(|x| *x % 2 == 1).count();
/// assert_eq!(odd, 3);
/// ```
#[derive(Clone)]
pub struct ScFrozenList<T> {
    inner: Arc<[T]>,
    offset: usize,
    len: usize,
}

impl<T> ScFrozenList<T> {
    /// Creates a new `ScFrozenList` from a `Vec<T>`, taking ownership of the data.
    pub fn from_vec(vec: Vec<T>) -> ScFrozenList<T> {
        let len = vec.len();
        ScFrozenList {
            inner: Arc::from(vec),
            offset: 0,
            len,
        }
    }

    /// Creates a new `ScFrozenList` from a slice by cloning the data.
    pub fn from_slice(slice: &[T]) -> ScFrozenList<T>
    where
        T: Clone,
    {
        ScFrozenList::from_vec(slice.to_vec())
    }

    /// Returns an empty `ScFrozenList`.
    pub fn empty() -> ScFrozenList<T> {
        ScFrozenList::from_vec(Vec::new())
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a reference to the element at the given index, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        if index < self.len {
            Some(&self.inner[self.offset + index])
        } else {
            None
        }
    }

    #[inline]
    pub fn head_option(&self) -> Option<&T> {
        self.get(0)
    }

    #[inline]
    pub fn last_option(&self) -> Option<&T> {
        self.len.checked_sub(1).and_then(|i| self.get(i))
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.inner[self.offset..self.offset + self.len]
    }

    /// Returns a borrowing sequence over the elements.
    pub fn iter(&self) -> ScSeq<std::slice::Iter<'_, T>> {
        ScSeq::new(self.as_slice().iter())
    }

    /// Returns a view over a sub-range of this list without copying elements.
    ///
    /// # Panics
    ///
    /// Panics if the range is out of bounds.
    pub fn slice<R>(&self, range: R) -> ScFrozenList<T>
    where
        R: RangeBounds<usize>,
    {
        use std::ops::Bound;
        // Saturating so that `usize::MAX` bounds land on the assert below.
        let start = match range.start_bound() {
            Bound::Included(&n) => n,
            Bound::Excluded(&n) => n.saturating_add(1),
            Bound::Unbounded => 0,
        };
        let end = match range.end_bound() {
            Bound::Included(&n) => n.saturating_add(1),
            Bound::Excluded(&n) => n,
            Bound::Unbounded => self.len,
        };
        assert!(start <= end && end <= self.len, "slice out of bounds");
        ScFrozenList {
            inner: self.inner.clone(),
            offset: self.offset + start,
            len: end - start,
        }
    }

    /// Returns `true` when both lists are views into the same allocation.
    pub fn shares_storage_with(&self, other: &ScFrozenList<T>) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T> std::ops::Index<usize> for ScFrozenList<T> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<T> AsRef<[T]> for ScFrozenList<T> {
    fn as_ref(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T> Borrow<[T]> for ScFrozenList<T> {
    fn borrow(&self) -> &[T] {
        self.as_slice()
    }
}

impl<T: fmt::Debug> fmt::Debug for ScFrozenList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ScFrozenList").field(&self.as_slice()).finish()
    }
}

impl<T: PartialEq> PartialEq for ScFrozenList<T> {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq> Eq for ScFrozenList<T> {}

impl<T: PartialOrd> PartialOrd for ScFrozenList<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.as_slice().partial_cmp(other.as_slice())
    }
}

impl<T: Ord> Ord for ScFrozenList<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_slice().cmp(other.as_slice())
    }
}

impl<T: Hash> Hash for ScFrozenList<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_slice().hash(state)
    }
}

impl<T> Default for ScFrozenList<T> {
    fn default() -> Self {
        ScFrozenList::empty()
    }
}

impl<T> From<Vec<T>> for ScFrozenList<T> {
    fn from(vec: Vec<T>) -> Self {
        ScFrozenList::from_vec(vec)
    }
}

impl<T: Clone> From<&[T]> for ScFrozenList<T> {
    fn from(slice: &[T]) -> Self {
        ScFrozenList::from_slice(slice)
    }
}

impl<T, const N: usize> From<[T; N]> for ScFrozenList<T> {
    fn from(items: [T; N]) -> Self {
        ScFrozenList::from_vec(Vec::from(items))
    }
}

impl<T> FromIterator<T> for ScFrozenList<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        ScFrozenList::from_vec(iter.into_iter().collect())
    }
}

impl<'a, T> IntoIterator for &'a ScFrozenList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// By-value iterator over an [`ScFrozenList`], yielding clones of its elements.
#[derive(Clone)]
pub struct FrozenListIntoIter<T> {
    inner: Arc<[T]>,
    pos: usize,
    end: usize,
}

impl<T: Clone> Iterator for FrozenListIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        if self.pos < self.end {
            let item = self.inner[self.pos].clone();
            self.pos += 1;
            Some(item)
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.end - self.pos;
        (remaining, Some(remaining))
    }
}

impl<T: Clone> DoubleEndedIterator for FrozenListIntoIter<T> {
    fn next_back(&mut self) -> Option<T> {
        if self.pos < self.end {
            self.end -= 1;
            Some(self.inner[self.end].clone())
        } else {
            None
        }
    }
}

impl<T: Clone> ExactSizeIterator for FrozenListIntoIter<T> {}

impl<T: Clone> IntoIterator for ScFrozenList<T> {
    type Item = T;
    type IntoIter = FrozenListIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        FrozenListIntoIter {
            inner: self.inner,
            pos: self.offset,
            end: self.offset + self.len,
        }
    }
}

impl<T: Clone> ScIterable for ScFrozenList<T> {
    fn to_frozen_list(self) -> ScFrozenList<T> {
        self
    }
}

impl<T> ScIterable for &ScFrozenList<T> {}
