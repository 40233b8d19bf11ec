//! Realized, growable list wrapper.

use std::fmt;

use crate::{iterable::ScIterable, seq::ScSeq};

/// A realized list that can be iterated any number of times.
///
/// `ScList` owns a `Vec<T>` and adds the fluent combinators of [`ScIterable`].
/// Calling a combinator on an owned `ScList` consumes it; call it on a
/// reference (or go through [`ScList::iter`]) to keep the list around.
///
/// # Examples
///
/// ```
/// use scalaps::{ScIterable, ScList};
///
/// let mut words = ScList::new();
/// words.push("tree");
/// words.push("bark");
/// words.push("leaf");
///
/// let b_words = words.iter().filter(|w| w.starts_with('b')).count();
/// assert_eq!(b_words, 1);
/// assert_eq!(words.len(), 3);
///
/// let sorted = words.sorted();
/// assert_eq!(sorted.as_slice(), &["bark", "leaf", "tree"]);
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(transparent)
)]
pub struct ScList<T> {
    items: Vec<T>,
}

impl<T> ScList<T> {
    /// Creates a new empty `ScList`.
    pub fn new() -> ScList<T> {
        ScList { items: Vec::new() }
    }

    /// Creates a new empty `ScList` with the specified capacity.
    pub fn with_capacity(capacity: usize) -> ScList<T> {
        ScList {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Returns the number of elements in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Appends an element to the back of the list.
    pub fn push(&mut self, value: T) {
        self.items.push(value);
    }

    /// Returns a reference to the element at the given index, or `None` if out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Returns the first element, or `None` if the list is empty.
    pub fn head_option(&self) -> Option<&T> {
        self.items.first()
    }

    /// Returns the last element, or `None` if the list is empty.
    pub fn last_option(&self) -> Option<&T> {
        self.items.last()
    }

    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns a borrowing sequence over the elements, leaving the list intact.
    pub fn iter(&self) -> ScSeq<std::slice::Iter<'_, T>> {
        ScSeq::new(self.items.iter())
    }

    /// Consumes the list and returns the underlying `Vec`.
    pub fn into_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> Default for ScList<T> {
    fn default() -> Self {
        ScList::new()
    }
}

impl<T> std::ops::Index<usize> for ScList<T> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        &self.items[index]
    }
}

impl<T> std::ops::IndexMut<usize> for ScList<T> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        &mut self.items[index]
    }
}

impl<T> AsRef<[T]> for ScList<T> {
    fn as_ref(&self) -> &[T] {
        &self.items
    }
}

impl<T: fmt::Debug> fmt::Debug for ScList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ScList").field(&self.items).finish()
    }
}

impl<T> From<Vec<T>> for ScList<T> {
    fn from(items: Vec<T>) -> Self {
        ScList { items }
    }
}

impl<T, const N: usize> From<[T; N]> for ScList<T> {
    fn from(items: [T; N]) -> Self {
        ScList {
            items: Vec::from(items),
        }
    }
}

impl<T> From<ScList<T>> for Vec<T> {
    fn from(list: ScList<T>) -> Self {
        list.items
    }
}

impl<T> FromIterator<T> for ScList<T> {
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = T>,
    {
        ScList {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for ScList<T> {
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = T>,
    {
        self.items.extend(iter);
    }
}

impl<T> IntoIterator for ScList<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a ScList<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl<T> ScIterable for ScList<T> {
    fn to_list(self) -> ScList<T> {
        self
    }

    fn to_vec(self) -> Vec<T> {
        self.items
    }
}

impl<T> ScIterable for &ScList<T> {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new() {
        let list = ScList::<u32>::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_with_capacity() {
        let list = ScList::<u32>::with_capacity(16);
        assert!(list.is_empty());
        assert!(list.items.capacity() >= 16);
    }

    #[test]
    fn test_push_and_get() {
        let mut list = ScList::new();
        list.push(10);
        list.push(20);
        assert_eq!(list.len(), 2);
        assert_eq!(list.get(0), Some(&10));
        assert_eq!(list.get(1), Some(&20));
        assert_eq!(list.get(2), None);
        assert_eq!(list[1], 20);
    }

    #[test]
    fn test_index_mut() {
        let mut list = ScList::from(vec![1, 2, 3]);
        list[0] = 100;
        assert_eq!(list.as_slice(), &[100, 2, 3]);
    }

    #[test]
    fn test_head_and_last_option() {
        let list = ScList::from([3, 4, 5]);
        assert_eq!(list.head_option(), Some(&3));
        assert_eq!(list.last_option(), Some(&5));

        let empty = ScList::<i32>::new();
        assert_eq!(empty.head_option(), None);
        assert_eq!(empty.last_option(), None);
    }

    #[test]
    fn test_iter_leaves_list_usable() {
        let list = ScList::from(vec![1, 2, 3]);
        let doubled = list.iter().map(|x| x * 2).to_vec();
        assert_eq!(doubled, vec![2, 4, 6]);
        assert_eq!(list.len(), 3);
        let total: i32 = (&list).sum();
        assert_eq!(total, 6);
    }

    #[test]
    fn test_extend() {
        let mut list = ScList::from(vec!['a']);
        list.extend(['b', 'c']);
        assert_eq!(list.as_slice(), &['a', 'b', 'c']);
    }

    #[test]
    fn test_to_list_returns_self() {
        let list = ScList::from(vec![1, 2]);
        let same = list.clone().to_list();
        assert_eq!(same, list);
    }

    #[test]
    fn test_into_vec_round_trip() {
        let list: ScList<_> = (0..5).collect();
        let v: Vec<i32> = list.into();
        assert_eq!(v, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_debug() {
        let list = ScList::from(vec![1, 2]);
        assert_eq!(format!("{list:?}"), "ScList([1, 2])");
    }
}
