//! The fluent combinator set shared by every scalaps wrapper.
//!
//! [`ScIterable`] is implemented for [`ScSeq`], [`ScList`], [`ScFrozenList`] and
//! [`ScDict`] (and for references to the realized ones). Its methods fall into
//! three groups:
//!
//! - Lazy adapters (`map`, `filter`, `flat_map`, `take`, `skip`, `enumerate`,
//!   `zip`, `chain`, `unique`, `grouped`) return a new [`ScSeq`] and do no work
//!   until the sequence is consumed.
//! - Eager reductions (`for_each`, `fold`, `reduce`, `count`, `sum`, `find`, ...)
//!   walk the elements in order and return a plain value.
//! - Realizing operations (`to_list`, `group_by`, `key_by`, `sort_by`, `last`,
//!   ...) walk the elements once and build a new collection.
//!
//! Closures passed to the `try_*` variants may fail; the first error stops the
//! walk and is returned unchanged, with no partial result.

use std::collections::VecDeque;
use std::collections::hash_map::Entry;
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::iter::{Chain, Enumerate, Filter, FlatMap, Map, Skip, Take, Zip};

use scalaps_common::{Error, verify_arg};

use crate::{
    adapters::Grouped, dict::ScDict, frozen_list::ScFrozenList, list::ScList, seq::ScSeq,
};

/// Scala-style collection combinators for anything that wraps an iterable.
///
/// # Examples
///
/// ```
/// use scalaps::{ScIterable, ScSeq};
///
/// let summary = ScSeq::new(1..=50)
///     .map(|x| x * 4)
///     .filter(|x| *x <= 170)
///     .filter(|x| x.to_string().len() == 2)
///     .filter(|x| x % 20 == 0)
///     .enumerate()
///     .map(|(n, x)| format!("Result[{n}]={x}"))
///     .mkstring(" .. ");
/// assert_eq!(
///     summary,
///     "Result[0]=20 .. Result[1]=40 .. Result[2]=60 .. Result[3]=80"
/// );
/// ```
pub trait ScIterable: IntoIterator + Sized {
    /// Realizes the elements into an [`ScList`].
    fn to_list(self) -> ScList<Self::Item> {
        self.into_iter().collect()
    }

    /// Realizes the elements into an immutable [`ScFrozenList`].
    fn to_frozen_list(self) -> ScFrozenList<Self::Item> {
        self.into_iter().collect()
    }

    fn to_vec(self) -> Vec<Self::Item> {
        self.into_iter().collect()
    }

    /// Builds an [`ScDict`] from `(key, value)` pairs. A repeated key keeps the
    /// value seen last.
    fn to_dict<K, V>(self) -> ScDict<K, V>
    where
        Self: IntoIterator<Item = (K, V)>,
        K: Eq + Hash,
    {
        self.into_iter().collect()
    }

    /// Applies `f` to every element, preserving order.
    fn map<B, F>(self, f: F) -> ScSeq<Map<Self::IntoIter, F>>
    where
        F: FnMut(Self::Item) -> B,
    {
        ScSeq::new(self.into_iter().map(f))
    }

    /// Applies `f` to every element and concatenates the resulting iterables.
    fn flat_map<U, F>(self, f: F) -> ScSeq<FlatMap<Self::IntoIter, U, F>>
    where
        U: IntoIterator,
        F: FnMut(Self::Item) -> U,
    {
        ScSeq::new(self.into_iter().flat_map(f))
    }

    /// Keeps the elements that satisfy `predicate`, preserving their relative order.
    fn filter<P>(self, predicate: P) -> ScSeq<Filter<Self::IntoIter, P>>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        ScSeq::new(self.into_iter().filter(predicate))
    }

    /// Calls `f` on every element in order, for its side effects.
    fn for_each<F>(self, f: F)
    where
        F: FnMut(Self::Item),
    {
        self.into_iter().for_each(f)
    }

    /// Like [`for_each`](ScIterable::for_each), but stops at the first error
    /// returned by `f` and hands it back.
    fn try_for_each<E, F>(self, f: F) -> Result<(), E>
    where
        F: FnMut(Self::Item) -> Result<(), E>,
    {
        self.into_iter().try_for_each(f)
    }

    /// Eagerly applies a fallible `f` to every element.
    ///
    /// Returns every mapped element in order, or the first error `f` produced.
    fn try_map<B, E, F>(self, f: F) -> Result<ScList<B>, E>
    where
        F: FnMut(Self::Item) -> Result<B, E>,
    {
        self.into_iter().map(f).collect()
    }

    /// The first `n` elements (fewer if the sequence is shorter).
    fn take(self, n: usize) -> ScSeq<Take<Self::IntoIter>> {
        ScSeq::new(self.into_iter().take(n))
    }

    /// Everything after the first `n` elements.
    fn skip(self, n: usize) -> ScSeq<Skip<Self::IntoIter>> {
        ScSeq::new(self.into_iter().skip(n))
    }

    /// Pairs every element with its zero-based position.
    fn enumerate(self) -> ScSeq<Enumerate<Self::IntoIter>> {
        ScSeq::new(self.into_iter().enumerate())
    }

    fn zip<U>(self, other: U) -> ScSeq<Zip<Self::IntoIter, U::IntoIter>>
    where
        U: IntoIterator,
    {
        ScSeq::new(self.into_iter().zip(other))
    }

    fn chain<U>(self, other: U) -> ScSeq<Chain<Self::IntoIter, U::IntoIter>>
    where
        U: IntoIterator<Item = Self::Item>,
    {
        ScSeq::new(self.into_iter().chain(other))
    }

    /// Drops repeated elements, keeping the first occurrence of each.
    fn unique(self) -> ScSeq<itertools::structs::Unique<Self::IntoIter>>
    where
        Self::Item: Clone + Eq + Hash,
    {
        ScSeq::new(itertools::Itertools::unique(self.into_iter()))
    }

    /// Splits the elements into consecutive lists of `size` elements; the last
    /// list may be shorter.
    ///
    /// Fails with an invalid-argument error when `size` is 0.
    fn grouped(self, size: usize) -> scalaps_common::Result<ScSeq<Grouped<Self::IntoIter>>> {
        verify_arg!(size, size > 0);
        Ok(ScSeq::new(Grouped::new(self.into_iter(), size)))
    }

    fn fold<B, F>(self, init: B, f: F) -> B
    where
        F: FnMut(B, Self::Item) -> B,
    {
        self.into_iter().fold(init, f)
    }

    fn try_fold<B, E, F>(self, init: B, f: F) -> Result<B, E>
    where
        F: FnMut(B, Self::Item) -> Result<B, E>,
    {
        self.into_iter().try_fold(init, f)
    }

    /// Combines the elements left to right with `f`. Returns `None` when there
    /// are no elements.
    fn reduce<F>(self, f: F) -> Option<Self::Item>
    where
        F: FnMut(Self::Item, Self::Item) -> Self::Item,
    {
        self.into_iter().reduce(f)
    }

    fn count(self) -> usize {
        self.into_iter().count()
    }

    fn sum<S>(self) -> S
    where
        S: std::iter::Sum<Self::Item>,
    {
        self.into_iter().sum()
    }

    fn find<P>(self, mut predicate: P) -> Option<Self::Item>
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.into_iter().find(|x| predicate(x))
    }

    /// `true` if any element satisfies `predicate`.
    fn exists<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.into_iter().any(|x| predicate(&x))
    }

    /// `true` if every element satisfies `predicate` (vacuously true when empty).
    fn forall<P>(self, mut predicate: P) -> bool
    where
        P: FnMut(&Self::Item) -> bool,
    {
        self.into_iter().all(|x| predicate(&x))
    }

    fn min_by_key<K, F>(self, f: F) -> Option<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.into_iter().min_by_key(f)
    }

    fn max_by_key<K, F>(self, f: F) -> Option<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        self.into_iter().max_by_key(f)
    }

    /// Partitions the elements by the key `key_fn` computes for each of them.
    ///
    /// Every group keeps its elements in first-seen order. The order of the
    /// groups themselves is unspecified.
    fn group_by<K, F>(self, mut key_fn: F) -> ScDict<K, ScList<Self::Item>>
    where
        K: Eq + Hash,
        F: FnMut(&Self::Item) -> K,
    {
        let mut groups: ScDict<K, ScList<Self::Item>> = ScDict::new();
        for item in self {
            groups
                .entry(key_fn(&item))
                .or_insert_with(ScList::new)
                .push(item);
        }
        log::trace!("group_by produced {} groups", groups.len());
        groups
    }

    /// Indexes the elements by the key `key_fn` computes for each of them.
    ///
    /// Fails with a `DuplicateKey` error as soon as two elements share a key.
    fn key_by<K, F>(self, mut key_fn: F) -> scalaps_common::Result<ScDict<K, Self::Item>>
    where
        K: Eq + Hash + Debug,
        F: FnMut(&Self::Item) -> K,
    {
        let mut keyed: ScDict<K, Self::Item> = ScDict::new();
        for item in self {
            match keyed.entry(key_fn(&item)) {
                Entry::Occupied(entry) => {
                    log::debug!("key_by found duplicate key {:?}", entry.key());
                    return Err(Error::duplicate_key(format!("{:?}", entry.key())));
                }
                Entry::Vacant(entry) => {
                    entry.insert(item);
                }
            }
        }
        log::trace!("key_by indexed {} elements", keyed.len());
        Ok(keyed)
    }

    /// Counts how many times each distinct element occurs.
    fn value_counts(self) -> ScDict<Self::Item, usize>
    where
        Self::Item: Eq + Hash,
    {
        let mut counts: ScDict<Self::Item, usize> = ScDict::new();
        for item in self {
            *counts.entry(item).or_insert(0) += 1;
        }
        log::trace!("value_counts found {} distinct values", counts.len());
        counts
    }

    /// Sorts the elements by the key `f` computes, ascending. The sort is stable.
    fn sort_by<K, F>(self, f: F) -> ScList<Self::Item>
    where
        K: Ord,
        F: FnMut(&Self::Item) -> K,
    {
        let mut items = self.to_vec();
        items.sort_by_key(f);
        ScList::from(items)
    }

    fn sorted(self) -> ScList<Self::Item>
    where
        Self::Item: Ord,
    {
        let mut items = self.to_vec();
        items.sort();
        ScList::from(items)
    }

    /// Realizes the elements in reverse order.
    fn reverse(self) -> ScList<Self::Item> {
        let mut items = self.to_vec();
        items.reverse();
        ScList::from(items)
    }

    /// The final `n` elements, in their original order.
    ///
    /// Walks the sequence once, holding at most `n` elements at a time.
    fn last(self, n: usize) -> ScList<Self::Item> {
        if n == 0 {
            return ScList::new();
        }
        let mut window = VecDeque::new();
        for item in self {
            if window.len() == n {
                window.pop_front();
            }
            window.push_back(item);
        }
        window.into_iter().collect()
    }

    /// Renders every element with `Display` and joins them with `sep`.
    fn mkstring(self, sep: &str) -> String
    where
        Self::Item: Display,
    {
        itertools::Itertools::join(&mut self.into_iter(), sep)
    }
}
