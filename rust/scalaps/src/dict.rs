//! Key-value mapping wrapper.

use std::borrow::Borrow;
use std::collections::hash_map::{self, Entry};
use std::fmt;
use std::hash::{BuildHasher, Hash};

use scalaps_common::{Error, Result};

use crate::{iterable::ScIterable, join::JoinKind, seq::ScSeq};

/// One row produced by [`ScDict::join`]: the key and the value found on each side.
pub type JoinRow<'a, K, V, W> = (&'a K, (Option<&'a V>, Option<&'a W>));

/// A mapping of unique keys to values with fluent accessors.
///
/// Keys are compared with `Eq` and hashed with `ahash`. Iteration order is
/// unspecified; sort the items (for example with [`ScIterable::sort_by`]) when a
/// stable order matters.
///
/// # Examples
///
/// ```
/// use scalaps::{ScIterable, ScSeq};
///
/// let groups = ScSeq::new(0..10)
///     .map(|x| x + 3)
///     .filter(|x| x % 2 == 0)
///     .group_by(|x| x % 3);
///
/// assert_eq!(groups.get(&1).unwrap().as_slice(), &[4, 10]);
/// assert_eq!(groups.get(&0).unwrap().as_slice(), &[6, 12]);
/// assert_eq!(groups.get(&2).unwrap().as_slice(), &[8]);
///
/// let sizes = groups
///     .items()
///     .map(|(k, v)| (*k, v.len()))
///     .sort_by(|(k, _)| *k)
///     .to_vec();
/// assert_eq!(sizes, vec![(0, 2), (1, 2), (2, 1)]);
/// ```
#[derive(Clone)]
pub struct ScDict<K, V> {
    map: ahash::HashMap<K, V>,
}

impl<K, V> ScDict<K, V> {
    pub fn new() -> ScDict<K, V> {
        ScDict {
            map: Default::default(),
        }
    }

    /// Wraps an existing map without rehashing its entries.
    pub(crate) fn from_map(map: ahash::HashMap<K, V>) -> ScDict<K, V> {
        ScDict { map }
    }

    pub fn with_capacity(capacity: usize) -> ScDict<K, V> {
        ScDict {
            map: ahash::HashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.map.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    /// Returns a sequence over the keys.
    pub fn keys(&self) -> ScSeq<hash_map::Keys<'_, K, V>> {
        ScSeq::new(self.map.keys())
    }

    /// Returns a sequence over the values.
    pub fn values(&self) -> ScSeq<hash_map::Values<'_, K, V>> {
        ScSeq::new(self.map.values())
    }

    /// Returns a lazy sequence of `(key, value)` pairs.
    pub fn items(&self) -> ScSeq<hash_map::Iter<'_, K, V>> {
        ScSeq::new(self.map.iter())
    }

    pub fn into_keys(self) -> ScSeq<hash_map::IntoKeys<K, V>> {
        ScSeq::new(self.map.into_keys())
    }

    pub fn into_values(self) -> ScSeq<hash_map::IntoValues<K, V>> {
        ScSeq::new(self.map.into_values())
    }

    /// Consumes the mapping and returns a lazy sequence of owned `(key, value)` pairs.
    pub fn into_items(self) -> ScSeq<hash_map::IntoIter<K, V>> {
        ScSeq::new(self.map.into_iter())
    }

    /// Returns the underlying hash map.
    pub fn as_map(&self) -> &ahash::HashMap<K, V> {
        &self.map
    }

    pub fn into_map(self) -> ahash::HashMap<K, V> {
        self.map
    }
}

impl<K, V> ScDict<K, V>
where
    K: Eq + Hash,
{
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key)
    }

    pub fn get_mut<Q>(&mut self, key: &Q) -> Option<&mut V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get_mut(key)
    }

    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    /// Inserts a key-value pair, returning the previous value for the key if any.
    pub fn insert(&mut self, key: K, value: V) -> Option<V> {
        self.map.insert(key, value)
    }

    pub fn remove<Q>(&mut self, key: &Q) -> Option<V>
    where
        K: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.remove(key)
    }

    pub fn entry(&mut self, key: K) -> Entry<'_, K, V> {
        self.map.entry(key)
    }

    /// Returns a new mapping with the same keys and `f` applied to every value.
    pub fn map_values<U, F>(self, mut f: F) -> ScDict<K, U>
    where
        F: FnMut(V) -> U,
    {
        ScDict::from_map(self.map.into_iter().map(|(k, v)| (k, f(v))).collect())
    }

    /// Keeps only the entries whose value satisfies the predicate.
    pub fn filter_values<P>(mut self, mut predicate: P) -> ScDict<K, V>
    where
        P: FnMut(&V) -> bool,
    {
        self.map.retain(|_, v| predicate(v));
        self
    }

    /// Merges `other` into this mapping; values from `other` win on shared keys.
    ///
    /// With `error_on_overlap` set, any shared key makes the union fail with an
    /// `OverlappingKeys` error that reports how many keys the two sides share.
    pub fn union(mut self, other: ScDict<K, V>, error_on_overlap: bool) -> Result<ScDict<K, V>> {
        if error_on_overlap {
            let common = other
                .map
                .keys()
                .filter(|k| self.map.contains_key(*k))
                .count();
            if common != 0 {
                log::debug!("union rejected: {common} overlapping keys");
                return Err(Error::overlapping_keys(common));
            }
        }
        self.map.extend(other.map);
        Ok(self)
    }

    /// Pairs the values of both mappings by key.
    ///
    /// Each row holds the key and the value found on each side, `None` where a
    /// side lacks the key. `how` selects the key set: shared keys (`Inner`), all
    /// keys (`Outer`), or the keys of one side (`Left`, `Right`).
    pub fn join<'a, W>(
        &'a self,
        other: &'a ScDict<K, W>,
        how: JoinKind,
    ) -> ScSeq<std::vec::IntoIter<JoinRow<'a, K, V, W>>> {
        let keys: Vec<&'a K> = match how {
            JoinKind::Inner => self
                .map
                .keys()
                .filter(|k| other.map.contains_key(*k))
                .collect(),
            JoinKind::Outer => self
                .map
                .keys()
                .chain(other.map.keys().filter(|k| !self.map.contains_key(*k)))
                .collect(),
            JoinKind::Left => self.map.keys().collect(),
            JoinKind::Right => other.map.keys().collect(),
        };
        log::trace!("{how} join produced {} rows", keys.len());
        let rows: Vec<JoinRow<'a, K, V, W>> = keys
            .into_iter()
            .map(|k| (k, (self.map.get(k), other.map.get(k))))
            .collect();
        ScSeq::new(rows)
    }
}

impl<K, V> Default for ScDict<K, V> {
    fn default() -> Self {
        ScDict::new()
    }
}

impl<K, V> PartialEq for ScDict<K, V>
where
    K: Eq + Hash,
    V: PartialEq,
{
    fn eq(&self, other: &Self) -> bool {
        self.map == other.map
    }
}

impl<K, V> Eq for ScDict<K, V>
where
    K: Eq + Hash,
    V: Eq,
{
}

impl<K: fmt::Debug, V: fmt::Debug> fmt::Debug for ScDict<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ScDict").field(&self.map).finish()
    }
}

impl<K, V, S> From<std::collections::HashMap<K, V, S>> for ScDict<K, V>
where
    K: Eq + Hash,
    S: BuildHasher,
{
    fn from(map: std::collections::HashMap<K, V, S>) -> Self {
        map.into_iter().collect()
    }
}

impl<K, V, const N: usize> From<[(K, V); N]> for ScDict<K, V>
where
    K: Eq + Hash,
{
    fn from(pairs: [(K, V); N]) -> Self {
        pairs.into_iter().collect()
    }
}

impl<K, V> FromIterator<(K, V)> for ScDict<K, V>
where
    K: Eq + Hash,
{
    fn from_iter<I>(iter: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
    {
        ScDict {
            map: iter.into_iter().collect(),
        }
    }
}

impl<K, V> Extend<(K, V)> for ScDict<K, V>
where
    K: Eq + Hash,
{
    fn extend<I>(&mut self, iter: I)
    where
        I: IntoIterator<Item = (K, V)>,
    {
        self.map.extend(iter);
    }
}

impl<K, V> IntoIterator for ScDict<K, V> {
    type Item = (K, V);
    type IntoIter = hash_map::IntoIter<K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.into_iter()
    }
}

impl<'a, K, V> IntoIterator for &'a ScDict<K, V> {
    type Item = (&'a K, &'a V);
    type IntoIter = hash_map::Iter<'a, K, V>;

    fn into_iter(self) -> Self::IntoIter {
        self.map.iter()
    }
}

impl<K, V> ScIterable for ScDict<K, V> {}

impl<K, V> ScIterable for &ScDict<K, V> {}

#[cfg(test)]
mod tests {
    use super::*;
    use scalaps_common::ErrorKind;

    fn sorted_rows<'a>(
        rows: impl IntoIterator<Item = JoinRow<'a, &'static str, i32, char>>,
    ) -> Vec<(&'static str, Option<i32>, Option<char>)> {
        let mut rows: Vec<_> = rows
            .into_iter()
            .map(|(k, (v, w))| (*k, v.copied(), w.copied()))
            .collect();
        rows.sort();
        rows
    }

    fn left() -> ScDict<&'static str, i32> {
        ScDict::from([("a", 1), ("b", 2), ("c", 3)])
    }

    fn right() -> ScDict<&'static str, char> {
        ScDict::from([("b", 'x'), ("c", 'y'), ("d", 'z')])
    }

    #[test]
    fn test_new_and_insert() {
        let mut d = ScDict::new();
        assert!(d.is_empty());
        assert_eq!(d.insert("k", 1), None);
        assert_eq!(d.insert("k", 2), Some(1));
        assert_eq!(d.len(), 1);
        assert_eq!(d.get("k"), Some(&2));
        assert!(d.contains_key("k"));
        assert_eq!(d.remove("k"), Some(2));
        assert!(!d.contains_key("k"));
    }

    #[test]
    fn test_with_capacity() {
        let d = ScDict::<u32, u32>::with_capacity(32);
        assert!(d.is_empty());
        assert!(d.as_map().capacity() >= 32);
    }

    #[test]
    fn test_get_mut_and_entry() {
        let mut d = left();
        *d.get_mut("a").unwrap() += 10;
        *d.entry("z").or_insert(0) += 5;
        assert_eq!(d.get("a"), Some(&11));
        assert_eq!(d.get("z"), Some(&5));
    }

    #[test]
    fn test_keys_values_items() {
        let d = left();
        assert_eq!(d.keys().map(|k| *k).sorted().to_vec(), vec!["a", "b", "c"]);
        assert_eq!(d.values().sum::<i32>(), 6);
        let mut items = d.items().map(|(k, v)| (*k, *v)).to_vec();
        items.sort();
        assert_eq!(items, vec![("a", 1), ("b", 2), ("c", 3)]);
    }

    #[test]
    fn test_into_keys_values_items() {
        assert_eq!(left().into_keys().sorted().to_vec(), vec!["a", "b", "c"]);
        assert_eq!(left().into_values().sum::<i32>(), 6);
        assert_eq!(
            left().into_items().sort_by(|(k, _)| *k).to_vec(),
            vec![("a", 1), ("b", 2), ("c", 3)]
        );
    }

    #[test]
    fn test_map_values() {
        let d = left().map_values(|v| v * 100);
        assert_eq!(d.get("b"), Some(&200));
        assert_eq!(d.len(), 3);
    }

    #[test]
    fn test_filter_values() {
        let d = left().filter_values(|v| v % 2 == 1);
        assert_eq!(d, ScDict::from([("a", 1), ("c", 3)]));
    }

    #[test]
    fn test_union_right_side_wins() {
        let merged = left()
            .union(ScDict::from([("c", 30), ("e", 5)]), false)
            .unwrap();
        assert_eq!(
            merged,
            ScDict::from([("a", 1), ("b", 2), ("c", 30), ("e", 5)])
        );
    }

    #[test]
    fn test_union_error_on_overlap() {
        let err = left()
            .union(ScDict::from([("a", 0), ("b", 0), ("q", 0)]), true)
            .unwrap_err();
        assert!(matches!(
            err.kind(),
            ErrorKind::OverlappingKeys { count: 2 }
        ));
    }

    #[test]
    fn test_union_disjoint_with_error_on_overlap() {
        let merged = left().union(ScDict::from([("q", 9)]), true).unwrap();
        assert_eq!(merged.len(), 4);
    }

    #[test]
    fn test_join_inner() {
        let (l, r) = (left(), right());
        assert_eq!(
            sorted_rows(l.join(&r, JoinKind::Inner)),
            vec![("b", Some(2), Some('x')), ("c", Some(3), Some('y'))]
        );
    }

    #[test]
    fn test_join_outer() {
        let (l, r) = (left(), right());
        assert_eq!(
            sorted_rows(l.join(&r, JoinKind::Outer)),
            vec![
                ("a", Some(1), None),
                ("b", Some(2), Some('x')),
                ("c", Some(3), Some('y')),
                ("d", None, Some('z')),
            ]
        );
    }

    #[test]
    fn test_join_left_and_right() {
        let (l, r) = (left(), right());
        assert_eq!(
            sorted_rows(l.join(&r, JoinKind::Left)),
            vec![
                ("a", Some(1), None),
                ("b", Some(2), Some('x')),
                ("c", Some(3), Some('y')),
            ]
        );
        assert_eq!(
            sorted_rows(l.join(&r, JoinKind::Right)),
            vec![
                ("b", Some(2), Some('x')),
                ("c", Some(3), Some('y')),
                ("d", None, Some('z')),
            ]
        );
    }

    #[test]
    fn test_from_std_hash_map() {
        let mut std_map = std::collections::HashMap::new();
        std_map.insert(1, "one");
        let d: ScDict<_, _> = std_map.into();
        assert_eq!(d.get(&1), Some(&"one"));
    }

    #[test]
    fn test_extend_and_collect() {
        let mut d: ScDict<u8, u8> = (0..3).map(|i| (i, i * 2)).collect();
        d.extend([(3, 6)]);
        assert_eq!(d.len(), 4);
        assert_eq!(d.get(&3), Some(&6));
    }

    #[test]
    fn test_iterable_over_pairs() {
        let total: i32 = (&left()).map(|(_, v)| *v).sum();
        assert_eq!(total, 6);
        let keys = left().map(|(k, _)| k).sorted().mkstring(",");
        assert_eq!(keys, "a,b,c");
    }

    #[test]
    fn test_debug() {
        let d = ScDict::from([(1, 'a')]);
        assert_eq!(format!("{d:?}"), "ScDict({1: 'a'})");
    }
}
