//! Iterator adapters backing the lazy combinators that have no `std` counterpart.

use crate::list::ScList;

/// An iterator adapter that groups consecutive elements into lists.
///
/// Every yielded list holds exactly `size` elements, except possibly the last
/// one, which holds whatever remains. Empty input yields nothing.
#[derive(Debug, Clone)]
pub struct Grouped<I> {
    /// The underlying iterator.
    inner: I,
    /// The maximum number of elements per group.
    size: usize,
}

impl<I> Grouped<I>
where
    I: Iterator,
{
    /// Creates a new `Grouped` iterator.
    ///
    /// # Panics
    ///
    /// Panics if `size` is 0.
    pub fn new(inner: I, size: usize) -> Self {
        if size == 0 {
            panic!("group size must be greater than 0");
        }
        Self { inner, size }
    }
}

impl<I> Iterator for Grouped<I>
where
    I: Iterator,
{
    type Item = ScList<I::Item>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut group = ScList::new();
        group.extend(self.inner.by_ref().take(self.size));
        if group.is_empty() { None } else { Some(group) }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (lower, upper) = self.inner.size_hint();
        (
            lower.div_ceil(self.size),
            upper.map(|n| n.div_ceil(self.size)),
        )
    }
}
