//! Scala-inspired fluent wrappers around Rust collections.
//!
//! The crate offers three sequence wrappers and one mapping wrapper:
//!
//! - [`ScSeq`]: a lazy, single-pass sequence over any iterator.
//! - [`ScList`]: a realized, growable list.
//! - [`ScFrozenList`]: a realized, immutable list that clones and slices in O(1).
//! - [`ScDict`]: a hash map of unique keys to values.
//!
//! All of them share the combinators of [`ScIterable`], so calls chain left to
//! right:
//!
//! ```
//! use scalaps::{ScIterable, ScSeq};
//!
//! let by_remainder = ScSeq::new(0..10)
//!     .map(|x| x + 3)
//!     .filter(|x| x % 2 == 0)
//!     .group_by(|x| x % 3);
//!
//! let mut sizes = by_remainder.items().map(|(k, v)| (*k, v.len())).to_vec();
//! sizes.sort();
//! assert_eq!(sizes, vec![(0, 2), (1, 2), (2, 1)]);
//! ```

pub mod adapters;
pub mod dict;
pub mod frozen_list;
pub mod iterable;
pub mod join;
pub mod list;
pub mod seq;
#[cfg(feature = "serde")]
mod serde_impls;

pub use dict::ScDict;
pub use frozen_list::ScFrozenList;
pub use iterable::ScIterable;
pub use join::JoinKind;
pub use list::ScList;
pub use seq::ScSeq;

pub use scalaps_common::{Error, ErrorKind, Result};
