//! Transforms that build a new sequence from a traversal.
//!
//! Whichever shape goes in, a sequence comes out: transforming a mapping
//! collapses it to its value stream in insertion order, with each entry's
//! key still visible to the callback.

use crate::collection::Collection;
use crate::entries::Entry;

/// Applies `transform` to every entry and collects the results into a new
/// sequence in traversal order.
///
/// The input collection is read, never changed; the output is always a
/// fresh `Vec`, even for mapping input.
///
/// # Example
///
/// ```
/// use twofold::{map, Collection};
///
/// let prices = Collection::mapping([("bread", 3), ("milk", 2)]);
/// let doubled = map(&prices, |entry| entry.value * 2);
/// assert_eq!(doubled, [6, 4]);
/// ```
pub fn map<'c, T, U, F>(collection: &'c Collection<T>, transform: F) -> Vec<U>
where
    F: FnMut(Entry<'c, T>) -> U,
{
    collection.entries().map(transform).collect()
}

/// Collects clones of the elements for which `keep` returns `true`, in
/// traversal order.
///
/// # Example
///
/// ```
/// use twofold::{filter, Collection};
///
/// let numbers = Collection::sequence([6, 11, 5, 12]);
/// assert_eq!(filter(&numbers, |entry| *entry.value > 10), [11, 12]);
/// ```
pub fn filter<'c, T, F>(collection: &'c Collection<T>, mut keep: F) -> Vec<T>
where
    T: Clone,
    F: FnMut(Entry<'c, T>) -> bool,
{
    let mut kept = Vec::new();
    for entry in collection.entries() {
        if keep(entry) {
            kept.push(entry.value.clone());
        }
    }
    kept
}
