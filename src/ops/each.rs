//! The traversal core.

use crate::collection::Collection;
use crate::entries::Entry;

/// Visits every entry of `collection` front to back and returns the same
/// collection reference.
///
/// The callback receives each element with its key and a reference back to
/// the collection being traversed. Returning the input reference makes
/// calls chain without rebuilding anything; the collection is only ever
/// read.
///
/// # Example
///
/// ```
/// use twofold::{each, Collection};
///
/// let numbers = Collection::sequence([1, 2, 3]);
/// let mut total = 0;
/// let same = each(&numbers, |entry| total += *entry.value);
/// assert_eq!(total, 6);
/// assert!(std::ptr::eq(same, &numbers));
/// ```
pub fn each<'c, T, F>(collection: &'c Collection<T>, mut visit: F) -> &'c Collection<T>
where
    F: FnMut(Entry<'c, T>),
{
    for entry in collection.entries() {
        visit(entry);
    }
    collection
}
