//! Short-circuiting search.

use crate::collection::Collection;
use crate::entries::Entry;

/// Returns a reference to the first element satisfying `predicate`, or
/// `None` when nothing matches.
///
/// Traversal stops at the first match: entries past it are never visited
/// and the predicate is never called on them.
///
/// # Example
///
/// ```
/// use twofold::{find, Collection};
///
/// let numbers = Collection::sequence([-1, 4, 0, 1]);
/// assert_eq!(find(&numbers, |entry| *entry.value == 0), Some(&0));
/// assert_eq!(find(&numbers, |entry| *entry.value > 100), None);
/// ```
pub fn find<'c, T, F>(collection: &'c Collection<T>, mut predicate: F) -> Option<&'c T>
where
    F: FnMut(Entry<'c, T>) -> bool,
{
    for entry in collection.entries() {
        if predicate(entry) {
            return Some(entry.value);
        }
    }
    None
}
