//! Folding a collection's value stream into one result.

use crate::collection::Collection;

/// Folds the collection's elements into a single accumulated value.
///
/// With `initial`, the fold starts from that value and visits every
/// element. Without it, the first element is cloned as the seed and the
/// fold visits the rest. Mappings fold over their values in insertion
/// order. The only absent case is an empty collection with no initial
/// value, which returns `None`; an empty collection with an initial value
/// returns that value untouched.
///
/// # Example
///
/// ```
/// use twofold::{reduce, Collection};
///
/// let numbers = Collection::sequence([1, 2, 3, 4]);
/// let sum = reduce(&numbers, Some(10), |total, value| total + value * 3);
/// assert_eq!(sum, Some(40));
///
/// let seeded = reduce(&numbers, None, |total, value| total + value * 3);
/// assert_eq!(seeded, Some(28));
/// ```
pub fn reduce<T, F>(collection: &Collection<T>, initial: Option<T>, mut combine: F) -> Option<T>
where
    T: Clone,
    F: FnMut(T, &T) -> T,
{
    let mut entries = collection.entries();
    let mut accumulated = match initial {
        Some(seed) => seed,
        None => entries.next()?.value.clone(),
    };
    for entry in entries {
        accumulated = combine(accumulated, entry.value);
    }
    Some(accumulated)
}
