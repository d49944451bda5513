//! Describing a collection: size, keys, values.

use crate::collection::Collection;
use crate::key::Key;

/// Returns the number of elements, whichever the shape.
#[inline]
#[must_use]
pub fn size<T>(collection: &Collection<T>) -> usize {
    collection.len()
}

/// Returns every element's key in traversal order: index positions for a
/// sequence, names in insertion order for a mapping.
#[must_use]
pub fn keys<T>(collection: &Collection<T>) -> Vec<Key<'_>> {
    collection.entries().map(|entry| entry.key).collect()
}

/// Returns the value stream as a new sequence of clones, in traversal
/// order.
#[must_use]
pub fn values<T: Clone>(collection: &Collection<T>) -> Vec<T> {
    collection.entries().map(|entry| entry.value.clone()).collect()
}
