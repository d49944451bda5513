//! The shared traversal interface over both collection shapes.
//!
//! [`Entries`] is the one iteration primitive the whole operation set is
//! built on: it walks a [`Collection`] front to back and yields an
//! [`Entry`] per element, carrying the element itself, its position as a
//! [`Key`], and a reference back to the collection being traversed. For
//! sequences the walk follows index order; for mappings it follows
//! insertion order.
//!
//! Everything is borrowed, so traversal is read-only by construction.

use crate::collection::Collection;
use crate::key::Key;
use std::fmt;
use std::iter::FusedIterator;

// =============================================================================
// Entry
// =============================================================================

/// One element of a collection, as seen during traversal.
///
/// Mirrors the three arguments the traversal callbacks receive: the
/// element, its index or key, and the collection itself.
pub struct Entry<'c, T> {
    /// The element's position: an index in a sequence, a name in a mapping.
    pub key: Key<'c>,
    /// The element itself.
    pub value: &'c T,
    /// The collection being traversed.
    pub collection: &'c Collection<T>,
}

// Manual impls: the derives would demand `T: Copy` / `T: Clone`, but an
// `Entry` is only references and can always be copied.
impl<T> Clone for Entry<'_, T> {
    #[inline]
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Entry<'_, T> {}

impl<T: fmt::Debug> fmt::Debug for Entry<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The collection back-reference would drown the interesting fields.
        f.debug_struct("Entry")
            .field("key", &self.key)
            .field("value", &self.value)
            .finish_non_exhaustive()
    }
}

// =============================================================================
// Entries
// =============================================================================

/// Iterator over a collection's entries, front to back.
///
/// Double-ended and exact-size: both cursors move through the same
/// index space, which is positional for sequences and slot order for
/// mappings.
pub struct Entries<'c, T> {
    collection: &'c Collection<T>,
    front: usize,
    back: usize,
}

impl<'c, T> Entries<'c, T> {
    /// Creates an iterator over every entry of `collection`.
    #[inline]
    #[must_use]
    pub fn new(collection: &'c Collection<T>) -> Self {
        Self {
            collection,
            front: 0,
            back: collection.len(),
        }
    }

    /// Builds the entry at traversal position `at`. `None` past the end.
    fn entry_at(&self, at: usize) -> Option<Entry<'c, T>> {
        let (key, value) = match self.collection {
            Collection::Sequence(items) => (Key::Index(at), items.get(at)?),
            Collection::Mapping(mapping) => {
                let (name, value) = mapping.get_index(at)?;
                (Key::Name(name), value)
            }
        };
        Some(Entry {
            key,
            value,
            collection: self.collection,
        })
    }
}

impl<'c, T> Iterator for Entries<'c, T> {
    type Item = Entry<'c, T>;

    #[inline]
    fn next(&mut self) -> Option<Entry<'c, T>> {
        if self.front >= self.back {
            return None;
        }
        let entry = self.entry_at(self.front);
        self.front += 1;
        entry
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl<'c, T> DoubleEndedIterator for Entries<'c, T> {
    #[inline]
    fn next_back(&mut self) -> Option<Entry<'c, T>> {
        if self.front >= self.back {
            return None;
        }
        self.back -= 1;
        self.entry_at(self.back)
    }
}

impl<T> ExactSizeIterator for Entries<'_, T> {
    #[inline]
    fn len(&self) -> usize {
        self.back - self.front
    }
}

impl<T> FusedIterator for Entries<'_, T> {}

impl<T> Clone for Entries<'_, T> {
    fn clone(&self) -> Self {
        Self {
            collection: self.collection,
            front: self.front,
            back: self.back,
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Entries<'_, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Entries")
            .field("front", &self.front)
            .field("back", &self.back)
            .finish_non_exhaustive()
    }
}

impl<'c, T> IntoIterator for &'c Collection<T> {
    type Item = Entry<'c, T>;
    type IntoIter = Entries<'c, T>;

    #[inline]
    fn into_iter(self) -> Entries<'c, T> {
        self.entries()
    }
}

// =============================================================================
// Tests
// =============================================================================
