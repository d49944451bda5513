//! The dual-mode collection container.
//!
//! [`Collection`] is the tagged union the whole crate traverses: an ordered
//! sequence of elements, or a string-keyed [`Mapping`] in insertion order.
//! Shape is carried by the variant, so every operation dispatches on it in
//! one place and the element type stays uniform across both shapes.

use crate::entries::Entries;
use crate::key::Key;
use crate::mapping::Mapping;

// =============================================================================
// Collection
// =============================================================================

/// A collection in one of two shapes: sequence or mapping.
///
/// Both shapes share one traversal interface, [`Collection::entries`],
/// which yields each element with its [`Key`] and a reference back to the
/// collection. All derived operations in [`ops`](crate::ops) are built on
/// that interface and take the collection by shared reference, so traversal
/// can never mutate the collection it walks.
///
/// # Example
///
/// ```
/// use twofold::{Collection, Key};
///
/// let sequence = Collection::sequence([10, 20, 30]);
/// assert_eq!(sequence.get(1), Some(&20));
///
/// let mapping = Collection::mapping([("one", 1), ("two", 2)]);
/// assert_eq!(mapping.get("two"), Some(&2));
///
/// let keys: Vec<Key> = mapping.entries().map(|entry| entry.key).collect();
/// assert_eq!(keys, [Key::Name("one"), Key::Name("two")]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Collection<T> {
    /// An ordered sequence of elements.
    Sequence(Vec<T>),
    /// A string-keyed mapping in insertion order.
    Mapping(Mapping<T>),
}

impl<T> Collection<T> {
    /// Creates a sequence collection from anything convertible to a vector.
    #[must_use]
    pub fn sequence(items: impl Into<Vec<T>>) -> Self {
        Collection::Sequence(items.into())
    }

    /// Creates a mapping collection from anything convertible to a
    /// [`Mapping`], such as an array of key-value pairs.
    #[must_use]
    pub fn mapping(entries: impl Into<Mapping<T>>) -> Self {
        Collection::Mapping(entries.into())
    }

    /// Creates a sequence collection by cloning a slice.
    #[must_use]
    pub fn from_slice(items: &[T]) -> Self
    where
        T: Clone,
    {
        Collection::Sequence(items.to_vec())
    }

    /// Returns `true` if this collection is a sequence.
    #[inline]
    #[must_use]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Collection::Sequence(_))
    }

    /// Returns `true` if this collection is a mapping.
    #[inline]
    #[must_use]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Collection::Mapping(_))
    }

    /// Returns the sequence elements as a slice, or `None` for a mapping.
    #[inline]
    #[must_use]
    pub fn as_sequence(&self) -> Option<&[T]> {
        match self {
            Collection::Sequence(items) => Some(items),
            Collection::Mapping(_) => None,
        }
    }

    /// Returns the underlying mapping, or `None` for a sequence.
    #[inline]
    #[must_use]
    pub const fn as_mapping(&self) -> Option<&Mapping<T>> {
        match self {
            Collection::Sequence(_) => None,
            Collection::Mapping(mapping) => Some(mapping),
        }
    }

    /// Returns the number of elements, whichever the shape.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Collection::Sequence(items) => items.len(),
            Collection::Mapping(mapping) => mapping.len(),
        }
    }

    /// Returns `true` if the collection has no elements.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Gets an element by key. Index keys address sequences and name keys
    /// address mappings; a key of the other kind is a miss, not an error.
    #[inline]
    pub fn get<'k>(&self, key: impl Into<Key<'k>>) -> Option<&T> {
        match (self, key.into()) {
            (Collection::Sequence(items), Key::Index(index)) => items.get(index),
            (Collection::Mapping(mapping), Key::Name(name)) => mapping.get(name),
            _ => None,
        }
    }

    /// Returns the shared traversal iterator: every element with its key
    /// and a reference back to this collection, front to back.
    #[inline]
    #[must_use]
    pub fn entries(&self) -> Entries<'_, T> {
        Entries::new(self)
    }
}

/// The default collection is an empty sequence.
impl<T> Default for Collection<T> {
    fn default() -> Self {
        Collection::Sequence(Vec::new())
    }
}

impl<T> From<Vec<T>> for Collection<T> {
    #[inline]
    fn from(items: Vec<T>) -> Self {
        Collection::Sequence(items)
    }
}

impl<T> From<Mapping<T>> for Collection<T> {
    #[inline]
    fn from(mapping: Mapping<T>) -> Self {
        Collection::Mapping(mapping)
    }
}

/// Collecting plain elements produces a sequence.
impl<T> FromIterator<T> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Collection::Sequence(iter.into_iter().collect())
    }
}

/// Collecting key-value pairs produces a mapping.
impl<'a, T> FromIterator<(&'a str, T)> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = (&'a str, T)>>(iter: I) -> Self {
        Collection::Mapping(iter.into_iter().collect())
    }
}

/// Collecting key-value pairs produces a mapping.
impl<T> FromIterator<(String, T)> for Collection<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        Collection::Mapping(iter.into_iter().collect())
    }
}

// =============================================================================
// Tests
// =============================================================================
