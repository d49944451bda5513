//! Element addressing for dual-mode collections.
//!
//! Every element of a [`Collection`](crate::Collection) sits at exactly one
//! position: a zero-based index when the collection is a sequence, or a
//! string name when it is a mapping. [`Key`] is the shared vocabulary for
//! both, so traversal callbacks receive one position type regardless of the
//! collection's shape.

use std::fmt;

/// The position of an element within a collection.
///
/// Borrowed from the collection being traversed: `Name` keys point into the
/// mapping's own key storage, so a `Key` is `Copy` and free to pass around
/// for as long as the collection lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key<'a> {
    /// Zero-based position in a sequence.
    Index(usize),
    /// String key in a mapping.
    Name(&'a str),
}

impl<'a> Key<'a> {
    /// Returns `true` if this key addresses a sequence position.
    #[inline]
    #[must_use]
    pub const fn is_index(&self) -> bool {
        matches!(self, Key::Index(_))
    }

    /// Returns `true` if this key addresses a mapping entry.
    #[inline]
    #[must_use]
    pub const fn is_name(&self) -> bool {
        matches!(self, Key::Name(_))
    }

    /// Returns the sequence position, or `None` for a name key.
    #[inline]
    #[must_use]
    pub const fn as_index(&self) -> Option<usize> {
        match self {
            Key::Index(index) => Some(*index),
            Key::Name(_) => None,
        }
    }

    /// Returns the mapping key, or `None` for an index key.
    #[inline]
    #[must_use]
    pub const fn as_name(&self) -> Option<&'a str> {
        match self {
            Key::Index(_) => None,
            Key::Name(name) => Some(*name),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => f.write_str(name),
        }
    }
}

impl PartialEq<usize> for Key<'_> {
    #[inline]
    fn eq(&self, other: &usize) -> bool {
        matches!(self, Key::Index(index) if index == other)
    }
}

impl PartialEq<&str> for Key<'_> {
    #[inline]
    fn eq(&self, other: &&str) -> bool {
        matches!(self, Key::Name(name) if name == other)
    }
}

impl From<usize> for Key<'_> {
    #[inline]
    fn from(index: usize) -> Self {
        Key::Index(index)
    }
}

impl<'a> From<&'a str> for Key<'a> {
    #[inline]
    fn from(name: &'a str) -> Self {
        Key::Name(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_accessors() {
        let key = Key::Index(3);
        assert!(key.is_index());
        assert!(!key.is_name());
        assert_eq!(key.as_index(), Some(3));
        assert_eq!(key.as_name(), None);
    }

    #[test]
    fn test_name_accessors() {
        let key = Key::Name("two");
        assert!(key.is_name());
        assert!(!key.is_index());
        assert_eq!(key.as_name(), Some("two"));
        assert_eq!(key.as_index(), None);
    }

    #[test]
    fn test_display() {
        assert_eq!(Key::Index(42).to_string(), "42");
        assert_eq!(Key::Name("answer").to_string(), "answer");
    }

    #[test]
    fn test_cross_type_equality() {
        assert_eq!(Key::Index(7), 7);
        assert_ne!(Key::Index(7), 8);
        assert_eq!(Key::Name("one"), "one");
        assert_ne!(Key::Name("one"), "two");
    }

    #[test]
    fn test_index_never_equals_name() {
        assert_ne!(Key::Index(0), Key::Name("0"));
        assert_ne!(Key::Index(0), "0");
        assert_ne!(Key::Name("3"), 3);
    }

    #[test]
    fn test_from_conversions() {
        assert_eq!(Key::from(5), Key::Index(5));
        assert_eq!(Key::from("five"), Key::Name("five"));
    }
}
