//! Insertion-ordered string-keyed mapping.
//!
//! The mapping half of the dual-mode data model. Entries live in a vector
//! in first-insert order, and an `FxHashMap` keyed by the same shared
//! `Arc<str>` maps each key to its slot, so lookup stays O(1) while
//! traversal sees the order callers built the mapping in.

use rustc_hash::FxHashMap;
use std::fmt;
use std::sync::Arc;

// =============================================================================
// Mapping
// =============================================================================

/// A string-keyed mapping that preserves insertion order.
///
/// Updating an existing key replaces its value in place and keeps the
/// original slot. Removing a key closes the gap, shifting later entries
/// down one slot (O(n) in the number of entries).
pub struct Mapping<T> {
    /// Entries in first-insert order. The `Arc<str>` key is shared with
    /// `index`, so each key string is stored once.
    entries: Vec<(Arc<str>, T)>,
    /// Key to slot position in `entries`.
    index: FxHashMap<Arc<str>, usize>,
}

impl<T> Mapping<T> {
    /// Creates an empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Creates an empty mapping with pre-allocated capacity.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
            index: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
        }
    }

    /// Returns the number of entries.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the mapping has no entries.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns `true` if the mapping contains `key`.
    #[inline]
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.index.contains_key(key)
    }

    /// Gets a value by key. Returns `None` if the key is absent.
    #[inline]
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&T> {
        let slot = *self.index.get(key)?;
        self.entries.get(slot).map(|(_, value)| value)
    }

    /// Gets the entry at a slot position, in insertion order.
    /// Returns `None` past the end.
    #[inline]
    #[must_use]
    pub fn get_index(&self, position: usize) -> Option<(&str, &T)> {
        self.entries
            .get(position)
            .map(|(key, value)| (&**key, value))
    }

    /// Inserts a key-value pair, returning the displaced value if the key
    /// was already present. An existing key keeps its slot.
    pub fn insert(&mut self, key: impl Into<Arc<str>>, value: T) -> Option<T> {
        let key: Arc<str> = key.into();
        if let Some(&slot) = self.index.get(&key) {
            return Some(std::mem::replace(&mut self.entries[slot].1, value));
        }
        self.index.insert(Arc::clone(&key), self.entries.len());
        self.entries.push((key, value));
        None
    }

    /// Removes a key, returning its value if it was present. Later entries
    /// shift down to close the gap, preserving their relative order.
    pub fn remove(&mut self, key: &str) -> Option<T> {
        let slot = self.index.remove(key)?;
        let (_, value) = self.entries.remove(slot);
        for later in self.index.values_mut() {
            if *later > slot {
                *later -= 1;
            }
        }
        Some(value)
    }

    /// Removes all entries.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.index.clear();
    }

    /// Get an iterator over keys, in insertion order.
    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|(key, _)| &**key)
    }

    /// Get an iterator over values, in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &T> + '_ {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Get an iterator over key-value pairs, in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &T)> + '_ {
        self.entries.iter().map(|(key, value)| (&**key, value))
    }
}

impl<T> Default for Mapping<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone> Clone for Mapping<T> {
    fn clone(&self) -> Self {
        Self {
            entries: self.entries.clone(),
            index: self.index.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Mapping<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.iter()).finish()
    }
}

/// Order-sensitive equality: two mappings are equal only if they hold the
/// same entries in the same insertion order.
impl<T: PartialEq> PartialEq for Mapping<T> {
    fn eq(&self, other: &Self) -> bool {
        self.entries.len() == other.entries.len()
            && self
                .entries
                .iter()
                .zip(&other.entries)
                .all(|((key_a, value_a), (key_b, value_b))| key_a == key_b && value_a == value_b)
    }
}

impl<T: Eq> Eq for Mapping<T> {}

impl<'a, T> Extend<(&'a str, T)> for Mapping<T> {
    fn extend<I: IntoIterator<Item = (&'a str, T)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<T> Extend<(String, T)> for Mapping<T> {
    fn extend<I: IntoIterator<Item = (String, T)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl<'a, T> FromIterator<(&'a str, T)> for Mapping<T> {
    fn from_iter<I: IntoIterator<Item = (&'a str, T)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut mapping = Self::with_capacity(iter.size_hint().0);
        mapping.extend(iter);
        mapping
    }
}

impl<T> FromIterator<(String, T)> for Mapping<T> {
    fn from_iter<I: IntoIterator<Item = (String, T)>>(iter: I) -> Self {
        let iter = iter.into_iter();
        let mut mapping = Self::with_capacity(iter.size_hint().0);
        mapping.extend(iter);
        mapping
    }
}

impl<T, const N: usize> From<[(&str, T); N]> for Mapping<T> {
    fn from(entries: [(&str, T); N]) -> Self {
        entries.into_iter().collect()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_mapping_is_empty() {
        let mapping: Mapping<i64> = Mapping::new();
        assert_eq!(mapping.len(), 0);
        assert!(mapping.is_empty());
    }

    #[test]
    fn test_insert_and_get() {
        let mut mapping = Mapping::new();
        assert_eq!(mapping.insert("one", 1), None);
        assert_eq!(mapping.insert("two", 2), None);
        assert_eq!(mapping.get("one"), Some(&1));
        assert_eq!(mapping.get("two"), Some(&2));
        assert_eq!(mapping.get("three"), None);
        assert_eq!(mapping.len(), 2);
    }

    #[test]
    fn test_insert_existing_key_keeps_slot() {
        let mut mapping = Mapping::new();
        mapping.insert("a", 1);
        mapping.insert("b", 2);
        mapping.insert("c", 3);
        assert_eq!(mapping.insert("a", 10), Some(1));
        // "a" still iterates first even though it was updated last.
        let keys: Vec<&str> = mapping.keys().collect();
        assert_eq!(keys, ["a", "b", "c"]);
        assert_eq!(mapping.get("a"), Some(&10));
        assert_eq!(mapping.len(), 3);
    }

    #[test]
    fn test_iteration_follows_insertion_order() {
        let mut mapping = Mapping::new();
        mapping.insert("zebra", 1);
        mapping.insert("apple", 2);
        mapping.insert("mango", 3);
        let pairs: Vec<(&str, &i64)> = mapping.iter().collect();
        assert_eq!(pairs, [("zebra", &1), ("apple", &2), ("mango", &3)]);
        let values: Vec<&i64> = mapping.values().collect();
        assert_eq!(values, [&1, &2, &3]);
    }

    #[test]
    fn test_remove_closes_gap() {
        let mut mapping = Mapping::new();
        mapping.insert("a", 1);
        mapping.insert("b", 2);
        mapping.insert("c", 3);
        mapping.insert("d", 4);
        assert_eq!(mapping.remove("b"), Some(2));
        assert_eq!(mapping.len(), 3);
        let keys: Vec<&str> = mapping.keys().collect();
        assert_eq!(keys, ["a", "c", "d"]);
        // Shifted entries remain reachable through the index.
        assert_eq!(mapping.get("c"), Some(&3));
        assert_eq!(mapping.get("d"), Some(&4));
        assert_eq!(mapping.remove("b"), None);
    }

    #[test]
    fn test_remove_then_reinsert_moves_to_end() {
        let mut mapping = Mapping::new();
        mapping.insert("a", 1);
        mapping.insert("b", 2);
        mapping.insert("c", 3);
        mapping.remove("a");
        mapping.insert("a", 9);
        let keys: Vec<&str> = mapping.keys().collect();
        assert_eq!(keys, ["b", "c", "a"]);
    }

    #[test]
    fn test_contains_key() {
        let mut mapping = Mapping::new();
        mapping.insert("present", 0);
        assert!(mapping.contains_key("present"));
        assert!(!mapping.contains_key("absent"));
    }

    #[test]
    fn test_get_index() {
        let mapping = Mapping::from([("one", 1), ("two", 2), ("three", 3)]);
        assert_eq!(mapping.get_index(0), Some(("one", &1)));
        assert_eq!(mapping.get_index(2), Some(("three", &3)));
        assert_eq!(mapping.get_index(3), None);
    }

    #[test]
    fn test_clear() {
        let mut mapping = Mapping::from([("x", 1), ("y", 2)]);
        mapping.clear();
        assert!(mapping.is_empty());
        assert_eq!(mapping.get("x"), None);
        mapping.insert("z", 3);
        assert_eq!(mapping.get_index(0), Some(("z", &3)));
    }

    #[test]
    fn test_from_array_last_wins_on_duplicates() {
        let mapping = Mapping::from([("k", 1), ("k", 2)]);
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("k"), Some(&2));
    }

    #[test]
    fn test_from_iterator_of_strings() {
        let mapping: Mapping<usize> = ["one", "two", "three"]
            .iter()
            .enumerate()
            .map(|(position, name)| (name.to_string(), position))
            .collect();
        assert_eq!(mapping.get("two"), Some(&1));
        let keys: Vec<&str> = mapping.keys().collect();
        assert_eq!(keys, ["one", "two", "three"]);
    }

    #[test]
    fn test_equality_is_order_sensitive() {
        let forward = Mapping::from([("a", 1), ("b", 2)]);
        let reversed = Mapping::from([("b", 2), ("a", 1)]);
        let same = Mapping::from([("a", 1), ("b", 2)]);
        assert_eq!(forward, same);
        assert_ne!(forward, reversed);
    }

    #[test]
    fn test_clone_is_independent() {
        let original = Mapping::from([("a", 1)]);
        let mut copy = original.clone();
        copy.insert("b", 2);
        assert_eq!(original.len(), 1);
        assert_eq!(copy.len(), 2);
    }

    #[test]
    fn test_debug_format() {
        let mapping = Mapping::from([("one", 1)]);
        assert_eq!(format!("{mapping:?}"), r#"{"one": 1}"#);
    }
}
