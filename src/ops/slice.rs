//! Reading the ends of the value stream.
//!
//! Single-element and n-element variants are separate entry points: the
//! former borrow one element, the latter clone a prefix or suffix into a
//! new sequence. Mappings take part through their value stream in
//! insertion order.

use crate::collection::Collection;

/// Returns the first element, or `None` for an empty collection.
#[inline]
pub fn first<T>(collection: &Collection<T>) -> Option<&T> {
    collection.entries().next().map(|entry| entry.value)
}

/// Returns the leading `n` elements as a new sequence. Shorter collections
/// yield everything they have; `n = 0` yields an empty sequence.
pub fn first_n<T: Clone>(collection: &Collection<T>, n: usize) -> Vec<T> {
    collection
        .entries()
        .take(n)
        .map(|entry| entry.value.clone())
        .collect()
}

/// Returns the last element, or `None` for an empty collection.
#[inline]
pub fn last<T>(collection: &Collection<T>) -> Option<&T> {
    collection.entries().next_back().map(|entry| entry.value)
}

/// Returns the trailing `n` elements as a new sequence, still in traversal
/// order. Shorter collections yield everything they have; `n = 0` yields
/// an empty sequence.
pub fn last_n<T: Clone>(collection: &Collection<T>, n: usize) -> Vec<T> {
    let skipped = collection.len().saturating_sub(n);
    collection
        .entries()
        .skip(skipped)
        .map(|entry| entry.value.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn number_words() -> Collection<i64> {
        Collection::mapping([("one", 1), ("two", 2), ("three", 3), ("four", 4)])
    }

    // -------------------------------------------------------------------------
    // first
    // -------------------------------------------------------------------------

    #[test]
    fn test_first_of_sequence() {
        let collection = Collection::sequence([1, 2, 3, 4]);
        assert_eq!(first(&collection), Some(&1));
    }

    #[test]
    fn test_first_n_of_sequence() {
        let collection = Collection::sequence([1, 2, 3, 4]);
        assert_eq!(first_n(&collection, 3), [1, 2, 3]);
    }

    #[test]
    fn test_first_of_mapping_is_earliest_inserted() {
        let collection = number_words();
        assert_eq!(first(&collection), Some(&1));
        assert_eq!(first_n(&collection, 2), [1, 2]);
    }

    #[test]
    fn test_first_of_empty() {
        let collection = Collection::<i64>::default();
        assert_eq!(first(&collection), None);
        assert!(first_n(&collection, 3).is_empty());
    }

    #[test]
    fn test_first_n_bounds() {
        let collection = Collection::sequence([1, 2]);
        assert!(first_n(&collection, 0).is_empty());
        assert_eq!(first_n(&collection, 2), [1, 2]);
        assert_eq!(first_n(&collection, 10), [1, 2]);
    }

    // -------------------------------------------------------------------------
    // last
    // -------------------------------------------------------------------------

    #[test]
    fn test_last_of_sequence() {
        let collection = Collection::sequence([1, 2, 3, 4]);
        assert_eq!(last(&collection), Some(&4));
    }

    #[test]
    fn test_last_n_of_sequence_keeps_order() {
        let collection = Collection::sequence([1, 2, 3, 4]);
        assert_eq!(last_n(&collection, 3), [2, 3, 4]);
    }

    #[test]
    fn test_last_of_mapping_is_latest_inserted() {
        let collection = number_words();
        assert_eq!(last(&collection), Some(&4));
        assert_eq!(last_n(&collection, 2), [3, 4]);
    }

    #[test]
    fn test_last_of_empty() {
        let collection = Collection::<i64>::default();
        assert_eq!(last(&collection), None);
        assert!(last_n(&collection, 3).is_empty());
    }

    #[test]
    fn test_last_n_bounds() {
        let collection = Collection::sequence([1, 2]);
        assert!(last_n(&collection, 0).is_empty());
        assert_eq!(last_n(&collection, 2), [1, 2]);
        assert_eq!(last_n(&collection, 10), [1, 2]);
    }

    #[test]
    fn test_single_element_ends_coincide() {
        let collection = Collection::sequence([7]);
        assert_eq!(first(&collection), last(&collection));
    }
}
