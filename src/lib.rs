//! Dual-mode collection traversal.
//!
//! One data model, two shapes: a [`Collection`] is either an ordered
//! sequence or a string-keyed [`Mapping`] in insertion order. Both shapes
//! are walked through a single traversal interface,
//! [`Collection::entries`], and the whole operation set (`each`, `map`,
//! `filter`, `reduce`, `find`, plus the slice and access helpers) is
//! derived from that one primitive, so every operation treats both shapes
//! uniformly.
//!
//! Collections are traversed by shared reference and never mutated by an
//! operation. "No value" is always [`None`] or an empty sequence, never a
//! panic.
//!
//! # Example
//!
//! ```
//! use twofold::{each, filter, reduce, size, Collection};
//!
//! let scores = Collection::mapping([("ada", 92), ("grace", 87), ("alan", 75)]);
//!
//! let mut names = Vec::new();
//! each(&scores, |entry| names.push(entry.key.to_string()));
//! assert_eq!(names, ["ada", "grace", "alan"]);
//!
//! let passing = filter(&scores, |entry| *entry.value >= 80);
//! assert_eq!(passing, [92, 87]);
//!
//! let total = reduce(&scores, Some(0), |sum, score| sum + score);
//! assert_eq!(total, Some(254));
//! assert_eq!(size(&scores), 3);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod collection;
pub mod entries;
pub mod key;
pub mod mapping;
pub mod ops;

pub use collection::Collection;
pub use entries::{Entries, Entry};
pub use key::Key;
pub use mapping::Mapping;
pub use ops::{each, filter, find, first, first_n, keys, last, last_n, map, reduce, size, values};

/// Version of the twofold crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
