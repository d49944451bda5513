//! The collection operation set.
//!
//! Free functions over [`Collection`](crate::Collection), every one built
//! on the single traversal interface ([`Collection::entries`]):
//!
//! - **Traversal**: [`each`](fn@each) visits every entry and hands back
//!   the same collection reference.
//! - **Transformation**: [`map`] and [`filter`] produce new sequences in
//!   traversal order, whichever shape went in.
//! - **Folding**: [`reduce`](fn@reduce) accumulates over the value stream
//!   with an optional initial value.
//! - **Search**: [`find`] returns the first match and stops there.
//! - **Slicing**: [`first`], [`first_n`], [`last`], [`last_n`] read the
//!   ends of the value stream.
//! - **Access**: [`size`], [`keys`], [`values`] describe the collection.
//!
//! Operations take the collection by shared reference and never mutate it.
//! Absence is always `None` or an empty sequence, never a panic.
//!
//! [`Collection::entries`]: crate::Collection::entries

pub mod access;
pub mod each;
pub mod reduce;
pub mod search;
pub mod slice;
pub mod transform;

pub use access::{keys, size, values};
pub use each::each;
pub use reduce::reduce;
pub use search::find;
pub use slice::{first, first_n, last, last_n};
pub use transform::{filter, map};
