//! Sequence algorithms for Weft.
//!
//! Everything here is expressed in terms of the entity model
//! (`weft_foundation`) and the uniform calling convention
//! (`weft_combinator`):
//! - [`transform`] - map, filter, reduce, scan
//! - [`search`] - find, index, count, all/any/none/only
//! - [`order`] - stable sort, uniqueness, canonicalization
//! - [`sets`] - multiset containment, composition, intersection
//! - [`restructure`] - reverse, rotate, stride, segment, repeat, iota,
//!   zip, transverse
//!
//! Every algorithm consumes immutable inputs and returns a new immutable
//! result; recursion splits at midpoints so depth stays logarithmic.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod order;
pub mod restructure;
pub mod search;
pub mod sets;
pub mod transform;

pub use order::{remove_duplicates, remove_duplicates_by, same, setify, sort, uniq, uniq_by};
pub use restructure::{iota, repeat, reverse, rotate, segment, stride, transverse, zip, zip_with};
pub use search::{all, any, count, count_if, find, find_if, index_if, index_of, none, only};
pub use sets::{contains, intersection, is_composed_of};
pub use transform::{filter, map, reduce, scan};
