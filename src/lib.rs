//! Weft - a purely functional algebra over heterogeneous, immutable
//! sequences of polymorphic entities.
//!
//! This crate re-exports all layers of the Weft system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 2: weft_algebra     — transform, search, ordering, multiset, restructuring
//! Layer 1: weft_combinator  — uniform calling convention, higher-order builders
//! Layer 0: weft_foundation  — entities, canonical encoding, sequences, errors
//! ```

pub use weft_algebra as algebra;
pub use weft_combinator as combinator;
pub use weft_foundation as foundation;
