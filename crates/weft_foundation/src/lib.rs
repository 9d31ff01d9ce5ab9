//! Entity model, canonical encoding, and persistent sequences for Weft.
//!
//! This crate provides:
//! - [`Entity`] - The polymorphic unit of the algebra (type, value, symbol, pack)
//! - [`Seq`] - Immutable entity sequences with structural sharing
//! - [`mangle`] / [`canonical_cmp`] - Canonical encoding and total order
//! - [`Error`] - Configuration errors and applicability failures

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod entity;
pub mod error;
pub mod mangle;
pub mod sequence;
pub mod symbol;
pub mod types;
pub mod value;

pub use entity::{Entity, is_same};
pub use error::{Error, ErrorKind, Result};
pub use mangle::{canonical_cmp, mangle, mangle_entity};
pub use sequence::Seq;
pub use symbol::SymbolRef;
pub use types::{Qualifier, TypeDesc};
pub use value::Const;
