//! Uniform calling convention and higher-order builders for Weft.
//!
//! This crate normalizes every function value — unary, binary, variadic —
//! into one [`Callable`] convention, and provides the higher-order builders
//! (partial application, composition, boolean combination, guarded
//! fallback, conditional dispatch) the algorithm layer is written against.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod builders;
pub mod callable;

pub use builders::{
    all_of, any_of, bind, compose, cond, conditional, constant, constant_empty, delay, guard,
    identity, negate, rbind, when,
};
pub use callable::{
    Callable, Outcome, apply, binary, is_same_with, predicate, predicate2, transform, truthy,
    unary,
};
