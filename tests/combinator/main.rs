//! Integration tests for Layer 1: Combinators
//!
//! Tests for the uniform calling convention and the higher-order builders.

mod convention;
