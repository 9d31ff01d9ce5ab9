//! Integration tests for Layer 2: Algebra
//!
//! Tests for the sequence algorithms: transforms and folds, search,
//! ordering and multisets, and restructuring, plus property tests for the
//! algebra's invariants.

mod ordering;
