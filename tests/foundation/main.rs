//! Integration tests for Layer 0: Foundation
//!
//! Tests for the entity model, canonical encoding, and sequences.

mod entities;
mod encoding;
