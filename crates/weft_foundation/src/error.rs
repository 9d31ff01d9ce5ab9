//! Error types for the algebra.
//!
//! Uses `thiserror` for ergonomic error definition. Failures come in two
//! classes: configuration errors (malformed algorithm arguments, detectable
//! independent of data) and applicability failures (a callable cannot be
//! evaluated against its given arguments). The `guard` combinator
//! intercepts only the latter.

use thiserror::Error;

/// Convenience alias for algebra results.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for algebra operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self { kind }
    }

    /// Returns true if this is an applicability failure — the class of
    /// failures that `guard` intercepts. Configuration errors always
    /// propagate.
    #[must_use]
    pub const fn is_inapplicable(&self) -> bool {
        matches!(
            self.kind,
            ErrorKind::ArityMismatch { .. }
                | ErrorKind::NotBoolean { .. }
                | ErrorKind::NotAPack { .. }
                | ErrorKind::IndexOutOfBounds { .. }
                | ErrorKind::SpreadResult { .. }
                | ErrorKind::NoMatchingClause
        )
    }

    /// Creates a zero-step configuration error.
    #[must_use]
    pub fn zero_step() -> Self {
        Self::new(ErrorKind::ZeroStep)
    }

    /// Creates a zero-stride configuration error.
    #[must_use]
    pub fn zero_stride() -> Self {
        Self::new(ErrorKind::ZeroStride)
    }

    /// Creates a zero-segment configuration error.
    #[must_use]
    pub fn zero_segment() -> Self {
        Self::new(ErrorKind::ZeroSegment)
    }

    /// Creates a case/result arity configuration error.
    #[must_use]
    pub fn cond_arity(cases: usize, results: usize) -> Self {
        Self::new(ErrorKind::CondArity { cases, results })
    }

    /// Creates an arity mismatch applicability failure.
    #[must_use]
    pub fn arity_mismatch(expected: &'static str, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch { expected, actual })
    }

    /// Creates a non-boolean-result applicability failure.
    #[must_use]
    pub fn not_boolean(actual: impl Into<String>) -> Self {
        Self::new(ErrorKind::NotBoolean {
            actual: actual.into(),
        })
    }

    /// Creates a not-a-pack applicability failure.
    #[must_use]
    pub fn not_a_pack(actual: &'static str) -> Self {
        Self::new(ErrorKind::NotAPack { actual })
    }

    /// Creates a spread-result applicability failure.
    #[must_use]
    pub fn spread_result(len: usize) -> Self {
        Self::new(ErrorKind::SpreadResult { len })
    }

    /// Creates an index-out-of-bounds applicability failure.
    #[must_use]
    pub fn index_out_of_bounds(index: usize, length: usize) -> Self {
        Self::new(ErrorKind::IndexOutOfBounds { index, length })
    }

    /// Creates a no-matching-clause applicability failure.
    #[must_use]
    pub fn no_matching_clause() -> Self {
        Self::new(ErrorKind::NoMatchingClause)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    // Configuration errors

    /// Zero step given to an arithmetic progression.
    #[error("progression step must be nonzero")]
    ZeroStep,

    /// Zero interval given to stride.
    #[error("stride interval must be nonzero")]
    ZeroStride,

    /// Zero chunk length given to segment.
    #[error("segment length must be nonzero")]
    ZeroSegment,

    /// Mismatched case/result counts given to cond.
    #[error("cond expects {cases} or {} results for {cases} cases, got {results}", .cases + 1)]
    CondArity {
        /// Number of case predicates supplied.
        cases: usize,
        /// Number of result callables supplied.
        results: usize,
    },

    // Applicability failures

    /// Wrong number of arguments to a callable.
    #[error("arity mismatch: expected {expected}, got {actual}")]
    ArityMismatch {
        /// Description of the expected arity.
        expected: &'static str,
        /// Actual number of arguments.
        actual: usize,
    },

    /// A predicate produced something other than a single boolean.
    #[error("expected a boolean result, got {actual}")]
    NotBoolean {
        /// Description of the actual result.
        actual: String,
    },

    /// An operand that must be a pack is not one.
    #[error("expected a pack, got a {actual}")]
    NotAPack {
        /// Kind of the actual entity.
        actual: &'static str,
    },

    /// A callable that must produce a single entity produced a spread.
    #[error("expected a single result, got a spread of {len}")]
    SpreadResult {
        /// Number of entities in the spread.
        len: usize,
    },

    /// Index past the end of a sequence.
    #[error("index out of bounds: {index} (length {length})")]
    IndexOutOfBounds {
        /// The index that was accessed.
        index: usize,
        /// The actual length of the sequence.
        length: usize,
    },

    /// A cond chain without a default fell through every case.
    #[error("no matching cond clause")]
    NoMatchingClause,
}
