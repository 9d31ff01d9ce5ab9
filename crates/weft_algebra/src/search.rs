//! Search and predicate algorithms.
//!
//! The underlying scan is size-aware: short sequences are scanned
//! linearly, longer ones split at the midpoint so recursion depth stays
//! logarithmic. Match order is always left to right, and the lazy
//! aggregates (`all`, `any`, `none`) never evaluate the predicate past the
//! element that decides the result.

use std::slice;

use weft_combinator::{Callable, is_same_with, negate, truthy};
use weft_foundation::{Entity, Result, Seq};

/// Sequences shorter than twice this window are scanned linearly.
const SCAN_WINDOW: usize = 8;

/// Returns the position of the first element satisfying `pred`, or `None`.
///
/// # Errors
///
/// Propagates the first failure of `pred`; elements past the first match
/// are never evaluated.
pub fn index_if(pred: &Callable, seq: &Seq) -> Result<Option<usize>> {
    if seq.len() < 2 * SCAN_WINDOW {
        for (i, e) in seq.iter().enumerate() {
            if truthy(pred, slice::from_ref(e))? {
                return Ok(Some(i));
            }
        }
        return Ok(None);
    }
    let (left, right) = seq.split_at(seq.len() / 2);
    if let Some(i) = index_if(pred, &left)? {
        return Ok(Some(i));
    }
    Ok(index_if(pred, &right)?.map(|i| i + left.len()))
}

/// Returns the position of the first element that is the same as `e`, or
/// `None`.
///
/// # Errors
///
/// Never fails for well-formed entities; the `Result` mirrors [`index_if`].
pub fn index_of(e: &Entity, seq: &Seq) -> Result<Option<usize>> {
    index_if(&is_same_with(e.clone()), seq)
}

/// Returns the suffix of `seq` starting at the first element satisfying
/// `pred`, inclusive; empty if none match.
///
/// # Errors
///
/// Propagates the first failure of `pred`.
pub fn find_if(pred: &Callable, seq: &Seq) -> Result<Seq> {
    Ok(match index_if(pred, seq)? {
        Some(i) => seq.skip(i),
        None => Seq::new(),
    })
}

/// Returns the suffix of `seq` starting at the first element that is the
/// same as `e`, inclusive; empty if none match.
///
/// # Errors
///
/// Mirrors [`find_if`].
pub fn find(e: &Entity, seq: &Seq) -> Result<Seq> {
    find_if(&is_same_with(e.clone()), seq)
}

/// Counts the elements satisfying `pred`. Exhaustive: every element is
/// evaluated.
///
/// # Errors
///
/// Propagates the first failure of `pred`.
pub fn count_if(pred: &Callable, seq: &Seq) -> Result<usize> {
    if seq.len() < 2 * SCAN_WINDOW {
        let mut total = 0;
        for e in seq {
            if truthy(pred, slice::from_ref(e))? {
                total += 1;
            }
        }
        return Ok(total);
    }
    let (left, right) = seq.split_at(seq.len() / 2);
    Ok(count_if(pred, &left)? + count_if(pred, &right)?)
}

/// Counts the elements that are the same as `e`.
///
/// # Errors
///
/// Mirrors [`count_if`].
pub fn count(e: &Entity, seq: &Seq) -> Result<usize> {
    count_if(&is_same_with(e.clone()), seq)
}

/// True iff some element satisfies `pred`. Stops at the first success.
///
/// # Errors
///
/// Propagates the first failure of `pred`.
pub fn any(pred: &Callable, seq: &Seq) -> Result<bool> {
    Ok(index_if(pred, seq)?.is_some())
}

/// True iff every element satisfies `pred`; vacuously true when empty.
/// Stops at (and never evaluates past) the first failing element.
///
/// # Errors
///
/// Propagates the first failure of `pred`.
pub fn all(pred: &Callable, seq: &Seq) -> Result<bool> {
    Ok(index_if(&negate(pred.clone()), seq)?.is_none())
}

/// True iff no element satisfies `pred`; vacuously true when empty.
///
/// # Errors
///
/// Propagates the first failure of `pred`.
pub fn none(pred: &Callable, seq: &Seq) -> Result<bool> {
    Ok(index_if(pred, seq)?.is_none())
}

/// True iff exactly one element satisfies `pred`.
///
/// Deliberately exhaustive, unlike [`any`]: a second match anywhere later
/// in the sequence invalidates the result, so there is no sound early
/// exit.
///
/// # Errors
///
/// Propagates the first failure of `pred`.
pub fn only(pred: &Callable, seq: &Seq) -> Result<bool> {
    Ok(count_if(pred, seq)? == 1)
}
