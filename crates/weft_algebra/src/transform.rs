//! Transform and fold algorithms.
//!
//! All recursion here splits at the midpoint rather than peeling one
//! element at a time, keeping recursion depth logarithmic in the input
//! length.

use weft_combinator::{Callable, Outcome, apply, conditional, constant_empty, identity};
use weft_foundation::{Entity, Error, Result, Seq};

/// Applies `f` to each element, splicing spread outcomes into the result.
///
/// Because a per-element spread is flattened one level, `map` doubles as
/// flat-map: a callable may expand an element into many or drop it by
/// producing an empty spread.
///
/// # Errors
///
/// Propagates the first failure of `f`.
pub fn map(f: &Callable, seq: &Seq) -> Result<Seq> {
    match seq.len() {
        0 => Ok(Seq::new()),
        1 => {
            let arg = [seq.get(0).expect("len 1").clone()];
            Ok(match apply(f, &arg)? {
                Outcome::Single(e) => Seq::unit(e),
                Outcome::Spread(s) => s,
            })
        }
        n => {
            let (left, right) = seq.split_at(n / 2);
            Ok(map(f, &left)?.concat(&map(f, &right)?))
        }
    }
}

/// Keeps the elements satisfying `pred`.
///
/// Literally `map` of `conditional(pred, identity, constant_empty)`: the
/// rejected branch spreads into nothing and splices away.
///
/// # Errors
///
/// Propagates the first failure of `pred`, including a non-boolean result.
pub fn filter(pred: &Callable, seq: &Seq) -> Result<Seq> {
    let keep = conditional(pred.clone(), identity(), constant_empty());
    map(&keep, seq)
}

/// Left fold producing a single entity; the empty sequence returns `seed`
/// unchanged.
///
/// Halving preserves the fold order:
/// `reduce(f, seed, s) == reduce(f, reduce(f, seed, left), right)`.
///
/// # Errors
///
/// Propagates the first failure of `f`; a spread outcome from the folder
/// is an applicability failure.
pub fn reduce(f: &Callable, seed: Entity, seq: &Seq) -> Result<Entity> {
    match seq.len() {
        0 => Ok(seed),
        1 => {
            let args = [seed, seq.get(0).expect("len 1").clone()];
            match apply(f, &args)? {
                Outcome::Single(e) => Ok(e),
                Outcome::Spread(s) => Err(Error::spread_result(s.len())),
            }
        }
        n => {
            let (left, right) = seq.split_at(n / 2);
            let mid = reduce(f, seed, &left)?;
            reduce(f, mid, &right)
        }
    }
}

/// Like [`reduce`], but returns every intermediate accumulator.
///
/// The result has length `seq.len() + 1`; its first element is `seed` and
/// its last equals `reduce(f, seed, seq)`.
///
/// # Errors
///
/// Propagates the first failure of `f`.
pub fn scan(f: &Callable, seed: Entity, seq: &Seq) -> Result<Seq> {
    match seq.len() {
        0 => Ok(Seq::unit(seed)),
        1 => {
            let args = [seed.clone(), seq.get(0).expect("len 1").clone()];
            let next = match apply(f, &args)? {
                Outcome::Single(e) => e,
                Outcome::Spread(s) => return Err(Error::spread_result(s.len())),
            };
            Ok(Seq::unit(seed).push_back(next))
        }
        n => {
            let (left, right) = seq.split_at(n / 2);
            let left_scan = scan(f, seed, &left)?;
            let carry = left_scan.last().expect("scan is never empty").clone();
            let right_scan = scan(f, carry, &right)?;
            // The carry seed is already the left scan's last element.
            Ok(left_scan.concat(&right_scan.skip(1)))
        }
    }
}
