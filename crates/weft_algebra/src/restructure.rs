//! Restructuring algorithms: reverse, rotate, stride, segment, repeat,
//! integer ranges, and lock-step traversal of packed sequences.

use weft_combinator::{Callable, Outcome, apply};
use weft_foundation::{Entity, Error, Result, Seq};

/// Reverses the sequence.
#[must_use]
pub fn reverse(seq: &Seq) -> Seq {
    seq.iter().rev().cloned().collect()
}

/// Rotates left by `n` positions. Negative `n` rotates right; any
/// magnitude is normalized modulo the length. Empty input stays empty.
#[must_use]
pub fn rotate(n: i64, seq: &Seq) -> Seq {
    if seq.is_empty() {
        return Seq::new();
    }
    #[allow(clippy::cast_possible_wrap, clippy::cast_possible_truncation)]
    let pivot = n.rem_euclid(seq.len() as i64) as usize;
    let (front, back) = seq.split_at(pivot);
    back.concat(&front)
}

/// Every `n`th element starting at index 0.
///
/// # Errors
///
/// Returns a configuration error when `n` is zero.
pub fn stride(n: usize, seq: &Seq) -> Result<Seq> {
    if n == 0 {
        return Err(Error::zero_stride());
    }
    Ok(seq.iter().step_by(n).cloned().collect())
}

/// Chunks the sequence into packs of length `n`; the final chunk may be
/// shorter.
///
/// # Errors
///
/// Returns a configuration error when `n` is zero.
pub fn segment(n: usize, seq: &Seq) -> Result<Seq> {
    if n == 0 {
        return Err(Error::zero_segment());
    }
    Ok((0..seq.len())
        .step_by(n)
        .map(|start| Entity::pack(seq.skip(start).take(n)))
        .collect())
}

/// Concatenates `n` copies of the sequence. Zero copies, or an empty
/// input, give the empty sequence.
#[must_use]
pub fn repeat(n: usize, seq: &Seq) -> Seq {
    let mut out = Seq::new();
    for _ in 0..n {
        out = out.concat(seq);
    }
    out
}

/// Arithmetic progression of integer values over the half-open range
/// `[begin, end)`, direction taken from the sign of `step`. A `begin`
/// already past `end` in the step's direction yields the empty sequence,
/// not an error.
///
/// # Errors
///
/// Returns a configuration error when `step` is zero.
pub fn iota(begin: i64, end: i64, step: i64) -> Result<Seq> {
    if step == 0 {
        return Err(Error::zero_step());
    }
    let mut out = Seq::new();
    let mut current = begin;
    while (step > 0 && current < end) || (step < 0 && current > end) {
        out = out.push_back(Entity::int(current));
        match current.checked_add(step) {
            Some(next) => current = next,
            None => break,
        }
    }
    Ok(out)
}

/// Lock-step traversal of packed sequences, bounded by the shortest
/// input: the result's i-th element is the pack of every input's i-th
/// element. Empty if no inputs are given or any input is empty.
///
/// # Errors
///
/// Returns an applicability failure if any operand is not a pack.
pub fn zip(packs: &[Entity]) -> Result<Seq> {
    let operands = expand_all(packs)?;
    if operands.is_empty() {
        return Ok(Seq::new());
    }
    let shortest = operands.iter().map(|s| s.len()).min().unwrap_or(0);
    Ok((0..shortest)
        .map(|i| Entity::pack(nth_of_each(&operands, i)))
        .collect())
}

/// Like [`zip`], but applies `f` to each transversal instead of packing
/// it. Spread outcomes are spliced, as in `map`.
///
/// # Errors
///
/// Returns an applicability failure if any operand is not a pack, and
/// propagates failures of `f`.
pub fn zip_with(f: &Callable, packs: &[Entity]) -> Result<Seq> {
    let operands = expand_all(packs)?;
    if operands.is_empty() {
        return Ok(Seq::new());
    }
    let shortest = operands.iter().map(|s| s.len()).min().unwrap_or(0);
    let mut out = Seq::new();
    for i in 0..shortest {
        let args: Vec<Entity> = nth_of_each(&operands, i).into_iter().collect();
        match apply(f, &args)? {
            Outcome::Single(e) => out = out.push_back(e),
            Outcome::Spread(s) => out = out.concat(&s),
        }
    }
    Ok(out)
}

/// The `i`-th element of each packed sequence.
///
/// Unlike [`zip`], an input too short to have an `i`-th element is an
/// applicability failure, not an empty result: "index out of range" is
/// distinguishable from "deliberately short".
///
/// # Errors
///
/// Returns an applicability failure if any operand is not a pack or lacks
/// an `i`-th element.
pub fn transverse(i: usize, packs: &[Entity]) -> Result<Seq> {
    let operands = expand_all(packs)?;
    let mut out = Seq::new();
    for seq in operands {
        let e = seq
            .get(i)
            .ok_or_else(|| Error::index_out_of_bounds(i, seq.len()))?;
        out = out.push_back(e.clone());
    }
    Ok(out)
}

fn expand_all(packs: &[Entity]) -> Result<Vec<&Seq>> {
    packs
        .iter()
        .map(|e| e.expand().ok_or_else(|| Error::not_a_pack(e.kind_name())))
        .collect()
}

fn nth_of_each(operands: &[&Seq], i: usize) -> Seq {
    operands
        .iter()
        .filter_map(|s| s.get(i))
        .cloned()
        .collect()
}
