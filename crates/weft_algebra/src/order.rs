//! Ordering algorithms: stable sort, uniqueness, canonicalization.

use weft_combinator::{Callable, predicate2, truthy};
use weft_foundation::{Entity, Result, Seq, mangle_entity};

/// The algebra's own identity as a binary predicate callable.
#[must_use]
pub fn same() -> Callable {
    predicate2("is-same", |a, b| a == b)
}

/// Stable merge sort under the binary "less than" predicate `comp`.
///
/// Elements equal under `comp` keep their input relative order: the merge
/// asks `comp(right_head, left_head)` and takes from the left whenever the
/// right head is not strictly less, so ties favor the earlier element.
///
/// # Errors
///
/// Propagates the first failure of `comp`.
pub fn sort(comp: &Callable, seq: &Seq) -> Result<Seq> {
    if seq.len() <= 1 {
        return Ok(seq.clone());
    }
    let (left, right) = seq.split_at(seq.len() / 2);
    let left = sort(comp, &left)?;
    let right = sort(comp, &right)?;
    merge(comp, &left, &right)
}

fn merge(comp: &Callable, left: &Seq, right: &Seq) -> Result<Seq> {
    let mut out: Vec<Entity> = Vec::with_capacity(left.len() + right.len());
    let mut li = 0;
    let mut ri = 0;
    while li < left.len() && ri < right.len() {
        let l = left.get(li).expect("in bounds");
        let r = right.get(ri).expect("in bounds");
        // Comparison order is fixed for stability.
        if truthy(comp, &[r.clone(), l.clone()])? {
            out.push(r.clone());
            ri += 1;
        } else {
            out.push(l.clone());
            li += 1;
        }
    }
    out.extend(left.iter().skip(li).cloned());
    out.extend(right.iter().skip(ri).cloned());
    Ok(out.into_iter().collect())
}

/// Collapses each maximal run of consecutive elements equal under `eq` to
/// its first element. Non-consecutive duplicates are untouched.
///
/// # Errors
///
/// Propagates the first failure of `eq`.
pub fn uniq_by(eq: &Callable, seq: &Seq) -> Result<Seq> {
    let mut out = Seq::new();
    for e in seq {
        let run_continues = match out.last() {
            Some(kept) => truthy(eq, &[kept.clone(), e.clone()])?,
            None => false,
        };
        if !run_continues {
            out = out.push_back(e.clone());
        }
    }
    Ok(out)
}

/// [`uniq_by`] under the algebra's identity.
///
/// # Errors
///
/// Never fails for well-formed entities; mirrors [`uniq_by`].
pub fn uniq(seq: &Seq) -> Result<Seq> {
    uniq_by(&same(), seq)
}

/// Removes every duplicate occurrence anywhere in the sequence, keeping
/// each element's first occurrence in place.
///
/// # Errors
///
/// Propagates the first failure of `eq`.
pub fn remove_duplicates_by(eq: &Callable, seq: &Seq) -> Result<Seq> {
    let mut out = Seq::new();
    for e in seq {
        let mut seen = false;
        for kept in &out {
            if truthy(eq, &[kept.clone(), e.clone()])? {
                seen = true;
                break;
            }
        }
        if !seen {
            out = out.push_back(e.clone());
        }
    }
    Ok(out)
}

/// [`remove_duplicates_by`] under the algebra's identity.
///
/// # Errors
///
/// Never fails for well-formed entities; mirrors [`remove_duplicates_by`].
pub fn remove_duplicates(seq: &Seq) -> Result<Seq> {
    remove_duplicates_by(&same(), seq)
}

/// Sorts by the canonical order: the single normalization point that makes
/// two sequences comparable as sets.
///
/// Duplicates are kept (this is a reordering, not a deduplication); follow
/// with [`uniq`] for set semantics proper.
#[must_use]
pub fn setify(seq: &Seq) -> Seq {
    let mut keyed: Vec<(String, Entity)> = seq
        .iter()
        .map(|e| (mangle_entity(e), e.clone()))
        .collect();
    keyed.sort_by(|a, b| a.0.cmp(&b.0));
    keyed.into_iter().map(|(_, e)| e).collect()
}
