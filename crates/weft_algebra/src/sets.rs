//! Multiset algorithms: containment, composition, intersection.
//!
//! All of these respect element multiplicity. Ordering within results is
//! the canonical order, which makes intersection commutative and
//! deterministic regardless of input order.

use std::cmp::Ordering;
use std::collections::HashMap;

use weft_foundation::{Entity, Error, Result, Seq, mangle_entity};

use crate::order::setify;

/// Occurrence counts keyed by canonical encoding.
fn occurrences(seq: &Seq) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for e in seq {
        *counts.entry(mangle_entity(e)).or_insert(0) += 1;
    }
    counts
}

/// Multiset containment: true iff for every distinct value in `items`,
/// `set` holds at least as many occurrences as `items` does. Vacuously
/// true when `items` is empty.
#[must_use]
pub fn contains(set: &Seq, items: &Seq) -> bool {
    let have = occurrences(set);
    occurrences(items)
        .into_iter()
        .all(|(key, needed)| have.get(&key).copied().unwrap_or(0) >= needed)
}

/// Multiset equality: same elements with the same multiplicities, order
/// irrelevant.
#[must_use]
pub fn is_composed_of(set: &Seq, items: &Seq) -> bool {
    set.len() == items.len() && occurrences(set) == occurrences(items)
}

/// Multiset intersection across zero or more packed sequences.
///
/// Each element's multiplicity in the result is the minimum of its
/// multiplicities across all inputs. Zero inputs, or any empty input,
/// yield the empty result. The result is in canonical order.
///
/// # Errors
///
/// Returns an applicability failure if any operand is not a pack.
pub fn intersection(packs: &[Entity]) -> Result<Seq> {
    // Validate every operand before intersecting: a malformed operand
    // must surface even when an earlier empty input already decides the
    // result.
    let operands: Vec<&Seq> = packs.iter().map(expand_operand).collect::<Result<_>>()?;
    let Some((first, rest)) = operands.split_first() else {
        return Ok(Seq::new());
    };
    let mut acc = setify(first);
    for other in rest {
        acc = pair_intersect(&acc, &setify(other));
        if acc.is_empty() {
            break;
        }
    }
    Ok(acc)
}

fn expand_operand(e: &Entity) -> Result<&Seq> {
    e.expand().ok_or_else(|| Error::not_a_pack(e.kind_name()))
}

/// Merge walk over two canonically sorted sequences: advance the strictly
/// lesser side, emit one copy and advance both on a match.
fn pair_intersect(a: &Seq, b: &Seq) -> Seq {
    let mut out = Seq::new();
    let mut ai = 0;
    let mut bi = 0;
    while ai < a.len() && bi < b.len() {
        let x = a.get(ai).expect("in bounds");
        let y = b.get(bi).expect("in bounds");
        match mangle_entity(x).cmp(&mangle_entity(y)) {
            Ordering::Less => ai += 1,
            Ordering::Greater => bi += 1,
            Ordering::Equal => {
                out = out.push_back(x.clone());
                ai += 1;
                bi += 1;
            }
        }
    }
    out
}
