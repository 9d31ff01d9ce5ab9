//! Integration tests for sorting, uniqueness, and canonicalization.

use weft_algebra::{remove_duplicates, remove_duplicates_by, setify, sort, uniq, uniq_by};
use weft_combinator::{Callable, predicate2};
use weft_foundation::{Entity, Seq, is_same};

fn ints(ns: &[i64]) -> Seq {
    ns.iter().map(|&n| Entity::int(n)).collect()
}

fn int_less() -> Callable {
    predicate2("int-less", |a, b| {
        a.as_int().zip(b.as_int()).is_some_and(|(a, b)| a < b)
    })
}

#[test]
fn sort_orders_under_the_supplied_comparison() {
    assert_eq!(
        sort(&int_less(), &ints(&[5, 1, 4, 2, 3])).unwrap(),
        ints(&[1, 2, 3, 4, 5])
    );
    // Descending comparison sorts descending.
    let greater = predicate2("int-greater", |a, b| {
        a.as_int().zip(b.as_int()).is_some_and(|(a, b)| a > b)
    });
    assert_eq!(
        sort(&greater, &ints(&[5, 1, 4, 2, 3])).unwrap(),
        ints(&[5, 4, 3, 2, 1])
    );
}

#[test]
fn sort_is_stable_for_equal_keys() {
    // (key, tag) pairs; comparison looks only at the key.
    let pair =
        |k: i64, tag: &str| Entity::pack([Entity::int(k), Entity::str(tag)].into_iter().collect());
    let key_less = predicate2("key-less", |a, b| {
        let key = |e: &Entity| e.expand().and_then(|s| s.get(0)?.as_int());
        key(a).zip(key(b)).is_some_and(|(a, b)| a < b)
    });

    let input: Seq = [
        pair(1, "a"),
        pair(1, "b"),
        pair(0, "c"),
        pair(1, "d"),
        pair(0, "e"),
    ]
    .into_iter()
    .collect();
    let expected: Seq = [
        pair(0, "c"),
        pair(0, "e"),
        pair(1, "a"),
        pair(1, "b"),
        pair(1, "d"),
    ]
    .into_iter()
    .collect();
    assert_eq!(sort(&key_less, &input).unwrap(), expected);
}

#[test]
fn sort_handles_large_scrambled_input() {
    let n = 2_000i64;
    let scrambled: Seq = (0..n).map(|i| Entity::int((i * 7919) % n)).collect();
    let sorted = sort(&int_less(), &scrambled).unwrap();
    let expected: Seq = (0..n).map(Entity::int).collect();
    assert_eq!(sorted, expected);
}

#[test]
fn uniq_collapses_runs_only() {
    assert_eq!(uniq(&ints(&[1, 1, 2, 3, 3, 3, 1])).unwrap(), ints(&[1, 2, 3, 1]));
    assert_eq!(uniq(&Seq::new()).unwrap(), Seq::new());
}

#[test]
fn uniq_by_uses_the_supplied_equivalence() {
    // Equivalence by parity: runs of same-parity values collapse.
    let same_parity = predicate2("same-parity", |a, b| {
        a.as_int().zip(b.as_int()).is_some_and(|(a, b)| a % 2 == b % 2)
    });
    assert_eq!(
        uniq_by(&same_parity, &ints(&[2, 4, 6, 3, 5, 8])).unwrap(),
        ints(&[2, 3, 8])
    );
}

#[test]
fn remove_duplicates_is_global_first_wins() {
    assert_eq!(remove_duplicates(&ints(&[1, 2, 1, 3, 2])).unwrap(), ints(&[1, 2, 3]));

    let same_parity = predicate2("same-parity", |a, b| {
        a.as_int().zip(b.as_int()).is_some_and(|(a, b)| a % 2 == b % 2)
    });
    assert_eq!(
        remove_duplicates_by(&same_parity, &ints(&[7, 2, 9, 4, 11])).unwrap(),
        ints(&[7, 2])
    );
}

#[test]
fn setify_makes_sequences_set_comparable() {
    let a: Seq = [
        Entity::int(3),
        Entity::str("s"),
        Entity::symbol("m", "f"),
        Entity::int(3),
    ]
    .into_iter()
    .collect();
    let b: Seq = [
        Entity::symbol("m", "f"),
        Entity::int(3),
        Entity::int(3),
        Entity::str("s"),
    ]
    .into_iter()
    .collect();

    assert!(is_same(&Entity::pack(setify(&a)), &Entity::pack(setify(&b))));

    // Different multiplicities do not setify equal.
    let c: Seq = [Entity::int(3), Entity::str("s"), Entity::symbol("m", "f")]
        .into_iter()
        .collect();
    assert!(!is_same(&Entity::pack(setify(&a)), &Entity::pack(setify(&c))));
}
