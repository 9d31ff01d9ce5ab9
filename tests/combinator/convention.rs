//! Integration tests for the calling convention: apply, outcomes, arity
//! adapters, and flag interpretation.

use weft_combinator::{
    Callable, Outcome, apply, binary, is_same_with, predicate, transform, truthy, unary,
};
use weft_foundation::{Entity, Error, Seq};

#[test]
fn apply_is_the_single_entry_point() {
    // A hand-built callable and an adapted one look identical to callers.
    let raw = Callable::new("first", |args| {
        args.first()
            .map(|e| Outcome::Single(e.clone()))
            .ok_or_else(|| Error::arity_mismatch("at least 1", 0))
    });
    let adapted = transform("echo", Clone::clone);

    let arg = [Entity::str("x")];
    assert_eq!(apply(&raw, &arg).unwrap(), apply(&adapted, &arg).unwrap());
}

#[test]
fn adapters_enforce_arity_as_applicability() {
    let f = unary("one", |e| Ok(Outcome::Single(e.clone())));
    let err = apply(&f, &[]).unwrap_err();
    assert!(err.is_inapplicable());

    let g = binary("two", |a, _| Ok(Outcome::Single(a.clone())));
    let err = apply(&g, &[Entity::int(1)]).unwrap_err();
    assert!(err.is_inapplicable());
}

#[test]
fn spread_outcomes_carry_zero_or_many() {
    let explode = unary("explode", |e| {
        Ok(match e.expand() {
            Some(seq) => Outcome::Spread(seq.clone()),
            None => Outcome::Single(e.clone()),
        })
    });

    let packed = Entity::pack([Entity::int(1), Entity::int(2)].into_iter().collect());
    let out = apply(&explode, &[packed]).unwrap();
    assert_eq!(out.into_args().len(), 2);

    let out = apply(&explode, &[Entity::int(7)]).unwrap();
    assert_eq!(out, Outcome::Single(Entity::int(7)));
}

#[test]
fn flags_must_be_single_booleans() {
    let yes = predicate("yes", |_| true);
    assert!(truthy(&yes, &[Entity::int(0)]).unwrap());

    let not_a_flag = transform("echo", Clone::clone);
    let err = truthy(&not_a_flag, &[Entity::int(0)]).unwrap_err();
    assert!(err.is_inapplicable());

    let spread = Callable::new("spread", |_| Ok(Outcome::Spread(Seq::new())));
    let err = truthy(&spread, &[Entity::int(0)]).unwrap_err();
    assert!(err.is_inapplicable());
}

#[test]
fn is_same_with_is_a_bound_unary_predicate() {
    let target = Entity::symbol("core", "len");
    let p = is_same_with(target.clone());
    assert!(truthy(&p, &[Entity::symbol("core", "len")]).unwrap());
    assert!(!truthy(&p, &[Entity::symbol("core", "cap")]).unwrap());
    // Cross-kind: never the same.
    assert!(!truthy(&p, &[Entity::str("core.len")]).unwrap());
}
