//! Integration tests for the canonical encoding and canonical order.

use std::cmp::Ordering;

use weft_foundation::{Entity, Qualifier, Seq, TypeDesc, canonical_cmp, mangle, mangle_entity};

#[test]
fn mangle_of_empty_sequence_is_empty() {
    assert_eq!(mangle(&Seq::new()), "");
}

#[test]
fn mangle_concatenates_elements() {
    let a = Entity::symbol("core", "len");
    let b = Entity::Type(TypeDesc::map(TypeDesc::Str, TypeDesc::Int));
    let c = Entity::float(2.5);
    let seq: Seq = [a.clone(), b.clone(), c.clone()].into_iter().collect();
    let expected = format!(
        "{}{}{}",
        mangle_entity(&a),
        mangle_entity(&b),
        mangle_entity(&c)
    );
    assert_eq!(mangle(&seq), expected);
}

#[test]
fn identical_entities_encode_identically() {
    let a = Entity::Type(TypeDesc::qualified(Qualifier::Const, TypeDesc::seq(TypeDesc::Int)));
    let b = Entity::Type(TypeDesc::qualified(Qualifier::Const, TypeDesc::seq(TypeDesc::Int)));
    assert_eq!(mangle_entity(&a), mangle_entity(&b));
}

#[test]
fn distinct_entities_encode_distinctly() {
    let entities = [
        Entity::Type(TypeDesc::Int),
        Entity::Type(TypeDesc::qualified(Qualifier::Const, TypeDesc::Int)),
        Entity::int(0),
        Entity::int(1),
        Entity::float(0.0),
        Entity::str(""),
        Entity::str("0"),
        Entity::symbol("", "x"),
        Entity::symbol("x", ""),
        Entity::pack(Seq::new()),
        Entity::pack([Entity::int(0)].into_iter().collect()),
    ];
    for (i, a) in entities.iter().enumerate() {
        for (j, b) in entities.iter().enumerate() {
            if i != j {
                assert_ne!(mangle_entity(a), mangle_entity(b), "{a:?} vs {b:?}");
            }
        }
    }
}

#[test]
fn nested_packs_do_not_collide_with_flat_sequences() {
    let nested: Seq = [
        Entity::pack([Entity::int(1), Entity::int(2)].into_iter().collect()),
    ]
    .into_iter()
    .collect();
    let flat: Seq = [
        Entity::pack([Entity::int(1)].into_iter().collect()),
        Entity::int(2),
    ]
    .into_iter()
    .collect();
    assert_ne!(mangle(&nested), mangle(&flat));
}

#[test]
fn canonical_order_is_a_total_order() {
    let a = Entity::int(10);
    let b = Entity::str("ten");
    let c = Entity::symbol("num", "ten");

    // Antisymmetry and transitivity over a small chain.
    let mut sorted = [a, b, c];
    sorted.sort_by(canonical_cmp);
    assert_eq!(canonical_cmp(&sorted[0], &sorted[1]), Ordering::Less);
    assert_eq!(canonical_cmp(&sorted[1], &sorted[2]), Ordering::Less);
    assert_eq!(canonical_cmp(&sorted[0], &sorted[2]), Ordering::Less);
}

#[test]
fn canonical_order_agrees_with_mangle_equality() {
    let a = Entity::pack([Entity::int(1)].into_iter().collect());
    let b = Entity::pack([Entity::int(1)].into_iter().collect());
    assert_eq!(canonical_cmp(&a, &b), Ordering::Equal);
}
