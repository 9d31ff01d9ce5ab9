//! Integration tests for entity identity.
//!
//! Kind-aware `is_same` rules, pack wrapping, and cross-kind comparisons.

use weft_foundation::{Const, Entity, Qualifier, Seq, SymbolRef, TypeDesc, is_same};

// =============================================================================
// Kind rules
// =============================================================================

#[test]
fn type_vs_type_is_structural() {
    let a = Entity::Type(TypeDesc::seq(TypeDesc::Int));
    let b = Entity::Type(TypeDesc::seq(TypeDesc::Int));
    let c = Entity::Type(TypeDesc::seq(TypeDesc::Float));
    assert!(is_same(&a, &b));
    assert!(!is_same(&a, &c));
}

#[test]
fn qualifiers_participate_in_type_identity() {
    let plain = Entity::Type(TypeDesc::Str);
    let constant = Entity::Type(TypeDesc::qualified(Qualifier::Const, TypeDesc::Str));
    let shared = Entity::Type(TypeDesc::qualified(Qualifier::Shared, TypeDesc::Str));
    assert!(!is_same(&plain, &constant));
    assert!(!is_same(&constant, &shared));
}

#[test]
fn value_vs_value_is_type_and_value() {
    assert!(is_same(&Entity::int(3), &Entity::int(3)));
    assert!(!is_same(&Entity::int(3), &Entity::int(4)));
    assert!(!is_same(&Entity::int(3), &Entity::float(3.0)));
    assert!(is_same(&Entity::str("a"), &Entity::str("a")));
}

#[test]
fn symbol_vs_symbol_is_declaration_identity() {
    let a = Entity::Symbol(SymbolRef::new("geometry", "area"));
    let b = Entity::symbol("geometry", "area");
    let c = Entity::symbol("geometry", "perimeter");
    assert!(is_same(&a, &b));
    assert!(!is_same(&a, &c));
}

#[test]
fn cross_kind_is_always_unequal() {
    let kinds = [
        Entity::Type(TypeDesc::Int),
        Entity::int(0),
        Entity::symbol("m", "zero"),
        Entity::pack(Seq::new()),
    ];
    for (i, a) in kinds.iter().enumerate() {
        for (j, b) in kinds.iter().enumerate() {
            assert_eq!(is_same(a, b), i == j, "{a:?} vs {b:?}");
        }
    }
}

// =============================================================================
// Packs
// =============================================================================

#[test]
fn pack_expand_is_left_inverse() {
    let seq: Seq = [Entity::int(1), Entity::str("two"), Entity::Type(TypeDesc::Bool)]
        .into_iter()
        .collect();
    let packed = Entity::pack(seq.clone());
    assert!(packed.is_pack());
    assert_eq!(packed.expand(), Some(&seq));
}

#[test]
fn pack_identity_is_elementwise() {
    let a = Entity::pack([Entity::int(1), Entity::int(2)].into_iter().collect());
    let b = Entity::pack([Entity::int(1), Entity::int(2)].into_iter().collect());
    let c = Entity::pack([Entity::int(2), Entity::int(1)].into_iter().collect());
    assert!(is_same(&a, &b));
    assert!(!is_same(&a, &c));
}

#[test]
fn packs_nest() {
    let inner = Entity::pack([Entity::int(1)].into_iter().collect());
    let outer = Entity::pack([inner.clone(), Entity::int(2)].into_iter().collect());
    let expanded = outer.expand().unwrap();
    assert_eq!(expanded.get(0), Some(&inner));
    assert!(expanded.get(0).unwrap().is_pack());
}

#[test]
fn empty_pack_is_a_value_of_its_own() {
    let empty = Entity::pack(Seq::new());
    assert!(is_same(&empty, &Entity::pack(Seq::new())));
    assert_eq!(empty.expand().map(Seq::len), Some(0));
}

// =============================================================================
// Constants
// =============================================================================

#[test]
fn nan_constant_is_self_same() {
    let nan = Entity::Value(Const::Float(f64::NAN));
    assert!(is_same(&nan, &nan.clone()));
}

#[test]
fn negative_zero_is_distinct() {
    assert!(!is_same(&Entity::float(0.0), &Entity::float(-0.0)));
}
