//! Canonical entity encoding and the canonical order.
//!
//! Every entity has a deterministic string encoding ("mangle") that is
//! identical for structurally identical entities and distinct otherwise.
//! The encoding is self-delimiting — fixed-arity tags, terminated decimals,
//! length-prefixed strings — so concatenations stay injective.
//!
//! The canonical order over entities is the lexicographic byte order of
//! their mangles. It is a total order with no domain meaning; it exists to
//! make set operations commutative and deterministic.

use std::cmp::Ordering;
use std::fmt::Write;

use crate::entity::Entity;
use crate::sequence::Seq;
use crate::types::{Qualifier, TypeDesc};
use crate::value::Const;

/// Returns the canonical encoding of a single entity.
#[must_use]
pub fn mangle_entity(entity: &Entity) -> String {
    let mut out = String::new();
    encode_entity(entity, &mut out);
    out
}

/// Returns the concatenated canonical encoding of a sequence, the empty
/// string for the empty sequence.
#[must_use]
pub fn mangle(seq: &Seq) -> String {
    let mut out = String::new();
    for entity in seq {
        encode_entity(entity, &mut out);
    }
    out
}

/// Compares two entities in the canonical order.
#[must_use]
pub fn canonical_cmp(a: &Entity, b: &Entity) -> Ordering {
    mangle_entity(a).cmp(&mangle_entity(b))
}

fn encode_entity(entity: &Entity, out: &mut String) {
    match entity {
        Entity::Type(t) => {
            out.push('T');
            encode_type(t, out);
        }
        Entity::Value(c) => {
            out.push('V');
            encode_const(c, out);
        }
        Entity::Symbol(s) => {
            out.push('Y');
            encode_str(&s.module, out);
            encode_str(&s.name, out);
        }
        Entity::Pack(seq) => {
            let _ = write!(out, "P{};", seq.len());
            for item in seq {
                encode_entity(item, out);
            }
        }
    }
}

fn encode_type(t: &TypeDesc, out: &mut String) {
    match t {
        TypeDesc::Nil => out.push('n'),
        TypeDesc::Bool => out.push('b'),
        TypeDesc::Int => out.push('i'),
        TypeDesc::Float => out.push('f'),
        TypeDesc::Str => out.push('s'),
        TypeDesc::Sym => out.push('y'),
        TypeDesc::Seq(elem) => {
            out.push('A');
            encode_type(elem, out);
        }
        TypeDesc::Map(k, v) => {
            out.push('H');
            encode_type(k, out);
            encode_type(v, out);
        }
        TypeDesc::Qualified(Qualifier::Const, inner) => {
            out.push('C');
            encode_type(inner, out);
        }
        TypeDesc::Qualified(Qualifier::Shared, inner) => {
            out.push('O');
            encode_type(inner, out);
        }
    }
}

fn encode_const(c: &Const, out: &mut String) {
    match c {
        Const::Nil => out.push('n'),
        Const::Bool(b) => {
            out.push('b');
            out.push(if *b { '1' } else { '0' });
        }
        Const::Int(n) => {
            let _ = write!(out, "i{n};");
        }
        // Bit pattern, not decimal rendering: keeps the encoding injective
        // for every float including negative zero and NaN payloads.
        Const::Float(n) => {
            let _ = write!(out, "f{:016x}", n.to_bits());
        }
        Const::Str(s) => {
            out.push('s');
            encode_str(s, out);
        }
    }
}

fn encode_str(s: &str, out: &mut String) {
    let _ = write!(out, "{}:{}", s.len(), s);
}
