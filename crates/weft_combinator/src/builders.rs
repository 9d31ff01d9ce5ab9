//! Higher-order builders.
//!
//! Each builder returns a new [`Callable`]. All of them route evaluation
//! through [`apply`], so a built combination is indistinguishable from a
//! directly adapted function.

use weft_foundation::{Entity, Error, Result, Seq};

use crate::callable::{Callable, Outcome, apply, truthy};

/// Always returns the given entity, ignoring all arguments.
#[must_use]
pub fn constant(e: Entity) -> Callable {
    Callable::new("constant", move |_| Ok(Outcome::Single(e.clone())))
}

/// Always returns the empty sequence, ignoring all arguments.
///
/// Under a splicing consumer (`map`, `zip_with`) this drops the element,
/// which is how `filter` rejects.
#[must_use]
pub fn constant_empty() -> Callable {
    Callable::new("constant-empty", |_| Ok(Outcome::Spread(Seq::new())))
}

/// Echoes its arguments: one argument comes back as a single entity, any
/// other count as a spread.
#[must_use]
pub fn identity() -> Callable {
    Callable::new("identity", |args| match args {
        [only] => Ok(Outcome::Single(only.clone())),
        _ => Ok(Outcome::Spread(args.iter().cloned().collect())),
    })
}

/// Evaluates `f(args)` regardless of input.
#[must_use]
pub fn delay(f: Callable, args: Vec<Entity>) -> Callable {
    Callable::new("delay", move |_| apply(&f, &args))
}

/// Partial application to the left: `bind(f, [x, y])` called with `rest`
/// evaluates `f(x, y, rest...)`.
#[must_use]
pub fn bind(f: Callable, left: Vec<Entity>) -> Callable {
    Callable::new("bind", move |args| {
        let mut full = left.clone();
        full.extend_from_slice(args);
        apply(&f, &full)
    })
}

/// Partial application to the right: `rbind(f, [x, y])` called with `rest`
/// evaluates `f(rest..., x, y)`.
#[must_use]
pub fn rbind(f: Callable, right: Vec<Entity>) -> Callable {
    Callable::new("rbind", move |args| {
        let mut full = args.to_vec();
        full.extend_from_slice(&right);
        apply(&f, &full)
    })
}

/// Boolean negation of a predicate.
#[must_use]
pub fn negate(pred: Callable) -> Callable {
    Callable::new("negate", move |args| {
        Ok(Outcome::Single(Entity::boolean(!truthy(&pred, args)?)))
    })
}

/// Short-circuit conjunction, strictly left to right. Predicate k+1 is
/// never evaluated once one of 1..k has failed. Zero predicates is the
/// identity of conjunction: always true.
#[must_use]
pub fn all_of(preds: Vec<Callable>) -> Callable {
    Callable::new("all-of", move |args| {
        for pred in &preds {
            if !truthy(pred, args)? {
                return Ok(Outcome::Single(Entity::boolean(false)));
            }
        }
        Ok(Outcome::Single(Entity::boolean(true)))
    })
}

/// Short-circuit disjunction, strictly left to right. Zero predicates is
/// the identity of disjunction: always false.
#[must_use]
pub fn any_of(preds: Vec<Callable>) -> Callable {
    Callable::new("any-of", move |args| {
        for pred in &preds {
            if truthy(pred, args)? {
                return Ok(Outcome::Single(Entity::boolean(true)));
            }
        }
        Ok(Outcome::Single(Entity::boolean(false)))
    })
}

/// Right-to-left chaining: `compose([f1, f2, f3])` evaluates
/// `f1(f2(f3(args)))`. Empty compose behaves as [`identity`].
#[must_use]
pub fn compose(fs: Vec<Callable>) -> Callable {
    Callable::new("compose", move |args| {
        let mut outcome = match args {
            [only] => Outcome::Single(only.clone()),
            _ => Outcome::Spread(args.iter().cloned().collect()),
        };
        for f in fs.iter().rev() {
            let next_args = outcome.into_args();
            outcome = apply(f, &next_args)?;
        }
        Ok(outcome)
    })
}

/// Fallback chaining: tries each alternative in order. An applicability
/// failure falls through to the next alternative; the final alternative is
/// unguarded and its failure propagates, whatever its class. The algebra's
/// only catch construct.
#[must_use]
pub fn guard(alts: Vec<Callable>) -> Callable {
    Callable::new("guard", move |args| {
        let Some((last, guarded)) = alts.split_last() else {
            return Err(Error::no_matching_clause());
        };
        for alt in guarded {
            match apply(alt, args) {
                Ok(out) => return Ok(out),
                Err(e) if e.is_inapplicable() => {}
                Err(e) => return Err(e),
            }
        }
        apply(last, args)
    })
}

/// Two-way dispatch: evaluates `pred(args)` and forwards to `then` or
/// `otherwise`.
#[must_use]
pub fn conditional(pred: Callable, then: Callable, otherwise: Callable) -> Callable {
    Callable::new("conditional", move |args| {
        if truthy(&pred, args)? {
            apply(&then, args)
        } else {
            apply(&otherwise, args)
        }
    })
}

/// [`conditional`] with [`identity`] as the fallback branch.
#[must_use]
pub fn when(pred: Callable, then: Callable) -> Callable {
    conditional(pred, then, identity())
}

/// Switch-like dispatch over parallel case/result lists.
///
/// `results` must hold exactly one result per case, optionally followed by
/// one trailing default. Cases are tried left to right; the first case
/// whose predicate holds selects its result. Falling through every case
/// without a default is an applicability failure (so default-less conds
/// compose under [`guard`]).
///
/// # Errors
///
/// Returns a configuration error when the case and result counts do not
/// line up.
pub fn cond(cases: Vec<Callable>, results: Vec<Callable>) -> Result<Callable> {
    if results.len() != cases.len() && results.len() != cases.len() + 1 {
        return Err(Error::cond_arity(cases.len(), results.len()));
    }
    Ok(Callable::new("cond", move |args| {
        for (case, result) in cases.iter().zip(&results) {
            if truthy(case, args)? {
                return apply(result, args);
            }
        }
        match results.get(cases.len()) {
            Some(default) => apply(default, args),
            None => Err(Error::no_matching_clause()),
        }
    }))
}
