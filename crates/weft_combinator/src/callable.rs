//! The uniform calling convention.
//!
//! Every function value in the algebra — unary, binary, or variadic — is a
//! [`Callable`]: a shared closure from an argument slice to an [`Outcome`].
//! The higher-order builders only ever go through [`apply`], so adapted
//! native functions and built combinations are indistinguishable to
//! callers.

use std::fmt;
use std::sync::Arc;

use weft_foundation::{Entity, Error, Result, Seq};

/// The result of evaluating a callable.
///
/// A callable either produces one entity or a whole sequence of zero or
/// more. Sequence results are spliced (flattened one level) by map-like
/// consumers, which is how `map` doubles as flat-map and how `filter`
/// drops elements.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// Exactly one resulting entity.
    Single(Entity),
    /// Zero or more resulting entities.
    Spread(Seq),
}

impl Outcome {
    /// Flattens this outcome into an argument vector for the next callable
    /// in a chain.
    #[must_use]
    pub fn into_args(self) -> Vec<Entity> {
        match self {
            Self::Single(e) => vec![e],
            Self::Spread(seq) => seq.into_iter().collect(),
        }
    }

    /// Interprets this outcome as a boolean flag.
    ///
    /// # Errors
    ///
    /// Returns an applicability failure unless the outcome is a single
    /// boolean value entity.
    pub fn flag(&self) -> Result<bool> {
        match self {
            Self::Single(e) => e
                .as_flag()
                .ok_or_else(|| Error::not_boolean(e.kind_name())),
            Self::Spread(seq) => Err(Error::not_boolean(format!("spread of {}", seq.len()))),
        }
    }
}

type CallFn = dyn Fn(&[Entity]) -> Result<Outcome> + Send + Sync;

/// A uniformly callable function value.
///
/// Cheap to clone (shared closure). Construct one directly with
/// [`Callable::new`] or through the arity adapters ([`unary`], [`binary`],
/// [`predicate`], ...).
#[derive(Clone)]
pub struct Callable {
    /// Name for diagnostics.
    name: &'static str,
    func: Arc<CallFn>,
}

impl Callable {
    /// Creates a callable from a variadic closure.
    pub fn new(
        name: &'static str,
        func: impl Fn(&[Entity]) -> Result<Outcome> + Send + Sync + 'static,
    ) -> Self {
        Self {
            name,
            func: Arc::new(func),
        }
    }

    /// Returns the diagnostic name of this callable.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        self.name
    }

    /// Evaluates this callable against the given arguments.
    ///
    /// # Errors
    ///
    /// Propagates whatever the underlying closure reports.
    pub fn invoke(&self, args: &[Entity]) -> Result<Outcome> {
        (self.func)(args)
    }
}

impl fmt::Debug for Callable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<callable {}>", self.name)
    }
}

/// Uniform invocation entry point.
///
/// # Errors
///
/// Propagates the callable's failure.
pub fn apply(f: &Callable, args: &[Entity]) -> Result<Outcome> {
    f.invoke(args)
}

/// Evaluates a predicate callable and interprets the result as a flag.
///
/// # Errors
///
/// Propagates the callable's failure, or an applicability failure if the
/// result is not a single boolean.
pub fn truthy(f: &Callable, args: &[Entity]) -> Result<bool> {
    apply(f, args)?.flag()
}

/// Adapts a unary function. Any other argument count is an applicability
/// failure.
pub fn unary(
    name: &'static str,
    func: impl Fn(&Entity) -> Result<Outcome> + Send + Sync + 'static,
) -> Callable {
    Callable::new(name, move |args| match args {
        [only] => func(only),
        _ => Err(Error::arity_mismatch("exactly 1", args.len())),
    })
}

/// Adapts a binary function. Any other argument count is an applicability
/// failure.
pub fn binary(
    name: &'static str,
    func: impl Fn(&Entity, &Entity) -> Result<Outcome> + Send + Sync + 'static,
) -> Callable {
    Callable::new(name, move |args| match args {
        [a, b] => func(a, b),
        _ => Err(Error::arity_mismatch("exactly 2", args.len())),
    })
}

/// Adapts an infallible unary boolean function.
pub fn predicate(
    name: &'static str,
    func: impl Fn(&Entity) -> bool + Send + Sync + 'static,
) -> Callable {
    unary(name, move |e| Ok(Outcome::Single(Entity::boolean(func(e)))))
}

/// Adapts an infallible binary boolean function.
pub fn predicate2(
    name: &'static str,
    func: impl Fn(&Entity, &Entity) -> bool + Send + Sync + 'static,
) -> Callable {
    binary(name, move |a, b| {
        Ok(Outcome::Single(Entity::boolean(func(a, b))))
    })
}

/// Adapts an infallible unary entity-to-entity function.
pub fn transform(
    name: &'static str,
    func: impl Fn(&Entity) -> Entity + Send + Sync + 'static,
) -> Callable {
    unary(name, move |e| Ok(Outcome::Single(func(e))))
}

/// Unary predicate bound to `a`: true for entities that are the same as
/// `a`. The partially-applied form of identity used throughout the search
/// and set layers.
#[must_use]
pub fn is_same_with(a: Entity) -> Callable {
    predicate("is-same-with", move |e| *e == a)
}
