//! Structural type descriptors.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Structural type descriptor.
///
/// Describes the shape of a type-kind entity. Equality is structural and
/// includes qualifiers: `const int` and `int` are distinct descriptors.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TypeDesc {
    /// The nil type (only value: nil).
    Nil,
    /// Boolean type.
    Bool,
    /// 64-bit signed integer.
    Int,
    /// 64-bit floating point.
    Float,
    /// String type.
    Str,
    /// Symbol type (named-declaration reference).
    Sym,
    /// Homogeneous sequence type.
    Seq(Box<TypeDesc>),
    /// Homogeneous map type.
    Map(Box<TypeDesc>, Box<TypeDesc>),
    /// A type with a qualifier applied.
    Qualified(Qualifier, Box<TypeDesc>),
}

/// Type qualifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Qualifier {
    /// Immutable view.
    Const,
    /// Shared across threads of the host.
    Shared,
}

impl TypeDesc {
    /// Creates a sequence type with the given element type.
    #[must_use]
    pub fn seq(element: TypeDesc) -> Self {
        Self::Seq(Box::new(element))
    }

    /// Creates a map type with the given key and value types.
    #[must_use]
    pub fn map(key: TypeDesc, value: TypeDesc) -> Self {
        Self::Map(Box::new(key), Box::new(value))
    }

    /// Applies a qualifier to this type.
    #[must_use]
    pub fn qualified(qualifier: Qualifier, inner: TypeDesc) -> Self {
        Self::Qualified(qualifier, Box::new(inner))
    }

    /// Returns this type stripped of any outer qualifiers.
    #[must_use]
    pub fn unqualified(&self) -> &TypeDesc {
        match self {
            Self::Qualified(_, inner) => inner.unqualified(),
            other => other,
        }
    }

    /// Returns true if this type carries the given qualifier at any depth
    /// of its qualifier chain.
    #[must_use]
    pub fn has_qualifier(&self, qualifier: Qualifier) -> bool {
        match self {
            Self::Qualified(q, inner) => *q == qualifier || inner.has_qualifier(qualifier),
            _ => false,
        }
    }
}

impl fmt::Debug for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Bool => write!(f, "bool"),
            Self::Int => write!(f, "int"),
            Self::Float => write!(f, "float"),
            Self::Str => write!(f, "str"),
            Self::Sym => write!(f, "sym"),
            Self::Seq(t) => write!(f, "seq<{t:?}>"),
            Self::Map(k, v) => write!(f, "map<{k:?}, {v:?}>"),
            Self::Qualified(Qualifier::Const, t) => write!(f, "const {t:?}"),
            Self::Qualified(Qualifier::Shared, t) => write!(f, "shared {t:?}"),
        }
    }
}

impl fmt::Display for TypeDesc {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}
