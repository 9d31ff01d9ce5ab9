//! The polymorphic entity type.

use std::fmt;
use std::hash::{Hash, Hasher};

use crate::sequence::Seq;
use crate::symbol::SymbolRef;
use crate::types::TypeDesc;
use crate::value::Const;

/// An opaque, immutable handle to one unit of the algebra.
///
/// Every entity is exactly one of three base kinds — a structural type
/// descriptor, a typed constant, or a named-declaration reference — plus
/// the derived pack kind, which wraps a whole sequence so that sequences
/// can nest as single elements.
///
/// Equality (`PartialEq`) is the algebra's `is_same` identity: kind-aware,
/// with cross-kind comparisons always unequal.
#[derive(Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Entity {
    /// A structural type descriptor.
    Type(TypeDesc),
    /// A typed constant.
    Value(Const),
    /// A reference to a named declaration.
    Symbol(SymbolRef),
    /// A wrapped sequence.
    Pack(Seq),
}

impl Entity {
    /// Creates an integer value entity.
    #[must_use]
    pub const fn int(n: i64) -> Self {
        Self::Value(Const::Int(n))
    }

    /// Creates a boolean value entity.
    #[must_use]
    pub const fn boolean(b: bool) -> Self {
        Self::Value(Const::Bool(b))
    }

    /// Creates a float value entity.
    #[must_use]
    pub const fn float(n: f64) -> Self {
        Self::Value(Const::Float(n))
    }

    /// Creates a string value entity.
    #[must_use]
    pub fn str(s: &str) -> Self {
        Self::Value(Const::from(s))
    }

    /// Creates a symbol entity.
    #[must_use]
    pub fn symbol(module: &str, name: &str) -> Self {
        Self::Symbol(SymbolRef::new(module, name))
    }

    /// Wraps a sequence as a single pack entity.
    #[must_use]
    pub const fn pack(seq: Seq) -> Self {
        Self::Pack(seq)
    }

    /// Returns true if this entity is a pack.
    #[must_use]
    pub const fn is_pack(&self) -> bool {
        matches!(self, Self::Pack(_))
    }

    /// Returns the wrapped sequence of a pack, the left inverse of
    /// [`Entity::pack`].
    #[must_use]
    pub const fn expand(&self) -> Option<&Seq> {
        match self {
            Self::Pack(seq) => Some(seq),
            _ => None,
        }
    }

    /// Attempts to extract a type descriptor.
    #[must_use]
    pub const fn as_type(&self) -> Option<&TypeDesc> {
        match self {
            Self::Type(t) => Some(t),
            _ => None,
        }
    }

    /// Attempts to extract a constant.
    #[must_use]
    pub const fn as_value(&self) -> Option<&Const> {
        match self {
            Self::Value(c) => Some(c),
            _ => None,
        }
    }

    /// Attempts to extract a symbol reference.
    #[must_use]
    pub const fn as_symbol(&self) -> Option<&SymbolRef> {
        match self {
            Self::Symbol(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to extract a boolean constant.
    #[must_use]
    pub const fn as_flag(&self) -> Option<bool> {
        match self {
            Self::Value(Const::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to extract an integer constant.
    #[must_use]
    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Value(Const::Int(n)) => Some(*n),
            _ => None,
        }
    }

    /// Returns the name of this entity's kind, for diagnostics.
    #[must_use]
    pub const fn kind_name(&self) -> &'static str {
        match self {
            Self::Type(_) => "type",
            Self::Value(_) => "value",
            Self::Symbol(_) => "symbol",
            Self::Pack(_) => "pack",
        }
    }
}

/// Kind-aware structural identity.
///
/// Type/Type compares structurally including qualifiers, Value/Value by
/// type and value, Symbol/Symbol by declaration identity, Pack/Pack
/// element-wise. Cross-kind comparisons are always unequal.
#[must_use]
pub fn is_same(a: &Entity, b: &Entity) -> bool {
    a == b
}

impl PartialEq for Entity {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Type(a), Self::Type(b)) => a == b,
            (Self::Value(a), Self::Value(b)) => a == b,
            (Self::Symbol(a), Self::Symbol(b)) => a == b,
            (Self::Pack(a), Self::Pack(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Entity {}

impl Hash for Entity {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Type(t) => t.hash(state),
            Self::Value(c) => c.hash(state),
            Self::Symbol(s) => s.hash(state),
            Self::Pack(seq) => seq.hash(state),
        }
    }
}

impl fmt::Debug for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(t) => write!(f, "Type({t:?})"),
            Self::Value(c) => write!(f, "{c:?}"),
            Self::Symbol(s) => write!(f, "{s:?}"),
            Self::Pack(seq) => write!(f, "Pack({seq:?})"),
        }
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(t) => write!(f, "{t}"),
            Self::Value(c) => write!(f, "{c}"),
            Self::Symbol(s) => write!(f, "{s}"),
            Self::Pack(seq) => {
                write!(f, "(")?;
                for (i, item) in seq.iter().enumerate() {
                    if i > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{item}")?;
                }
                write!(f, ")")
            }
        }
    }
}

impl From<TypeDesc> for Entity {
    fn from(t: TypeDesc) -> Self {
        Self::Type(t)
    }
}

impl From<Const> for Entity {
    fn from(c: Const) -> Self {
        Self::Value(c)
    }
}

impl From<SymbolRef> for Entity {
    fn from(s: SymbolRef) -> Self {
        Self::Symbol(s)
    }
}

impl From<i64> for Entity {
    fn from(n: i64) -> Self {
        Self::int(n)
    }
}

impl From<bool> for Entity {
    fn from(b: bool) -> Self {
        Self::boolean(b)
    }
}

impl From<&str> for Entity {
    fn from(s: &str) -> Self {
        Self::str(s)
    }
}
