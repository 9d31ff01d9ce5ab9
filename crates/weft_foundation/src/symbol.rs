//! References to named declarations.

use std::fmt;
use std::sync::Arc;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A reference to a named declaration.
///
/// Identity is declaration identity: two references are the same symbol
/// iff their module path and name both match.
#[derive(Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SymbolRef {
    /// Module path of the declaration, e.g. `core.math`.
    pub module: Arc<str>,
    /// Declared name, e.g. `sqrt`.
    pub name: Arc<str>,
}

impl SymbolRef {
    /// Creates a symbol reference.
    #[must_use]
    pub fn new(module: impl Into<Arc<str>>, name: impl Into<Arc<str>>) -> Self {
        Self {
            module: module.into(),
            name: name.into(),
        }
    }

    /// Returns the fully qualified name, `module.name`.
    #[must_use]
    pub fn qualified(&self) -> String {
        if self.module.is_empty() {
            self.name.to_string()
        } else {
            format!("{}.{}", self.module, self.name)
        }
    }
}

impl fmt::Debug for SymbolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SymbolRef({})", self.qualified())
    }
}

impl fmt::Display for SymbolRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.qualified())
    }
}
