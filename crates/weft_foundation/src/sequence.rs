//! Immutable entity sequences with structural sharing.
//!
//! A thin wrapper around the `im` crate's persistent vector. Sequences are
//! never mutated in place: every operation returns a new sequence sharing
//! structure with the original.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::iter::FromIterator;

use crate::entity::Entity;

/// An ordered, immutable sequence of entities.
///
/// Cloning is O(1). Insertion order is semantically significant for every
/// algorithm except the canonicalized (setified) ones.
#[derive(Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Seq(im::Vector<Entity>);

impl Seq {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self(im::Vector::new())
    }

    /// Creates a one-element sequence.
    #[must_use]
    pub fn unit(entity: Entity) -> Self {
        Self(im::Vector::unit(entity))
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the sequence is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Gets an element by index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Entity> {
        self.0.get(index)
    }

    /// Returns the first element.
    #[must_use]
    pub fn first(&self) -> Option<&Entity> {
        self.0.front()
    }

    /// Returns the last element.
    #[must_use]
    pub fn last(&self) -> Option<&Entity> {
        self.0.back()
    }

    /// Returns a new sequence with the entity appended.
    #[must_use]
    pub fn push_back(&self, entity: Entity) -> Self {
        let mut new = self.0.clone();
        new.push_back(entity);
        Self(new)
    }

    /// Returns the concatenation of this sequence and another.
    #[must_use]
    pub fn concat(&self, other: &Self) -> Self {
        let mut new = self.0.clone();
        new.append(other.0.clone());
        Self(new)
    }

    /// Splits at `index`, returning the prefix `[0, index)` and the suffix
    /// `[index, len)`.
    #[must_use]
    pub fn split_at(&self, index: usize) -> (Self, Self) {
        let (left, right) = self.0.clone().split_at(index);
        (Self(left), Self(right))
    }

    /// Returns the suffix starting at `index` (empty if past the end).
    #[must_use]
    pub fn skip(&self, index: usize) -> Self {
        if index >= self.len() {
            return Self::new();
        }
        Self(self.0.clone().split_at(index).1)
    }

    /// Returns the prefix of at most `count` elements.
    #[must_use]
    pub fn take(&self, count: usize) -> Self {
        if count >= self.len() {
            return self.clone();
        }
        Self(self.0.clone().split_at(count).0)
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> im::vector::Iter<'_, Entity> {
        self.0.iter()
    }
}

impl fmt::Debug for Seq {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl PartialEq for Seq {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl Eq for Seq {}

impl Hash for Seq {
    fn hash<H: Hasher>(&self, state: &mut H) {
        for item in self.iter() {
            item.hash(state);
        }
    }
}

impl FromIterator<Entity> for Seq {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        Self(im::Vector::from_iter(iter))
    }
}

impl IntoIterator for Seq {
    type Item = Entity;
    type IntoIter = im::vector::ConsumingIter<Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Seq {
    type Item = &'a Entity;
    type IntoIter = im::vector::Iter<'a, Entity>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
