//! This module contains the definition of a set representation that is backed
//! by a hash table.

use std::{collections::HashSet, hash::Hash};

use crate::{
    fold::FoldControl,
    repr::{BoxedRepr, Element, NativeResult, ReprId, SetRepr},
};

/// A set representation backed by a [`HashSet`].
///
/// This is the general-purpose representation: membership, insertion and
/// removal are all expected `O(1)`, paid for by requiring [`Hash`] of the
/// element type and by yielding elements in an arbitrary order during folds.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct HashedSet<T>
where
    T: Element + Hash,
{
    /// The elements of the set.
    elements: HashSet<T>,
}

impl<T> HashedSet<T>
where
    T: Element + Hash,
{
    /// Creates a new, empty, `HashedSet`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: HashSet::new(),
        }
    }

    /// Creates a new, empty, `HashedSet` that is guaranteed to be able to
    /// store at least `capacity` elements before needing to reallocate.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: HashSet::with_capacity(capacity),
        }
    }

    /// An iterator visiting all elements in arbitrary order. The iterator
    /// element type is `&'a T`.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }
}

impl<T> SetRepr<T> for HashedSet<T>
where
    T: Element + Hash,
{
    fn id(&self) -> ReprId {
        ReprId::of::<Self>()
    }

    fn len(&self) -> usize {
        self.elements.len()
    }

    fn contains(&self, value: &T) -> bool {
        self.elements.contains(value)
    }

    fn insert(mut self: Box<Self>, value: T) -> BoxedRepr<T> {
        self.elements.insert(value);
        self
    }

    fn remove(mut self: Box<Self>, value: &T) -> BoxedRepr<T> {
        self.elements.remove(value);
        self
    }

    fn empty_like(&self) -> BoxedRepr<T> {
        Box::new(Self::new())
    }

    fn boxed_clone(&self) -> BoxedRepr<T> {
        Box::new(self.clone())
    }

    fn fold_until(&self, step: &mut dyn FnMut(&T) -> FoldControl) -> FoldControl {
        for value in &self.elements {
            if step(value).is_halt() {
                return FoldControl::Halt;
            }
        }

        FoldControl::Continue
    }

    fn native_union(mut self: Box<Self>, other: &dyn SetRepr<T>) -> NativeResult<T> {
        match other.downcast_ref::<Self>() {
            Some(other) => {
                self.elements.extend(other.elements.iter().cloned());
                Ok(self)
            }
            None => Err(self),
        }
    }

    fn native_intersection(mut self: Box<Self>, other: &dyn SetRepr<T>) -> NativeResult<T> {
        match other.downcast_ref::<Self>() {
            Some(other) => {
                self.elements.retain(|value| other.elements.contains(value));
                Ok(self)
            }
            None => Err(self),
        }
    }

    fn native_difference(mut self: Box<Self>, other: &dyn SetRepr<T>) -> NativeResult<T> {
        match other.downcast_ref::<Self>() {
            Some(other) => {
                self.elements.retain(|value| !other.elements.contains(value));
                Ok(self)
            }
            None => Err(self),
        }
    }

    fn native_equal(&self, other: &dyn SetRepr<T>) -> Option<bool> {
        other
            .downcast_ref::<Self>()
            .map(|other| self.elements == other.elements)
    }

    fn native_subset(&self, other: &dyn SetRepr<T>) -> Option<bool> {
        other
            .downcast_ref::<Self>()
            .map(|other| self.elements.is_subset(&other.elements))
    }

    fn native_disjoint(&self, other: &dyn SetRepr<T>) -> Option<bool> {
        other
            .downcast_ref::<Self>()
            .map(|other| self.elements.is_disjoint(&other.elements))
    }
}

impl<T> Default for HashedSet<T>
where
    T: Element + Hash,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for HashedSet<T>
where
    T: Element + Hash,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> From<HashSet<T>> for HashedSet<T>
where
    T: Element + Hash,
{
    fn from(elements: HashSet<T>) -> Self {
        Self { elements }
    }
}

impl<T> From<&[T]> for HashedSet<T>
where
    T: Element + Hash,
{
    fn from(value: &[T]) -> Self {
        value.iter().cloned().collect()
    }
}
