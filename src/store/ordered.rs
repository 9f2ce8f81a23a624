//! This module contains the definition of a set representation that is backed
//! by a balanced search tree.

use std::collections::BTreeSet;

use crate::{
    fold::FoldControl,
    repr::{BoxedRepr, Element, NativeResult, ReprId, SetRepr},
};

/// A set representation backed by a [`BTreeSet`].
///
/// Membership, insertion and removal are all `O(log n)`, and folds yield
/// elements in ascending order. Requires [`Ord`] of the element type, which
/// also makes this the representation of choice when a deterministic
/// traversal order matters.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct OrderedSet<T>
where
    T: Element + Ord,
{
    /// The elements of the set.
    elements: BTreeSet<T>,
}

impl<T> OrderedSet<T>
where
    T: Element + Ord,
{
    /// Creates a new, empty, `OrderedSet`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: BTreeSet::new(),
        }
    }

    /// An iterator visiting all elements in ascending order. The iterator
    /// element type is `&'a T`.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }
}

impl<T> SetRepr<T> for OrderedSet<T>
where
    T: Element + Ord,
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

    /// Folds in ascending element order.
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

impl<T> Default for OrderedSet<T>
where
    T: Element + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for OrderedSet<T>
where
    T: Element + Ord,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().collect(),
        }
    }
}

impl<T> From<BTreeSet<T>> for OrderedSet<T>
where
    T: Element + Ord,
{
    fn from(elements: BTreeSet<T>) -> Self {
        Self { elements }
    }
}

impl<T> From<&[T]> for OrderedSet<T>
where
    T: Element + Ord,
{
    fn from(value: &[T]) -> Self {
        value.iter().cloned().collect()
    }
}
