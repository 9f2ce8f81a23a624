//! This module contains the definition of a set representation that is backed
//! by a plain vector.

use crate::{
    fold::FoldControl,
    repr::{BoxedRepr, Element, NativeResult, ReprId, SetRepr},
};

/// A set representation backed by a [`Vec`].
///
/// Every operation is a linear scan, but in exchange the element type needs
/// nothing beyond [`Element`] itself. This makes `LinearSet` the
/// representation of last resort for types that are neither hashable nor
/// ordered, and a deliberately naive counterpart for exercising the generic
/// algorithms against the cleverer stores.
///
/// Element order within the vector is unspecified.
#[derive(Clone, Debug)]
pub struct LinearSet<T>
where
    T: Element,
{
    /// The elements of the set. Contains no duplicates.
    elements: Vec<T>,
}

impl<T> LinearSet<T>
where
    T: Element,
{
    /// Creates a new, empty, `LinearSet`.
    #[must_use]
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
        }
    }

    /// Creates a new, empty, `LinearSet` that is guaranteed to be able to
    /// store at least `capacity` elements before needing to reallocate.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            elements: Vec::with_capacity(capacity),
        }
    }

    /// An iterator visiting all elements in arbitrary order. The iterator
    /// element type is `&'a T`.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.elements.iter()
    }
}

impl<T> SetRepr<T> for LinearSet<T>
where
    T: Element,
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
        if !self.elements.contains(&value) {
            self.elements.push(value);
        }

        self
    }

    fn remove(mut self: Box<Self>, value: &T) -> BoxedRepr<T> {
        if let Some(index) = self.elements.iter().position(|e| e == value) {
            self.elements.swap_remove(index);
        }

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

    fn to_vec(&self) -> Vec<T> {
        self.elements.clone()
    }

    fn native_union(mut self: Box<Self>, other: &dyn SetRepr<T>) -> NativeResult<T> {
        match other.downcast_ref::<Self>() {
            Some(other) => {
                for value in &other.elements {
                    if !self.elements.contains(value) {
                        self.elements.push(value.clone());
                    }
                }

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
        other.downcast_ref::<Self>().map(|other| self == other)
    }

    fn native_subset(&self, other: &dyn SetRepr<T>) -> Option<bool> {
        other.downcast_ref::<Self>().map(|other| {
            self.elements
                .iter()
                .all(|value| other.elements.contains(value))
        })
    }

    fn native_disjoint(&self, other: &dyn SetRepr<T>) -> Option<bool> {
        other.downcast_ref::<Self>().map(|other| {
            !self
                .elements
                .iter()
                .any(|value| other.elements.contains(value))
        })
    }
}

/// Equality of `LinearSet`s is set equality, not vector equality, and so is
/// insensitive to the order in which the backing vectors hold their elements.
impl<T> PartialEq for LinearSet<T>
where
    T: Element,
{
    fn eq(&self, other: &Self) -> bool {
        self.elements.len() == other.elements.len()
            && self
                .elements
                .iter()
                .all(|value| other.elements.contains(value))
    }
}

impl<T> Eq for LinearSet<T> where T: Element {}

impl<T> Default for LinearSet<T>
where
    T: Element,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<T> FromIterator<T> for LinearSet<T>
where
    T: Element,
{
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut elements: Vec<T> = Vec::new();
        for value in iter {
            if !elements.contains(&value) {
                elements.push(value);
            }
        }

        Self { elements }
    }
}

impl<T> From<Vec<T>> for LinearSet<T>
where
    T: Element,
{
    fn from(value: Vec<T>) -> Self {
        value.into_iter().collect()
    }
}

impl<T> From<&[T]> for LinearSet<T>
where
    T: Element,
{
    fn from(value: &[T]) -> Self {
        value.iter().cloned().collect()
    }
}
