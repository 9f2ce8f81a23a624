//! This module contains the polymorphic set value and the dispatch between
//! native and generic implementations of the binary operations.
//!
//! # Dispatch
//!
//! Every binary operation is dispatched in two stages. The left operand's
//! representation is first _offered_ the operation through its `native_*`
//! entry point. A representation accepts when it recognises the right operand
//! as one of its own (giving it free rein to exploit its internals), and
//! refuses otherwise by handing the left operand back unchanged. A refusal is
//! not an error: the dispatcher completes the operation with the
//! corresponding generic algorithm from [`crate::algorithm`], which needs
//! nothing but the capability surface. Dispatch is therefore total over
//! arbitrary pairs of representations, and adding a new representation never
//! requires touching this module.
//!
//! # Representation Identity
//!
//! The result of [`SetValue::union`], [`SetValue::intersection`] and
//! [`SetValue::difference`] always carries the representation of the _left_
//! operand, on both the native and the generic path. Predicates are
//! representation-blind: two values are equal exactly when they contain the
//! same elements, however they are stored.

use crate::{
    algorithm,
    fold::FoldStep,
    repr::{BoxedRepr, Element, ReprId, SetRepr},
};

/// A set of `T`s behind an arbitrary representation.
///
/// `SetValue` is the entry point of the dispatch layer. It owns a boxed
/// representation and exposes the set operations with the native-or-generic
/// routing described in the [module docs](self).
///
/// The transforming operations take `self` by value, in keeping with the
/// capability surface they are built on; [`Clone`] the value first when the
/// operand needs to outlive the operation.
#[derive(Debug)]
pub struct SetValue<T>
where
    T: Element,
{
    /// The representation holding the elements.
    repr: BoxedRepr<T>,
}

impl<T> SetValue<T>
where
    T: Element,
{
    /// Wraps the provided representation `repr` into a set value.
    #[must_use]
    pub fn new(repr: impl SetRepr<T>) -> Self {
        Self {
            repr: Box::new(repr),
        }
    }

    /// Wraps the provided boxed representation `repr` into a set value.
    #[must_use]
    pub fn from_repr(repr: BoxedRepr<T>) -> Self {
        Self { repr }
    }

    /// Computes the union of `self` and `other`, preserving `self`'s
    /// representation.
    #[must_use]
    pub fn union(self, other: &Self) -> Self {
        let repr = match self.repr.native_union(other.as_repr()) {
            Ok(repr) => repr,
            Err(repr) => algorithm::union(repr, other.as_repr()),
        };

        Self { repr }
    }

    /// Computes the intersection of `self` and `other`, preserving `self`'s
    /// representation.
    #[must_use]
    pub fn intersection(self, other: &Self) -> Self {
        let repr = match self.repr.native_intersection(other.as_repr()) {
            Ok(repr) => repr,
            Err(repr) => algorithm::intersection(repr.as_ref(), other.as_repr()),
        };

        Self { repr }
    }

    /// Computes the difference of `self` and `other` (the elements of `self`
    /// not in `other`), preserving `self`'s representation.
    #[must_use]
    pub fn difference(self, other: &Self) -> Self {
        let repr = match self.repr.native_difference(other.as_repr()) {
            Ok(repr) => repr,
            Err(repr) => algorithm::difference(repr, other.as_repr()),
        };

        Self { repr }
    }

    /// Checks whether every element of `self` is a member of `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.repr
            .native_subset(other.as_repr())
            .unwrap_or_else(|| algorithm::subset(self.as_repr(), other.as_repr()))
    }

    /// Checks whether `self` and `other` have no element in common.
    #[must_use]
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.repr
            .native_disjoint(other.as_repr())
            .unwrap_or_else(|| algorithm::disjoint(self.as_repr(), other.as_repr()))
    }

    /// Adds `value` to the set, returning the updated set.
    #[must_use]
    pub fn insert(self, value: T) -> Self {
        Self {
            repr: self.repr.insert(value),
        }
    }

    /// Removes `value` from the set, returning the updated set. Removing a
    /// value that is not a member is a no-op.
    #[must_use]
    pub fn remove(self, value: &T) -> Self {
        Self {
            repr: self.repr.remove(value),
        }
    }

    /// Checks whether `value` is a member of the set.
    #[must_use]
    pub fn contains(&self, value: &T) -> bool {
        self.repr.contains(value)
    }

    /// Gets the number of elements in the set.
    #[must_use]
    pub fn len(&self) -> usize {
        self.repr.len()
    }

    /// Checks whether the set contains no elements.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.repr.is_empty()
    }

    /// Creates an empty set value with the same representation as `self`.
    #[must_use]
    pub fn empty_like(&self) -> Self {
        Self {
            repr: self.repr.empty_like(),
        }
    }

    /// Folds `step` over the elements of the set, threading the accumulator
    /// from `init` and stopping early as soon as `step` returns
    /// [`FoldStep::Halt`].
    ///
    /// The element visit order is whatever the underlying representation
    /// provides.
    pub fn fold<A>(&self, init: A, step: impl FnMut(A, &T) -> FoldStep<A>) -> A {
        self.repr.fold(init, step)
    }

    /// Gets the elements of the set as a vector, in the representation's
    /// traversal order.
    #[must_use]
    pub fn to_vec(&self) -> Vec<T> {
        self.repr.to_vec()
    }

    /// Gets the identity of the representation currently holding the
    /// elements.
    #[must_use]
    pub fn repr_id(&self) -> ReprId {
        self.repr.id()
    }

    /// Gets the human-readable name of the representation currently holding
    /// the elements.
    #[must_use]
    pub fn repr_name(&self) -> &'static str {
        self.repr.id().name()
    }

    /// Borrows the underlying representation as a trait object, for example
    /// to downcast it to a concrete store.
    #[must_use]
    pub fn as_repr(&self) -> &dyn SetRepr<T> {
        self.repr.as_ref()
    }

    /// Unwraps the set value into its underlying boxed representation.
    #[must_use]
    pub fn into_repr(self) -> BoxedRepr<T> {
        self.repr
    }
}

impl<T> Clone for SetValue<T>
where
    T: Element,
{
    fn clone(&self) -> Self {
        Self {
            repr: self.repr.boxed_clone(),
        }
    }
}

/// Equality of set values is extensional: two values are equal exactly when
/// they contain the same elements, irrespective of their representations.
impl<T> PartialEq for SetValue<T>
where
    T: Element,
{
    fn eq(&self, other: &Self) -> bool {
        self.repr
            .native_equal(other.as_repr())
            .unwrap_or_else(|| algorithm::equal(self.as_repr(), other.as_repr()))
    }
}

impl<T> Eq for SetValue<T> where T: Element {}

#[cfg(test)]
mod test {
    use itertools::Itertools;

    use crate::{
        fold::FoldStep,
        store::{hashed::HashedSet, linear::LinearSet, ordered::OrderedSet},
        value::SetValue,
    };

    #[test]
    fn union_routes_to_native_for_same_representation() {
        let left = util::counting(&[1, 2]);
        let right = util::counting(&[2, 3]);

        let result = left.union(&right);

        assert_eq!(util::native_calls(&result), 1);
        assert_eq!(result.to_vec().into_iter().sorted().collect_vec(), vec![
            1, 2, 3
        ]);
    }

    #[test]
    fn union_falls_back_for_mixed_representations() {
        let left = util::counting(&[1, 2]);
        let right = SetValue::new(HashedSet::from([2, 3].as_slice()));

        let result = left.union(&right);

        // The generic fallback builds the result through the capability
        // surface alone, so the native entry points are never invoked.
        assert_eq!(util::native_calls(&result), 0);
        assert_eq!(result.to_vec().into_iter().sorted().collect_vec(), vec![
            1, 2, 3
        ]);
    }

    #[test]
    fn equality_routes_to_native_for_same_representation() {
        let left = util::counting(&[1, 2]);
        let right = util::counting(&[2, 1]);

        assert_eq!(left, right);
        assert_eq!(util::native_calls(&left), 1);
    }

    #[test]
    fn binary_results_keep_left_representation() {
        let hashed = SetValue::new(HashedSet::from([1, 2].as_slice()));
        let ordered = SetValue::new(OrderedSet::from([2, 3].as_slice()));

        let union = hashed.clone().union(&ordered);
        let intersection = hashed.clone().intersection(&ordered);
        let difference = hashed.clone().difference(&ordered);

        assert_eq!(union.repr_id(), hashed.repr_id());
        assert_eq!(intersection.repr_id(), hashed.repr_id());
        assert_eq!(difference.repr_id(), hashed.repr_id());
    }

    #[test]
    fn equality_is_representation_blind() {
        let hashed = SetValue::new(HashedSet::from([1, 2, 3].as_slice()));
        let ordered = SetValue::new(OrderedSet::from([3, 2, 1].as_slice()));
        let linear = SetValue::new(LinearSet::from([2, 3, 1].as_slice()));

        assert_eq!(hashed, ordered);
        assert_eq!(ordered, linear);
        assert_eq!(hashed, linear);
    }

    #[test]
    fn predicates_answer_across_representations() {
        let small = SetValue::new(LinearSet::from([2, 3].as_slice()));
        let large = SetValue::new(OrderedSet::from([1, 2, 3, 4].as_slice()));
        let other = SetValue::new(HashedSet::from([5, 6].as_slice()));

        assert!(small.is_subset(&large));
        assert!(!large.is_subset(&small));
        assert!(small.is_disjoint(&other));
        assert!(!small.is_disjoint(&large));
    }

    #[test]
    fn insert_and_remove_delegate_to_representation() {
        let value = SetValue::new(OrderedSet::<i32>::new()).insert(2).insert(1);

        assert_eq!(value.len(), 2);
        assert!(value.contains(&1));

        let value = value.remove(&1).remove(&7);

        assert_eq!(value.to_vec(), vec![2]);
    }

    #[test]
    fn clone_detaches_the_representation() {
        let original = SetValue::new(LinearSet::from([1, 2].as_slice()));
        let snapshot = original.clone();

        let grown = original.insert(3);

        assert_eq!(snapshot.len(), 2);
        assert_eq!(grown.len(), 3);
    }

    #[test]
    fn empty_like_preserves_representation() {
        let value = SetValue::new(HashedSet::from([1, 2].as_slice()));
        let empty = value.empty_like();

        assert!(empty.is_empty());
        assert_eq!(empty.repr_id(), value.repr_id());
    }

    #[test]
    fn fold_threads_the_accumulator() {
        let value = SetValue::new(OrderedSet::from([1, 2, 3, 4].as_slice()));

        let sum = value.fold(0, |acc, elem| FoldStep::Continue(acc + elem));

        assert_eq!(sum, 10);
    }

    #[test]
    fn fold_halts_early() {
        let value = SetValue::new(OrderedSet::from([1, 2, 3, 4].as_slice()));

        let visited = value.fold(0, |acc, _| {
            if acc == 2 {
                FoldStep::Halt(acc)
            } else {
                FoldStep::Continue(acc + 1)
            }
        });

        assert_eq!(visited, 2);
    }

    #[test]
    fn repr_accessors_round_trip() {
        let value = SetValue::new(LinearSet::from([1].as_slice()));
        let id = value.repr_id();

        let repr = value.into_repr();
        assert!(repr.downcast_ref::<LinearSet<i32>>().is_some());

        let value = SetValue::from_repr(repr);
        assert_eq!(value.repr_id(), id);
        assert!(value.repr_name().contains("LinearSet"));
    }

    /// Utilities for observing which dispatch path an operation took.
    mod util {
        use std::cell::Cell;

        use crate::{
            fold::FoldControl,
            repr::{BoxedRepr, NativeResult, ReprId, SetRepr},
            value::SetValue,
        };

        /// A vector-backed store that counts how often its native entry
        /// points have fired, so that tests can tell the native path from
        /// the generic fallback.
        #[derive(Clone, Debug)]
        pub struct CountingSet {
            elements:     Vec<i32>,
            native_calls: Cell<usize>,
        }

        impl CountingSet {
            fn record(&self) {
                self.native_calls.set(self.native_calls.get() + 1);
            }
        }

        impl SetRepr<i32> for CountingSet {
            fn id(&self) -> ReprId {
                ReprId::of::<Self>()
            }

            fn len(&self) -> usize {
                self.elements.len()
            }

            fn contains(&self, value: &i32) -> bool {
                self.elements.contains(value)
            }

            fn insert(mut self: Box<Self>, value: i32) -> BoxedRepr<i32> {
                if !self.elements.contains(&value) {
                    self.elements.push(value);
                }

                self
            }

            fn remove(mut self: Box<Self>, value: &i32) -> BoxedRepr<i32> {
                self.elements.retain(|e| e != value);
                self
            }

            fn empty_like(&self) -> BoxedRepr<i32> {
                Box::new(CountingSet {
                    elements:     Vec::new(),
                    native_calls: Cell::new(0),
                })
            }

            fn boxed_clone(&self) -> BoxedRepr<i32> {
                Box::new(self.clone())
            }

            fn fold_until(&self, step: &mut dyn FnMut(&i32) -> FoldControl) -> FoldControl {
                for value in &self.elements {
                    if step(value).is_halt() {
                        return FoldControl::Halt;
                    }
                }

                FoldControl::Continue
            }

            fn native_union(mut self: Box<Self>, other: &dyn SetRepr<i32>) -> NativeResult<i32> {
                match other.downcast_ref::<Self>() {
                    Some(other) => {
                        self.record();
                        for value in &other.elements {
                            if !self.elements.contains(value) {
                                self.elements.push(*value);
                            }
                        }

                        Ok(self)
                    }
                    None => Err(self),
                }
            }

            fn native_intersection(
                mut self: Box<Self>,
                other: &dyn SetRepr<i32>,
            ) -> NativeResult<i32> {
                match other.downcast_ref::<Self>() {
                    Some(other) => {
                        self.record();
                        self.elements.retain(|value| other.elements.contains(value));
                        Ok(self)
                    }
                    None => Err(self),
                }
            }

            fn native_difference(
                mut self: Box<Self>,
                other: &dyn SetRepr<i32>,
            ) -> NativeResult<i32> {
                match other.downcast_ref::<Self>() {
                    Some(other) => {
                        self.record();
                        self.elements.retain(|value| !other.elements.contains(value));
                        Ok(self)
                    }
                    None => Err(self),
                }
            }

            fn native_equal(&self, other: &dyn SetRepr<i32>) -> Option<bool> {
                other.downcast_ref::<Self>().map(|other| {
                    self.record();
                    self.elements.len() == other.elements.len()
                        && self.elements.iter().all(|v| other.elements.contains(v))
                })
            }

            fn native_subset(&self, other: &dyn SetRepr<i32>) -> Option<bool> {
                other.downcast_ref::<Self>().map(|other| {
                    self.record();
                    self.elements.iter().all(|v| other.elements.contains(v))
                })
            }

            fn native_disjoint(&self, other: &dyn SetRepr<i32>) -> Option<bool> {
                other.downcast_ref::<Self>().map(|other| {
                    self.record();
                    !self.elements.iter().any(|v| other.elements.contains(v))
                })
            }
        }

        /// Builds a counting set value from `elements`.
        pub fn counting(elements: &[i32]) -> SetValue<i32> {
            SetValue::new(CountingSet {
                elements:     elements.to_vec(),
                native_calls: Cell::new(0),
            })
        }

        /// Reads the native call count out of a counting set value.
        pub fn native_calls(value: &SetValue<i32>) -> usize {
            value
                .as_repr()
                .downcast_ref::<CountingSet>()
                .map_or(0, |counting| counting.native_calls.get())
        }
    }
}
