//! This module contains the generic fallback algorithms for the binary set
//! operations.
//!
//! Each algorithm is expressed purely in terms of the capability surface
//! ([`crate::repr::SetRepr`]): membership, insertion, removal,
//! empty-of-same-representation construction, and the short-circuiting fold.
//! That restriction is the essential polymorphism: any pair of
//! representations can be combined without either needing to know the other's
//! internals, and no algorithm in this module special-cases a representation.
//!
//! The fold direction of each algorithm is chosen so that the result carries
//! the representation identity of the *left* operand, and (for
//! [`difference`]) so that the left operand is reused as the accumulator
//! rather than rebuilt from scratch.
//!
//! All of the algorithms are referentially transparent. The accumulator
//! construction is the only mutation, and it never aliases an operand.

use crate::{
    fold::FoldStep,
    repr::{BoxedRepr, Element, SetRepr},
};

/// Computes the union of `left` and `right`: the set of elements that are in
/// either operand.
///
/// Folds over `right`, inserting each of its elements into an accumulator
/// that starts as `left`. The result has `left`'s representation identity.
///
/// # Complexity
///
/// `O(|right|)` insertions into `left`'s representation; `O(|left| +
/// |right|)` overall given cheap insertion.
#[must_use]
pub fn union<T: Element>(left: BoxedRepr<T>, right: &dyn SetRepr<T>) -> BoxedRepr<T> {
    right.fold(left, |acc, value| {
        FoldStep::Continue(acc.insert(value.clone()))
    })
}

/// Computes the intersection of `left` and `right`: the set of elements that
/// are in both operands.
///
/// Folds over `left`, inserting into a fresh empty set of `left`'s
/// representation every element that is also a member of `right`. The result
/// has `left`'s representation identity; this fallback is the one place the
/// dispatch layer constructs a set, and it does so only through
/// [`SetRepr::empty_like`].
///
/// # Complexity
///
/// One membership test in `right` per element of `left`; `O(|left|)` given
/// cheap membership.
#[must_use]
pub fn intersection<T: Element>(left: &dyn SetRepr<T>, right: &dyn SetRepr<T>) -> BoxedRepr<T> {
    left.fold(left.empty_like(), |acc, value| {
        if right.contains(value) {
            FoldStep::Continue(acc.insert(value.clone()))
        } else {
            FoldStep::Continue(acc)
        }
    })
}

/// Computes the difference of `left` and `right`: the set of elements of
/// `left` that are not in `right`.
///
/// Folds over `right`, removing each of its elements from an accumulator
/// that starts as `left` (removing a non-member is a no-op). Starting from
/// `left` and removing avoids enumerating `left` at all, which matters when
/// `right` is small.
///
/// # Complexity
///
/// `O(|right|)` removals from `left`'s representation.
#[must_use]
pub fn difference<T: Element>(left: BoxedRepr<T>, right: &dyn SetRepr<T>) -> BoxedRepr<T> {
    right.fold(left, |acc, value| FoldStep::Continue(acc.remove(value)))
}

/// Checks whether `left` and `right` contain exactly the same elements,
/// irrespective of representation.
///
/// A cardinality mismatch is an immediate `false`. With equal cardinalities,
/// equality reduces to a one-directional subset check: every element of
/// `left` being in `right` forces every element of `right` to be in `left`
/// too. The early size exit is an optimization, not a correctness
/// requirement.
#[must_use]
pub fn equal<T: Element>(left: &dyn SetRepr<T>, right: &dyn SetRepr<T>) -> bool {
    left.len() == right.len() && subset(left, right)
}

/// Checks whether every element of `left` is a member of `right`.
///
/// Short-circuiting fold over `left`: the first element that is not in
/// `right` halts the traversal with `false`; a completed traversal means
/// `true`.
#[must_use]
pub fn subset<T: Element>(left: &dyn SetRepr<T>, right: &dyn SetRepr<T>) -> bool {
    left.fold(true, |_, value| {
        if right.contains(value) {
            FoldStep::Continue(true)
        } else {
            FoldStep::Halt(false)
        }
    })
}

/// Checks whether `left` and `right` have no element in common.
///
/// Short-circuiting fold over `right`: the first element that is a member of
/// `left` halts the traversal with `false`; a completed traversal means
/// `true`.
#[must_use]
pub fn disjoint<T: Element>(left: &dyn SetRepr<T>, right: &dyn SetRepr<T>) -> bool {
    right.fold(true, |_, value| {
        if left.contains(value) {
            FoldStep::Halt(false)
        } else {
            FoldStep::Continue(true)
        }
    })
}
