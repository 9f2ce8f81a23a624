//! This module contains the [`SetRepr`] trait, the capability surface that
//! every concrete set representation must expose, together with the
//! [`ReprId`] representation identity used for dispatch.
//!
//! The trait is deliberately minimal: membership, insertion, removal, size,
//! empty-of-same-representation construction, and a short-circuiting fold.
//! The generic algorithms in [`crate::algorithm`] are written against this
//! surface alone, which is what lets them combine operands of unrelated
//! concrete types without either knowing the other's internals.

use std::{
    any::{type_name, TypeId},
    fmt::{Debug, Display, Formatter},
};

use derivative::Derivative;
use downcast_rs::{impl_downcast, Downcast};

use crate::fold::{FoldControl, FoldStep};

/// A marker trait for the values a set representation can hold.
///
/// The core requires only strict structural equality of elements: no ordering
/// and no hashing. Individual representations are free to demand more of
/// their element type (the hash-backed store requires [`std::hash::Hash`],
/// the ordered store requires [`Ord`]), but the dispatch layer and the
/// generic algorithms never do.
pub trait Element
where
    Self: Clone + Debug + Eq + 'static,
{
}

impl<T> Element for T where T: Clone + Debug + Eq + 'static {}

/// The identity of a concrete set representation.
///
/// The identity is a property of the container itself, not of the elements it
/// holds: every value produced by one representation carries the same
/// identity for its whole lifetime, and binary operations use it to decide
/// between the representation-native fast path and the generic fallback.
///
/// Two identities are equal exactly when they name the same concrete type;
/// the diagnostic name takes no part in comparisons.
#[derive(Clone, Copy, Debug, Derivative)]
#[derivative(Eq, Hash, PartialEq)]
pub struct ReprId {
    /// The unique identifier of the concrete representation type.
    id: TypeId,

    /// A human-readable name for the representation, for diagnostics only.
    #[derivative(PartialEq = "ignore", Hash = "ignore")]
    name: &'static str,
}

impl ReprId {
    /// Gets the representation identity for the concrete representation `R`.
    #[must_use]
    pub fn of<R: 'static>() -> Self {
        let id = TypeId::of::<R>();
        let name = type_name::<R>();
        Self { id, name }
    }

    /// Gets the diagnostic name of the representation.
    ///
    /// This is the fully-qualified type name of the concrete representation
    /// and is intended for error messages and debugging, not for comparison.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Gets the underlying [`TypeId`] for the representation.
    #[must_use]
    pub fn type_id(&self) -> TypeId {
        self.id
    }
}

impl Display for ReprId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}

/// A set representation that is dynamically dispatched.
pub type BoxedRepr<T> = Box<dyn SetRepr<T>>;

/// The outcome of a representation-native binary transform.
///
/// [`Ok`] carries the result of the native operation. [`Err`] carries the
/// left operand back, unchanged, when the right operand turned out to be a
/// different representation; the caller is then expected to run the generic
/// fallback instead. This mirrors the recovery shape of [`Box::downcast`].
pub type NativeResult<T> = std::result::Result<BoxedRepr<T>, BoxedRepr<T>>;

/// This trait is the capability surface of a concrete set representation. It
/// provides the fixed set of operations the dispatch layer and the generic
/// algorithms require, and is implemented by each representation with no
/// knowledge of any other.
///
/// # Object Safety
///
/// This trait must remain
/// [object safe](https://doc.rust-lang.org/reference/items/traits.html#object-safety)
/// as representations are used behind [`BoxedRepr`] in dynamic dispatch. This
/// is why the fold primitive takes its step function as `&mut dyn FnMut` and
/// why the accumulator-carrying fold lives on the trait object instead (see
/// the `fold` method on `dyn SetRepr`).
///
/// # Self Bounds
///
/// The bounds on `Self` are required for the following reasons:
///
/// - [`Debug`] to provide representations to aid in debugging. It is
///   recommended to use the derive feature for this.
/// - [`Downcast`] allows the native binary operations to recover the concrete
///   type of their right operand, which is how same-representation dispatch
///   is decided without any unchecked tag inspection.
///
/// # Purity
///
/// Every operation is a pure transform: methods that change a set consume it
/// (`self: Box<Self>`) and return the transformed value, so no mutation is
/// ever observable to another holder. Failed native operations hand the
/// consumed operand back unchanged.
///
/// # Implementation Contract
///
/// - [`Self::id`] must return `ReprId::of::<Self>()` and therefore be
///   identical across all instances of one representation.
/// - [`Self::fold_until`] must visit every element exactly once, in an
///   unspecified order, and stop as soon as the step function halts.
/// - The native binary operations must refuse (not panic on, not coerce) a
///   right operand of a different representation.
pub trait SetRepr<T: Element>
where
    Self: Debug + Downcast,
{
    /// Gets the representation identity of this set.
    fn id(&self) -> ReprId;

    /// Gets the number of elements in the set.
    fn len(&self) -> usize;

    /// Checks whether the set contains no elements.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Checks whether `value` is a member of the set.
    ///
    /// # Complexity
    ///
    /// Ideally `O(1)`; the generic algorithms assume membership is cheap and
    /// call it once per element of one operand.
    fn contains(&self, value: &T) -> bool;

    /// Returns the set with `value` inserted.
    ///
    /// Insertion is idempotent: inserting an element that is already present
    /// returns a set with the same elements.
    fn insert(self: Box<Self>, value: T) -> BoxedRepr<T>;

    /// Returns the set with `value` removed.
    ///
    /// Removing an element that is not present is a no-op.
    fn remove(self: Box<Self>, value: &T) -> BoxedRepr<T>;

    /// Creates an empty set of the same representation as this one.
    ///
    /// This is the only way the dispatch layer ever constructs a set: it
    /// needs an accumulator that shares the representation identity of an
    /// operand (the intersection fallback seeds itself this way).
    fn empty_like(&self) -> BoxedRepr<T>;

    /// Clones the set behind a fresh box.
    ///
    /// This exists to give [`Clone`] to the type-erased set value; the
    /// generic algorithms themselves never duplicate an operand.
    fn boxed_clone(&self) -> BoxedRepr<T>;

    /// Visits every element of the set exactly once, in an unspecified
    /// order, stopping early if `step` returns [`FoldControl::Halt`].
    ///
    /// Returns [`FoldControl::Halt`] if the traversal was stopped by the
    /// step function and [`FoldControl::Continue`] if it visited every
    /// element. When an accumulator is needed it either lives in state
    /// captured by `step`, or the accumulator-carrying `fold` on
    /// `dyn SetRepr` can be used instead.
    fn fold_until(&self, step: &mut dyn FnMut(&T) -> FoldControl) -> FoldControl;

    /// Collects the elements of the set into a vector, in an unspecified
    /// order.
    fn to_vec(&self) -> Vec<T> {
        let mut elements = Vec::with_capacity(self.len());
        let _ = self.fold_until(&mut |value| {
            elements.push(value.clone());
            FoldControl::Continue
        });
        elements
    }

    /// Computes the union of this set and `other` using the representation's
    /// own merge, which is assumed to be cheaper than the generic fallback.
    ///
    /// Refuses with `Err(self)` when `other` is a different representation.
    fn native_union(self: Box<Self>, other: &dyn SetRepr<T>) -> NativeResult<T>;

    /// Computes the intersection of this set and `other` natively.
    ///
    /// Refuses with `Err(self)` when `other` is a different representation.
    fn native_intersection(self: Box<Self>, other: &dyn SetRepr<T>) -> NativeResult<T>;

    /// Computes the difference of this set and `other` (the elements of this
    /// set that are not in `other`) natively.
    ///
    /// Refuses with `Err(self)` when `other` is a different representation.
    fn native_difference(self: Box<Self>, other: &dyn SetRepr<T>) -> NativeResult<T>;

    /// Checks natively whether this set and `other` contain the same
    /// elements.
    ///
    /// Returns [`None`] when `other` is a different representation.
    fn native_equal(&self, other: &dyn SetRepr<T>) -> Option<bool>;

    /// Checks natively whether every element of this set is in `other`.
    ///
    /// Returns [`None`] when `other` is a different representation.
    fn native_subset(&self, other: &dyn SetRepr<T>) -> Option<bool>;

    /// Checks natively whether this set and `other` have no element in
    /// common.
    ///
    /// Returns [`None`] when `other` is a different representation.
    fn native_disjoint(&self, other: &dyn SetRepr<T>) -> Option<bool>;
}

impl_downcast!(SetRepr<T> where T: Element);

/// Additional operations that are derived from the capability surface and
/// hence available on any representation, but that cannot live on the trait
/// itself without breaking object safety.
impl<T: Element> dyn SetRepr<T> {
    /// Folds over the elements of the set with an explicit accumulator,
    /// stopping early when `step` returns [`FoldStep::Halt`].
    ///
    /// Elements are visited exactly once, in an unspecified order. The
    /// accumulator carried by a halting step becomes the final result, making
    /// early termination a normal value-producing path rather than an error.
    #[allow(clippy::missing_panics_doc)] // Cannot actually panic
    pub fn fold<A>(&self, init: A, mut step: impl FnMut(A, &T) -> FoldStep<A>) -> A {
        let mut acc = Some(init);
        let _ = self.fold_until(&mut |value| {
            let current = acc.take().expect("Fold accumulator was not restored");
            let next = step(current, value);
            let control = next.control();
            acc = Some(next.into_inner());
            control
        });

        acc.expect("Fold accumulator was not restored")
    }
}
