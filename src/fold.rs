//! This module contains the control types for the short-circuiting fold that
//! every set representation must provide.
//!
//! Early termination is a deliberate, visible part of the fold contract: the
//! step function returns a typed control value, and the fold primitive stops
//! iterating when it sees a halt. It is a normal termination path (the subset
//! and disjointness checks rely on it), not a general preemption mechanism.
//! There is no timeout or external cancellation signal threaded through these
//! calls.

/// The signal a step function returns to [`crate::repr::SetRepr::fold_until`]
/// to either continue the traversal or stop it early.
///
/// The fold primitive also returns this type: [`FoldControl::Halt`] if the
/// traversal was stopped by the step function, and [`FoldControl::Continue`]
/// if every element was visited.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FoldControl {
    /// Keep visiting elements.
    Continue,

    /// Stop the traversal without visiting any further element.
    Halt,
}

impl FoldControl {
    /// Checks whether this signal stops the traversal.
    #[must_use]
    pub fn is_halt(self) -> bool {
        matches!(self, FoldControl::Halt)
    }
}

/// The accumulator-carrying control value returned by the step function of
/// the accumulator fold (see `fold` on `dyn SetRepr`).
///
/// Both variants carry the accumulator so that a halted fold still produces a
/// final value; the variant only decides whether the traversal keeps going.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FoldStep<A> {
    /// Continue the fold with the provided accumulator.
    Continue(A),

    /// Stop the fold, making the provided accumulator the final result.
    Halt(A),
}

impl<A> FoldStep<A> {
    /// Extracts the accumulator, discarding the control signal.
    #[must_use]
    pub fn into_inner(self) -> A {
        match self {
            FoldStep::Continue(acc) | FoldStep::Halt(acc) => acc,
        }
    }

    /// Gets the control signal carried by this step, without the accumulator.
    #[must_use]
    pub fn control(&self) -> FoldControl {
        match self {
            FoldStep::Continue(_) => FoldControl::Continue,
            FoldStep::Halt(_) => FoldControl::Halt,
        }
    }

    /// Checks whether this step stops the fold.
    #[must_use]
    pub fn is_halt(&self) -> bool {
        self.control().is_halt()
    }
}
