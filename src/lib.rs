//! This library implements polymorphic dispatch for the classical set
//! operations over interchangeable set representations. Any two sets can be
//! combined regardless of how either stores its elements, results keep the
//! representation of the left operand, and new representations plug in
//! without touching the operations themselves.
//!
//! Note that this library deals in the _dispatch_ of set operations, not in
//! clever set data structures; the built-in stores are deliberately plain.
//!
//! # How it Works
//!
//! From a very high level, an operation on two sets proceeds as follows:
//!
//! 1. Each representation implements the capability surface
//!    ([`repr::SetRepr`]): membership, insertion, removal,
//!    same-representation empty construction, and a short-circuiting fold,
//!    alongside native entry points for the binary operations.
//! 2. A [`SetValue`] wraps a representation and _offers_ each binary
//!    operation to the left operand's native entry point first. The native
//!    implementation accepts when it recognises the right operand as its own
//!    representation, and refuses otherwise by handing the operand back.
//! 3. On refusal the generic algorithms in [`algorithm`] complete the
//!    operation through the capability surface alone, so any pair of
//!    representations interoperates.
//! 4. The transforming operations (union, intersection, difference) produce
//!    results in the left operand's representation on both paths, while the
//!    predicates are representation-blind.
//! 5. Values arriving from type-erased sources are admitted through a
//!    [`registry::Registry`], which is the only point at which
//!    [`error::Error::UnsupportedRepresentation`] is reported.
//!
//! # Basic Usage
//!
//! For the most basic usage of the library, it is sufficient to wrap any of
//! the built-in stores in a `SetValue` and operate on it.
//!
//! ```
//! use set_dispatch::{
//!     store::{hashed::HashedSet, ordered::OrderedSet},
//!     FoldStep,
//!     SetValue,
//! };
//!
//! let evens = SetValue::new(HashedSet::from([0, 2, 4].as_slice()));
//! let small = SetValue::new(OrderedSet::from([0, 1, 2].as_slice()));
//!
//! // Mixed representations are routed through the generic fallback.
//! let shared = evens.clone().intersection(&small);
//!
//! assert_eq!(shared, SetValue::new(HashedSet::from([0, 2].as_slice())));
//! assert_eq!(shared.repr_id(), evens.repr_id());
//!
//! let sum = shared.fold(0, |acc, n| FoldStep::Continue(acc + n));
//! assert_eq!(sum, 2);
//! ```

#![warn(clippy::all, clippy::cargo, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // Allows for better API naming

pub mod algorithm;
pub mod error;
pub mod fold;
pub mod registry;
pub mod repr;
pub mod store;
pub mod value;

// Re-exports to provide the library interface.
pub use error::{Error, Result};
pub use fold::{FoldControl, FoldStep};
pub use registry::Registry;
pub use repr::{BoxedRepr, Element, NativeResult, ReprId, SetRepr};
pub use value::SetValue;
