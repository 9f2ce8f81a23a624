//! This module contains the error types for the library.
//!
//! All of the errors implement [`std::error::Error`], and hence can be used
//! with [`anyhow::Error`].
//!
//! The only error the dispatch layer itself can produce is
//! [`Error::UnsupportedRepresentation`]. Errors raised by a representation's
//! own operations are never wrapped or swallowed by the generic algorithms;
//! they surface unchanged. The in-tree representations are infallible, so in
//! practice this error is the entire error surface of the crate.

use std::any::TypeId;

use thiserror::Error;

/// The result type for operations that can fail at the dispatch boundary.
pub type Result<T> = std::result::Result<T, Error>;

/// The interface error type for the library.
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum Error {
    /// The provided value is not a recognized set representation.
    ///
    /// This is raised when a type-erased value handed to
    /// [`crate::registry::Registry::resolve`] is either not a set container
    /// at all, or is a set representation that was never registered. It is
    /// not recoverable locally: correctness requires the caller to supply
    /// recognized set values, so there is nothing to retry.
    #[error("the value of type {value_type:?} is not a registered set representation")]
    UnsupportedRepresentation {
        /// The concrete type of the offending value.
        value_type: TypeId,
    },
}
