//! This module contains the built-in set representations.
//!
//! The stores deliberately differ in their element bounds and performance
//! profiles: [`hashed::HashedSet`] wants [`std::hash::Hash`] and gives
//! expected constant-time membership, [`ordered::OrderedSet`] wants
//! [`std::cmp::Ord`] and folds in ascending order, while
//! [`linear::LinearSet`] asks for nothing beyond equality and scans. All
//! three implement the same capability surface, so any pair of them can be
//! combined by the generic algorithms.

pub mod hashed;
pub mod linear;
pub mod ordered;
