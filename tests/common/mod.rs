//! This module contains common utilities for simplifying the writing of
//! integration tests for this library.

#![cfg(test)]

use set_dispatch::{
    store::{hashed::HashedSet, linear::LinearSet, ordered::OrderedSet},
    SetValue,
};

/// Builds a set value over the hash-backed store from `elements`.
#[allow(unused)] // It is actually
pub fn hashed(elements: &[i32]) -> SetValue<i32> {
    SetValue::new(HashedSet::from(elements))
}

/// Builds a set value over the tree-backed store from `elements`.
#[allow(unused)] // It is actually
pub fn ordered(elements: &[i32]) -> SetValue<i32> {
    SetValue::new(OrderedSet::from(elements))
}

/// Builds a set value over the vector-backed store from `elements`.
#[allow(unused)] // It is actually
pub fn linear(elements: &[i32]) -> SetValue<i32> {
    SetValue::new(LinearSet::from(elements))
}

/// Builds one set value per built-in representation, each containing
/// `elements`.
#[allow(unused)] // It is actually
pub fn all_representations(elements: &[i32]) -> Vec<SetValue<i32>> {
    vec![hashed(elements), ordered(elements), linear(elements)]
}

/// Gets the elements of `value` in ascending order, making values of
/// unordered representations comparable.
#[allow(unused)] // It is actually
pub fn sorted_elements(value: &SetValue<i32>) -> Vec<i32> {
    let mut elements = value.to_vec();
    elements.sort_unstable();
    elements
}
