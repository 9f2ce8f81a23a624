//! This module contains the registry that admits type-erased values into the
//! dispatch layer.
//!
//! Inside the library everything is statically typed, so handing a
//! [`SetValue`] an operand of an unknown representation is impossible by
//! construction. The boundary where that guarantee does not hold is dynamic
//! ingestion: values arriving as [`Box<dyn Any>`] from plugin interfaces,
//! interpreters or other erased sources. The [`Registry`] is the gatekeeper
//! for that boundary. It maps the [`TypeId`] of each admitted representation
//! to a caster that re-types the value, and resolution of a payload whose
//! type was never registered is the one place the library reports
//! [`Error::UnsupportedRepresentation`].

use std::{
    any::{Any, TypeId},
    collections::HashMap,
    hash::Hash,
};

use crate::{
    error::{Error, Result},
    repr::{BoxedRepr, Element, ReprId, SetRepr},
    store::{hashed::HashedSet, linear::LinearSet, ordered::OrderedSet},
    value::SetValue,
};

/// The type of functions that re-type an erased payload into a boxed
/// representation, handing the payload back on a type mismatch.
type Caster<T> = fn(Box<dyn Any>) -> std::result::Result<BoxedRepr<T>, Box<dyn Any>>;

/// A registration record for a single representation.
#[derive(Clone, Debug)]
struct Entry<T>
where
    T: Element,
{
    /// The human-readable name of the representation.
    name: &'static str,

    /// The caster that re-types erased payloads of this representation.
    cast: Caster<T>,
}

/// A registry of the set representations that may enter the dispatch layer
/// from type-erased sources.
///
/// A registry is specific to one element type `T`. The [`Default`] registry
/// admits the three built-in stores; libraries defining their own
/// representations add them with [`Registry::register`].
#[derive(Clone, Debug)]
pub struct Registry<T>
where
    T: Element,
{
    /// The registered representations, keyed by their concrete type.
    entries: HashMap<TypeId, Entry<T>>,
}

impl<T> Registry<T>
where
    T: Element,
{
    /// Creates a new registry with no representations admitted.
    #[must_use]
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Admits the representation `R` into the registry, making erased values
    /// of that type resolvable.
    ///
    /// Registering a representation that is already admitted is a no-op.
    pub fn register<R>(&mut self) -> &mut Self
    where
        R: SetRepr<T>,
    {
        self.entries.entry(TypeId::of::<R>()).or_insert_with(|| Entry {
            name: ReprId::of::<R>().name(),
            cast: cast_repr::<T, R>,
        });

        self
    }

    /// Resolves the type-erased `value` into a [`SetValue`] if its payload is
    /// a registered representation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnsupportedRepresentation`] if the payload's type was
    /// never registered.
    pub fn resolve(&self, value: Box<dyn Any>) -> Result<SetValue<T>> {
        // The id of the payload, not of the box around it.
        let value_type = value.as_ref().type_id();

        let entry = self
            .entries
            .get(&value_type)
            .ok_or(Error::UnsupportedRepresentation { value_type })?;

        (entry.cast)(value)
            .map(SetValue::from_repr)
            .map_err(|_| Error::UnsupportedRepresentation { value_type })
    }

    /// Checks whether the representation `R` is admitted by the registry.
    #[must_use]
    pub fn is_registered<R>(&self) -> bool
    where
        R: SetRepr<T>,
    {
        self.entries.contains_key(&TypeId::of::<R>())
    }

    /// Checks whether the representation identified by `id` is admitted by
    /// the registry.
    #[must_use]
    pub fn contains(&self, id: ReprId) -> bool {
        self.entries.contains_key(&id.type_id())
    }

    /// An iterator visiting the names of all admitted representations in
    /// arbitrary order.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.values().map(|entry| entry.name)
    }

    /// Gets the number of representations admitted by the registry.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks whether the registry admits no representations at all.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The default registry admits the three built-in stores, which is also why
/// it asks for more of `T` than the registry itself does.
impl<T> Default for Registry<T>
where
    T: Element + Hash + Ord,
{
    fn default() -> Self {
        let mut registry = Self::new();
        registry
            .register::<HashedSet<T>>()
            .register::<OrderedSet<T>>()
            .register::<LinearSet<T>>();

        registry
    }
}

/// Re-types the erased `value` as the concrete representation `R`, re-boxing
/// it as a trait object on success and handing it back on a mismatch.
fn cast_repr<T, R>(value: Box<dyn Any>) -> std::result::Result<BoxedRepr<T>, Box<dyn Any>>
where
    T: Element,
    R: SetRepr<T>,
{
    match value.downcast::<R>() {
        Ok(repr) => Ok(repr),
        Err(value) => Err(value),
    }
}
