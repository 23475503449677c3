//! Capability trait for externally convertible entities.

use std::{fmt, sync::Arc};

use super::{Group, RawValue};

/// An entity that knows how to export itself to plain raw values.
///
/// Implementors expose any subset of three capabilities: exporting to a
/// grouping, exporting to a single scalar, and a textual form. Every method
/// defaults to `None`, so a type only implements what it supports.
///
/// When a value is coerced in a grouping context (building a [`Map`] or a
/// [`CollectionValue`]) the grouping export is used. Scalar contexts use the
/// scalar export, and string contexts fall back from the textual form to the
/// scalar export.
///
/// [`Map`]: crate::map::Map
/// [`CollectionValue`]: crate::value::CollectionValue
///
/// # Examples
///
/// ```
/// use tessella::raw::{Convertible, Group, RawValue};
///
/// #[derive(Debug)]
/// struct User {
///     name: String,
/// }
///
/// impl Convertible for User {
///     fn to_group(&self) -> Option<Group> {
///         Some(Group::record([("name", self.name.as_str())]))
///     }
/// }
///
/// let value = RawValue::object(User { name: "John".into() });
/// assert_eq!(value.exported_group().unwrap().get_name("name").unwrap(), "John");
/// ```
pub trait Convertible: fmt::Debug + Send + Sync {
    /// Exports this entity to a plain grouping
    fn to_group(&self) -> Option<Group> {
        None
    }

    /// Exports this entity to a single scalar raw value
    fn to_scalar(&self) -> Option<RawValue> {
        None
    }

    /// Returns the textual form of this entity
    fn to_text(&self) -> Option<String> {
        None
    }
}

/// Shared, immutable handle to a [`Convertible`] entity.
///
/// Cloning the handle shares the entity. Two handles are equal only if they
/// point at the same entity.
#[derive(Clone)]
pub struct Object(Arc<dyn Convertible>);

impl Object {
    /// Wraps an entity in a new handle
    pub fn new(entity: impl Convertible + 'static) -> Self {
        Object(Arc::new(entity))
    }

    /// Returns true if both handles point at the same entity
    pub fn ptr_eq(&self, other: &Object) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    /// Returns the shared entity
    pub fn entity(&self) -> &dyn Convertible {
        self.0.as_ref()
    }
}

impl Convertible for Object {
    fn to_group(&self) -> Option<Group> {
        self.0.to_group()
    }

    fn to_scalar(&self) -> Option<RawValue> {
        self.0.to_scalar()
    }

    fn to_text(&self) -> Option<String> {
        self.0.to_text()
    }
}

impl fmt::Debug for Object {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Object").field(&self.0).finish()
    }
}

impl From<Arc<dyn Convertible>> for Object {
    fn from(entity: Arc<dyn Convertible>) -> Self {
        Object(entity)
    }
}
