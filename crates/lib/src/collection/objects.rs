//! Immutable ordered sequence of object-like values.

use crate::raw::{Convertible, Group, RawValue};

/// An immutable, ordered sequence of object-like raw values (maps and objects).
///
/// Built by [`CollectionValue::objects`](crate::value::CollectionValue::objects),
/// which guarantees every element is object-like.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ObjectCollection {
    objects: Vec<RawValue>,
}

impl ObjectCollection {
    pub(crate) fn new(objects: Vec<RawValue>) -> Self {
        Self { objects }
    }

    /// Returns the objects as a slice
    pub fn values(&self) -> &[RawValue] {
        &self.objects
    }

    /// Returns the number of objects
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    /// Returns true if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    /// Iterates over the objects
    pub fn iter(&self) -> impl Iterator<Item = &RawValue> {
        self.objects.iter()
    }
}

impl Convertible for ObjectCollection {
    fn to_group(&self) -> Option<Group> {
        Some(Group::list(self.objects.iter().cloned()))
    }
}

impl From<ObjectCollection> for RawValue {
    fn from(value: ObjectCollection) -> Self {
        RawValue::object(value)
    }
}
