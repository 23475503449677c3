//! Grouping views with uniformly typed projections.

use crate::{
    Error, Result,
    collection::{IntegerCollection, NumberCollection, ObjectCollection, StringCollection},
    raw::{Convertible, Group, Key, RawValue},
    value::{StringValue, ValueError, number::coerce_number},
};

/// An immutable view over a [`Group`].
///
/// Projections succeed only if every element fits the target type; the
/// first element that does not fit fails the whole projection.
#[derive(Debug, Clone, PartialEq)]
pub struct CollectionValue {
    data: Group,
}

impl CollectionValue {
    pub fn new(data: Group) -> Self {
        Self { data }
    }

    /// Returns the value stored under `key`
    pub fn get(&self, key: impl Into<Key>) -> Option<&RawValue> {
        self.data.get(&key.into())
    }

    pub fn keys(&self) -> Vec<Key> {
        self.data.keys().cloned().collect()
    }

    pub fn values(&self) -> Vec<RawValue> {
        self.data.values().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Key, &RawValue)> {
        self.data.iter()
    }

    /// Returns the underlying grouping with convertible elements expanded one level
    pub fn to_array(&self) -> Group {
        self.data.to_plain()
    }

    /// Projects every element to text; scalars and textual objects qualify
    pub fn strings(&self) -> Result<StringCollection> {
        let strings = self.project("strings", |value| {
            StringValue::new(value.clone()).map(StringValue::into_string)
        })?;
        Ok(StringCollection::new(strings))
    }

    /// Projects every element to a float; numeric text is parsed
    pub fn numbers(&self) -> Result<NumberCollection> {
        let numbers = self.project("numbers", |value| Ok(coerce_number(value)?.float()))?;
        Ok(NumberCollection::new(numbers))
    }

    /// Projects every element to an integer; fractional values fail
    pub fn integers(&self) -> Result<IntegerCollection> {
        let integers = self.project("integers", |value| coerce_number(value)?.int_exact())?;
        Ok(IntegerCollection::new(integers))
    }

    /// Requires every element to be a map or a convertible object
    pub fn objects(&self) -> Result<ObjectCollection> {
        let objects = self.project("objects", |value| {
            if value.is_object_like() {
                Ok(value.clone())
            } else {
                Err(ValueError::mismatch("object", value).into())
            }
        })?;
        Ok(ObjectCollection::new(objects))
    }

    fn project<T, F>(&self, target: &'static str, convert: F) -> Result<Vec<T>>
    where
        F: Fn(&RawValue) -> Result<T>,
    {
        self.data
            .iter()
            .map(|(key, value)| {
                convert(value).map_err(|err| {
                    tracing::debug!(target_type = target, key = %key, error = %err, "Projection failed");
                    Error::from(ValueError::ProjectionFailed {
                        target,
                        key: key.to_string(),
                        reason: err.to_string(),
                    })
                })
            })
            .collect()
    }
}

impl Convertible for CollectionValue {
    fn to_group(&self) -> Option<Group> {
        Some(self.data.clone())
    }
}

impl From<CollectionValue> for RawValue {
    fn from(value: CollectionValue) -> Self {
        RawValue::object(value)
    }
}

impl From<Group> for CollectionValue {
    fn from(data: Group) -> Self {
        Self::new(data)
    }
}
