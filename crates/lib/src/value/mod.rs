//! Routing wrappers that coerce a raw value into a typed view.
//!
//! A [`Value`] holds one [`RawValue`] and converts it on demand into the view
//! the caller needs. Each conversion validates the shape and fails with a
//! [`ValueError`] if the raw value does not fit:
//!
//! - [`Value::to_map`] for groupings and maps
//! - [`Value::to_collection_value`] for groupings, optionally lifting a scalar
//! - [`Value::to_scalar_value`], [`Value::to_string_value`] and
//!   [`Value::to_number_value`] for single values
//!
//! ```
//! use tessella::{Value, raw::Group};
//!
//! let tags = Value::new(Group::list(["red", "green"]));
//! assert_eq!(tags.to_collection_value(false)?.strings()?.join(","), "red,green");
//!
//! let single = Value::new("blue");
//! assert_eq!(single.to_collection_value(true)?.len(), 1);
//! assert!(single.to_collection_value(false).is_err());
//!
//! assert_eq!(Value::new("12").int()?, 12);
//! assert!(Value::new("yes").bool(true)?);
//! # Ok::<(), tessella::Error>(())
//! ```

use chrono::{DateTime, Utc};

use crate::{
    Result,
    map::Map,
    raw::{Group, RawValue},
};

mod collection;
pub mod errors;
mod number;
mod scalar;
mod string;

pub use collection::CollectionValue;
pub use errors::ValueError;
pub use number::{Number, NumberValue, RoundingMode};
pub use scalar::{ScalarType, ScalarValue};
pub use string::{DEFAULT_TRIM_CHARS, StringValue};

/// A transient wrapper around one raw value.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Value {
    raw: RawValue,
}

impl Value {
    pub fn new(raw: impl Into<RawValue>) -> Self {
        Self { raw: raw.into() }
    }

    /// Returns the wrapped raw value
    pub fn raw(&self) -> &RawValue {
        &self.raw
    }

    pub fn into_raw(self) -> RawValue {
        self.raw
    }

    /// Converts the value into a [`Map`].
    ///
    /// Groupings, maps and grouping exporters qualify; null and scalars do not.
    pub fn to_map(&self) -> Result<Map> {
        if self.raw.is_null() {
            return Err(ValueError::mismatch("map", &self.raw).into());
        }
        tracing::trace!(kind = self.raw.type_name(), "Routing value to map");
        Map::try_from_raw(self.raw.clone())
    }

    /// Converts the value into a [`CollectionValue`].
    ///
    /// With `cast_scalar`, a bare scalar becomes a single-element collection.
    pub fn to_collection_value(&self, cast_scalar: bool) -> Result<CollectionValue> {
        if cast_scalar && self.raw.is_scalar() {
            tracing::trace!(kind = self.raw.type_name(), "Lifting scalar into collection");
            return Ok(CollectionValue::new(Group::list([self.raw.clone()])));
        }

        match self.raw.exported_group() {
            Some(group) => Ok(CollectionValue::new(group)),
            None => Err(ValueError::mismatch("collection", &self.raw).into()),
        }
    }

    pub fn to_scalar_value(&self) -> Result<ScalarValue> {
        ScalarValue::new(self.raw.clone())
    }

    pub fn to_string_value(&self) -> Result<StringValue> {
        StringValue::new(self.raw.clone())
    }

    pub fn to_number_value(&self) -> Result<NumberValue> {
        NumberValue::new(self.raw.clone())
    }

    /// Shortcut for `to_scalar_value()?.string()`
    pub fn string(&self) -> Result<StringValue> {
        self.to_scalar_value()?.string()
    }

    /// Shortcut for `to_scalar_value()?.int()`
    pub fn int(&self) -> Result<i64> {
        self.to_scalar_value()?.int()
    }

    /// Shortcut for `to_scalar_value()?.float()`
    pub fn float(&self) -> Result<f64> {
        self.to_scalar_value()?.float()
    }

    /// Shortcut for `to_scalar_value()?.bool(parse_string)`
    pub fn bool(&self, parse_string: bool) -> Result<bool> {
        self.to_scalar_value()?.bool(parse_string)
    }

    /// Shortcut for `to_scalar_value()?.date_time()`
    pub fn date_time(&self) -> Result<DateTime<Utc>> {
        self.to_scalar_value()?.date_time()
    }
}

impl From<RawValue> for Value {
    fn from(raw: RawValue) -> Self {
        Self { raw }
    }
}
