//! The dynamic value model for loosely structured input.
//!
//! Everything a [`Map`] stores and everything a [`Value`](crate::value::Value)
//! coerces is a [`RawValue`]. Raw values are either scalars, ordered keyed
//! groups (the list/record shape), nested maps, or handles to external
//! entities implementing [`Convertible`].
//!
//! # Equality
//!
//! Equality between raw values is strict: the variants must match exactly
//! (`Int(1)` is not equal to `Float(1.0)`), groups compare entry-by-entry in
//! order, and objects compare by identity.
//!
//! ```
//! # use tessella::raw::RawValue;
//! assert_eq!(RawValue::from(1), RawValue::Int(1));
//! assert_ne!(RawValue::Int(1), RawValue::Float(1.0));
//! assert!(RawValue::from("hello") == "hello");
//! ```

use std::fmt;

use chrono::{DateTime, Utc};

use crate::map::Map;

mod convert;
mod group;
#[cfg(feature = "json")]
mod json;

pub use convert::{Convertible, Object};
pub use group::{Group, Key};

/// A single untyped input value.
#[derive(Debug, Clone, Default)]
pub enum RawValue {
    /// Null / absent value
    #[default]
    Null,
    /// Boolean scalar
    Bool(bool),
    /// Integer scalar
    Int(i64),
    /// Floating point scalar
    Float(f64),
    /// Text scalar
    Text(String),
    /// Date-like scalar
    DateTime(DateTime<Utc>),
    /// Ordered keyed group (list or record)
    Group(Group),
    /// Nested persistent map
    Map(Map),
    /// Shared handle to an externally convertible entity
    Object(Object),
}

impl RawValue {
    /// Wraps a [`Convertible`] entity in a new shared handle.
    pub fn object(entity: impl Convertible + 'static) -> Self {
        RawValue::Object(Object::new(entity))
    }

    /// Returns true for null
    pub fn is_null(&self) -> bool {
        matches!(self, RawValue::Null)
    }

    /// Returns true for bool, int, float, text and date-time values
    pub fn is_scalar(&self) -> bool {
        matches!(
            self,
            RawValue::Bool(_)
                | RawValue::Int(_)
                | RawValue::Float(_)
                | RawValue::Text(_)
                | RawValue::DateTime(_)
        )
    }

    /// Returns true for int and float values
    pub fn is_numeric(&self) -> bool {
        matches!(self, RawValue::Int(_) | RawValue::Float(_))
    }

    /// Returns true for structured entities (maps and objects)
    pub fn is_object_like(&self) -> bool {
        matches!(self, RawValue::Map(_) | RawValue::Object(_))
    }

    /// Returns the type name as a string
    pub fn type_name(&self) -> &'static str {
        match self {
            RawValue::Null => "null",
            RawValue::Bool(_) => "bool",
            RawValue::Int(_) => "int",
            RawValue::Float(_) => "float",
            RawValue::Text(_) => "text",
            RawValue::DateTime(_) => "datetime",
            RawValue::Group(_) => "group",
            RawValue::Map(_) => "map",
            RawValue::Object(_) => "object",
        }
    }

    /// Attempts to view as a boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            RawValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Attempts to view as an integer
    pub fn as_int(&self) -> Option<i64> {
        match self {
            RawValue::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to view as a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            RawValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Attempts to view as text
    pub fn as_text(&self) -> Option<&str> {
        match self {
            RawValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Attempts to view as a group
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            RawValue::Group(group) => Some(group),
            _ => None,
        }
    }

    /// Attempts to view as a nested map
    pub fn as_map(&self) -> Option<&Map> {
        match self {
            RawValue::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the grouping form of this value, if it has one.
    ///
    /// Groups are returned as-is, nested maps and grouping exporters are
    /// exported. Objects that can export both a grouping and a scalar yield
    /// the grouping.
    pub fn exported_group(&self) -> Option<Group> {
        match self {
            RawValue::Group(group) => Some(group.clone()),
            RawValue::Map(map) => Some(map.to_array()),
            RawValue::Object(object) => object.to_group(),
            _ => None,
        }
    }

    /// Returns the scalar form of this value, if it has one.
    ///
    /// Scalars are returned as-is; objects are asked for their scalar export,
    /// which must itself be a scalar.
    pub fn exported_scalar(&self) -> Option<RawValue> {
        match self {
            RawValue::Object(object) => object.to_scalar().filter(RawValue::is_scalar),
            value if value.is_scalar() => Some(value.clone()),
            _ => None,
        }
    }

    /// Expands one level of convertible content into plain values.
    ///
    /// Maps and grouping exporters become groups, scalar exporters become their
    /// scalar. Everything else is cloned unchanged.
    pub fn to_plain(&self) -> RawValue {
        match self {
            RawValue::Map(map) => RawValue::Group(map.to_array()),
            RawValue::Object(object) => match object.to_group() {
                Some(group) => RawValue::Group(group),
                None => object
                    .to_scalar()
                    .unwrap_or_else(|| RawValue::Object(object.clone())),
            },
            other => other.clone(),
        }
    }
}

impl PartialEq for RawValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (RawValue::Null, RawValue::Null) => true,
            (RawValue::Bool(a), RawValue::Bool(b)) => a == b,
            (RawValue::Int(a), RawValue::Int(b)) => a == b,
            (RawValue::Float(a), RawValue::Float(b)) => a == b,
            (RawValue::Text(a), RawValue::Text(b)) => a == b,
            (RawValue::DateTime(a), RawValue::DateTime(b)) => a == b,
            (RawValue::Group(a), RawValue::Group(b)) => a == b,
            (RawValue::Map(a), RawValue::Map(b)) => a.equals(b),
            (RawValue::Object(a), RawValue::Object(b)) => a.ptr_eq(b),
            _ => false,
        }
    }
}

impl fmt::Display for RawValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawValue::Null => write!(f, "null"),
            RawValue::Bool(b) => write!(f, "{b}"),
            RawValue::Int(n) => write!(f, "{n}"),
            RawValue::Float(n) => write!(f, "{n}"),
            RawValue::Text(s) => write!(f, "{s}"),
            RawValue::DateTime(dt) => write!(f, "{}", dt.to_rfc3339()),
            RawValue::Group(group) => write!(f, "{group}"),
            RawValue::Map(map) => write!(f, "{}", RawValue::Group(map.to_array())),
            RawValue::Object(object) => write!(f, "{object:?}"),
        }
    }
}

impl From<bool> for RawValue {
    fn from(value: bool) -> Self {
        RawValue::Bool(value)
    }
}

impl From<i64> for RawValue {
    fn from(value: i64) -> Self {
        RawValue::Int(value)
    }
}

impl From<i32> for RawValue {
    fn from(value: i32) -> Self {
        RawValue::Int(value as i64)
    }
}

impl From<u32> for RawValue {
    fn from(value: u32) -> Self {
        RawValue::Int(value as i64)
    }
}

impl From<f64> for RawValue {
    fn from(value: f64) -> Self {
        RawValue::Float(value)
    }
}

impl From<f32> for RawValue {
    fn from(value: f32) -> Self {
        RawValue::Float(value as f64)
    }
}

impl From<String> for RawValue {
    fn from(value: String) -> Self {
        RawValue::Text(value)
    }
}

impl From<&str> for RawValue {
    fn from(value: &str) -> Self {
        RawValue::Text(value.to_string())
    }
}

impl From<DateTime<Utc>> for RawValue {
    fn from(value: DateTime<Utc>) -> Self {
        RawValue::DateTime(value)
    }
}

impl From<Group> for RawValue {
    fn from(value: Group) -> Self {
        RawValue::Group(value)
    }
}

impl From<Map> for RawValue {
    fn from(value: Map) -> Self {
        RawValue::Map(value)
    }
}

impl From<Object> for RawValue {
    fn from(value: Object) -> Self {
        RawValue::Object(value)
    }
}

impl<T: Into<RawValue>> From<Option<T>> for RawValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(RawValue::Null, Into::into)
    }
}

impl<T: Into<RawValue>> From<Vec<T>> for RawValue {
    fn from(values: Vec<T>) -> Self {
        RawValue::Group(Group::list(values))
    }
}

impl PartialEq<str> for RawValue {
    fn eq(&self, other: &str) -> bool {
        match self {
            RawValue::Text(s) => s == other,
            _ => false,
        }
    }
}

impl PartialEq<&str> for RawValue {
    fn eq(&self, other: &&str) -> bool {
        self == *other
    }
}

impl PartialEq<i64> for RawValue {
    fn eq(&self, other: &i64) -> bool {
        match self {
            RawValue::Int(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<i32> for RawValue {
    fn eq(&self, other: &i32) -> bool {
        match self {
            RawValue::Int(n) => *n == *other as i64,
            _ => false,
        }
    }
}

impl PartialEq<f64> for RawValue {
    fn eq(&self, other: &f64) -> bool {
        match self {
            RawValue::Float(n) => n == other,
            _ => false,
        }
    }
}

impl PartialEq<bool> for RawValue {
    fn eq(&self, other: &bool) -> bool {
        match self {
            RawValue::Bool(b) => b == other,
            _ => false,
        }
    }
}
