//! Persistent, insertion-ordered, string-keyed map.
//!
//! [`Map`] is the central container of the library. It associates unique
//! string keys with [`RawValue`]s and never changes after construction:
//! every mutator returns a new map and leaves the receiver as it was.
//!
//! # Core Operations
//!
//! - **Reads**: `get()`, `get_or()`, `get_value()`, `has()`, `has_one_of()`, `has_all()`
//! - **Mutators**: `set()`, `remove()`, `pick()`, `rename()`, `merge()`, `map_keys()`
//! - **Filters**: `filter()`, `filter_by_values()`, `filter_by_keys()`
//! - **Export**: `keys()`, `values()`, `to_array()`
//!
//! # Examples
//!
//! ```
//! use tessella::map::Map;
//!
//! let empty = Map::new();
//! let user = empty.set("name", "John").set("age", 30);
//!
//! assert!(empty.is_empty());
//! assert_eq!(user.len(), 2);
//! assert_eq!(*user.get("name")?, "John");
//!
//! let renamed = user.rename("name", "first_name")?;
//! assert!(renamed.has("first_name"));
//! assert!(user.has("name"));
//! # Ok::<(), tessella::Error>(())
//! ```
//!
//! # Defaults
//!
//! Reading an absent key is an error unless a usable default is supplied.
//! A null default only counts as usable when explicitly allowed:
//!
//! ```
//! use tessella::{map::Map, raw::RawValue};
//!
//! let map = Map::new();
//! assert_eq!(map.get_or("missing", "fallback", false)?, "fallback");
//! assert_eq!(map.get_or("missing", RawValue::Null, true)?, RawValue::Null);
//! assert!(map.get_or("missing", RawValue::Null, false).is_err());
//! # Ok::<(), tessella::Error>(())
//! ```

use std::{
    collections::{HashMap, HashSet},
    sync::Arc,
};

use crate::{
    Result,
    collection::StringCollection,
    raw::{Convertible, Group, Key, RawValue},
    value::Value,
};

pub mod errors;

pub use errors::MapError;

/// Ordered entries plus a key index; shared between map instances.
#[derive(Debug, Default)]
struct Entries {
    order: Vec<(String, RawValue)>,
    index: HashMap<String, usize>,
}

impl Entries {
    /// Builds entries from pairs; a repeated key replaces the earlier value in place.
    fn from_pairs(pairs: impl IntoIterator<Item = (String, RawValue)>) -> Self {
        let mut entries = Entries::default();
        for (key, value) in pairs {
            entries.upsert(key, value);
        }
        entries
    }

    fn upsert(&mut self, key: String, value: RawValue) {
        match self.index.get(&key) {
            Some(&position) => self.order[position].1 = value,
            None => {
                self.index.insert(key.clone(), self.order.len());
                self.order.push((key, value));
            }
        }
    }

    fn get(&self, key: &str) -> Option<&RawValue> {
        self.index.get(key).map(|&position| &self.order[position].1)
    }
}

/// An immutable, insertion-ordered association from unique string keys to raw values.
///
/// Cloning a `Map` is cheap: instances share their entries.
#[derive(Debug, Clone, Default)]
pub struct Map {
    entries: Arc<Entries>,
}

impl Map {
    /// Creates a new empty map
    pub fn new() -> Self {
        Self::default()
    }

    fn from_entries(entries: Entries) -> Self {
        Self {
            entries: Arc::new(entries),
        }
    }

    /// Creates a map from a record-shaped group.
    ///
    /// Fails if any key of the group is not a string.
    pub fn from_group(group: Group) -> Result<Self> {
        let mut pairs = Vec::with_capacity(group.len());
        for (key, value) in group {
            match key {
                Key::Name(name) => pairs.push((name, value)),
                Key::Index(index) => {
                    tracing::debug!(key = index, "Rejected non-string map key");
                    return Err(MapError::NonStringKey {
                        key: index.to_string(),
                    }
                    .into());
                }
            }
        }
        Ok(Self::from_entries(Entries::from_pairs(pairs)))
    }

    /// Creates a map from any raw input.
    ///
    /// Accepts null (empty map), a group with string keys, another map, or
    /// an object exporting such a group.
    pub fn try_from_raw(raw: RawValue) -> Result<Self> {
        match raw {
            RawValue::Null => Ok(Self::new()),
            RawValue::Map(map) => Ok(map),
            RawValue::Group(group) => Self::from_group(group),
            RawValue::Object(object) => match object.to_group() {
                Some(group) => Self::from_group(group),
                None => Err(MapError::InvalidInput {
                    actual: "object".to_string(),
                }
                .into()),
            },
            other => Err(MapError::InvalidInput {
                actual: other.type_name().to_string(),
            }
            .into()),
        }
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.order.len()
    }

    /// Alias of [`Map::len`]
    pub fn count(&self) -> usize {
        self.len()
    }

    /// Returns true if the map has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.order.is_empty()
    }

    /// Returns true if both maps share the same underlying storage
    pub fn ptr_eq(&self, other: &Map) -> bool {
        Arc::ptr_eq(&self.entries, &other.entries)
    }

    /// Iterates over entries in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RawValue)> {
        self.entries
            .order
            .iter()
            .map(|(key, value)| (key.as_str(), value))
    }

    /// Gets the value stored under `key`.
    ///
    /// Fails with a not-found error if the key is absent.
    pub fn get(&self, key: &str) -> Result<&RawValue> {
        self.entries.get(key).ok_or_else(|| {
            MapError::KeyNotFound {
                key: key.to_string(),
            }
            .into()
        })
    }

    /// Gets the value stored under `key`, falling back to `default`.
    ///
    /// If the key is absent, a non-null `default` is returned. A null
    /// `default` is returned only when `allow_null_default` is set; otherwise
    /// the read fails with a not-found error.
    pub fn get_or(
        &self,
        key: &str,
        default: impl Into<RawValue>,
        allow_null_default: bool,
    ) -> Result<RawValue> {
        if let Some(value) = self.entries.get(key) {
            return Ok(value.clone());
        }

        let default = default.into();
        if !default.is_null() || allow_null_default {
            return Ok(default);
        }

        Err(MapError::KeyNotFound {
            key: key.to_string(),
        }
        .into())
    }

    /// Gets the value stored under `key` wrapped in a [`Value`]
    pub fn get_value(&self, key: &str) -> Result<Value> {
        self.get(key).map(|raw| Value::new(raw.clone()))
    }

    /// Same rules as [`Map::get_or`], wrapped in a [`Value`]
    pub fn get_value_or(
        &self,
        key: &str,
        default: impl Into<RawValue>,
        allow_null_default: bool,
    ) -> Result<Value> {
        self.get_or(key, default, allow_null_default).map(Value::new)
    }

    /// Returns true if the map contains `key`
    pub fn has(&self, key: &str) -> bool {
        self.entries.index.contains_key(key)
    }

    /// Returns true if the map contains at least one of `keys`
    pub fn has_one_of(&self, keys: &[&str]) -> bool {
        keys.iter().any(|key| self.has(key))
    }

    /// Returns true if the map contains every one of `keys`.
    ///
    /// Fails if `keys` is empty.
    pub fn has_all(&self, keys: &[&str]) -> Result<bool> {
        if keys.is_empty() {
            return Err(MapError::MissingKeys {
                operation: "has_all",
            }
            .into());
        }
        Ok(keys.iter().all(|key| self.has(key)))
    }

    /// Returns a map with `key` set to `value`.
    ///
    /// An existing key keeps its position; a new key is appended. Setting a
    /// value identical to the stored one returns a map sharing this map's storage.
    pub fn set(&self, key: impl Into<String>, value: impl Into<RawValue>) -> Map {
        let key = key.into();
        let value = value.into();
        if self.entries.get(&key) == Some(&value) {
            return self.clone();
        }

        let mut entries = Entries::from_pairs(self.entries.order.iter().cloned());
        entries.upsert(key, value);
        Self::from_entries(entries)
    }

    /// Returns a map without the given keys; absent keys are ignored
    pub fn remove(&self, keys: &[&str]) -> Map {
        self.filter_by_keys(|key| !keys.contains(&key))
    }

    /// Returns a map holding only the given keys, in this map's order.
    ///
    /// Fails listing every requested key that is absent.
    pub fn pick(&self, keys: &[&str]) -> Result<Map> {
        let missing = StringCollection::new(keys.iter().copied())
            .filter(|key| !self.has(key))
            .unique();
        if !missing.is_empty() {
            tracing::debug!(missing = %missing.join(", "), "Pick requested absent keys");
            return Err(MapError::KeysNotFound {
                keys: missing.into_values(),
            }
            .into());
        }

        let wanted: HashSet<&str> = keys.iter().copied().collect();
        Ok(self.filter_by_keys(|key| wanted.contains(key)))
    }

    /// Returns a map where `key` is renamed to `new_name`.
    ///
    /// Fails if `key` is absent or `new_name` already exists. The renamed
    /// entry moves to the end of the map.
    pub fn rename(&self, key: &str, new_name: &str) -> Result<Map> {
        let value = self.get(key)?.clone();
        if self.has(new_name) {
            tracing::debug!(key, new_name, "Rename target already exists");
            return Err(MapError::KeyExists {
                key: new_name.to_string(),
            }
            .into());
        }

        Ok(self.remove(&[key]).set(new_name, value))
    }

    /// Returns a map with the entries for which `predicate(value, key)` holds
    pub fn filter<F>(&self, predicate: F) -> Map
    where
        F: Fn(&RawValue, &str) -> bool,
    {
        Self::from_entries(Entries::from_pairs(
            self.entries
                .order
                .iter()
                .filter(|(key, value)| predicate(value, key.as_str()))
                .cloned(),
        ))
    }

    /// Returns a map with the entries whose value satisfies `predicate`
    pub fn filter_by_values<F>(&self, predicate: F) -> Map
    where
        F: Fn(&RawValue) -> bool,
    {
        self.filter(|value, _| predicate(value))
    }

    /// Returns a map with the entries whose key satisfies `predicate`
    pub fn filter_by_keys<F>(&self, predicate: F) -> Map
    where
        F: Fn(&str) -> bool,
    {
        self.filter(|_, key| predicate(key))
    }

    /// Returns this map overlaid by `other`; `other` wins on collisions
    pub fn merge(&self, other: &Map) -> Map {
        let mut entries = Entries::from_pairs(self.entries.order.iter().cloned());
        for (key, value) in other.entries.order.iter().cloned() {
            entries.upsert(key, value);
        }
        Self::from_entries(entries)
    }

    /// Returns true if both maps hold the same keys with identical values.
    ///
    /// Key order is not significant; values compare strictly (see [`RawValue`]).
    pub fn equals(&self, other: &Map) -> bool {
        self.len() == other.len()
            && self
                .iter()
                .all(|(key, value)| other.entries.get(key) == Some(value))
    }

    /// Returns the keys in order
    pub fn keys(&self) -> StringCollection {
        StringCollection::new(self.entries.order.iter().map(|(key, _)| key.clone()))
    }

    /// Returns the values in order
    pub fn values(&self) -> Vec<RawValue> {
        self.entries
            .order
            .iter()
            .map(|(_, value)| value.clone())
            .collect()
    }

    /// Returns a map with every key replaced by `transform(key)`.
    ///
    /// Fails if two keys map to the same new key.
    pub fn map_keys<F>(&self, transform: F) -> Result<Map>
    where
        F: Fn(&str) -> String,
    {
        let mut entries = Entries::default();
        for (key, value) in self.entries.order.iter() {
            let mapped = transform(key.as_str());
            if entries.index.contains_key(&mapped) {
                tracing::debug!(key = %key, mapped = %mapped, "Key transform collision");
                return Err(MapError::DuplicateKey { key: mapped }.into());
            }
            entries.upsert(mapped, value.clone());
        }
        Ok(Self::from_entries(entries))
    }

    /// Exports the map as a plain group.
    ///
    /// Entries that export to a grouping (nested maps, convertible objects,
    /// typed sequences) are expanded recursively. Scalar-only exporters are
    /// kept as they are.
    pub fn to_array(&self) -> Group {
        self.iter()
            .map(|(key, value)| {
                let exported = match value {
                    RawValue::Map(nested) => RawValue::Group(nested.to_array()),
                    RawValue::Object(object) => object
                        .to_group()
                        .map(RawValue::Group)
                        .unwrap_or_else(|| value.clone()),
                    other => other.clone(),
                };
                (key, exported)
            })
            .collect()
    }
}

impl PartialEq for Map {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other)
    }
}

impl TryFrom<RawValue> for Map {
    type Error = crate::Error;

    fn try_from(raw: RawValue) -> Result<Self> {
        Self::try_from_raw(raw)
    }
}

impl TryFrom<Group> for Map {
    type Error = crate::Error;

    fn try_from(group: Group) -> Result<Self> {
        Self::from_group(group)
    }
}

impl<K, V> FromIterator<(K, V)> for Map
where
    K: Into<String>,
    V: Into<RawValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        Self::from_entries(Entries::from_pairs(
            iter.into_iter()
                .map(|(key, value)| (key.into(), value.into())),
        ))
    }
}

impl<'a> IntoIterator for &'a Map {
    type Item = (&'a str, &'a RawValue);
    type IntoIter = Box<dyn Iterator<Item = (&'a str, &'a RawValue)> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}
