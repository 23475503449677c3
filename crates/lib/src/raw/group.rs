//! Ordered keyed groups: the list and record shape of raw input.

use std::{collections::HashMap, fmt};

use super::RawValue;

/// Key of a [`Group`] entry.
///
/// List-shaped groups use integer indices, record-shaped groups use names.
/// A group may mix both.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key {
    Index(i64),
    Name(String),
}

impl Key {
    /// Returns the name if this is a string key
    pub fn as_name(&self) -> Option<&str> {
        match self {
            Key::Name(name) => Some(name),
            Key::Index(_) => None,
        }
    }

    /// Returns true for string keys
    pub fn is_name(&self) -> bool {
        matches!(self, Key::Name(_))
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Index(index) => write!(f, "{index}"),
            Key::Name(name) => write!(f, "{name}"),
        }
    }
}

impl From<&str> for Key {
    fn from(value: &str) -> Self {
        Key::Name(value.to_string())
    }
}

impl From<String> for Key {
    fn from(value: String) -> Self {
        Key::Name(value)
    }
}

impl From<i64> for Key {
    fn from(value: i64) -> Self {
        Key::Index(value)
    }
}

impl From<i32> for Key {
    fn from(value: i32) -> Self {
        Key::Index(value as i64)
    }
}

/// An ordered group of keyed raw values with unique keys.
///
/// Inserting an existing key replaces its value in place; new keys are
/// appended. [`Group::push`] appends under the next free integer index,
/// one past the largest integer key seen so far.
///
/// ```
/// # use tessella::raw::{Group, Key, RawValue};
/// let mut group = Group::list([1, 2]);
/// group.insert("name", "John");
/// group.push(3);
///
/// let keys: Vec<Key> = group.keys().cloned().collect();
/// assert_eq!(keys, vec![Key::Index(0), Key::Index(1), Key::from("name"), Key::Index(2)]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Group {
    entries: Vec<(Key, RawValue)>,
    index: HashMap<Key, usize>,
    next_index: i64,
}

impl Group {
    /// Creates an empty group
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a list-shaped group keyed `0..n`
    pub fn list<I, V>(values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<RawValue>,
    {
        let mut group = Self::new();
        for value in values {
            group.push(value);
        }
        group
    }

    /// Creates a record-shaped group from name/value pairs
    pub fn record<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<RawValue>,
    {
        let mut group = Self::new();
        for (key, value) in pairs {
            group.insert(Key::Name(key.into()), value);
        }
        group
    }

    /// Inserts or replaces the value stored under `key`
    pub fn insert(&mut self, key: impl Into<Key>, value: impl Into<RawValue>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        if let Key::Index(index) = key {
            self.next_index = self.next_index.max(index.saturating_add(1));
        }
        match self.index.get(&key) {
            Some(&position) => self.entries[position].1 = value,
            None => {
                self.index.insert(key.clone(), self.entries.len());
                self.entries.push((key, value));
            }
        }
        self
    }

    /// Appends a value under the next free integer index
    pub fn push(&mut self, value: impl Into<RawValue>) -> &mut Self {
        let index = self.next_index;
        self.insert(Key::Index(index), value)
    }

    /// Gets the value stored under `key`
    pub fn get(&self, key: &Key) -> Option<&RawValue> {
        self.index
            .get(key)
            .map(|&position| &self.entries[position].1)
    }

    /// Gets the value stored under a string key
    pub fn get_name(&self, name: &str) -> Option<&RawValue> {
        self.get(&Key::Name(name.to_string()))
    }

    /// Returns true if the group contains `key`
    pub fn contains_key(&self, key: &Key) -> bool {
        self.index.contains_key(key)
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the group has no entries
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterates over keys in order
    pub fn keys(&self) -> impl Iterator<Item = &Key> {
        self.entries.iter().map(|(key, _)| key)
    }

    /// Iterates over values in order
    pub fn values(&self) -> impl Iterator<Item = &RawValue> {
        self.entries.iter().map(|(_, value)| value)
    }

    /// Iterates over entries in order
    pub fn iter(&self) -> impl Iterator<Item = (&Key, &RawValue)> {
        self.entries.iter().map(|(key, value)| (key, value))
    }

    /// Returns a group with one level of convertible content expanded.
    ///
    /// See [`RawValue::to_plain`].
    pub fn to_plain(&self) -> Group {
        self.iter()
            .map(|(key, value)| (key.clone(), value.to_plain()))
            .collect()
    }
}

impl PartialEq for Group {
    fn eq(&self, other: &Self) -> bool {
        self.entries == other.entries
    }
}

impl<K, V> FromIterator<(K, V)> for Group
where
    K: Into<Key>,
    V: Into<RawValue>,
{
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut group = Group::new();
        for (key, value) in iter {
            group.insert(key, value);
        }
        group
    }
}

impl IntoIterator for Group {
    type Item = (Key, RawValue);
    type IntoIter = std::vec::IntoIter<(Key, RawValue)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (key, value)) in self.entries.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            match value {
                RawValue::Text(s) => write!(f, "{key}: \"{s}\"")?,
                other => write!(f, "{key}: {other}")?,
            }
        }
        write!(f, "}}")
    }
}
