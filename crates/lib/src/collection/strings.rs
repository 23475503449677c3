//! Immutable ordered sequence of strings.

use std::{
    collections::{HashMap, HashSet},
    fmt,
};

use crate::{
    Result,
    raw::{Convertible, Group, RawValue},
    value::ValueError,
};

/// An immutable, ordered sequence of strings.
///
/// Every transformation returns a new sequence.
///
/// ```
/// # use tessella::collection::StringCollection;
/// let tags = StringCollection::new(["rust", "data", "rust"]);
///
/// assert_eq!(tags.unique().join(","), "rust,data");
/// assert_eq!(tags.duplicates().values(), ["rust"]);
/// assert!(tags.includes("data"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringCollection {
    strings: Vec<String>,
}

impl StringCollection {
    /// Creates a sequence from any strings
    pub fn new<I, S>(strings: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            strings: strings.into_iter().map(Into::into).collect(),
        }
    }

    /// Returns a sequence with `values` appended
    pub fn push<I, S>(&self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut strings = self.strings.clone();
        strings.extend(values.into_iter().map(Into::into));
        Self { strings }
    }

    /// Returns a sequence without any occurrence of `values`
    pub fn remove(&self, values: &[&str]) -> Self {
        self.filter(|string| !values.contains(&string))
    }

    /// Returns a sequence with every string passed through all `transforms` in order.
    ///
    /// Fails if no transform is given.
    pub fn map(&self, transforms: &[&dyn Fn(&str) -> String]) -> Result<Self> {
        if transforms.is_empty() {
            return Err(ValueError::MissingCallback {
                operation: "StringCollection::map",
            }
            .into());
        }

        Ok(Self::new(self.strings.iter().map(|string| {
            transforms
                .iter()
                .fold(string.clone(), |current, transform| transform(&current))
        })))
    }

    /// Returns a sequence of the strings satisfying `predicate`
    pub fn filter<F>(&self, predicate: F) -> Self
    where
        F: Fn(&str) -> bool,
    {
        Self::new(
            self.strings
                .iter()
                .filter(|string| predicate(string.as_str()))
                .cloned(),
        )
    }

    /// Returns a sequence without empty strings
    pub fn filter_not_empty(&self) -> Self {
        self.filter(|string| !string.is_empty())
    }

    /// Returns a sequence keeping the first occurrence of each string
    pub fn unique(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.strings.len());
        Self::new(
            self.strings
                .iter()
                .filter(|string| seen.insert(string.as_str()))
                .cloned(),
        )
    }

    /// Returns the strings occurring more than once, in order of first occurrence
    pub fn duplicates(&self) -> Self {
        let mut counts: HashMap<&str, usize> = HashMap::with_capacity(self.strings.len());
        for string in &self.strings {
            *counts.entry(string.as_str()).or_default() += 1;
        }
        self.unique()
            .filter(|string| counts.get(string).is_some_and(|&count| count > 1))
    }

    /// Returns true if `value` is in the sequence
    pub fn includes(&self, value: &str) -> bool {
        self.strings.iter().any(|string| string == value)
    }

    /// Joins the strings with `separator`
    pub fn join(&self, separator: &str) -> String {
        self.strings.join(separator)
    }

    /// Returns the strings as a slice
    pub fn values(&self) -> &[String] {
        &self.strings
    }

    /// Consumes the sequence, returning its strings
    pub fn into_values(self) -> Vec<String> {
        self.strings
    }

    /// Returns the number of strings
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Returns true if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterates over the strings
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.strings.iter().map(String::as_str)
    }
}

impl Convertible for StringCollection {
    fn to_group(&self) -> Option<Group> {
        Some(Group::list(self.strings.iter().map(String::as_str)))
    }
}

impl From<StringCollection> for RawValue {
    fn from(value: StringCollection) -> Self {
        RawValue::object(value)
    }
}

impl<S: Into<String>> FromIterator<S> for StringCollection {
    fn from_iter<T: IntoIterator<Item = S>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl IntoIterator for StringCollection {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.strings.into_iter()
    }
}

impl fmt::Display for StringCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]", self.join(", "))
    }
}
