//! Immutable ordered sequences of floats and integers.

use std::collections::HashSet;

use crate::raw::{Convertible, Group, RawValue};

/// Bit pattern under which floats that compare equal hash alike.
///
/// Both zeros share one pattern. NaN never equals itself and is kept apart by callers.
fn equality_bits(number: f64) -> u64 {
    if number == 0.0 { 0.0f64.to_bits() } else { number.to_bits() }
}

/// An immutable, ordered sequence of floats.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NumberCollection {
    numbers: Vec<f64>,
}

impl NumberCollection {
    /// Creates a sequence from any floats
    pub fn new(numbers: impl IntoIterator<Item = f64>) -> Self {
        Self {
            numbers: numbers.into_iter().collect(),
        }
    }

    /// Returns a sequence with `numbers` appended
    pub fn push(&self, numbers: impl IntoIterator<Item = f64>) -> Self {
        Self::new(self.numbers.iter().copied().chain(numbers))
    }

    /// Returns a sequence keeping the first occurrence of each number
    pub fn unique(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.numbers.len());
        let numbers = self
            .numbers
            .iter()
            .copied()
            .filter(|number| number.is_nan() || seen.insert(equality_bits(*number)))
            .collect();
        Self { numbers }
    }

    /// Returns true if `number` is in the sequence
    pub fn includes(&self, number: f64) -> bool {
        self.numbers.contains(&number)
    }

    /// Returns the numbers as a slice
    pub fn values(&self) -> &[f64] {
        &self.numbers
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Returns true if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Iterates over the numbers
    pub fn iter(&self) -> impl Iterator<Item = f64> + '_ {
        self.numbers.iter().copied()
    }
}

impl Convertible for NumberCollection {
    fn to_group(&self) -> Option<Group> {
        Some(Group::list(self.numbers.iter().copied()))
    }
}

impl From<NumberCollection> for RawValue {
    fn from(value: NumberCollection) -> Self {
        RawValue::object(value)
    }
}

/// An immutable, ordered sequence of integers.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IntegerCollection {
    numbers: Vec<i64>,
}

impl IntegerCollection {
    /// Creates a sequence from any integers
    pub fn new(numbers: impl IntoIterator<Item = i64>) -> Self {
        Self {
            numbers: numbers.into_iter().collect(),
        }
    }

    /// Returns a sequence with `numbers` appended
    pub fn push(&self, numbers: impl IntoIterator<Item = i64>) -> Self {
        Self::new(self.numbers.iter().copied().chain(numbers))
    }

    /// Returns a sequence keeping the first occurrence of each integer
    pub fn unique(&self) -> Self {
        let mut seen = HashSet::with_capacity(self.numbers.len());
        let numbers = self
            .numbers
            .iter()
            .copied()
            .filter(|number| seen.insert(*number))
            .collect();
        Self { numbers }
    }

    /// Returns true if `number` is in the sequence
    pub fn includes(&self, number: i64) -> bool {
        self.numbers.contains(&number)
    }

    /// Returns the integers as a slice
    pub fn values(&self) -> &[i64] {
        &self.numbers
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    /// Returns true if the sequence is empty
    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }

    /// Iterates over the integers
    pub fn iter(&self) -> impl Iterator<Item = i64> + '_ {
        self.numbers.iter().copied()
    }
}

impl Convertible for IntegerCollection {
    fn to_group(&self) -> Option<Group> {
        Some(Group::list(self.numbers.iter().copied()))
    }
}

impl From<IntegerCollection> for RawValue {
    fn from(value: IntegerCollection) -> Self {
        RawValue::object(value)
    }
}
