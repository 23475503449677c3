//! Text views with trimming, case mapping and splitting.

use std::fmt;

use crate::{
    Result,
    collection::StringCollection,
    raw::{Convertible, RawValue},
    value::ValueError,
};

/// Characters stripped by [`StringValue::trim`] when no set is given.
pub const DEFAULT_TRIM_CHARS: &str = " \t\n\r\0\x0B";

/// An immutable text value.
///
/// Construction accepts text, any other scalar (converted to its textual
/// form) and objects with a textual form or a scalar export.
///
/// ```
/// # use tessella::value::StringValue;
/// let value = StringValue::new("  Lorem Ipsum  ")?.trim(None).to_lower();
/// assert_eq!(value.get(), "lorem ipsum");
///
/// let words = StringValue::new("lorem ipsum dolor")?.split(" ", Some(2))?;
/// assert_eq!(words.values(), ["lorem", "ipsum dolor"]);
/// # Ok::<(), tessella::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StringValue {
    value: String,
}

impl StringValue {
    /// Creates a text view, converting scalars to their textual form
    pub fn new(raw: impl Into<RawValue>) -> Result<Self> {
        let raw = raw.into();
        let text = match &raw {
            RawValue::Object(object) => object
                .to_text()
                .or_else(|| object.to_scalar().as_ref().and_then(scalar_text)),
            other => scalar_text(other),
        };

        text.map(|value| Self { value })
            .ok_or_else(|| ValueError::mismatch("string", &raw).into())
    }

    /// Returns the text
    pub fn get(&self) -> &str {
        &self.value
    }

    /// Consumes the view, returning the text
    pub fn into_string(self) -> String {
        self.value
    }

    /// Strips `chars` (default: [`DEFAULT_TRIM_CHARS`]) from both ends
    pub fn trim(&self, chars: Option<&str>) -> StringValue {
        let chars = chars.unwrap_or(DEFAULT_TRIM_CHARS);
        Self {
            value: self.value.trim_matches(|c| chars.contains(c)).to_string(),
        }
    }

    /// Lowercases using Unicode case mapping
    pub fn to_lower(&self) -> StringValue {
        Self {
            value: self.value.to_lowercase(),
        }
    }

    /// Uppercases using Unicode case mapping
    pub fn to_upper(&self) -> StringValue {
        Self {
            value: self.value.to_uppercase(),
        }
    }

    /// Splits the text by `delimiter`.
    ///
    /// With a `limit`, at most that many pieces are produced and the last one
    /// holds the remainder; a limit of zero behaves like one. An empty
    /// delimiter is rejected.
    pub fn split(&self, delimiter: &str, limit: Option<usize>) -> Result<StringCollection> {
        if delimiter.is_empty() {
            return Err(ValueError::EmptyDelimiter.into());
        }

        Ok(match limit {
            Some(limit) => StringCollection::new(self.value.splitn(limit.max(1), delimiter)),
            None => StringCollection::new(self.value.split(delimiter)),
        })
    }

    /// Applies `transforms` in order.
    ///
    /// Fails if no transform is given.
    pub fn map(&self, transforms: &[&dyn Fn(&str) -> String]) -> Result<StringValue> {
        if transforms.is_empty() {
            return Err(ValueError::MissingCallback {
                operation: "StringValue::map",
            }
            .into());
        }

        let value = transforms
            .iter()
            .fold(self.value.clone(), |current, transform| transform(&current));
        Ok(Self { value })
    }

    /// Exports the text as a raw scalar
    pub fn to_scalar(&self) -> RawValue {
        RawValue::Text(self.value.clone())
    }
}

/// Textual form of a scalar raw value.
fn scalar_text(raw: &RawValue) -> Option<String> {
    match raw {
        RawValue::Text(s) => Some(s.clone()),
        RawValue::Bool(true) => Some("1".to_string()),
        RawValue::Bool(false) => Some(String::new()),
        RawValue::Int(n) => Some(n.to_string()),
        RawValue::Float(n) => Some(n.to_string()),
        RawValue::DateTime(dt) => Some(dt.to_rfc3339()),
        _ => None,
    }
}

impl Convertible for StringValue {
    fn to_scalar(&self) -> Option<RawValue> {
        Some(StringValue::to_scalar(self))
    }

    fn to_text(&self) -> Option<String> {
        Some(self.value.clone())
    }
}

impl From<StringValue> for RawValue {
    fn from(value: StringValue) -> Self {
        RawValue::object(value)
    }
}

impl AsRef<str> for StringValue {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl PartialEq<str> for StringValue {
    fn eq(&self, other: &str) -> bool {
        self.value == other
    }
}

impl PartialEq<&str> for StringValue {
    fn eq(&self, other: &&str) -> bool {
        self.value == *other
    }
}

impl fmt::Display for StringValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
