//! Single scalar values and their typed views.

use std::{fmt, str::FromStr};

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use crate::{
    Result,
    raw::{Convertible, RawValue},
    value::{NumberValue, StringValue, ValueError},
};

/// Text tokens read as `false` by [`ScalarValue::bool`] when parsing text.
const FALSE_TOKENS: [&str; 4] = ["false", "null", "0", "no"];

const NAIVE_DATE_TIME_FORMATS: [&str; 5] = [
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%Y/%m/%d"];

/// Target of [`ScalarValue::cast`].
///
/// Parses from the names `int`, `integer`, `float`, `string`, `bool` and
/// `boolean`, ignoring case and surrounding whitespace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScalarType {
    Int,
    Float,
    String,
    Bool,
}

impl FromStr for ScalarType {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "int" | "integer" => Ok(ScalarType::Int),
            "float" => Ok(ScalarType::Float),
            "string" => Ok(ScalarType::String),
            "bool" | "boolean" => Ok(ScalarType::Bool),
            _ => Err(ValueError::UnknownScalarType {
                name: s.to_string(),
            }
            .into()),
        }
    }
}

impl fmt::Display for ScalarType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScalarType::Int => "int",
            ScalarType::Float => "float",
            ScalarType::String => "string",
            ScalarType::Bool => "bool",
        };
        write!(f, "{name}")
    }
}

/// An immutable scalar: bool, integer, float, text or date-time.
///
/// Objects exporting a scalar are unwrapped at construction.
///
/// ```
/// # use tessella::value::{ScalarType, ScalarValue};
/// assert!(!ScalarValue::new("no")?.bool(true)?);
/// assert!(ScalarValue::new("no")?.bool(false).is_err());
///
/// let cast = ScalarValue::new("42 apples")?.cast("int".parse::<ScalarType>()?)?;
/// assert_eq!(cast.raw(), &42);
/// # Ok::<(), tessella::Error>(())
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarValue {
    value: RawValue,
}

impl ScalarValue {
    /// Creates a scalar view; groupings, maps, null and non-scalar objects are rejected
    pub fn new(raw: impl Into<RawValue>) -> Result<Self> {
        let raw = raw.into();
        match raw.exported_scalar() {
            Some(value) => Ok(Self { value }),
            None => Err(ValueError::mismatch("scalar", &raw).into()),
        }
    }

    /// Returns the stored scalar
    pub fn raw(&self) -> &RawValue {
        &self.value
    }

    /// Exports the stored scalar
    pub fn to_scalar(&self) -> RawValue {
        self.value.clone()
    }

    /// Returns a view of `transform(value)`; the result must be a scalar
    pub fn map<F>(&self, transform: F) -> Result<ScalarValue>
    where
        F: Fn(&RawValue) -> RawValue,
    {
        Self::new(transform(&self.value))
    }

    /// Returns the value as text
    pub fn string(&self) -> Result<StringValue> {
        StringValue::new(self.value.clone())
    }

    /// Returns the value as a number; text is parsed, other types are rejected
    pub fn number(&self) -> Result<NumberValue> {
        match &self.value {
            RawValue::Text(text) => NumberValue::parse(text),
            value if value.is_numeric() => NumberValue::new(value.clone()),
            other => Err(ValueError::mismatch("number", other).into()),
        }
    }

    /// Returns the value as an integer, truncating floats
    pub fn int(&self) -> Result<i64> {
        Ok(self.number()?.int())
    }

    /// Returns the value as a float
    pub fn float(&self) -> Result<f64> {
        Ok(self.number()?.float())
    }

    /// Returns the value as a boolean.
    ///
    /// With `parse_string`, text is read leniently: `false`, `null`, `0`,
    /// `no` (any case) and the empty string are false, any other text is
    /// true. Otherwise the value must be a genuine boolean.
    pub fn bool(&self, parse_string: bool) -> Result<bool> {
        match &self.value {
            RawValue::Text(text) if parse_string => {
                let lowered = text.to_lowercase();
                Ok(!text.is_empty() && !FALSE_TOKENS.contains(&lowered.as_str()))
            }
            RawValue::Bool(b) => Ok(*b),
            other => Err(ValueError::mismatch("bool", other).into()),
        }
    }

    /// Returns the value as a UTC date-time.
    ///
    /// Text is parsed as RFC 3339, RFC 2822 or a common `Y-m-d` layout (naive
    /// values are taken as UTC); integers are Unix timestamps in seconds.
    pub fn date_time(&self) -> Result<DateTime<Utc>> {
        match &self.value {
            RawValue::DateTime(dt) => Ok(*dt),
            RawValue::Text(text) => parse_date_time(text).ok_or_else(|| {
                tracing::debug!(input = %text, "Unrecognised date-time text");
                ValueError::ParseFailed {
                    target: "date-time",
                    input: text.clone(),
                    reason: "unrecognised format".to_string(),
                }
                .into()
            }),
            RawValue::Int(seconds) => DateTime::from_timestamp(*seconds, 0).ok_or_else(|| {
                ValueError::OutOfRange {
                    value: seconds.to_string(),
                    target: "date-time",
                }
                .into()
            }),
            other => Err(ValueError::mismatch("date-time", other).into()),
        }
    }

    /// Returns a new scalar converted to `target` with loose rules
    pub fn cast(&self, target: ScalarType) -> Result<ScalarValue> {
        let value = match target {
            ScalarType::Int => RawValue::Int(self.cast_int()?),
            ScalarType::Float => RawValue::Float(self.cast_float()?),
            ScalarType::String => RawValue::Text(self.cast_string()),
            ScalarType::Bool => RawValue::Bool(self.cast_bool()),
        };
        Ok(Self { value })
    }

    /// Loose integer conversion.
    ///
    /// Booleans become 0/1, floats are truncated, text contributes its
    /// leading number (0 if none) and date-times their Unix timestamp.
    pub fn cast_int(&self) -> Result<i64> {
        match &self.value {
            RawValue::Int(n) => Ok(*n),
            RawValue::Bool(b) => Ok(i64::from(*b)),
            RawValue::Float(n) => truncate(*n),
            RawValue::Text(text) => {
                let prefix = numeric_prefix(text);
                match prefix.parse::<i64>() {
                    Ok(n) => Ok(n),
                    Err(_) => truncate(prefix.parse::<f64>().unwrap_or(0.0)),
                }
            }
            RawValue::DateTime(dt) => Ok(dt.timestamp()),
            other => Err(ValueError::mismatch("int", other).into()),
        }
    }

    /// Loose float conversion, following the same rules as [`cast_int`](Self::cast_int)
    pub fn cast_float(&self) -> Result<f64> {
        match &self.value {
            RawValue::Float(n) => Ok(*n),
            RawValue::Int(n) => Ok(*n as f64),
            RawValue::Bool(b) => Ok(if *b { 1.0 } else { 0.0 }),
            RawValue::Text(text) => Ok(numeric_prefix(text).parse::<f64>().unwrap_or(0.0)),
            RawValue::DateTime(dt) => Ok(dt.timestamp() as f64),
            other => Err(ValueError::mismatch("float", other).into()),
        }
    }

    /// Textual form: `true` is `"1"`, `false` is empty, date-times are RFC 3339
    pub fn cast_string(&self) -> String {
        match &self.value {
            RawValue::Text(text) => text.clone(),
            RawValue::Bool(true) => "1".to_string(),
            RawValue::Bool(false) => String::new(),
            RawValue::DateTime(dt) => dt.to_rfc3339(),
            other => other.to_string(),
        }
    }

    /// Truthiness: zero, empty text and `"0"` are false
    pub fn cast_bool(&self) -> bool {
        match &self.value {
            RawValue::Bool(b) => *b,
            RawValue::Int(n) => *n != 0,
            RawValue::Float(n) => *n != 0.0,
            RawValue::Text(text) => !(text.is_empty() || text == "0"),
            _ => true,
        }
    }
}

fn truncate(value: f64) -> Result<i64> {
    if !value.is_finite() || value < i64::MIN as f64 || value >= i64::MAX as f64 {
        return Err(ValueError::OutOfRange {
            value: value.to_string(),
            target: "i64",
        }
        .into());
    }
    Ok(value as i64)
}

/// Longest leading slice of `text` (after whitespace) that reads as a decimal number.
fn numeric_prefix(text: &str) -> &str {
    let text = text.trim_start();
    let bytes = text.as_bytes();
    let digits_from = |mut i: usize| {
        while i < bytes.len() && bytes[i].is_ascii_digit() {
            i += 1;
        }
        i
    };

    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end = 1;
    }
    let int_end = digits_from(end);
    let mut has_digits = int_end > end;
    end = int_end;

    if bytes.get(end) == Some(&b'.') {
        let frac_end = digits_from(end + 1);
        if frac_end > end + 1 || has_digits {
            has_digits |= frac_end > end + 1;
            end = frac_end;
        }
    }
    if !has_digits {
        return "";
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'+' | b'-')) {
            exp += 1;
        }
        let exp_end = digits_from(exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    &text[..end]
}

fn parse_date_time(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Some(dt.with_timezone(&Utc));
    }
    if let Ok(dt) = DateTime::parse_from_rfc2822(text) {
        return Some(dt.with_timezone(&Utc));
    }
    for format in NAIVE_DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }
    DATE_FORMATS.iter().find_map(|format| {
        NaiveDate::parse_from_str(text, format)
            .ok()
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
    })
}

impl Convertible for ScalarValue {
    fn to_scalar(&self) -> Option<RawValue> {
        Some(self.value.clone())
    }

    fn to_text(&self) -> Option<String> {
        Some(self.cast_string())
    }
}

impl From<ScalarValue> for RawValue {
    fn from(value: ScalarValue) -> Self {
        RawValue::object(value)
    }
}

impl fmt::Display for ScalarValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.cast_string())
    }
}
