//! Numeric views: integers and floats with narrowing and rounding.

use std::fmt;

use crate::{
    Result,
    raw::{Convertible, RawValue},
    value::ValueError,
};

/// A number that is either an integer or a float.
///
/// Integers are never widened to floats silently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Returns the number as a float
    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Float(n) => n,
        }
    }

    /// Returns true for integers and for floats without a fractional part
    pub fn is_integer_valued(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(n) => n.fract() == 0.0,
        }
    }

    fn is_finite(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(n) => n.is_finite(),
        }
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Int(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value as i64)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Float(value)
    }
}

impl From<Number> for RawValue {
    fn from(value: Number) -> Self {
        match value {
            Number::Int(n) => RawValue::Int(n),
            Number::Float(n) => RawValue::Float(n),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(n) => write!(f, "{n}"),
            Number::Float(n) => write!(f, "{n}"),
        }
    }
}

/// Tie-breaking rule used by [`NumberValue::round`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum RoundingMode {
    /// Ties away from zero
    #[default]
    HalfUp,
    /// Ties towards zero
    HalfDown,
    /// Ties to the nearest even digit
    HalfEven,
    /// Ties to the nearest odd digit
    HalfOdd,
}

/// An immutable, finite number.
///
/// ```
/// # use tessella::value::{Number, NumberValue, RoundingMode};
/// let price = NumberValue::new(-123.456)?;
///
/// assert_eq!(price.int(), -123);
/// assert_eq!(price.round(2, RoundingMode::HalfUp)?.get(), Number::Float(-123.46));
/// assert_eq!(price.map(|n| Number::Float(n.as_f64().abs()))?.float(), 123.456);
/// # Ok::<(), tessella::Error>(())
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NumberValue {
    number: Number,
}

impl NumberValue {
    /// Creates a number view from an integer or float raw value.
    ///
    /// Objects exporting a numeric scalar are unwrapped. Anything else,
    /// including numeric text, is rejected.
    pub fn new(raw: impl Into<RawValue>) -> Result<Self> {
        let raw = raw.into();
        match raw.exported_scalar() {
            Some(RawValue::Int(n)) => Self::from_number(Number::Int(n)),
            Some(RawValue::Float(n)) => Self::from_number(Number::Float(n)),
            _ => Err(ValueError::mismatch("number", &raw).into()),
        }
    }

    /// Creates a number view, rejecting NaN and infinities
    pub fn from_number(number: impl Into<Number>) -> Result<Self> {
        let number = number.into();
        if !number.is_finite() {
            return Err(ValueError::NotFinite {
                operation: "NumberValue::new",
            }
            .into());
        }
        Ok(Self { number })
    }

    /// Parses numeric text; integers stay integers
    pub fn parse(text: &str) -> Result<Self> {
        let trimmed = text.trim();
        if let Ok(int) = trimmed.parse::<i64>() {
            return Ok(Self {
                number: Number::Int(int),
            });
        }

        match trimmed.parse::<f64>() {
            Ok(float) if float.is_finite() => Ok(Self {
                number: Number::Float(float),
            }),
            Ok(_) => Err(ValueError::ParseFailed {
                target: "number",
                input: text.to_string(),
                reason: "not a finite number".to_string(),
            }
            .into()),
            Err(err) => Err(ValueError::ParseFailed {
                target: "number",
                input: text.to_string(),
                reason: err.to_string(),
            }
            .into()),
        }
    }

    /// Returns the stored number
    pub fn get(&self) -> Number {
        self.number
    }

    /// Returns the number truncated towards zero, saturating at the i64 bounds
    pub fn int(&self) -> i64 {
        match self.number {
            Number::Int(n) => n,
            Number::Float(n) => n as i64,
        }
    }

    /// Returns the number as an integer, failing for fractional or out-of-range values
    pub fn int_exact(&self) -> Result<i64> {
        match self.number {
            Number::Int(n) => Ok(n),
            Number::Float(n) if n.fract() != 0.0 => Err(ValueError::NotInteger { value: n }.into()),
            Number::Float(n) if n < i64::MIN as f64 || n >= i64::MAX as f64 => {
                Err(ValueError::OutOfRange {
                    value: n.to_string(),
                    target: "i64",
                }
                .into())
            }
            Number::Float(n) => Ok(n as i64),
        }
    }

    /// Returns the number as a float
    pub fn float(&self) -> f64 {
        self.number.as_f64()
    }

    /// Returns the number rounded to `precision` decimal digits.
    ///
    /// Negative precision rounds to tens, hundreds and so on. Integers stay
    /// integers; they only change for negative precision.
    pub fn round(&self, precision: i32, mode: RoundingMode) -> Result<NumberValue> {
        let number = match self.number {
            Number::Int(n) => Number::Int(round_int(n, precision, mode)?),
            Number::Float(n) => Number::Float(round_float(n, precision, mode)),
        };
        Self::from_number(number)
    }

    /// Returns a view of `transform(number)`; the result must be finite
    pub fn map<F>(&self, transform: F) -> Result<NumberValue>
    where
        F: Fn(Number) -> Number,
    {
        Self::from_number(transform(self.number))
    }

    /// Exports the number as a raw scalar
    pub fn to_scalar(&self) -> RawValue {
        self.number.into()
    }
}

impl Convertible for NumberValue {
    fn to_scalar(&self) -> Option<RawValue> {
        Some(NumberValue::to_scalar(self))
    }

    fn to_text(&self) -> Option<String> {
        Some(self.number.to_string())
    }
}

impl From<NumberValue> for RawValue {
    fn from(value: NumberValue) -> Self {
        RawValue::object(value)
    }
}

impl fmt::Display for NumberValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.number)
    }
}

/// Numeric coercion used by collection projections: numbers, numeric text
/// and objects exporting either.
pub(crate) fn coerce_number(raw: &RawValue) -> Result<NumberValue> {
    match raw.exported_scalar() {
        Some(RawValue::Text(text)) => NumberValue::parse(&text),
        Some(scalar) if scalar.is_numeric() => NumberValue::new(scalar),
        _ => Err(ValueError::mismatch("number", raw).into()),
    }
}

/// Upper bound on the distance from .5 still treated as a tie.
const MAX_TIE_TOLERANCE: f64 = 1e-9;

/// Rounds a scaled value to an integer, breaking exact ties by `mode`.
///
/// A value within a few ulps of .5 counts as a tie, so decimal inputs such as
/// 1.005 scaled by 100 round the way they read. The tolerance is capped so
/// that large magnitudes, where ulps approach 0.5, only tie on an exact .5.
fn round_half(x: f64, mode: RoundingMode) -> f64 {
    if x.fract() == 0.0 {
        return x;
    }

    let floor = x.floor();
    let tolerance = (f64::EPSILON * x.abs().max(1.0) * 16.0).min(MAX_TIE_TOLERANCE);
    if ((x - floor) - 0.5).abs() > tolerance {
        return x.round();
    }

    let ceil = floor + 1.0;
    let floor_is_even = floor % 2.0 == 0.0;
    match mode {
        RoundingMode::HalfUp if x >= 0.0 => ceil,
        RoundingMode::HalfUp => floor,
        RoundingMode::HalfDown if x >= 0.0 => floor,
        RoundingMode::HalfDown => ceil,
        RoundingMode::HalfEven if floor_is_even => floor,
        RoundingMode::HalfEven => ceil,
        RoundingMode::HalfOdd if floor_is_even => ceil,
        RoundingMode::HalfOdd => floor,
    }
}

fn round_float(value: f64, precision: i32, mode: RoundingMode) -> f64 {
    if precision > f64::MAX_10_EXP {
        return value;
    }
    if precision < -f64::MAX_10_EXP {
        return 0.0;
    }

    let factor = 10f64.powi(precision.abs());
    if precision >= 0 {
        let scaled = value * factor;
        if !scaled.is_finite() {
            // more digits requested than the value can carry
            return value;
        }
        round_half(scaled, mode) / factor
    } else {
        round_half(value / factor, mode) * factor
    }
}

fn round_int(value: i64, precision: i32, mode: RoundingMode) -> Result<i64> {
    if precision >= 0 {
        return Ok(value);
    }

    let exponent = precision.unsigned_abs();
    if exponent > 19 {
        return Ok(0);
    }

    let factor = 10i128.pow(exponent);
    let value = value as i128;
    let sign = value.signum();
    let quotient = value / factor;
    let twice_remainder = 2 * (value % factor).abs();

    let away = quotient + sign;
    let rounded = if twice_remainder < factor {
        quotient
    } else if twice_remainder > factor {
        away
    } else {
        match mode {
            RoundingMode::HalfUp => away,
            RoundingMode::HalfDown => quotient,
            RoundingMode::HalfEven if quotient % 2 == 0 => quotient,
            RoundingMode::HalfEven => away,
            RoundingMode::HalfOdd if quotient % 2 != 0 => quotient,
            RoundingMode::HalfOdd => away,
        }
    };

    i64::try_from(rounded * factor).map_err(|_| {
        ValueError::OutOfRange {
            value: (rounded * factor).to_string(),
            target: "i64",
        }
        .into()
    })
}
