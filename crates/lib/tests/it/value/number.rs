//! NumberValue tests

use tessella::{
    ErrorKind,
    raw::RawValue,
    value::{Number, NumberValue, RoundingMode},
};

use crate::helpers::*;

#[test]
fn test_construction_is_strict() {
    assert_eq!(NumberValue::new(5).expect("int").get(), Number::Int(5));
    assert_eq!(NumberValue::new(2.5).expect("float").get(), Number::Float(2.5));
    assert_eq!(
        NumberValue::new(RawValue::object(Celsius(-4.0)))
            .expect("scalar exporter")
            .float(),
        -4.0
    );

    assert_kind(NumberValue::new("5"), ErrorKind::ShapeMismatch);
    assert_kind(NumberValue::new(true), ErrorKind::ShapeMismatch);
    assert_kind(NumberValue::new(f64::NAN), ErrorKind::ConversionFailure);
    assert_kind(NumberValue::new(f64::INFINITY), ErrorKind::ConversionFailure);
}

#[test]
fn test_parse() {
    assert_eq!(NumberValue::parse(" 42 ").expect("int").get(), Number::Int(42));
    assert_eq!(NumberValue::parse("-0.5").expect("float").get(), Number::Float(-0.5));
    assert_kind(NumberValue::parse("4 2"), ErrorKind::ConversionFailure);
    assert_kind(NumberValue::parse("inf"), ErrorKind::ConversionFailure);
}

#[test]
fn test_narrowing() {
    let value = NumberValue::new(9.99).expect("float");
    assert_eq!(value.int(), 9);
    assert_eq!(value.float(), 9.99);
    assert_kind(value.int_exact(), ErrorKind::ConversionFailure);

    assert_eq!(NumberValue::new(4.0).expect("float").int_exact().expect("exact"), 4);
    assert_kind(
        NumberValue::new(1e20).expect("float").int_exact(),
        ErrorKind::ConversionFailure,
    );
}

#[test]
fn test_round_modes() {
    let half = NumberValue::new(2.5).expect("float");
    let round = |mode| half.round(0, mode).expect("round").float();

    assert_eq!(round(RoundingMode::HalfUp), 3.0);
    assert_eq!(round(RoundingMode::HalfDown), 2.0);
    assert_eq!(round(RoundingMode::HalfEven), 2.0);
    assert_eq!(round(RoundingMode::HalfOdd), 3.0);
    assert_eq!(RoundingMode::default(), RoundingMode::HalfUp);
}

#[test]
fn test_round_precision() {
    let value = NumberValue::new(-123.456).expect("float");
    assert_eq!(value.round(2, RoundingMode::HalfUp).expect("round").float(), -123.46);
    assert_eq!(value.round(-1, RoundingMode::HalfUp).expect("round").float(), -120.0);

    let int = NumberValue::new(1250).expect("int");
    assert_eq!(
        int.round(-2, RoundingMode::HalfEven).expect("round").get(),
        Number::Int(1200)
    );
    assert_eq!(int.round(2, RoundingMode::HalfUp).expect("round").get(), Number::Int(1250));
}

#[test]
fn test_map_result_must_be_finite() {
    let value = NumberValue::new(10).expect("int");
    let halved = value
        .map(|n| Number::Float(n.as_f64() / 4.0))
        .expect("finite");
    assert_eq!(halved.float(), 2.5);

    assert_kind(
        value.map(|n| Number::Float(n.as_f64() / 0.0)),
        ErrorKind::ConversionFailure,
    );
}

#[test]
fn test_scalar_export_and_display() {
    let value = NumberValue::new(7).expect("int");
    assert_eq!(value.to_scalar(), RawValue::Int(7));
    assert_eq!(value.to_string(), "7");
    assert_eq!(NumberValue::new(0.5).expect("float").to_string(), "0.5");
}

#[test]
fn test_round_keeps_large_values_intact() {
    for mode in [
        RoundingMode::HalfUp,
        RoundingMode::HalfDown,
        RoundingMode::HalfEven,
        RoundingMode::HalfOdd,
    ] {
        let whole = NumberValue::new(2e14).expect("float");
        assert_eq!(whole.round(0, mode).expect("round").float(), 2e14);

        let scaled = NumberValue::new(1e13).expect("float");
        assert_eq!(scaled.round(2, mode).expect("round").float(), 1e13);

        let eighth = NumberValue::new(1e15 + 0.125).expect("float");
        assert_eq!(eighth.round(0, mode).expect("round").float(), 1e15);
    }

    let tie = NumberValue::new(1e14 + 0.5).expect("float");
    assert_eq!(tie.round(0, RoundingMode::HalfUp).expect("round").float(), 1e14 + 1.0);
    assert_eq!(tie.round(0, RoundingMode::HalfDown).expect("round").float(), 1e14);
}
