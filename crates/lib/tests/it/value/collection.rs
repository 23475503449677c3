//! CollectionValue tests

use tessella::{
    Error, ErrorKind, Map,
    raw::{Group, Key, RawValue},
    value::{CollectionValue, ValueError},
};

use crate::helpers::*;

fn collection(values: impl IntoIterator<Item = RawValue>) -> CollectionValue {
    CollectionValue::new(Group::list(values))
}

#[test]
fn test_integers_reject_fractions() {
    let mixed = collection([1.into(), 2.into(), 2.5.into()]);
    let err = assert_kind(mixed.integers(), ErrorKind::ConversionFailure);
    match err {
        Error::Value(ValueError::ProjectionFailed { target, key, .. }) => {
            assert_eq!(target, "integers");
            assert_eq!(key, "2");
        }
        other => panic!("Unexpected error: {other:?}"),
    }

    let whole = collection([1.into(), 2.into(), 3.into()]);
    assert_eq!(whole.integers().expect("integers").values(), [1, 2, 3]);
}

#[test]
fn test_integers_accept_whole_floats_and_numeric_text() {
    let values = collection([4.0.into(), "5".into(), RawValue::object(Celsius(6.0))]);
    assert_eq!(values.integers().expect("integers").values(), [4, 5, 6]);
}

#[test]
fn test_numbers() {
    let values = collection([1.into(), "2.5".into(), 3.25.into()]);
    assert_eq!(values.numbers().expect("numbers").values(), [1.0, 2.5, 3.25]);

    assert_kind(
        collection([1.into(), "abc".into()]).numbers(),
        ErrorKind::ConversionFailure,
    );
    assert_kind(
        collection([1.into(), true.into()]).numbers(),
        ErrorKind::ConversionFailure,
    );
}

#[test]
fn test_strings() {
    let values = collection(["a".into(), 1.into(), RawValue::object(Slug("b c"))]);
    assert_eq!(values.strings().expect("strings").values(), ["a", "1", "b-c"]);

    let with_group = collection(["a".into(), RawValue::Group(Group::new())]);
    assert_kind(with_group.strings(), ErrorKind::ConversionFailure);
}

#[test]
fn test_objects() {
    let values = collection([
        RawValue::Map(sample_user()),
        RawValue::object(UserMock::new("Ann", &[])),
    ]);
    assert_eq!(values.objects().expect("objects").len(), 2);

    let err = assert_kind(
        collection([RawValue::Map(Map::new()), "text".into()]).objects(),
        ErrorKind::ConversionFailure,
    );
    assert!(err.to_string().contains("element 1"), "Unexpected message: {err}");
}

#[test]
fn test_empty_projections_succeed() {
    let empty = CollectionValue::new(Group::new());
    assert!(empty.is_empty());
    assert!(empty.strings().expect("strings").is_empty());
    assert!(empty.integers().expect("integers").is_empty());
    assert!(empty.objects().expect("objects").is_empty());
}

#[test]
fn test_accessors() {
    let record = CollectionValue::new(Group::record([("x", 1), ("y", 2)]));
    assert_eq!(record.keys(), vec![Key::from("x"), Key::from("y")]);
    assert_eq!(record.values(), vec![RawValue::Int(1), RawValue::Int(2)]);
    assert_eq!(record.get("y"), Some(&RawValue::Int(2)));
    assert_eq!(record.get("z"), None);
    assert_eq!(record.iter().count(), 2);
}

#[test]
fn test_to_array_expands_one_level() {
    let values = collection([
        RawValue::Map(Map::new().set("k", "v")),
        RawValue::object(Celsius(1.5)),
        7.into(),
    ]);

    let exported = values.to_array();
    assert_eq!(
        exported.get(&Key::Index(0)),
        Some(&RawValue::Group(Group::record([("k", "v")])))
    );
    assert_eq!(exported.get(&Key::Index(1)), Some(&RawValue::Float(1.5)));
    assert_eq!(exported.get(&Key::Index(2)), Some(&RawValue::Int(7)));
}
