//! Value dispatcher tests

use tessella::{
    ErrorKind, Map, Value,
    raw::{Group, RawValue},
};

use crate::helpers::*;

#[test]
fn test_to_map_from_groupings() {
    let value = Value::new(Group::record([("id", 1), ("age", 30)]));
    let map = value.to_map().expect("record");
    assert_eq!(map.keys().values(), ["id", "age"]);

    let nested = Value::new(sample_user());
    assert_eq!(nested.to_map().expect("map"), sample_user());

    let object = Value::new(RawValue::object(UserMock::new("Ann", &[])));
    assert!(object.to_map().expect("exporter").has("roles"));
}

#[test]
fn test_to_map_rejects_null_and_scalars() {
    assert_kind(Value::new(RawValue::Null).to_map(), ErrorKind::ShapeMismatch);
    assert_kind(Value::new("text").to_map(), ErrorKind::ShapeMismatch);
    assert_kind(Value::default().to_map(), ErrorKind::ShapeMismatch);
}

#[test]
fn test_to_collection_value_lifts_scalars_on_request() {
    let single = Value::new("blue");
    let lifted = single.to_collection_value(true).expect("lifted");
    assert_eq!(lifted.len(), 1);
    assert_eq!(lifted.get(0), Some(&RawValue::from("blue")));

    assert_kind(single.to_collection_value(false), ErrorKind::ShapeMismatch);
    assert_kind(
        Value::new(RawValue::Null).to_collection_value(true),
        ErrorKind::ShapeMismatch,
    );
}

#[test]
fn test_to_collection_value_from_map_and_exporters() {
    let from_map = Value::new(sample_user())
        .to_collection_value(false)
        .expect("map");
    assert_eq!(from_map.len(), 3);
    assert_eq!(from_map.get("name"), Some(&RawValue::from("John")));

    let from_object = Value::new(RawValue::object(UserMock::new("Ann", &["dev"])))
        .to_collection_value(false)
        .expect("exporter");
    assert_eq!(from_object.len(), 2);
}

#[test]
fn test_wrapper_routing() {
    assert_eq!(Value::new(42).to_number_value().expect("number").int(), 42);
    assert_kind(Value::new("42").to_number_value(), ErrorKind::ShapeMismatch);

    assert_eq!(Value::new(3.5).to_string_value().expect("string"), "3.5");
    assert_eq!(
        Value::new(true).to_scalar_value().expect("scalar").raw(),
        &true
    );
    assert_kind(Value::new(Group::new()).to_scalar_value(), ErrorKind::ShapeMismatch);
}

#[test]
fn test_shortcuts() {
    let map = Map::new()
        .set("name", "John")
        .set("age", "31")
        .set("ratio", 0.25)
        .set("active", "no")
        .set("joined", "2020-01-02");

    assert_eq!(map.get_value("name").expect("name").string().expect("string"), "John");
    assert_eq!(map.get_value("age").expect("age").int().expect("int"), 31);
    assert_eq!(map.get_value("ratio").expect("ratio").float().expect("float"), 0.25);
    assert!(!map.get_value("active").expect("active").bool(true).expect("bool"));
    assert_kind(
        map.get_value("active").expect("active").bool(false),
        ErrorKind::ShapeMismatch,
    );

    let joined = map
        .get_value("joined")
        .expect("joined")
        .date_time()
        .expect("date");
    assert_eq!(joined.to_rfc3339(), "2020-01-02T00:00:00+00:00");
}

#[test]
fn test_raw_accessors() {
    let value = Value::from(RawValue::from(5));
    assert_eq!(value.raw(), &5);
    assert_eq!(value.into_raw(), RawValue::Int(5));
}
