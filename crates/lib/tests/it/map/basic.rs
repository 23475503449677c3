//! Map construction and read tests

use tessella::{
    ErrorKind, Map,
    raw::{Group, RawValue},
};

use crate::helpers::*;

#[test]
fn test_new_map_is_empty() {
    let map = Map::new();
    assert!(map.is_empty());
    assert_eq!(map.len(), 0);
    assert!(map.keys().is_empty());
    assert!(map.to_array().is_empty());
}

#[test]
fn test_from_group_keeps_insertion_order() {
    let map = Map::from_group(Group::record([("b", 2), ("a", 1), ("c", 3)]))
        .expect("Failed to build map");

    assert_eq!(map.keys().values(), ["b", "a", "c"]);
    assert_eq!(map.values(), vec![RawValue::Int(2), RawValue::Int(1), RawValue::Int(3)]);
}

#[test]
fn test_from_group_rejects_index_keys() {
    let err = assert_kind(
        Map::from_group(Group::list(["a", "b"])),
        ErrorKind::ShapeMismatch,
    );
    assert_eq!(err.module(), "map");
}

#[test]
fn test_try_from_raw_inputs() {
    assert!(Map::try_from_raw(RawValue::Null).expect("null").is_empty());

    let user = sample_user();
    let copy = Map::try_from_raw(RawValue::Map(user.clone())).expect("map");
    assert!(copy.ptr_eq(&user));

    let exported = Map::try_from_raw(RawValue::object(UserMock::new("Ann", &["admin"])))
        .expect("object exporting a record");
    assert_eq!(*exported.get("name").expect("name"), "Ann");

    assert_kind(Map::try_from_raw(RawValue::from(42)), ErrorKind::ShapeMismatch);
    assert_kind(
        Map::try_from_raw(RawValue::object(Celsius(21.5))),
        ErrorKind::ShapeMismatch,
    );
}

#[test]
fn test_get_present_and_absent() {
    let user = sample_user();
    assert_eq!(*user.get("id").expect("id"), 1);
    assert_eq!(*user.get("email").expect("email"), "john@example.com");

    let err = assert_kind(user.get("phone"), ErrorKind::KeyNotFound);
    assert!(err.is_not_found());
    assert!(err.to_string().contains("phone"));
}

#[test]
fn test_get_or_default_rules() {
    let user = sample_user();

    // present keys ignore the default
    assert_eq!(user.get_or("name", "Jane", false).expect("present"), "John");

    assert_eq!(user.get_or("phone", "n/a", false).expect("non-null default"), "n/a");
    assert_eq!(
        user.get_or("phone", RawValue::Null, true).expect("allowed null"),
        RawValue::Null
    );
    assert_kind(user.get_or("phone", RawValue::Null, false), ErrorKind::KeyNotFound);
}

#[test]
fn test_get_or_returns_stored_null() {
    let map = Map::new().set("deleted_at", RawValue::Null);
    assert_eq!(
        map.get_or("deleted_at", "never", false).expect("stored null"),
        RawValue::Null
    );
}

#[test]
fn test_get_value_wraps_raw() {
    let user = sample_user();
    let value = user.get_value("id").expect("id");
    assert_eq!(value.raw(), &1);
    assert_eq!(value.int().expect("int"), 1);

    let fallback = user.get_value_or("age", 18, false).expect("default");
    assert_eq!(fallback.int().expect("int"), 18);
    assert_kind(user.get_value("age"), ErrorKind::KeyNotFound);
}

#[test]
fn test_has_variants() {
    let user = sample_user();
    assert!(user.has("id"));
    assert!(!user.has("phone"));

    assert!(user.has_one_of(&["phone", "email"]));
    assert!(!user.has_one_of(&["phone", "fax"]));
    assert!(!user.has_one_of(&[]));

    assert!(user.has_all(&["id", "name"]).expect("has_all"));
    assert!(!user.has_all(&["id", "phone"]).expect("has_all"));
    assert_kind(user.has_all(&[]), ErrorKind::ArgumentViolation);
}

#[test]
fn test_iteration_order() {
    let map = map_of(&[("z", "1"), ("y", "2")]);
    let pairs: Vec<(&str, &RawValue)> = map.iter().collect();
    assert_eq!(pairs.len(), 2);
    assert_eq!(pairs[0].0, "z");
    assert_eq!(pairs[1].0, "y");

    let mut keys = Vec::new();
    for (key, _) in &map {
        keys.push(key.to_string());
    }
    assert_eq!(keys, ["z", "y"]);
}

#[test]
fn test_equality_ignores_order() {
    let a = map_of(&[("x", "1"), ("y", "2")]);
    let b = map_of(&[("y", "2"), ("x", "1")]);
    assert!(a.equals(&b));
    assert_eq!(a, b);

    let c = map_of(&[("x", "1"), ("y", "3")]);
    assert_ne!(a, c);
}

#[test]
fn test_equality_is_strict_on_numeric_types() {
    let int = Map::new().set("n", 1);
    let float = Map::new().set("n", 1.0);
    assert!(!int.equals(&float));
}
