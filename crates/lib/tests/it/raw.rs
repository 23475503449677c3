//! Raw value model tests

use tessella::{
    Map,
    raw::{Group, Key, RawValue},
};

use crate::helpers::*;

#[test]
fn test_type_names_and_predicates() {
    assert_eq!(RawValue::Null.type_name(), "null");
    assert!(RawValue::Null.is_null());
    assert!(RawValue::from(1).is_scalar());
    assert!(RawValue::from(1.5).is_numeric());
    assert!(!RawValue::from("1").is_numeric());
    assert!(RawValue::Map(Map::new()).is_object_like());
    assert!(RawValue::object(Celsius(0.0)).is_object_like());
    assert!(!RawValue::Group(Group::new()).is_object_like());
}

#[test]
fn test_strict_equality() {
    assert_ne!(RawValue::Int(1), RawValue::Float(1.0));
    assert_ne!(RawValue::from("1"), RawValue::Int(1));
    assert_eq!(RawValue::from(Some(3)), RawValue::Int(3));
    assert_eq!(RawValue::from(None::<i64>), RawValue::Null);
}

#[test]
fn test_objects_compare_by_identity() {
    let object = RawValue::object(Celsius(1.0));
    assert_eq!(object, object.clone());
    assert_ne!(object, RawValue::object(Celsius(1.0)));
}

#[test]
fn test_group_push_follows_largest_index() {
    let mut group = Group::new();
    group.insert(5, "five").push("six").insert("name", "n").push("seven");

    let keys: Vec<Key> = group.keys().cloned().collect();
    assert_eq!(
        keys,
        vec![Key::Index(5), Key::Index(6), Key::from("name"), Key::Index(7)]
    );
}

#[test]
fn test_vec_becomes_list_group() {
    let raw = RawValue::from(vec!["a", "b"]);
    assert_eq!(raw, RawValue::Group(Group::list(["a", "b"])));
}

#[test]
fn test_exported_forms() {
    let user = RawValue::object(UserMock::new("Ann", &["dev"]));
    assert!(user.exported_group().is_some());
    assert!(user.exported_scalar().is_none());

    let temperature = RawValue::object(Celsius(2.5));
    assert!(temperature.exported_group().is_none());
    assert_eq!(temperature.exported_scalar(), Some(RawValue::Float(2.5)));
    assert_eq!(temperature.to_plain(), RawValue::Float(2.5));
}

#[test]
fn test_display() {
    let group = Group::record([("a", RawValue::from(1)), ("b", "x".into())]);
    assert_eq!(RawValue::Group(group).to_string(), "{a: 1, b: \"x\"}");
    assert_eq!(RawValue::Null.to_string(), "null");
}

#[cfg(feature = "json")]
mod json {
    use serde_json::json;
    use tessella::{Map, Value, raw::RawValue};

    #[test]
    fn test_json_document_into_map() {
        let document = json!({
            "id": 7,
            "name": "Ann",
            "tags": ["a", "b"],
            "profile": {"age": 30, "score": 9.5}
        });

        let map = Map::try_from_raw(RawValue::from(document)).expect("json object");
        assert_eq!(map.keys().values(), ["id", "name", "tags", "profile"]);

        let tags = map
            .get_value("tags")
            .expect("tags")
            .to_collection_value(false)
            .expect("collection")
            .strings()
            .expect("strings");
        assert_eq!(tags.values(), ["a", "b"]);

        let profile = map.get_value("profile").expect("profile").to_map().expect("map");
        assert_eq!(profile.get_value("score").expect("score").float().expect("float"), 9.5);
    }

    #[test]
    fn test_json_array_is_not_a_map() {
        let value = Value::new(json!([1, 2]));
        assert!(value.to_map().is_err());
        assert_eq!(
            value
                .to_collection_value(false)
                .expect("array")
                .integers()
                .expect("integers")
                .values(),
            [1, 2]
        );
    }
}
