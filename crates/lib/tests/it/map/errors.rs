//! Map error classification tests

use tessella::{
    Error, ErrorKind, Map,
    map::MapError,
    raw::{Group, RawValue},
};

use crate::helpers::*;

#[test]
fn test_error_messages_name_the_key() {
    let user = sample_user();

    let err = user.get("phone").expect_err("absent key");
    assert_eq!(err.to_string(), "Key \"phone\" does not exist");

    let err = user.rename("id", "name").expect_err("existing target");
    assert_eq!(err.to_string(), "Key \"name\" already exists");

    let err = user.pick(&["a", "b"]).expect_err("absent keys");
    assert_eq!(err.to_string(), "Keys not found: a, b");
}

#[test]
fn test_map_error_helpers() {
    let err = MapError::KeyExists {
        key: "email".to_string(),
    };
    assert!(err.is_conflict());
    assert!(!err.is_not_found());
    assert_eq!(err.key(), Some("email"));

    let err = MapError::KeysNotFound {
        keys: vec!["a".to_string(), "b".to_string()],
    };
    assert!(err.is_not_found());
    assert_eq!(err.key(), None);
    assert_eq!(err.missing_keys(), vec!["a", "b"]);
}

#[test]
fn test_crate_error_classification() {
    let cases: Vec<(Error, ErrorKind)> = vec![
        (
            Map::try_from_raw(RawValue::from("text")).expect_err("scalar input"),
            ErrorKind::ShapeMismatch,
        ),
        (
            Map::from_group(Group::list([1])).expect_err("index key"),
            ErrorKind::ShapeMismatch,
        ),
        (
            Map::new().get("x").expect_err("absent"),
            ErrorKind::KeyNotFound,
        ),
        (
            Map::new().has_all(&[]).expect_err("no keys"),
            ErrorKind::ArgumentViolation,
        ),
        (
            map_of(&[("a", "1"), ("b", "2")])
                .map_keys(|_| "same".to_string())
                .expect_err("collision"),
            ErrorKind::KeyConflict,
        ),
    ];

    for (err, expected) in cases {
        assert_eq!(err.kind(), expected, "Misclassified: {err}");
        assert_eq!(err.module(), "map");
    }
}

#[test]
fn test_invalid_input_names_the_type() {
    let err = Map::try_from_raw(RawValue::from(1.5)).expect_err("float input");
    assert!(err.to_string().contains("float"), "Unexpected message: {err}");
}
