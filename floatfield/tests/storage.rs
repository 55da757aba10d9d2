//! Tests for per-field validator aggregation.

use floatfield::validation::{FieldResult, Message, ValidationStorage, Validator};

fn storage(validators: Vec<Validator>, input: &str) -> ValidationStorage {
    let mut storage = ValidationStorage::new();
    storage.set_validators(validators);
    storage.set_input(input);
    storage
}

#[test]
fn test_all_pass() {
    let s = storage(
        vec![
            Validator::non_empty("Field is empty"),
            Validator::email("Email is not valid"),
        ],
        "john.doe@x.co",
    );
    assert_eq!(s.validate(), FieldResult::Valid);
    assert_eq!(s.validate().into_parts(), (true, None));
}

#[test]
fn test_first_failure_wins() {
    let s = storage(
        vec![
            Validator::non_empty("Field is empty"),
            Validator::email("Email is not valid"),
            Validator::name("Letters only"),
        ],
        "jane@",
    );
    let result = s.validate();
    assert!(result.is_invalid());
    assert_eq!(result.message(), Some(&Message::new("Email is not valid")));
}

#[test]
fn test_stops_at_first_failure() {
    let later = Validator::custom(
        |_: &str| -> bool { panic!("validators after a failure must not run") },
        "never",
    );
    let s = storage(vec![Validator::non_empty("Field is empty"), later], "");
    assert_eq!(s.validate().message().unwrap().key, "Field is empty");
}

#[test]
fn test_idempotent() {
    let s = storage(
        vec![Validator::zip_code("Zip code is not valid")],
        "1234",
    );
    assert_eq!(s.validate(), s.validate());
}

#[test]
fn test_order_changes_message_not_verdict() {
    let empty = Validator::non_empty("Field is empty");
    let zip = Validator::zip_code("Zip code is not valid");

    let forward = storage(vec![empty.clone(), zip.clone()], "");
    let backward = storage(vec![zip, empty], "");

    let forward = forward.validate();
    let backward = backward.validate();
    assert_eq!(forward.is_valid(), backward.is_valid());
    assert_eq!(forward.message().unwrap().key, "Field is empty");
    assert_eq!(backward.message().unwrap().key, "Zip code is not valid");
}

#[test]
fn test_set_validators_overwrites() {
    let mut s = storage(vec![Validator::non_empty("Field is empty")], "");
    assert!(s.validate().is_invalid());

    s.set_validators([Validator::zip_code("Zip code is not valid")]);
    assert_eq!(s.validators().len(), 1);
    s.set_input("12345");
    assert!(s.validate().is_valid());
}

#[test]
fn test_empty_storage_is_valid() {
    let s = ValidationStorage::new();
    assert!(s.is_empty());
    assert!(s.validate().is_valid());
}
