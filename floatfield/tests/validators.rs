//! Tests for the predefined validators and validator identity.

use floatfield::validation::{Check, Message, Rule, Validator};

fn passes(validator: &Validator, text: &str) -> bool {
    validator.set_input(text);
    validator.evaluate()
}

// =============================================================================
// Predefined Validators
// =============================================================================

#[test]
fn test_non_empty() {
    let v = Validator::non_empty("Field is empty");
    assert!(!passes(&v, ""));
    assert!(passes(&v, " "));
    assert!(passes(&v, "x"));
}

#[test]
fn test_name() {
    let v = Validator::name("Only letters");
    assert!(passes(&v, "Anne-Marie"));
    assert!(passes(&v, "Jean Luc"));
    assert!(!passes(&v, "Anne2"));
    assert!(!passes(&v, "O'Brien"));
    assert!(!passes(&v, ""));
}

#[test]
fn test_email() {
    let v = Validator::email("Email is not valid");
    assert!(passes(&v, "john.doe@x.co"));
    assert!(passes(&v, "first+tag@mail.example.org"));
    assert!(!passes(&v, "john.doe@x"));
    assert!(!passes(&v, "john.doe@x.comma"));
    assert!(!passes(&v, "@x.co"));
    assert!(!passes(&v, "john doe@x.co"));
}

#[test]
fn test_zip_code() {
    let v = Validator::zip_code("Zip code is not valid");
    assert!(passes(&v, "12345"));
    assert!(passes(&v, "12345-6789"));
    assert!(!passes(&v, "1234"));
    assert!(!passes(&v, "123456"));
    assert!(!passes(&v, "12345-678"));
    assert!(!passes(&v, "abcde"));
}

#[test]
fn test_password() {
    let v = Validator::password("Weak password");
    assert!(passes(&v, "Abc12345!"));
    assert!(passes(&v, "a1.bcdef"));
    assert!(!passes(&v, "abcdefgh"), "no digit or special");
    assert!(!passes(&v, "abcdefg1"), "no special");
    assert!(!passes(&v, "12345678!"), "no letter");
    assert!(!passes(&v, "Ab1!"), "too short");
    assert!(!passes(&v, "Abc12345!Abc12345"), "17 characters");
    assert!(!passes(&v, "Abc 12345!"), "space is not allowed");
    assert!(!passes(&v, "Abc12345!-"), "hyphen is not allowed");
}

#[test]
fn test_confirm_match_is_case_sensitive() {
    let v = Validator::confirm_match("secret", "Passwords are different");
    assert!(passes(&v, "secret"));
    assert!(!passes(&v, "Secret"));
    assert!(!passes(&v, ""));
}

#[test]
fn test_confirm_match_captures_value() {
    let mut password = String::from("first");
    let v = Validator::confirm_match(password.clone(), "Passwords are different");
    password.push_str("-changed");
    assert!(passes(&v, "first"));
    assert!(!passes(&v, &password));
}

#[test]
fn test_pattern() {
    let v = Validator::pattern(r"[A-Z]{3}-\d{3}", "Plate is not valid").unwrap();
    assert!(passes(&v, "ABC-123"));
    assert!(!passes(&v, "xABC-123"));
    assert!(Validator::pattern("[", "broken").is_err());
}

struct MinLength(usize);

impl Check for MinLength {
    fn check(&self, text: &str) -> bool {
        text.chars().count() >= self.0
    }
}

#[test]
fn test_custom_check() {
    let v = Validator::custom(MinLength(3), "Too short");
    assert!(!passes(&v, "ab"));
    assert!(passes(&v, "abc"));
    assert_eq!(v.rule().kind(), "custom");
}

#[test]
fn test_evaluate_has_no_side_effects() {
    let v = Validator::email("Email is not valid");
    v.set_input("john.doe@x.co");
    assert!(v.evaluate());
    assert!(v.evaluate());
    assert_eq!(v.input(), "john.doe@x.co");
}

// =============================================================================
// Messages
// =============================================================================

#[test]
fn test_message_display_prefers_localized() {
    let message = Message::new("error.email").localized("Adresse e-mail invalide");
    assert_eq!(message.display(), "Adresse e-mail invalide");
    assert_eq!(Message::new("Field is empty").to_string(), "Field is empty");
}

#[test]
fn test_set_message() {
    let v = Validator::non_empty("Field is empty");
    v.set_message("Required");
    assert_eq!(v.message(), Message::new("Required"));
}

// =============================================================================
// Identity
// =============================================================================

#[test]
fn test_clone_is_same_validator() {
    let a = Validator::non_empty("Field is empty");
    let b = a.clone();
    a.set_input("shared");
    assert_eq!(b.input(), "shared");
    assert_eq!(a, b);
    assert_eq!(a.id(), b.id());
}

#[test]
fn test_identical_validators_are_not_equal() {
    let a = Validator::non_empty("Field is empty");
    let b = Validator::non_empty("Field is empty");
    a.set_input("x");
    b.set_input("x");
    assert_ne!(a, b);
    assert_ne!(a.id(), b.id());
}

#[test]
fn test_rule_of_validator() {
    let v = Validator::new(Rule::ZipCode, "Zip code is not valid");
    assert_eq!(v.rule().kind(), "zip_code");
}
