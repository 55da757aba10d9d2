//! Per-field validator list with first-failure semantics.

use log::debug;

use super::result::FieldResult;
use super::validator::Validator;

/// Ordered validators attached to one field.
///
/// Validators run in attachment order and evaluation stops at the first
/// failure, whose message becomes the field's error.
///
/// # Example
///
/// ```
/// use floatfield::validation::{ValidationStorage, Validator};
///
/// let mut storage = ValidationStorage::new();
/// storage.set_validators([
///     Validator::non_empty("Field is empty"),
///     Validator::zip_code("Zip code is not valid"),
/// ]);
///
/// storage.set_input("");
/// assert_eq!(storage.validate().message().unwrap().key, "Field is empty");
///
/// storage.set_input("12345-6789");
/// assert!(storage.validate().is_valid());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ValidationStorage {
    validators: Vec<Validator>,
}

impl ValidationStorage {
    /// Create an empty storage.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the attached validators. Never additive.
    pub fn set_validators(&mut self, validators: impl IntoIterator<Item = Validator>) {
        self.validators = validators.into_iter().collect();
    }

    /// Attached validators in evaluation order.
    pub fn validators(&self) -> &[Validator] {
        &self.validators
    }

    /// Whether no validator is attached.
    pub fn is_empty(&self) -> bool {
        self.validators.is_empty()
    }

    /// Push `text` into every attached validator.
    pub fn set_input(&self, text: &str) {
        for validator in &self.validators {
            validator.set_input(text);
        }
    }

    /// Run the validators in order, stopping at the first failure.
    ///
    /// An empty storage is valid.
    pub fn validate(&self) -> FieldResult {
        match self.validators.iter().find(|v| !v.evaluate()) {
            Some(failed) => {
                debug!("{} failed ({})", failed.id(), failed.rule().kind());
                FieldResult::Invalid {
                    message: failed.message(),
                }
            }
            None => FieldResult::Valid,
        }
    }
}
