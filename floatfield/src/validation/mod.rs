//! Field validation for floatfield.
//!
//! A [`Validator`] is one pass/fail check with a failure message. A field
//! keeps its validators in a [`ValidationStorage`], which runs them in
//! order and reports the first failure as a [`FieldResult`].
//!
//! # Example
//!
//! ```
//! use floatfield::validation::{ValidationStorage, Validator};
//!
//! let mut storage = ValidationStorage::new();
//! storage.set_validators([
//!     Validator::non_empty("Password is empty"),
//!     Validator::password("Password must have 8 to 16 characters"),
//! ]);
//!
//! storage.set_input("Abc12345!");
//! assert!(storage.validate().is_valid());
//! ```

mod error;
mod message;
mod result;
mod rule;
mod storage;
mod validator;

pub use error::PatternError;
pub use message::Message;
pub use result::FieldResult;
pub use rule::{Check, Rule};
pub use storage::ValidationStorage;
pub use validator::{Validator, ValidatorId};
