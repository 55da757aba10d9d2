//! Headless floating-label form fields with attached validation.
//!
//! - [`validation`]: validators, the predefined set, and the per-field
//!   first-failure aggregation.
//! - [`field`]: the field controller and its visual state machine.
//! - [`form`]: the per-form registry and the "validate everything"
//!   trigger used to gate submits.
//!
//! Rendering is left to the host; it reads [`State`] bindings and
//! [`field::FieldState`].

pub mod field;
pub mod form;
pub mod state;
pub mod validation;

pub use state::State;

pub mod prelude {
    pub use crate::field::{Field, FieldId, FieldKind, FieldState};
    pub use crate::form::{Form, FormConfig, Invocation};
    pub use crate::state::State;
    pub use crate::validation::{Check, FieldResult, Message, Rule, ValidationStorage, Validator};
}
