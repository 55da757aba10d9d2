//! Form-level validation.
//!
//! Every field attached to a [`Form`] publishes its validators under its
//! own [`FieldId`]. The form keeps the union of all publications in
//! registration order and can validate all of them at once, which is what
//! a submit button should call before accepting the form.
//!
//! # Example
//!
//! ```
//! use floatfield::form::Form;
//! use floatfield::field::FieldId;
//! use floatfield::validation::Validator;
//!
//! let form = Form::new();
//! let email = Validator::email("Email is not valid");
//! email.set_input("jane@example.com");
//!
//! form.publish(FieldId::new(), vec![email]);
//! assert!(form.trigger_validate_all());
//! ```

mod config;
mod signal;

use std::sync::{Arc, RwLock};

use log::debug;
use uuid::Uuid;

use crate::field::FieldId;
use crate::state::State;
use crate::validation::Validator;

pub use config::{DEFAULT_RESET_DELAY, FormConfig};
pub use signal::{Invocation, InvocationWatcher};

use signal::InvokedSignal;

/// Unique identifier for a form.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct FormId(Uuid);

impl FormId {
    /// Create a new unique form ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Get the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for FormId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for FormId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validators published by one field.
#[derive(Debug)]
struct Publication {
    field: FieldId,
    /// Text binding the validators read from, when published by a field
    text: Option<State<String>>,
    validators: Vec<Validator>,
}

impl Publication {
    /// Push the bound text into the validators.
    fn refresh_input(&self) {
        if let Some(text) = &self.text {
            text.with(|text| {
                for validator in &self.validators {
                    validator.set_input(text.as_str());
                }
            });
        }
    }
}

#[derive(Debug, Default)]
struct FormInner {
    /// One entry per field, in first-publication order
    publications: Vec<Publication>,
    /// Union of all publications, rebuilt on every change
    aggregate: Vec<Validator>,
}

impl FormInner {
    fn rebuild(&mut self) {
        self.aggregate = self
            .publications
            .iter()
            .flat_map(|p| p.validators.iter().cloned())
            .collect();
    }
}

/// Registry of every validator published by the fields of one form.
///
/// `Form` is a handle; clones share the same registry and signal. The
/// form does not own validator lifetimes. Fields do, and withdraw their
/// publication when they go away.
#[derive(Debug, Clone)]
pub struct Form {
    id: FormId,
    config: Arc<FormConfig>,
    inner: Arc<RwLock<FormInner>>,
    signal: Arc<InvokedSignal>,
}

impl Form {
    /// Create a form with the default config.
    pub fn new() -> Self {
        Self::with_config(FormConfig::default())
    }

    /// Create a form with the given config.
    pub fn with_config(config: FormConfig) -> Self {
        Self {
            id: FormId::new(),
            signal: InvokedSignal::new(config.reset_delay),
            config: Arc::new(config),
            inner: Arc::new(RwLock::new(FormInner::default())),
        }
    }

    /// Get the unique ID for this form
    pub fn id(&self) -> FormId {
        self.id
    }

    /// The config this form was built with.
    pub fn config(&self) -> &FormConfig {
        &self.config
    }

    /// Publish `field`'s current validators.
    ///
    /// Replaces the field's previous publication in place, or appends a
    /// new one for a field the form has not seen. The validators are
    /// evaluated with whatever input they hold; use
    /// [`publish_bound`](Self::publish_bound) to have the form read the
    /// field's text itself.
    pub fn publish(&self, field: FieldId, validators: Vec<Validator>) {
        self.store(field, None, validators);
    }

    /// Publish `field`'s validators together with its text binding.
    ///
    /// Before each [`trigger_validate_all`](Self::trigger_validate_all)
    /// the form copies the binding's current text into these validators.
    pub fn publish_bound(&self, field: FieldId, text: State<String>, validators: Vec<Validator>) {
        self.store(field, Some(text), validators);
    }

    fn store(&self, field: FieldId, text: Option<State<String>>, validators: Vec<Validator>) {
        let Ok(mut inner) = self.inner.write() else {
            return;
        };
        match inner.publications.iter_mut().find(|p| p.field == field) {
            Some(existing) => {
                existing.text = text;
                existing.validators = validators;
            }
            None => inner.publications.push(Publication {
                field,
                text,
                validators,
            }),
        }
        inner.rebuild();
        debug!(
            "Form '{}': {} published, {} validators across {} fields",
            self.config.name,
            field,
            inner.aggregate.len(),
            inner.publications.len()
        );
    }

    /// Drop everything `field` published.
    pub fn withdraw(&self, field: FieldId) {
        let Ok(mut inner) = self.inner.write() else {
            return;
        };
        let before = inner.publications.len();
        inner.publications.retain(|p| p.field != field);
        if inner.publications.len() != before {
            inner.rebuild();
            debug!("Form '{}': {} withdrawn", self.config.name, field);
        }
    }

    /// Snapshot of all published validators in registration order.
    pub fn validators(&self) -> Vec<Validator> {
        self.inner
            .read()
            .map(|guard| guard.aggregate.clone())
            .unwrap_or_default()
    }

    /// Number of fields with a publication.
    pub fn field_count(&self) -> usize {
        self.inner
            .read()
            .map(|guard| guard.publications.len())
            .unwrap_or_default()
    }

    /// Validate the whole form.
    ///
    /// Raises the invoked signal so attached fields re-run their own
    /// validation, refreshes bound validators from their fields' current
    /// text, then evaluates every published validator in order and
    /// returns false at the first failure. The return value does not wait
    /// on the fields.
    ///
    /// The signal stays raised for the configured reset delay only when
    /// called inside a tokio runtime. Without one the reset cannot be
    /// scheduled and the signal is lowered before this returns; watchers
    /// still see the trigger through [`Invocation::generation`].
    pub fn trigger_validate_all(&self) -> bool {
        let generation = self.signal.pulse();
        let validators = match self.inner.read() {
            Ok(inner) => {
                inner.publications.iter().for_each(Publication::refresh_input);
                inner.aggregate.clone()
            }
            Err(_) => Vec::new(),
        };
        let valid = validators.iter().all(Validator::evaluate);
        debug!(
            "Form '{}': validation #{} over {} validators: {}",
            self.config.name,
            generation,
            validators.len(),
            if valid { "valid" } else { "invalid" }
        );
        valid
    }

    /// Whether a trigger is currently in flight.
    pub fn is_invoked(&self) -> bool {
        self.signal.current().active
    }

    /// Current invoked signal value.
    pub fn invocation(&self) -> Invocation {
        self.signal.current()
    }

    /// Watch the invoked signal.
    pub fn subscribe(&self) -> InvocationWatcher {
        self.signal.subscribe()
    }
}

impl Default for Form {
    fn default() -> Self {
        Self::new()
    }
}
