use std::fmt;

use log::{debug, trace};

use crate::form::{Form, InvocationWatcher};
use crate::state::State;
use crate::validation::{FieldResult, Message, ValidationStorage, Validator};

use super::{FieldId, FieldState};

/// Which flavour of field this is.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FieldKind {
    /// Editable text input.
    ///
    /// With no validators attached, validation is skipped entirely: the
    /// field never reports an error and never clears one set elsewhere.
    #[default]
    Text,
    /// Read-only field that opens something when tapped (a picker, a
    /// sheet). Validation always runs, so with no validators attached
    /// it clears the error slot.
    ReadOnly,
}

/// Headless floating-label text field.
///
/// The host keeps clones of the `text` and `error` bindings and renders
/// from them plus [`state`](Self::state). The field writes the error
/// slot whenever it validates.
///
/// # Example
///
/// ```
/// use floatfield::State;
/// use floatfield::field::{Field, FieldState};
/// use floatfield::validation::Validator;
///
/// let text = State::new(String::new());
/// let error = State::new(None);
///
/// let mut email = Field::new("Email", text.clone(), error.clone());
/// email.add_validators([
///     Validator::non_empty("Field is empty"),
///     Validator::email("Email is not valid"),
/// ]);
///
/// email.set_focused(true);
/// email.set_text("jane@");
/// email.set_focused(false);
///
/// assert_eq!(email.state(), FieldState::Error);
/// assert_eq!(error.get().unwrap().key, "Email is not valid");
/// ```
pub struct Field {
    id: FieldId,
    kind: FieldKind,
    placeholder: Message,
    description: Option<Message>,
    text: State<String>,
    error: State<Option<Message>>,
    /// Error slot value as of the last sync, to spot host writes
    error_seen: Option<Message>,
    storage: ValidationStorage,
    state: FieldState,
    enabled: bool,
    focused: bool,
    secure: bool,
    revealed: bool,
    on_tap: Option<Box<dyn FnMut() + Send>>,
    form: Option<Form>,
    watcher: Option<InvocationWatcher>,
}

impl Field {
    /// Create an editable field bound to the host's text and error slots.
    pub fn new(
        placeholder: impl Into<Message>,
        text: State<String>,
        error: State<Option<Message>>,
    ) -> Self {
        Self::with_kind(FieldKind::Text, placeholder.into(), text, error)
    }

    /// Create a read-only field bound to the host's text and error slots.
    pub fn read_only(
        placeholder: impl Into<Message>,
        text: State<String>,
        error: State<Option<Message>>,
    ) -> Self {
        Self::with_kind(FieldKind::ReadOnly, placeholder.into(), text, error)
    }

    fn with_kind(
        kind: FieldKind,
        placeholder: Message,
        text: State<String>,
        error: State<Option<Message>>,
    ) -> Self {
        let error_seen = error.get();
        let state = FieldState::initial(true).on_error_change(error_seen.is_some(), false);
        Self {
            id: FieldId::new(),
            kind,
            placeholder,
            description: None,
            text,
            error,
            error_seen,
            storage: ValidationStorage::new(),
            state,
            enabled: true,
            focused: false,
            secure: false,
            revealed: false,
            on_tap: None,
            form: None,
            watcher: None,
        }
    }

    /// Helper text shown under the field while there is no error.
    pub fn description(mut self, description: impl Into<Message>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Obscure the text until revealed.
    pub fn secure(mut self) -> Self {
        self.secure = true;
        self
    }

    /// Action run when a read-only field is tapped.
    pub fn on_tap(mut self, action: impl FnMut() + Send + 'static) -> Self {
        self.on_tap = Some(Box::new(action));
        self
    }

    // -------------------------------------------------------------------------
    // Read methods
    // -------------------------------------------------------------------------

    /// Get the unique ID for this field
    pub fn id(&self) -> FieldId {
        self.id
    }

    /// Get the field kind
    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Get the current visual state
    pub fn state(&self) -> FieldState {
        self.state
    }

    /// Get the floating placeholder
    pub fn placeholder(&self) -> &Message {
        &self.placeholder
    }

    /// Get the current text value
    pub fn text(&self) -> String {
        self.text.get()
    }

    /// Get the current error message (if any)
    pub fn error_message(&self) -> Option<Message> {
        self.error.get()
    }

    /// Text to show under the field: the error if set, else the description.
    pub fn caption(&self) -> Option<Message> {
        self.error.get().or_else(|| self.description.clone())
    }

    /// Attached validators in evaluation order
    pub fn validators(&self) -> &[Validator] {
        self.storage.validators()
    }

    /// Whether the host has the field enabled
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Whether the field has focus
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the text is obscured by default
    pub fn is_secure(&self) -> bool {
        self.secure
    }

    /// Whether a secure field is currently showing its text
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// The form this field publishes to (if any)
    pub fn form(&self) -> Option<&Form> {
        self.form.as_ref()
    }

    // -------------------------------------------------------------------------
    // Write methods
    // -------------------------------------------------------------------------

    /// Replace the attached validators.
    ///
    /// The new validators get the current text as input and are published
    /// to the attached form in place of the previous ones.
    pub fn add_validators(&mut self, validators: impl IntoIterator<Item = Validator>) {
        self.storage.set_validators(validators);
        self.refresh_input();
        self.publish();
    }

    /// Attach to a form, leaving any previous one.
    ///
    /// The field publishes its validators and starts watching the form's
    /// invoked signal.
    pub fn attach(&mut self, form: &Form) {
        self.detach();
        self.watcher = Some(form.subscribe());
        self.form = Some(form.clone());
        self.publish();
    }

    /// Leave the attached form, withdrawing this field's validators.
    pub fn detach(&mut self) {
        self.watcher = None;
        if let Some(form) = self.form.take() {
            form.withdraw(self.id);
        }
    }

    /// Set the text, as typed by the user.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text.set(text.into());
        self.refresh_input();
    }

    /// Reset the state as when the field first appears.
    pub fn appear(&mut self) {
        self.state = FieldState::initial(self.enabled);
    }

    /// Focus gained or lost. Losing focus validates the field.
    pub fn set_focused(&mut self, focused: bool) {
        if self.focused == focused {
            return;
        }
        self.focused = focused;
        self.state = self.state.on_focus_change(focused);
        trace!("{} focus {} -> {:?}", self.id, focused, self.state);
        if !focused {
            self.validate();
        }
    }

    /// Tap on a read-only field: take focus and run the tap action.
    pub fn tap(&mut self) {
        if !self.enabled {
            return;
        }
        self.set_focused(true);
        if let Some(action) = self.on_tap.as_mut() {
            action();
        }
    }

    /// The host enabled or disabled the field.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        self.state = self.state.on_enabled_change(enabled);
    }

    /// Write the error slot from outside the validators.
    pub fn set_error_message(&mut self, message: Option<Message>) {
        self.error.set(message.clone());
        self.apply_error(message);
    }

    /// Show or hide the text of a secure field.
    pub fn toggle_reveal(&mut self) {
        if self.secure {
            self.revealed = !self.revealed;
        }
    }

    // -------------------------------------------------------------------------
    // Validation
    // -------------------------------------------------------------------------

    /// Run this field's validators and update the error slot and state.
    ///
    /// An editable field with no validators skips validation and reports
    /// valid without touching the error slot.
    pub fn validate(&mut self) -> FieldResult {
        if self.kind == FieldKind::Text && self.storage.is_empty() {
            trace!("{} has no validators, skipping", self.id);
            return FieldResult::Valid;
        }

        self.refresh_input();
        let result = self.storage.validate();
        let message = result.message().cloned();
        debug!(
            "{} validated: {}",
            self.id,
            message.as_ref().map_or("valid", Message::display)
        );
        self.error.set(message.clone());
        self.apply_error(message);
        result
    }

    /// Catch up with the host and the form without blocking.
    ///
    /// Re-reads the text binding into the validators, picks up error slot
    /// writes made directly on the binding, and validates if the form
    /// triggered since the last call.
    pub fn sync(&mut self) -> Option<FieldResult> {
        self.refresh_input();

        let current = self.error.get();
        if current != self.error_seen {
            self.apply_error(current);
        }

        let invoked = self.watcher.as_mut().and_then(InvocationWatcher::poll);
        invoked.map(|_| self.validate())
    }

    /// Wait for the attached form's next trigger, then validate.
    ///
    /// Returns `None` when the field is not attached or the form is gone.
    pub async fn invoked(&mut self) -> Option<FieldResult> {
        self.watcher.as_mut()?.next().await?;
        Some(self.validate())
    }

    fn apply_error(&mut self, message: Option<Message>) {
        self.state = self.state.on_error_change(message.is_some(), self.focused);
        self.error_seen = message;
    }

    fn refresh_input(&self) {
        let text = self.text.get();
        self.storage.set_input(&text);
    }

    fn publish(&self) {
        if let Some(form) = &self.form {
            form.publish_bound(self.id, self.text.clone(), self.storage.validators().to_vec());
        }
    }
}

impl fmt::Debug for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Field")
            .field("id", &self.id)
            .field("kind", &self.kind)
            .field("placeholder", &self.placeholder)
            .field("state", &self.state)
            .field("enabled", &self.enabled)
            .field("focused", &self.focused)
            .field("validators", &self.storage.validators().len())
            .finish_non_exhaustive()
    }
}

impl Drop for Field {
    fn drop(&mut self) {
        self.detach();
    }
}
