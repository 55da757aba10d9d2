//! The validator handle shared between a field and its form.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, RwLock};

use log::trace;

use super::error::PatternError;
use super::message::Message;
use super::rule::{Check, Rule};

/// Unique identifier for a validator instance
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValidatorId(usize);

impl ValidatorId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for ValidatorId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__validator_{}", self.0)
    }
}

#[derive(Debug)]
struct ValidatorInner {
    id: ValidatorId,
    rule: Rule,
    message: RwLock<Message>,
    /// Text under test, pushed in by the owning field
    input: RwLock<String>,
}

/// A single pass/fail check with a failure message.
///
/// `Validator` is a handle: clones share one instance, which is how a
/// field and the form it publishes to see the same validator. The input
/// text is set by the owning field before each validation pass and
/// [`evaluate`](Self::evaluate) only reads it.
///
/// Equality is identity based. Two validators are equal when they are
/// the same instance, hold the same input and carry the same message
/// key. Independently built validators never compare equal, even with
/// identical rules.
///
/// # Example
///
/// ```
/// use floatfield::validation::Validator;
///
/// let email = Validator::email("Email is not valid");
/// email.set_input("john.doe@x.co");
/// assert!(email.evaluate());
///
/// email.set_input("john.doe@x");
/// assert!(!email.evaluate());
/// ```
#[derive(Debug, Clone)]
pub struct Validator {
    inner: Arc<ValidatorInner>,
}

impl Validator {
    /// Create a validator from a rule and its failure message.
    pub fn new(rule: Rule, message: impl Into<Message>) -> Self {
        Self {
            inner: Arc::new(ValidatorInner {
                id: ValidatorId::new(),
                rule,
                message: RwLock::new(message.into()),
                input: RwLock::new(String::new()),
            }),
        }
    }

    /// Fails on empty input.
    pub fn non_empty(message: impl Into<Message>) -> Self {
        Self::new(Rule::NonEmpty, message)
    }

    /// Fails unless the input is letters, hyphens and whitespace.
    pub fn name(message: impl Into<Message>) -> Self {
        Self::new(Rule::Name, message)
    }

    /// Fails unless the input looks like an email address.
    pub fn email(message: impl Into<Message>) -> Self {
        Self::new(Rule::Email, message)
    }

    /// Fails unless the input is a 5 or 5+4 digit zip code.
    pub fn zip_code(message: impl Into<Message>) -> Self {
        Self::new(Rule::ZipCode, message)
    }

    /// Fails unless the input is an acceptable password.
    pub fn password(message: impl Into<Message>) -> Self {
        Self::new(Rule::Password, message)
    }

    /// Fails unless the input equals `text_to_match` exactly.
    ///
    /// `text_to_match` is captured now. When the compared value changes,
    /// build a new validator and attach it again.
    pub fn confirm_match(text_to_match: impl Into<String>, message: impl Into<Message>) -> Self {
        Self::new(
            Rule::ConfirmMatch {
                text_to_match: text_to_match.into(),
            },
            message,
        )
    }

    /// Fails unless the whole input matches `pattern`.
    pub fn pattern(pattern: &str, message: impl Into<Message>) -> Result<Self, PatternError> {
        Ok(Self::new(Rule::pattern(pattern)?, message))
    }

    /// Fails when `check` returns false.
    pub fn custom(check: impl Check + 'static, message: impl Into<Message>) -> Self {
        Self::new(Rule::custom(check), message)
    }

    /// Get the unique ID for this validator
    pub fn id(&self) -> ValidatorId {
        self.inner.id
    }

    /// The rule this validator applies.
    pub fn rule(&self) -> &Rule {
        &self.inner.rule
    }

    /// Replace the text under test.
    pub fn set_input(&self, text: impl Into<String>) {
        if let Ok(mut guard) = self.inner.input.write() {
            *guard = text.into();
        }
    }

    /// Current text under test.
    pub fn input(&self) -> String {
        self.inner
            .input
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Failure message.
    pub fn message(&self) -> Message {
        self.inner
            .message
            .read()
            .map(|guard| guard.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    /// Replace the failure message.
    pub fn set_message(&self, message: impl Into<Message>) {
        if let Ok(mut guard) = self.inner.message.write() {
            *guard = message.into();
        }
    }

    /// Test the current input. Never fails, never mutates.
    pub fn evaluate(&self) -> bool {
        let passed = match self.inner.input.read() {
            Ok(guard) => self.inner.rule.check(&guard),
            Err(poisoned) => self.inner.rule.check(&poisoned.into_inner()),
        };
        trace!(
            "{} ({}) evaluated: {}",
            self.inner.id,
            self.inner.rule.kind(),
            if passed { "pass" } else { "fail" }
        );
        passed
    }

    fn message_key(&self) -> String {
        match self.inner.message.read() {
            Ok(guard) => guard.key.clone(),
            Err(poisoned) => poisoned.into_inner().key.clone(),
        }
    }
}

impl PartialEq for Validator {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
            && self.input() == other.input()
            && self.message_key() == other.message_key()
    }
}
