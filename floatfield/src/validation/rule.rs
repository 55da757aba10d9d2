//! Predicates behind validators.

use std::fmt;
use std::sync::{Arc, LazyLock};

use regex::Regex;

use super::error::PatternError;

static NAME: LazyLock<Regex> = LazyLock::new(|| predefined(r"^[A-Za-z\-\s]+$"));

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| predefined(r"^\w+([.+-]?\w+)*@\w+([.-]?\w+)*(\.\w{2,3})+$"));

static ZIP_CODE: LazyLock<Regex> = LazyLock::new(|| predefined(r"^\d{5}(-\d{4})?$"));

// The password rule needs lookaheads, which `regex` does not support. The
// allowed alphabet and length are one anchored match, the three "at least
// one of" requirements are separate searches.
static PASSWORD_ALPHABET: LazyLock<Regex> =
    LazyLock::new(|| predefined(r"^[A-Za-z\d!@#$%^&*()_+.]{8,16}$"));
static PASSWORD_LETTER: LazyLock<Regex> = LazyLock::new(|| predefined(r"[a-zA-Z]"));
static PASSWORD_DIGIT: LazyLock<Regex> = LazyLock::new(|| predefined(r"\d"));
static PASSWORD_SPECIAL: LazyLock<Regex> = LazyLock::new(|| predefined(r"[!@#$%^&*()_+.]"));

/// Compile a built-in pattern. A typo here is a bug in this crate.
fn predefined(pattern: &str) -> Regex {
    match Regex::new(pattern) {
        Ok(re) => re,
        Err(e) => panic!("built-in validation pattern {pattern:?} does not compile: {e}"),
    }
}

/// A host supplied predicate.
///
/// Implement this to add validators beyond the predefined set. Closures
/// taking `&str` implement it already.
pub trait Check: Send + Sync {
    /// Return true when `text` is acceptable.
    fn check(&self, text: &str) -> bool;
}

impl<F> Check for F
where
    F: Fn(&str) -> bool + Send + Sync,
{
    fn check(&self, text: &str) -> bool {
        self(text)
    }
}

/// What a validator tests its input against.
#[derive(Clone)]
pub enum Rule {
    /// Input is not empty.
    NonEmpty,
    /// Letters, hyphens and whitespace only.
    Name,
    /// Email address shape.
    Email,
    /// US zip code, `12345` or `12345-6789`.
    ZipCode,
    /// 8 to 16 characters with at least one letter, one digit and one of
    /// `!@#$%^&*()_+.`.
    Password,
    /// Input equals a value captured when the rule was built.
    ///
    /// The captured value never follows later edits of the field it came
    /// from. Rebuild the validator when it changes.
    ConfirmMatch {
        /// Value the input must equal, case-sensitive.
        text_to_match: String,
    },
    /// Host supplied regex, anchored to the whole input.
    Pattern(Regex),
    /// Host supplied predicate.
    Custom(Arc<dyn Check>),
}

impl Rule {
    /// Build a [`Rule::Pattern`] from a host pattern.
    ///
    /// The pattern is wrapped as `^(?:pattern)$`, so only whole-input
    /// matches pass.
    pub fn pattern(pattern: &str) -> Result<Self, PatternError> {
        Regex::new(&format!("^(?:{pattern})$"))
            .map(Rule::Pattern)
            .map_err(|source| PatternError::Invalid {
                pattern: pattern.to_string(),
                source,
            })
    }

    /// Build a [`Rule::Custom`] from a predicate.
    pub fn custom(check: impl Check + 'static) -> Self {
        Rule::Custom(Arc::new(check))
    }

    /// Test `text` against this rule.
    pub fn check(&self, text: &str) -> bool {
        match self {
            Rule::NonEmpty => !text.is_empty(),
            Rule::Name => NAME.is_match(text),
            Rule::Email => EMAIL.is_match(text),
            Rule::ZipCode => ZIP_CODE.is_match(text),
            Rule::Password => {
                PASSWORD_ALPHABET.is_match(text)
                    && PASSWORD_LETTER.is_match(text)
                    && PASSWORD_DIGIT.is_match(text)
                    && PASSWORD_SPECIAL.is_match(text)
            }
            Rule::ConfirmMatch { text_to_match } => text == text_to_match,
            Rule::Pattern(re) => re.is_match(text),
            Rule::Custom(check) => check.check(text),
        }
    }

    /// Short name for logs.
    pub fn kind(&self) -> &'static str {
        match self {
            Rule::NonEmpty => "non_empty",
            Rule::Name => "name",
            Rule::Email => "email",
            Rule::ZipCode => "zip_code",
            Rule::Password => "password",
            Rule::ConfirmMatch { .. } => "confirm_match",
            Rule::Pattern(_) => "pattern",
            Rule::Custom(_) => "custom",
        }
    }
}

impl fmt::Debug for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rule::ConfirmMatch { .. } => f
                .debug_struct("ConfirmMatch")
                .field("text_to_match", &"<redacted>")
                .finish(),
            Rule::Pattern(re) => f.debug_tuple("Pattern").field(&re.as_str()).finish(),
            Rule::Custom(_) => f.write_str("Custom(..)"),
            Rule::NonEmpty => f.write_str("NonEmpty"),
            Rule::Name => f.write_str("Name"),
            Rule::Email => f.write_str("Email"),
            Rule::ZipCode => f.write_str("ZipCode"),
            Rule::Password => f.write_str("Password"),
        }
    }
}
