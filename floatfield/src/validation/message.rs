//! Display messages attached to validators.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A failure message shown under a field.
///
/// `key` is the literal the host wrote (and the lookup key for any
/// translation table). `localized` carries an already translated string
/// when the host has one.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Message {
    /// Lookup key, also the fallback display text.
    pub key: String,
    /// Translated display text, if resolved.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub localized: Option<String>,
}

impl Message {
    /// Create a key-only message.
    pub fn new(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            localized: None,
        }
    }

    /// Attach a translated display string.
    pub fn localized(mut self, text: impl Into<String>) -> Self {
        self.localized = Some(text.into());
        self
    }

    /// The text to render.
    pub fn display(&self) -> &str {
        self.localized.as_deref().unwrap_or(&self.key)
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display())
    }
}

impl From<&str> for Message {
    fn from(key: &str) -> Self {
        Self::new(key)
    }
}

impl From<String> for Message {
    fn from(key: String) -> Self {
        Self::new(key)
    }
}
