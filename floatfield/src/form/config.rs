//! Form configuration types.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// How long the invoked signal stays raised after the latest trigger.
pub const DEFAULT_RESET_DELAY: Duration = Duration::from_secs(1);

/// Per-form configuration.
///
/// Deserializes from host settings, with every key optional:
///
/// ```json
/// { "name": "signup", "reset_delay_ms": 250 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    /// Display name used in log lines.
    pub name: String,

    /// Time between a trigger and the invoked signal falling back to false.
    #[serde(rename = "reset_delay_ms", with = "millis")]
    pub reset_delay: Duration,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            name: "form".to_string(),
            reset_delay: DEFAULT_RESET_DELAY,
        }
    }
}

impl FormConfig {
    /// Create a new config with the given name.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    /// Set the invoked signal reset delay.
    pub fn reset_delay(mut self, delay: Duration) -> Self {
        self.reset_delay = delay;
        self
    }
}

mod millis {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(delay: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        let ms = u64::try_from(delay.as_millis()).unwrap_or(u64::MAX);
        serializer.serialize_u64(ms)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        u64::deserialize(deserializer).map(Duration::from_millis)
    }
}
