use super::message::Message;

/// Outcome of validating one field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum FieldResult {
    /// Every attached validator passed.
    #[default]
    Valid,
    /// A validator failed; `message` is the first failing one's.
    Invalid {
        /// Failure message to show under the field.
        message: Message,
    },
}

impl FieldResult {
    /// Check if the field passed validation.
    pub fn is_valid(&self) -> bool {
        matches!(self, Self::Valid)
    }

    /// Check if the field failed validation.
    pub fn is_invalid(&self) -> bool {
        !self.is_valid()
    }

    /// Get the failure message (if any).
    pub fn message(&self) -> Option<&Message> {
        match self {
            Self::Valid => None,
            Self::Invalid { message } => Some(message),
        }
    }

    /// Split into `(valid, message)`.
    pub fn into_parts(self) -> (bool, Option<Message>) {
        match self {
            Self::Valid => (true, None),
            Self::Invalid { message } => (false, Some(message)),
        }
    }
}
