//! Construction errors for validators.

use thiserror::Error;

/// Errors that can occur when building a validator from host input.
///
/// Failing input is never an error; it is reported through
/// [`FieldResult`](super::FieldResult).
#[derive(Debug, Clone, Error)]
pub enum PatternError {
    /// The supplied regular expression does not compile.
    #[error("Invalid validation pattern '{pattern}': {source}")]
    Invalid {
        /// The pattern as written by the host.
        pattern: String,
        /// Underlying regex compile error.
        #[source]
        source: regex::Error,
    },
}
