// File: src/error.rs
// Purpose: Hard-failure taxonomy for the dispatch engine

use thiserror::Error;

/// Failures that abort a single dispatch call.
///
/// Expected validation failures are data (`FieldError`), never errors.
/// These variants mark markup/usage bugs that must not be masked by
/// treating the field as valid.
#[derive(Debug, Error)]
pub enum DispatchError {
    /// An input element whose `type` has no rule table.
    #[error("no validation rules for input type `{type_name}`")]
    UnknownControlType { type_name: String },

    /// A `pattern` attribute that does not compile as a regular expression.
    #[error("invalid `pattern` attribute `{pattern}`")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}
