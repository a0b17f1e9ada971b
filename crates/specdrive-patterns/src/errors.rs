//! Error types for the pattern utilities.

use thiserror::Error;

/// Error raised when a rewritten condition cannot be compiled into a
/// regular expression.
///
/// The rewritten condition embeds the original line's unquoted text
/// verbatim, so lines containing regex metacharacters (an unescaped `(`,
/// for instance) can produce an uncompilable source.
#[derive(Debug, Error)]
#[error("condition {condition:?} is not a valid regular expression: {source}")]
pub struct ConditionError {
    /// The rewritten condition that failed to compile.
    pub condition: String,
    /// The underlying regex compilation failure.
    #[source]
    pub source: regex::Error,
}
