//! Error taxonomy for parsing and execution.
//!
//! Parse-time problems (unmatched step lines) are soft: they are counted and
//! surfaced once, at the run boundary, as [`RunError::MissingSteps`].
//! Execution-time problems are fail-fast: the first handler error aborts the
//! remaining steps and scenarios.

use thiserror::Error;

/// Failure signalled by a step handler.
///
/// Handlers construct these directly or via the `From` conversions:
///
/// ```
/// use specdrive::StepError;
///
/// let err = StepError::new("total was 119, expected 120");
/// assert_eq!(err.to_string(), "total was 119, expected 120");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct StepError {
    message: String,
}

impl StepError {
    /// Construct a failure with the provided message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// Access the underlying message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<String> for StepError {
    fn from(message: String) -> Self {
        Self::new(message)
    }
}

impl From<&str> for StepError {
    fn from(message: &str) -> Self {
        Self::new(message)
    }
}

/// Failure of a specification run.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum RunError {
    /// One or more step lines matched no registered pattern. Raised after a
    /// full parse and before any handler is invoked.
    #[error("{count} missing steps")]
    MissingSteps {
        /// Total unmatched step lines across the specification.
        count: usize,
    },
    /// A handler failed; the run stops at this step.
    #[error("step {step:?} failed in scenario {scenario:?}: {source}")]
    Step {
        /// Name of the scenario that was executing.
        scenario: String,
        /// Text of the failing step.
        step: String,
        /// The handler's error.
        #[source]
        source: StepError,
    },
    /// The specification file could not be read.
    #[error("failed to read specification {path:?}: {source}")]
    Io {
        /// The path passed to the run entry.
        path: String,
        /// The underlying I/O failure.
        #[source]
        source: std::io::Error,
    },
}
