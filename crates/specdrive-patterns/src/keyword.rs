//! Step keyword vocabulary and line-prefix detection.

use std::fmt;
use std::str::FromStr;

/// Keyword opening a step line.
///
/// `And` and `But` continue whichever of `Given`/`When`/`Then` preceded them;
/// the runner treats all five uniformly because matching is driven entirely
/// by the registered patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKeyword {
    /// Setup preconditions for a scenario.
    Given,
    /// Perform the action under test.
    When,
    /// Assert the expected outcome.
    Then,
    /// Continuation of the previous step's keyword.
    And,
    /// Contrasting continuation of the previous step's keyword.
    But,
}

impl StepKeyword {
    /// Return the canonical keyword spelling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Given => "Given",
            Self::When => "When",
            Self::Then => "Then",
            Self::And => "And",
            Self::But => "But",
        }
    }

    /// Split a raw line into its leading keyword and the step text after it.
    ///
    /// Returns `None` when the line does not open with a keyword followed by
    /// a space and at least one further character, which is how the runner
    /// decides whether a scenario line is a step at all.
    ///
    /// # Examples
    ///
    /// ```
    /// use specdrive_patterns::StepKeyword;
    ///
    /// let (keyword, rest) = StepKeyword::split_line("  Given I have a thing")
    ///     .expect("keyword line splits");
    /// assert_eq!(keyword, StepKeyword::Given);
    /// assert_eq!(rest, "I have a thing");
    /// assert!(StepKeyword::split_line("| 1 | 2 |").is_none());
    /// ```
    #[must_use]
    pub fn split_line(line: &str) -> Option<(Self, &str)> {
        let (word, rest) = line.trim_start().split_once(' ')?;
        let keyword = word.parse().ok()?;
        if rest.is_empty() {
            return None;
        }
        Some((keyword, rest))
    }
}

impl fmt::Display for StepKeyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing a [`StepKeyword`] from a string fails.
///
/// Carries the unrecognised keyword text for diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepKeywordParseError(pub String);

impl fmt::Display for StepKeywordParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid step keyword: {}", self.0)
    }
}

impl std::error::Error for StepKeywordParseError {}

impl FromStr for StepKeyword {
    type Err = StepKeywordParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let trimmed = value.trim();
        if trimmed.eq_ignore_ascii_case("given") {
            Ok(Self::Given)
        } else if trimmed.eq_ignore_ascii_case("when") {
            Ok(Self::When)
        } else if trimmed.eq_ignore_ascii_case("then") {
            Ok(Self::Then)
        } else if trimmed.eq_ignore_ascii_case("and") {
            Ok(Self::And)
        } else if trimmed.eq_ignore_ascii_case("but") {
            Ok(Self::But)
        } else {
            Err(StepKeywordParseError(trimmed.to_string()))
        }
    }
}
