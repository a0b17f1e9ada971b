//! Typed step-argument values and quoted-literal classification.

use std::fmt;

/// A typed argument extracted from a matched step line.
///
/// Step handlers receive the ordered vector of these alongside the scenario
/// context; index 0 of the conceptual parameter list is always the context
/// itself, so the vector holds the captures only.
#[derive(Debug, Clone, PartialEq)]
pub enum StepArg {
    /// A numeric argument, parsed as a double-precision float.
    Number(f64),
    /// A boolean argument (`true`/`false`, case-insensitive).
    Bool(bool),
    /// Any other capture, kept verbatim after quote stripping.
    Str(String),
}

impl StepArg {
    /// Return the numeric value when this argument is a number.
    #[must_use]
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(value) => Some(*value),
            Self::Bool(_) | Self::Str(_) => None,
        }
    }

    /// Return the boolean value when this argument is a boolean.
    #[must_use]
    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(value) => Some(*value),
            Self::Number(_) | Self::Str(_) => None,
        }
    }

    /// Return the string value when this argument is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(value) => Some(value),
            Self::Number(_) | Self::Bool(_) => None,
        }
    }
}

impl fmt::Display for StepArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Bool(value) => write!(f, "{value}"),
            Self::Str(value) => f.write_str(value),
        }
    }
}

/// Classification assigned to a quoted literal found in a step line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArgumentKind {
    /// The literal reads as `true` or `false`.
    Bool,
    /// The literal round-trips through floating-point parsing.
    Number,
    /// Anything else.
    Str,
}

impl ArgumentKind {
    /// Classify the unquoted text of a literal argument.
    ///
    /// Booleans are checked first, then numbers, with string as the fallback.
    #[must_use]
    pub fn classify(text: &str) -> Self {
        if is_boolean_argument(text) {
            Self::Bool
        } else if is_numeric_argument(text) {
            Self::Number
        } else {
            Self::Str
        }
    }
}

/// Whether the text reads as a boolean literal, ignoring case.
#[must_use]
pub fn is_boolean_argument(text: &str) -> bool {
    text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false")
}

/// Whether the text is a canonical decimal number.
///
/// The check is a round trip: the text must parse as an `f64` whose rendering
/// equals the input exactly. Leading zeros, explicit `+` signs, and exponent
/// notation therefore read as strings.
#[must_use]
pub fn is_numeric_argument(text: &str) -> bool {
    text.parse::<f64>()
        .is_ok_and(|value| value.to_string() == text)
}
