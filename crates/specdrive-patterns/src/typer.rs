//! Quoted-argument scanning, condition rewriting, and typed extraction.
//!
//! [`ArgumentTyper`] turns a raw step line into a generalised matching
//! condition by replacing each double-quoted literal with a capture fragment
//! chosen from the literal's classification. [`extract_typed_args`] performs
//! the reverse trip at match time: it re-derives each capture group's
//! intended type by scanning the matching expression's *source text* for the
//! fragments, because the expression may be caller-authored rather than one
//! this module generated.

use crate::argument::{ArgumentKind, StepArg};
use crate::errors::ConditionError;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Capture fragment substituted for string arguments.
pub const STRING_FRAGMENT: &str = r#""(.*)""#;
/// Capture fragment substituted for numeric arguments.
pub const NUMBER_FRAGMENT: &str = r#"(\"\d+\")"#;
/// Capture fragment substituted for boolean arguments.
pub const BOOL_FRAGMENT: &str = r#"(\"true\"|\"false\")"#;

/// Digit-class fragment as it appears inside a type-indicator match.
const DIGIT_INDICATOR: &str = r"\d+";

fn built_in(source: &str) -> Regex {
    Regex::new(source)
        .unwrap_or_else(|err| panic!("built-in pattern {source:?} must compile: {err}"))
}

/// Matches every double-quoted literal in a step line, escapes included.
static QUOTED_ARGUMENT: LazyLock<Regex> = LazyLock::new(|| built_in(r#""(?:[^"\\]|\\.)*""#));

/// Matches the per-group type indicators inside a regex source: short
/// escape-or-wildcard fragments such as `\d+` and `.*`, or the boolean
/// alternation emitted for boolean literals.
static TYPE_INDICATOR: LazyLock<Regex> =
    LazyLock::new(|| built_in(r#"([\.\\]([*a-z])\+?)|\(\\"true\\"\|\\"false\\"\)"#));

impl ArgumentKind {
    /// The capture fragment substituted for a literal of this kind.
    #[must_use]
    pub const fn capture_fragment(self) -> &'static str {
        match self {
            Self::Bool => BOOL_FRAGMENT,
            Self::Number => NUMBER_FRAGMENT,
            Self::Str => STRING_FRAGMENT,
        }
    }
}

/// Infers the types of quoted literals in a step line and rewrites the line
/// into a symmetric matching condition.
///
/// # Examples
///
/// ```
/// use specdrive_patterns::ArgumentTyper;
///
/// let typer = ArgumentTyper::new(r#"When I pass "5" and "true" as arguments"#);
/// assert_eq!(
///     typer.condition(),
///     r#"When I pass (\"\d+\") and (\"true\"|\"false\") as arguments"#,
/// );
/// assert_eq!(typer.parameters(), ["p0", "p1"]);
/// ```
#[derive(Debug, Clone)]
pub struct ArgumentTyper {
    original: String,
    condition: String,
    parameters: Vec<String>,
}

impl ArgumentTyper {
    /// Scan a raw step line for quoted literal arguments.
    #[must_use]
    pub fn new(line: &str) -> Self {
        let mut typer = Self {
            original: line.to_string(),
            condition: line.to_string(),
            parameters: Vec::new(),
        };
        typer.scan_arguments();
        typer
    }

    fn scan_arguments(&mut self) {
        let found: Vec<String> = QUOTED_ARGUMENT
            .find_iter(&self.original)
            .map(|m| m.as_str().to_string())
            .collect();
        for (position, quoted) in found.iter().enumerate() {
            self.replace_argument(quoted, position);
        }
    }

    fn replace_argument(&mut self, quoted: &str, position: usize) {
        // Classification looks at the text with every quote removed, exactly
        // as the literal reads to a human.
        let unquoted: String = quoted.chars().filter(|&c| c != '"').collect();
        self.parameters.push(format!("p{position}"));
        let fragment = ArgumentKind::classify(&unquoted).capture_fragment();
        self.condition = self.condition.replacen(quoted, fragment, 1);
    }

    /// The original line this typer was built from.
    #[must_use]
    pub fn original_condition(&self) -> &str {
        &self.original
    }

    /// The rewritten condition, trimmed, usable as a regex source once the
    /// caller anchors it.
    #[must_use]
    pub fn condition(&self) -> &str {
        self.condition.trim()
    }

    /// The rewritten condition with the leading keyword word removed.
    #[must_use]
    pub fn condition_without_keyword(&self) -> &str {
        let text = self.condition();
        text.split_once(' ').map_or(text, |(_, rest)| rest)
    }

    /// Synthetic parameter names (`p0`, `p1`, ...) for the captures, in
    /// positional order.
    #[must_use]
    pub fn parameters(&self) -> &[String] {
        &self.parameters
    }

    /// The parameter names joined for display in a suggestion stub.
    #[must_use]
    pub fn parameter_list(&self) -> String {
        self.parameters.join(", ")
    }

    /// Compile the rewritten condition into a case-insensitive, end-anchored
    /// matcher.
    ///
    /// # Errors
    ///
    /// Returns [`ConditionError`] when the original line contains regex
    /// metacharacters that leave the rewritten condition uncompilable.
    pub fn to_regex(&self) -> Result<Regex, ConditionError> {
        let condition = self.condition();
        Regex::new(&format!("(?i){condition}$")).map_err(|source| ConditionError {
            condition: condition.to_string(),
            source,
        })
    }
}

/// Per-group type indicator recovered from a regex source.
///
/// The registry matches steps with caller-authored expressions, so the type
/// of each capture cannot be carried over from condition rewriting; it is
/// re-derived from the expression source at extraction time. The indicators
/// are aligned positionally with capture groups 1..N in source order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TypeIndicator {
    Digits,
    Boolean,
    Text,
}

impl TypeIndicator {
    fn from_fragment(fragment: &str) -> Self {
        match fragment {
            DIGIT_INDICATOR => Self::Digits,
            BOOL_FRAGMENT => Self::Boolean,
            _ => Self::Text,
        }
    }
}

/// Convert a capture set into typed arguments using the source text of the
/// expression that produced it.
///
/// Digit-class groups parse as numbers (unparseable text yields NaN),
/// boolean-alternation groups compare case-insensitively against `true`, and
/// everything else is kept as a string after one layer of surrounding
/// matching quotes (double, then single) is stripped.
///
/// # Examples
///
/// ```
/// use regex::Regex;
/// use specdrive_patterns::{StepArg, extract_typed_args};
///
/// let pattern = Regex::new(r#"(?i)I pass (\"\d+\") and "(.*)" as arguments$"#)
///     .expect("example pattern compiles");
/// let caps = pattern
///     .captures(r#"I pass "5" and "hello" as arguments"#)
///     .expect("example text matches");
/// assert_eq!(
///     extract_typed_args(&pattern, &caps),
///     [StepArg::Number(5.0), StepArg::Str("hello".into())],
/// );
/// ```
#[must_use]
pub fn extract_typed_args(pattern: &Regex, captures: &Captures<'_>) -> Vec<StepArg> {
    let indicators: Vec<TypeIndicator> = TYPE_INDICATOR
        .find_iter(pattern.as_str())
        .map(|m| TypeIndicator::from_fragment(m.as_str()))
        .collect();

    let mut args = Vec::with_capacity(captures.len().saturating_sub(1));
    for (index, capture) in captures.iter().enumerate().skip(1) {
        let raw = capture.map_or("", |m| m.as_str());
        let value = strip_matching_quotes(raw);
        let indicator = indicators
            .get(index - 1)
            .copied()
            .unwrap_or(TypeIndicator::Text);
        args.push(match indicator {
            TypeIndicator::Digits => StepArg::Number(value.parse().unwrap_or(f64::NAN)),
            TypeIndicator::Boolean => StepArg::Bool(value.eq_ignore_ascii_case("true")),
            TypeIndicator::Text => StepArg::Str(value.to_string()),
        });
    }
    args
}

/// Strip one layer of surrounding double quotes, then single quotes.
///
/// A pair of quotes around nothing is left alone so an empty quoted capture
/// survives verbatim.
fn strip_matching_quotes(raw: &str) -> &str {
    let stripped = strip_quote_layer(raw, '"');
    strip_quote_layer(stripped, '\'')
}

fn strip_quote_layer(text: &str, quote: char) -> &str {
    text.strip_prefix(quote)
        .and_then(|rest| rest.strip_suffix(quote))
        .filter(|inner| !inner.is_empty())
        .unwrap_or(text)
}
