//! Step-pattern utilities shared by the specdrive runtime.
//!
//! The crate is deliberately dependency-light: it owns the pieces of the
//! runner that reason about step *text* rather than step *execution* — the
//! step keyword vocabulary, quoted-argument detection and classification,
//! typed extraction of captured arguments from a matching regular
//! expression, and the handler-stub suggestion emitted for unmatched lines.

mod argument;
mod errors;
mod keyword;
mod suggest;
mod typer;

pub use argument::{ArgumentKind, StepArg, is_boolean_argument, is_numeric_argument};
pub use errors::ConditionError;
pub use keyword::{StepKeyword, StepKeywordParseError};
pub use suggest::SuggestionBuilder;
pub use typer::{
    ArgumentTyper, BOOL_FRAGMENT, NUMBER_FRAGMENT, STRING_FRAGMENT, extract_typed_args,
};
