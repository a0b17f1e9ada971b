//! Handler-stub suggestions for unmatched step lines.

use crate::typer::ArgumentTyper;

/// Builds a copy-pasteable registration stub for a step line that matched no
/// registered pattern.
///
/// The emitted text is diagnostic output only; nothing is registered and
/// parsing is unaffected.
#[derive(Debug)]
pub struct SuggestionBuilder<'a> {
    typer: &'a ArgumentTyper,
}

impl<'a> SuggestionBuilder<'a> {
    /// Build a suggestion for the line the typer was constructed from.
    #[must_use]
    pub const fn new(typer: &'a ArgumentTyper) -> Self {
        Self { typer }
    }

    /// Render the registration stub: the keyword-stripped condition as a
    /// case-insensitive, end-anchored pattern, a closure taking the context
    /// and the typed-argument vector, and a body that fails until the step
    /// is written.
    #[must_use]
    pub fn suggested_step(&self) -> String {
        let condition = self.typer.condition_without_keyword();
        let parameters = self.typer.parameter_list();
        let (args, note) = if parameters.is_empty() {
            ("_args".to_string(), String::new())
        } else {
            ("args".to_string(), format!("\n        // args: {parameters}"))
        };

        format!(
            r##"registry.map_sync(
    Regex::new(r#"(?i){condition}$"#)?,
    |context, {args}| {{{note}
        // Write your step code here
        let _ = context;
        Err(StepError::new("step not yet implemented"))
    }},
);"##
        )
    }
}
