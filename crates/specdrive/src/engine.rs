//! Step resolution and sequential scenario execution.
//!
//! The engine turns a parsed feature into a test map — one [`TestItem`] per
//! final scenario, each holding the steps resolved against the registry with
//! their typed arguments — and then drives the map to completion, threading
//! an owned [`Context`] through each scenario's handler chain. Handlers may
//! suspend; the engine awaits every step before starting the next, so no two
//! steps and no two scenarios ever run concurrently.

use crate::config;
use crate::context::Context;
use crate::error::RunError;
use crate::parser::FeatureParser;
use crate::registry::{StepHandler, StepRegistry};
use camino::Utf8Path;
use specdrive_patterns::{
    ArgumentTyper, StepArg, StepKeyword, SuggestionBuilder, extract_typed_args,
};

/// One step line resolved against the registry.
pub struct ResolvedStep {
    /// The trimmed step text.
    pub text: String,
    /// Typed arguments captured from the line.
    pub args: Vec<StepArg>,
    handler: StepHandler,
}

impl std::fmt::Debug for ResolvedStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ResolvedStep")
            .field("text", &self.text)
            .field("args", &self.args)
            .finish_non_exhaustive()
    }
}

/// One runnable scenario: its names and its resolved steps in order.
#[derive(Debug)]
pub struct TestItem {
    /// The owning feature's name.
    pub feature: String,
    /// The scenario name (synthesized for outline expansions).
    pub scenario: String,
    /// Resolved steps in execution order.
    pub steps: Vec<ResolvedStep>,
}

/// Parses specifications against a step registry and executes the result.
#[derive(Debug, Default)]
pub struct SpecEngine {
    registry: StepRegistry,
    missing_steps: usize,
}

impl SpecEngine {
    /// Create an engine with an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine around a registry the caller populated.
    #[must_use]
    pub fn from_registry(registry: StepRegistry) -> Self {
        Self {
            registry,
            missing_steps: 0,
        }
    }

    /// Let a step module register its definitions with this engine.
    pub fn add_steps(&mut self, module: impl crate::registry::StepModule) {
        self.registry.add_steps(module);
    }

    /// Borrow the registry.
    #[must_use]
    pub const fn registry(&self) -> &StepRegistry {
        &self.registry
    }

    /// Mutably borrow the registry.
    pub const fn registry_mut(&mut self) -> &mut StepRegistry {
        &mut self.registry
    }

    /// Unmatched step lines seen by the most recent parse.
    #[must_use]
    pub const fn missing_steps(&self) -> usize {
        self.missing_steps
    }

    /// Parse specification text into the ordered test map without executing
    /// anything.
    ///
    /// Every registry pattern that matches a step line schedules a resolved
    /// step for it; a line matching nothing increments the missing-step
    /// count (reset at the start of each parse) and logs a handler stub, but
    /// does not abort the parse.
    pub fn parse(&mut self, text: &str) -> Vec<TestItem> {
        self.missing_steps = 0;
        let feature = FeatureParser::new().parse(text);

        let mut items = Vec::with_capacity(feature.scenarios.len());
        for scenario in feature.scenarios {
            let mut steps = Vec::new();
            for line in &scenario.steps {
                if StepKeyword::split_line(line).is_none() {
                    continue;
                }
                self.resolve_line(line, &mut steps);
            }
            items.push(TestItem {
                feature: feature.name.clone(),
                scenario: scenario.name,
                steps,
            });
        }
        items
    }

    fn resolve_line(&mut self, line: &str, steps: &mut Vec<ResolvedStep>) {
        let typer = ArgumentTyper::new(line);
        let mut matched = false;

        for definition in self.registry.iter() {
            if let Some(captures) = definition.pattern().captures(line) {
                matched = true;
                steps.push(ResolvedStep {
                    text: line.trim().to_string(),
                    args: extract_typed_args(definition.pattern(), &captures),
                    handler: definition.handler(),
                });
            }
        }

        if !matched {
            self.missing_steps += 1;
            if config::suggest_steps() {
                let stub = SuggestionBuilder::new(&typer).suggested_step();
                log::error!("missing step {line:?}; consider adding:\n{stub}");
            } else {
                log::error!("missing step {line:?}");
            }
        }
    }

    /// Read, parse, and execute a specification file.
    ///
    /// The path is resolved relative to the process working directory and
    /// read as UTF-8.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::Io`] when the file cannot be read, and otherwise
    /// fails exactly as [`run_text`](Self::run_text) does.
    pub async fn run(&mut self, path: impl AsRef<Utf8Path>) -> Result<(), RunError> {
        let path = path.as_ref();
        let text =
            std::fs::read_to_string(path.as_std_path()).map_err(|source| RunError::Io {
                path: path.to_string(),
                source,
            })?;
        self.run_text(&text).await
    }

    /// Parse and execute specification text.
    ///
    /// Scenarios run strictly sequentially; within a scenario each resolved
    /// step's handler is awaited before the next starts, and the context it
    /// resolves to becomes the next step's context.
    ///
    /// # Errors
    ///
    /// Returns [`RunError::MissingSteps`] before any handler runs when the
    /// parse left unmatched step lines, and [`RunError::Step`] for the first
    /// handler failure, aborting every remaining step and scenario.
    pub async fn run_text(&mut self, text: &str) -> Result<(), RunError> {
        let tests = self.parse(text);
        if self.missing_steps > 0 {
            return Err(RunError::MissingSteps {
                count: self.missing_steps,
            });
        }

        for item in tests {
            log::debug!(
                "running scenario {:?} / {:?} ({} steps)",
                item.feature,
                item.scenario,
                item.steps.len(),
            );
            let mut context = Context::new(&item.feature, &item.scenario);
            for step in item.steps {
                log::debug!("running step {:?}", step.text);
                let ResolvedStep {
                    text,
                    args,
                    handler,
                } = step;
                context = handler(context, args).await.map_err(|source| {
                    RunError::Step {
                        scenario: item.scenario.clone(),
                        step: text,
                        source,
                    }
                })?;
            }
        }
        Ok(())
    }
}
