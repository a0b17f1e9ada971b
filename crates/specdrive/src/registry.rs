//! Step registration and the handler calling convention.

use crate::context::Context;
use crate::error::StepError;
use regex::Regex;
use specdrive_patterns::StepArg;
use std::fmt;
use std::future::Future;
use std::pin::Pin;
use std::rc::Rc;

/// Value a handler resolves to: the context for the next step, or a failure.
pub type StepResult = Result<Context, StepError>;

/// Boxed future produced by a step handler.
pub type StepFuture = Pin<Box<dyn Future<Output = StepResult>>>;

/// Shared, type-erased step handler.
///
/// Handlers take the scenario context by value together with the typed
/// arguments captured from the step line, and resolve to the context that
/// the next step receives.
pub type StepHandler = Rc<dyn Fn(Context, Vec<StepArg>) -> StepFuture>;

/// One registered `(pattern, handler)` pair.
pub struct StepDefinition {
    pattern: Regex,
    handler: StepHandler,
}

impl StepDefinition {
    /// The pattern a step line is tested against.
    #[must_use]
    pub const fn pattern(&self) -> &Regex {
        &self.pattern
    }

    pub(crate) fn handler(&self) -> StepHandler {
        Rc::clone(&self.handler)
    }
}

impl fmt::Debug for StepDefinition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StepDefinition")
            .field("pattern", &self.pattern.as_str())
            .finish_non_exhaustive()
    }
}

/// Ordered collection of step definitions.
///
/// Insertion order is match order, there is no deduplication, and no
/// conflict detection: every pattern that matches a line schedules that
/// line once per match.
#[derive(Debug, Default)]
pub struct StepRegistry {
    steps: Vec<StepDefinition>,
}

impl StepRegistry {
    /// Create an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register an asynchronous handler for a pattern.
    ///
    /// The future is boxed internally, so any `async` closure or function
    /// returning a future fits.
    pub fn map<F, Fut>(&mut self, pattern: Regex, handler: F)
    where
        F: Fn(Context, Vec<StepArg>) -> Fut + 'static,
        Fut: Future<Output = StepResult> + 'static,
    {
        let boxed = move |context: Context, args: Vec<StepArg>| -> StepFuture {
            Box::pin(handler(context, args))
        };
        self.steps.push(StepDefinition {
            pattern,
            handler: Rc::new(boxed),
        });
    }

    /// Register a synchronous handler for a pattern, wrapped into an
    /// immediately-ready future.
    pub fn map_sync<F>(&mut self, pattern: Regex, handler: F)
    where
        F: Fn(Context, Vec<StepArg>) -> StepResult + 'static,
    {
        self.map(pattern, move |context, args| {
            std::future::ready(handler(context, args))
        });
    }

    /// Let a step module register its definitions.
    pub fn add_steps(&mut self, module: impl StepModule) {
        module.steps(self);
    }

    /// Iterate the definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &StepDefinition> {
        self.steps.iter()
    }

    /// Number of registered definitions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Whether the registry has no definitions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

/// A module of step definitions.
///
/// Caller crates expose one function that registers their steps; closures
/// over `&mut StepRegistry` implement the trait for free, so
/// `registry.add_steps(my_steps)` works with a plain `fn`.
pub trait StepModule {
    /// Register this module's step definitions.
    fn steps(&self, registry: &mut StepRegistry);
}

impl<F> StepModule for F
where
    F: Fn(&mut StepRegistry),
{
    fn steps(&self, registry: &mut StepRegistry) {
        self(registry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[expect(clippy::expect_used, reason = "test helper with descriptive failures")]
    fn pattern(source: &str) -> Regex {
        Regex::new(source).expect("test pattern should compile")
    }

    fn sample_steps(registry: &mut StepRegistry) {
        registry.map_sync(pattern("(?i)a registered step$"), |context, _args| {
            Ok(context)
        });
    }

    #[test]
    fn registration_preserves_order() {
        let mut registry = StepRegistry::new();
        registry.map_sync(pattern("first$"), |context, _args| Ok(context));
        registry.map_sync(pattern("second$"), |context, _args| Ok(context));

        let sources: Vec<&str> = registry.iter().map(|d| d.pattern().as_str()).collect();
        assert_eq!(sources, ["first$", "second$"]);
    }

    #[test]
    fn function_modules_register_through_the_trait() {
        let mut registry = StepRegistry::new();
        registry.add_steps(sample_steps);
        assert_eq!(registry.len(), 1);
        assert!(!registry.is_empty());
    }

    #[test]
    fn duplicate_patterns_are_kept() {
        let mut registry = StepRegistry::new();
        registry.map_sync(pattern("same$"), |context, _args| Ok(context));
        registry.map_sync(pattern("same$"), |context, _args| Ok(context));
        assert_eq!(registry.len(), 2);
    }
}
