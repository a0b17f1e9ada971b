//! A regex-mapped Gherkin specification parser and step runner.
//!
//! Feature text is parsed into scenarios (with Scenario Outline and Examples
//! expansion), each step line is matched against an ordered registry of
//! regular-expression-bound handlers with typed argument extraction, and the
//! resulting steps run strictly sequentially, threading an owned [`Context`]
//! through each scenario's handler chain.
//!
//! ```
//! use regex::Regex;
//! use specdrive::SpecEngine;
//!
//! let mut engine = SpecEngine::new();
//! engine.registry_mut().map_sync(
//!     Regex::new(r"(?i)I have (\d+) cukes$").expect("pattern compiles"),
//!     |context, _args| Ok(context),
//! );
//!
//! let items = engine.parse("Feature: Cukes\nScenario: Count\n    Given I have 3 cukes\n");
//! assert_eq!(items.len(), 1);
//! assert_eq!(items.first().map(|item| item.steps.len()), Some(1));
//! ```

pub mod config;
mod context;
mod engine;
mod error;
mod feature;
mod parser;
mod registry;

pub use context::Context;
pub use engine::{ResolvedStep, SpecEngine, TestItem};
pub use error::{RunError, StepError};
pub use feature::{Feature, Scenario};
pub use parser::FeatureParser;
pub use registry::{StepDefinition, StepFuture, StepHandler, StepModule, StepRegistry, StepResult};

pub use specdrive_patterns::{
    ArgumentKind, ArgumentTyper, StepArg, StepKeyword, SuggestionBuilder, extract_typed_args,
};
