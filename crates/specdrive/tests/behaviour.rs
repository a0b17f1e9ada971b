//! Behavioural tests driving the bundled feature files end to end.

mod support;

use specdrive::{RunError, SpecEngine};
use std::cell::Cell;
use std::rc::Rc;

/// Read a bundled feature file.
///
/// # Panics
/// Panics if the fixture is missing.
fn fixture(name: &str) -> String {
    let path = format!("tests/features/{name}");
    std::fs::read_to_string(&path)
        .unwrap_or_else(|err| panic!("fixture {path:?} must be readable: {err}"))
}

#[tokio::test]
async fn calculator_specification_runs_to_completion() {
    let mut engine = SpecEngine::new();
    engine.add_steps(support::calculator_steps);
    let outcome = engine.run("tests/features/calculator.feature").await;
    assert!(outcome.is_ok(), "specification failed: {outcome:?}");
}

#[test]
fn calculator_outline_expands_into_test_items() {
    let mut engine = SpecEngine::new();
    engine.add_steps(support::calculator_steps);
    let items = engine.parse(&fixture("calculator.feature"));

    assert_eq!(engine.missing_steps(), 0);

    let names: Vec<&str> = items.iter().map(|item| item.scenario.as_str()).collect();
    assert_eq!(
        names,
        [
            "Basic Example with Calculator",
            "Basic Example with Background Work",
            r#"Basic Example with Table Example 1 ["1","1","2"]"#,
            r#"Basic Example with Table Example 2 ["1","2","3"]"#,
            r#"Basic Example with Table Example 3 ["2","3","5"]"#,
            r#"Basic Example with Table Example 4 ["8","3","11"]"#,
            r#"Basic Example with Table Example 5 ["9","8","17"]"#,
        ],
    );
    for item in &items {
        assert_eq!(item.feature, "Basic Working Example");
        assert_eq!(item.steps.len(), 5, "scenario {:?}", item.scenario);
    }
}

#[tokio::test]
async fn argument_specification_types_its_captures() {
    let mut engine = SpecEngine::new();
    engine.add_steps(support::argument_steps);
    let outcome = engine.run("tests/features/arguments.feature").await;
    assert!(outcome.is_ok(), "specification failed: {outcome:?}");
}

#[tokio::test]
async fn relaxed_specification_matches_keyword_free_patterns() {
    let mut engine = SpecEngine::new();
    engine.add_steps(support::relaxed_steps);
    let outcome = engine.run("tests/features/relaxed.feature").await;
    assert!(outcome.is_ok(), "specification failed: {outcome:?}");
}

#[tokio::test]
async fn missing_step_fails_the_run_without_executing_handlers() {
    let invoked = Rc::new(Cell::new(false));
    let probe = Rc::clone(&invoked);

    let mut engine = SpecEngine::new();
    engine
        .registry_mut()
        .map_sync(support::pattern(r"(?i)a known step$"), move |context, _args| {
            probe.set(true);
            Ok(context)
        });

    let outcome = engine.run("tests/features/missing_step.feature").await;

    assert!(
        matches!(outcome, Err(RunError::MissingSteps { count: 1 })),
        "expected one missing step, got {outcome:?}",
    );
    assert!(!invoked.get(), "no handler may run when steps are missing");
}

#[tokio::test]
async fn wrong_expectation_surfaces_the_handler_failure() {
    let mut engine = SpecEngine::new();
    engine.add_steps(support::calculator_steps);
    let outcome = engine
        .run_text(
            "Feature: Failing
Scenario: Wrong total
    Given I am using a calculator
    And I enter 2 into the calculator
    When I press the total button
    Then the result should be 3 on the screen
",
        )
        .await;

    match outcome {
        Err(RunError::Step { scenario, step, .. }) => {
            assert_eq!(scenario, "Wrong total");
            assert_eq!(step, "Then the result should be 3 on the screen");
        }
        other => panic!("expected a step failure, got {other:?}"),
    }
}
