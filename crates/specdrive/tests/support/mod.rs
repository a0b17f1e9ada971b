//! Shared step modules and the sample calculator domain used by the
//! behavioural tests.

use regex::Regex;
use specdrive::{Context, StepArg, StepError, StepRegistry, StepResult};

/// Compile a test pattern.
///
/// # Panics
/// Panics if the pattern fails to compile.
#[must_use]
pub fn pattern(source: &str) -> Regex {
    Regex::new(source)
        .unwrap_or_else(|err| panic!("test pattern {source:?} must compile: {err}"))
}

/// The running total driven by the calculator steps.
#[derive(Debug, Default)]
pub struct Calculator {
    total: i64,
}

impl Calculator {
    /// Add a number to the running total.
    pub fn add(&mut self, number: i64) {
        self.total += number;
    }

    /// The current total.
    #[must_use]
    pub fn total(&self) -> i64 {
        self.total
    }
}

fn number_arg(args: &[StepArg], index: usize) -> Result<i64, StepError> {
    args.get(index)
        .and_then(StepArg::as_number)
        .map(|value| value as i64)
        .ok_or_else(|| StepError::new(format!("expected a numeric argument at position {index}")))
}

fn switched_on(context: &mut Context) -> Result<&mut Calculator, StepError> {
    context
        .get_mut::<Calculator>("calculator")
        .ok_or_else(|| StepError::new("the calculator is not switched on"))
}

/// Steps for the sample calculator specification.
pub fn calculator_steps(registry: &mut StepRegistry) {
    registry.map_sync(
        pattern(r"(?i)I am using a calculator$"),
        |mut context, _args| {
            context.insert("calculator", Calculator::default());
            Ok(context)
        },
    );

    registry.map_sync(
        pattern(r"(?i)I enter (\d+) into the calculator$"),
        |mut context, args| {
            let number = number_arg(&args, 0)?;
            switched_on(&mut context)?.add(number);
            Ok(context)
        },
    );

    registry.map(
        pattern(r"(?i)I asynchronously enter (\d+) into the calculator$"),
        |mut context, args| async move {
            let number = number_arg(&args, 0)?;
            tokio::task::yield_now().await;
            switched_on(&mut context)?.add(number);
            Ok(context)
        },
    );

    registry.map_sync(
        pattern(r"(?i)I press the total button$"),
        |mut context, _args| {
            let total = switched_on(&mut context)?.total();
            context.insert("total", total);
            Ok(context)
        },
    );

    registry.map_sync(
        pattern(r"(?i)the result should be (\d+) on the screen$"),
        |context, args| {
            let expected = number_arg(&args, 0)?;
            let total = context
                .get::<i64>("total")
                .copied()
                .ok_or_else(|| StepError::new("the total button was never pressed"))?;
            if total == expected {
                Ok(context)
            } else {
                Err(StepError::new(format!(
                    "the screen shows {total}, expected {expected}"
                )))
            }
        },
    );
}

fn remember_args(mut context: Context, args: Vec<StepArg>) -> StepResult {
    context.insert("args", args);
    Ok(context)
}

/// Steps exercising typed argument extraction.
pub fn argument_steps(registry: &mut StepRegistry) {
    registry.map_sync(
        pattern(r#"(?i)I pass (\"\d+\") and "(.*)" as arguments$"#),
        remember_args,
    );

    registry.map_sync(
        pattern(r#"(?i)I pass (\"true\"|\"false\") and (\"true\"|\"false\") as arguments$"#),
        remember_args,
    );

    registry.map_sync(
        pattern(r"(?i)the arguments should be number and string type$"),
        |context, _args| {
            let typed_as_expected = matches!(
                context.get::<Vec<StepArg>>("args").map(Vec::as_slice),
                Some([StepArg::Number(_), StepArg::Str(_)]),
            );
            if typed_as_expected {
                Ok(context)
            } else {
                Err(StepError::new("expected a number and a string"))
            }
        },
    );

    registry.map_sync(
        pattern(r"(?i)the arguments should be boolean type$"),
        |context, _args| {
            let typed_as_expected = matches!(
                context.get::<Vec<StepArg>>("args").map(Vec::as_slice),
                Some([StepArg::Bool(_), StepArg::Bool(_)]),
            );
            if typed_as_expected {
                Ok(context)
            } else {
                Err(StepError::new("expected two booleans"))
            }
        },
    );
}

/// Steps whose patterns carry no Given/When/Then keywords at all.
pub fn relaxed_steps(registry: &mut StepRegistry) {
    registry.map_sync(
        pattern(r"(?i)Switch on the calculator$"),
        |mut context, _args| {
            context.insert("calculator", Calculator::default());
            Ok(context)
        },
    );

    registry.map_sync(
        pattern(r"(?i)Enter (\d+) and press the \+ button$"),
        |mut context, args| {
            let number = number_arg(&args, 0)?;
            switched_on(&mut context)?.add(number);
            Ok(context)
        },
    );

    registry.map_sync(
        pattern(r"(?i)Enter (\d+) and press the = button$"),
        |mut context, args| {
            let number = number_arg(&args, 0)?;
            let calculator = switched_on(&mut context)?;
            calculator.add(number);
            let total = calculator.total();
            context.insert("total", total);
            Ok(context)
        },
    );

    registry.map_sync(
        pattern(r"(?i)The answer should be (\d+)$"),
        |context, args| {
            let expected = number_arg(&args, 0)?;
            let total = context
                .get::<i64>("total")
                .copied()
                .ok_or_else(|| StepError::new("no total was recorded"))?;
            if total == expected {
                Ok(context)
            } else {
                Err(StepError::new(format!(
                    "the answer was {total}, expected {expected}"
                )))
            }
        },
    );
}
