//! Three-phase feature-text parser.
//!
//! Parsing is a pipeline over the input lines: a summary pass locates the
//! feature name and every scenario header, a step-assignment pass attaches
//! the lines between headers to their scenario, and an expansion pass turns
//! each Scenario Outline with an Examples table into one concrete scenario
//! per data row.

use crate::feature::{Feature, Scenario};
use regex::Regex;
use std::sync::LazyLock;

fn token(source: &str) -> Regex {
    Regex::new(source)
        .unwrap_or_else(|err| panic!("built-in token {source:?} must compile: {err}"))
}

static FEATURE_TOKEN: LazyLock<Regex> = LazyLock::new(|| token(r"(?i)^\s*Feature: (.*)"));
static SCENARIO_TOKEN: LazyLock<Regex> = LazyLock::new(|| token(r"(?i)^\s*Scenario: (.*)"));
static OUTLINE_TOKEN: LazyLock<Regex> = LazyLock::new(|| token(r"(?i)^\s*Scenario Outline: (.*)"));
static EXAMPLES_TOKEN: LazyLock<Regex> = LazyLock::new(|| token(r"(?i)^\s*Examples:"));

/// A scenario header found in phase one, before its steps are attached.
#[derive(Debug)]
struct ScenarioStub {
    name: String,
    line: usize,
    steps: Vec<String>,
}

/// Converts raw specification text into a structured [`Feature`].
#[derive(Debug, Default, Clone, Copy)]
pub struct FeatureParser;

impl FeatureParser {
    /// Create a parser.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse specification text into a structured feature.
    ///
    /// Parsing is permissive: structure problems (a scenario outside any
    /// feature, say) are logged as warnings rather than failing the parse.
    #[must_use]
    pub fn parse(&self, text: &str) -> Feature {
        let lines: Vec<&str> = text.lines().collect();
        let (name, stubs) = Self::summary(&lines);
        let stubs = Self::assign_steps(&lines, stubs);
        let scenarios = Self::extract_examples(stubs);
        Feature { name, scenarios }
    }

    /// Phase one: record the feature name and every scenario header with its
    /// declaring line index. A repeated `Feature:` header overwrites the
    /// name.
    fn summary(lines: &[&str]) -> (String, Vec<ScenarioStub>) {
        let mut name = String::new();
        let mut in_feature = false;
        let mut stubs = Vec::new();

        for (index, line) in lines.iter().enumerate() {
            if let Some(caps) = FEATURE_TOKEN.captures(line) {
                name = capture_text(&caps);
                in_feature = true;
                continue;
            }

            let header = SCENARIO_TOKEN
                .captures(line)
                .or_else(|| OUTLINE_TOKEN.captures(line));
            if let Some(caps) = header {
                if !in_feature {
                    log::warn!(
                        "{line:?} is not within a feature; check the file has a \"Feature:\" header"
                    );
                }
                stubs.push(ScenarioStub {
                    name: capture_text(&caps),
                    line: index,
                    steps: Vec::new(),
                });
            }
        }

        (name, stubs)
    }

    /// Phase two: attach to each scenario the lines between its header and
    /// the next one, dropping blanks and table-separator rows.
    fn assign_steps(lines: &[&str], mut stubs: Vec<ScenarioStub>) -> Vec<ScenarioStub> {
        let ends: Vec<usize> = stubs
            .iter()
            .skip(1)
            .map(|stub| stub.line)
            .chain(std::iter::once(lines.len()))
            .collect();

        for (stub, end) in stubs.iter_mut().zip(ends) {
            for line in lines.iter().take(end).skip(stub.line + 1) {
                let trimmed = line.trim();
                // Table separator rows such as |----|----| reduce to nothing
                // once every pipe and dash is removed.
                let stripped: String = trimmed
                    .chars()
                    .filter(|&c| c != '|' && c != '-')
                    .collect();
                if !trimmed.is_empty() && !stripped.is_empty() {
                    stub.steps.push(trimmed.to_string());
                }
            }
        }

        stubs
    }

    /// Phase three: expand each Scenario Outline's Examples table into one
    /// concrete scenario per data row.
    ///
    /// Templated scenarios are discarded; their expansions are appended, in
    /// row order, after all literal scenarios regardless of where the
    /// template appeared in the file.
    fn extract_examples(stubs: Vec<ScenarioStub>) -> Vec<Scenario> {
        let mut literals = Vec::new();
        let mut expanded = Vec::new();

        for stub in stubs {
            let marker = stub.steps.iter().position(|s| EXAMPLES_TOKEN.is_match(s));
            let Some(marker) = marker else {
                literals.push(Scenario {
                    name: stub.name,
                    steps: stub.steps,
                });
                continue;
            };

            let template: Vec<&str> = stub
                .steps
                .iter()
                .take(marker)
                .map(String::as_str)
                .collect();
            let Some(header_row) = stub.steps.get(marker + 1) else {
                // An Examples marker with no table expands to nothing.
                continue;
            };
            let headers: Vec<String> = split_row(header_row)
                .map(|cell| format!("<{cell}>"))
                .collect();

            for (offset, row) in stub.steps.iter().skip(marker + 2).enumerate() {
                let values: Vec<String> = split_row(row).map(str::to_string).collect();
                let steps = template
                    .iter()
                    .map(|step| substitute(step, &headers, &values))
                    .collect();
                expanded.push(Scenario {
                    name: format!(
                        "{} Example {} {}",
                        stub.name,
                        offset + 1,
                        serde_json::to_string(&values).unwrap_or_default(),
                    ),
                    steps,
                });
            }
        }

        literals.append(&mut expanded);
        literals
    }
}

/// Split a pipe-delimited table row into trimmed cells, dropping the empty
/// segments produced by the leading and trailing pipes.
fn split_row(row: &str) -> impl Iterator<Item = &str> {
    row.split('|').filter(|cell| !cell.is_empty()).map(str::trim)
}

/// Replace every `<Header>` token with its positional cell value. Rows
/// shorter than the header leave the surplus placeholders untouched.
fn substitute(step: &str, headers: &[String], values: &[String]) -> String {
    let mut result = step.to_string();
    for (header, value) in headers.iter().zip(values) {
        result = result.replace(header, value);
    }
    result
}

fn capture_text(caps: &regex::Captures<'_>) -> String {
    caps.get(1).map_or("", |m| m.as_str()).trim().to_string()
}
