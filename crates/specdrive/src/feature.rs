//! Structured feature model produced by the parser.

/// A named collection of scenarios parsed from one specification text.
///
/// Immutable after parsing completes; scenarios appear in file order with
/// outline expansions appended at the end.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feature {
    /// The feature name. When a file declares several `Feature:` headers the
    /// last one wins.
    pub name: String,
    /// The scenarios in final order.
    pub scenarios: Vec<Scenario>,
}

/// A named ordered sequence of step lines, possibly synthesized from a
/// Scenario Outline and an Examples table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    /// The scenario name as declared, or the synthesized
    /// `"<name> Example <n> <cells>"` form for outline expansions.
    pub name: String,
    /// Trimmed, non-empty, non-table-separator lines between this scenario's
    /// header and the next.
    pub steps: Vec<String>,
}
