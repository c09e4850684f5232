use serde::Serialize;

use crate::{
    ast::Expr,
    error::EvalError,
    interpreter::evaluator::{Assignment, EvalResult, evaluate},
};

/// Maximum number of distinct variables a truth table may enumerate.
///
/// The table has 2ⁿ rows for n variables, so n must be capped to bound
/// memory and time. Twenty variables already mean 1,048,576 rows.
pub const MAX_VARIABLES: usize = 20;

/// One row of a truth table: a single assignment and the formula's value
/// under it.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Row {
    /// The assignment's `(variable, value)` pairs in sorted-variable order.
    pub assignment: Vec<(char, bool)>,
    /// The truth value of the formula under this assignment.
    pub result:     bool,
}

impl Row {
    /// Renders the assignment as `"A=false, B=true"`, the display string
    /// presentation layers key rows by.
    #[must_use]
    pub fn describe(&self) -> String {
        self.assignment
            .iter()
            .map(|(variable, value)| format!("{variable}={value}"))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// A complete truth table: every assignment over the formula's variables
/// paired with the evaluated result, in generation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TruthTable {
    /// The distinct variables, sorted ascending.
    pub variables: Vec<char>,
    /// One row per assignment; always 2ⁿ rows for n variables.
    pub rows:      Vec<Row>,
}

/// Extracts the variable set of a formula from its raw text.
///
/// The set is the distinct uppercase ASCII letters occurring anywhere in
/// the text, sorted ascending. The scan is deliberately independent of the
/// AST: variable discovery works on unparseable input and is driven purely
/// by the original text, not by which variables the parsed tree ends up
/// referencing. This mirrors the language's observable behavior and must
/// not be replaced by an AST traversal.
#[must_use]
pub fn variables(source: &str) -> Vec<char> {
    let mut variables: Vec<char> = source.chars()
                                         .filter(char::is_ascii_uppercase)
                                         .collect();
    variables.sort_unstable();
    variables.dedup();
    variables
}

/// Enumerates every assignment over the given variables.
///
/// For n variables there are 2ⁿ assignments, generated by counting i from
/// 0 to 2ⁿ − 1: bit j of i is the value of the j-th variable (0 = false,
/// 1 = true), so the first variable toggles fastest. Assignments are
/// returned in ascending order of i; zero variables yield the single empty
/// assignment.
#[must_use]
pub fn assignments(variables: &[char]) -> Vec<Assignment> {
    let count = 1usize << variables.len();

    let mut assignments = Vec::with_capacity(count);
    for i in 0..count {
        let assignment: Assignment =
            variables.iter()
                     .enumerate()
                     .map(|(j, variable)| (*variable, i & (1 << j) != 0))
                     .collect();
        assignments.push(assignment);
    }
    assignments
}

/// Assembles the full truth table for a parsed formula.
///
/// Derives the variable set from the raw formula text (see [`variables`]),
/// enumerates all assignments in binary-counting order, evaluates the
/// expression once per assignment, and appends one row per assignment in
/// generation order.
///
/// # Parameters
/// - `source`: The raw formula text the expression was parsed from.
/// - `expr`: The parsed formula.
///
/// # Returns
/// The ordered [`TruthTable`].
///
/// # Errors
/// - [`EvalError::TooManyVariables`] if the text mentions more than
///   [`MAX_VARIABLES`] distinct variables; the table is never allocated.
/// - Any error from [`evaluate`] aborts assembly; no partial table is
///   returned.
pub fn build(source: &str, expr: &Expr) -> EvalResult<TruthTable> {
    let variables = variables(source);
    if variables.len() > MAX_VARIABLES {
        return Err(EvalError::TooManyVariables { count: variables.len(),
                                                 limit: MAX_VARIABLES, });
    }

    let mut rows = Vec::new();
    for assignment in assignments(&variables) {
        let result = evaluate(expr, &assignment)?;
        rows.push(Row { assignment: assignment.into_iter().collect(),
                        result });
    }

    Ok(TruthTable { variables, rows })
}
