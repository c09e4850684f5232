use std::collections::BTreeMap;

use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::EvalError,
};

/// A total mapping from variable name to truth value, covering exactly the
/// variables relevant to one evaluation call.
///
/// The ordered map keeps iteration in sorted-variable order, which is also
/// the order truth table rows display their columns in.
pub type Assignment = BTreeMap<char, bool>;

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a formula against one assignment of truth values.
///
/// The traversal is pure and recursive: it never mutates the tree and
/// constructs no shared state, so the same tree may be evaluated against
/// any number of assignments, concurrently if desired.
///
/// Both operands of a binary node are evaluated before the connective is
/// applied; evaluation is total once every variable is bound, so there is
/// nothing to short-circuit. Material implication `left → right` is false
/// exactly when `left` is true and `right` is false.
///
/// # Parameters
/// - `expr`: The formula to evaluate.
/// - `assignment`: Truth values for the formula's variables.
///
/// # Returns
/// The truth value of the formula under the assignment.
///
/// # Errors
/// [`EvalError::UnboundVariable`] if the formula references a variable the
/// assignment does not bind.
///
/// # Example
/// ```
/// use veritab::{evaluate, parse_formula};
///
/// let expr = parse_formula("P → Q").unwrap();
/// let assignment = [('P', true), ('Q', false)].into_iter().collect();
///
/// assert!(!evaluate(&expr, &assignment).unwrap());
/// ```
pub fn evaluate(expr: &Expr, assignment: &Assignment) -> EvalResult<bool> {
    match expr {
        Expr::Variable { name } => {
            assignment.get(name)
                      .copied()
                      .ok_or(EvalError::UnboundVariable { name: *name })
        },

        Expr::Unary { operator, operand } => match operator {
            UnaryOperator::Negate => Ok(!evaluate(operand, assignment)?),
        },

        Expr::Binary { operator, left, right } => {
            let left = evaluate(left, assignment)?;
            let right = evaluate(right, assignment)?;
            match operator {
                BinaryOperator::And => Ok(left && right),
                BinaryOperator::Or => Ok(left || right),
                BinaryOperator::Implies => Ok(!left || right),
            }
        },
    }
}
