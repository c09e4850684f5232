//! # veritab
//!
//! veritab is a propositional-logic truth table generator written in Rust.
//! It parses formulas over single-letter variables and the connectives
//! `¬`, `∧`, `∨`, and `→`, and evaluates them against every possible
//! assignment of their variables to produce a full truth table.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use serde::Serialize;

use crate::interpreter::{lexer::tokenize, parser::core::parse, table};

/// Defines the structure of parsed formulas.
///
/// This module declares the `Expr` enum and the operator types that
/// represent the syntactic structure of a formula as a tree. The AST is
/// built by the parser, traversed by the evaluator, and serialized to a
/// tagged tree form for external display.
///
/// # Responsibilities
/// - Defines the three expression shapes: variable, unary, binary.
/// - Defines the closed operator enums and their symbol rendering.
/// - Serializes nodes as `{kind, …}` tagged values.
pub mod ast;
/// Provides unified error types for lexing, parsing, and evaluation.
///
/// This module defines all errors that can be raised while processing a
/// formula. It standardizes error reporting and carries detailed
/// information about failures, including offsets and variable names, for
/// debugging and user feedback.
///
/// # Responsibilities
/// - Defines error types for all failure modes (lexer, parser, evaluator).
/// - Attaches character offsets and variable names for context.
/// - Unifies the kinds under one [`Error`] for the public API.
pub mod error;
/// Orchestrates the processing of a formula.
///
/// This module ties together lexing, parsing, evaluation, and truth table
/// assembly to provide a complete pipeline from formula text to results.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, table.
/// - Keeps every stage's state local to one call, so independent formulas
///   can be processed concurrently without coordination.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::{Error, EvalError, LexError, ParseError},
    interpreter::{
        evaluator::{Assignment, evaluate},
        lexer::Token,
        table::{MAX_VARIABLES, Row, TruthTable},
    },
};

/// The result of fully processing one formula: the parsed tree and its
/// truth table. Serializes for consumers that render both.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Analysis {
    /// The parsed expression tree.
    pub ast:   Expr,
    /// The full truth table over the formula's variables.
    pub table: TruthTable,
}

/// Parses a formula string into an expression tree.
///
/// Tokenizes the input and runs the parser over the token stream. The
/// returned tree is immutable and may be evaluated any number of times.
///
/// # Errors
/// Returns an [`Error`] if the input contains an invalid character or does
/// not match the formula grammar.
///
/// # Examples
/// ```
/// use veritab::{BinaryOperator, Expr, parse_formula};
///
/// let expr = parse_formula("P ∧ Q").unwrap();
/// assert!(matches!(expr, Expr::Binary { operator: BinaryOperator::And, .. }));
///
/// // A lowercase letter is not a variable.
/// assert!(parse_formula("p").is_err());
/// ```
pub fn parse_formula(source: &str) -> Result<Expr, Error> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();
    let expr = parse(&mut iter)?;
    Ok(expr)
}

/// Returns the complete analysis of a formula: its parsed tree and its
/// full truth table.
///
/// This is the main entry point. The variable set is derived from the raw
/// formula text, every assignment over it is enumerated in binary-counting
/// order, and the formula is evaluated once per assignment.
///
/// # Errors
/// Returns an [`Error`] if lexing, parsing, or any evaluation fails, or if
/// the formula uses more distinct variables than [`MAX_VARIABLES`]. No
/// partial results accompany an error.
///
/// # Examples
/// ```
/// use veritab::analyze;
///
/// let analysis = analyze("(P ∨ Q) → R").unwrap();
/// assert_eq!(analysis.table.variables, vec!['P', 'Q', 'R']);
/// assert_eq!(analysis.table.rows.len(), 8);
/// ```
pub fn analyze(source: &str) -> Result<Analysis, Error> {
    let expr = parse_formula(source)?;
    let table = table::build(source, &expr)?;
    Ok(Analysis { ast: expr, table })
}
