/// The evaluator module computes the truth value of a formula.
///
/// The evaluator traverses the AST against one assignment of truth values
/// and produces a boolean result. It is a pure function of its inputs and
/// never mutates the tree.
///
/// # Responsibilities
/// - Evaluates AST nodes, applying negation, conjunction, disjunction, and
///   material implication.
/// - Looks variables up in the supplied assignment.
/// - Reports evaluation errors such as a variable the assignment does not
///   bind.
pub mod evaluator;
/// The lexer module tokenizes a formula for further parsing.
///
/// The lexer reads the raw formula text and produces a stream of tokens,
/// each paired with the character offset where it starts. This is the first
/// stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source offsets.
/// - Skips whitespace, which never produces a token.
/// - Reports a lexical error for the first unrecognized character.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST representing the structure of the formula. This
/// enables later phases to evaluate and display the formula.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the formula grammar, reporting errors with offset info.
/// - Preserves the language's flat, precedence-free binary chaining.
pub mod parser;
/// The table module enumerates assignments and assembles truth tables.
///
/// This module derives the variable set from the raw formula text,
/// generates every possible assignment of truth values over it, and invokes
/// the evaluator once per assignment to build the ordered truth table.
///
/// # Responsibilities
/// - Scans the formula text for its distinct variables.
/// - Enumerates all 2ⁿ assignments in binary-counting order.
/// - Assembles `(assignment, result)` rows, aborting on the first error.
pub mod table;
