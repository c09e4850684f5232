/// Entry point and shared definitions for the parser.
///
/// Declares the parse result type, the nesting ceiling, and the `parse`
/// function that turns a whole token stream into one expression tree.
pub mod core;

/// The binary chain production.
///
/// Parses sequences of operands joined by binary connectives, folding them
/// strictly left-to-right with no precedence among the connectives.
pub mod chain;

/// The primary production.
///
/// Parses the atomic forms a formula can start with: a variable, a
/// parenthesized sub-formula, or a negation.
pub mod primary;
