use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{lexer::Token, parser::chain::parse_chain},
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum formula nesting depth accepted by the parser.
///
/// Parser recursion mirrors formula nesting, so deeply nested negations or
/// parentheses would otherwise recurse without bound. Exceeding the ceiling
/// fails with [`ParseError::NestingTooDeep`].
pub const MAX_DEPTH: usize = 64;

/// Parses a full formula.
///
/// This is the entry point for formula parsing. The grammar has two
/// productions:
///
/// ```text
///     chain   := primary ( CONNECTIVE primary )*
///     primary := VARIABLE | "(" chain ")" | "¬" primary
/// ```
///
/// Parsing begins at `chain` and consumes tokens from the stream only;
/// it returns one expression tree or fails without a partial tree. Tokens
/// remaining after the top-level chain are left unconsumed.
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, offset)` pairs.
///
/// # Returns
/// The root of the parsed expression tree.
///
/// # Errors
/// Propagates any [`ParseError`] from the productions below.
pub fn parse<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    parse_chain(tokens, 0)
}
