use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::Token,
        parser::{
            chain::parse_chain,
            core::{MAX_DEPTH, ParseResult},
        },
    },
};

/// Parses a primary (atomic) expression.
///
/// Primary expressions form the base of the formula grammar:
///
/// ```text
///     primary := VARIABLE
///              | "(" chain ")"
///              | "¬" primary
/// ```
///
/// Negation is right-recursive, so `¬¬P` parses as `¬(¬P)`. A
/// parenthesized group restarts the chain production and requires the
/// matching `)`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary
///   expression.
/// - `depth`: Current nesting depth; each negation or group adds a level.
///
/// # Returns
/// The parsed primary [`Expr`].
///
/// # Errors
/// - [`ParseError::NestingTooDeep`] past [`MAX_DEPTH`] levels.
/// - [`ParseError::UnexpectedEndOfInput`] if the stream ends here.
/// - [`ParseError::ExpectedClosingParen`] if a group is not closed.
/// - [`ParseError::UnexpectedToken`] for any token that cannot begin an
///   operand, such as an unexpected `)` or a binary connective.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    if depth > MAX_DEPTH {
        return Err(ParseError::NestingTooDeep { limit: MAX_DEPTH });
    }

    let peeked = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match peeked {
        (Token::Variable(_), _) => parse_variable(tokens),
        (Token::LParen, _) => parse_grouping(tokens, depth),
        (Token::Not, _) => parse_negation(tokens, depth),
        (token, offset) => Err(ParseError::UnexpectedToken { token:  *token,
                                                             offset: *offset, }),
    }
}

/// Parses a variable reference.
fn parse_variable<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    match tokens.next() {
        Some((Token::Variable(name), _)) => Ok(Expr::Variable { name: *name }),
        _ => unreachable!(),
    }
}

/// Parses a parenthesized group.
///
/// Expected form `( chain )`
///
/// The function consumes the opening parenthesis, parses the enclosed
/// chain, and then requires a closing `)`. Failure to find the closing
/// parenthesis yields [`ParseError::ExpectedClosingParen`] carrying the
/// offset of the opening parenthesis.
///
/// # Returns
/// The inner expression as-is (no wrapper node).
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let (_, opened_at) = *tokens.next().unwrap();
    let expr = parse_chain(tokens, depth + 1)?;
    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { opened_at }),
    }
}

/// Parses a negation.
///
/// Expected form `¬ primary`
///
/// The operand is itself a primary, so negation applies to the smallest
/// expression that follows it, never to a subsequent binary chain.
fn parse_negation<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    tokens.next();
    let operand = parse_primary(tokens, depth + 1)?;
    Ok(Expr::Unary { operator: UnaryOperator::Negate,
                     operand:  Box::new(operand), })
}
