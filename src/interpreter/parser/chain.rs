use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    interpreter::{
        lexer::Token,
        parser::{core::ParseResult, primary::parse_primary},
    },
};

/// Parses a chain of operands joined by binary connectives.
///
/// The rule is: `chain := primary ( CONNECTIVE primary )*` where
/// CONNECTIVE is one of `∧`, `∨`, `→`.
///
/// The chain folds left-to-right: each connective wraps the previously
/// built node as its left child. There is **no precedence ordering and no
/// special associativity** among the three connectives, so `P ∧ Q ∨ R`
/// parses as `(P ∧ Q) ∨ R`, and mixing `→` with `∧` never groups by
/// conventional logical precedence. This flat folding is part of the
/// language's observable behavior and must not be "corrected"; `¬` binds
/// tighter only because it is parsed inside `primary`.
///
/// # Parameters
/// - `tokens`: Token stream with offset information.
/// - `depth`: Current nesting depth, threaded through the productions.
///
/// # Returns
/// An [`Expr::Binary`] tree, or the lone primary when no connective
/// follows.
///
/// # Errors
/// Propagates any `ParseError` from parsing the operands.
pub fn parse_chain<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_primary(tokens, depth)?;
    loop {
        if let Some((token, _)) = tokens.peek()
           && let Some(operator) = binary_operator(token)
        {
            tokens.next();
            let right = parse_primary(tokens, depth)?;
            left = Expr::Binary { operator,
                                  left: Box::new(left),
                                  right: Box::new(right) };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Maps a token to its binary connective, if it is one.
const fn binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::And => Some(BinaryOperator::And),
        Token::Or => Some(BinaryOperator::Or),
        Token::Implies => Some(BinaryOperator::Implies),
        _ => None,
    }
}
