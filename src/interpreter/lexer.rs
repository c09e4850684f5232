use logos::Logos;

use crate::error::LexError;

/// Represents a lexical token in a formula.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the language.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// A propositional variable: exactly one uppercase ASCII letter, such
    /// as `P`. Multi-letter identifiers are not part of the language.
    #[regex(r"[A-Z]", |lex| lex.slice().chars().next())]
    Variable(char),
    /// `¬`
    #[token("¬")]
    Not,
    /// `∧`
    #[token("∧")]
    And,
    /// `∨`
    #[token("∨")]
    Or,
    /// `→`
    #[token("→")]
    Implies,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// Whitespace of any Unicode space class.
    #[regex(r"\s+", logos::skip)]
    Ignored,
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Variable(name) => write!(f, "{name}"),
            Self::Not => write!(f, "¬"),
            Self::And => write!(f, "∧"),
            Self::Or => write!(f, "∨"),
            Self::Implies => write!(f, "→"),
            Self::LParen => write!(f, "("),
            Self::RParen => write!(f, ")"),
            Self::Ignored => write!(f, " "),
        }
    }
}

/// Tokenizes a formula into a sequence of `(Token, offset)` pairs.
///
/// Each token is paired with the character offset of its first character,
/// which error messages report. Offsets count characters rather than bytes
/// so that positions stay meaningful across the multi-byte connective
/// symbols.
///
/// The scan state lives entirely in the local lexer instance, so any number
/// of calls may run concurrently without interfering.
///
/// # Errors
/// Returns a [`LexError`] naming the first character that is not
/// whitespace, an uppercase ASCII letter, a connective symbol, or a
/// parenthesis. Lexing stops at that character; no tokens are returned.
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, LexError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(source);

    // Running byte→character conversion; token spans arrive in order.
    let mut chars_seen = 0;
    let mut bytes_seen = 0;

    while let Some(token) = lexer.next() {
        let span = lexer.span();
        chars_seen += source[bytes_seen..span.start].chars().count();
        bytes_seen = span.start;

        match token {
            Ok(tok) => tokens.push((tok, chars_seen)),
            Err(()) => {
                let found = lexer.slice()
                                 .chars()
                                 .next()
                                 .unwrap_or_default();
                return Err(LexError { found,
                                      offset: chars_seen, });
            },
        }
    }

    Ok(tokens)
}
