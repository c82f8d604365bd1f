//! Errors raised by the token stream helpers.
//!
//! Scan errors from the core pass through unchanged. Expectation failures
//! record what the grammar required next and what the lexer actually
//! found, with the position of the found token.

use std::fmt;

use laas_lexer_core::{Position, ScanError, Token, TokenKind};

/// Any failure of a mandatory-token helper.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// The scanner hit malformed input.
    #[error(transparent)]
    Scan(#[from] ScanError),
    /// The next token did not match what the grammar requires.
    #[error(transparent)]
    Expectation(#[from] ExpectationFailure),
    /// A Number token whose text is not a valid `f64`.
    #[error("{pos}: invalid number `{text}`")]
    InvalidNumber { text: String, pos: Position },
}

impl LexError {
    /// Position the error points at.
    pub fn position(&self) -> Position {
        match self {
            Self::Scan(err) => err.pos,
            Self::Expectation(failure) => failure.pos,
            Self::InvalidNumber { pos, .. } => *pos,
        }
    }
}

/// What a grammar required at an expectation point.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Expected {
    /// Any token of this kind.
    Kind(TokenKind),
    /// This exact punctuation symbol.
    Symbol(String),
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Kind(kind) => write!(f, "{kind}"),
            Self::Symbol(text) => write!(f, "symbol `{text}`"),
        }
    }
}

/// Expected-vs-actual report from an `expect_*` helper.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{pos}: expected {expected}, found {}", describe_found(.found, .found_text))]
pub struct ExpectationFailure {
    pub expected: Expected,
    pub found: TokenKind,
    /// Text of the found token (empty for newline and end-of-stream).
    pub found_text: String,
    /// Position of the found token.
    pub pos: Position,
}

impl ExpectationFailure {
    pub fn new(expected: Expected, found: &Token<'_>) -> Self {
        ExpectationFailure {
            expected,
            found: found.kind,
            found_text: found.text.to_owned(),
            pos: found.pos,
        }
    }
}

fn describe_found(found: &TokenKind, text: &str) -> String {
    match found {
        TokenKind::Newline | TokenKind::EndOfStream => found.to_string(),
        TokenKind::String => format!("{found} \"{text}\""),
        _ => format!("{found} `{text}`"),
    }
}
