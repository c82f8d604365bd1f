//! Expectation helpers: consume one token and check it against the grammar.
//!
//! [`Lexer::expect`] reports a mismatch through its `bool` so the caller can
//! recover. The `expect_*` helpers are for mandatory tokens and turn a
//! mismatch into a [`LexError`]. Every helper consumes exactly one token,
//! matching or not.

use laas_lexer_core::{ScanError, Token, TokenKind};
use tracing::debug;

use crate::lex_error::{ExpectationFailure, Expected, LexError};
use crate::Lexer;

impl<'a, U> Lexer<'a, U> {
    /// Consume one token and report whether it has the given kind.
    ///
    /// The token is returned either way for diagnostics. The flag is
    /// `false` at end-of-stream or on a kind mismatch.
    pub fn expect(&mut self, kind: TokenKind) -> Result<(Token<'a>, bool), ScanError> {
        let token = self.next_token(false)?;
        let ok = token.has_more() && token.kind == kind;
        Ok((token, ok))
    }

    /// Consume one token that must be exactly the symbol `symbol`.
    pub fn expect_symbol(&mut self, symbol: &str) -> Result<Token<'a>, LexError> {
        let token = self.next_token(false)?;
        if token.is_symbol(symbol) {
            Ok(token)
        } else {
            Err(expectation_failure(Expected::Symbol(symbol.to_owned()), &token))
        }
    }

    /// Consume one Number token and parse it as `f64`.
    pub fn expect_number(&mut self) -> Result<f64, LexError> {
        let token = self.expect_kind(TokenKind::Number)?;
        token.text.parse().map_err(|_| LexError::InvalidNumber {
            text: token.text.to_owned(),
            pos: token.pos,
        })
    }

    /// Consume one String token and return its text between the quotes.
    pub fn expect_string(&mut self) -> Result<&'a str, LexError> {
        Ok(self.expect_kind(TokenKind::String)?.text)
    }

    /// Consume one Identifier token and return its text.
    pub fn expect_identifier(&mut self) -> Result<&'a str, LexError> {
        Ok(self.expect_kind(TokenKind::Identifier)?.text)
    }

    /// Split into inline happy path + `#[cold]` error path so the
    /// `String` allocation stays off the fast case.
    #[inline]
    fn expect_kind(&mut self, kind: TokenKind) -> Result<Token<'a>, LexError> {
        let token = self.next_token(false)?;
        if token.kind == kind {
            Ok(token)
        } else {
            Err(expectation_failure(Expected::Kind(kind), &token))
        }
    }
}

#[cold]
#[inline(never)]
fn expectation_failure(expected: Expected, found: &Token<'_>) -> LexError {
    let failure = ExpectationFailure::new(expected, found);
    debug!(
        expected = %failure.expected,
        found = %failure.found,
        line = failure.pos.line,
        column = failure.pos.column,
        "expectation failed"
    );
    LexError::Expectation(failure)
}
