//! Token stream over the scanner: consumption, lookahead, and user data.
//!
//! Provides the low-level token access every parser built on laas uses.
//! The typed `expect_*` helpers live in [`crate::expect`].

use laas_lexer_core::{Position, ScanConfig, ScanError, Scanner, Token, TokenKind};
use tracing::{debug, trace};

/// Lexer over a borrowed source string.
///
/// `U` is an opaque slot for caller context (symbol tables, diagnostics
/// sinks, parser state). The lexer never reads or writes it; it only hands
/// it back through [`user_data()`](Self::user_data) and friends so helpers
/// that take the lexer by reference can reach it.
#[derive(Clone, Debug)]
pub struct Lexer<'a, U = ()> {
    scanner: Scanner<'a>,
    user_data: U,
}

impl<'a> Lexer<'a> {
    /// Create a lexer at the start of `source` with no user data.
    pub fn new(source: &'a str) -> Self {
        Self::with_user_data(source, ())
    }
}

impl<'a, U> Lexer<'a, U> {
    pub fn with_user_data(source: &'a str, user_data: U) -> Self {
        Self::with_config(source, ScanConfig::default(), user_data)
    }

    pub fn with_config(source: &'a str, config: ScanConfig, user_data: U) -> Self {
        Lexer {
            scanner: Scanner::with_config(source, config),
            user_data,
        }
    }

    #[inline]
    pub fn user_data(&self) -> &U {
        &self.user_data
    }

    #[inline]
    pub fn user_data_mut(&mut self) -> &mut U {
        &mut self.user_data
    }

    pub fn into_user_data(self) -> U {
        self.user_data
    }

    /// Current position of the read cursor.
    #[inline]
    pub fn position(&self) -> Position {
        self.scanner.position()
    }

    /// The full source text.
    pub fn source(&self) -> &'a str {
        self.scanner.cursor().source()
    }

    /// Source text not yet consumed.
    pub fn remaining(&self) -> &'a str {
        let cursor = self.scanner.cursor();
        cursor.slice(cursor.offset(), cursor.source_len())
    }

    /// `true` if only horizontal whitespace is left, i.e. the next token
    /// is end-of-stream.
    pub fn is_at_end(&self) -> bool {
        self.remaining()
            .bytes()
            .all(|b| matches!(b, b' ' | b'\t' | b'\r'))
    }

    /// Consume and return the next token.
    ///
    /// An `EndOfStream` token (`has_more() == false`) signals the end; it is
    /// sticky.
    pub fn next_token(&mut self, ignore_newline: bool) -> Result<Token<'a>, ScanError> {
        match self.scanner.next_token(ignore_newline) {
            Ok(token) => {
                trace!(
                    kind = %token.kind,
                    line = token.pos.line,
                    column = token.pos.column,
                    offset = token.pos.offset,
                    "next_token"
                );
                Ok(token)
            }
            Err(err) => {
                debug!(error = %err, "scan failed");
                Err(err)
            }
        }
    }

    /// Return the next token without consuming it.
    ///
    /// Scans from a copy of the cursor; the real cursor never moves.
    pub fn peek(&self, ignore_newline: bool) -> Result<Token<'a>, ScanError> {
        let mut lookahead = self.scanner;
        lookahead.next_token(ignore_newline)
    }

    /// Check whether the next token has the given kind.
    ///
    /// `false` at end-of-stream, whatever `kind` is.
    pub fn is_next_kind(&self, kind: TokenKind) -> Result<bool, ScanError> {
        let token = self.peek(false)?;
        Ok(token.has_more() && token.kind == kind)
    }

    /// Consume and discard one token. Returns `false` at end-of-stream.
    pub fn eat(&mut self) -> Result<bool, ScanError> {
        Ok(self.next_token(false)?.has_more())
    }

    /// Consume consecutive Newline tokens and return how many there were.
    pub fn skip_newlines(&mut self) -> Result<usize, ScanError> {
        let mut skipped = 0;
        while self.is_next_kind(TokenKind::Newline)? {
            self.next_token(false)?;
            skipped += 1;
        }
        Ok(skipped)
    }
}
