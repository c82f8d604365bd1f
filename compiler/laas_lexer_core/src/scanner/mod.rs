//! Hand-written scanner producing borrowed [`Token`]s.
//!
//! The scanner operates on a [`Cursor`] and produces one token per call
//! with zero heap allocation. It does not parse numeric values or cook
//! string escapes; the token keeps its raw text and those conversions are
//! left to the consumer.
//!
//! # Design
//!
//! Each call skips horizontal whitespace, dispatches on the current byte,
//! and hands off to a focused method that advances the cursor exactly past
//! the lexeme. Identifier and number runs stop *on* the terminating byte,
//! so no rewind step is ever needed. The whole scanner state is the cursor,
//! which makes the scanner [`Copy`]: lookahead is a copy, not an undo.

use crate::config::ScanConfig;
use crate::cursor::{Cursor, Position};
use crate::scan_error::{ScanError, ScanErrorKind};
use crate::token::{Span, Token, TokenKind};

/// Pure, allocation-free scanner over a borrowed source string.
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'a> {
    cursor: Cursor<'a>,
}

impl<'a> Scanner<'a> {
    /// Create a scanner at the start of `source` with default settings.
    pub fn new(source: &'a str) -> Self {
        Self::with_config(source, ScanConfig::default())
    }

    pub fn with_config(source: &'a str, config: ScanConfig) -> Self {
        Self {
            cursor: Cursor::new(source, config.tab_width),
        }
    }

    /// The underlying cursor.
    #[inline]
    pub fn cursor(&self) -> &Cursor<'a> {
        &self.cursor
    }

    /// Current position of the read cursor.
    #[inline]
    pub fn position(&self) -> Position {
        self.cursor.position()
    }

    /// Produce the next token.
    ///
    /// Returns a `TokenKind::EndOfStream` token once the source is
    /// exhausted; subsequent calls continue to return it. With
    /// `ignore_newline`, Newline tokens are consumed and skipped.
    ///
    /// # Errors
    ///
    /// Returns a [`ScanError`] for an unterminated string, a number with two
    /// decimal points, or a character that starts no token. The cursor is
    /// left at the point of failure.
    pub fn next_token(&mut self, ignore_newline: bool) -> Result<Token<'a>, ScanError> {
        loop {
            let token = self.scan()?;
            if !(ignore_newline && token.kind == TokenKind::Newline) {
                return Ok(token);
            }
        }
    }

    fn scan(&mut self) -> Result<Token<'a>, ScanError> {
        self.cursor.eat_whitespace();
        let start = self.cursor.position();
        if self.cursor.is_eof() {
            return Ok(self.eof(start));
        }
        match self.cursor.current() {
            b'"' => self.string(start),
            b'\n' => Ok(self.newline(start)),
            b'a'..=b'z' | b'A'..=b'Z' | b'_' => Ok(self.identifier(start)),
            b'0'..=b'9' => self.number(start),
            b'.' if self.cursor.peek().is_ascii_digit() => self.number(start),
            b if is_symbol(b) => Ok(self.symbol(start)),
            _ => Err(self.unknown(start)),
        }
    }

    /// Build a token whose text is the lexeme from `start` to the cursor.
    #[inline]
    fn lexeme(&self, kind: TokenKind, start: Position) -> Token<'a> {
        Token {
            kind,
            text: self.cursor.slice_from(start.offset),
            span: Span::new(start.offset, self.cursor.offset()),
            pos: start,
        }
    }

    // ─── EOF & Newlines ─────────────────────────────────────────────

    fn eof(&self, start: Position) -> Token<'a> {
        Token {
            kind: TokenKind::EndOfStream,
            text: self.cursor.slice(start.offset, start.offset),
            span: Span::new(start.offset, start.offset),
            pos: start,
        }
    }

    /// Newline tokens have empty text; the span still covers the `\n`
    /// so the cursor moves past it.
    fn newline(&mut self, start: Position) -> Token<'a> {
        self.cursor.bump();
        Token {
            kind: TokenKind::Newline,
            text: self.cursor.slice(start.offset, start.offset),
            span: Span::new(start.offset, self.cursor.offset()),
            pos: start,
        }
    }

    // ─── Identifiers & Symbols ──────────────────────────────────────

    #[inline]
    fn identifier(&mut self, start: Position) -> Token<'a> {
        self.cursor.bump(); // first char already validated
        self.cursor.eat_while(is_ident_continue);
        self.lexeme(TokenKind::Identifier, start)
    }

    fn symbol(&mut self, start: Position) -> Token<'a> {
        self.cursor.bump();
        self.lexeme(TokenKind::Symbol, start)
    }

    // ─── Numbers ────────────────────────────────────────────────────

    /// Digits with at most one `.`, which may lead (`.5`) or trail (`1.`).
    fn number(&mut self, start: Position) -> Result<Token<'a>, ScanError> {
        let mut seen_dot = false;
        loop {
            match self.cursor.current() {
                b'0'..=b'9' => self.cursor.bump(),
                b'.' if !seen_dot => {
                    seen_dot = true;
                    self.cursor.bump();
                }
                b'.' => {
                    return Err(ScanError::new(
                        ScanErrorKind::MalformedNumber,
                        self.cursor.position(),
                        &self.cursor,
                    ));
                }
                _ => break,
            }
        }
        Ok(self.lexeme(TokenKind::Number, start))
    }

    // ─── Strings ────────────────────────────────────────────────────

    /// Scan to the closing `"`. A `\` escapes the byte after it, so `\"`
    /// does not terminate. Newlines are allowed inside the literal.
    fn string(&mut self, start: Position) -> Result<Token<'a>, ScanError> {
        self.cursor.bump(); // opening '"'
        let content_start = self.cursor.offset();
        loop {
            match self.cursor.skip_to_string_delim() {
                b'"' => {
                    let content_end = self.cursor.offset();
                    self.cursor.bump(); // closing '"'
                    return Ok(Token {
                        kind: TokenKind::String,
                        text: self.cursor.slice(content_start, content_end),
                        span: Span::new(start.offset, self.cursor.offset()),
                        pos: start,
                    });
                }
                b'\\' => {
                    self.cursor.bump(); // '\'
                    self.cursor.bump(); // escaped byte (no-op at EOF)
                }
                _ => {
                    return Err(ScanError::new(
                        ScanErrorKind::UnterminatedString,
                        start,
                        &self.cursor,
                    ));
                }
            }
        }
    }

    // ─── Errors ─────────────────────────────────────────────────────

    #[cold]
    fn unknown(&self, start: Position) -> ScanError {
        let found = self
            .cursor
            .current_char()
            .unwrap_or(char::from(self.cursor.current()));
        ScanError::new(
            ScanErrorKind::UnknownCharacter { found },
            start,
            &self.cursor,
        )
    }
}

/// Printable ASCII punctuation: `!`-`/`, `:`-`@`, `[`-`` ` ``, `{`-`~`.
///
/// `"`, `_`, and a `.` that starts a number are dispatched before this
/// check, so they never reach it.
#[inline]
pub fn is_symbol(b: u8) -> bool {
    matches!(b, b'!'..=b'/' | b':'..=b'@' | b'['..=b'`' | b'{'..=b'~')
}

#[inline]
fn is_ident_continue(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b == b'_'
}
