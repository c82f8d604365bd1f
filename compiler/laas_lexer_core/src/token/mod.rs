//! Token model: kinds, byte spans, and borrowed tokens.

use std::fmt;

use crate::cursor::Position;

/// Classification of a scanned token.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// Letter or underscore followed by letters, digits, or underscores.
    Identifier,
    /// Digits with at most one decimal point. Text is kept raw.
    Number,
    /// Double-quoted literal. Text excludes the quotes; escapes are not cooked.
    String,
    /// Single printable ASCII punctuation character.
    Symbol,
    /// A `\n` in the source. Zero-length text.
    Newline,
    /// Source exhausted. Sticky: every later scan returns it again.
    EndOfStream,
}

impl TokenKind {
    /// Human-readable name for diagnostics ("expected X, found Y").
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::String => "string",
            Self::Symbol => "symbol",
            Self::Newline => "newline",
            Self::EndOfStream => "end of stream",
        }
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Half-open byte range `[start, end)` of a raw lexeme in the source.
///
/// Covers the quotes of a string literal and the `\n` of a newline, so
/// spans of consecutive tokens are separated only by skipped whitespace.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: u32,
    pub end: u32,
}

impl Span {
    #[inline]
    pub const fn new(start: u32, end: u32) -> Self {
        Self { start, end }
    }

    #[inline]
    pub const fn len(self) -> u32 {
        self.end - self.start
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.start == self.end
    }
}

/// A token: a view into the source plus its classification.
///
/// Borrows from the source text; never owns or copies it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'a> {
    pub kind: TokenKind,
    /// Token payload. Quotes are stripped from strings; newlines and
    /// end-of-stream have empty text.
    pub text: &'a str,
    /// Raw lexeme range in the source.
    pub span: Span,
    /// Position of the first byte of the lexeme.
    pub pos: Position,
}

impl Token<'_> {
    /// `false` once the scanner has reached the end of the source.
    #[inline]
    pub fn has_more(&self) -> bool {
        self.kind != TokenKind::EndOfStream
    }

    #[inline]
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfStream
    }

    /// Check for a specific punctuation symbol.
    #[inline]
    pub fn is_symbol(&self, text: &str) -> bool {
        self.kind == TokenKind::Symbol && self.text == text
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::Newline | TokenKind::EndOfStream => f.write_str(self.kind.display_name()),
            TokenKind::String => write!(f, "{} \"{}\"", self.kind, self.text),
            _ => write!(f, "{} `{}`", self.kind, self.text),
        }
    }
}
