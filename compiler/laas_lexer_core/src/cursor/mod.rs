//! Position-tracking cursor over a borrowed source string.
//!
//! The cursor advances through the source byte-by-byte and keeps the
//! human-facing line/column counters up to date as it goes. It never copies
//! or mutates the source: every extracted token text is a slice of the
//! original `&str`.
//!
//! # Column Accounting
//!
//! - `\n` increments the line and resets the column to 1.
//! - `\t` advances the column by the configured tab width (4 by default).
//! - UTF-8 continuation bytes (`0b10xx_xxxx`) do not advance the column, so
//!   a multi-byte character counts as one column.
//! - Every other byte advances the column by 1.
//!
//! Reading past the end of the source yields `0x00`; use
//! [`is_eof()`](Cursor::is_eof) to distinguish EOF from an interior null.

use std::fmt;

/// A location in the source: byte offset plus 1-based line and column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    /// Byte offset from the start of the source (0-based).
    pub offset: u32,
    /// Line number (1-based).
    pub line: u32,
    /// Column number (1-based).
    pub column: u32,
}

impl Position {
    /// The origin: offset 0, line 1, column 1.
    pub const START: Position = Position {
        offset: 0,
        line: 1,
        column: 1,
    };
}

impl Default for Position {
    fn default() -> Self {
        Self::START
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Cursor over a borrowed source string.
///
/// The cursor is [`Copy`], so a snapshot for lookahead is a plain copy and
/// restoring it is an assignment.
#[derive(Clone, Copy, Debug)]
pub struct Cursor<'a> {
    source: &'a str,
    /// Scannable length. Saturates at `u32::MAX` for sources over 4 GiB.
    len: u32,
    pos: Position,
    tab_width: u32,
}

/// Size assertion: Cursor should be <= 40 bytes on 64-bit platforms.
/// &str = 16 (fat pointer), u32 = 4, Position = 12, u32 = 4 => 36, padded to 40.
const _: () = assert!(std::mem::size_of::<Cursor<'static>>() <= 40);

impl<'a> Cursor<'a> {
    /// Create a cursor at the origin of `source`.
    pub fn new(source: &'a str, tab_width: u32) -> Self {
        Self {
            source,
            len: u32::try_from(source.len()).unwrap_or(u32::MAX),
            pos: Position::START,
            tab_width,
        }
    }

    /// Returns the byte at the current position, or `0x00` at EOF.
    #[inline]
    pub fn current(&self) -> u8 {
        self.byte_at(self.pos.offset)
    }

    /// Returns the byte one position ahead of current, or `0x00` past EOF.
    #[inline]
    pub fn peek(&self) -> u8 {
        self.byte_at(self.pos.offset.saturating_add(1))
    }

    #[inline]
    fn byte_at(&self, offset: u32) -> u8 {
        if offset < self.len {
            self.source.as_bytes()[offset as usize]
        } else {
            0
        }
    }

    /// Returns the full character starting at the current position.
    ///
    /// `None` at EOF, or if the cursor sits inside a multi-byte character
    /// (which the scanner never does at a token boundary).
    pub fn current_char(&self) -> Option<char> {
        if self.is_eof() {
            return None;
        }
        self.source.get(self.pos.offset as usize..)?.chars().next()
    }

    /// Returns `true` if the cursor has consumed all of the source.
    #[inline]
    pub fn is_eof(&self) -> bool {
        self.pos.offset >= self.len
    }

    /// Current position (offset, line, column).
    #[inline]
    pub fn position(&self) -> Position {
        self.pos
    }

    /// Current byte offset in the source.
    #[inline]
    pub fn offset(&self) -> u32 {
        self.pos.offset
    }

    /// Length of the scannable source in bytes.
    #[inline]
    pub fn source_len(&self) -> u32 {
        self.len
    }

    /// The source this cursor reads from.
    pub fn source(&self) -> &'a str {
        self.source
    }

    /// Columns a single byte occupies.
    #[inline]
    fn column_width(&self, byte: u8) -> u32 {
        match byte {
            b'\t' => self.tab_width,
            0x80..=0xBF => 0,
            _ => 1,
        }
    }

    /// Advance the cursor by one byte, updating line and column.
    ///
    /// No-op at EOF.
    #[inline]
    pub fn bump(&mut self) {
        if self.is_eof() {
            return;
        }
        let b = self.current();
        if b == b'\n' {
            self.pos.line += 1;
            self.pos.column = 1;
        } else {
            self.pos.column += self.column_width(b);
        }
        self.pos.offset += 1;
    }

    /// Advance the cursor by `n` bytes in one step, clamped to EOF.
    ///
    /// Newlines in the skipped range are counted with `memchr`, and the
    /// column is recomputed from the bytes after the last one.
    pub fn advance_n(&mut self, n: u32) {
        let start = self.pos.offset;
        let end = start.saturating_add(n).min(self.len);
        let chunk = &self.source.as_bytes()[start as usize..end as usize];
        match memchr::memrchr(b'\n', chunk) {
            Some(last) => {
                let newlines = memchr::memchr_iter(b'\n', chunk).count();
                self.pos.line += u32::try_from(newlines).unwrap_or(u32::MAX);
                self.pos.column = 1 + self.columns_of(&chunk[last + 1..]);
            }
            None => self.pos.column += self.columns_of(chunk),
        }
        self.pos.offset = end;
    }

    fn columns_of(&self, bytes: &[u8]) -> u32 {
        bytes
            .iter()
            .fold(0u32, |acc, &b| acc.saturating_add(self.column_width(b)))
    }

    /// Advance while `pred` returns `true` for the current byte.
    ///
    /// Stops at EOF regardless of `pred`.
    #[inline]
    pub fn eat_while(&mut self, pred: impl Fn(u8) -> bool) {
        while !self.is_eof() && pred(self.current()) {
            self.bump();
        }
    }

    /// Advance past horizontal whitespace: space, tab, and carriage return.
    ///
    /// Newlines are not whitespace here; they are tokens.
    #[inline]
    pub fn eat_whitespace(&mut self) {
        self.eat_while(|b| matches!(b, b' ' | b'\t' | b'\r'));
    }

    /// Advance past ordinary string content to the next `"` or `\`.
    /// Returns the byte found, or 0 for EOF.
    ///
    /// Uses `memchr2` to find the delimiter, then updates line/column over
    /// the skipped content in one pass.
    pub fn skip_to_string_delim(&mut self) -> u8 {
        let remaining = &self.source.as_bytes()[self.pos.offset as usize..self.len as usize];
        match memchr::memchr2(b'"', b'\\', remaining) {
            Some(off) => {
                self.advance_n(u32::try_from(off).unwrap_or(u32::MAX));
                self.current()
            }
            None => {
                self.advance_n(self.len - self.pos.offset);
                0
            }
        }
    }

    /// Extract a source substring as `&str`.
    ///
    /// # Contract
    ///
    /// `start..end` must fall within the source and on character boundaries.
    /// The scanner only slices at ASCII delimiters, which always are.
    /// Out-of-contract ranges yield an empty string.
    pub fn slice(&self, start: u32, end: u32) -> &'a str {
        debug_assert!(start <= end, "slice start {start} exceeds end {end}");
        debug_assert!(
            end <= self.len,
            "slice end {end} exceeds source length {}",
            self.len
        );
        self.source
            .get(start as usize..end as usize)
            .unwrap_or_default()
    }

    /// Extract a source substring from `start` to the current position.
    pub fn slice_from(&self, start: u32) -> &'a str {
        self.slice(start, self.pos.offset)
    }

    /// Returns the full source line containing `offset`, without its
    /// line terminator, together with the byte offset where it starts.
    pub fn line_at(&self, offset: u32) -> (u32, &'a str) {
        let bytes = &self.source.as_bytes()[..self.len as usize];
        let offset = (offset as usize).min(bytes.len());
        let start = memchr::memrchr(b'\n', &bytes[..offset]).map_or(0, |i| i + 1);
        let end = memchr::memchr(b'\n', &bytes[offset..]).map_or(bytes.len(), |i| offset + i);
        let line = self.source.get(start..end).unwrap_or_default();
        let line = line.strip_suffix('\r').unwrap_or(line);
        (u32::try_from(start).unwrap_or(u32::MAX), line)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
