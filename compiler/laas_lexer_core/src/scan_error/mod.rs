//! Fatal scanning errors.
//!
//! Malformed input cannot be repaired in place, so the scanner stops at the
//! first problem and reports it with the position and the source line it
//! occurred on. Errors are built on the cold path; the happy path never
//! allocates.

use crate::cursor::{Cursor, Position};

/// What went wrong while scanning.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ScanErrorKind {
    /// End of source reached before the closing `"`.
    #[error("unterminated string")]
    UnterminatedString,
    /// A second `.` inside a number (`1.2.3`).
    #[error("two dots in a float")]
    MalformedNumber,
    /// A character that starts no token.
    #[error("unknown token {found:?}")]
    UnknownCharacter { found: char },
}

/// A fatal scanning error with its location.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{pos}: {kind}")]
pub struct ScanError {
    pub kind: ScanErrorKind,
    /// Where the problem starts: the opening quote of an unterminated
    /// string, the second dot of a malformed number, or the unknown
    /// character itself.
    pub pos: Position,
    /// The source line containing `pos`, without its terminator.
    pub line_text: String,
    /// Byte offset of `line_text` in the source.
    line_start: u32,
}

impl ScanError {
    #[cold]
    #[inline(never)]
    pub(crate) fn new(kind: ScanErrorKind, pos: Position, cursor: &Cursor<'_>) -> Self {
        let (line_start, line_text) = cursor.line_at(pos.offset);
        Self {
            kind,
            pos,
            line_text: line_text.to_owned(),
            line_start,
        }
    }

    /// Render the error with its source line and a caret under the
    /// offending position:
    ///
    /// ```text
    /// 2:7: unterminated string
    ///   key "value
    ///       ^
    /// ```
    pub fn render(&self) -> String {
        let caret_at = (self.pos.offset.saturating_sub(self.line_start)) as usize;
        let indent: String = self
            .line_text
            .get(..caret_at)
            .unwrap_or_default()
            .chars()
            .map(|c| if c == '\t' { '\t' } else { ' ' })
            .collect();
        format!("{self}\n  {}\n  {indent}^", self.line_text)
    }
}
