//! Iterator form of the primary consumption loop.

use std::iter::FusedIterator;

use laas_lexer_core::{ScanError, Token};

use crate::Lexer;

/// Yields tokens until end-of-stream or the first scan error.
///
/// The `EndOfStream` token itself is not yielded. After an error the
/// iterator is exhausted.
pub struct Tokens<'l, 'a, U> {
    lexer: &'l mut Lexer<'a, U>,
    ignore_newline: bool,
    done: bool,
}

impl<'a, U> Lexer<'a, U> {
    /// Borrow the lexer as an iterator over its remaining tokens.
    pub fn tokens(&mut self, ignore_newline: bool) -> Tokens<'_, 'a, U> {
        Tokens {
            lexer: self,
            ignore_newline,
            done: false,
        }
    }
}

impl<'a, U> Iterator for Tokens<'_, 'a, U> {
    type Item = Result<Token<'a>, ScanError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.lexer.next_token(self.ignore_newline) {
            Ok(token) if token.has_more() => Some(Ok(token)),
            Ok(_) => {
                self.done = true;
                None
            }
            Err(err) => {
                self.done = true;
                Some(Err(err))
            }
        }
    }
}

impl<U> FusedIterator for Tokens<'_, '_, U> {}

/// Scan all of `source`, surfacing Newline tokens.
///
/// The returned tokens borrow from `source`; the final `EndOfStream` is
/// not included.
pub fn tokenize(source: &str) -> Result<Vec<Token<'_>>, ScanError> {
    let mut lexer = Lexer::new(source);
    lexer.tokens(false).collect()
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests;
