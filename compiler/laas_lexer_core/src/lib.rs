//! Zero-allocation scanner core for laas.
//!
//! Turns borrowed text into a stream of [`Token`]s that are views into the
//! original buffer. The scanner never copies or mutates the source, never
//! allocates on the happy path, and keeps the whole of its state in a
//! [`Copy`] cursor, so lookahead is a plain copy.
//!
//! ```
//! use laas_lexer_core::{Scanner, TokenKind};
//!
//! let mut scanner = Scanner::new("width: 42.5");
//! let kinds: Vec<TokenKind> = std::iter::from_fn(|| {
//!     let token = scanner.next_token(false).ok()?;
//!     token.has_more().then_some(token.kind)
//! })
//! .collect();
//! assert_eq!(kinds, [TokenKind::Identifier, TokenKind::Symbol, TokenKind::Number]);
//! ```
//!
//! The token stream helpers (`peek`, `expect_*`, user data) live in the
//! `laas_lexer` crate; this crate has no laas dependencies.

mod config;
mod cursor;
mod scan_error;
mod scanner;
mod token;

pub use config::{ScanConfig, DEFAULT_TAB_WIDTH};
pub use cursor::{Cursor, Position};
pub use scan_error::{ScanError, ScanErrorKind};
pub use scanner::{is_symbol, Scanner};
pub use token::{Span, Token, TokenKind};
